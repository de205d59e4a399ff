//! A histogram built from raw samples. Clicking a bar annotates its bin
//! edges and count.

use annoplot::{AxisId, CategoryGroup, FigureAnnotator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A crude bell-ish shape without pulling in an RNG crate.
    let samples: Vec<f64> = (0..500)
        .map(|i| {
            let t = i as f64 * 0.618_033_988_749;
            (t.sin() + (t * 1.7).sin() + (t * 2.3).sin()) / 3.0
        })
        .collect();

    let mut fig = FigureAnnotator::new();
    fig.register_categories(AxisId(0), CategoryGroup::histogram(&samples, 20))?;

    annoplot::run_figure("annoplot - histogram", fig)?;
    Ok(())
}
