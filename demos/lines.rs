//! Two annotated line series on one axis, a bare series on a second axis.
//!
//! Click a point to inspect it; use the left/right arrow keys to walk the
//! selected series, Escape to clear.

use annoplot::{AxisId, FigureAnnotator, Series};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let n = 60;
    let sine: Vec<[f64; 2]> = (0..n)
        .map(|i| {
            let x = i as f64 * 0.2;
            [x, x.sin()]
        })
        .collect();
    let labels: Vec<String> = (0..n).map(|i| format!("sample #{}", i)).collect();
    let cosine: Vec<[f64; 2]> = (0..n)
        .map(|i| {
            let x = i as f64 * 0.2;
            [x, x.cos()]
        })
        .collect();

    let mut fig = FigureAnnotator::new();
    fig.register_series(AxisId(0), Series::with_annotations("sine", sine, labels)?)?;
    fig.register_series(AxisId(0), Series::new("cosine", cosine))?;
    fig.register_series(
        AxisId(1),
        Series::from_ys("ramp", &[1.0, 4.0, 2.0, 8.0, 5.0, 7.0]),
    )?;

    annoplot::run_figure("annoplot - lines", fig)?;
    Ok(())
}
