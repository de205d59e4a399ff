//! An image-style grid. Clicking annotates the nearest cell with its row,
//! column and value.

use annoplot::{AxisId, FigureAnnotator, Grid};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let rows = 12;
    let cols = 16;
    let values: Vec<f64> = (0..rows * cols)
        .map(|i| {
            let r = (i / cols) as f64;
            let c = (i % cols) as f64;
            (r * 0.7).sin() * (c * 0.5).cos()
        })
        .collect();

    let mut fig = FigureAnnotator::new();
    fig.register_grid(AxisId(0), Grid::new(rows, cols, values)?)?;

    annoplot::run_figure("annoplot - heatmap", fig)?;
    Ok(())
}
