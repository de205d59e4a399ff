//! Box-and-whisker groups with a custom overlay style.

use annoplot::{AxisId, CategoryGroup, FigureAnnotator, OverlayStyle};
use egui::Color32;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let groups = vec![
        CategoryGroup::new("control", (0.0, 1.0), &[4.1, 4.8, 5.0, 5.3, 5.9, 6.4]),
        CategoryGroup::new("treated", (1.0, 2.0), &[5.2, 6.1, 6.6, 7.0, 7.4, 8.9]),
        CategoryGroup::new("placebo", (2.0, 3.0), &[3.9, 4.4, 5.1, 5.2, 5.8, 6.0]),
    ];

    let style = OverlayStyle {
        marker_color: Color32::from_rgb(255, 127, 14),
        box_fill: Color32::from_rgb(30, 30, 30),
        box_edge: Color32::WHITE,
        ..OverlayStyle::default()
    };

    let mut fig = FigureAnnotator::with_style(style);
    fig.register_categories(AxisId(0), groups)?;

    annoplot::run_figure("annoplot - boxplot", fig)?;
    Ok(())
}
