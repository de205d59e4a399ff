//! Overlay artifacts for the current selection: a square marker on the
//! resolved item and a text box beside it.
//!
//! The text box is offset by 1/50th of the visible axis range and flipped
//! toward the plot centre near the top or right edge so it is not clipped.

use egui::{Align2, Color32};
use egui_plot::{MarkerShape, PlotPoint, Points, Text};
use serde::{Deserialize, Serialize};

use crate::index::{AxisBounds, Hit};

/// Visual styling for the annotation overlay: marker face color plus the
/// text box face and edge colors.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub marker_color: Color32,
    pub box_fill: Color32,
    pub box_edge: Color32,
    pub marker_radius: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            marker_color: Color32::RED,
            box_fill: Color32::WHITE,
            box_edge: Color32::BLACK,
            marker_radius: 5.0,
        }
    }
}

/// Serializable mirror of [`OverlayStyle`]; `Color32` does not derive serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayStyleSerde {
    pub marker_rgba: [u8; 4],
    pub box_fill_rgba: [u8; 4],
    pub box_edge_rgba: [u8; 4],
    pub marker_radius: f32,
}

impl From<&OverlayStyle> for OverlayStyleSerde {
    fn from(s: &OverlayStyle) -> Self {
        let rgba = |c: Color32| [c.r(), c.g(), c.b(), c.a()];
        Self {
            marker_rgba: rgba(s.marker_color),
            box_fill_rgba: rgba(s.box_fill),
            box_edge_rgba: rgba(s.box_edge),
            marker_radius: s.marker_radius,
        }
    }
}

impl From<OverlayStyleSerde> for OverlayStyle {
    fn from(s: OverlayStyleSerde) -> Self {
        let color = |c: [u8; 4]| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]);
        Self {
            marker_color: color(s.marker_rgba),
            box_fill: color(s.box_fill_rgba),
            box_edge: color(s.box_edge_rgba),
            marker_radius: s.marker_radius,
        }
    }
}

/// The text shown in the annotation box for a resolved item.
pub fn label_text(hit: &Hit) -> String {
    match hit {
        Hit::Point { x, y, annotation, .. } => match annotation {
            Some(a) => format!("{:.4}, {:.4}\n{}", x, y, a),
            None => format!("{:.4}, {:.4}", x, y),
        },
        Hit::Cell { row, col, value } => format!("{}, {}\n{:.4}", row, col, value),
        Hit::Group { label, stats, .. } => {
            if stats.count == 0 {
                format!("{}\ncount: 0", label)
            } else {
                format!(
                    "{}\ncount: {}\nmean: {:.4}\nmedian: {:.4}",
                    label, stats.count, stats.mean, stats.median
                )
            }
        }
    }
}

/// Text-box base position and anchor for a marker position, flipped away
/// from the nearest plot edge.
pub fn text_anchor(pos: [f64; 2], bounds: AxisBounds) -> (PlotPoint, Align2) {
    let dx = bounds.width() / 50.0;
    let dy = bounds.height() / 50.0;
    let near_right = pos[0] + dx > bounds.x_max - bounds.width() * 0.25;
    let near_top = pos[1] + dy > bounds.y_max - bounds.height() * 0.25;
    let (x, halign) = if near_right {
        (pos[0] - dx, egui::Align::Max)
    } else {
        (pos[0] + dx, egui::Align::Min)
    };
    let (y, valign) = if near_top {
        (pos[1] - dy, egui::Align::Min)
    } else {
        (pos[1] + dy, egui::Align::Max)
    };
    (PlotPoint::new(x, y), Align2([halign, valign]))
}

/// Draw the selection marker and text box into the plot.
pub fn draw(plot_ui: &mut egui_plot::PlotUi, hit: &Hit, bounds: AxisBounds, style: &OverlayStyle) {
    let pos = hit.marker_position();
    plot_ui.points(
        Points::new("annotation", vec![pos])
            .shape(MarkerShape::Square)
            .radius(style.marker_radius)
            .color(style.marker_color),
    );

    let (base, anchor) = text_anchor(pos, bounds);
    let egui_style = egui::Style::default();
    let mut job = egui::text::LayoutJob::default();
    egui::RichText::new(label_text(hit))
        .color(style.box_edge)
        .background_color(style.box_fill)
        .append_to(
            &mut job,
            &egui_style,
            egui::FontSelection::Default,
            egui::Align::LEFT,
        );
    plot_ui.text(Text::new("annotation", base, job).anchor(anchor));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GroupStats;

    fn bounds() -> AxisBounds {
        AxisBounds::new(0.0, 10.0, 0.0, 10.0)
    }

    #[test]
    fn point_label_includes_annotation() {
        let hit = Hit::Point {
            series: 0,
            index: 1,
            x: 1.0,
            y: 2.0,
            annotation: Some("peak".into()),
        };
        assert_eq!(label_text(&hit), "1.0000, 2.0000\npeak");
    }

    #[test]
    fn cell_label_shows_indices_and_value() {
        let hit = Hit::Cell {
            row: 3,
            col: 4,
            value: 1.5,
        };
        assert_eq!(label_text(&hit), "3, 4\n1.5000");
    }

    #[test]
    fn empty_group_label_omits_nan_stats() {
        let hit = Hit::Group {
            index: 0,
            label: "bin".into(),
            anchor: [0.5, 0.0],
            stats: GroupStats {
                count: 0,
                min: f64::NAN,
                max: f64::NAN,
                mean: f64::NAN,
                median: f64::NAN,
                q1: f64::NAN,
                q3: f64::NAN,
            },
        };
        assert_eq!(label_text(&hit), "bin\ncount: 0");
    }

    #[test]
    fn text_flips_away_from_top_right_corner() {
        let (base, anchor) = text_anchor([1.0, 1.0], bounds());
        assert_eq!(anchor, Align2::LEFT_BOTTOM);
        assert!(base.x > 1.0 && base.y > 1.0);

        let (base, anchor) = text_anchor([9.8, 9.8], bounds());
        assert_eq!(anchor, Align2::RIGHT_TOP);
        assert!(base.x < 9.8 && base.y < 9.8);
    }

    #[test]
    fn style_serde_mirror_round_trips() {
        let style = OverlayStyle {
            marker_color: Color32::from_rgb(10, 20, 30),
            box_fill: Color32::from_rgb(40, 50, 60),
            box_edge: Color32::from_rgb(70, 80, 90),
            marker_radius: 3.5,
        };
        let json = serde_json::to_string(&OverlayStyleSerde::from(&style)).unwrap();
        let back: OverlayStyle = serde_json::from_str::<OverlayStyleSerde>(&json).unwrap().into();
        assert_eq!(back, style);
    }
}
