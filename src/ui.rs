//! egui glue: renders registered axes and wires pointer and keyboard signals
//! into the interaction controller.
//!
//! Chart construction is a thin pass-through over egui_plot primitives
//! (lines, polygons, bar charts, box plots); this module's real job is the
//! event wiring and the overlay.

use egui::Color32;
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Line, Plot, Points, Polygon};

use crate::controller::Direction;
use crate::data::{AxisData, GroupShape};
use crate::figure::{AxisId, FigureAnnotator};
use crate::index::AxisBounds;
use crate::overlay;

/// Per-frame interaction snapshot of one rendered axis.
struct AxisFrame {
    id: AxisId,
    clicked: bool,
    hovered: bool,
    pointer: Option<[f64; 2]>,
    bounds: AxisBounds,
}

/// Immediate-mode view of a figure's registered axes.
///
/// Renders one plot per axis, draws the chart for the registered kind, feeds
/// clicks and key presses into the figure's controller, and overlays the
/// current selection.
pub struct FigureView<'a> {
    annotator: &'a mut FigureAnnotator,
    plot_height: f32,
}

impl<'a> FigureView<'a> {
    pub fn new(annotator: &'a mut FigureAnnotator) -> Self {
        Self {
            annotator,
            plot_height: 0.0,
        }
    }

    /// Fixed height per axis plot; zero divides the available height evenly.
    pub fn plot_height(mut self, height: f32) -> Self {
        self.plot_height = height;
        self
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        let ids = self.annotator.axis_ids();
        if ids.is_empty() {
            return;
        }
        let height = if self.plot_height > 0.0 {
            self.plot_height
        } else {
            (ui.available_height() / ids.len() as f32).max(120.0)
        };

        let mut frames = Vec::with_capacity(ids.len());
        for id in ids {
            frames.push(self.show_axis(ui, id, height));
        }

        // Pointer dispatch: a click on an axis selects there; a click inside
        // the figure but outside every axis idles the previous selection.
        if let Some(frame) = frames.iter().find(|f| f.clicked) {
            if let Some(pos) = frame.pointer {
                self.annotator.on_click(Some(frame.id), pos, frame.bounds);
            }
        } else {
            let outside_click = ui.input(|i| {
                i.pointer.any_click()
                    && i.pointer
                        .interact_pos()
                        .is_some_and(|p| ui.min_rect().contains(p))
            }) && frames.iter().all(|f| !f.hovered);
            if outside_click {
                self.annotator.on_click(None, [0.0, 0.0], frames[0].bounds);
            }
        }

        // Keyboard dispatch, only while the cursor is inside an axis.
        if let Some(frame) = frames.iter().find(|f| f.hovered) {
            let (prev, next, clear) = ui.input(|i| {
                (
                    i.key_pressed(egui::Key::ArrowLeft),
                    i.key_pressed(egui::Key::ArrowRight),
                    i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Delete),
                )
            });
            if prev {
                self.annotator.on_key(frame.id, Direction::Previous);
            }
            if next {
                self.annotator.on_key(frame.id, Direction::Next);
            }
            if clear {
                self.annotator.on_clear(frame.id);
            }
        }
    }

    fn show_axis(&mut self, ui: &mut egui::Ui, id: AxisId, height: f32) -> AxisFrame {
        let annotator = &*self.annotator;
        let data = annotator
            .axis_data(id)
            .expect("axis id came from the registry");
        let style = annotator.style_for(id);
        let selection = annotator.selection().filter(|s| s.axis == id);

        let response = Plot::new(("annotated_axis", id.0))
            .height(height)
            .allow_scroll(false)
            .allow_boxed_zoom(true)
            .show(ui, |plot_ui| {
                draw_chart(plot_ui, data);
                let b = plot_ui.plot_bounds();
                let bounds = AxisBounds::new(
                    *b.range_x().start(),
                    *b.range_x().end(),
                    *b.range_y().start(),
                    *b.range_y().end(),
                );
                if let Some(sel) = selection {
                    overlay::draw(plot_ui, &sel.hit, bounds, style);
                }
                bounds
            });

        let pointer = response.response.interact_pointer_pos().map(|sp| {
            let p = response.transform.value_from_position(sp);
            [p.x, p.y]
        });
        AxisFrame {
            id,
            clicked: response.response.clicked(),
            hovered: response.response.hovered(),
            pointer,
            bounds: response.inner,
        }
    }
}

/// Render the registered chart kind with egui_plot primitives.
fn draw_chart(plot_ui: &mut egui_plot::PlotUi, data: &AxisData) {
    match data {
        AxisData::Series(series) => {
            for (i, s) in series.iter().enumerate() {
                let color = series_color(i);
                let pts: Vec<[f64; 2]> = s.points().to_vec();
                plot_ui.line(Line::new(s.name(), pts.clone()).color(color).width(1.5));
                plot_ui.points(Points::new("", pts).radius(2.5).color(color));
            }
        }
        AxisData::Grid(grid) => {
            let (lo, hi) = grid.value_range();
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    let corners = vec![
                        [col as f64 - 0.5, row as f64 - 0.5],
                        [col as f64 + 0.5, row as f64 - 0.5],
                        [col as f64 + 0.5, row as f64 + 0.5],
                        [col as f64 - 0.5, row as f64 + 0.5],
                    ];
                    plot_ui.polygon(
                        Polygon::new("", corners)
                            .fill_color(value_color(grid.value(row, col), lo, hi)),
                    );
                }
            }
        }
        AxisData::Categories(groups) => {
            let bars: Vec<Bar> = groups
                .iter()
                .filter(|g| g.shape() == GroupShape::Bar)
                .map(|g| {
                    let (start, end) = g.x_range();
                    Bar::new(g.center(), g.stats().count as f64).width(end - start)
                })
                .collect();
            if !bars.is_empty() {
                plot_ui.bar_chart(BarChart::new("histogram", bars).color(series_color(0)));
            }

            let boxes: Vec<BoxElem> = groups
                .iter()
                .filter(|g| g.shape() == GroupShape::Box && g.stats().count > 0)
                .map(|g| {
                    let s = g.stats();
                    let (start, end) = g.x_range();
                    BoxElem::new(
                        g.center(),
                        BoxSpread::new(s.min, s.q1, s.median, s.q3, s.max),
                    )
                    .name(g.label())
                    .box_width((end - start) * 0.8)
                })
                .collect();
            if !boxes.is_empty() {
                plot_ui.box_plot(BoxPlot::new("boxplot", boxes));
            }
        }
    }
}

/// Distinct line colors allocated by series registration index.
fn series_color(index: usize) -> Color32 {
    const PALETTE: [Color32; 10] = [
        Color32::from_rgb(31, 119, 180),
        Color32::from_rgb(255, 127, 14),
        Color32::from_rgb(44, 160, 44),
        Color32::from_rgb(214, 39, 40),
        Color32::from_rgb(148, 103, 189),
        Color32::from_rgb(140, 86, 75),
        Color32::from_rgb(227, 119, 194),
        Color32::from_rgb(127, 127, 127),
        Color32::from_rgb(188, 189, 34),
        Color32::from_rgb(23, 190, 207),
    ];
    PALETTE[index % PALETTE.len()]
}

/// Grayscale ramp for grid cell values.
fn value_color(value: f64, lo: f64, hi: f64) -> Color32 {
    let t = if hi > lo {
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let level = (40.0 + t * 200.0) as u8;
    Color32::from_gray(level)
}
