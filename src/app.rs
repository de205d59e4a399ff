//! Native-window entry point for showing an annotated figure.
//!
//! [`run_figure`] is the convenience API for standalone use: it opens an
//! eframe window, renders the figure's axes each frame, and blocks until the
//! window is closed. Closing the window discards all controller state for
//! the figure.

use eframe::egui;

use crate::figure::FigureAnnotator;
use crate::ui::FigureView;

struct FigureApp {
    annotator: FigureAnnotator,
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            FigureView::new(&mut self.annotator).show(ui);
        });
    }
}

/// Launch a native window showing the figure's registered axes with
/// annotation wired up. Blocks until the window is closed.
pub fn run_figure(title: &str, annotator: FigureAnnotator) -> eframe::Result<()> {
    run_figure_with_options(title, annotator, eframe::NativeOptions::default())
}

/// [`run_figure`] with explicit eframe window options.
pub fn run_figure_with_options(
    title: &str,
    annotator: FigureAnnotator,
    mut options: eframe::NativeOptions,
) -> eframe::Result<()> {
    if options.viewport.inner_size.is_none() {
        options.viewport = options
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1000.0, 700.0));
    }
    eframe::run_native(
        title,
        options,
        Box::new(|_cc| Ok(Box::new(FigureApp { annotator }))),
    )
}
