//! Top-level entry point for running the scatter view as a native window.

use eframe::egui;
use log::error;

use crate::config::ScatterConfig;
use crate::data::dataset::Dataset;

use super::scatter_app::ScatterApp;

/// Launch the scatter view over `dataset` in a native window.
///
/// The engine is bound before the window opens, so an empty dataset or an
/// invalid configuration is reported without showing a blank window.
/// The call blocks until the window is closed.
pub fn run_scatter(dataset: Dataset, mut cfg: ScatterConfig) -> eframe::Result<()> {
    let app = ScatterApp::new(dataset, &cfg).map_err(|e| {
        error!("cannot start scatter view: {e}");
        eframe::Error::AppCreation(Box::new(e))
    })?;

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1200.0, 800.0));
    }
    if opts.viewport.title.is_none() {
        opts.viewport = opts.viewport.clone().with_title(title.clone());
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
