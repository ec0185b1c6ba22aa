//! Top-level entry point for running the chart as a native window.

use eframe::egui;

use crate::config::CensusPlotConfig;
use crate::data::records::CensusRecord;

use super::CensusPlotApp;

/// Extra vertical room for the top bar and the axis-label strip, beyond the
/// chart canvas itself.
const CHROME_HEIGHT: f32 = 100.0;

/// Launch the chart application in a native window.
///
/// Builds a [`CensusPlotApp`] over the loaded records, sizes the window to
/// the configured chart geometry unless the caller provided native options,
/// and enters the eframe event loop. The call blocks until the window is
/// closed.
pub fn run_censusplot(
    records: Vec<CensusRecord>,
    mut cfg: CensusPlotConfig,
) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.inner_size.is_none() {
        let size = egui::vec2(
            cfg.geometry.canvas_width as f32,
            cfg.geometry.canvas_height as f32 + CHROME_HEIGHT,
        );
        opts.viewport = opts.viewport.clone().with_inner_size(size);
    }

    let app = CensusPlotApp::new(records, cfg);
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
