//! Top-level entry point for running the charter as a native window.

use std::sync::mpsc::Receiver;

use eframe::egui;

use crate::config::{ChartConfig, ConfigError};
use crate::sink::StreamEvent;

use super::ChartApp;

/// Room around the canvas for the action and status bars.
const CHROME: egui::Vec2 = egui::vec2(24.0, 90.0);

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("window error: {0}")]
    Eframe(#[from] eframe::Error),
}

/// Open the charter window and block until it is closed.
///
/// Lines arrive on `rx` (see [`spawn_line_reader`](crate::sink::spawn_line_reader)).
pub fn run_chart(rx: Receiver<StreamEvent>, mut cfg: ChartConfig) -> Result<(), RunError> {
    let session = cfg.settings.build_session()?;
    let bounds = *session.bounds();
    let app = ChartApp::new(session, rx);

    let title = cfg.settings.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Size the window to fit the canvas unless the caller chose a size.
    if opts.viewport.inner_size.is_none() {
        let canvas = egui::vec2(bounds.canvas_width() as f32, bounds.canvas_height() as f32);
        opts.viewport = opts.viewport.clone().with_inner_size(canvas + CHROME);
    }

    log::info!("starting charter window {title:?}");
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))?;
    Ok(())
}
