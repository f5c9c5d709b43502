//! Configuration for the temperature charter.
//!
//! [`ChartSettings`] is the part that can live in a JSON settings file;
//! [`ChartConfig`] adds the runtime-only pieces (window options) and is what
//! [`run_chart`](crate::run_chart) consumes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::bounds::{BoundsError, BoundsSettings, LogicalBounds};
use crate::data::guides::{default_guides, GuideLine};
use crate::data::palette::{color_from_rgb, color_to_rgb, ColorCursor, DEFAULT_PALETTE};
use crate::data::session::{PlotSession, SavePolicy};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid bounds: {0}")]
    Bounds(#[from] BoundsError),
}

// ─────────────────────────────────────────────────────────────────────────────
// ChartSettings – serializable part
// ─────────────────────────────────────────────────────────────────────────────

/// Settings that may be stored on disk. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Native window title.
    pub title: String,
    /// Time/temperature window and canvas size.
    pub bounds: BoundsSettings,
    /// Horizontal reference lines drawn behind the data.
    pub guides: Vec<GuideLine>,
    /// Overlay colors (RGB), used in order and wrapped.
    pub palette: Vec<[u8; 3]>,
    /// Cursor handling on save.
    pub save_policy: SavePolicy,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            title: "Temperature Profile Charter".to_string(),
            bounds: BoundsSettings::default(),
            guides: default_guides(),
            palette: DEFAULT_PALETTE.iter().copied().map(color_to_rgb).collect(),
            save_policy: SavePolicy::default(),
        }
    }
}

impl ChartSettings {
    /// Load settings from a JSON file and validate the bounds.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let settings: ChartSettings = serde_json::from_str(&text)?;
        LogicalBounds::new(settings.bounds)?;
        Ok(settings)
    }

    /// Write settings as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Build a fresh plot session from these settings.
    pub fn build_session(&self) -> Result<PlotSession, ConfigError> {
        let bounds = LogicalBounds::new(self.bounds)?;
        let colors = ColorCursor::new(self.palette.iter().copied().map(color_from_rgb).collect());
        Ok(PlotSession::new(bounds)
            .with_guides(self.guides.clone())
            .with_colors(colors)
            .with_save_policy(self.save_policy))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ChartConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the charter window.
#[derive(Default)]
pub struct ChartConfig {
    pub settings: ChartSettings,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl ChartConfig {
    pub fn from_settings(settings: ChartSettings) -> Self {
        Self {
            settings,
            native_options: None,
        }
    }
}
