//! Tempchart crate root: re-exports and module wiring.
//!
//! Charts a temperature-vs-time profile in real time from a thermocouple
//! probe that emits one text line per reading, and saves/loads such runs as
//! two-column `x, y` text files for overlaying reference profiles.
//!
//! - `data`: the pure model (line parser, bounds and coordinate mapping,
//!   plot session, profile store, guide lines, overlay palette)
//! - `sink`: reading the probe stream on a background thread
//! - `config`: chart settings and the JSON settings file
//! - `app`: the eframe window (Open / Save / Quit, canvas, status bar)

pub mod app;
pub mod config;
pub mod data;
pub mod sink;

// Public re-exports for a compact external API
pub use app::{run_chart, ChartApp, RunError, StreamStatus};
pub use config::{ChartConfig, ChartSettings, ConfigError};
pub use data::bounds::{BoundsError, BoundsSettings, LogicalBounds};
pub use data::guides::{default_guides, GuideLine};
pub use data::palette::{ColorCursor, DEFAULT_PALETTE, LIVE_COLOR};
pub use data::parser::{parse_line, LineError, ParsedLine};
pub use data::profile::{ProfileError, ProfileRecord};
pub use data::segments::{DrawList, PlotPoint, Segment, SegmentSink};
pub use data::session::{PlotSession, Sample, SavePolicy};
pub use sink::{spawn_line_reader, InputSource, StreamEvent};
