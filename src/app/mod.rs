//! Presentation layer: the eframe window around a [`PlotSession`](crate::PlotSession).
//!
//! | Sub-module    | Responsibility |
//! | ------------- | -------------- |
//! | [`chart_app`] | [`ChartApp`]: stream ingestion, Open/Save/Quit actions, status bar |
//! | [`canvas`]    | Painting the draw list onto a fixed-size white canvas |
//! | [`run`]       | [`run_chart()`] entry point |

mod canvas;
mod chart_app;
mod run;

pub use chart_app::{ChartApp, StreamStatus};
pub use run::{run_chart, RunError};
