//! [`ChartApp`]: the eframe application driving a plot session.

use std::path::Path;
use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui;

use crate::data::profile::{self, ProfileError};
use crate::data::segments::DrawList;
use crate::data::session::{PlotSession, Sample};
use crate::sink::StreamEvent;

use super::canvas;

/// Whether the input stream can still deliver samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamStatus {
    Open,
    /// Input ended or failed; nothing more will arrive.
    Closed,
}

pub struct ChartApp {
    session: PlotSession,
    drawing: DrawList,
    rx: Receiver<StreamEvent>,
    status: StreamStatus,
    last_sample: Option<Sample>,
    /// Last message for the status bar.
    message: Option<String>,
}

impl ChartApp {
    /// Wrap a session and draw its guide lines.
    pub fn new(session: PlotSession, rx: Receiver<StreamEvent>) -> Self {
        let mut drawing = DrawList::default();
        session.draw_guides(&mut drawing);
        Self {
            session,
            drawing,
            rx,
            status: StreamStatus::Open,
            last_sample: None,
            message: None,
        }
    }

    pub fn session(&self) -> &PlotSession {
        &self.session
    }

    pub fn drawing(&self) -> &DrawList {
        &self.drawing
    }

    pub fn status(&self) -> StreamStatus {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Drain everything the reader thread has sent so far.
    ///
    /// Lines with an unparseable temperature are logged and skipped so the
    /// chart keeps running. End of input or a read error closes the stream.
    pub fn process_stream(&mut self) -> StreamStatus {
        while self.status == StreamStatus::Open {
            match self.rx.try_recv() {
                Ok(StreamEvent::Line(line)) => {
                    match self.session.on_stream_line(&line, &mut self.drawing) {
                        Ok(Some(sample)) => self.last_sample = Some(sample),
                        Ok(None) => {}
                        Err(e) => log::warn!("skipping line {line:?}: {e}"),
                    }
                }
                Ok(StreamEvent::Closed) | Err(TryRecvError::Disconnected) => {
                    log::info!("input stream closed");
                    self.status = StreamStatus::Closed;
                }
                Ok(StreamEvent::Error(e)) => {
                    log::error!("input stream failed: {e}");
                    self.status = StreamStatus::Closed;
                }
                Err(TryRecvError::Empty) => break,
            }
        }
        self.status
    }

    /// Load a profile file and overlay it. A malformed file draws nothing.
    pub fn open_profile_from_path(&mut self, path: &Path) -> Result<usize, ProfileError> {
        let records = profile::load_profile(path)?;
        self.session.open_profile(&records, &mut self.drawing);
        self.message = Some(format!("Opened {} ({} records)", path.display(), records.len()));
        Ok(records.len())
    }

    /// Write the current run to `path`; the run is cleared only if the write succeeds.
    pub fn save_run_to_path(&mut self, path: &Path) -> Result<usize, ProfileError> {
        let records = self.session.records();
        profile::save_profile(path, &records)?;
        self.session.save_profile();
        log::info!("saved {} samples to {}", records.len(), path.display());
        self.message = Some(format!("Saved {} ({} samples)", path.display(), records.len()));
        Ok(records.len())
    }

    fn prompt_and_open(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Profile")
            .add_filter("CSV", &["csv", "txt"])
            .pick_file()
        else {
            return;
        };
        if let Err(e) = self.open_profile_from_path(&path) {
            log::error!("failed to open profile {}: {e}", path.display());
            self.message = Some(format!("Failed to open {}: {e}", path.display()));
        }
    }

    fn prompt_and_save(&mut self) {
        let default_name = format!(
            "temperature_run_{}.csv",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        );
        let Some(path) = rfd::FileDialog::new()
            .set_title("Temperature Run")
            .add_filter("CSV", &["csv"])
            .set_file_name(default_name)
            .save_file()
        else {
            return;
        };
        if let Err(e) = self.save_run_to_path(&path) {
            log::error!("failed to save run to {}: {e}", path.display());
            self.message = Some(format!("Failed to save {}: {e}", path.display()));
        }
    }

    fn status_text(&self) -> String {
        let mut text = format!("Samples: {}", self.session.history().len());
        if let Some(s) = self.last_sample {
            text.push_str(&format!("   Last: {:.2} °C", s.temperature));
        }
        text.push_str(&format!("   Overlays: {}", self.session.overlays()));
        if self.status == StreamStatus::Closed {
            text.push_str("   Input closed");
        }
        text
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.process_stream() == StreamStatus::Closed {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::TopBottomPanel::top("tempchart_actions").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open").clicked() {
                    self.prompt_and_open();
                }
                if ui.button("Save").clicked() {
                    self.prompt_and_save();
                }
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });

        egui::TopBottomPanel::bottom("tempchart_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status_text());
                if let Some(msg) = &self.message {
                    ui.separator();
                    ui.label(msg);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            canvas::paint(
                ui,
                self.session.bounds(),
                self.drawing.segments(),
                self.session.guides(),
            );
        });

        // Readings arrive about once a second; poll well below that.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
