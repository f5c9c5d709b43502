//! Plot session: the running state of one charting run.
//!
//! The session owns the pen position (plot cursor), the accumulated samples
//! and the overlay color cursor. It turns accepted input lines and loaded
//! profiles into [`Segment`]s handed to a [`SegmentSink`]; it never deals in
//! pixels itself.

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

use crate::data::bounds::LogicalBounds;
use crate::data::guides::GuideLine;
use crate::data::palette::{ColorCursor, LIVE_COLOR};
use crate::data::parser::{parse_line, LineError, ParsedLine};
use crate::data::profile::ProfileRecord;
use crate::data::segments::{PlotPoint, Segment, SegmentSink};

/// One accepted reading: `time` counts accepted samples, it is not wall-clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    pub time: u64,
    pub temperature: f64,
}

impl Sample {
    pub const ORIGIN: Sample = Sample { time: 0, temperature: 0.0 };

    pub fn point(&self) -> PlotPoint {
        PlotPoint::new(self.time as f64, self.temperature)
    }
}

/// What happens to the plot cursor when a run is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavePolicy {
    /// History is cleared, the pen stays where it was so the live trace keeps
    /// going from its last point.
    #[default]
    KeepCursor,
    /// History is cleared and the pen returns to the origin.
    ResetCursor,
}

pub struct PlotSession {
    bounds: LogicalBounds,
    guides: Vec<GuideLine>,
    cursor: Sample,
    history: Vec<Sample>,
    colors: ColorCursor,
    save_policy: SavePolicy,
}

impl Default for PlotSession {
    fn default() -> Self {
        Self::new(LogicalBounds::default())
    }
}

impl PlotSession {
    pub fn new(bounds: LogicalBounds) -> Self {
        Self {
            bounds,
            guides: Vec::new(),
            cursor: Sample::ORIGIN,
            history: Vec::new(),
            colors: ColorCursor::default(),
            save_policy: SavePolicy::default(),
        }
    }

    pub fn with_guides(mut self, guides: Vec<GuideLine>) -> Self {
        self.guides = guides;
        self
    }

    pub fn with_colors(mut self, colors: ColorCursor) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_save_policy(mut self, policy: SavePolicy) -> Self {
        self.save_policy = policy;
        self
    }

    pub fn bounds(&self) -> &LogicalBounds {
        &self.bounds
    }

    pub fn guides(&self) -> &[GuideLine] {
        &self.guides
    }

    /// Last plotted point, the start of the next live segment.
    pub fn cursor(&self) -> Sample {
        self.cursor
    }

    /// Samples accepted since the last save or clear.
    pub fn history(&self) -> &[Sample] {
        &self.history
    }

    /// Number of overlays opened so far.
    pub fn overlays(&self) -> usize {
        self.colors.runs()
    }

    pub fn save_policy(&self) -> SavePolicy {
        self.save_policy
    }

    /// Draw the guide lines. Called once when the chart is set up.
    pub fn draw_guides(&self, sink: &mut impl SegmentSink) {
        for g in &self.guides {
            sink.draw_segment(g.segment(&self.bounds));
        }
    }

    /// Feed one raw line from the probe.
    ///
    /// Returns the new sample when the line carried a reading, `None` when it
    /// was too short. An unparseable temperature is returned as an error and
    /// leaves the session untouched.
    pub fn on_stream_line(
        &mut self,
        line: &str,
        sink: &mut impl SegmentSink,
    ) -> Result<Option<Sample>, LineError> {
        match parse_line(line)? {
            ParsedLine::Temperature(t) => Ok(Some(self.push_temperature(t, sink))),
            ParsedLine::Rejected => {
                log::trace!("dropping short line {line:?}");
                Ok(None)
            }
        }
    }

    /// Append a temperature one time unit after the cursor and draw the
    /// connecting segment in the live color.
    pub fn push_temperature(&mut self, temperature: f64, sink: &mut impl SegmentSink) -> Sample {
        let prev = self.cursor;
        let next = Sample {
            time: prev.time + 1,
            temperature,
        };
        sink.draw_segment(Segment::new(prev.point(), next.point(), LIVE_COLOR));
        self.history.push(next);
        self.cursor = next;
        log::debug!("sample t={} temperature={}", next.time, next.temperature);
        next
    }

    /// Overlay a loaded profile in the next palette color.
    ///
    /// The pen starts at the origin and connects consecutive records; when
    /// the first record is the origin itself no zero-length lead-in is drawn.
    /// Live state (history and cursor) is not touched. Returns the color used.
    pub fn open_profile(&mut self, records: &[ProfileRecord], sink: &mut impl SegmentSink) -> Color32 {
        let color = self.colors.next_color();
        if let Some(&first) = records.first() {
            if first != PlotPoint::ORIGIN {
                sink.draw_segment(Segment::new(PlotPoint::ORIGIN, first, color));
            }
        }
        for pair in records.windows(2) {
            sink.draw_segment(Segment::new(pair[0], pair[1], color));
        }
        log::info!("overlaid profile with {} records", records.len());
        color
    }

    /// The current run as `(index, temperature)` records, without clearing it.
    ///
    /// Indices are re-derived from the position in history, starting at 0.
    pub fn records(&self) -> Vec<ProfileRecord> {
        self.history
            .iter()
            .enumerate()
            .map(|(i, s)| PlotPoint::new(i as f64, s.temperature))
            .collect()
    }

    /// Take the current run as records (see [`records`](Self::records)) and clear it.
    pub fn save_profile(&mut self) -> Vec<ProfileRecord> {
        let records = self.records();
        self.history.clear();
        if self.save_policy == SavePolicy::ResetCursor {
            self.cursor = Sample::ORIGIN;
        }
        records
    }

    /// Drop the current run and move the pen back to the origin.
    pub fn clear(&mut self) {
        self.history.clear();
        self.cursor = Sample::ORIGIN;
    }
}
