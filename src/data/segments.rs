//! Draw-segment requests in logical coordinates and the retained list of them.

use eframe::egui::Color32;

use crate::data::bounds::LogicalBounds;

/// A point on the chart: x is the sample index (time), y the temperature.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub const ORIGIN: PlotPoint = PlotPoint { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for PlotPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A straight line between two logical points in a single color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: PlotPoint,
    pub to: PlotPoint,
    pub color: Color32,
}

impl Segment {
    pub fn new(from: PlotPoint, to: PlotPoint, color: Color32) -> Self {
        Self { from, to, color }
    }

    /// Endpoints in canvas units.
    pub fn to_surface(&self, bounds: &LogicalBounds) -> [[f64; 2]; 2] {
        [
            bounds.to_surface(self.from.x, self.from.y),
            bounds.to_surface(self.to.x, self.to.y),
        ]
    }
}

/// Receiver of draw requests emitted by the plot session.
pub trait SegmentSink {
    fn draw_segment(&mut self, segment: Segment);
}

impl SegmentSink for Vec<Segment> {
    fn draw_segment(&mut self, segment: Segment) {
        self.push(segment);
    }
}

/// Everything drawn so far, in drawing order.
///
/// The canvas keeps every segment it was asked to draw (like a retained
/// canvas), so the immediate-mode UI repaints from this list each frame.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    segments: Vec<Segment>,
}

impl DrawList {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl SegmentSink for DrawList {
    fn draw_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
}
