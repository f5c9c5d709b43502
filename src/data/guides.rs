//! Guide lines: fixed horizontal references marking reflow phases.

use serde::{Deserialize, Serialize};

use crate::data::bounds::LogicalBounds;
use crate::data::palette::color_from_rgb;
use crate::data::segments::{PlotPoint, Segment};

/// One horizontal reference at a fixed temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    /// Text shown next to the line.
    pub label: String,
    /// Temperature in centigrade.
    pub temperature: f64,
    /// Line color (RGB).
    pub color: [u8; 3],
}

impl GuideLine {
    pub fn new<S: Into<String>>(label: S, temperature: f64, color: [u8; 3]) -> Self {
        Self {
            label: label.into(),
            temperature,
            color,
        }
    }

    /// Segment spanning the whole time axis at this guide's temperature.
    pub fn segment(&self, bounds: &LogicalBounds) -> Segment {
        Segment::new(
            PlotPoint::new(bounds.x_minimum(), self.temperature),
            PlotPoint::new(bounds.x_maximum(), self.temperature),
            color_from_rgb(self.color),
        )
    }
}

/// Soak, leaded reflow, lead-free reflow and danger zones for solder paste.
pub fn default_guides() -> Vec<GuideLine> {
    vec![
        GuideLine::new("soak", 150.0, [0, 0, 255]),
        GuideLine::new("leaded reflow", 183.0, [0, 128, 0]),
        GuideLine::new("lead-free reflow", 217.0, [255, 165, 0]),
        GuideLine::new("danger", 245.0, [255, 0, 0]),
    ]
}
