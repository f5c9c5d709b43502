//! Logical bounds of the chart and the mapping onto the drawing surface.

use serde::{Deserialize, Serialize};

/// Bounds rejected because a derived scale factor would not be strictly positive.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoundsError {
    #[error("time axis is empty: x_minimum {min} must be below x_maximum {max}")]
    EmptyXRange { min: f64, max: f64 },
    #[error("temperature axis is empty: y_minimum {min} must be below y_maximum {max}")]
    EmptyYRange { min: f64, max: f64 },
    #[error("canvas size {width}x{height} must be positive")]
    InvalidCanvas { width: f64, height: f64 },
}

/// Raw axis extents and canvas size, as stored in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsSettings {
    pub x_minimum: f64,
    pub x_maximum: f64,
    pub y_minimum: f64,
    pub y_maximum: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Default for BoundsSettings {
    fn default() -> Self {
        Self {
            x_minimum: 0.0,
            x_maximum: 400.0,
            y_minimum: 15.0,
            y_maximum: 260.0,
            canvas_width: 800.0,
            canvas_height: 500.0,
        }
    }
}

/// Validated time/temperature window mapped onto a fixed-size canvas.
///
/// Scale factors are derived once at construction and never change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalBounds {
    settings: BoundsSettings,
    x_scale: f64,
    y_scale: f64,
}

impl LogicalBounds {
    pub fn new(settings: BoundsSettings) -> Result<Self, BoundsError> {
        let s = settings;
        // `!(a < b)` also rejects NaN extents.
        if !(s.x_minimum < s.x_maximum) {
            return Err(BoundsError::EmptyXRange { min: s.x_minimum, max: s.x_maximum });
        }
        if !(s.y_minimum < s.y_maximum) {
            return Err(BoundsError::EmptyYRange { min: s.y_minimum, max: s.y_maximum });
        }
        if !(s.canvas_width > 0.0 && s.canvas_height > 0.0) {
            return Err(BoundsError::InvalidCanvas { width: s.canvas_width, height: s.canvas_height });
        }
        let x_scale = s.canvas_width / (s.x_maximum - s.x_minimum);
        let y_scale = s.canvas_height / (s.y_maximum - s.y_minimum);
        if !(x_scale.is_finite() && x_scale > 0.0) {
            return Err(BoundsError::EmptyXRange { min: s.x_minimum, max: s.x_maximum });
        }
        if !(y_scale.is_finite() && y_scale > 0.0) {
            return Err(BoundsError::EmptyYRange { min: s.y_minimum, max: s.y_maximum });
        }
        Ok(Self { settings, x_scale, y_scale })
    }

    pub fn settings(&self) -> &BoundsSettings {
        &self.settings
    }

    pub fn x_minimum(&self) -> f64 {
        self.settings.x_minimum
    }

    pub fn x_maximum(&self) -> f64 {
        self.settings.x_maximum
    }

    pub fn canvas_width(&self) -> f64 {
        self.settings.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.settings.canvas_height
    }

    /// Canvas units per time unit.
    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    /// Canvas units per degree.
    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    /// Map a logical (time, temperature) pair onto the canvas.
    ///
    /// The y axis is inverted: higher temperatures land closer to the top.
    /// Points outside the bounds map outside the canvas; no clamping is done.
    #[inline]
    pub fn to_surface(&self, x: f64, y: f64) -> [f64; 2] {
        let s = &self.settings;
        [
            (x - s.x_minimum) * self.x_scale,
            s.canvas_height - (y - s.y_minimum) * self.y_scale,
        ]
    }
}

impl Default for LogicalBounds {
    fn default() -> Self {
        let s = BoundsSettings::default();
        Self {
            settings: s,
            x_scale: s.canvas_width / (s.x_maximum - s.x_minimum),
            y_scale: s.canvas_height / (s.y_maximum - s.y_minimum),
        }
    }
}

impl TryFrom<BoundsSettings> for LogicalBounds {
    type Error = BoundsError;

    fn try_from(settings: BoundsSettings) -> Result<Self, Self::Error> {
        Self::new(settings)
    }
}
