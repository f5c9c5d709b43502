//! Overlay colors: a fixed palette walked by a wrapping cursor.

use eframe::egui::Color32;

/// Color used for the live temperature trace, independent of the palette.
pub const LIVE_COLOR: Color32 = Color32::BLACK;

/// Default overlay palette (purple, magenta, blue, orange, red, brown, cyan,
/// green, pink, violet).
pub const DEFAULT_PALETTE: [Color32; 10] = [
    Color32::from_rgb(160, 32, 240),
    Color32::from_rgb(255, 0, 255),
    Color32::from_rgb(0, 0, 255),
    Color32::from_rgb(255, 165, 0),
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(165, 42, 42),
    Color32::from_rgb(0, 255, 255),
    Color32::from_rgb(0, 128, 0),
    Color32::from_rgb(255, 192, 203),
    Color32::from_rgb(238, 130, 238),
];

/// Hands out one palette color per run, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ColorCursor {
    palette: Vec<Color32>,
    index: usize,
}

impl Default for ColorCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.to_vec())
    }
}

impl ColorCursor {
    /// Build a cursor over `palette`; an empty palette falls back to the default one.
    pub fn new(palette: Vec<Color32>) -> Self {
        let palette = if palette.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            palette
        };
        Self { palette, index: 0 }
    }

    /// Return the current color and advance.
    pub fn next_color(&mut self) -> Color32 {
        let color = self.palette[self.index % self.palette.len()];
        self.index = self.index.wrapping_add(1);
        color
    }

    /// Number of colors handed out so far.
    pub fn runs(&self) -> usize {
        self.index
    }

    pub fn palette(&self) -> &[Color32] {
        &self.palette
    }
}

/// Convert a settings-file RGB triple to a color.
#[inline]
pub fn color_from_rgb(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Inverse of [`color_from_rgb`]; alpha is dropped.
#[inline]
pub fn color_to_rgb(color: Color32) -> [u8; 3] {
    [color.r(), color.g(), color.b()]
}
