//! Canvas painting: maps logical segments to pixels and draws them.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke};

use crate::data::bounds::LogicalBounds;
use crate::data::guides::GuideLine;
use crate::data::palette::color_from_rgb;
use crate::data::segments::Segment;

const LINE_WIDTH: f32 = 1.0;
const LABEL_SIZE: f32 = 11.0;

/// Screen position of a logical point on a canvas whose top-left is `origin`.
pub(super) fn to_screen(bounds: &LogicalBounds, origin: Pos2, x: f64, y: f64) -> Pos2 {
    let [px, py] = bounds.to_surface(x, y);
    Pos2::new(origin.x + px as f32, origin.y + py as f32)
}

/// Allocate the canvas and paint every segment, then the guide labels.
pub(super) fn paint(ui: &mut egui::Ui, bounds: &LogicalBounds, segments: &[Segment], guides: &[GuideLine]) {
    let size = egui::vec2(bounds.canvas_width() as f32, bounds.canvas_height() as f32);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect: Rect = response.rect;
    // Out-of-bounds points map off the canvas; clip them here.
    let painter = painter.with_clip_rect(rect);
    painter.rect_filled(rect, 0.0, Color32::WHITE);

    for seg in segments {
        let a = to_screen(bounds, rect.min, seg.from.x, seg.from.y);
        let b = to_screen(bounds, rect.min, seg.to.x, seg.to.y);
        painter.line_segment([a, b], Stroke::new(LINE_WIDTH, seg.color));
    }

    for g in guides {
        let anchor = to_screen(bounds, rect.min, bounds.x_maximum(), g.temperature);
        painter.text(
            anchor - egui::vec2(4.0, 2.0),
            Align2::RIGHT_BOTTOM,
            &g.label,
            FontId::proportional(LABEL_SIZE),
            color_from_rgb(g.color),
        );
    }
}
