//! Text measurement for hit-testing and selection outlines.

use crate::constants::MIN_RENDER_FONT_SIZE;

/// Measures the rendered bounding box of a single-line label.
pub trait TextMetrics {
    /// Width and height of `text` set in `font_family` at `font_px`.
    fn measure(&self, text: &str, font_family: &str, font_px: f32) -> (f32, f32);
}

/// Font-independent estimate: 0.6 em advance per character, 1.25 em line.
///
/// Good enough for hit boxes when the host has no shaping engine to offer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxTextMetrics;

impl TextMetrics for ApproxTextMetrics {
    fn measure(&self, text: &str, _font_family: &str, font_px: f32) -> (f32, f32) {
        let chars = text.chars().count().max(1) as f32;
        (chars * font_px * 0.6, font_px * 1.25)
    }
}

/// Font size a label is actually drawn at for a given scaled size.
pub fn render_font_px(scaled: f32) -> f32 {
    scaled.max(MIN_RENDER_FONT_SIZE)
}
