//! Text extent measurement with `swash`.
//!
//! Works purely on font bytes, no rasterization. The extent is the advance
//! width of the text and the ascent + descent of the face, both scaled to the
//! requested pixel size.

use std::panic::{self, AssertUnwindSafe};

use swash::{FontRef, tag_from_bytes};

use crate::error::MetricsError;

/// Pixel size of a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

impl TextExtent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Measure `text` set in the font `data` at `pixel_size` pixels per em.
///
/// Characters the font has no glyph for use the advance of glyph 0
/// (`.notdef`), as a renderer would. Control characters are ignored.
///
/// # Errors
/// [`MetricsError::InvalidFont`] if `data` is not a font,
/// [`MetricsError::InvalidMetrics`] if its horizontal metrics are inconsistent,
/// [`MetricsError::InvalidSize`] if `pixel_size` is not positive.
pub fn measure_text(data: &[u8], text: &str, pixel_size: f32) -> Result<TextExtent, MetricsError> {
    if !pixel_size.is_finite() || pixel_size <= 0.0 {
        return Err(MetricsError::InvalidSize(pixel_size));
    }

    // swash trusts table offsets and can overflow on corrupt data
    panic::catch_unwind(AssertUnwindSafe(|| extent_of(data, text, pixel_size)))
        .map_err(|_| MetricsError::InvalidMetrics("glyph metrics out of range"))?
}

fn extent_of(data: &[u8], text: &str, pixel_size: f32) -> Result<TextExtent, MetricsError> {
    let font_ref = FontRef::from_index(data, 0).ok_or(MetricsError::InvalidFont)?;
    check_horizontal_metrics(&font_ref)?;

    let metrics = font_ref.metrics(&[]);
    if metrics.units_per_em == 0 {
        return Err(MetricsError::InvalidFont);
    }
    let scale = pixel_size / metrics.units_per_em as f32;

    let charmap = font_ref.charmap();
    let glyph_metrics = font_ref.glyph_metrics(&[]);
    let advance: f32 = text
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| glyph_metrics.advance_width(charmap.map(c)) * scale)
        .sum();

    let height = (metrics.ascent + metrics.descent) * scale;

    Ok(TextExtent {
        width: advance.max(0.0).ceil() as u32,
        height: height.max(0.0).ceil() as u32,
    })
}

/// `hhea.numberOfHMetrics` must be in `1..=maxp.numGlyphs` and `hmtx` must
/// hold that many long metrics.
fn check_horizontal_metrics(font_ref: &FontRef<'_>) -> Result<(), MetricsError> {
    let read_u16 = |tag: &[u8; 4], at: usize| {
        font_ref
            .table(tag_from_bytes(tag))
            .and_then(|t| t.get(at..at + 2))
            .map(|b| u16::from_be_bytes([b[0], b[1]]))
    };

    let h_metrics = read_u16(b"hhea", 34).ok_or(MetricsError::InvalidMetrics("missing hhea"))?;
    let num_glyphs = read_u16(b"maxp", 4).ok_or(MetricsError::InvalidMetrics("missing maxp"))?;
    if h_metrics == 0 || h_metrics > num_glyphs {
        return Err(MetricsError::InvalidMetrics(
            "numberOfHMetrics outside 1..=numGlyphs",
        ));
    }

    let hmtx_len = font_ref
        .table(tag_from_bytes(b"hmtx"))
        .map_or(0, <[u8]>::len);
    if hmtx_len < usize::from(h_metrics) * 4 {
        return Err(MetricsError::InvalidMetrics("hmtx shorter than numberOfHMetrics"));
    }
    Ok(())
}

/// Rough extent for text when no font is available: 0.6 em per character.
pub fn estimate_text(text: &str, pixel_size: f32) -> TextExtent {
    let size = pixel_size.max(0.0);
    let chars = text.chars().filter(|c| !c.is_control()).count() as f32;
    TextExtent {
        width: (chars * size * 3.0 / 5.0).ceil() as u32,
        height: size.ceil() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_font_is_an_error() {
        assert!(matches!(
            measure_text(&[0u8; 64], "abc", 24.0),
            Err(MetricsError::InvalidFont)
        ));
    }

    #[test]
    fn invalid_size_is_an_error() {
        assert!(matches!(
            measure_text(&[], "abc", 0.0),
            Err(MetricsError::InvalidSize(_))
        ));
        assert!(matches!(
            measure_text(&[], "abc", f32::NAN),
            Err(MetricsError::InvalidSize(_))
        ));
    }

    #[test]
    fn estimate_scales_with_length_and_size() {
        assert_eq!(estimate_text("", 24.0), TextExtent::new(0, 24));
        assert_eq!(estimate_text("abcde", 20.0), TextExtent::new(60, 20));
        assert_eq!(estimate_text("ab\n", 10.0), TextExtent::new(12, 10));
    }
}
