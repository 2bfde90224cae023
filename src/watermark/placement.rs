//! Anchor arithmetic for watermark text.

use std::fmt;
use std::str::FromStr;

use watermark_studio_config::{Align, WatermarkPosition};
use watermark_studio_fonts::TextExtent;

/// Distance in pixels between the watermark and the image edge.
pub const DEFAULT_MARGIN: u32 = 20;

/// Pixel dimensions of an image, parsed from `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for ImageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| format!("invalid dimension '{part}' in '{s}': {e}"))
        };
        Ok(Self::new(parse(w)?, parse(h)?))
    }
}

/// Top-left corner of a text box placed at `position` inside `image`.
///
/// Coordinates are signed: text larger than the image yields negative
/// offsets rather than being clamped.
pub fn text_position(
    image: ImageSize,
    text: TextExtent,
    position: WatermarkPosition,
    margin: u32,
) -> (i64, i64) {
    let x = axis_offset(image.width, text.width, margin, position.horizontal());
    let y = axis_offset(image.height, text.height, margin, position.vertical());
    (x, y)
}

fn axis_offset(outer: u32, inner: u32, margin: u32, align: Align) -> i64 {
    let (outer, inner, margin) = (i64::from(outer), i64::from(inner), i64::from(margin));
    match align {
        Align::Start => margin,
        Align::Middle => outer / 2 - inner / 2,
        Align::End => outer - inner - margin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_image_sizes() {
        assert_eq!("800x600".parse(), Ok(ImageSize::new(800, 600)));
        assert_eq!(" 1920X1080 ".parse(), Ok(ImageSize::new(1920, 1080)));
        assert!("800".parse::<ImageSize>().is_err());
        assert!("800x-1".parse::<ImageSize>().is_err());
        assert!("x600".parse::<ImageSize>().is_err());
    }

    #[test]
    fn middle_uses_integer_halving() {
        assert_eq!(axis_offset(101, 11, 20, Align::Middle), 45);
    }

    #[test]
    fn oversized_text_goes_negative() {
        let origin = text_position(
            ImageSize::new(100, 50),
            TextExtent::new(300, 80),
            WatermarkPosition::BottomRight,
            DEFAULT_MARGIN,
        );
        assert_eq!(origin, (-220, -50));
    }
}
