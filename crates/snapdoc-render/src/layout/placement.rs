//! Image placement within the page content box.
//!
//! Coordinates are in millimeters with the origin at the top-left of the
//! page, matching how the layout is specified. The PDF serializer converts
//! to bottom-left origin points when it emits operations.

use crate::options::{CAPTION_BAND_MM, MARGIN_MM, RenderOptions};

/// An axis-aligned rectangle in mm, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// The page area available to the image after margins and, when captions are
/// enabled, the caption band at the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentBox {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub width: f32,
    pub height: f32,
}

/// Compute the content box for one page of the given configuration.
pub fn content_box(options: &RenderOptions) -> ContentBox {
    let (page_width_mm, page_height_mm) = options.page_dimensions_mm();
    let caption_band = if options.include_captions {
        CAPTION_BAND_MM
    } else {
        0.0
    };
    ContentBox {
        page_width_mm,
        page_height_mm,
        width: page_width_mm - 2.0 * MARGIN_MM,
        height: page_height_mm - 2.0 * MARGIN_MM - caption_band,
    }
}

/// Aspect-preserving scale-to-fit of a `width`×`height` pixel image into the
/// content box, centered horizontally on the full page and top-aligned at
/// the margin.
///
/// Degenerate images (either dimension zero) are placed as squares: the
/// aspect ratio is taken to be 1.0 so the math stays finite.
pub fn place_image(width: u32, height: u32, content: &ContentBox) -> Rect {
    let image_aspect = if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    };
    let box_aspect = content.width / content.height;

    let (final_width, final_height) = if image_aspect > box_aspect {
        // Image relatively wider than the box: width-constrained.
        (content.width, content.width / image_aspect)
    } else {
        // Relatively taller than or as tall as the box: height-constrained.
        (content.height * image_aspect, content.height)
    };

    let x = (content.page_width_mm - final_width) / 2.0;
    Rect::new(x, MARGIN_MM, final_width, final_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Orientation, PaperSize};

    fn a4_portrait(include_captions: bool) -> RenderOptions {
        RenderOptions {
            include_captions,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
        }
    }

    #[test]
    fn content_box_reserves_caption_band() {
        let with = content_box(&a4_portrait(true));
        let without = content_box(&a4_portrait(false));
        assert_eq!(with.width, without.width);
        assert_eq!(without.height - with.height, CAPTION_BAND_MM);
        assert_eq!(without.width, 210.0 - 2.0 * MARGIN_MM);
        assert_eq!(without.height, 297.0 - 2.0 * MARGIN_MM);
    }

    #[test]
    fn landscape_swaps_page_dimensions() {
        let options = RenderOptions {
            orientation: Orientation::Landscape,
            ..a4_portrait(false)
        };
        let cb = content_box(&options);
        assert_eq!(cb.page_width_mm, 297.0);
        assert_eq!(cb.page_height_mm, 210.0);
    }

    #[test]
    fn wide_image_is_width_constrained() {
        let cb = content_box(&a4_portrait(true));
        let rect = place_image(800, 600, &cb);
        assert!((rect.width - cb.width).abs() < 1e-4);
        assert!(rect.height < cb.height);
        // Aspect preserved.
        assert!((rect.width / rect.height - 800.0 / 600.0).abs() < 1e-3);
    }

    #[test]
    fn tall_image_is_height_constrained() {
        let cb = content_box(&a4_portrait(true));
        let rect = place_image(600, 1000, &cb);
        assert!((rect.height - cb.height).abs() < 1e-4);
        assert!(rect.width < cb.width);
        assert!((rect.width / rect.height - 600.0 / 1000.0).abs() < 1e-3);
    }

    #[test]
    fn placement_is_centered_and_top_aligned() {
        let cb = content_box(&a4_portrait(false));
        let rect = place_image(100, 100, &cb);
        assert_eq!(rect.y, MARGIN_MM);
        let right_gap = cb.page_width_mm - (rect.x + rect.width);
        assert!((rect.x - right_gap).abs() < 1e-4);
    }

    #[test]
    fn zero_dimension_treated_as_square() {
        let cb = content_box(&a4_portrait(true));
        let rect = place_image(0, 500, &cb);
        assert!((rect.width - rect.height).abs() < 1e-4);
        assert!(rect.width <= cb.width && rect.height <= cb.height);
    }
}
