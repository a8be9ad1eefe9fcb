//! Pure pagination: one input page in, one laid-out output page out.
//!
//! Nothing here touches printpdf or does I/O, which keeps the whole
//! placement and wrapping logic testable with plain asserts.

mod placement;
mod text;

pub use placement::{ContentBox, Rect, content_box, place_image};
pub use text::{caption_width_mm, text_width_pt, wrap_caption};

use crate::options::{
    CAPTION_FONT_SIZE_PT, CAPTION_GAP_MM, CAPTION_LINE_HEIGHT, MM_PER_PT, RenderOptions,
};
use crate::types::DocumentPage;

/// One wrapped caption line with its resolved position. `x` is the left edge
/// of the horizontally centered line; `y` is the text baseline, both in mm
/// from the top-left of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// The computed layout of a single output page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub image: Rect,
    /// Empty when captions are disabled or the entry's caption is empty.
    pub caption: Vec<CaptionLine>,
}

/// Lay out the whole document: page *k* of the result places entry *k* of
/// the input. Entries are never combined or split across pages, and an empty
/// input produces an empty layout.
pub fn layout_document(pages: &[DocumentPage], options: &RenderOptions) -> Vec<PageLayout> {
    let content = content_box(options);
    pages
        .iter()
        .map(|page| layout_page(page, &content, options))
        .collect()
}

fn layout_page(page: &DocumentPage, content: &ContentBox, options: &RenderOptions) -> PageLayout {
    let image = place_image(page.width, page.height, content);

    let caption = if options.include_captions && !page.caption.is_empty() {
        let line_height_mm = CAPTION_FONT_SIZE_PT * CAPTION_LINE_HEIGHT * MM_PER_PT;
        let start_y = image.y + image.height + CAPTION_GAP_MM;
        wrap_caption(&page.caption, content.width)
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let x = (content.page_width_mm - caption_width_mm(&text)) / 2.0;
                CaptionLine {
                    text,
                    x,
                    y: start_y + i as f32 * line_height_mm,
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    PageLayout {
        page_width_mm: content.page_width_mm,
        page_height_mm: content.page_height_mm,
        image,
        caption,
    }
}
