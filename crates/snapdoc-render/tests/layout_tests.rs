use snapdoc_render::layout::{content_box, layout_document};
use snapdoc_render::{
    CAPTION_GAP_MM, DocumentPage, MARGIN_MM, Orientation, PaperSize, RenderOptions,
};
use std::sync::Arc;

fn page(width: u32, height: u32, caption: &str) -> DocumentPage {
    // Layout never inspects the bytes, only the resolved dimensions.
    DocumentPage {
        data: Arc::from(Vec::new().into_boxed_slice()),
        width,
        height,
        caption: caption.to_string(),
    }
}

fn a4_portrait_with_captions() -> RenderOptions {
    RenderOptions {
        include_captions: true,
        paper_size: PaperSize::A4,
        orientation: Orientation::Portrait,
    }
}

#[test]
fn empty_input_yields_empty_layout() {
    let layouts = layout_document(&[], &a4_portrait_with_captions());
    assert!(layouts.is_empty());
}

#[test]
fn pages_come_out_in_input_order() {
    // Distinct aspect ratios make each page's placement identifiable.
    let pages = vec![page(1000, 100, ""), page(100, 1000, ""), page(500, 500, "")];
    let layouts = layout_document(&pages, &a4_portrait_with_captions());
    assert_eq!(layouts.len(), 3);

    let aspects: Vec<f32> = layouts
        .iter()
        .map(|l| l.image.width / l.image.height)
        .collect();
    assert!((aspects[0] - 10.0).abs() < 1e-2);
    assert!((aspects[1] - 0.1).abs() < 1e-3);
    assert!((aspects[2] - 1.0).abs() < 1e-3);
}

#[test]
fn aspect_ratio_preserved_and_contained() {
    let options = a4_portrait_with_captions();
    let content = content_box(&options);
    let samples = [(800, 600), (600, 800), (3000, 50), (50, 3000), (1, 1)];
    for &(w, h) in &samples {
        let layouts = layout_document(&[page(w, h, "")], &options);
        let image = layouts[0].image;
        let expected = w as f32 / h as f32;
        assert!(
            (image.width / image.height - expected).abs() < 1e-3,
            "aspect drifted for {w}x{h}"
        );
        assert!(image.width <= content.width + 1e-4);
        assert!(image.height <= content.height + 1e-4);
    }
}

#[test]
fn captions_disabled_means_no_caption_lines() {
    let options = RenderOptions {
        include_captions: false,
        ..a4_portrait_with_captions()
    };
    let layouts = layout_document(&[page(800, 600, "A caption that exists")], &options);
    assert!(layouts[0].caption.is_empty());
}

#[test]
fn empty_caption_renders_no_caption_region() {
    let layouts = layout_document(&[page(800, 600, "")], &a4_portrait_with_captions());
    assert!(layouts[0].caption.is_empty());
}

#[test]
fn scenario_two_pages_mixed_orientation_images() {
    let pages = vec![page(800, 600, "Sunset"), page(600, 800, "")];
    let options = a4_portrait_with_captions();
    let content = content_box(&options);
    let layouts = layout_document(&pages, &options);
    assert_eq!(layouts.len(), 2);

    // Page 1: landscape image, width-constrained, caption below the image.
    let first = &layouts[0];
    assert!((first.image.width - content.width).abs() < 1e-4);
    assert_eq!(first.caption.len(), 1);
    assert_eq!(first.caption[0].text, "Sunset");
    let expected_y = first.image.y + first.image.height + CAPTION_GAP_MM;
    assert!((first.caption[0].y - expected_y).abs() < 1e-4);

    // Page 2: portrait image, contained and aspect-true, no caption region.
    let second = &layouts[1];
    assert!(second.image.width <= content.width + 1e-4);
    assert!(second.image.height <= content.height + 1e-4);
    assert!((second.image.width / second.image.height - 0.75).abs() < 1e-3);
    assert!(second.caption.is_empty());
}

#[test]
fn very_tall_image_fills_content_height() {
    let options = a4_portrait_with_captions();
    let content = content_box(&options);
    let layouts = layout_document(&[page(200, 1000, "")], &options);
    let image = layouts[0].image;
    assert!((image.height - content.height).abs() < 1e-4);
    assert!(image.width < content.width);
}

#[test]
fn zero_width_image_laid_out_as_square() {
    let layouts = layout_document(&[page(0, 500, "degenerate")], &a4_portrait_with_captions());
    let image = layouts[0].image;
    assert!((image.width - image.height).abs() < 1e-4);
    assert_eq!(image.y, MARGIN_MM);
}

#[test]
fn long_caption_wraps_to_multiple_positioned_lines() {
    let caption = "This caption is deliberately far too long to sit on one line \
                   of an A4 page and therefore has to wrap onto several lines \
                   below the image without being truncated or shrunk";
    let layouts = layout_document(&[page(800, 600, caption)], &a4_portrait_with_captions());
    let lines = &layouts[0].caption;
    assert!(lines.len() > 1);
    // Lines stack downward at a constant pitch.
    let pitch = lines[1].y - lines[0].y;
    assert!(pitch > 0.0);
    for pair in lines.windows(2) {
        assert!((pair[1].y - pair[0].y - pitch).abs() < 1e-4);
    }
    // Each line is centered on the page.
    for line in lines {
        assert!(line.x > 0.0 && line.x < layouts[0].page_width_mm);
    }
}

#[test]
fn letter_landscape_page_dimensions() {
    let options = RenderOptions {
        include_captions: false,
        paper_size: PaperSize::Letter,
        orientation: Orientation::Landscape,
    };
    let layouts = layout_document(&[page(100, 100, "")], &options);
    assert!((layouts[0].page_width_mm - 279.4).abs() < 1e-4);
    assert!((layouts[0].page_height_mm - 215.9).abs() < 1e-4);
}
