//! PDF serialization of a computed document layout.

use printpdf::image::RawImage;
use printpdf::xobject::{XObject, XObjectTransform};
use printpdf::*;
use std::path::Path;

use crate::layout::layout_document;
use crate::options::{CAPTION_COLOR, CAPTION_FONT_SIZE_PT, PT_PER_MM, RenderOptions};
use crate::types::{DocumentPage, RenderError, Result};

/// Build the finished multi-page PDF entirely in memory.
///
/// Undecodable image bytes are an upstream precondition violation (ingestion
/// only admits images it could decode), but they still surface as an error
/// here rather than a panic so a bad export aborts cleanly.
pub fn render_pdf_bytes(pages: &[DocumentPage], options: &RenderOptions) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new("SnapDoc");
    let layouts = layout_document(pages, options);

    let mut pdf_pages = Vec::new();
    for (page, layout) in pages.iter().zip(layouts.iter()) {
        let mut warnings = Vec::new();
        let raw = RawImage::decode_from_bytes(&page.data, &mut warnings)
            .map_err(|e| RenderError::Image(format!("failed to decode page image: {e}")))?;
        let (px_w, px_h) = (raw.width as f32, raw.height as f32);
        let xobj_id = XObjectId::new();
        doc.resources
            .xobjects
            .map
            .insert(xobj_id.clone(), XObject::Image(raw));

        let mut ops = Vec::new();

        // printpdf uses a bottom-left origin; the layout is top-left.
        let image_y_pt = (layout.page_height_mm - (layout.image.y + layout.image.height)) * PT_PER_MM;
        ops.push(Op::UseXobject {
            id: xobj_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(layout.image.x * PT_PER_MM)),
                translate_y: Some(Pt(image_y_pt)),
                scale_x: Some(layout.image.width * PT_PER_MM / px_w.max(1.0)),
                scale_y: Some(layout.image.height * PT_PER_MM / px_h.max(1.0)),
                rotate: None,
                dpi: Some(72.0),
            },
        });

        if !layout.caption.is_empty() {
            let (r, g, b) = CAPTION_COLOR;
            ops.push(Op::SetFillColor {
                col: printpdf::color::Color::Rgb(Rgb::new(
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                    None,
                )),
            });
            ops.push(Op::StartTextSection);
            ops.push(Op::SetFontSizeBuiltinFont {
                font: BuiltinFont::Helvetica,
                size: Pt(CAPTION_FONT_SIZE_PT),
            });
            for line in &layout.caption {
                ops.push(Op::SetTextCursor {
                    pos: Point {
                        x: Mm(line.x).into_pt(),
                        y: Mm(layout.page_height_mm - line.y).into_pt(),
                    },
                });
                ops.push(Op::WriteTextBuiltinFont {
                    items: vec![TextItem::Text(line.text.clone())],
                    font: BuiltinFont::Helvetica,
                });
            }
            ops.push(Op::EndTextSection);
        }

        pdf_pages.push(PdfPage::new(
            Mm(layout.page_width_mm),
            Mm(layout.page_height_mm),
            ops,
        ));
    }

    doc.pages = pdf_pages;

    let mut warnings = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}

/// Render and persist the document.
///
/// The byte vector is fully built before anything touches the filesystem, so
/// a failed build never leaves a partial file behind.
pub async fn render_to_file(
    pages: &[DocumentPage],
    options: &RenderOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let pages = pages.to_vec();
    let options = *options;
    let output_path = output_path.as_ref().to_owned();

    // PDF generation is CPU-bound, spawn blocking
    let bytes = tokio::task::spawn_blocking(move || render_pdf_bytes(&pages, &options)).await??;

    log::info!(
        "writing {} bytes to {}",
        bytes.len(),
        output_path.display()
    );
    tokio::fs::write(&output_path, bytes).await?;

    Ok(())
}
