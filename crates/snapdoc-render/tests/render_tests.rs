use snapdoc_render::{DocumentPage, RenderError, RenderOptions, render_pdf_bytes, render_to_file};
use std::sync::Arc;

fn png_page(width: u32, height: u32, caption: &str) -> DocumentPage {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([40, 90, 200, 255]));
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .expect("encode test png");
    DocumentPage {
        data: Arc::from(bytes.into_boxed_slice()),
        width,
        height,
        caption: caption.to_string(),
    }
}

#[test]
fn produces_a_pdf_with_header() {
    let pages = vec![png_page(8, 6, "Sunset"), png_page(6, 8, "")];
    let bytes = render_pdf_bytes(&pages, &RenderOptions::default()).expect("render");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn empty_entry_list_is_not_an_error() {
    let bytes = render_pdf_bytes(&[], &RenderOptions::default()).expect("render empty");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn undecodable_image_bytes_fail_cleanly() {
    let bad = DocumentPage {
        data: Arc::from(b"definitely not an image".to_vec().into_boxed_slice()),
        width: 10,
        height: 10,
        caption: String::new(),
    };
    let result = render_pdf_bytes(&[bad], &RenderOptions::default());
    assert!(matches!(result, Err(RenderError::Image(_))));
}

#[tokio::test]
async fn render_to_file_writes_complete_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out.pdf");
    let pages = vec![png_page(8, 6, "hello")];
    render_to_file(&pages, &RenderOptions::default(), &path)
        .await
        .expect("render to file");
    let written = std::fs::read(&path).expect("read back");
    assert!(written.starts_with(b"%PDF"));
}

#[tokio::test]
async fn failed_render_leaves_no_file_behind() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out.pdf");
    let bad = DocumentPage {
        data: Arc::from(b"nope".to_vec().into_boxed_slice()),
        width: 1,
        height: 1,
        caption: String::new(),
    };
    let result = render_to_file(&[bad], &RenderOptions::default(), &path).await;
    assert!(result.is_err());
    assert!(!path.exists());
}
