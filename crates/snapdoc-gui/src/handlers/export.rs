use snapdoc_async_runtime::AppUpdate;
use snapdoc_render::{DocumentPage, RenderOptions, render_to_file};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_generate(
    pages: Vec<DocumentPage>,
    options: RenderOptions,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<AppUpdate>,
) {
    let page_count = pages.len();
    match render_to_file(&pages, &options, &output_path).await {
        Ok(()) => {
            let _ = update_tx.send(AppUpdate::PdfComplete {
                path: output_path,
                page_count,
            });
        }
        Err(e) => {
            let _ = update_tx.send(AppUpdate::Error {
                message: format!("Failed to generate PDF: {e}"),
            });
        }
    }
}
