use snapdoc_async_runtime::AppUpdate;
use snapdoc_collection::{IncomingFile, ingest_files};
use tokio::sync::mpsc;

pub async fn handle_ingest(
    files: Vec<IncomingFile>,
    update_tx: &mpsc::UnboundedSender<AppUpdate>,
) {
    let total = files.len();
    let outcome = ingest_files(files).await;
    log::info!(
        "ingested {} of {} dropped files ({} skipped)",
        outcome.entries.len(),
        total,
        outcome.skipped.len()
    );
    let _ = update_tx.send(AppUpdate::FilesIngested {
        entries: outcome.entries,
        skipped: outcome.skipped,
    });
}
