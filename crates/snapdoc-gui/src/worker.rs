use snapdoc_async_runtime::{AppCommand, AppUpdate};
use snapdoc_caption::CaptionProvider;
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes app commands and sends updates.
///
/// The caption client is injected by `main`; the worker owns no global
/// service state of its own.
pub async fn worker_task<C>(
    mut command_rx: mpsc::UnboundedReceiver<AppCommand>,
    update_tx: mpsc::UnboundedSender<AppUpdate>,
    caption_client: C,
) where
    C: CaptionProvider + Clone + Send + Sync + 'static,
{
    while let Some(cmd) = command_rx.recv().await {
        match cmd {
            AppCommand::IngestFiles { files } => {
                handlers::ingest::handle_ingest(files, &update_tx).await;
            }
            AppCommand::RequestCaption { id, data, mime } => {
                // Caption requests run concurrently and may finish in any
                // order; a slow one must not hold up ingestion or export.
                let client = caption_client.clone();
                let tx = update_tx.clone();
                tokio::spawn(async move {
                    handlers::caption::handle_caption(&client, id, data, mime, &tx).await;
                });
            }
            AppCommand::GeneratePdf {
                pages,
                options,
                output_path,
            } => {
                handlers::export::handle_generate(pages, options, output_path, &update_tx).await;
            }
        }
    }
}
