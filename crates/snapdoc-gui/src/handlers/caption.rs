use snapdoc_async_runtime::AppUpdate;
use snapdoc_caption::CaptionProvider;
use snapdoc_collection::EntryId;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Run one caption request to completion. The entry may have been removed by
/// the time the result arrives; the UI resolves that by id, so both outcomes
/// are safe to send unconditionally.
pub async fn handle_caption<C: CaptionProvider>(
    client: &C,
    id: EntryId,
    data: Arc<[u8]>,
    mime: String,
    update_tx: &mpsc::UnboundedSender<AppUpdate>,
) {
    match client.caption(&data, &mime).await {
        Ok(caption) => {
            let _ = update_tx.send(AppUpdate::CaptionReady { id, caption });
        }
        Err(e) => {
            log::warn!("caption request failed: {e}");
            let _ = update_tx.send(AppUpdate::CaptionFailed {
                id,
                message: e.to_string(),
            });
        }
    }
}
