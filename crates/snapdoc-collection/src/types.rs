use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Image decode timed out")]
    Timeout,
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CollectionError>;

/// Stable handle to one page entry. Allocated monotonically by the
/// collection and never reused, so a stale id from a finished async task
/// simply fails to match anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub u64);

/// Direction for an adjacent-swap reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Toward the front of the document (page number decreases).
    Earlier,
    /// Toward the back of the document (page number increases).
    Later,
}

/// Downscaled RGBA thumbnail owned by its entry. Dropped together with the
/// entry on removal, which is what frees the decoded pixel buffer.
#[derive(Debug, Clone)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// One page-to-be: the raw image bytes, the dimensions resolved at
/// ingestion, the caption, and the in-flight caption marker.
#[derive(Debug, Clone)]
pub struct PageEntry {
    pub id: EntryId,
    pub data: Arc<[u8]>,
    pub mime: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub caption: String,
    pub caption_pending: bool,
    pub preview: Preview,
}
