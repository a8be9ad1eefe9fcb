use std::path::PathBuf;
use std::sync::Arc;

// Re-export types from library crates
pub use snapdoc_collection::{EntryId, IncomingFile, PendingEntry, SkippedFile};
pub use snapdoc_render::{DocumentPage, RenderOptions};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum AppCommand {
    IngestFiles {
        files: Vec<IncomingFile>,
    },
    RequestCaption {
        id: EntryId,
        data: Arc<[u8]>,
        mime: String,
    },
    GeneratePdf {
        pages: Vec<DocumentPage>,
        options: RenderOptions,
        output_path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug)]
pub enum AppUpdate {
    FilesIngested {
        entries: Vec<PendingEntry>,
        skipped: Vec<SkippedFile>,
    },
    CaptionReady {
        id: EntryId,
        caption: String,
    },
    CaptionFailed {
        id: EntryId,
        message: String,
    },
    PdfComplete {
        path: PathBuf,
        page_count: usize,
    },
    Error {
        message: String,
    },
}
