mod collection;
mod ingest;
mod types;

pub use collection::ImageCollection;
pub use ingest::{
    DECODE_TIMEOUT, IncomingFile, IngestOutcome, PendingEntry, SkippedFile, ingest_files,
    mime_for_path,
};
pub use types::*;
