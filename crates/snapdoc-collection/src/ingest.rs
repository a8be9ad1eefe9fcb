//! Batch ingestion: MIME filtering, dimension resolution, preview creation.
//!
//! Each file is decoded independently on a blocking task, so one slow or
//! broken file never stalls the rest of the batch.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::types::{CollectionError, Preview, Result};

/// Upper bound on decoding a single file. A decode that hangs (truncated
/// stream, decompression bomb) is reported as a skipped file instead of
/// wedging ingestion forever.
pub const DECODE_TIMEOUT: Duration = Duration::from_secs(15);

/// Longest edge of the generated preview thumbnail, in pixels.
const PREVIEW_EDGE: u32 = 384;

/// A raw file as delivered by the ingestion boundary (drop target, file
/// picker, or CLI argument): bytes plus declared content type.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub name: String,
    pub mime: String,
    pub data: Arc<[u8]>,
}

/// A file that did not make it into the collection, with a human-readable
/// reason for the per-file report.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub name: String,
    pub reason: String,
}

/// A fully resolved entry waiting to be appended. Dimensions and preview are
/// already computed, so the collection never holds a half-built entry.
#[derive(Debug, Clone)]
pub struct PendingEntry {
    pub data: Arc<[u8]>,
    pub mime: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub preview: Preview,
}

#[derive(Debug, Default)]
pub struct IngestOutcome {
    pub entries: Vec<PendingEntry>,
    pub skipped: Vec<SkippedFile>,
}

/// Ingest a batch of files. Non-image MIME types are silently dropped;
/// decode failures and timeouts are collected in `skipped`. Valid files are
/// always ingested regardless of failures elsewhere in the batch.
pub async fn ingest_files(files: Vec<IncomingFile>) -> IngestOutcome {
    let mut outcome = IngestOutcome::default();

    for file in files {
        if !file.mime.starts_with("image/") {
            log::debug!("ignoring non-image file {} ({})", file.name, file.mime);
            continue;
        }

        let data = file.data.clone();
        let decode = tokio::task::spawn_blocking(move || decode_image(&data));
        let resolved = match tokio::time::timeout(DECODE_TIMEOUT, decode).await {
            Err(_) => Err(CollectionError::Timeout),
            Ok(Err(join)) => Err(CollectionError::TaskJoin(join)),
            Ok(Ok(result)) => result,
        };

        match resolved {
            Ok((width, height, preview)) => outcome.entries.push(PendingEntry {
                data: file.data,
                mime: file.mime,
                name: file.name,
                width,
                height,
                preview,
            }),
            Err(e) => {
                log::warn!("skipping {}: {e}", file.name);
                outcome.skipped.push(SkippedFile {
                    name: file.name,
                    reason: e.to_string(),
                });
            }
        }
    }

    outcome
}

fn decode_image(data: &[u8]) -> Result<(u32, u32, Preview)> {
    let img = image::load_from_memory(data)?;
    let (width, height) = (img.width(), img.height());
    let thumb = img.thumbnail(PREVIEW_EDGE, PREVIEW_EDGE).to_rgba8();
    let preview = Preview {
        width: thumb.width(),
        height: thumb.height(),
        rgba: thumb.into_raw(),
    };
    Ok((width, height, preview))
}

/// Best-effort MIME type from a file extension, for ingestion paths (CLI
/// arguments, dropped paths) where no declared type is available.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn mime_for_common_extensions() {
        assert_eq!(mime_for_path(&PathBuf::from("a.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(&PathBuf::from("b.png")), "image/png");
        assert_eq!(mime_for_path(&PathBuf::from("notes.txt")), "application/octet-stream");
        assert_eq!(mime_for_path(&PathBuf::from("noext")), "application/octet-stream");
    }
}
