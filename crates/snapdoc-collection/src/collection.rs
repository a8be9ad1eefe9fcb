//! The ordered page list and its mutation operations.
//!
//! List position is the canonical page order: the entry at index N becomes
//! page N+1 of the export. All mutations are synchronous methods on the
//! single owner, which is what makes them atomic with respect to each other;
//! async work (ingestion, captioning) only ever re-enters through an
//! `EntryId`, and a stale id is a silent no-op.

use crate::ingest::PendingEntry;
use crate::types::{EntryId, MoveDirection, PageEntry};
use snapdoc_render::DocumentPage;

#[derive(Debug, Default)]
pub struct ImageCollection {
    entries: Vec<PageEntry>,
    next_id: u64,
}

impl ImageCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fully resolved entry and allocate its id.
    pub fn push(&mut self, pending: PendingEntry) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(PageEntry {
            id,
            data: pending.data,
            mime: pending.mime,
            name: pending.name,
            width: pending.width,
            height: pending.height,
            caption: String::new(),
            caption_pending: false,
            preview: pending.preview,
        });
        id
    }

    /// Remove the entry if present, dropping its preview with it. Unknown
    /// ids are a no-op so a removal racing a finished caption task is safe.
    pub fn remove(&mut self, id: EntryId) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// Swap the entry at `index` with its neighbor. Boundary moves (first
    /// entry earlier, last entry later) and out-of-range indices are no-ops.
    pub fn move_entry(&mut self, index: usize, direction: MoveDirection) {
        let target = match direction {
            MoveDirection::Earlier => {
                if index == 0 || index >= self.entries.len() {
                    return;
                }
                index - 1
            }
            MoveDirection::Later => {
                if index + 1 >= self.entries.len() {
                    return;
                }
                index + 1
            }
        };
        self.entries.swap(index, target);
    }

    /// Replace the caption verbatim. No validation, no length limit.
    pub fn update_caption(&mut self, id: EntryId, caption: impl Into<String>) {
        if let Some(entry) = self.entry_mut(id) {
            entry.caption = caption.into();
        }
    }

    pub fn set_caption_pending(&mut self, id: EntryId, pending: bool) {
        if let Some(entry) = self.entry_mut(id) {
            entry.caption_pending = pending;
        }
    }

    pub fn get(&self, id: EntryId) -> Option<&PageEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn entry_mut(&mut self, id: EntryId) -> Option<&mut PageEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PageEntry> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Order-preserving snapshot for the render engine. The engine works on
    /// this copy, so later list mutations cannot affect a running export.
    pub fn document_pages(&self) -> Vec<DocumentPage> {
        self.entries
            .iter()
            .map(|entry| DocumentPage {
                data: entry.data.clone(),
                width: entry.width,
                height: entry.height,
                caption: entry.caption.clone(),
            })
            .collect()
    }
}
