//! In-memory backend.

use std::sync::Mutex;

use bureau_core::{ContentDocument, today};

use crate::{ContentStore, StoreError};

/// Content store holding the document in process memory.
///
/// Counts saves so callers can check how many times a document was written.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    doc: Option<ContentDocument>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `doc`.
    pub fn with_document(doc: ContentDocument) -> Self {
        Self {
            inner: Mutex::new(Inner {
                doc: Some(doc),
                saves: 0,
            }),
        }
    }

    /// The stored document, if any, without the empty-document fallback.
    pub fn snapshot(&self) -> Option<ContentDocument> {
        self.lock().doc.clone()
    }

    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A panic while holding the lock cannot leave `Inner` half-updated.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ContentStore for MemoryStore {
    fn load(&self) -> ContentDocument {
        self.lock()
            .doc
            .clone()
            .unwrap_or_else(|| ContentDocument::empty(today()))
    }

    fn save(&self, doc: &ContentDocument) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.doc = Some(doc.clone());
        inner.saves += 1;
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.lock().doc.is_some()
    }
}
