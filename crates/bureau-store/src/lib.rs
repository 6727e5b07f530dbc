//! Storage layer: the content document behind a narrow load/save interface.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use bureau_core::ContentDocument;

/// Where the content document lives.
///
/// `load` never fails: a missing or unreadable document comes back as an
/// empty document dated today. `save` replaces the document wholesale.
pub trait ContentStore: Send + Sync {
    fn load(&self) -> ContentDocument;

    fn save(&self, doc: &ContentDocument) -> Result<(), StoreError>;

    /// Whether a document has been written to this backend yet.
    fn is_initialized(&self) -> bool;
}
