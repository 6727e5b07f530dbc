//! Flat JSON file backend.

use std::io::Write;
use std::path::{Path, PathBuf};

use bureau_core::{ContentDocument, today};
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::{ContentStore, StoreError};

/// Mode for a freshly created document.
#[cfg(unix)]
const DEFAULT_MODE: u32 = 0o644;

/// Content store backed by a single pretty-printed JSON file.
///
/// Saves go through a temporary file in the same directory which is then
/// renamed over the target, so readers see either the old document or the
/// new one, never a partial write.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<ContentDocument, StoreError> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(ContentDocument::from_json(&raw)?)
    }

    /// Give the replacement file the target's mode, or 0644 for a new file.
    /// Temp files are created 0600, which would lock out other readers.
    #[cfg(unix)]
    fn match_permissions(&self, file: &std::fs::File) -> std::io::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let mode = match std::fs::metadata(&self.path) {
            Ok(meta) => meta.permissions().mode() & 0o7777,
            Err(_) => DEFAULT_MODE,
        };
        file.set_permissions(std::fs::Permissions::from_mode(mode))
    }

    #[cfg(not(unix))]
    fn match_permissions(&self, _file: &std::fs::File) -> std::io::Result<()> {
        Ok(())
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

impl ContentStore for JsonFileStore {
    fn load(&self) -> ContentDocument {
        match self.read() {
            Ok(doc) => {
                info!(
                    path = %self.path.display(),
                    departments = doc.departments.len(),
                    "loaded content document"
                );
                doc
            }
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no content document, starting empty");
                ContentDocument::empty(today())
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable content document, starting empty");
                ContentDocument::empty(today())
            }
        }
    }

    fn save(&self, doc: &ContentDocument) -> Result<(), StoreError> {
        let json = doc.to_json_pretty()?;
        let mut tmp = NamedTempFile::new_in(self.parent_dir())?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        self.match_permissions(tmp.as_file())?;
        tmp.persist(&self.path).map_err(|source| StoreError::Persist {
            path: self.path.clone(),
            source,
        })?;
        info!(
            path = %self.path.display(),
            departments = doc.departments.len(),
            last_updated = %doc.last_updated,
            "saved content document"
        );
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> ContentDocument {
        let mut doc = ContentDocument::empty(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        doc.set_bulletins(
            "Department of Energy",
            std::array::from_fn(|i| format!("bulletin {i}")),
        );
        doc
    }

    #[test]
    fn missing_file_loads_empty_today() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("content.json"));
        assert!(!store.is_initialized());

        let doc = store.load();
        assert!(doc.departments.is_empty());
        assert_eq!(doc.last_updated, today());
        // Loading never creates the file.
        assert!(!store.is_initialized());
    }

    #[test]
    fn corrupt_file_loads_empty_today() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("content.json");
        std::fs::write(&path, "{ not json").unwrap();

        let doc = JsonFileStore::new(&path).load();
        assert!(doc.departments.is_empty());
        assert_eq!(doc.last_updated, today());
    }

    #[test]
    fn short_entry_invalidates_whole_document() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("content.json");
        std::fs::write(
            &path,
            r#"{"last_updated": "2025-03-14", "departments": {
                "Department of State": {"bulletins": ["a","b","c","d","e"]},
                "Department of Energy": {"bulletins": ["a"]}
            }}"#,
        )
        .unwrap();

        let doc = JsonFileStore::new(&path).load();
        assert!(doc.departments.is_empty());
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("content.json"));
        let doc = sample();

        store.save(&doc).unwrap();
        assert!(store.is_initialized());
        assert_eq!(store.load(), doc);
    }

    #[test]
    fn save_is_pretty_printed() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("content.json"));
        store.save(&sample()).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with("{\n  \"last_updated\": \"2025-03-14\""));
        assert!(raw.contains("\n    \"Department of Energy\": {"));
    }

    #[test]
    fn save_overwrites_previous_document() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("content.json"));
        store
            .save(&ContentDocument::seeded(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
            .unwrap();
        store.save(&sample()).unwrap();

        let doc = store.load();
        assert!(doc.department("Department of State").is_none());
        assert!(doc.department("Department of Energy").is_some());
    }

    #[test]
    fn save_leaves_no_temp_files() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("content.json"));
        store.save(&sample()).unwrap();
        store.save(&sample()).unwrap();

        let entries = std::fs::read_dir(tmp.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[cfg(unix)]
    #[test]
    fn new_document_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("content.json"));
        store.save(&sample()).unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn save_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("content.json");
        std::fs::write(&path, "{}").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        JsonFileStore::new(&path).save(&sample()).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("nope").join("content.json"));
        assert!(matches!(store.save(&sample()), Err(StoreError::Io(_))));
    }
}
