use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to replace {path}: {source}")]
    Persist {
        path: std::path::PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}
