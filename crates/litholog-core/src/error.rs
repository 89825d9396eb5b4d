#[derive(Debug, thiserror::Error)]
pub enum LithologError {
    #[error("failed to decode description JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown output format '{0}' (expected standard, concise, verbose, or bs5930)")]
    UnknownFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
