use thiserror::Error;

/// Recoverable failures reported by the station's external collaborators.
///
/// None of these are fatal: each one maps to a local fallback (revert the
/// play intent, keep the placeholder catalog, offer a manual copy, skip the
/// persisted flag).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StationError {
    #[error("playback was rejected: {0}")]
    Playback(String),

    #[error("catalog request failed: {0}")]
    Catalog(String),

    #[error("catalog payload could not be decoded: {0}")]
    CatalogDecode(String),

    #[error("clipboard write was denied: {0}")]
    Clipboard(String),

    #[error("storage is unavailable: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for StationError {
    fn from(err: serde_json::Error) -> Self {
        StationError::CatalogDecode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StationError>;
