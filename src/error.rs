//! Error types for the symbol board.
//!
//! Nothing in the board core is fatal. Asset failures are absorbed into a
//! placeholder, settings failures fall back to defaults, and only the
//! composite export reports an error to its caller.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reading or rescaling an image asset
#[derive(Error, Debug)]
pub enum AssetError {
    /// IO error opening the asset
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a decodable image
    #[error("Cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Errors exporting the composite symbol
#[derive(Error, Debug)]
pub enum ExportError {
    /// Required slots are still empty; nothing was written
    #[error("Place both Role and Echelon before export (missing: {})", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },

    /// IO error writing the export file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors loading or saving settings and manifests
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;
