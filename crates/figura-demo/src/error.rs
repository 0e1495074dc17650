use std::path::PathBuf;

use figura_core::error::BuildError;

/// Errors that can occur in the preset gallery.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// The requested preset was not found in the catalog.
    #[error("preset '{id}' not found in catalog")]
    PresetNotFound { id: String },

    /// Failed to parse a catalog file.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A build step was rejected while replaying a preset.
    #[error("build step rejected: {source}")]
    Build {
        #[from]
        source: BuildError,
    },
}
