//! Error types for loading and rendering icons

use std::path::PathBuf;

use thiserror::Error;

use crate::icon_set::IconSetError;

/// Why an SVG resource could not be loaded
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed markup at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("document has no <svg> element")]
    MissingRoot,
}

/// Errors that can occur while rendering an icon
#[derive(Error, Debug)]
pub enum RenderError {
    /// The icon could not be loaded and no fallback is configured
    #[error("icon {path} could not be loaded: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    /// The configured fallback icon could not be loaded either
    #[error("fallback icon {path} could not be loaded: {source}")]
    FallbackLoad {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    /// The loaded document has no `<svg>` element
    #[error("no <svg> element found in {path}")]
    MissingRootElement { path: PathBuf },

    /// The icon could not be located in an icon set
    #[error(transparent)]
    Source(#[from] IconSetError),

    /// Writing the mutated markup failed
    #[error("failed to serialize icon markup: {0}")]
    Serialize(String),
}

impl RenderError {
    /// Classify a failed load of an icon that has no fallback
    pub(crate) fn from_load(path: PathBuf, source: LoadError) -> Self {
        match source {
            LoadError::MissingRoot => RenderError::MissingRootElement { path },
            source => RenderError::Load { path, source },
        }
    }

    /// Classify a failed load of the fallback icon
    pub(crate) fn from_fallback(path: PathBuf, source: LoadError) -> Self {
        match source {
            LoadError::MissingRoot => RenderError::MissingRootElement { path },
            source => RenderError::FallbackLoad { path, source },
        }
    }
}
