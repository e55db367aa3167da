use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphTilesError {
    #[error("failed to load font {path:?}: {reason}")]
    FontLoad { path: PathBuf, reason: String },

    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("entries {first} and {second} both map to {filename}")]
    NameCollision { filename: String, first: usize, second: usize },

    #[error("manifest name {name:?} at index {index} {reason}")]
    InvalidManifestName { index: usize, name: String, reason: String },
}

impl GlyphTilesError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, GlyphTilesError>;
