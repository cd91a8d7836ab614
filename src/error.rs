use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, IconError>;

impl IconError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        IconError::Io { path: path.into(), source }
    }

    pub fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        IconError::Image { path: path.into(), source }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            IconError::Io { path, .. } | IconError::Image { path, .. } => path,
        }
    }
}
