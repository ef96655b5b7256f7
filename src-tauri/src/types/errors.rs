use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why the bundled archive could not be handed to the extractor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("No suitable resource found in the executable")]
    Missing,
    #[error("Unable to load resource")]
    Unloadable,
    #[error("Invalid resource data")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unable to create temporary directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error extracting ZIP file: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Error extracting ZIP file: {}: {source}", .path.display())]
    Entry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("Error displaying image: {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error displaying image: {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Failure of the one-shot startup load (loader + extractor).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Internal error: {0}")]
    Internal(String),
}

impl<T> From<std::sync::PoisonError<T>> for CommandError {
    fn from(error: std::sync::PoisonError<T>) -> Self {
        CommandError::Internal(error.to_string())
    }
}

impl Serialize for CommandError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
