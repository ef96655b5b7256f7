use crate::types::errors::PresentError;
use image::ImageReader;
use std::path::{Path, PathBuf};

/// A decoded catalog entry ready for the image viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedFlag {
    pub path: PathBuf,
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl PresentedFlag {
    pub fn label(&self) -> String {
        format!("Flag: {}", self.name)
    }
}

/// Decode `path` and derive its display name.
///
/// The format is sniffed from the file header first, so a PNG saved as
/// `.jpg` still decodes; the extension is only the fallback.
pub fn present(path: &Path) -> Result<PresentedFlag, PresentError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| PresentError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let img = reader.decode().map_err(|source| PresentError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(PresentedFlag {
        path: path.to_path_buf(),
        name: flag_name(path),
        width: img.width(),
        height: img.height(),
    })
}

/// File name without directory and extension.
pub fn flag_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "tests/presenter_tests.rs"]
mod tests;
