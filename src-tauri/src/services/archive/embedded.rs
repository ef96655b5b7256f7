use crate::types::errors::ResourceError;

/// Archive staged by `build.rs`. Empty when the build found no `flags.zip`.
static BUNDLED_ARCHIVE: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/flags.zip"));

/// Leading signatures a ZIP file can start with: local file header,
/// end of central directory (empty archive), spanned archive marker.
const ZIP_SIGNATURES: [[u8; 4]; 3] = [*b"PK\x03\x04", *b"PK\x05\x06", *b"PK\x07\x08"];

/// Read-only view of ZIP bytes that passed the loader checks.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedArchive<'a> {
    bytes: &'a [u8],
}

impl EmbeddedArchive<'static> {
    /// Locate the archive compiled into this executable.
    pub fn load() -> Result<Self, ResourceError> {
        if env!("FLAG_ARCHIVE_BUNDLED") != "1" {
            return Err(ResourceError::Missing);
        }
        Self::from_bytes(BUNDLED_ARCHIVE)
    }
}

impl<'a> EmbeddedArchive<'a> {
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, ResourceError> {
        if bytes.is_empty() {
            return Err(ResourceError::Empty);
        }
        if !ZIP_SIGNATURES.iter().any(|sig| bytes.starts_with(sig)) {
            return Err(ResourceError::Unloadable);
        }
        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
#[path = "tests/embedded_tests.rs"]
mod tests;
