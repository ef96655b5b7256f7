use super::{EmbeddedArchive, WorkingDirectory};
use crate::services::config::CatalogConfig;
use crate::types::errors::ExtractError;
use std::fs;
use std::io::{self, Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// A successfully unpacked archive.
#[derive(Debug)]
pub struct Extraction {
    pub dir: WorkingDirectory,
    pub files_extracted: usize,
}

/// Unpack `archive` into a fresh working directory under `config.temp_root`.
///
/// The archive is opened before anything touches the disk. If an entry fails
/// midway, the partially written directory is dropped (and so deleted) before
/// the error is returned.
pub fn extract_archive(
    archive: &EmbeddedArchive<'_>,
    config: &CatalogConfig,
) -> Result<Extraction, ExtractError> {
    let mut zip = ZipArchive::new(Cursor::new(archive.bytes()))?;
    let dir = WorkingDirectory::create(&config.temp_root, &config.dir_prefix)?;

    let files_extracted = match unpack_entries(&mut zip, dir.path()) {
        Ok(count) => count,
        Err(e) => {
            log::warn!(
                "Extraction failed, discarding partial output in {}: {e}",
                dir.path().display()
            );
            return Err(e);
        }
    };

    log::info!(
        "Extracted {} files ({} bytes of archive) into {}",
        files_extracted,
        archive.size(),
        dir.path().display()
    );
    Ok(Extraction {
        dir,
        files_extracted,
    })
}

fn unpack_entries<R: Read + Seek>(
    zip: &mut ZipArchive<R>,
    dest_path: &Path,
) -> Result<usize, ExtractError> {
    let mut count: usize = 0;
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;

        let entry_path = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => {
                log::warn!("Skipping archive entry outside the target: {}", entry.name());
                continue;
            }
        };

        let output_path = dest_path.join(&entry_path);
        let entry_err = |source: io::Error| ExtractError::Entry {
            path: output_path.clone(),
            source,
        };

        if entry.is_dir() {
            fs::create_dir_all(&output_path).map_err(entry_err)?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent).map_err(entry_err)?;
            }
            let mut outfile = fs::File::create(&output_path).map_err(entry_err)?;
            io::copy(&mut entry, &mut outfile).map_err(entry_err)?;
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
