//! Image catalog scan over the extracted archive.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect every regular file under `root` whose extension is in `extensions`
/// (compared case-insensitively).
///
/// Results are grouped by extension in `extensions` order; within a group the
/// directory-walk order is kept. A missing `root` yields an empty list.
pub fn scan_images(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }

    let mut groups: Vec<Vec<PathBuf>> = vec![Vec::new(); extensions.len()];

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Error searching for image files: {e}");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
    {
        let Some(ext) = entry.path().extension().and_then(|e| e.to_str()) else {
            continue;
        };

        if let Some(slot) = extensions
            .iter()
            .position(|allowed| allowed.eq_ignore_ascii_case(ext))
        {
            groups[slot].push(entry.into_path());
        }
    }

    let catalog: Vec<PathBuf> = groups.into_iter().flatten().collect();
    log::info!("Catalogued {} images under {}", catalog.len(), root.display());
    catalog
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
