use crate::types::errors::ExtractError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds on the wall clock. Names the working directory and seeds the selector.
pub fn tick_count() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Directory the archive is unpacked into. Removed (best-effort) by
/// [`WorkingDirectory::remove`] or, failing that, on drop.
#[derive(Debug)]
pub struct WorkingDirectory {
    path: PathBuf,
    removed: bool,
}

impl WorkingDirectory {
    /// Create `<root>/<prefix><ticks>`, appending `_<n>` while the name is taken.
    pub fn create(root: &Path, prefix: &str) -> Result<Self, ExtractError> {
        fs::create_dir_all(root).map_err(|source| ExtractError::CreateDir {
            path: root.to_path_buf(),
            source,
        })?;

        let base_name = format!("{prefix}{}", tick_count());
        let mut candidate = root.join(&base_name);
        let mut counter = 1;
        loop {
            match fs::create_dir(&candidate) {
                Ok(()) => break,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    candidate = root.join(format!("{base_name}_{counter}"));
                    counter += 1;
                }
                Err(source) => {
                    return Err(ExtractError::CreateDir {
                        path: candidate,
                        source,
                    })
                }
            }
        }

        log::info!("Created working directory {}", candidate.display());
        Ok(Self {
            path: candidate,
            removed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Recursively delete the directory. Runs once; errors are swallowed.
    pub fn remove(&mut self) {
        if self.removed {
            return;
        }
        self.removed = true;

        if self.path.as_os_str().is_empty() || !self.path.exists() {
            return;
        }
        match fs::remove_dir_all(&self.path) {
            Ok(()) => log::info!("Removed working directory {}", self.path.display()),
            Err(e) => log::debug!(
                "Ignoring cleanup failure for {}: {e}",
                self.path.display()
            ),
        }
    }
}

impl Drop for WorkingDirectory {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
#[path = "tests/working_dir_tests.rs"]
mod tests;
