//! Fixed settings of the flag catalog pipeline.
//!
//! None of this is user-facing. The values exist as a struct so tests can
//! point the pipeline at an isolated temp root and skip the refresh pause.

use std::path::PathBuf;
use std::time::Duration;

/// Prefix of the per-run working directory under the temp root.
pub const WORKING_DIR_PREFIX: &str = "FlagImages_";

/// Image extensions the scanner collects, in catalog order.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Pause inserted before a refresh so the "Loading..." state is visible.
pub const REFRESH_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub temp_root: PathBuf,
    pub dir_prefix: String,
    pub extensions: Vec<String>,
    pub refresh_delay: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            temp_root: std::env::temp_dir(),
            dir_prefix: WORKING_DIR_PREFIX.to_string(),
            extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            refresh_delay: REFRESH_DELAY,
        }
    }
}

impl CatalogConfig {
    /// Default settings rooted at `temp_root`.
    pub fn with_temp_root(temp_root: impl Into<PathBuf>) -> Self {
        Self {
            temp_root: temp_root.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
