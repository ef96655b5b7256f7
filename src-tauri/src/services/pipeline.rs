//! Flag catalog pipeline: one-shot load (loader → extractor → scanner) and the
//! repeatable display cycle (selector → presenter).

use crate::services::archive::{extract_archive, tick_count, EmbeddedArchive, WorkingDirectory};
use crate::services::catalog::{scan_images, Selector};
use crate::services::config::CatalogConfig;
use crate::services::images::presenter::present;
use crate::types::errors::{LoadError, ResourceError};
use crate::types::flags::{FlagDisplay, LoadOutcome, StartupReport, StatusLine};
use std::path::{Path, PathBuf};

pub struct FlagPipeline {
    config: CatalogConfig,
    selector: Selector,
    working_dir: Option<WorkingDirectory>,
    catalog: Vec<PathBuf>,
    report: Option<StartupReport>,
}

impl FlagPipeline {
    /// Pipeline whose selector is seeded from the clock.
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_seed(config, tick_count())
    }

    pub fn with_seed(config: CatalogConfig, seed: u64) -> Self {
        Self {
            config,
            selector: Selector::with_seed(seed),
            working_dir: None,
            catalog: Vec::new(),
            report: None,
        }
    }

    /// Load the archive compiled into the executable.
    pub fn load_bundled(&mut self) -> StartupReport {
        self.load(EmbeddedArchive::load())
    }

    /// Run the startup load once. The catalog is never rebuilt: later calls
    /// return the first report unchanged, whatever its outcome.
    pub fn load(&mut self, source: Result<EmbeddedArchive<'_>, ResourceError>) -> StartupReport {
        if let Some(report) = &self.report {
            return report.clone();
        }

        let report = match self.populate(source) {
            Ok(0) => {
                log::warn!("Flag archive contains no image files");
                StartupReport {
                    outcome: LoadOutcome::NoImages,
                    status: StatusLine::error("Status: No image files found"),
                    image_count: 0,
                    error: None,
                    flag: None,
                }
            }
            Ok(count) => StartupReport {
                outcome: LoadOutcome::Loaded,
                status: StatusLine::info(format!(
                    "Status: Successfully loaded {count} flag images"
                )),
                image_count: count,
                error: None,
                flag: Some(self.show_random()),
            },
            Err(e) => {
                log::error!("Failed to load flag archive: {e}");
                let outcome = match e {
                    LoadError::Resource(_) => LoadOutcome::ResourceFailed,
                    LoadError::Extract(_) => LoadOutcome::ExtractFailed,
                };
                StartupReport {
                    outcome,
                    status: StatusLine::error("Status: Resource extraction failed"),
                    image_count: 0,
                    error: Some(e.to_string()),
                    flag: None,
                }
            }
        };

        self.report = Some(report.clone());
        report
    }

    fn populate(
        &mut self,
        source: Result<EmbeddedArchive<'_>, ResourceError>,
    ) -> Result<usize, LoadError> {
        let archive = source?;
        let extraction = extract_archive(&archive, &self.config)?;
        self.catalog = scan_images(extraction.dir.path(), &self.config.extensions);
        self.working_dir = Some(extraction.dir);
        Ok(self.catalog.len())
    }

    /// Pick a catalog entry at random and decode it.
    pub fn show_random(&mut self) -> FlagDisplay {
        let total = self.catalog.len();
        let Some(index) = self.selector.pick(total) else {
            return FlagDisplay::NoImages {
                label: "No flag images available".to_string(),
            };
        };

        let path = &self.catalog[index];
        log::debug!("Selected flag {}/{}: {}", index + 1, total, path.display());

        match present(path) {
            Ok(flag) => FlagDisplay::Shown {
                label: flag.label(),
                image_path: flag.path.to_string_lossy().to_string(),
                width: flag.width,
                height: flag.height,
                position: index + 1,
                total,
                status: StatusLine::info(format!(
                    "Status: Displaying {}/{} flag",
                    index + 1,
                    total
                )),
            },
            Err(e) => {
                log::warn!("{e}");
                FlagDisplay::Failed {
                    label: "Image loading failed".to_string(),
                    error: e.to_string(),
                }
            }
        }
    }

    /// User-triggered refresh: a short pause so the loading state is seen,
    /// then another random flag.
    pub fn refresh(&mut self) -> FlagDisplay {
        std::thread::sleep(self.config.refresh_delay);
        self.show_random()
    }

    /// Delete the working directory. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(mut dir) = self.working_dir.take() {
            dir.remove();
        }
    }

    pub fn catalog(&self) -> &[PathBuf] {
        &self.catalog
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_ref().map(|d| d.path())
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
