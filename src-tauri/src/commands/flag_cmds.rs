use crate::services::pipeline::FlagPipeline;
use crate::types::errors::CommandResult;
use crate::types::flags::{FlagDisplay, StartupReport};
use std::sync::Mutex;

/// Managed state holding the app's single pipeline.
///
/// Commands here are synchronous, so Tauri runs them on the main thread and
/// the lock is never contended.
pub struct PipelineState(Mutex<FlagPipeline>);

impl PipelineState {
    pub fn new(pipeline: FlagPipeline) -> Self {
        Self(Mutex::new(pipeline))
    }

    pub fn with_pipeline<T>(&self, f: impl FnOnce(&mut FlagPipeline) -> T) -> CommandResult<T> {
        let mut pipeline = self.0.lock()?;
        Ok(f(&mut pipeline))
    }

    /// Remove the working directory on exit, even if a command panicked
    /// while holding the lock.
    pub fn shutdown(&self) {
        let mut pipeline = match self.0.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        pipeline.shutdown();
    }
}

/// Extract the bundled archive, build the catalog and show the first flag.
/// Only the first call does any work.
#[tauri::command]
pub fn load_catalog(state: tauri::State<'_, PipelineState>) -> CommandResult<StartupReport> {
    state.with_pipeline(|p| p.load_bundled())
}

#[tauri::command]
pub fn show_random_flag(state: tauri::State<'_, PipelineState>) -> CommandResult<FlagDisplay> {
    state.with_pipeline(|p| p.show_random())
}

/// "Show another random flag" button.
#[tauri::command]
pub fn refresh_flag(state: tauri::State<'_, PipelineState>) -> CommandResult<FlagDisplay> {
    state.with_pipeline(|p| p.refresh())
}

#[cfg(test)]
#[path = "tests/flag_cmds_tests.rs"]
mod tests;
