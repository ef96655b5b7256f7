//! IPC contracts between the flag commands and the frontend.

use serde::Serialize;

/// Text for the status label plus whether it is painted red.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Terminal state of the startup load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadOutcome {
    Loaded,
    NoImages,
    ResourceFailed,
    ExtractFailed,
}

/// Result of `load_catalog`: what the status label shows after startup,
/// the detail for the error dialog (if any) and the first flag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupReport {
    pub outcome: LoadOutcome,
    pub status: StatusLine,
    pub image_count: usize,
    pub error: Option<String>,
    pub flag: Option<FlagDisplay>,
}

/// One Selector + Presenter cycle as seen by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum FlagDisplay {
    /// Decoded successfully; `position` is 1-based.
    #[serde(rename_all = "camelCase")]
    Shown {
        label: String,
        image_path: String,
        width: u32,
        height: u32,
        position: usize,
        total: usize,
        status: StatusLine,
    },
    /// The selected file could not be decoded. Refresh may pick another.
    #[serde(rename_all = "camelCase")]
    Failed { label: String, error: String },
    /// Catalog is empty; nothing to select from.
    #[serde(rename_all = "camelCase")]
    NoImages { label: String },
}

impl FlagDisplay {
    pub fn label(&self) -> &str {
        match self {
            FlagDisplay::Shown { label, .. }
            | FlagDisplay::Failed { label, .. }
            | FlagDisplay::NoImages { label } => label,
        }
    }
}

#[cfg(test)]
#[path = "tests/flags_tests.rs"]
mod tests;
