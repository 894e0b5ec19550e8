//! Editor host integration.
//!
//! The [`Host`] trait is everything link commands need from the environment
//! they run in: the active file and selection, workspace resolution, the
//! clipboard, the browser and user notifications. [`CliHost`] implements it
//! for the command line.

mod cli;
mod clipboard;
#[cfg(test)]
pub(crate) mod recording;
mod selection;
mod workspace;

pub use cli::CliHost;
pub use clipboard::{copy_to_clipboard, detect_clipboard_tool, ClipboardTool};
pub use selection::Selection;
pub use workspace::{discover_workspace, relative_path, WorkspaceFolder};

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("No clipboard utility found (tried pbcopy, wl-copy, xclip, xsel, clip)")]
    ClipboardUnavailable,

    #[error("Failed to write to the clipboard: {0}")]
    Clipboard(String),

    #[error("Failed to open browser: {0}")]
    Browser(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where a URL handed to the host ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Clipboard,
    Browser,
    /// Printed to stdout instead of copied or opened.
    Stdout,
}

/// The file a command acts on, with the editor's selection in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEditor {
    pub file: PathBuf,
    pub selection: Selection,
}

/// Capabilities a link command needs from the editor it runs in.
#[async_trait]
pub trait Host: Send + Sync {
    /// The focused file, if any.
    fn active_editor(&self) -> Option<ActiveEditor>;

    /// The workspace folder containing `file`, if it belongs to one.
    fn workspace_folder(&self, file: &Path) -> Option<WorkspaceFolder>;

    async fn write_clipboard(&self, text: &str) -> Result<Delivery, HostError>;

    async fn open_external(&self, url: &str) -> Result<Delivery, HostError>;

    fn show_info(&self, message: &str);

    fn show_error(&self, message: &str);
}
