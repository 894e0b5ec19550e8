//! [`Host`] that records every side effect, for unit tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{relative_path, ActiveEditor, Delivery, Host, HostError, Selection, WorkspaceFolder};

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub editor: Option<ActiveEditor>,
    pub workspace_root: Option<PathBuf>,
    pub fail_browser: bool,
    /// Report URLs as printed rather than copied or opened.
    pub print_only: bool,
    pub clipboard: Mutex<Vec<String>>,
    pub opened: Mutex<Vec<String>>,
    pub infos: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl RecordingHost {
    /// Editing `/workspace/widget/src/lib.rs` inside `/workspace/widget`.
    pub fn editing(selection: Selection) -> Self {
        Self {
            editor: Some(ActiveEditor {
                file: PathBuf::from("/workspace/widget/src/lib.rs"),
                selection,
            }),
            workspace_root: Some(PathBuf::from("/workspace/widget")),
            ..Self::default()
        }
    }

    pub fn take(list: &Mutex<Vec<String>>) -> Vec<String> {
        list.lock().unwrap().clone()
    }
}

#[async_trait]
impl Host for RecordingHost {
    fn active_editor(&self) -> Option<ActiveEditor> {
        self.editor.clone()
    }

    fn workspace_folder(&self, file: &Path) -> Option<WorkspaceFolder> {
        let root = self.workspace_root.clone()?;
        let relative_path = relative_path(&root, file)?;
        Some(WorkspaceFolder {
            root,
            relative_path,
        })
    }

    async fn write_clipboard(&self, text: &str) -> Result<Delivery, HostError> {
        self.clipboard.lock().unwrap().push(text.to_string());
        Ok(if self.print_only {
            Delivery::Stdout
        } else {
            Delivery::Clipboard
        })
    }

    async fn open_external(&self, url: &str) -> Result<Delivery, HostError> {
        if self.fail_browser {
            return Err(HostError::Browser("no browser".to_string()));
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(if self.print_only {
            Delivery::Stdout
        } else {
            Delivery::Browser
        })
    }

    fn show_info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn show_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
