//! [`Host`] implementation for the `gitpoint` command line.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use super::clipboard::copy_to_clipboard;
use super::workspace::{relative_path, WorkspaceFolder};
use super::{ActiveEditor, Delivery, Host, HostError, Selection};

/// Host backed by command-line arguments, the system clipboard and browser.
///
/// With `print_only`, URLs are written to stdout instead of being copied or
/// opened, which keeps the command usable over SSH and in scripts.
#[derive(Debug, Clone)]
pub struct CliHost {
    file: Option<PathBuf>,
    selection: Selection,
    workspace: PathBuf,
    print_only: bool,
}

impl CliHost {
    #[must_use]
    pub fn new(
        file: Option<PathBuf>,
        selection: Selection,
        workspace: PathBuf,
        print_only: bool,
    ) -> Self {
        Self {
            file,
            selection,
            workspace,
            print_only,
        }
    }

    fn print_url(url: &str) -> Result<Delivery, HostError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{url}")?;
        stdout.flush()?;
        Ok(Delivery::Stdout)
    }
}

#[async_trait]
impl Host for CliHost {
    fn active_editor(&self) -> Option<ActiveEditor> {
        self.file.as_ref().map(|file| ActiveEditor {
            file: file.clone(),
            selection: self.selection,
        })
    }

    fn workspace_folder(&self, file: &Path) -> Option<WorkspaceFolder> {
        // Canonicalize both sides so symlinked temp dirs and `./` prefixes compare equal
        let root = self.workspace.canonicalize().ok()?;
        let file = file.canonicalize().ok()?;
        let relative_path = relative_path(&root, &file)?;
        debug!(root = %root.display(), relative_path = %relative_path, "Resolved workspace folder");
        Some(WorkspaceFolder {
            root,
            relative_path,
        })
    }

    async fn write_clipboard(&self, text: &str) -> Result<Delivery, HostError> {
        if self.print_only {
            return Self::print_url(text);
        }
        copy_to_clipboard(text).await?;
        Ok(Delivery::Clipboard)
    }

    async fn open_external(&self, url: &str) -> Result<Delivery, HostError> {
        if self.print_only {
            return Self::print_url(url);
        }
        info!(url = %url, "Opening in browser");
        let url = url.to_string();
        tokio::task::spawn_blocking(move || webbrowser::open(&url))
            .await
            .map_err(|e| HostError::Browser(e.to_string()))?
            .map_err(|e| HostError::Browser(e.to_string()))?;
        Ok(Delivery::Browser)
    }

    fn show_info(&self, message: &str) {
        eprintln!("{message}");
    }

    fn show_error(&self, message: &str) {
        eprintln!("Error: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_editor_requires_file() {
        let host = CliHost::new(None, Selection::cursor(0), PathBuf::from("."), true);
        assert!(host.active_editor().is_none());
    }

    #[test]
    fn test_active_editor_carries_selection() {
        let selection = Selection::lines(2, 5);
        let host = CliHost::new(
            Some(PathBuf::from("src/lib.rs")),
            selection,
            PathBuf::from("."),
            true,
        );
        let editor = host.active_editor().unwrap();
        assert_eq!(editor.file, PathBuf::from("src/lib.rs"));
        assert_eq!(editor.selection, selection);
    }

    #[test]
    fn test_workspace_folder_for_file_inside() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        let file = dir.path().join("src").join("main.rs");
        std::fs::write(&file, "fn main() {}\n").unwrap();

        let host = CliHost::new(Some(file.clone()), Selection::cursor(0), dir.path().to_path_buf(), true);
        let folder = host.workspace_folder(&file).unwrap();
        assert_eq!(folder.relative_path, "src/main.rs");
        assert_eq!(folder.root, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_workspace_folder_for_file_outside() {
        let workspace = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let file = elsewhere.path().join("notes.txt");
        std::fs::write(&file, "x").unwrap();

        let host = CliHost::new(
            Some(file.clone()),
            Selection::cursor(0),
            workspace.path().to_path_buf(),
            true,
        );
        assert!(host.workspace_folder(&file).is_none());
    }

    #[tokio::test]
    async fn test_print_only_reports_stdout_delivery() {
        let host = CliHost::new(None, Selection::cursor(0), PathBuf::from("."), true);
        let url = "https://github.com/acme/widget/blob/aaaa1111/src/lib.rs";
        assert_eq!(host.write_clipboard(url).await.unwrap(), Delivery::Stdout);
        assert_eq!(host.open_external(url).await.unwrap(), Delivery::Stdout);
    }

    #[test]
    fn test_workspace_folder_for_missing_file() {
        let workspace = tempfile::tempdir().unwrap();
        let file = workspace.path().join("missing.rs");
        let host = CliHost::new(
            Some(file.clone()),
            Selection::cursor(0),
            workspace.path().to_path_buf(),
            true,
        );
        assert!(host.workspace_folder(&file).is_none());
    }
}
