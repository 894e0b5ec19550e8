use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::git::ProcessGit;

/// A workspace root and the path of a file inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceFolder {
    /// Directory git commands run in.
    pub root: PathBuf,
    /// Path of the file relative to `root`, always `/`-separated.
    pub relative_path: String,
}

/// Path of `file` relative to `root`, with `/` separators.
///
/// Returns `None` when `file` is not strictly inside `root`.
#[must_use]
pub fn relative_path(root: &Path, file: &Path) -> Option<String> {
    let rest = file.strip_prefix(root).ok()?;
    let mut segments = Vec::new();
    for component in rest.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_string_lossy().into_owned()),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if segments.is_empty() {
        return None;
    }
    Some(segments.join("/"))
}

/// Workspace root used when none is given: the top level of the repository
/// containing `start`, or `start` itself outside a repository.
pub async fn discover_workspace(git: &ProcessGit, start: &Path) -> PathBuf {
    match git.toplevel(start).await {
        Ok(root) => root,
        Err(e) => {
            debug!(start = %start.display(), error = %e, "No enclosing repository");
            start.to_path_buf()
        }
    }
}
