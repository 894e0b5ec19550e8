//! Assembly of the repository context a link is generated from.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::GitError;
use super::provider::{GitProvider, ORIGIN};
use crate::source_control::{detect_host_type, normalize_git_url, HostType};

/// Snapshot of the repository facts needed to build links.
///
/// Built once per command and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitInfo {
    /// Canonical `https://<domain>/<owner>/<repo>` remote URL.
    pub remote_url: String,
    pub current_branch: String,
    /// Branch the remote's `HEAD` points at.
    pub default_branch: String,
    pub host_type: HostType,
}

/// Which commit blame links point at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlameRef {
    /// The same remote-resolved commit browse links use.
    #[default]
    Remote,
    /// The local `HEAD` commit.
    Head,
}

/// Query git for the remote URL, current branch and default branch.
///
/// Returns `None` if any query fails; a partial record is never produced.
pub async fn get_git_info(git: &dyn GitProvider, workspace: &Path) -> Option<GitInfo> {
    debug!(workspace = %workspace.display(), "Getting git info");
    match assemble_git_info(git, workspace).await {
        Ok(info) => {
            debug!(?info, "Resolved git info");
            Some(info)
        }
        Err(e) => {
            warn!(workspace = %workspace.display(), error = %e, "Error getting git info");
            None
        }
    }
}

async fn assemble_git_info(git: &dyn GitProvider, workspace: &Path) -> Result<GitInfo, GitError> {
    let raw_url = git.remote_url(workspace).await?;
    let remote_url = normalize_git_url(&raw_url);
    let host_type = detect_host_type(&remote_url);

    let current_branch = git.current_branch(workspace).await?.trim().to_string();
    let default_branch = git.default_branch(workspace).await?.trim().to_string();

    Ok(GitInfo {
        remote_url,
        current_branch,
        default_branch,
        host_type,
    })
}

/// Pick the branch whose remote-tracking ref links should be resolved against.
///
/// The current branch is used when `origin/<current>` appears in the
/// `git branch -r` listing, otherwise the default branch.
#[must_use]
pub fn select_remote_branch<'a>(remote_branches: &str, info: &'a GitInfo) -> &'a str {
    let tracking = format!("{ORIGIN}/{}", info.current_branch);
    if remote_branches.contains(&tracking) {
        &info.current_branch
    } else {
        &info.default_branch
    }
}

/// Resolve the commit hash browse and permalink URLs point at.
pub async fn resolve_remote_ref(
    git: &dyn GitProvider,
    workspace: &Path,
    info: &GitInfo,
) -> Result<String, GitError> {
    let remote_branches = git.remote_branches(workspace).await?;
    let branch = select_remote_branch(&remote_branches, info);
    let revision = format!("{ORIGIN}/{branch}");
    let hash = git.rev_parse(workspace, &revision).await?;
    debug!(revision = %revision, hash = %hash, "Resolved remote ref");
    Ok(hash.trim().to_string())
}

/// Resolve the commit hash blame URLs point at, according to `policy`.
pub async fn resolve_blame_ref(
    git: &dyn GitProvider,
    workspace: &Path,
    info: &GitInfo,
    policy: BlameRef,
) -> Result<String, GitError> {
    match policy {
        BlameRef::Remote => resolve_remote_ref(git, workspace, info).await,
        BlameRef::Head => Ok(git.rev_parse(workspace, "HEAD").await?.trim().to_string()),
    }
}

#[cfg(test)]
#[path = "info_tests.rs"]
mod tests;
