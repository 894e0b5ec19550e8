//! Repository facts obtained by running the `git` binary.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::error::GitError;

/// The only remote links are generated for.
pub const ORIGIN: &str = "origin";

/// Source of raw repository facts.
///
/// Every method runs in the repository at `repo` and returns trimmed output.
/// Implementations must not cache between calls.
#[async_trait]
pub trait GitProvider: Send + Sync {
    /// Raw URL of the `origin` remote (`git config --get remote.origin.url`).
    async fn remote_url(&self, repo: &Path) -> Result<String, GitError>;

    /// Name of the checked-out branch (`git rev-parse --abbrev-ref HEAD`).
    async fn current_branch(&self, repo: &Path) -> Result<String, GitError>;

    /// Branch the remote's `HEAD` points at (`git remote show origin`).
    async fn default_branch(&self, repo: &Path) -> Result<String, GitError>;

    /// Listing of remote-tracking branches (`git branch -r`).
    async fn remote_branches(&self, repo: &Path) -> Result<String, GitError>;

    /// Commit hash a revision resolves to (`git rev-parse <revision>`).
    async fn rev_parse(&self, repo: &Path, revision: &str) -> Result<String, GitError>;
}

/// [`GitProvider`] backed by `git` child processes.
#[derive(Debug, Clone)]
pub struct ProcessGit {
    program: String,
    timeout: Option<Duration>,
}

impl Default for ProcessGit {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            timeout: None,
        }
    }
}

impl ProcessGit {
    #[must_use]
    pub fn new(program: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Top-level directory of the working tree containing `dir`.
    pub async fn toplevel(&self, dir: &Path) -> Result<PathBuf, GitError> {
        let root = self.run(dir, &["rev-parse", "--show-toplevel"]).await?;
        Ok(PathBuf::from(root.trim()))
    }

    /// Run git with `args` in `repo` and return its stdout.
    ///
    /// A non-zero exit status is an error; stderr of a successful command is
    /// only logged.
    async fn run(&self, repo: &Path, args: &[&str]) -> Result<String, GitError> {
        let command = format!("git {}", args.join(" "));
        debug!(command = %command, repo = %repo.display(), "Running git");

        let mut child = Command::new(&self.program);
        child
            .args(args)
            .current_dir(repo)
            // Clear GIT_DIR to avoid being affected by git hooks environment
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            // Parsed output (`HEAD branch:`, "not a git repository") is only stable untranslated
            .env("LC_ALL", "C")
            .env_remove("LANGUAGE")
            .stdin(Stdio::null())
            .kill_on_drop(true);
        let output = child.output();

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, output)
                .await
                .map_err(|_| GitError::Timeout {
                    command: command.clone(),
                    timeout_secs: limit.as_secs(),
                })?,
            None => output.await,
        }
        .map_err(|e| GitError::CommandError(e.to_string()))?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            if stderr.contains("not a git repository") {
                return Err(GitError::NotGitRepository);
            }
            return Err(GitError::CommandFailed { command, stderr });
        }
        if !stderr.is_empty() {
            debug!(command = %command, stderr = %stderr, "git wrote to stderr");
        }

        String::from_utf8(output.stdout).map_err(|_| GitError::InvalidUtf8)
    }
}

#[async_trait]
impl GitProvider for ProcessGit {
    async fn remote_url(&self, repo: &Path) -> Result<String, GitError> {
        let key = format!("remote.{ORIGIN}.url");
        match self.run(repo, &["config", "--get", &key]).await {
            Ok(url) if !url.trim().is_empty() => Ok(url.trim().to_string()),
            // `git config --get` exits 1 without output when the key is unset
            Ok(_) => Err(GitError::RemoteNotFound(ORIGIN.to_string())),
            Err(GitError::CommandFailed { stderr, .. }) if stderr.is_empty() => {
                Err(GitError::RemoteNotFound(ORIGIN.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    async fn current_branch(&self, repo: &Path) -> Result<String, GitError> {
        let branch = self.run(repo, &["rev-parse", "--abbrev-ref", "HEAD"]).await?;
        Ok(branch.trim().to_string())
    }

    async fn default_branch(&self, repo: &Path) -> Result<String, GitError> {
        let output = self.run(repo, &["remote", "show", ORIGIN]).await?;
        parse_head_branch(&output).ok_or(GitError::DefaultBranchNotFound)
    }

    async fn remote_branches(&self, repo: &Path) -> Result<String, GitError> {
        self.run(repo, &["branch", "-r"]).await
    }

    async fn rev_parse(&self, repo: &Path, revision: &str) -> Result<String, GitError> {
        let hash = self.run(repo, &["rev-parse", revision]).await?;
        Ok(hash.trim().to_string())
    }
}

/// Extract the `HEAD branch:` value from `git remote show` output.
///
/// Returns `None` when the line is missing or git reports `(unknown)`.
#[must_use]
pub fn parse_head_branch(remote_show: &str) -> Option<String> {
    remote_show
        .lines()
        .find_map(|line| line.trim().strip_prefix("HEAD branch:"))
        .map(str::trim)
        .filter(|branch| !branch.is_empty() && *branch != "(unknown)")
        .map(ToString::to_string)
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
