//! In-memory [`GitProvider`] for unit tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use super::error::GitError;
use super::provider::GitProvider;

/// Answers from fixed values; a `None` field makes that query fail.
#[derive(Debug, Default)]
pub struct FakeGit {
    pub remote_url: Option<String>,
    pub current_branch: Option<String>,
    pub default_branch: Option<String>,
    pub remote_branches: Option<String>,
    pub revisions: HashMap<String, String>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeGit {
    /// A GitHub repository on `main` whose `origin/main` and `HEAD` resolve.
    pub fn github() -> Self {
        Self {
            remote_url: Some("git@github.com:acme/widget.git\n".to_string()),
            current_branch: Some("main\n".to_string()),
            default_branch: Some("main".to_string()),
            remote_branches: Some("  origin/HEAD -> origin/main\n  origin/main\n".to_string()),
            revisions: HashMap::from([
                ("origin/main".to_string(), "aaaa1111\n".to_string()),
                ("HEAD".to_string(), "bbbb2222\n".to_string()),
            ]),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_remote_url(mut self, url: &str) -> Self {
        self.remote_url = Some(url.to_string());
        self
    }

    pub fn with_current_branch(mut self, branch: &str) -> Self {
        self.current_branch = Some(branch.to_string());
        self
    }

    pub fn with_revision(mut self, revision: &str, hash: &str) -> Self {
        self.revisions.insert(revision.to_string(), hash.to_string());
        self
    }

    /// Queries made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, query: &str, value: Option<&String>) -> Result<String, GitError> {
        self.calls.lock().unwrap().push(query.to_string());
        value.cloned().ok_or_else(|| GitError::CommandFailed {
            command: query.to_string(),
            stderr: "simulated failure".to_string(),
        })
    }
}

#[async_trait]
impl GitProvider for FakeGit {
    async fn remote_url(&self, _repo: &Path) -> Result<String, GitError> {
        self.answer("remote_url", self.remote_url.as_ref())
    }

    async fn current_branch(&self, _repo: &Path) -> Result<String, GitError> {
        self.answer("current_branch", self.current_branch.as_ref())
    }

    async fn default_branch(&self, _repo: &Path) -> Result<String, GitError> {
        self.answer("default_branch", self.default_branch.as_ref())
    }

    async fn remote_branches(&self, _repo: &Path) -> Result<String, GitError> {
        self.answer("remote_branches", self.remote_branches.as_ref())
    }

    async fn rev_parse(&self, _repo: &Path, revision: &str) -> Result<String, GitError> {
        self.answer(&format!("rev_parse {revision}"), self.revisions.get(revision))
    }
}
