use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotGitRepository,

    #[error("Failed to execute git command: {0}")]
    CommandError(String),

    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Remote '{0}' not found")]
    RemoteNotFound(String),

    #[error("Could not determine the default branch of the remote")]
    DefaultBranchNotFound,

    #[error("Git command output was not valid UTF-8")]
    InvalidUtf8,

    #[error("`{command}` timed out after {timeout_secs}s")]
    Timeout { command: String, timeout_secs: u64 },
}
