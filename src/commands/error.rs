use thiserror::Error;

use crate::git::GitError;
use crate::host::HostError;

/// Failures a link command reports to the user.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("No active text editor")]
    NoActiveFile,

    #[error("No text selected")]
    EmptySelection,

    #[error("File is not part of a workspace")]
    NotInWorkspace,

    #[error("Not a git repository or no remote configured")]
    GitContextUnavailable,

    #[error("Failed to get git branch information: {0}")]
    LinkGeneration(#[from] GitError),

    #[error(transparent)]
    Host(#[from] HostError),
}
