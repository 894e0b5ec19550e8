//! Git integration.
//!
//! This module provides:
//! - [`GitProvider`], the seam through which repository facts are read
//! - [`ProcessGit`], the provider that runs the `git` binary
//! - [`get_git_info`] and the ref resolution used by link commands
mod error;
#[cfg(test)]
pub(crate) mod fake;
mod info;
mod provider;

pub use error::GitError;
pub use info::{
    get_git_info, resolve_blame_ref, resolve_remote_ref, select_remote_branch, BlameRef, GitInfo,
};
pub use provider::{parse_head_branch, GitProvider, ProcessGit, ORIGIN};
