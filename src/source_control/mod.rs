//! Source control integration for generating URLs to view code in a web UI.
//!
//! This module provides utilities for:
//! - Detecting which hosting provider a remote belongs to (GitHub, GitLab, Bitbucket)
//! - Canonicalizing SSH, HTTPS, git-protocol and vscode.dev remote URLs
//! - Generating provider-specific browse, history, blame and permalink URLs
//!
//! Everything in here is pure: no process is spawned and nothing is logged,
//! so the functions can be exercised directly from unit tests.

mod detection;
mod normalize;
mod platforms;
mod range;

pub use detection::{detect_host_type, HostFormat, HostType, LineAnchor};
pub use normalize::normalize_git_url;
pub use platforms::{build_blame_url, build_browse_url, build_history_url, build_permalink_url};
pub use range::LineRange;
