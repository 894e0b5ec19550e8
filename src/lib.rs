// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod commands;
pub mod git;
pub mod host;
pub mod logging;
pub mod source_control;
pub mod user_config;

// Re-export commonly used types
pub use commands::{run, CommandContext, CommandError, LinkCommand};
pub use git::{get_git_info, BlameRef, GitError, GitInfo, GitProvider, ProcessGit};
pub use host::{ActiveEditor, CliHost, Delivery, Host, HostError, Selection, WorkspaceFolder};
pub use source_control::{
    build_blame_url, build_browse_url, build_history_url, build_permalink_url, detect_host_type,
    normalize_git_url, HostType, LineRange,
};
pub use user_config::{load_user_config, UserConfig, UserConfigError};
