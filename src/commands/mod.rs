//! Link commands: the actions a user triggers from the editor.
//!
//! Each command resolves the active file, assembles the git context, builds
//! one URL and hands it to the host (clipboard or browser). Failures are
//! caught in [`run`], logged, and reported through exactly one error
//! notification; no side effect happens with an incomplete URL.

mod error;

pub use error::CommandError;

use std::fmt;

use tracing::{error, info, info_span, Instrument};

use crate::git::{get_git_info, resolve_blame_ref, resolve_remote_ref, BlameRef, GitInfo, GitProvider};
use crate::host::{Delivery, Host, WorkspaceFolder};
use crate::source_control::{
    build_blame_url, build_browse_url, build_history_url, build_permalink_url, LineRange,
};

/// Commands exposed to the editor host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCommand {
    /// Permalink for the line under the cursor, copied to the clipboard.
    LinePermalink,
    /// Permalink for the selected lines, copied to the clipboard.
    SelectionPermalink,
    /// Open the file at the remote-resolved commit.
    OpenInBrowser,
    /// Open the file's commit history on the current branch.
    ViewFileHistory,
    /// Open the blame view of the file.
    BlameFile,
}

impl LinkCommand {
    /// Identifier the command is registered under.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::LinePermalink => "generate-line-permalink",
            Self::SelectionPermalink => "generate-selection-permalink",
            Self::OpenInBrowser => "open-in-browser",
            Self::ViewFileHistory => "view-file-history",
            Self::BlameFile => "blame-file",
        }
    }
}

impl fmt::Display for LinkCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Collaborators a command runs against.
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    pub git: &'a dyn GitProvider,
    pub host: &'a dyn Host,
    /// Commit blame links point at.
    pub blame_ref: BlameRef,
}

/// Run `command`, reporting the outcome through the host.
///
/// Returns the generated URL, or the error that was already shown to the user.
pub async fn run(ctx: &CommandContext<'_>, command: LinkCommand) -> Result<String, CommandError> {
    let span = info_span!("command", name = command.name());
    async {
        match execute(ctx, command).await {
            Ok(url) => Ok(url),
            Err(e) => {
                error!(error = %e, "Command failed");
                ctx.host.show_error(&e.to_string());
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}

async fn execute(ctx: &CommandContext<'_>, command: LinkCommand) -> Result<String, CommandError> {
    let editor = ctx.host.active_editor().ok_or(CommandError::NoActiveFile)?;
    if command == LinkCommand::SelectionPermalink && editor.selection.is_empty {
        return Err(CommandError::EmptySelection);
    }

    let folder = ctx
        .host
        .workspace_folder(&editor.file)
        .ok_or(CommandError::NotInWorkspace)?;

    let info = get_git_info(ctx.git, &folder.root)
        .await
        .ok_or(CommandError::GitContextUnavailable)?;

    match command {
        LinkCommand::LinePermalink => {
            let range = LineRange::single(editor.selection.cursor_line());
            copy_permalink(ctx, &folder, &info, range).await
        }
        LinkCommand::SelectionPermalink => {
            copy_permalink(ctx, &folder, &info, editor.selection.to_line_range()).await
        }
        LinkCommand::OpenInBrowser => open_browse_view(ctx, &folder, &info).await,
        LinkCommand::ViewFileHistory => open_history_view(ctx, &folder, &info).await,
        LinkCommand::BlameFile => open_blame_view(ctx, &folder, &info).await,
    }
}

async fn copy_permalink(
    ctx: &CommandContext<'_>,
    folder: &WorkspaceFolder,
    info: &GitInfo,
    range: LineRange,
) -> Result<String, CommandError> {
    let commit_hash = resolve_remote_ref(ctx.git, &folder.root, info).await?;
    let url = build_permalink_url(
        &info.remote_url,
        info.host_type,
        &commit_hash,
        &folder.relative_path,
        range,
    );
    info!(url = %url, "Generated permalink");

    let delivery = ctx.host.write_clipboard(&url).await?;
    let outcome = match delivery {
        Delivery::Stdout => "written to stdout",
        Delivery::Clipboard | Delivery::Browser => "copied to clipboard!",
    };
    let message = if range.is_single() {
        format!(
            "{} permalink for line {} {outcome}",
            info.host_type,
            range.start()
        )
    } else {
        format!(
            "{} permalink for lines {}-{} {outcome}",
            info.host_type,
            range.start(),
            range.end()
        )
    };
    ctx.host.show_info(&message);
    Ok(url)
}

async fn open_browse_view(
    ctx: &CommandContext<'_>,
    folder: &WorkspaceFolder,
    info: &GitInfo,
) -> Result<String, CommandError> {
    let commit_hash = resolve_remote_ref(ctx.git, &folder.root, info).await?;
    let url = build_browse_url(
        &info.remote_url,
        info.host_type,
        &commit_hash,
        &folder.relative_path,
    );
    let delivery = ctx.host.open_external(&url).await?;
    announce_view(ctx, delivery, &format!("Opening {url} in browser"), "Browse URL");
    Ok(url)
}

async fn open_history_view(
    ctx: &CommandContext<'_>,
    folder: &WorkspaceFolder,
    info: &GitInfo,
) -> Result<String, CommandError> {
    let url = build_history_url(
        &info.remote_url,
        info.host_type,
        &info.current_branch,
        &folder.relative_path,
    );
    let delivery = ctx.host.open_external(&url).await?;
    announce_view(ctx, delivery, "Opening file history in browser", "File history URL");
    Ok(url)
}

async fn open_blame_view(
    ctx: &CommandContext<'_>,
    folder: &WorkspaceFolder,
    info: &GitInfo,
) -> Result<String, CommandError> {
    let commit_hash = resolve_blame_ref(ctx.git, &folder.root, info, ctx.blame_ref).await?;
    let url = build_blame_url(
        &info.remote_url,
        info.host_type,
        &commit_hash,
        &folder.relative_path,
    );
    let delivery = ctx.host.open_external(&url).await?;
    announce_view(ctx, delivery, "Opening blame view in browser", "Blame URL");
    Ok(url)
}

/// Notify the user of a view URL according to where it went.
fn announce_view(ctx: &CommandContext<'_>, delivery: Delivery, opening: &str, view: &str) {
    match delivery {
        Delivery::Stdout => ctx.host.show_info(&format!("{view} written to stdout")),
        Delivery::Browser | Delivery::Clipboard => ctx.host.show_info(opening),
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
