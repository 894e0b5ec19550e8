//! Clipboard access through the platform's clipboard utility.

use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use super::HostError;

/// A command-line program that copies its stdin to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

/// Candidates in order of preference.
const CLIPBOARD_TOOLS: [ClipboardTool; 5] = [
    ClipboardTool {
        program: "pbcopy",
        args: &[],
    },
    ClipboardTool {
        program: "wl-copy",
        args: &[],
    },
    ClipboardTool {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardTool {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
    ClipboardTool {
        program: "clip",
        args: &[],
    },
];

/// First clipboard utility found on `PATH`.
#[must_use]
pub fn detect_clipboard_tool() -> Option<ClipboardTool> {
    CLIPBOARD_TOOLS
        .iter()
        .find(|tool| which::which(tool.program).is_ok())
        .copied()
}

/// Copy `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), HostError> {
    let tool = detect_clipboard_tool().ok_or(HostError::ClipboardUnavailable)?;
    debug!(program = tool.program, "Writing to clipboard");

    // xclip keeps running in the background to serve the selection, so its
    // output streams must not be captured.
    let mut child = Command::new(tool.program)
        .args(tool.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).await?;
        stdin.shutdown().await?;
    }

    let status = child.wait().await?;
    if !status.success() {
        return Err(HostError::Clipboard(format!(
            "{} exited with {status}",
            tool.program
        )));
    }
    Ok(())
}
