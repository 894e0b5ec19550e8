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

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use gitpoint::git::{get_git_info, GitProvider};
use gitpoint::logging::{default_log_dir, init_logging, parse_rotation, LogConfig};
use gitpoint::user_config::{load_user_config, UserConfig};
use gitpoint::host::discover_workspace;
use gitpoint::{run, CliHost, CommandContext, LinkCommand, Selection};
use tracing::{debug, warn, Level};

/// gitpoint - Permalinks, blame and history links for files in hosted git repositories
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Workspace folder files must belong to (default: top level of the file's repository)
    #[arg(long, global = true, env = "GITPOINT_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Print URLs to stdout instead of copying them or opening a browser
    #[arg(long, global = true, env = "GITPOINT_PRINT", default_value = "false")]
    print: bool,

    /// Enable JSON log format
    #[arg(long, global = true, env = "GITPOINT_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, global = true, env = "GITPOINT_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.gitpoint/logs)
    #[arg(long, global = true, env = "GITPOINT_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Copy a permalink to a single line
    Line {
        file: PathBuf,
        /// 1-based line number
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        line: u32,
    },
    /// Copy a permalink to a range of lines
    Selection {
        file: PathBuf,
        /// 1-based first line
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        start: u32,
        /// 1-based last line
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        end: u32,
    },
    /// Open the file on the hosting provider
    Open { file: PathBuf },
    /// Open the file's commit history on the current branch
    History { file: PathBuf },
    /// Open the blame view of the file
    Blame { file: PathBuf },
    /// Print the repository context as JSON
    Info,
}

impl Command {
    /// Link command, target file and 0-based editor selection for this invocation.
    fn into_link(self) -> Option<(LinkCommand, PathBuf, Selection)> {
        match self {
            Self::Line { file, line } => Some((
                LinkCommand::LinePermalink,
                file,
                Selection::cursor(line.saturating_sub(1)),
            )),
            Self::Selection { file, start, end } => Some((
                LinkCommand::SelectionPermalink,
                file,
                Selection::lines(start.saturating_sub(1), end.saturating_sub(1)),
            )),
            Self::Open { file } => Some((LinkCommand::OpenInBrowser, file, Selection::cursor(0))),
            Self::History { file } => {
                Some((LinkCommand::ViewFileHistory, file, Selection::cursor(0)))
            }
            Self::Blame { file } => Some((LinkCommand::BlameFile, file, Selection::cursor(0))),
            Self::Info => None,
        }
    }
}

/// Directory the repository search starts from: the file's own directory.
fn search_start(cwd: &Path, file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => cwd.join(parent),
        _ => cwd.to_path_buf(),
    }
}

async fn print_info(git: &dyn GitProvider, workspace: &Path) -> Result<ExitCode> {
    let Some(info) = get_git_info(git, workspace).await else {
        eprintln!("Error: Not a git repository or no remote configured");
        return Ok(ExitCode::FAILURE);
    };
    let json = serde_json::to_string_pretty(&info).wrap_err("serializing git info")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(ExitCode::SUCCESS)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    let Args {
        command,
        workspace,
        print,
        log_json,
        log_rotation,
        log_dir,
        verbose,
    } = Args::parse();

    let log_config = LogConfig {
        log_dir: log_dir.unwrap_or_else(default_log_dir),
        log_level: if verbose { Level::DEBUG } else { Level::WARN },
        json_format: log_json,
        rotation: parse_rotation(&log_rotation),
    };
    if let Err(e) = init_logging(log_config) {
        // Links are still useful without a log file.
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    // Load user-level config (~/.gitpoint/config.toml); file is optional.
    let user_cfg = load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    let cwd = std::env::current_dir().wrap_err("resolving current directory")?;
    let git = user_cfg.git.provider();

    let Some((link, file, selection)) = command.into_link() else {
        let workspace = match workspace {
            Some(path) => path,
            None => discover_workspace(&git, &cwd).await,
        };
        return print_info(&git, &workspace).await;
    };

    let workspace = match workspace {
        Some(path) => path,
        None => discover_workspace(&git, &search_start(&cwd, &file)).await,
    };

    let host = CliHost::new(
        Some(file),
        selection,
        workspace,
        print || user_cfg.output.print_only,
    );
    let ctx = CommandContext {
        git: &git,
        host: &host,
        blame_ref: user_cfg.links.blame_ref,
    };

    // Failures were already reported through the host.
    match run(&ctx, link).await {
        Ok(url) => {
            debug!(url = %url, "Command finished");
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
