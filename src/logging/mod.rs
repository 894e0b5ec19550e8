mod init;
pub use init::{init_logging, parse_rotation};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;
/// Log filename prefix used by the CLI.
pub const LOG_FILENAME: &str = "gitpoint.log";
/// Configuration for the logging system.
pub struct LogConfig {
    /// Directory where log files will be written.
    pub log_dir: PathBuf,
    /// Default log level when `RUST_LOG` is not set.
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            // Link commands are interactive; keep the console quiet unless asked.
            log_level: Level::WARN,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
/// `~/.gitpoint/logs`, or `./.gitpoint/logs` when there is no home directory.
#[must_use]
pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gitpoint")
        .join("logs")
}
#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
