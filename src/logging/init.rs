use color_eyre::eyre::{Result, WrapErr};
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};
use super::{LogConfig, LOG_FILENAME};
/// Filter from `RUST_LOG`, falling back to `level` for this crate.
fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("gitpoint={level}")))
}
/// Initialize the logging system with the given configuration.
///
/// Events go to a rotating file in `config.log_dir` and to stderr; stdout is
/// left alone so printed URLs can be piped.
pub fn init_logging(config: LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)
        .wrap_err_with(|| format!("creating log directory {}", config.log_dir.display()))?;
    let file_appender = RollingFileAppender::builder()
        .rotation(config.rotation)
        .filename_prefix(LOG_FILENAME)
        .build(&config.log_dir)
        .wrap_err("initializing rolling log file")?;
    if config.json_format {
        let json_file_layer = fmt::layer()
            .json()
            .with_writer(file_appender)
            .with_span_events(FmtSpan::CLOSE)
            .with_current_span(true)
            .with_target(true)
            .with_filter(env_filter(config.log_level));
        let json_stderr_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_target(true)
            .with_filter(env_filter(config.log_level));
        tracing_subscriber::registry()
            .with(json_file_layer)
            .with(json_stderr_layer)
            .with(ErrorLayer::default())
            .try_init()
            .wrap_err("installing tracing subscriber")?;
    } else {
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_ansi(false)
            .with_filter(env_filter(config.log_level));
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_filter(env_filter(config.log_level));
        tracing_subscriber::registry()
            .with(file_layer)
            .with(stderr_layer)
            .with(ErrorLayer::default())
            .try_init()
            .wrap_err("installing tracing subscriber")?;
    }
    Ok(())
}
/// Parse rotation period from string.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}
