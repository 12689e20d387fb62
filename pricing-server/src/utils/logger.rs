//! Logging Infrastructure
//!
//! Console logging, plus a daily rotating file when the configured log
//! directory already exists.
//! `RUST_LOG` takes precedence over the configured level.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Default log level (e.g., "info", "debug", "pricing_server=debug")
/// * `json_format` - JSON lines (production) or human-readable (development)
/// * `log_dir` - Optional directory for the rotating `pricing` log file; a
///   directory that does not exist is skipped, never created
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// pricing_server::init_logger("debug", false, None)?;
///
/// // Production setup (console + file)
/// pricing_server::init_logger("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let file_layer = log_dir.and_then(file_appender).map(|appender| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::sync::Mutex::new(appender))
            .boxed()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Daily appender in `dir`, or `None` when `dir` is not an existing directory
fn file_appender(dir: &str) -> Option<RollingFileAppender> {
    let log_path = Path::new(dir);
    if !log_path.is_dir() {
        eprintln!("LOG_DIR {dir} does not exist, logging to console only");
        return None;
    }
    Some(RollingFileAppender::new(Rotation::DAILY, log_path, "pricing"))
}
