//! Logging Infrastructure
//!
//! `RUST_LOG` takes precedence over the configured level. With a log
//! directory, output goes to a daily rolling file instead of the console.

use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "campaign-store";

/// Create the log directory (and parents) if it does not exist yet
fn prepare_log_dir(dir: &str) -> std::io::Result<PathBuf> {
    let path = Path::new(dir);
    std::fs::create_dir_all(path)?;
    Ok(path.to_path_buf())
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Initialize the logger
///
/// Falls back to stdout with a warning when the log directory cannot be
/// created, so a bad `LOG_DIR` never stops the store from starting.
pub fn init_logger(log_level: &str, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level))
        .with_target(false);

    let Some(dir) = log_dir else {
        subscriber.init();
        return;
    };

    match prepare_log_dir(dir) {
        Ok(path) => {
            let file_appender = tracing_appender::rolling::daily(path, LOG_FILE_PREFIX);
            subscriber.with_ansi(false).with_writer(file_appender).init();
        }
        Err(e) => {
            subscriber.init();
            tracing::warn!(log_dir = %dir, error = %e, "Cannot create log directory, logging to stdout");
        }
    }
}
