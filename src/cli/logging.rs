//! Logger setup for the binary

use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle, opt_format};

/// Start logging to stderr.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `verbose`.
/// Keep the returned handle alive for the life of the process.
pub fn setup_logging(verbose: bool) -> Result<LoggerHandle> {
    let fallback = if verbose { "debug" } else { "warn" };
    Logger::try_with_env_or_str(fallback)
        .context("invalid log specification")?
        .format(opt_format)
        .start()
        .context("failed to start logger")
}
