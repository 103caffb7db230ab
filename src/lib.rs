// navpatch - regex patcher for the CheckLog detail view
// Adds an onFollowLog callback, rewires the pull button and updates the sheet call site

pub mod error;
pub mod patch;
pub mod preview;

pub use error::{PatchError, PatchResult};
pub use patch::{PatchOptions, PatchReport, Patcher, DEFAULT_TARGET};

use anyhow::Result;
use tracing::debug;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Default log filter when `RUST_LOG` is unset.
///
/// Pattern misses are reported at `info`, so a plain run prints nothing
/// but the status line.
pub fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "error"
    }
}

/// Initialize logging on stderr
///
/// stdout is reserved for the status line and diff output, so the
/// subscriber writes to stderr without ANSI colours. `RUST_LOG` wins over
/// `default_level` when set.
pub fn init_with_logger(default_level: &str) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))?;

    fmt::Subscriber::builder()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    debug!("Initializing navpatch v{}", version());
    Ok(())
}
