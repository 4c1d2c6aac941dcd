//! Structured logging setup for namecat
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! `NAMECAT_LOG` takes precedence over `--log-level` and `--verbose`.

use std::io;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a full filter directive
pub const LOG_ENV_VAR: &str = "NAMECAT_LOG";

/// Log the time elapsed since `$start` at trace level.
///
/// ```rust,ignore
/// let start = Instant::now();
/// let names = load(path)?;
/// trace_time!(start, "load_catalog", count = names.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Install the global subscriber.
///
/// Default level is warn; `verbose` raises it to debug and `log_level`
/// overrides both. `log_json` switches to one JSON object per event.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = log_level.unwrap_or(if verbose { "debug" } else { "warn" });

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level_directive(level)));

    let json_layer = log_json.then(|| {
        fmt::layer()
            .json()
            .with_current_span(false)
            .with_writer(io::stderr)
    });
    let text_layer = (!log_json).then(|| {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_ansi(false)
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    Ok(())
}

/// Expand a bare level ("debug") into a directive covering both crates.
fn level_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("namecat={level},namecat_core={level}")
    }
}
