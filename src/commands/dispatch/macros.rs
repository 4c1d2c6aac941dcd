//! Phase timing for command dispatch

/// Log a dispatch phase with the time elapsed since startup.
///
/// Phases log at trace level; `--verbose` raises them to debug.
///
/// Usage:
/// ```ignore
/// trace_phase!(ctx, "load_catalog");
/// ```
macro_rules! trace_phase {
    ($ctx:expr, $label:expr) => {
        if $ctx.cli.verbose {
            ::tracing::debug!(elapsed = ?$ctx.start.elapsed(), phase = $label, "phase");
        } else {
            ::tracing::trace!(elapsed = ?$ctx.start.elapsed(), phase = $label, "phase");
        }
    };
}

pub(crate) use trace_phase;
