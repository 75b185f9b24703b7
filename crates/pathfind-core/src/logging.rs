use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", paths = set.len());
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

/// Default filter: warnings from the binary and the library
const DEFAULT_FILTER: &str = "pathfind=warn,pathfind_core=warn";
const VERBOSE_FILTER: &str = "pathfind=debug,pathfind_core=debug";

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match (verbose, log_level) {
        (_, Some(level)) => filter_for_level(level),
        (true, None) => VERBOSE_FILTER.to_string(),
        (false, None) => DEFAULT_FILTER.to_string(),
    };

    init_with_filter(&filter, log_json)
}

/// Expand a bare level into a filter covering both crates
fn filter_for_level(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("pathfind={level},pathfind_core={level}")
    }
}

fn init_with_filter(filter: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Support PATHFIND_LOG environment variable override
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("PATHFIND_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(filter));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
