//! Structured logging.
//!
//! Records are JSON objects carrying an RFC 3339 timestamp, the level, the
//! message with its structured fields, the call site (target, file, line) and
//! the current span.

use std::io::Write;

use tracing::level_filters::LevelFilter;
use tracing::subscriber::SetGlobalDefaultError;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;

/// Minimum emitted level for the given debug flag.
pub fn level_for(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Build the JSON subscriber without installing it.
pub fn build_subscriber<W>(debug: bool, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .json()
        .with_max_level(level_for(debug))
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_writer(writer)
        .finish()
}

/// Install the process-wide logger writing to stdout.
///
/// Keep the returned guard alive for the whole run; dropping it flushes
/// whatever is still buffered.
pub fn init_logging(debug: bool) -> Result<LogGuard, SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(build_subscriber(debug, std::io::stdout))?;
    Ok(LogGuard { _private: () })
}

/// Flushes the log sink when dropped.
#[must_use = "dropping the guard flushes the logger immediately"]
#[derive(Debug)]
pub struct LogGuard {
    _private: (),
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        let _ = std::io::stdout().flush();
    }
}
