//! Log output of the status lines.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// A subscriber printing bare event messages, one per line.
///
/// No timestamp, level or target is written, so the status lines of
/// [`connect`](crate::connect) come out verbatim.
pub fn subscriber<W>(filter: EnvFilter, make_writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(make_writer)
        .without_time()
        .with_level(false)
        .with_target(false)
        .with_ansi(false)
        .finish()
}

/// Install the stdout subscriber as the global default.
///
/// Does nothing if a global subscriber is already set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing::subscriber::set_global_default(subscriber(filter, std::io::stdout));
}

#[cfg(test)]
mod tests {
    use crate::test_utils::capture_logs;
    use tracing::{debug, error, info};

    #[test]
    fn bare_lines() {
        let ((), logs) = capture_logs(|| {
            info!("first line");
            error!("second: {}", 2);
        });
        assert_eq!(logs, "first line\nsecond: 2\n");
    }

    #[test]
    fn debug_is_filtered() {
        let ((), logs) = capture_logs(|| {
            debug!("hidden");
            info!("shown");
        });
        assert_eq!(logs, "shown\n");
    }
}
