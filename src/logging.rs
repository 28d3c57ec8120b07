use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::core::persistence::storage_path;

/// Initialize tracing for a binary.
///
/// With a file prefix, log lines also go to a daily-rolling file under the
/// data directory; those files back the `/api/v1/system/logs` endpoints.
/// The returned guard must be held for the lifetime of the process so the
/// non-blocking writer flushes on shutdown.
pub fn init_tracing(file_prefix: Option<&str>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match file_prefix {
        Some(prefix) => {
            let appender = tracing_appender::rolling::daily(storage_path::logs_dir(), prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().compact())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();

            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .compact()
                .init();

            None
        }
    }
}
