use std::path::PathBuf;

use tracing::debug;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{self, Layer, filter};

/// Installs a JSON subscriber writing to a daily rolling file in `log_dir`.
///
/// Only events from `safefile_` crates are kept. `SAFEFILE_LOG` overrides the
/// default level directives. The returned guard flushes buffered events on
/// drop and must be held for as long as logging is wanted.
pub fn init_tracing(log_dir: PathBuf) -> anyhow::Result<Guard> {
    let (writer, guard, level) = prepare_writer(log_dir.clone());

    let filter = filter::filter_fn(|metadata| metadata.target().starts_with("safefile_"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_thread_ids(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(writer)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_env("SAFEFILE_LOG").unwrap_or(level))
        .with(fmt_layer)
        .try_init()?;

    debug!(path = %log_dir.display(), "JSON logging system initialized successfully");
    Ok(Guard(guard))
}

fn prepare_writer(
    log_dir: PathBuf,
) -> (
    non_blocking::NonBlocking,
    WorkerGuard,
    tracing_subscriber::EnvFilter,
) {
    let append = tracing_appender::rolling::daily(log_dir, "safefile.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(append);
    let env = tracing_subscriber::EnvFilter::new(
        "safefile_services=debug,safefile_infra=debug,safefile_api=info",
    );

    (non_blocking, guard, env)
}

pub struct Guard(#[allow(dead_code)] WorkerGuard);

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use tracing::info;

    use super::*;

    #[test]
    fn test_init_tracing_writes_log_file() {
        let dir = tempdir().unwrap();

        let guard = init_tracing(dir.path().to_path_buf()).unwrap();
        info!(target: "safefile_services", "probe");
        drop(guard);

        let actual = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .any(|entry| entry.file_name().to_string_lossy().starts_with("safefile.log"));
        assert!(actual);

        // A second global subscriber is refused rather than panicking.
        assert!(init_tracing(dir.path().to_path_buf()).is_err());
    }
}
