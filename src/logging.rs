use extdir::AppConfig;
use std::io::IsTerminal;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{FilterExt, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn level_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_new(&config.tracing_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Stdout carries the report, so console logging goes to stderr. Errors
/// always reach stderr whatever `tracing_level` says. A file layer is added
/// only when `log_file_path` is configured; the returned guard flushes it
/// on drop.
pub fn init_logger(config: &AppConfig) -> Option<WorkerGuard> {
    let (file_layer, guard) = match &config.log_file_path {
        Some(log_file_path) => {
            let file_appender = tracing_appender::rolling::never("./", log_file_path);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(level_filter(config));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .with_target(false)
                .without_time()
                .with_ansi(std::io::stderr().is_terminal())
                .with_filter(level_filter(config).or(LevelFilter::ERROR)),
        )
        .with(file_layer)
        .init();

    debug!("Tracing is configured for stderr logging.");

    guard
}
