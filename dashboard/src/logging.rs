//! # Logging
//!
//! Sets up `tracing` with two layers:
//! - compact output on stdout
//! - a daily-rolling file under `logs/` (or `DEX_LOG_DIR`), written non-blocking
//!
//! The filter comes from `RUST_LOG` and defaults to `info`.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "dex-dashboard.log";

fn log_dir() -> PathBuf {
    lib_utils::get_env_opt("DEX_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Initialize the logging system.
///
/// Returns the file writer's guard; keep it alive until exit so buffered
/// lines are flushed. `None` when the log directory cannot be created, in
/// which case only stdout is used.
pub fn init() -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().compact().with_target(false);

    let dir = log_dir();
    let guard = match std::fs::create_dir_all(&dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true)
                .with_ansi(false);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stdout_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry().with(env_filter).with(stdout_layer).init();
            tracing::warn!("Failed to create log directory {:?}: {}", dir, e);
            None
        }
    };

    setup_panic_hook();
    tracing::info!(log_dir = %dir.display(), "Logging initialized");
    guard
}

/// Log panics through `tracing` before the default hook runs.
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());
        let message = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());

        tracing::error!(location = %location, "PANIC: {}", message);
        default_panic(panic_info);
    }));
}
