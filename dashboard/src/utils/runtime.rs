//! # Tokio Runtime
//!
//! The process-wide multi-threaded runtime that runs every network task.
//! eframe owns the main thread, so the runtime is entered once in `main` and
//! `tokio::spawn` works from UI handlers after that.

use once_cell::sync::OnceCell;
use tokio::runtime::{Builder, Runtime};

static TOKIO_RT: OnceCell<Runtime> = OnceCell::new();

/// Get the runtime, creating it on first use.
pub fn runtime() -> std::io::Result<&'static Runtime> {
    TOKIO_RT.get_or_try_init(|| {
        Builder::new_multi_thread()
            .enable_all()
            .thread_name("dex-dashboard-worker")
            .build()
    })
}
