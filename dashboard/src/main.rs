use anyhow::Context;
use dashboard::utils::runtime::runtime;
use dashboard::App;
use lib_core::Config;
use std::sync::Arc;

const APP_NAME: &str = "DEX Dashboard";

fn main() -> anyhow::Result<()> {
    let _log_guard = dashboard::logging::init();

    let config = Config::load().context("Failed to load configuration")?;
    let config = Arc::new(config);

    let rt = runtime().context("Failed to create Tokio runtime")?;
    let _enter = rt.enter();

    let app = App::new(Arc::clone(&config)).context("Failed to initialize application")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    tracing::info!("Starting {}", APP_NAME);
    eframe::run_native(APP_NAME, options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    tracing::info!("{} exited", APP_NAME);
    Ok(())
}
