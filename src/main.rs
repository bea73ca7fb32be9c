use criptoflash::application::RefreshScheduler;
use criptoflash::config::{Config, Mode};
use criptoflash::domain::ports::MarketDataSource;
use criptoflash::infrastructure::{CoinGeckoMarketSource, MockMarketSource};
use criptoflash::interfaces::design_system::DesignSystem;
use criptoflash::interfaces::ui::CriptoFlashApp;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok(); // Load .env file

    // 1. Setup Logging
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false) // cleaner
        .pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Initializing CriptoFlash...");

    // 2. Load Config
    let config = Config::from_env()?;

    // 3. Create Tokio Runtime in a background thread
    let (runtime_tx, runtime_rx) = crossbeam_channel::bounded(1);

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to build Tokio runtime");

        let _ = runtime_tx.send(rt.handle().clone());

        // Keep the runtime alive for the lifetime of the window
        rt.block_on(std::future::pending::<()>());
    });

    let runtime = runtime_rx
        .recv()
        .expect("Failed to receive runtime handle (did background thread panic?)");

    // 4. Wire the market data source
    let source: Arc<dyn MarketDataSource> = match config.mode {
        Mode::Live => Arc::new(CoinGeckoMarketSource::new(&config)?),
        Mode::Mock => Arc::new(MockMarketSource::new()),
    };
    info!("Market data mode: {:?}", config.mode);

    // 5. Start the refresh scheduler
    let (updates_tx, updates_rx) = crossbeam_channel::unbounded();
    let mut scheduler =
        RefreshScheduler::new(runtime, source, updates_tx, config.refresh_interval());
    scheduler.start();

    let app = CriptoFlashApp::new(updates_rx, scheduler);

    // 6. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("CriptoFlash"),
        ..Default::default()
    };

    eframe::run_native(
        "CriptoFlash",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
