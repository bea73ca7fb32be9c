use crate::domain::market::RefreshState;
use crate::domain::ports::MarketDataSource;
use crossbeam_channel::Sender;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{error, info};

/// Fixed user-facing message for any failed poll. The underlying cause goes
/// to the log, never to the banner.
pub const FETCH_ERROR_MESSAGE: &str =
    "No fue posible cargar precios en este momento. Intentalo más tarde.";

/// Drives the periodic market poll on the background runtime and pushes each
/// outcome to the UI over a crossbeam channel.
///
/// Every tick spawns the fetch as its own task, so a slow response never
/// delays the next tick; whichever fetch completes last is the state the UI
/// ends up showing. `stop()` halts the ticker but lets in-flight fetches run
/// to completion.
pub struct RefreshScheduler {
    runtime: Handle,
    source: Arc<dyn MarketDataSource>,
    updates_tx: Sender<RefreshState>,
    interval: Duration,
    // Handle for the active ticker task to allow cancellation
    task: Option<JoinHandle<()>>,
}

impl RefreshScheduler {
    pub fn new(
        runtime: Handle,
        source: Arc<dyn MarketDataSource>,
        updates_tx: Sender<RefreshState>,
        interval: Duration,
    ) -> Self {
        Self {
            runtime,
            source,
            updates_tx,
            interval,
            task: None,
        }
    }

    pub fn start(&mut self) {
        if self.task.is_some() {
            return;
        }

        let source = self.source.clone();
        let updates_tx = self.updates_tx.clone();
        let period = self.interval;

        let task = self.runtime.spawn(async move {
            let mut ticker = time::interval(period);
            loop {
                // The first tick completes immediately
                ticker.tick().await;

                let source = source.clone();
                let updates_tx = updates_tx.clone();

                tokio::spawn(async move {
                    let update = match source.fetch_markets().await {
                        Ok(snapshot) => RefreshState::Ready(snapshot),
                        Err(e) => {
                            error!("RefreshScheduler: Poll failed: {:#}", e);
                            RefreshState::Failed(FETCH_ERROR_MESSAGE.to_string())
                        }
                    };

                    // The UI side may already be gone during shutdown
                    let _ = updates_tx.send(update);
                });
            }
        });

        self.task = Some(task);
        info!("RefreshScheduler: Started. Interval: {:?}", self.interval);
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("RefreshScheduler: Stopped");
        }
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
