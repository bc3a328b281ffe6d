//! Background worker imitating a fixed RFID reader.
//!
//! Every tick it POSTs one scan for a configured tag. It never touches a
//! table; dashboards pick up the change on their next load.

use std::sync::Arc;
use std::time::Duration;

use stockscan_core::RfidTag;
use stockscan_inventory::{SIMULATOR_SCAN_TAG, ScanAction, ScanRequest};
use tokio::sync::Notify;

use crate::api::InventoryApi;

/// Shortest period the scanner will tick at; smaller intervals are raised to it.
pub const MIN_SCAN_INTERVAL: Duration = Duration::from_millis(1);

/// Settings for [`PeriodicScanner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
    pub tag: RfidTag,
    pub action: ScanAction,
    /// Time between scans, at least [`MIN_SCAN_INTERVAL`].
    pub interval: Duration,
    /// Stop after this many scans. `None` runs until shutdown.
    pub max_scans: Option<u64>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            tag: RfidTag::from_static(SIMULATOR_SCAN_TAG),
            action: ScanAction::Remove,
            interval: Duration::from_secs(5),
            max_scans: None,
        }
    }
}

/// Counters reported when the scanner stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScannerSummary {
    pub succeeded: u64,
    pub failed: u64,
}

impl ScannerSummary {
    pub fn attempted(&self) -> u64 {
        self.succeeded + self.failed
    }
}

/// Periodically posts scans until shut down or `max_scans` is reached.
pub struct PeriodicScanner<A> {
    api: A,
    config: ScannerConfig,
    shutdown: Arc<Notify>,
}

impl<A> PeriodicScanner<A>
where
    A: InventoryApi + 'static,
{
    pub fn new(api: A, config: ScannerConfig) -> Self {
        Self {
            api,
            config,
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Handle that stops the scanner via `notify_one()`.
    ///
    /// A notification sent before the loop starts is kept and honored.
    pub fn shutdown_handle(&self) -> Arc<Notify> {
        self.shutdown.clone()
    }

    /// Spawn the loop on the current runtime.
    pub fn start(self) -> tokio::task::JoinHandle<ScannerSummary> {
        tokio::spawn(self.run())
    }

    /// Run the loop to completion. The first scan happens one interval in.
    pub async fn run(self) -> ScannerSummary {
        let request = ScanRequest::new(self.config.tag.clone(), self.config.action);
        let mut summary = ScannerSummary::default();
        let interval = self.config.interval.max(MIN_SCAN_INTERVAL);

        tracing::info!(
            tag_id = %request.tag_id,
            action = %request.action,
            interval = ?interval,
            "periodic scanner started"
        );

        let start = tokio::time::Instant::now() + interval;
        let mut ticker = tokio::time::interval_at(start, interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            if self
                .config
                .max_scans
                .is_some_and(|max| summary.attempted() >= max)
            {
                break;
            }

            tokio::select! {
                _ = self.shutdown.notified() => {
                    tracing::info!("periodic scanner received shutdown signal");
                    break;
                }
                _ = ticker.tick() => {
                    match self.api.record_scan(&request).await {
                        Ok(()) => {
                            summary.succeeded += 1;
                            tracing::info!(
                                tag_id = %request.tag_id,
                                action = %request.action,
                                scans = summary.attempted(),
                                "scanned tag"
                            );
                        }
                        Err(e) => {
                            summary.failed += 1;
                            tracing::error!(error = %e, tag_id = %request.tag_id, "periodic scan failed");
                        }
                    }
                }
            }
        }

        tracing::info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            "periodic scanner stopped"
        );
        summary
    }
}
