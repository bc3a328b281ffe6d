//! Inventory loader and scan simulator.
//!
//! Error policy:
//! - `load_inventory` / `scan` return typed errors and never log at error level.
//! - `refresh` / `simulate_scan` are the handler entry points. They catch
//!   failures, log exactly one error per failed operation, and never propagate.
//!
//! A scan and a load may run concurrently; whichever response resolves last
//! wins the table. The table lock is only taken after a response is decoded.

use std::sync::{Mutex, MutexGuard, PoisonError};

use stockscan_inventory::{ScanAction, ScanRequest};

use crate::api::{ApiError, InventoryApi};
use crate::render::{TableBody, render_rows};

/// Feedback shown to the user after a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ScanRecorded,
    ScanFailed(String),
}

impl Notice {
    pub fn is_success(&self) -> bool {
        matches!(self, Notice::ScanRecorded)
    }
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Notice::ScanRecorded => f.write_str("Scan recorded"),
            Notice::ScanFailed(reason) => write!(f, "Scan failed: {}", reason),
        }
    }
}

/// Outcome of [`Dashboard::simulate_scan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub notice: Notice,
    /// Row count after the reload, `None` if the reload failed.
    pub rows: Option<usize>,
}

/// Inventory table bound to an API.
pub struct Dashboard<A, T> {
    api: A,
    table: Mutex<T>,
}

impl<A, T> Dashboard<A, T>
where
    A: InventoryApi,
    T: TableBody,
{
    pub fn new(api: A, table: T) -> Self {
        Self {
            api,
            table: Mutex::new(table),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Read the current table contents.
    pub fn with_table<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock_table())
    }

    /// Current table in its output format.
    pub fn render(&self) -> String {
        self.with_table(|t| t.render())
    }

    /// Fetch `/items` and replace the table body. Returns the row count.
    ///
    /// On failure the table is left as it was.
    pub async fn load_inventory(&self) -> Result<usize, ApiError> {
        let items = self.api.list_items().await?;
        let rows = render_rows(&items);
        let count = rows.len();

        self.lock_table().replace_rows(rows);

        let low = items.iter().filter(|i| i.is_low_stock()).count();
        tracing::info!(rows = count, low_stock = low, "inventory loaded");
        Ok(count)
    }

    /// Handler-level load: logs a failure once and returns `None`.
    pub async fn refresh(&self) -> Option<usize> {
        match self.load_inventory().await {
            Ok(count) => Some(count),
            Err(e) => {
                tracing::error!(error = %e, "failed to load inventory");
                None
            }
        }
    }

    /// POST a single scan. The response body is ignored.
    pub async fn scan(&self, request: &ScanRequest) -> Result<(), ApiError> {
        self.api.record_scan(request).await?;
        tracing::info!(tag_id = %request.tag_id, action = %request.action, "scan recorded");
        Ok(())
    }

    /// Scan the demo tag with `action`, then reload the table regardless of
    /// whether the scan went through.
    pub async fn simulate_scan(&self, action: ScanAction) -> ScanReport {
        let request = ScanRequest::demo(action);

        let notice = match self.scan(&request).await {
            Ok(()) => Notice::ScanRecorded,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    tag_id = %request.tag_id,
                    action = %request.action,
                    "scan failed"
                );
                Notice::ScanFailed(e.to_string())
            }
        };

        let rows = self.refresh().await;
        ScanReport { notice, rows }
    }

    fn lock_table(&self) -> MutexGuard<'_, T> {
        // A panic while replacing rows leaves a complete Vec behind; keep serving it.
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A, T> core::fmt::Debug for Dashboard<A, T>
where
    A: core::fmt::Debug,
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dashboard")
            .field("api", &self.api)
            .field("table", &self.table)
            .finish()
    }
}
