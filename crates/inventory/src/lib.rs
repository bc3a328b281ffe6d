//! Inventory domain module.
//!
//! This crate contains the inventory record as the API serves it, the stock
//! status rule, and the scan wire types. Pure logic only (no IO, no HTTP).

pub mod item;
pub mod scan;

pub use item::{InventoryItem, LOW_STOCK_THRESHOLD, StockStatus};
pub use scan::{DEMO_SCAN_TAG, SIMULATOR_SCAN_TAG, ScanAction, ScanRequest, ScanResponse};
