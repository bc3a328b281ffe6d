//! `stockscan-dashboard`
//!
//! **Responsibility:** Client for the RFID inventory API.
//!
//! This crate provides:
//! - HTTP bindings for `GET /items` and `POST /scan`
//! - Inventory table rendering (HTML and plain text)
//! - The dashboard: inventory loader + scan simulator with one error policy
//! - A periodic scanner imitating a fixed RFID reader
//!
//! The API is the authority; the table is a throwaway projection rebuilt on
//! every load.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod render;
pub mod scanner;

pub use api::{ApiError, HttpInventoryApi, InventoryApi};
pub use config::{API_URL_ENV, DEFAULT_API_URL, DashboardConfig};
pub use dashboard::{Dashboard, Notice, ScanReport};
pub use render::{HtmlTable, TableBody, TableRow, TextTable, render_rows};
pub use scanner::{MIN_SCAN_INTERVAL, PeriodicScanner, ScannerConfig, ScannerSummary};
