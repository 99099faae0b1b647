//! # KPI Tracker
//!
//! Rosters, daily labor budgets, per-shift sales targets and monthly rollups
//! for a small retail store. Usable as a standalone binary and as a library.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! kpi-tracker = { version = "0.0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use kpi_tracker::kpi;
//! use kpi_tracker::server::{AppState, create_router};
//! use kpi_tracker::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new("./data/kpi.db").unwrap();
//! store.initialize().unwrap();
//!
//! let summary = kpi::compute_monthly_summary(&store, 2024, 3).unwrap();
//!
//! let router = create_router(Arc::new(AppState::new(Arc::new(store))));
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes CLI module. Disable with `default-features = false`.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod kpi;
pub mod server;
pub mod store;
pub mod types;
