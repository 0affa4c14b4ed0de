//! Client-side core of a security-scanning console.
//!
//! The crate keeps per-kind caches of projects, scans and reports in sync
//! with a scanning backend reached over JSON/HTTP, computes filtered views
//! and dashboard statistics from those caches, and drives the dialogs and
//! upload flow that trigger mutations.
//!
//! ```no_run
//! use scan_console::config::config_manager::ConfigManager;
//! use scan_console::services::scan_console::ScanConsole;
//! use scan_console::structs::view_criteria::ViewCriteria;
//!
//! # async fn run() -> scan_console::errors::ConsoleResult<()> {
//! let config = ConfigManager::load()?;
//! scan_console::logger::init_from_config(&config.logging);
//!
//! let console = ScanConsole::from_config(&config)?;
//! console.refresh_all().await;
//! let reports = console.report_view(&ViewCriteria::new().with_search("payments"));
//! println!("{} matching reports", reports.items.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
