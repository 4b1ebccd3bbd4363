//! # flatfile
//!
//! Load, edit and save two flat-file formats:
//! - Sectioned key/value settings (`.ini` style) via [`SettingsIni`]
//! - Delimiter-separated spreadsheets (`.csv` style) via [`SpreadsheetDelim`]
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────┐      ┌──────────────────────┐
//! │     SettingsIni      │      │   SpreadsheetDelim   │
//! │ section → key → val  │      │  rows → cells        │
//! └──────────┬───────────┘      └───────────┬──────────┘
//!            │  load / save                  │
//!            └───────────────┬───────────────┘
//!                            ▼
//!                  ┌──────────────────┐
//!                  │    LineReader    │
//!                  │ (one full line)  │
//!                  └──────────────────┘
//! ```
//!
//! Both stores are single-threaded and own their data exclusively. Every
//! failure is a [`FlatError`] carrying a kind, the store that raised it and
//! a message.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod traits;

pub mod io;
pub mod settings;
pub mod spreadsheet;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ErrorKind, FlatError, Result, ValueError};
pub use config::Config;
pub use traits::{FileLoader, FileSaver, Settings, Spreadsheet};
pub use settings::{Section, SettingsIni};
pub use spreadsheet::SpreadsheetDelim;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of flatfile
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
