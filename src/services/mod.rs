//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `extractor.rs` — spreadsheet row → canonical field mapping.
//! - `composer.rs` — title + optional field mapping → markdown document.
//! - `spreadsheet.rs` — first-sheet header/record decoding.
//! - `title.rs` — argument classification and interactive prompt.
//! - `storage.rs` — target folder/document creation and write-once fill.
//! - `config.rs` — config file loading and settings resolution.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod composer;
pub mod config;
pub mod extractor;
pub mod output;
pub mod spreadsheet;
pub mod storage;
pub mod title;
