//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — raw rows, field mapping, document and report structs.
//! - `constants.rs` — header table, section headings and fixed document text.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `ScaffoldReport` is the `--json` output schema; keep changes to it explicit.

pub mod constants;
pub mod models;
