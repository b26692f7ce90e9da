//! # cohortboard-core
//!
//! Core types and utilities shared by the cohortboard crates.
//!
//! This crate provides:
//! - The top-level error type used by the web server
//! - HTML escaping for text embedded in generated markup
//! - Numeric coercion for spreadsheet cells

/// Error types and result aliases.
pub mod error;
/// HTML escaping helpers.
pub mod html;
/// Numeric coercion of spreadsheet text.
pub mod numeric;

/// Re-export core error types.
pub use error::{BoardError, BoardResult};
pub use html::{escape_html, escape_script_json};
pub use numeric::to_number;
