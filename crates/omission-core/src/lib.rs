//! Core types for OMISSION records.
//!
//! A record is a short phrase plus the date it was recorded. It is never
//! stored anywhere: the whole record travels inside a reference token that
//! lives in the share URL.
//!
//! This crate provides:
//! - Input sanitizing (emoji and line-break stripping, length cap)
//! - The stateless reference codec (`REF-<YYYYMMDD>-<url-safe base64>`)
//! - Shared error types
//!
//! Everything here is pure and synchronous; rendering and HTTP live in
//! `omission-preview`.

mod error;
pub mod reference;
pub mod sanitize;

// ═══════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════

/// Maximum phrase length, in UTF-16 code units (browser `maxLength` semantics).
pub const MAX_TEXT_CHARS: usize = 60;

/// Literal first segment of every reference token.
pub const REF_PREFIX: &str = "REF";

pub use error::{Error, Result};
pub use reference::{Record, Reference, decode, encode, format_date_digits, today_local};
pub use sanitize::{prepare_submission, sanitize_input};
