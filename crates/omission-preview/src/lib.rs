//! OMISSION Preview - share pages, PNG export and Open Graph images.
//!
//! This crate provides the HTTP server for OMISSION records. There is no
//! database: every page and image is derived from the reference token in
//! the URL, so responses are immutable and cache well behind a CDN.
//!
//! # Architecture
//!
//! - **Author**: `POST /record` sanitizes, trims and encodes the phrase, then
//!   redirects to its share link
//! - **Render**: the card is built as SVG, inlined into HTML (maud) and
//!   rasterized to PNG (resvg) with explicitly loaded fonts
//! - **Cache**: in-process moka cache for PNGs + Cache-Control headers
//!
//! # URL Pattern
//!
//! ```text
//! GET /r/REF-<YYYYMMDD>-<url-safe base64>
//! ```
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud and XML-escaped in SVG
//! - Tokens are percent-encoded before reuse in URLs
//! - Strict Content-Security-Policy: inline scripts only, same-origin fonts
//! - X-Frame-Options: DENY prevents clickjacking

pub mod config;
pub mod error;
pub mod fonts;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
