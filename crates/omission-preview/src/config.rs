//! Application configuration loaded from environment variables.

use std::time::Duration;

use anyhow::Context;

use crate::fonts::FontSource;

/// Playfair Display (variable weight), the serif face used for phrases.
pub const DEFAULT_SERIF_FONT: &str =
    "https://github.com/google/fonts/raw/main/ofl/playfairdisplay/PlayfairDisplay%5Bwght%5D.ttf";

/// IBM Plex Mono Regular, used for labels and metadata.
pub const DEFAULT_MONO_FONT: &str =
    "https://github.com/google/fonts/raw/main/ofl/ibmplexmono/IBMPlexMono-Regular.ttf";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Public base URL, used for canonical links and OG image URLs.
    pub base_url: String,

    /// Site name shown in OG tags.
    pub site_name: String,

    /// Pause between submitting a phrase and redirecting to its record.
    pub record_delay: Duration,

    /// Where to load the serif font from.
    pub serif_font: FontSource,

    /// Where to load the monospace font from.
    pub mono_font: FontSource,

    /// Timeout for fetching remote fonts.
    pub font_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            base_url: "http://localhost:8080".to_string(),
            site_name: "OMISSION".to_string(),
            record_delay: Duration::from_millis(600),
            serif_font: FontSource::parse(DEFAULT_SERIF_FONT),
            mono_font: FontSource::parse(DEFAULT_MONO_FONT),
            font_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `OMISSION_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `OMISSION_BASE_URL`: Public base URL (default: "http://localhost:8080")
    /// - `OMISSION_SITE_NAME`: Site name (default: "OMISSION")
    /// - `OMISSION_RECORD_DELAY_MS`: Recording pause in ms (default: 600)
    /// - `OMISSION_SERIF_FONT`: URL or path of the serif TTF/OTF
    /// - `OMISSION_MONO_FONT`: URL or path of the mono TTF/OTF
    /// - `OMISSION_FONT_TIMEOUT_SECS`: Font fetch timeout (default: 10)
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let bind_addr = std::env::var("OMISSION_BIND_ADDR").unwrap_or(defaults.bind_addr);

        let base_url = std::env::var("OMISSION_BASE_URL")
            .unwrap_or(defaults.base_url)
            .trim_end_matches('/')
            .to_string();

        let site_name = std::env::var("OMISSION_SITE_NAME").unwrap_or(defaults.site_name);

        let record_delay = match std::env::var("OMISSION_RECORD_DELAY_MS") {
            Ok(ms) => Duration::from_millis(
                ms.trim()
                    .parse()
                    .with_context(|| format!("OMISSION_RECORD_DELAY_MS is not a number: {ms}"))?,
            ),
            Err(_) => defaults.record_delay,
        };

        let serif_font = std::env::var("OMISSION_SERIF_FONT")
            .map(|s| FontSource::parse(&s))
            .unwrap_or(defaults.serif_font);

        let mono_font = std::env::var("OMISSION_MONO_FONT")
            .map(|s| FontSource::parse(&s))
            .unwrap_or(defaults.mono_font);

        let font_timeout = match std::env::var("OMISSION_FONT_TIMEOUT_SECS") {
            Ok(secs) => Duration::from_secs(
                secs.trim()
                    .parse()
                    .with_context(|| format!("OMISSION_FONT_TIMEOUT_SECS is not a number: {secs}"))?,
            ),
            Err(_) => defaults.font_timeout,
        };

        tracing::info!(
            bind_addr = %bind_addr,
            base_url = %base_url,
            site_name = %site_name,
            record_delay_ms = record_delay.as_millis() as u64,
            serif_font = %serif_font,
            mono_font = %mono_font,
            "preview configuration loaded"
        );

        Ok(Self {
            bind_addr,
            base_url,
            site_name,
            record_delay,
            serif_font,
            mono_font,
            font_timeout,
        })
    }
}
