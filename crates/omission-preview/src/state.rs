//! Application state shared across all request handlers.

use std::sync::Arc;

use moka::future::Cache;
use tokio::sync::OnceCell;

use crate::config::Config;
use crate::fonts::{self, LoadedFonts};

/// Type alias for the rendered PNG cache (cache key -> PNG bytes).
///
/// Records are immutable, so a token always renders to the same image.
pub type PngCache = Cache<String, Vec<u8>>;

/// PNG cache capacity.
/// OG images are ~30-60KB and card exports ~60-120KB, so 5K entries ~= 300-600MB.
const PNG_CACHE_CAPACITY: u64 = 5_000;

/// PNG cache TTL.
const PNG_CACHE_TTL: std::time::Duration = std::time::Duration::from_secs(3600);

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// In-memory PNG cache keyed by surface and token.
    pub png_cache: PngCache,

    /// Fonts, loaded on first use.
    fonts: Arc<OnceCell<Arc<LoadedFonts>>>,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> Self {
        let png_cache = Cache::builder()
            .max_capacity(PNG_CACHE_CAPACITY)
            .time_to_live(PNG_CACHE_TTL)
            .build();

        tracing::info!(
            png_cache_capacity = PNG_CACHE_CAPACITY,
            png_cache_ttl_secs = PNG_CACHE_TTL.as_secs(),
            "application state initialized"
        );

        Self {
            config: Arc::new(config),
            png_cache,
            fonts: Arc::new(OnceCell::new()),
        }
    }

    /// Whether a font load has succeeded.
    pub fn fonts_ready(&self) -> bool {
        self.fonts.initialized()
    }

    /// Get the loaded fonts, loading them on first call.
    ///
    /// A failed load is not remembered; the next caller tries again.
    pub async fn fonts(&self) -> anyhow::Result<Arc<LoadedFonts>> {
        let fonts = self
            .fonts
            .get_or_try_init(|| async { fonts::load(&self.config).await.map(Arc::new) })
            .await?;
        Ok(Arc::clone(fonts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FontSource;

    #[tokio::test]
    async fn failed_font_load_is_retried() {
        let config = Config {
            serif_font: FontSource::parse("/nonexistent/serif.ttf"),
            mono_font: FontSource::parse("/nonexistent/mono.ttf"),
            ..Config::default()
        };
        let state = AppState::new(config);
        assert!(!state.fonts_ready());

        assert!(state.fonts().await.is_err());
        assert!(!state.fonts_ready());
        assert!(state.fonts().await.is_err());
    }
}
