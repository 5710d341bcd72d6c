//! Card and page rendering.
//!
//! The card is built once as SVG ([`card`]) and reused everywhere: inlined
//! into the share page ([`record`]), rasterized for the PNG download and
//! rasterized again at Open Graph size ([`raster`]).
//!
//! HTML uses [maud](https://maud.lambda.xyz/) for compile-time templates
//! with automatic escaping. SVG text is escaped by the card builder.

pub mod card;
pub mod components;
pub mod raster;
pub mod record;

use std::sync::Arc;

use anyhow::Context;
use omission_core::Reference;

use crate::state::AppState;
use card::CardVariant;

/// Filename offered for the PNG download.
pub const DOWNLOAD_FILENAME: &str = "withhold-record.png";

/// A pinned raster output: which card, at what density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Export {
    pub variant: CardVariant,
    pub pixel_ratio: u32,
    cache_prefix: &'static str,
}

/// The downloadable card, 720x480 at 2x.
pub const DOWNLOAD: Export = Export {
    variant: CardVariant::Card,
    pixel_ratio: 2,
    cache_prefix: "card",
};

/// The Open Graph image, 1200x630 at 1x.
pub const OPEN_GRAPH: Export = Export {
    variant: CardVariant::OpenGraph,
    pixel_ratio: 1,
    cache_prefix: "og",
};

impl Export {
    /// Output size in device pixels.
    pub const fn size(&self) -> (u32, u32) {
        let (w, h) = self.variant.size();
        (w * self.pixel_ratio, h * self.pixel_ratio)
    }

    pub(crate) fn cache_key(&self, token: &str) -> String {
        format!("{}:{token}", self.cache_prefix)
    }
}

/// Render a reference to PNG, using the shared PNG cache.
///
/// Fonts are loaded on first use; rasterization runs on the blocking pool.
pub async fn render_png(
    state: &AppState,
    reference: &Reference,
    export: Export,
) -> anyhow::Result<Vec<u8>> {
    let key = export.cache_key(reference.as_str());

    if let Some(cached) = state.png_cache.get(&key).await {
        tracing::debug!(key = %key, "png cache hit");
        return Ok(cached);
    }

    tracing::debug!(key = %key, "png cache miss, rendering");

    let fonts = state.fonts().await?;
    let svg = card::render_card(
        &reference.record().text,
        reference.date_digits(),
        export.variant,
    );
    let (width, height) = export.variant.size();
    let database = Arc::clone(&fonts.database);

    let png = tokio::task::spawn_blocking(move || {
        raster::rasterize(&svg, width, height, export.pixel_ratio, database)
    })
    .await
    .context("rasterizer task failed")??;

    state.png_cache.insert(key, png.clone()).await;

    Ok(png)
}
