//! Font loading for card rendering.
//!
//! The rasterizer never falls back to system fonts: both faces are loaded
//! from configured sources (remote URL or local file) into a dedicated
//! font database. The same bytes are served to browsers so the on-screen
//! card uses identical glyphs.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use resvg::usvg::fontdb;

use crate::config::Config;

/// Where a font binary comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// Fetched over HTTP(S).
    Url(String),
    /// Read from the local filesystem.
    Path(PathBuf),
}

impl FontSource {
    /// Interpret a config value: `http(s)://` prefixes are URLs, anything
    /// else is a path.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("https://") || value.starts_with("http://") {
            Self::Url(value.to_string())
        } else {
            Self::Path(PathBuf::from(value))
        }
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Font binaries plus the database built from them.
#[derive(Debug)]
pub struct LoadedFonts {
    /// Raw serif font bytes.
    pub serif: Arc<Vec<u8>>,
    /// Raw mono font bytes.
    pub mono: Arc<Vec<u8>>,
    /// Database holding exactly the two configured faces.
    pub database: Arc<fontdb::Database>,
}

/// Fetch both configured fonts and build a font database.
pub async fn load(config: &Config) -> anyhow::Result<LoadedFonts> {
    let client = reqwest::Client::builder()
        .timeout(config.font_timeout)
        .build()
        .context("failed to build font HTTP client")?;

    let (serif, mono) = futures::future::try_join(
        fetch(&client, &config.serif_font),
        fetch(&client, &config.mono_font),
    )
    .await?;

    let mut database = fontdb::Database::new();
    load_face(&mut database, &serif, &config.serif_font)?;
    load_face(&mut database, &mono, &config.mono_font)?;

    tracing::info!(
        faces = database.len(),
        serif_bytes = serif.len(),
        mono_bytes = mono.len(),
        "fonts loaded"
    );

    Ok(LoadedFonts {
        serif: Arc::new(serif),
        mono: Arc::new(mono),
        database: Arc::new(database),
    })
}

/// Add one font binary to the database, failing if it held no faces.
fn load_face(
    database: &mut fontdb::Database,
    data: &[u8],
    source: &FontSource,
) -> anyhow::Result<()> {
    let before = database.len();
    database.load_font_data(data.to_vec());
    if database.len() == before {
        bail!("no font faces found in {source}");
    }
    Ok(())
}

async fn fetch(client: &reqwest::Client, source: &FontSource) -> anyhow::Result<Vec<u8>> {
    match source {
        FontSource::Url(url) => {
            tracing::debug!(url = %url, "fetching font");
            let resp = client
                .get(url)
                .send()
                .await
                .with_context(|| format!("failed to fetch font {url}"))?
                .error_for_status()
                .with_context(|| format!("font fetch returned an error status: {url}"))?;
            let bytes = resp
                .bytes()
                .await
                .with_context(|| format!("failed to read font body {url}"))?;
            Ok(bytes.to_vec())
        }
        FontSource::Path(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read font {}", path.display())),
    }
}
