//! SVG to PNG rasterization.

use std::sync::Arc;

use anyhow::{Context, anyhow};
use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg::{self, fontdb};

use super::card::{BACKGROUND, Rgb, SERIF_FAMILY};

/// Rasterize an SVG document of `width`x`height` CSS pixels at
/// `pixel_ratio` device pixels per CSS pixel.
///
/// Text is shaped only with faces from `fonts`. The canvas is pre-filled
/// with the card background so the export never has transparent pixels.
pub fn rasterize(
    svg: &str,
    width: u32,
    height: u32,
    pixel_ratio: u32,
    fonts: Arc<fontdb::Database>,
) -> anyhow::Result<Vec<u8>> {
    let options = usvg::Options {
        fontdb: fonts,
        font_family: SERIF_FAMILY.to_string(),
        ..usvg::Options::default()
    };

    let tree = usvg::Tree::from_str(svg, &options).context("SVG parse error")?;

    let scale = pixel_ratio.max(1);
    let mut pixmap = Pixmap::new(width * scale, height * scale)
        .ok_or_else(|| anyhow!("failed to create {width}x{height}@{scale}x pixmap"))?;
    pixmap.fill(opaque(BACKGROUND));

    resvg::render(
        &tree,
        Transform::from_scale(scale as f32, scale as f32),
        &mut pixmap.as_mut(),
    );

    pixmap
        .encode_png()
        .map_err(|e| anyhow!("PNG encode error: {e}"))
}

fn opaque(Rgb(r, g, b): Rgb) -> Color {
    Color::from_rgba8(r, g, b, 0xFF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::card::{CardVariant, render_card};

    /// Read width and height from the PNG IHDR chunk.
    fn png_size(png: &[u8]) -> (u32, u32) {
        assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
        let w = u32::from_be_bytes(png[16..20].try_into().unwrap());
        let h = u32::from_be_bytes(png[20..24].try_into().unwrap());
        (w, h)
    }

    fn empty_fonts() -> Arc<fontdb::Database> {
        Arc::new(fontdb::Database::new())
    }

    #[test]
    fn export_background_matches_card() {
        assert_eq!(opaque(BACKGROUND), Color::from_rgba8(0xFA, 0xFA, 0xFA, 0xFF));
    }

    #[test]
    fn rasterize_card_at_double_density() {
        let svg = render_card("Checking notifications", "20260217", CardVariant::Card);
        let png = rasterize(&svg, 720, 480, 2, empty_fonts()).unwrap();
        assert_eq!(png_size(&png), (1440, 960));
    }

    #[test]
    fn rasterize_open_graph_at_native_size() {
        let svg = render_card("Checking notifications", "20260217", CardVariant::OpenGraph);
        let png = rasterize(&svg, 1200, 630, 1, empty_fonts()).unwrap();
        assert_eq!(png_size(&png), (1200, 630));
    }

    #[test]
    fn rasterize_zero_ratio_treated_as_one() {
        let svg = render_card("x", "20260217", CardVariant::Card);
        let png = rasterize(&svg, 720, 480, 0, empty_fonts()).unwrap();
        assert_eq!(png_size(&png), (720, 480));
    }

    #[test]
    fn rasterize_rejects_invalid_svg() {
        let err = rasterize("<not-svg", 10, 10, 1, empty_fonts()).unwrap_err();
        assert!(err.to_string().contains("SVG parse error"));
    }
}
