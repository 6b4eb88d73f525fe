//! Rasterization capability: vector markup in, PNG bytes out.
//!
//! The pipeline consumes rendering through the [`Renderer`] trait so the
//! resvg-backed implementation can be swapped for a deterministic placeholder
//! in tests. The contract is strict: the decoded output dimensions equal the
//! requested width and height exactly, and any failure is fatal to the run.

use std::sync::Arc;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree, fontdb};

use crate::error::RenderError;

/// Converts vector markup into raster bytes at an exact pixel size.
pub trait Renderer {
    /// Renders `markup` to PNG bytes whose decoded dimensions are exactly
    /// `width` x `height`.
    fn render(&self, markup: &str, width: u32, height: u32) -> Result<Vec<u8>, RenderError>;
}

/// resvg-backed production renderer.
///
/// System fonts are loaded once at construction so `<text>` elements in the
/// templates resolve to real glyph outlines.
pub struct SvgRenderer {
    fontdb: Arc<fontdb::Database>,
}

impl SvgRenderer {
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self {
            fontdb: Arc::new(db),
        }
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, markup: &str, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        let opts = Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Options::default()
        };
        let tree = Tree::from_str(markup, &opts).map_err(|e| RenderError::Parse(e.to_string()))?;

        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::Allocate { width, height })?;

        // Scale each axis independently so the output always fills the
        // requested dimensions, whatever the template's intrinsic aspect.
        let svg_size = tree.size();
        let transform = Transform::from_scale(
            width as f32 / svg_size.width(),
            height as f32 / svg_size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        encode_png(&pixmap_to_rgba_image(&pixmap))
    }
}

/// Deterministic stand-in renderer: ignores the markup and produces a
/// transparent PNG of the requested dimensions.
///
/// Useful for exercising the writer and pipeline without real rasterization.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl Renderer for PlaceholderRenderer {
    fn render(&self, _markup: &str, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::Allocate { width, height });
        }
        encode_png(&RgbaImage::new(width, height))
    }
}

// ============================================================================
// Pixel Conversion and Encoding
// ============================================================================

/// Encodes an RGBA image as PNG at the best compression level.
fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Converts a tiny_skia pixmap into an `RgbaImage`.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    for y in 0..pixmap.height() {
        for x in 0..pixmap.width() {
            // Pixmap coordinates are in range, so the lookup cannot miss.
            if let Some(pixel) = pixmap.pixel(x, y) {
                // tiny_skia stores premultiplied alpha.
                let (r, g, b, a) =
                    unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
                img.put_pixel(x, y, Rgba([r, g, b, a]));
            }
        }
    }

    img
}

/// Unpremultiplies a premultiplied-alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose;
    use crate::config::Branding;

    const SIMPLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><circle cx="50" cy="50" r="40" fill="#ff0000"/></svg>"##;

    fn decoded_dimensions(bytes: &[u8]) -> (u32, u32) {
        let img = image::load_from_memory(bytes).expect("output must decode as an image");
        (img.width(), img.height())
    }

    #[test]
    fn renders_exact_requested_dimensions() {
        let renderer = SvgRenderer::new();
        for size in [16, 48, 512] {
            let bytes = renderer.render(SIMPLE_SVG, size, size).unwrap();
            assert_eq!(decoded_dimensions(&bytes), (size, size));
        }
    }

    #[test]
    fn main_template_rasterizes_at_every_matrix_size() {
        let renderer = SvgRenderer::new();
        let markup = compose::main_icon(&Branding::default());
        // Union of the Android, iOS, and web size tables.
        for size in [
            16, 20, 24, 29, 32, 36, 40, 48, 58, 60, 64, 72, 80, 87, 96, 120, 128, 144, 152, 180,
            192, 384, 512, 1024,
        ] {
            let bytes = renderer.render(&markup, size, size).unwrap();
            assert_eq!(decoded_dimensions(&bytes), (size, size), "size {size}");
        }
    }

    #[test]
    fn non_square_render_fills_both_axes() {
        let renderer = SvgRenderer::new();
        let bytes = renderer.render(SIMPLE_SVG, 100, 40).unwrap();
        assert_eq!(decoded_dimensions(&bytes), (100, 40));
    }

    #[test]
    fn malformed_markup_is_a_parse_error() {
        let renderer = SvgRenderer::new();
        let err = renderer.render("not markup at all", 32, 32).unwrap_err();
        assert!(matches!(err, RenderError::Parse(_)));
    }

    #[test]
    fn zero_size_is_an_allocation_error() {
        let renderer = SvgRenderer::new();
        let err = renderer.render(SIMPLE_SVG, 0, 32).unwrap_err();
        assert!(matches!(err, RenderError::Allocate { .. }));
    }

    #[test]
    fn placeholder_matches_the_renderer_contract() {
        let bytes = PlaceholderRenderer.render("ignored", 72, 72).unwrap();
        assert_eq!(decoded_dimensions(&bytes), (72, 72));
    }

    #[test]
    fn unpremultiply_recovers_straight_alpha() {
        assert_eq!(unpremultiply(0, 0, 0, 0), (0, 0, 0, 0));
        assert_eq!(unpremultiply(128, 64, 32, 255), (128, 64, 32, 255));
        let (r, _, _, a) = unpremultiply(128, 0, 0, 128);
        assert_eq!(a, 128);
        assert!(r > 128, "premultiplied channel must scale back up");
    }
}
