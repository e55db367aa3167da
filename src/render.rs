//! Placeholder synthesis: solid canvas + glyph text, encoded as PNG.

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::error::{GlyphTilesError, Result};

/// Everything about a placeholder canvas except the glyph itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub canvas_size: u32,
    /// Start fully transparent and encode RGBA; otherwise opaque RGB.
    pub use_alpha: bool,
    pub base_color: [u8; 3],
    pub text_color: [u8; 3],
    /// Top-left of the text line in pixels.
    pub text_origin: (f32, f32),
}

/// Draws a text run onto a canvas.
pub trait GlyphPainter {
    fn paint(&self, canvas: &mut RgbaImage, text: &str, origin: (f32, f32), color: Rgba<u8>);
}

/// TrueType/OpenType painter. Loaded once per run and only read afterwards.
pub struct FontPainter {
    font: FontVec,
    scale: PxScale,
    path: PathBuf,
}

impl FontPainter {
    /// `size_px` is the em size in pixels.
    pub fn load(path: &Path, size_px: f32) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| GlyphTilesError::FontLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let font = FontVec::try_from_vec(bytes).map_err(|e| GlyphTilesError::FontLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let units_per_em = font.units_per_em().unwrap_or(1000.0);
        let scale = PxScale::from(size_px * font.height_unscaled() / units_per_em);
        Ok(Self { font, scale, path: path.to_path_buf() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GlyphPainter for FontPainter {
    fn paint(&self, canvas: &mut RgbaImage, text: &str, origin: (f32, f32), color: Rgba<u8>) {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = point(origin.0, origin.1 + scaled.ascent());
        let mut prev: Option<GlyphId> = None;
        let (w, h) = canvas.dimensions();
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(p) = prev {
                caret.x += scaled.kern(p, id);
            }
            let glyph = id.with_scale_and_position(self.scale, caret);
            caret.x += scaled.h_advance(id);
            prev = Some(id);
            let Some(outlined) = self.font.outline_glyph(glyph) else { continue };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                if x < 0 || y < 0 || x as u32 >= w || y as u32 >= h {
                    return;
                }
                blend(canvas.get_pixel_mut(x as u32, y as u32), color, coverage);
            });
        }
    }
}

/// Move every channel of `px` toward `ink` by `coverage` (0..1).
pub fn blend(px: &mut Rgba<u8>, ink: Rgba<u8>, coverage: f32) {
    let c = coverage.clamp(0.0, 1.0);
    for (dst, src) in px.0.iter_mut().zip(ink.0) {
        let v = *dst as f32 + (src as f32 - *dst as f32) * c;
        *dst = v.round().clamp(0.0, 255.0) as u8;
    }
}

pub fn render_placeholder(painter: &dyn GlyphPainter, style: &RenderStyle, glyph: &str) -> RgbaImage {
    let [r, g, b] = style.base_color;
    let alpha = if style.use_alpha { 0 } else { 255 };
    let mut canvas = RgbaImage::from_pixel(style.canvas_size, style.canvas_size, Rgba([r, g, b, alpha]));
    if !glyph.is_empty() {
        let [tr, tg, tb] = style.text_color;
        painter.paint(&mut canvas, glyph, style.text_origin, Rgba([tr, tg, tb, 255]));
    }
    canvas
}

pub fn write_png(canvas: RgbaImage, use_alpha: bool, path: &Path) -> Result<()> {
    let img = if use_alpha {
        DynamicImage::ImageRgba8(canvas)
    } else {
        DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(canvas).to_rgb8())
    };
    img.save_with_format(path, ImageFormat::Png).map_err(|source| GlyphTilesError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One solid 4x6 cell per character.
    struct CellPainter;
    impl GlyphPainter for CellPainter {
        fn paint(&self, canvas: &mut RgbaImage, text: &str, origin: (f32, f32), color: Rgba<u8>) {
            for (i, _) in text.chars().enumerate() {
                let x0 = origin.0 as u32 + i as u32 * 5;
                for y in origin.1 as u32..origin.1 as u32 + 6 {
                    for x in x0..x0 + 4 {
                        if x < canvas.width() && y < canvas.height() {
                            blend(canvas.get_pixel_mut(x, y), color, 1.0);
                        }
                    }
                }
            }
        }
    }

    fn style(use_alpha: bool) -> RenderStyle {
        RenderStyle {
            canvas_size: 48,
            use_alpha,
            base_color: [255, 0, 255],
            text_color: [0, 0, 0],
            text_origin: (0.0, 0.0),
        }
    }

    #[test]
    fn blend_interpolates_all_channels() {
        let mut px = Rgba([255, 0, 255, 0]);
        blend(&mut px, Rgba([0, 0, 0, 255]), 0.5);
        assert_eq!(px, Rgba([128, 0, 128, 128]));
        blend(&mut px, Rgba([0, 0, 0, 255]), 2.0);
        assert_eq!(px, Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn alpha_canvas_transparent_except_text() {
        let img = render_placeholder(&CellPainter, &style(true), "M");
        assert_eq!(img.dimensions(), (48, 48));
        assert_eq!(*img.get_pixel(1, 1), Rgba([0, 0, 0, 255]));
        assert_eq!(*img.get_pixel(40, 40), Rgba([255, 0, 255, 0]));
    }

    #[test]
    fn empty_glyph_is_blank() {
        let img = render_placeholder(&CellPainter, &style(false), "");
        assert!(img.pixels().all(|p| *p == Rgba([255, 0, 255, 255])));
    }

    #[test]
    fn opaque_written_as_rgb() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("part-0g.png");
        write_png(render_placeholder(&CellPainter, &style(false), "g"), false, &p).unwrap();
        let back = image::open(&p).unwrap();
        assert_eq!(back.color(), image::ColorType::Rgb8);
        let q = tmp.path().join("part-1d.png");
        write_png(render_placeholder(&CellPainter, &style(true), "d"), true, &q).unwrap();
        assert_eq!(image::open(&q).unwrap().color(), image::ColorType::Rgba8);
    }

    #[test]
    fn font_load_failures() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.ttf");
        assert!(matches!(FontPainter::load(&missing, 24.0), Err(GlyphTilesError::FontLoad { .. })));
        let junk = tmp.path().join("junk.ttf");
        fs::write(&junk, b"definitely not a font").unwrap();
        assert!(matches!(FontPainter::load(&junk, 24.0), Err(GlyphTilesError::FontLoad { .. })));
    }

    #[test]
    fn system_font_draws_ink_deterministically() {
        let candidates = [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/Library/Fonts/Arial.ttf",
        ];
        let Some(path) = candidates.iter().map(Path::new).find(|p| p.is_file()) else {
            eprintln!("no system font found, skipping");
            return;
        };
        let painter = FontPainter::load(path, 32.0).unwrap();
        let s = RenderStyle {
            canvas_size: 64,
            use_alpha: false,
            base_color: [0, 0, 0],
            text_color: [255, 255, 255],
            text_origin: (0.0, 0.0),
        };
        let a = render_placeholder(&painter, &s, "S-tru");
        let b = render_placeholder(&painter, &s, "S-tru");
        assert_eq!(a, b);
        assert!(a.pixels().any(|p| p[0] > 128), "expected some ink");
    }
}
