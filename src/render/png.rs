//! PNG re-rasterizer: render ASCII text back into a bitmap.
//!
//! This is a lossy "screenshot" of the mono text output, not a re-encoding
//! of the HTML fragment: white glyphs on a black background, drawn with
//! 8x8 bitmap fonts scaled to the requested font size.

use std::io::Cursor;

use font8x8::{UnicodeFonts, BASIC_FONTS, BLOCK_FONTS};
use image::{DynamicImage, Rgb, RgbImage};
use log::debug;

use crate::error::ConvertError;

/// Native size of the bitmap glyphs.
const GLYPH_SIZE: u32 = 8;

/// Options for PNG rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngOptions {
    /// Line height in pixels. Glyphs are drawn at the largest whole
    /// multiple of 8 that fits, so sizes below 8 are treated as 8.
    pub font_size: u32,
}

impl Default for PngOptions {
    fn default() -> Self {
        PngOptions {
            font_size: GLYPH_SIZE,
        }
    }
}

/// Rasterize ASCII text to an encoded PNG.
///
/// The canvas is `char_width * columns` by `font_size * lines` pixels.
/// Each line is drawn left-aligned at `y = line_index * font_size` with a
/// top baseline. Glyphs without an 8x8 bitmap (outside the basic ASCII and
/// Unicode block ranges) render as blank cells.
///
/// # Errors
/// Returns `ConvertError::Render` for empty input and
/// `ConvertError::Encode` if PNG encoding fails.
pub fn render_to_png(ascii_text: &str, options: &PngOptions) -> Result<Vec<u8>, ConvertError> {
    let lines: Vec<&str> = ascii_text.lines().collect();
    let columns = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    if lines.is_empty() || columns == 0 {
        return Err(ConvertError::Render("empty ascii text".to_string()));
    }

    let font_size = options.font_size.max(GLYPH_SIZE);
    let scale = font_size / GLYPH_SIZE;
    let cell_width = GLYPH_SIZE * scale;

    let canvas_w = cell_width * columns as u32;
    let canvas_h = font_size * lines.len() as u32;
    debug!(
        "rasterizing {}x{} chars to {}x{} px",
        columns,
        lines.len(),
        canvas_w,
        canvas_h
    );

    // RgbImage::new zero-fills, which is the black background
    let mut canvas = RgbImage::new(canvas_w, canvas_h);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    for (line_idx, line) in lines.iter().enumerate() {
        let y0 = line_idx as u32 * font_size;
        for (col, ch) in line.chars().enumerate() {
            let Some(bitmap) = lookup_glyph(ch) else {
                continue;
            };
            let x0 = col as u32 * cell_width;
            draw_glyph(&mut canvas, &bitmap, x0, y0, scale, WHITE);
        }
    }

    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(canvas)
        .write_to(&mut buf, image::ImageFormat::Png)
        .map_err(ConvertError::Encode)?;
    Ok(buf.into_inner())
}

/// Look up the 8x8 bitmap for a character.
///
/// Covers basic ASCII plus the Unicode block elements used by the
/// `blocks` charset.
fn lookup_glyph(ch: char) -> Option<[u8; 8]> {
    BASIC_FONTS.get(ch).or_else(|| BLOCK_FONTS.get(ch))
}

fn draw_glyph(canvas: &mut RgbImage, bitmap: &[u8; 8], x0: u32, y0: u32, scale: u32, fg: Rgb<u8>) {
    for (row, bits) in bitmap.iter().enumerate() {
        for col in 0..GLYPH_SIZE {
            if bits & (1 << col) == 0 {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    let x = x0 + col * scale + dx;
                    let y = y0 + row as u32 * scale + dy;
                    if x < canvas.width() && y < canvas.height() {
                        canvas.put_pixel(x, y, fg);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(png: &[u8]) -> RgbImage {
        image::load_from_memory(png).unwrap().to_rgb8()
    }

    #[test]
    fn test_canvas_dimensions() {
        let png = render_to_png("@@\n@@", &PngOptions::default()).unwrap();
        let img = decode(&png);
        assert_eq!(img.width(), 16); // 2 columns * 8px
        assert_eq!(img.height(), 16); // 2 lines * 8px
    }

    #[test]
    fn test_font_size_scales_canvas() {
        let png = render_to_png("@@\n@@", &PngOptions { font_size: 16 }).unwrap();
        let img = decode(&png);
        assert_eq!(img.width(), 32);
        assert_eq!(img.height(), 32);
    }

    #[test]
    fn test_spaces_render_black() {
        let png = render_to_png("  \n  ", &PngOptions::default()).unwrap();
        let img = decode(&png);
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_glyphs_render_white_pixels() {
        let png = render_to_png("@@", &PngOptions::default()).unwrap();
        let img = decode(&png);
        assert!(img.pixels().any(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_empty_text_rejected() {
        assert!(matches!(
            render_to_png("", &PngOptions::default()),
            Err(ConvertError::Render(_))
        ));
    }

    #[test]
    fn test_block_glyphs_have_bitmaps() {
        for ch in ['█', '▓', '▒', '░'] {
            assert!(lookup_glyph(ch).is_some(), "missing bitmap for {:?}", ch);
        }
    }
}
