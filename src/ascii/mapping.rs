//! Luminance to character mapping.

/// One character cell: the chosen glyph plus the cell's original
/// (pre-grayscale) RGB color.
///
/// Both renderers consume this stream, so the tone/dither pipeline runs
/// exactly once regardless of output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub rgb: [u8; 3],
}

/// Map a luminance field to character cells.
///
/// If `invert` is set, luminance is flipped first (`Y <- 255 - Y`): on a
/// dark terminal background, visually dark source pixels should render as
/// whitespace, not dense glyphs. The glyph index is then
/// `floor((Y/255) * (len - 1))`, clamped to the valid range.
///
/// # Arguments
/// * `field` - Final luminance values (0-255), after tone and dithering
/// * `rgba` - The resampled RGBA buffer, for per-cell source colors
/// * `glyphs` - Charset ramp ordered darkest to lightest
/// * `invert` - Flip the luminance range before indexing
///
/// # Returns
/// One `Cell` per pixel, in raster order.
pub fn map_cells(field: &[f32], rgba: &[u8], glyphs: &[char], invert: bool) -> Vec<Cell> {
    if glyphs.is_empty() {
        return Vec::new();
    }

    let levels = glyphs.len();
    let mut cells = Vec::with_capacity(field.len());

    for (i, &y) in field.iter().enumerate() {
        let y = y.clamp(0.0, 255.0);
        let y = if invert { 255.0 - y } else { y };

        let t = y / 255.0;
        let idx = ((t * (levels - 1) as f32).floor() as usize).min(levels - 1);

        let px = i * 4;
        let rgb = [rgba[px], rgba[px + 1], rgba[px + 2]];

        cells.push(Cell {
            glyph: glyphs[idx],
            rgb,
        });
    }

    cells
}
