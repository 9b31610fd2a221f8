//! RGBA to luminance conversion using ITU-R BT.709 coefficients.

/// Convert an RGBA pixel buffer to a mutable luminance field.
///
/// The luminance formula is: Y = 0.2126*R + 0.7152*G + 0.0722*B
/// (Rec.709 — not the BT.601 weights used by older converters; the two
/// differ visibly on saturated reds and greens).
///
/// The result is kept as `f32` in the 0-255 range because the later
/// contrast, gamma, and error-diffusion stages mutate it with fractional
/// precision before quantization.
///
/// # Arguments
/// * `rgba` - Raw RGBA data, 4 bytes per pixel, row-major order
///
/// # Returns
/// One luminance value per pixel, in raster order.
pub fn luminance_field(rgba: &[u8]) -> Vec<f32> {
    let mut field = Vec::with_capacity(rgba.len() / 4);

    for px in rgba.chunks_exact(4) {
        let r = px[0] as f32;
        let g = px[1] as f32;
        let b = px[2] as f32;
        field.push(0.2126 * r + 0.7152 * g + 0.0722 * b);
    }

    field
}
