//! Tone adjustment stages: contrast, then gamma.
//!
//! Stage order is load-bearing: contrast runs before gamma, and both run
//! before dithering and character mapping. Reordering changes the visual
//! output materially.

/// Apply multiplicative contrast around mid-gray, in place.
///
/// `Y' = (Y - 128) * contrast + 128`, clamped to [0, 255].
/// `contrast = 1.0` is the identity.
pub fn apply_contrast(field: &mut [f32], contrast: f32) {
    if contrast == 1.0 {
        return;
    }

    for y in field.iter_mut() {
        *y = ((*y - 128.0) * contrast + 128.0).clamp(0.0, 255.0);
    }
}

/// Apply power-law gamma correction, in place.
///
/// `Y' = 255 * (Y/255)^(1/gamma)`, clamped to [0, 255].
/// `gamma = 1.0` is skipped entirely.
pub fn apply_gamma(field: &mut [f32], gamma: f32) {
    if gamma == 1.0 {
        return;
    }

    let exponent = 1.0 / gamma;
    for y in field.iter_mut() {
        *y = (255.0 * (*y / 255.0).powf(exponent)).clamp(0.0, 255.0);
    }
}
