//! Floyd-Steinberg error diffusion over the luminance field.

/// Apply Floyd-Steinberg dithering in place, quantized to `levels` steps.
///
/// Each pixel is rounded to the nearest of the `levels` luminance buckets
/// the charset can represent, and the rounding error is diffused to the
/// not-yet-visited neighbors with the classic weights:
///
/// ```text
///        [*] 7/16
/// 3/16  5/16  1/16
/// ```
///
/// Out-of-bounds neighbors are skipped (no wraparound). The diffusion
/// accumulates into the same buffer so later pixels see earlier errors;
/// the traversal is strictly row-major and cannot be parallelized across
/// rows (each row depends on the one above).
///
/// Must run after contrast/gamma and before character mapping.
///
/// # Arguments
/// * `field` - Luminance values (0-255), mutated in place to quantized values
/// * `width` - Width of the grid in cells
/// * `height` - Height of the grid in cells
/// * `levels` - Number of quantization levels (charset length, >= 2)
pub fn floyd_steinberg(field: &mut [f32], width: usize, height: usize, levels: usize) {
    if levels < 2 || width == 0 || height == 0 {
        return;
    }

    let step = 255.0 / (levels - 1) as f32;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old = field[idx];
            let quantized = ((old / step).round() * step).clamp(0.0, 255.0);
            let error = old - quantized;
            field[idx] = quantized;

            // Right: 7/16
            if x + 1 < width {
                field[idx + 1] += error * 7.0 / 16.0;
            }
            if y + 1 < height {
                // Bottom-left: 3/16
                if x > 0 {
                    field[idx + width - 1] += error * 3.0 / 16.0;
                }
                // Bottom: 5/16
                field[idx + width] += error * 5.0 / 16.0;
                // Bottom-right: 1/16
                if x + 1 < width {
                    field[idx + width + 1] += error * 1.0 / 16.0;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_land_on_quantization_grid() {
        let mut field: Vec<f32> = (0..64).map(|i| (i * 4) as f32).collect();
        floyd_steinberg(&mut field, 8, 8, 6);

        let step = 255.0 / 5.0;
        for &v in &field {
            let nearest = (v / step).round() * step;
            assert!(
                (v - nearest).abs() < 0.001,
                "value {} not on quantization grid",
                v
            );
        }
    }

    #[test]
    fn test_exact_levels_pass_through() {
        // Values already on the grid produce zero error
        let step = 255.0 / 5.0;
        let mut field = vec![0.0, step, 2.0 * step, 255.0];
        let original = field.clone();
        floyd_steinberg(&mut field, 4, 1, 6);
        for (a, b) in field.iter().zip(original.iter()) {
            assert!((a - b).abs() < 0.001);
        }
    }

    #[test]
    fn test_error_conservation_on_uniform_region() {
        // Diffusion should not systematically bias brightness: the mean of
        // a large uniform field stays close to the input value even though
        // individual cells snap to quantization levels.
        let mut field = vec![100.0f32; 64 * 64];
        floyd_steinberg(&mut field, 64, 64, 6);

        let mean: f32 = field.iter().sum::<f32>() / field.len() as f32;
        assert!(
            (mean - 100.0).abs() < 2.0,
            "dithering biased brightness: mean {}",
            mean
        );
    }

    #[test]
    fn test_single_pixel_no_neighbors() {
        let mut field = vec![100.0f32];
        floyd_steinberg(&mut field, 1, 1, 6);
        let step = 255.0 / 5.0;
        assert!((field[0] - (100.0f32 / step).round() * step).abs() < 0.001);
    }

    #[test]
    fn test_two_levels() {
        let mut field = vec![200.0f32, 60.0, 128.0, 128.0];
        floyd_steinberg(&mut field, 2, 2, 2);
        for &v in &field {
            assert!(v == 0.0 || v == 255.0, "binary dither produced {}", v);
        }
    }

    #[test]
    fn test_fewer_than_two_levels_is_noop() {
        let mut field = vec![100.0f32, 200.0];
        let original = field.clone();
        floyd_steinberg(&mut field, 2, 1, 1);
        assert_eq!(field, original);
    }
}
