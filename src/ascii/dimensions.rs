//! Dimension calculation for aspect-ratio-correct ASCII rendering.

/// Aspect ratio of a monospace character cell (width/height).
///
/// A terminal character is roughly 1.8x taller than wide, so a character
/// grid needs ~0.55x fewer rows than a square pixel grid to display the
/// image undistorted. This constant is load-bearing for visual correctness.
pub const CHAR_CELL_ASPECT: f32 = 0.55;

/// Calculate the character-grid height for a target width.
///
/// `height = round(width * (img_height / img_width) * 0.55)`, clamped to at
/// least one row so a valid image never produces empty output.
///
/// # Example
/// ```
/// use sincity_ascii::ascii::grid_height;
/// // A square image at 100 columns renders as 55 rows
/// assert_eq!(grid_height(640, 640, 100), 55);
/// ```
pub fn grid_height(img_width: u32, img_height: u32, width: u32) -> u32 {
    if img_width == 0 || img_height == 0 || width == 0 {
        return 0;
    }

    let rows =
        (width as f32 * (img_height as f32 / img_width as f32) * CHAR_CELL_ASPECT).round() as u32;
    rows.max(1)
}
