//! Conversion entry point: decode, tone pipeline, render.

use std::time::Instant;

use log::debug;

use crate::ascii;
use crate::error::ConvertError;
use crate::options::{ConvertOptions, Mode};
use crate::render;
use crate::source::{self, ImageSource};

/// Tag identifying this converter in result metadata, so callers that
/// orchestrate fallback chains can tell the code paths apart.
pub const TOOL_TAG: &str = "sincity-ascii";

/// Metadata about a completed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meta {
    pub mode: Mode,
    /// Character grid width (columns).
    pub width: u32,
    /// Character grid height (lines).
    pub height: u32,
    /// Which code path produced this result.
    pub tool: &'static str,
    /// Elapsed wall time for the whole call, in milliseconds.
    pub ms: u64,
}

/// Result of a conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Newline-joined character grid, one character per cell, untrimmed.
    pub ascii_text: String,
    /// Inline-colored HTML fragment. Present only in color mode.
    pub html: Option<String>,
    pub meta: Meta,
}

/// Convert an image to ASCII art.
///
/// Stateless and synchronous: each call allocates its own luminance field
/// and produces an independent result, so concurrent calls need no
/// coordination. Failures are all-or-nothing; no partial output is ever
/// returned.
///
/// # Errors
/// * [`ConvertError::InvalidOptions`] before any pixel work
/// * [`ConvertError::Decode`] / [`ConvertError::Fetch`] from the source stage
pub fn convert(source: &ImageSource, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    options.validate()?;
    let started = Instant::now();

    let rgba = source::decode_and_scale(source, options.width)?;
    let (width, height) = rgba.dimensions();

    let mut field = ascii::luminance_field(rgba.as_raw());
    ascii::apply_contrast(&mut field, options.contrast);
    ascii::apply_gamma(&mut field, options.gamma);
    // `sharpen` is accepted but performs no pixel work.

    let glyphs = options.charset.glyphs();
    if options.dither {
        ascii::floyd_steinberg(&mut field, width as usize, height as usize, glyphs.len());
    }

    let cells = ascii::map_cells(&field, rgba.as_raw(), &glyphs, options.invert);
    let ascii_text = render::render_text(&cells, width as usize);
    let html = match options.mode {
        Mode::Color => Some(render::render_html(&cells, width as usize)),
        Mode::Mono => None,
    };

    let ms = started.elapsed().as_millis() as u64;
    debug!(
        "converted to {}x{} chars ({} charset, dither={}) in {}ms",
        width,
        height,
        options.charset.name(),
        options.dither,
        ms
    );

    Ok(Conversion {
        ascii_text,
        html,
        meta: Meta {
            mode: options.mode,
            width,
            height,
            tool: TOOL_TAG,
            ms,
        },
    })
}
