//! sincity-ascii: image to ASCII art conversion.
//!
//! A standalone, synchronous converter: Rec.709 grayscale, contrast/gamma
//! tone mapping, optional Floyd-Steinberg dithering, and character-density
//! quantization over six fixed ramps, with mono text and color HTML output
//! plus a PNG re-rasterizer for the text result.
//!
//! # Example
//! ```no_run
//! use sincity_ascii::{convert, ConvertOptions, ImageSource};
//!
//! let bytes = std::fs::read("photo.png")?;
//! let options = ConvertOptions { width: 120, ..Default::default() };
//! let result = convert(&ImageSource::bytes(bytes), &options)?;
//! println!("{}", result.ascii_text);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ascii;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod options;
pub mod render;
pub mod source;

pub use ascii::Charset;
pub use convert::{convert, Conversion, Meta, TOOL_TAG};
pub use error::ConvertError;
pub use options::{ConvertOptions, Mode};
pub use render::{render_to_png, PngOptions};
pub use source::ImageSource;
