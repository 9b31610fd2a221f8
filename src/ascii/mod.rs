//! ASCII conversion pipeline.
//!
//! A single-pass, synchronous pipeline from an RGBA pixel buffer to a
//! stream of character cells:
//!
//! 1. **Grayscale** - RGBA to luminance using Rec.709 weights
//! 2. **Contrast** - multiplicative stretch around mid-gray
//! 3. **Gamma** - power-law tone adjustment
//! 4. **Dithering** - optional Floyd-Steinberg error diffusion
//! 5. **Mapping** - luminance to charset glyphs, with source colors attached
//!
//! Stage order is fixed and observable in the output. Every stage mutates
//! one shared `f32` luminance field allocated per call, so independent
//! conversions can run on separate threads with no coordination.
//!
//! # Character Sets
//!
//! Six fixed ramps are available via [`Charset`], each a literal string
//! ordered darkest to lightest: `classic`, `jp2a`, `dense`, `detailed`,
//! `blocks`, `simple`.

mod charset;
mod dimensions;
mod dither;
mod grayscale;
mod mapping;
mod tone;

pub use charset::{
    Charset, BLOCKS_RAMP, CLASSIC_RAMP, DENSE_RAMP, DETAILED_RAMP, JP2A_RAMP, SIMPLE_RAMP,
};
pub use dimensions::{grid_height, CHAR_CELL_ASPECT};
pub use dither::floyd_steinberg;
pub use grayscale::luminance_field;
pub use mapping::{map_cells, Cell};
pub use tone::{apply_contrast, apply_gamma};
