//! Character ramp definitions for ASCII rendering.
//!
//! Each ramp is a literal string ordered from darkest-looking glyph to
//! lightest-looking glyph (trailing space). The exact strings are part of
//! the observable contract: output characters are always members of the
//! selected ramp.

/// Classic 10-level density ramp.
pub const CLASSIC_RAMP: &str = "@%#*+=-:. ";

/// jp2a-style ramp (19 levels).
pub const JP2A_RAMP: &str = "MWNXK0Okxdolc:;,'. ";

/// Dense 70-level ramp for high-detail output.
pub const DENSE_RAMP: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Detailed 28-level ramp with digits and letters.
pub const DETAILED_RAMP: &str = "@#W$9876543210?!abc;:+=-,._ ";

/// Unicode block characters (5 levels) for a chunky retro look.
pub const BLOCKS_RAMP: &str = "█▓▒░ ";

/// Simple 6-level ramp.
pub const SIMPLE_RAMP: &str = "@#=-. ";

/// Character ramp selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// Classic 10-level density ramp.
    #[default]
    Classic,
    /// jp2a-style ramp.
    Jp2a,
    /// Dense 70-level ramp.
    Dense,
    /// Detailed 28-level ramp.
    Detailed,
    /// Unicode block characters.
    Blocks,
    /// Simple 6-level ramp.
    Simple,
}

impl Charset {
    /// Get the literal ramp string, darkest to lightest.
    pub const fn ramp(&self) -> &'static str {
        match self {
            Charset::Classic => CLASSIC_RAMP,
            Charset::Jp2a => JP2A_RAMP,
            Charset::Dense => DENSE_RAMP,
            Charset::Detailed => DETAILED_RAMP,
            Charset::Blocks => BLOCKS_RAMP,
            Charset::Simple => SIMPLE_RAMP,
        }
    }

    /// Ramp as an indexable glyph vector.
    pub fn glyphs(&self) -> Vec<char> {
        self.ramp().chars().collect()
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            Charset::Classic => "classic",
            Charset::Jp2a => "jp2a",
            Charset::Dense => "dense",
            Charset::Detailed => "detailed",
            Charset::Blocks => "blocks",
            Charset::Simple => "simple",
        }
    }

    /// All charsets, for listings.
    pub const fn all() -> [Charset; 6] {
        [
            Charset::Classic,
            Charset::Jp2a,
            Charset::Dense,
            Charset::Detailed,
            Charset::Blocks,
            Charset::Simple,
        ]
    }
}
