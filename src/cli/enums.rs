//! CLI enum types for charset and output mode options.

use clap::ValueEnum;

use crate::ascii::Charset;
use crate::options::Mode;

/// Character ramp for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharsetArg {
    #[default]
    Classic,
    Jp2a,
    Dense,
    Detailed,
    Blocks,
    Simple,
}

impl From<CharsetArg> for Charset {
    fn from(c: CharsetArg) -> Self {
        match c {
            CharsetArg::Classic => Charset::Classic,
            CharsetArg::Jp2a => Charset::Jp2a,
            CharsetArg::Dense => Charset::Dense,
            CharsetArg::Detailed => Charset::Detailed,
            CharsetArg::Blocks => Charset::Blocks,
            CharsetArg::Simple => Charset::Simple,
        }
    }
}

impl CharsetArg {
    /// Parse a charset name from the config file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(CharsetArg::Classic),
            "jp2a" => Some(CharsetArg::Jp2a),
            "dense" => Some(CharsetArg::Dense),
            "detailed" => Some(CharsetArg::Detailed),
            "blocks" => Some(CharsetArg::Blocks),
            "simple" => Some(CharsetArg::Simple),
            _ => None,
        }
    }
}

/// Output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ModeArg {
    #[default]
    Mono,
    Color,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Mono => Mode::Mono,
            ModeArg::Color => Mode::Color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_arg_to_charset() {
        assert_eq!(Charset::from(CharsetArg::Classic), Charset::Classic);
        assert_eq!(Charset::from(CharsetArg::Jp2a), Charset::Jp2a);
        assert_eq!(Charset::from(CharsetArg::Dense), Charset::Dense);
        assert_eq!(Charset::from(CharsetArg::Detailed), Charset::Detailed);
        assert_eq!(Charset::from(CharsetArg::Blocks), Charset::Blocks);
        assert_eq!(Charset::from(CharsetArg::Simple), Charset::Simple);
    }

    #[test]
    fn test_mode_arg_to_mode() {
        assert_eq!(Mode::from(ModeArg::Mono), Mode::Mono);
        assert_eq!(Mode::from(ModeArg::Color), Mode::Color);
    }

    #[test]
    fn test_from_name_matches_charset_names() {
        for charset in Charset::all() {
            let arg = CharsetArg::from_name(charset.name())
                .unwrap_or_else(|| panic!("no CharsetArg for {}", charset.name()));
            assert_eq!(Charset::from(arg), charset);
        }
        assert!(CharsetArg::from_name("bogus").is_none());
    }
}
