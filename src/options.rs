//! Conversion options: an immutable value object passed into `convert`.

use crate::ascii::Charset;
use crate::error::ConvertError;

/// Output mode for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Plain text only.
    #[default]
    Mono,
    /// Plain text plus an inline-colored HTML fragment.
    Color,
}

impl Mode {
    /// Get a human-readable name for the mode.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Mono => "mono",
            Mode::Color => "color",
        }
    }
}

/// Options for a single conversion call.
///
/// Constructed once per call and never mutated; concurrent conversions with
/// separate option values share nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertOptions {
    /// Target width in character columns. Must be > 0.
    pub width: u32,
    /// Mono (text only) or color (text + HTML).
    pub mode: Mode,
    /// Flip which end of the ramp maps to which end of the luminance range.
    /// On by default: dark source pixels should render as whitespace on a
    /// dark terminal background.
    pub invert: bool,
    /// Character ramp to quantize against.
    pub charset: Charset,
    /// Multiplicative contrast around mid-gray.
    pub contrast: f32,
    /// Power-law tone adjustment exponent.
    pub gamma: f32,
    /// Reserved flag with no pixel effect; accepted so callers can plumb
    /// it through without breaking.
    pub sharpen: bool,
    /// Floyd-Steinberg error diffusion before character mapping.
    pub dither: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            width: 100,
            mode: Mode::Mono,
            invert: true,
            charset: Charset::Classic,
            contrast: 1.6,
            gamma: 0.9,
            sharpen: false,
            dither: true,
        }
    }
}

impl ConvertOptions {
    /// Validate options before any pixel work happens.
    ///
    /// Bad values would otherwise surface as obscure runtime failures
    /// deep in the pipeline.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.width == 0 {
            return Err(ConvertError::InvalidOptions(
                "width must be greater than 0".to_string(),
            ));
        }
        if !self.contrast.is_finite() || self.contrast <= 0.0 {
            return Err(ConvertError::InvalidOptions(format!(
                "contrast must be a positive finite number, got {}",
                self.contrast
            )));
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(ConvertError::InvalidOptions(format!(
                "gamma must be a positive finite number, got {}",
                self.gamma
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.mode, Mode::Mono);
        assert!(opts.invert);
        assert!(opts.dither);
        assert!(!opts.sharpen);
        assert_eq!(opts.charset, Charset::Classic);
    }

    #[test]
    fn test_zero_width_rejected() {
        let opts = ConvertOptions {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(ConvertError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_bad_contrast_rejected() {
        let opts = ConvertOptions {
            contrast: f32::NAN,
            ..Default::default()
        };
        assert!(opts.validate().is_err());

        let opts = ConvertOptions {
            contrast: -1.0,
            ..Default::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_bad_gamma_rejected() {
        let opts = ConvertOptions {
            gamma: 0.0,
            ..Default::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_valid_options_pass() {
        assert!(ConvertOptions::default().validate().is_ok());
    }
}
