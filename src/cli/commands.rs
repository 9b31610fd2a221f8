//! Command execution: resolve options, run the conversion, write outputs.

use std::error::Error;
use std::fs;

use log::info;

use crate::ascii::Charset;
use crate::cli::args::Args;
use crate::cli::enums::CharsetArg;
use crate::config::Config;
use crate::convert::convert;
use crate::options::{ConvertOptions, Mode};
use crate::render::{render_to_png, PngOptions};
use crate::source::ImageSource;

/// List the available character ramps.
pub fn run_charsets() {
    for charset in Charset::all() {
        println!("{:<10} {:?}", charset.name(), charset.ramp());
    }
}

/// Run a conversion from parsed arguments and config-file defaults.
///
/// Precedence per option: explicit flag, then config file, then built-in
/// default.
pub fn run_convert(args: &Args) -> Result<(), Box<dyn Error>> {
    let input = args
        .input
        .as_deref()
        .ok_or("missing input image (file path or URL)")?;

    let config = Config::load(args.config.as_deref())?;
    let options = resolve_options(args, &config)?;

    let source = if input.starts_with("http://") || input.starts_with("https://") {
        ImageSource::url(input)
    } else {
        ImageSource::bytes(fs::read(input)?)
    };

    let result = convert(&source, &options)?;
    info!(
        "{} chars {}x{} via {} in {}ms",
        result.meta.mode.name(),
        result.meta.width,
        result.meta.height,
        result.meta.tool,
        result.meta.ms
    );

    match &args.output {
        Some(path) => fs::write(path, &result.ascii_text)?,
        None => println!("{}", result.ascii_text),
    }

    if let Some(path) = &args.html {
        // convert() only produces html in color mode; resolve_options
        // forces that whenever --html is present
        let html = result.html.as_deref().unwrap_or_default();
        fs::write(path, html)?;
    }

    if let Some(path) = &args.png {
        let font_size = args
            .font_size
            .or(config.png.font_size)
            .unwrap_or_else(|| PngOptions::default().font_size);
        let png = render_to_png(&result.ascii_text, &PngOptions { font_size })?;
        fs::write(path, png)?;
    }

    Ok(())
}

/// Merge CLI flags with config-file defaults into conversion options.
fn resolve_options(args: &Args, config: &Config) -> Result<ConvertOptions, Box<dyn Error>> {
    let builtin = ConvertOptions::default();

    let charset = match (&args.charset, &config.convert.charset) {
        (Some(arg), _) => Charset::from(*arg),
        (None, Some(name)) => CharsetArg::from_name(name)
            .map(Charset::from)
            .ok_or_else(|| format!("unknown charset '{}' in config file", name))?,
        (None, None) => builtin.charset,
    };

    let mode = if args.html.is_some() {
        Mode::Color
    } else {
        Mode::from(args.mode)
    };

    Ok(ConvertOptions {
        width: args.width.or(config.convert.width).unwrap_or(builtin.width),
        mode,
        invert: if args.no_invert {
            false
        } else {
            config.convert.invert.unwrap_or(builtin.invert)
        },
        charset,
        contrast: args
            .contrast
            .or(config.convert.contrast)
            .unwrap_or(builtin.contrast),
        gamma: args.gamma.or(config.convert.gamma).unwrap_or(builtin.gamma),
        sharpen: args.sharpen,
        dither: if args.no_dither {
            false
        } else {
            config.convert.dither.unwrap_or(builtin.dither)
        },
    })
}
