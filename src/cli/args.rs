//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{CharsetArg, ModeArg};

/// Convert images to retro terminal ASCII art
#[derive(Parser, Debug)]
#[command(name = "sincity-ascii")]
#[command(version, about = "Image to ASCII art converter", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Input image: file path or http(s) URL
    pub input: Option<String>,

    /// Output width in character columns
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Output mode
    #[arg(long, default_value = "mono")]
    pub mode: ModeArg,

    /// Character ramp
    #[arg(long)]
    pub charset: Option<CharsetArg>,

    /// Keep dark pixels as dense glyphs (inversion is on by default for
    /// dark terminal backgrounds)
    #[arg(long)]
    pub no_invert: bool,

    /// Contrast factor
    #[arg(long)]
    pub contrast: Option<f32>,

    /// Gamma exponent
    #[arg(long)]
    pub gamma: Option<f32>,

    /// Disable Floyd-Steinberg dithering
    #[arg(long)]
    pub no_dither: bool,

    /// Reserved; accepted but currently has no effect
    #[arg(long)]
    pub sharpen: bool,

    /// Write the ASCII text to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write a colorized HTML fragment to a file (implies --mode color)
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Rasterize the ASCII text to a PNG file
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Font size for PNG output
    #[arg(long)]
    pub font_size: Option<u32>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available character ramps
    Charsets,
}
