use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod icon_gen;

use config::{FileConfig, Settings};

#[derive(Debug, Parser)]
#[clap(
    name = "icon-stub",
    about = "Generate placeholder bullseye PNG icons for browser extensions"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Icon pixel sizes to generate, in order (e.g. 16,48,128).
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    sizes: Option<Vec<u32>>,

    /// The background color (CSS color format).
    #[clap(long, value_name = "COLOR")]
    background: Option<String>,

    /// The foreground color for the rings and dot (CSS color format).
    #[clap(long, value_name = "COLOR")]
    foreground: Option<String>,

    /// JSON config file with optional keys: sizes, output, background, foreground.
    /// Values given on the command line take precedence.
    #[clap(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let settings = Settings::resolve(
        args.sizes,
        args.output,
        args.background,
        args.foreground,
        file,
    )?;

    icon_gen::generate_icons(&settings)
}
