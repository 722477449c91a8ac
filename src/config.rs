use anyhow::{anyhow, bail, Context, Result};
use image::Rgb;
use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

/// Sizes the Chrome extension manifest asks for.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];
pub const DEFAULT_OUTPUT: &str = "./icons";
pub const DEFAULT_BACKGROUND: &str = "#667eea";
pub const DEFAULT_FOREGROUND: &str = "#ffffff";

/// Optional JSON config file. Every key may be omitted; unknown keys are an
/// error so a typo doesn't silently fall back to a default.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub sizes: Option<Vec<u32>>,
    pub output: Option<PathBuf>,
    pub background: Option<String>,
    pub foreground: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

/// Fully resolved run options consumed by the generator.
#[derive(Debug, Clone)]
pub struct Settings {
    pub sizes: Vec<u32>,
    pub output: PathBuf,
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
}

impl Settings {
    /// Merge CLI values, config file values and compiled-in defaults, in
    /// that order of precedence, and validate the result. Colors and sizes
    /// are checked here so a bad run fails before any file is touched.
    pub fn resolve(
        cli_sizes: Option<Vec<u32>>,
        cli_output: Option<PathBuf>,
        cli_background: Option<String>,
        cli_foreground: Option<String>,
        file: FileConfig,
    ) -> Result<Self> {
        let sizes = cli_sizes
            .or(file.sizes)
            .unwrap_or_else(|| DEFAULT_SIZES.to_vec());
        if sizes.is_empty() {
            bail!("No icon sizes given");
        }
        if sizes.contains(&0) {
            bail!("Icon sizes must be positive");
        }

        let output = cli_output
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        let background = cli_background
            .or(file.background)
            .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string());
        let foreground = cli_foreground
            .or(file.foreground)
            .unwrap_or_else(|| DEFAULT_FOREGROUND.to_string());

        Ok(Settings {
            sizes,
            output,
            background: parse_color(&background)?,
            foreground: parse_color(&foreground)?,
        })
    }
}

/// Parse a CSS color string ("#667eea", "white", "rgb(1,2,3)", ...) into an
/// RGB triple. Alpha is ignored; icons are drawn on an opaque background.
pub fn parse_color(value: &str) -> Result<Rgb<u8>> {
    let color = css_color::Srgb::from_str(value)
        .map_err(|_| anyhow!("'{value}' is not a valid CSS color"))?;

    Ok(Rgb([
        (color.red * 255.) as u8,
        (color.green * 255.) as u8,
        (color.blue * 255.) as u8,
    ]))
}
