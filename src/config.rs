use crate::consts::DEFAULT_CONFIG;
use anyhow::{ensure, Context, Result};
use palette::Srgb;
use serde::Deserialize;
use std::{borrow::Cow, fs, num::NonZeroUsize, path::Path};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub plot: Plot,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Plot {
    pub title: Cow<'static, str>,
    pub marker_size: f32,
    pub marker_color: Cow<'static, str>,
    pub grid_color: Cow<'static, str>,
    pub background_color: Cow<'static, str>,
    /// The radial axis ends at `radial_margin` times the largest distance.
    pub radial_margin: f64,
    pub rings: NonZeroUsize,
    pub spokes: NonZeroUsize,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl Default for Plot {
    fn default() -> Self {
        DEFAULT_CONFIG.plot
    }
}

impl Config {
    /// Reads a JSON5 config file. Fields left out keep their default values.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file '{}'", path.display()))?;
        let config = Self::from_json5(&text)
            .with_context(|| format!("invalid config file '{}'", path.display()))?;
        Ok(config)
    }

    pub fn from_json5(text: &str) -> Result<Self> {
        let config: Self = json5::from_str(text)?;
        config.plot.validate()?;
        Ok(config)
    }
}

impl Plot {
    fn validate(&self) -> Result<()> {
        ensure!(
            self.radial_margin.is_finite() && self.radial_margin > 0.0,
            "radial_margin must be a positive number, got {}",
            self.radial_margin
        );
        ensure!(
            self.marker_size.is_finite() && self.marker_size > 0.0,
            "marker_size must be a positive number, got {}",
            self.marker_size
        );
        ensure!(
            self.window_width > 0 && self.window_height > 0,
            "window size must be non-zero"
        );
        parse_color(&self.marker_color)?;
        parse_color(&self.grid_color)?;
        parse_color(&self.background_color)?;
        Ok(())
    }
}

/// Parses a `#rrggbb` hex color.
pub fn parse_color(text: &str) -> Result<Srgb<f32>> {
    let color: Srgb<u8> = text
        .parse()
        .with_context(|| format!("'{text}' is not a #rrggbb color"))?;
    Ok(color.into_format())
}
