// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration: defaults from `settings`, an optional TOML file,
//! then command-line overrides, applied in that order.
//!
//! ```toml
//! title = "My squiggles"
//! width = 800
//! height = 600
//! variant = "basic"   # or "extended"
//! fill_button = 2     # 2 = middle, 3 = right
//! ```

use crate::model::ButtonMap;
use crate::settings;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid window size '{0}', expected WIDTHxHEIGHT")]
    InvalidSize(String),

    #[error("window dimension {0} is below the minimum of {}", settings::window::MIN_DIMENSION)]
    DimensionTooSmall(f64),

    #[error(
        "window dimension {0} must be a finite number no larger than {}",
        settings::window::MAX_DIMENSION
    )]
    InvalidDimension(f64),

    #[error("fill button must be 2 or 3, got {0}")]
    InvalidFillButton(u8),
}

/// Which flavour of the canvas to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Solid fills, no decorations
    Basic,
    /// Pastel gradient fills, decorative arcs and on-screen instructions
    #[default]
    Extended,
}

/// Final application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub variant: Variant,
    pub fill_button: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: settings::window::TITLE.to_string(),
            width: settings::window::WIDTH,
            height: settings::window::HEIGHT,
            variant: Variant::default(),
            fill_button: settings::buttons::FILL,
        }
    }
}

/// On-disk form; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    title: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
    variant: Option<Variant>,
    fill_button: Option<u8>,
}

impl Config {
    /// Build the configuration from parsed command-line arguments
    pub fn load(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML config file on top of the defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(text)?;
        let mut config = Self::default();
        if let Some(title) = file.title {
            config.title = title;
        }
        if let Some(width) = file.width {
            config.width = width;
        }
        if let Some(height) = file.height {
            config.height = height;
        }
        if let Some(variant) = file.variant {
            config.variant = variant;
        }
        if let Some(fill_button) = file.fill_button {
            config.fill_button = fill_button;
        }
        Ok(config)
    }

    fn apply_args(&mut self, args: &CliArgs) {
        if let Some(title) = &args.title {
            self.title = title.clone();
        }
        if let Some((width, height)) = args.size {
            self.width = width;
            self.height = height;
        }
        if let Some(variant) = args.variant {
            self.variant = variant;
        }
        if let Some(fill_button) = args.fill_button {
            self.fill_button = fill_button;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for dimension in [self.width, self.height] {
            if !dimension.is_finite() || dimension > settings::window::MAX_DIMENSION {
                return Err(ConfigError::InvalidDimension(dimension));
            }
            if dimension < settings::window::MIN_DIMENSION {
                return Err(ConfigError::DimensionTooSmall(dimension));
            }
        }
        if !settings::buttons::FILL_CHOICES.contains(&self.fill_button) {
            return Err(ConfigError::InvalidFillButton(self.fill_button));
        }
        Ok(())
    }

    pub fn buttons(&self) -> ButtonMap {
        ButtonMap::new(self.fill_button)
    }
}

/// A freehand drawing canvas
#[derive(Debug, Clone, Default, PartialEq, Parser)]
#[command(name = "squiggles", version, about)]
pub struct CliArgs {
    /// TOML config file to load before applying the other flags
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Window title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Initial window size, e.g. 800x600
    #[arg(short, long, value_name = "WIDTHxHEIGHT", value_parser = parse_size)]
    pub size: Option<(f64, f64)>,

    /// Canvas flavour
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Mouse button that draws filled squiggles (2 = middle, 3 = right)
    #[arg(long, value_name = "2|3")]
    pub fill_button: Option<u8>,
}

/// Parse `WIDTHxHEIGHT`, e.g. `800x600`
pub fn parse_size(value: &str) -> Result<(f64, f64), ConfigError> {
    let invalid = || ConfigError::InvalidSize(value.to_string());

    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let width: f64 = width.trim().parse().map_err(|_| invalid())?;
    let height: f64 = height.trim().parse().map_err(|_| invalid())?;
    Ok((width, height))
}
