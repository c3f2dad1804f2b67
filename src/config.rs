//! Configuration file handling for artbox.
//!
//! Loads configuration from `<config dir>/artbox/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{
    ArtBox, DEFAULT_BOX_HEIGHT, DEFAULT_BOX_WIDTH, DEFAULT_CHAR_ASPECT_RATIO, DEFAULT_CONTRAST,
};
use crate::converter::{ConverterConfig, DEFAULT_OUTPUT_PATH};

/// Configuration file structure for artbox.
/// Loaded from the platform config directory (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ascii: AsciiConfig,
    #[serde(default)]
    pub art_box: ArtBoxConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct AsciiConfig {
    #[serde(default = "default_contrast")]
    pub contrast: i32,
    #[serde(default)]
    pub invert: bool,
    #[serde(default = "default_char_aspect")]
    pub char_aspect: f64,
    /// Width used when none is given on the command line.
    /// Falls back to the art box width.
    #[serde(default)]
    pub width: Option<u32>,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            contrast: default_contrast(),
            invert: false,
            char_aspect: default_char_aspect(),
            width: None,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ArtBoxConfig {
    #[serde(default = "default_box_width")]
    pub width: u32,
    #[serde(default = "default_box_height")]
    pub height: u32,
}

impl Default for ArtBoxConfig {
    fn default() -> Self {
        Self {
            width: default_box_width(),
            height: default_box_height(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_contrast() -> i32 {
    DEFAULT_CONTRAST
}

fn default_char_aspect() -> f64 {
    DEFAULT_CHAR_ASPECT_RATIO
}

fn default_box_width() -> u32 {
    DEFAULT_BOX_WIDTH
}

fn default_box_height() -> u32 {
    DEFAULT_BOX_HEIGHT
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            Self::read(&path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path that must exist.
    pub fn load_required(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Self::read(path)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Width to render at when the command line gives none.
    pub fn default_width(&self) -> u32 {
        self.ascii.width.unwrap_or(self.art_box.width)
    }

    /// Settings for the converter. Values are validated by `Converter::new`.
    pub fn converter_config(&self) -> ConverterConfig {
        ConverterConfig {
            contrast: self.ascii.contrast,
            art_box: ArtBox {
                width: self.art_box.width,
                height: self.art_box.height,
            },
            char_aspect: self.ascii.char_aspect,
            invert: self.ascii.invert,
            output: self.output.path.clone(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("artbox").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/artbox/config.toml")
        })
}
