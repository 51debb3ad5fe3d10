//! Editor configuration
//!
//! A small TOML file selects the canvas dimensions and the texture
//! root. Everything has a default, so the editor runs without any
//! configuration file at all.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::layout::LayoutContext;

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Resolved editor configuration
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Canvas the layout is resolved against
    pub canvas: LayoutContext,
    /// Root directory texture references resolve under
    pub texture_root: PathBuf,
}

/// TOML structure for deserializing configuration
#[derive(Deserialize)]
struct TomlConfig {
    canvas: Option<TomlCanvas>,
    assets: Option<TomlAssets>,
}

#[derive(Deserialize)]
struct TomlCanvas {
    width: Option<i32>,
    height: Option<i32>,
}

#[derive(Deserialize)]
struct TomlAssets {
    texture_root: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas: LayoutContext::default(),
            texture_root: PathBuf::from("resource_pack/textures"),
        }
    }
}

impl EditorConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Missing sections and keys take their defaults.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let defaults = EditorConfig::default();

        let canvas = match parsed.canvas {
            Some(c) => LayoutContext::new().with_canvas(
                c.width.unwrap_or(defaults.canvas.canvas_width),
                c.height.unwrap_or(defaults.canvas.canvas_height),
            ),
            None => defaults.canvas,
        };
        let texture_root = parsed
            .assets
            .and_then(|a| a.texture_root)
            .unwrap_or(defaults.texture_root);

        Ok(EditorConfig {
            canvas,
            texture_root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.canvas.canvas_width, 1920);
        assert_eq!(config.canvas.canvas_height, 1080);
        assert_eq!(config.texture_root, PathBuf::from("resource_pack/textures"));
    }

    #[test]
    fn test_full_config() {
        let config = EditorConfig::from_str(
            r#"
            [canvas]
            width = 800
            height = 600

            [assets]
            texture_root = "pack/textures"
            "#,
        )
        .unwrap();
        assert_eq!(config.canvas.canvas_width, 800);
        assert_eq!(config.canvas.canvas_height, 600);
        assert_eq!(config.texture_root, PathBuf::from("pack/textures"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = EditorConfig::from_str("[canvas]\nwidth = 2560\n").unwrap();
        assert_eq!(config.canvas.canvas_width, 2560);
        assert_eq!(config.canvas.canvas_height, 1080);
        assert_eq!(config.texture_root, PathBuf::from("resource_pack/textures"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(EditorConfig::from_str("[canvas\nwidth = 1").is_err());
    }
}
