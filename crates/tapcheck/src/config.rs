//! Viewports and targets to check.
//!
//! The built-in lists cover three mobile widths and the interactive
//! controls of a game UI. A TOML file can replace either list:
//!
//! ```toml
//! [[viewports]]
//! name = "Small Phone"
//! width = 360
//! min_size = 48
//!
//! [[targets]]
//! selector = "#start-button"
//! name = "Start Button"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// WCAG 2.5.5 (Level AAA) minimum target size in pixels.
pub const WCAG_MIN_SIZE: u32 = 44;

/// Recommended minimum target size for mobile platforms in pixels.
pub const RECOMMENDED_MIN_SIZE: u32 = 48;

/// A named screen-width scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Display name (e.g., "iPhone SE").
    pub name: String,
    /// Viewport width in pixels.
    pub width: u32,
    /// Minimum touch-target size required at this viewport.
    #[serde(alias = "minSize")]
    pub min_size: u32,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(name: impl Into<String>, width: u32, min_size: u32) -> Self {
        Self {
            name: name.into(),
            width,
            min_size,
        }
    }
}

/// An interactive element class to check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Selector text, matched exactly against stylesheet selectors.
    pub selector: String,
    /// Display name.
    pub name: String,
}

impl Target {
    /// Create a target.
    pub fn new(selector: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            name: name.into(),
        }
    }
}

/// The viewports and targets of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Viewports, in report order.
    #[serde(default = "default_viewports")]
    pub viewports: Vec<Viewport>,
    /// Targets, in report order.
    #[serde(default = "default_targets")]
    pub targets: Vec<Target>,
}

impl Config {
    /// Load a configuration from a TOML file.
    ///
    /// Lists missing from the file fall back to the built-in ones.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml(&content).map_err(|e| Error::config(path, e))?;
        tracing::debug!(
            path = %path.display(),
            viewports = config.viewports.len(),
            targets = config.targets.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewports: default_viewports(),
            targets: default_targets(),
        }
    }
}

fn default_viewports() -> Vec<Viewport> {
    vec![
        Viewport::new("iPhone SE", 320, RECOMMENDED_MIN_SIZE),
        Viewport::new("Mobile Portrait", 480, RECOMMENDED_MIN_SIZE),
        Viewport::new("Tablet Portrait", 768, WCAG_MIN_SIZE),
    ]
}

fn default_targets() -> Vec<Target> {
    vec![
        Target::new("#audio-controls button", "Audio Control Buttons"),
        Target::new(r#".volume-slider input[type="range"]"#, "Volume Sliders"),
        Target::new(".difficulty-btn", "Difficulty Buttons"),
        Target::new("#start-button", "Start Button"),
        Target::new("#help-button", "Help Button"),
        Target::new("#pause-button", "Pause Button"),
        Target::new("#help-close", "Help Close Button"),
        Target::new("#pause-overlay button", "Pause Overlay Buttons"),
        Target::new("#resume-button", "Resume Button"),
        Target::new("#restart-button", "Restart Button"),
    ]
}
