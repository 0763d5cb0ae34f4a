//! Toolbar configuration.
//!
//! Layout metrics and initial titles are host-supplied. They can be built in
//! code or read from a TOML document; every field falls back to its default.
//!
//! ```toml
//! time_range_title = "3M"
//! interval_title = "1D"
//!
//! [metrics]
//! wide_button_width = 60.0
//! item_spacing = 10.0
//! ```

use std::path::Path;

use chart_toolbar_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::item::ItemStyle;

// ============================================================================
// ToolbarMetrics
// ============================================================================

/// Sizing constants used by the group width computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarMetrics {
    /// Width of buttons with a disclosure arrow.
    pub wide_button_width: f32,
    /// Width of single-icon buttons.
    pub narrow_button_width: f32,
    /// Spacing between adjacent buttons in a group.
    pub item_spacing: f32,
    /// Fixed height of the bar.
    pub bar_height: f32,
    /// Padding between each group and the bar edge.
    pub edge_padding: f32,
}

impl Default for ToolbarMetrics {
    fn default() -> Self {
        Self {
            wide_button_width: 56.0,
            narrow_button_width: 40.0,
            item_spacing: 8.0,
            bar_height: 76.0,
            edge_padding: 20.0,
        }
    }
}

impl ToolbarMetrics {
    /// The width of a button drawn with `style`.
    pub fn button_width(&self, style: ItemStyle) -> f32 {
        if style.is_narrow() {
            self.narrow_button_width
        } else {
            self.wide_button_width
        }
    }

    /// Reject negative or non-finite metrics.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("wide_button_width", self.wide_button_width),
            ("narrow_button_width", self.narrow_button_width),
            ("item_spacing", self.item_spacing),
            ("bar_height", self.bar_height),
            ("edge_padding", self.edge_padding),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid_metric(name, value));
            }
        }
        Ok(())
    }
}

// ============================================================================
// ToolbarConfig
// ============================================================================

/// Everything the controller needs at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Layout metrics.
    pub metrics: ToolbarMetrics,
    /// Initial title of the time range button.
    pub time_range_title: String,
    /// Initial title of the interval button.
    pub interval_title: String,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            metrics: ToolbarMetrics::default(),
            time_range_title: "1M".to_string(),
            interval_title: "1W".to_string(),
        }
    }
}

impl ToolbarConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ToolbarConfig = toml::from_str(text)?;
        config.metrics.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(target: targets::CONFIG, path = %path.display(), "loaded toolbar config");
        Ok(config)
    }

    /// Serialize the configuration to TOML text.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
