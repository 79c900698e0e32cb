// src/config.rs
//! Render configuration: page geometry, fonts and optional styling
//! overrides, with an optional TOML file carrying user overrides.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Page margins as the engine's [left, top, right, bottom] tuple.
    pub page_margins: [f32; 4],
    pub font_family: String,
    pub base_font_size: f32,
    /// Template used when the caller does not name one.
    pub default_template: String,
    /// Replaces the selected template's accent color when set.
    pub accent_color: Option<String>,
    /// Replaces the muted meta-text color when set.
    pub secondary_color: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            page_margins: [40.0, 40.0, 40.0, 40.0],
            font_family: "Helvetica".to_string(),
            base_font_size: 10.0,
            default_template: "classic".to_string(),
            accent_color: None,
            secondary_color: None,
        }
    }
}

impl RenderConfig {
    pub fn with_page_margins(mut self, margins: [f32; 4]) -> Self {
        self.page_margins = margins;
        self
    }

    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = family.to_string();
        self
    }

    pub fn with_default_template(mut self, template: &str) -> Self {
        self.default_template = template.to_string();
        self
    }

    pub fn with_accent_color(mut self, color: &str) -> Self {
        self.accent_color = Some(color.to_string());
        self
    }

    pub fn with_secondary_color(mut self, color: &str) -> Self {
        self.secondary_color = Some(color.to_string());
        self
    }

    /// Load overrides from a TOML file, merged over the defaults. Absent
    /// keys keep their default values.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        let defaults = Self::default();
        Ok(Self {
            page_margins: file.page_margins.unwrap_or(defaults.page_margins),
            font_family: file.font_family.unwrap_or(defaults.font_family),
            base_font_size: file.base_font_size.unwrap_or(defaults.base_font_size),
            default_template: file.default_template.unwrap_or(defaults.default_template),
            accent_color: file.styling.primary_color,
            secondary_color: file.styling.secondary_color,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    page_margins: Option<[f32; 4]>,
    font_family: Option<String>,
    base_font_size: Option<f32>,
    default_template: Option<String>,
    styling: StylingOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StylingOverrides {
    primary_color: Option<String>,
    secondary_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.page_margins, [40.0, 40.0, 40.0, 40.0]);
        assert_eq!(config.default_template, "classic");
        assert!(config.accent_color.is_none());
    }

    #[test]
    fn test_builders() {
        let config = RenderConfig::default()
            .with_font_family("Inter")
            .with_accent_color("#14A4E6");
        assert_eq!(config.font_family, "Inter");
        assert_eq!(config.accent_color.as_deref(), Some("#14A4E6"));
    }

    #[test]
    fn test_toml_overrides_merge_over_defaults() {
        let parsed: ConfigFile = toml::from_str(
            r##"
            font_family = "Inter"

            [styling]
            primary_color = "#14A4E6"
            "##,
        )
        .unwrap();
        assert_eq!(parsed.font_family.as_deref(), Some("Inter"));
        assert_eq!(parsed.styling.primary_color.as_deref(), Some("#14A4E6"));
        assert!(parsed.page_margins.is_none());
    }
}
