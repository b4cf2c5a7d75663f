//! Showcase configuration
//!
//! Everything has a default, so an empty JSON object is a valid config.
//! [`ShowcaseConfig::load`] reads the file named by `FOLIA_CONFIG` (if any)
//! and then applies `FOLIA_LAYOUT`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::orchestrator::TransitionConfig;
use crate::scene::camera::CameraConfig;
use crate::scene::presets::LayoutPreset;
use crate::scene::{Layout, SectionTargetTable};

/// Path of a JSON config file.
pub const CONFIG_ENV: &str = "FOLIA_CONFIG";
/// Layout preset override (`extended` or `classic`).
pub const LAYOUT_ENV: &str = "FOLIA_LAYOUT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown layout preset: {0}")]
    UnknownLayout(String),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Fraction of the remaining color distance covered per second
    pub rate: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self { rate: 2.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Folia".into(), width: 1280.0, height: 800.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub layout: LayoutPreset,
    pub transition: TransitionConfig,
    /// Viewports narrower than this (in points) are mobile
    pub mobile_breakpoint: f32,
    pub camera: CameraConfig,
    pub background: BackgroundConfig,
    pub window: WindowConfig,
    /// JSON Target Table replacing the preset's table
    pub table_path: Option<PathBuf>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            layout: LayoutPreset::default(),
            transition: TransitionConfig::default(),
            mobile_breakpoint: 768.0,
            camera: CameraConfig::default(),
            background: BackgroundConfig::default(),
            window: WindowConfig::default(),
            table_path: None,
        }
    }
}

impl ShowcaseConfig {
    /// Load from the process environment, then validate.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using `var` to look up environment values.
    pub fn load_with(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match var(CONFIG_ENV) {
            Some(path) => Self::from_path(Path::new(&path))?,
            None => Self::default(),
        };
        if let Some(name) = var(LAYOUT_ENV) {
            config.layout = LayoutPreset::parse(&name).ok_or(ConfigError::UnknownLayout(name))?;
        }
        config.validate()?;
        log::info!("Config loaded: layout {:?}, transition {} ms", config.layout, config.transition.duration_ms);
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = read(path)?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &'static str, reason: &str| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason: reason.to_string() })
        };

        if self.transition.duration_ms == 0 {
            return invalid("transition.duration_ms", "must be positive");
        }
        if !(self.mobile_breakpoint.is_finite() && self.mobile_breakpoint > 0.0) {
            return invalid("mobile_breakpoint", "must be a positive width");
        }
        let follow = self.camera.follow_factor;
        if !(follow > 0.0 && follow <= 1.0) {
            return invalid("camera.follow_factor", "must be in (0, 1]");
        }
        if !(self.camera.distance.is_finite() && self.camera.distance > 0.0) {
            return invalid("camera.distance", "must be positive");
        }
        if !(self.camera.fov_deg > 0.0 && self.camera.fov_deg < 180.0) {
            return invalid("camera.fov_deg", "must be in (0, 180)");
        }
        if !(self.background.rate.is_finite() && self.background.rate > 0.0) {
            return invalid("background.rate", "must be positive");
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return invalid("window", "width and height must be positive");
        }
        Ok(())
    }

    /// Build the configured layout, swapping in the table from
    /// `table_path` when set. Totality is checked by the caller.
    pub fn build_layout(&self) -> Result<Layout, ConfigError> {
        let mut layout = self.layout.build();
        if let Some(path) = &self.table_path {
            let text = read(path)?;
            layout.table = SectionTargetTable::from_json(&text)
                .map_err(|source| ConfigError::Json { path: path.clone(), source })?;
            log::info!("Target table loaded from {}", path.display());
        }
        log::info!("Layout '{}' selected ({} sections)", layout.name, layout.total_sections);
        Ok(layout)
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config: ShowcaseConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ShowcaseConfig::default());
        assert_eq!(config.transition.duration_ms, 1500);
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config: ShowcaseConfig = serde_json::from_str(
            r#"{"layout": "classic", "transition": {"duration_ms": 900}, "camera": {"follow_factor": 0.1}}"#,
        )
        .unwrap();
        assert_eq!(config.layout, LayoutPreset::Classic);
        assert_eq!(config.transition.duration_ms, 900);
        assert_eq!(config.transition.easing, crate::tween::Easing::CubicInOut);
        assert_eq!(config.camera.follow_factor, 0.1);
        assert_eq!(config.camera.distance, 8.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ShowcaseConfig::default();
        config.transition.duration_ms = 0;
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "transition.duration_ms"),
            other => panic!("Expected invalid duration, got {:?}", other),
        }

        let mut config = ShowcaseConfig::default();
        config.camera.follow_factor = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_layout_env_override() {
        let config = ShowcaseConfig::load_with(|key| (key == LAYOUT_ENV).then(|| "classic".to_string())).unwrap();
        assert_eq!(config.layout, LayoutPreset::Classic);

        match ShowcaseConfig::load_with(|key| (key == LAYOUT_ENV).then(|| "tiny".to_string())) {
            Err(ConfigError::UnknownLayout(name)) => assert_eq!(name, "tiny"),
            other => panic!("Expected unknown layout, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let result = ShowcaseConfig::load_with(|key| {
            (key == CONFIG_ENV).then(|| "/nonexistent/folia/config.json".to_string())
        });
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_build_layout_uses_preset() {
        let config = ShowcaseConfig { layout: LayoutPreset::Classic, ..Default::default() };
        let layout = config.build_layout().unwrap();
        assert_eq!(layout.total_sections, 6);
    }
}
