//! Registry settings

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};

/// # Scene Configuration
///
/// Controls registry allocation and the defaults applied to game objects the
/// registry creates on behalf of callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of object slots reserved up front
    pub initial_capacity: usize,

    /// Whether tag queries also return locally inactive objects
    pub tag_queries_include_inactive: bool,

    /// Tag given to objects created through `Registry::create`
    pub default_tag: String,

    /// Layer given to objects created through `Registry::create`
    pub default_layer: i32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            tag_queries_include_inactive: true,
            default_tag: String::new(),
            default_layer: 0,
        }
    }
}

impl Config for SceneConfig {}

impl SceneConfig {
    /// Largest number of object slots a configuration may reserve up front
    pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

    /// Set the number of slots reserved up front
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Choose whether tag queries skip locally inactive objects
    pub fn with_tag_queries_include_inactive(mut self, include: bool) -> Self {
        self.tag_queries_include_inactive = include;
        self
    }

    /// Set the default tag for created objects
    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = tag.into();
        self
    }

    /// Set the default layer for created objects
    pub fn with_default_layer(mut self, layer: i32) -> Self {
        self.default_layer = layer;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity > Self::MAX_INITIAL_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "initial_capacity {} exceeds the maximum of {}",
                self.initial_capacity,
                Self::MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("scene_engine_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_default_keeps_inactive_in_tag_queries() {
        let config = SceneConfig::default();
        assert!(config.tag_queries_include_inactive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let path = temp_path("scene.toml");
        let config = SceneConfig::default()
            .with_initial_capacity(8)
            .with_default_tag("Untagged")
            .with_tag_queries_include_inactive(false);

        config.save_to_file(&path).unwrap();
        let loaded = SceneConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_partial_file_uses_defaults() {
        let path = temp_path("scene.ron");
        std::fs::write(&path, "(default_layer: 2)").unwrap();
        let loaded = SceneConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.default_layer, 2);
        assert_eq!(loaded.initial_capacity, 64);
    }

    #[test]
    fn test_oversized_capacity_rejected() {
        let path = temp_path("oversized.toml");
        std::fs::write(&path, "initial_capacity = 5000000000\n").unwrap();
        let result = SceneConfig::load(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_capacity_bound() {
        let at_limit = SceneConfig::default().with_initial_capacity(SceneConfig::MAX_INITIAL_CAPACITY);
        assert!(at_limit.validate().is_ok());

        let huge = SceneConfig::default().with_initial_capacity(u32::MAX as usize);
        assert!(matches!(huge.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = SceneConfig::default().save_to_file(temp_path("scene.json"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
