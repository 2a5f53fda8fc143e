use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Startup constants. Every field is optional in JSON and falls back to the
/// built-in value.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    /// Added to dy every tick.
    pub gravity: f32,
    pub entity: EntityConfig,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub jump_impulse: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 600.0,
            gravity: 0.8,
            entity: EntityConfig::default(),
        }
    }
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            x: 100.0,
            y: 400.0,
            width: 50.0,
            height: 50.0,
            speed: 5.0,
            jump_impulse: 15.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("entity size must be positive, got {width}x{height}")]
    NonPositiveSize { width: f32, height: f32 },

    #[error("field width {field_width} cannot hold an entity {width} wide")]
    FieldTooNarrow { field_width: f32, width: f32 },
}

impl Config {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let e = &self.entity;
        for (field, value) in [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("gravity", self.gravity),
            ("entity.x", e.x),
            ("entity.y", e.y),
            ("entity.width", e.width),
            ("entity.height", e.height),
            ("entity.speed", e.speed),
            ("entity.jump_impulse", e.jump_impulse),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        if e.width <= 0.0 || e.height <= 0.0 {
            return Err(ConfigError::NonPositiveSize {
                width: e.width,
                height: e.height,
            });
        }

        if self.field_width < e.width {
            return Err(ConfigError::FieldTooNarrow {
                field_width: self.field_width,
                width: e.width,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError};

    #[test]
    fn empty_object_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.field_width, 800.0);
        assert_eq!(config.gravity, 0.8);
        assert_eq!(config.entity.x, 100.0);
        assert_eq!(config.entity.y, 400.0);
        assert_eq!(config.entity.jump_impulse, 15.0);
    }

    #[test]
    fn partial_override() {
        let config = Config::from_json(r#"{ "gravity": 0.5, "entity": { "speed": 7 } }"#).unwrap();
        assert_eq!(config.gravity, 0.5);
        assert_eq!(config.entity.speed, 7.0);
        assert_eq!(config.entity.width, 50.0);
        assert_eq!(config.field_width, 800.0);
    }

    #[test]
    fn resolved_config_serializes_every_field() {
        let config = Config::from_json(r#"{ "entity": { "speed": 7 } }"#).unwrap();
        let v = serde_json::to_value(config).unwrap();
        assert_eq!(v["field_width"], 800.0);
        assert_eq!(v["entity"]["speed"], 7.0);
        assert_eq!(v["entity"]["jump_impulse"], 15.0);
        assert_eq!(Config::from_json(&v.to_string()).unwrap(), config);
    }

    #[test]
    fn rejects_bad_json() {
        let err = Config::from_json("{ gravity: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_non_positive_size() {
        let err = Config::from_json(r#"{ "entity": { "height": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveSize { .. }));
        assert_eq!(err.to_string(), "entity size must be positive, got 50x0");
    }

    #[test]
    fn rejects_narrow_field() {
        let err = Config::from_json(r#"{ "field_width": 40 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::FieldTooNarrow { .. }));
    }

    #[test]
    fn rejects_non_finite() {
        let mut config = Config::default();
        config.gravity = f32::NAN;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::NonFinite { field: "gravity", .. }));
    }
}
