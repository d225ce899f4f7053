use crate::error::ConfigError;
use crate::pool::DEFAULT_POOL_CAPACITY;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_false() -> bool {
    false
}

fn default_pool_capacity() -> usize {
    DEFAULT_POOL_CAPACITY
}

/// Accumulator and pool settings, loadable from JSON.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StatsConfig {
    #[serde(default = "default_false")]
    #[schemars(
        title = "Retain original order",
        description = "Keep an insertion-order copy of batch observations (needed for covariance, correlation and distance)?",
        default = "default_false"
    )]
    pub retain_original: bool,

    /// Applies to pools built with `SharedPool::from_config` and to the global
    /// pools when passed to `configure_global_pools` before their first use.
    #[serde(default = "default_pool_capacity")]
    #[schemars(
        title = "Pool capacity",
        description = "Maximum number of idle accumulators kept for reuse.",
        default = "default_pool_capacity"
    )]
    pub pool_capacity: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig {
            retain_original: default_false(),
            pool_capacity: default_pool_capacity(),
        }
    }
}

impl StatsConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// JSON Schema describing the configuration file.
    pub fn schema() -> Schema {
        schema_for!(StatsConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::io::Write;

    fn root_props() -> Value {
        let v = serde_json::to_value(StatsConfig::schema()).expect("schema to JSON");
        v.get("schema")
            .cloned()
            .unwrap_or(v)
            .get("properties")
            .cloned()
            .unwrap_or_else(|| json!({}))
    }

    #[test]
    fn missing_fields_apply_defaults() {
        let cfg = StatsConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, StatsConfig::default());
        assert!(!cfg.retain_original);
        assert_eq!(cfg.pool_capacity, DEFAULT_POOL_CAPACITY);
    }

    #[test]
    fn explicit_fields_are_read() {
        let cfg =
            StatsConfig::from_json_str(r#"{ "retain_original": true, "pool_capacity": 8 }"#)
                .unwrap();
        assert!(cfg.retain_original);
        assert_eq!(cfg.pool_capacity, 8);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = StatsConfig::from_json_str(r#"{ "pool_capacity": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "retain_original": true }}"#).unwrap();
        let cfg = StatsConfig::from_path(file.path()).unwrap();
        assert!(cfg.retain_original);
        assert_eq!(cfg.pool_capacity, DEFAULT_POOL_CAPACITY);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StatsConfig::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn serde_roundtrip() {
        let cfg = StatsConfig {
            retain_original: true,
            pool_capacity: 3,
        };
        let j = serde_json::to_string(&cfg).unwrap();
        assert_eq!(StatsConfig::from_json_str(&j).unwrap(), cfg);
    }

    #[test]
    fn schema_has_titles() {
        let props = root_props();
        let obj = props.as_object().unwrap();
        for (key, title) in [
            ("retain_original", "Retain original order"),
            ("pool_capacity", "Pool capacity"),
        ] {
            let field = obj.get(key).unwrap().as_object().unwrap();
            assert_eq!(field.get("title").and_then(Value::as_str), Some(title));
        }
        let retain = obj.get("retain_original").unwrap();
        assert_eq!(retain.get("default").and_then(Value::as_bool), Some(false));
    }
}
