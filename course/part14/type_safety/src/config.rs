use std::path::Path;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use crate::drawable::Shape;

const DEFAULT_FILE: &str = "type_safety.toml";

/// What the demo runner pushes, draws and processes. Every field falls back to the built-in demo.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub int_items: Vec<i64>,
    pub str_items: Vec<String>,
    pub shapes: Vec<Shape>,
    pub process_items: Vec<i64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            int_items: vec![1, 2],
            str_items: vec!["hello".to_string(), "world".to_string()],
            shapes: vec![
                Shape::Circle { radius: 5.0 },
                Shape::Rectangle {
                    width: 10.0,
                    height: 20.0,
                },
            ],
            process_items: vec![1, 2, 3],
        }
    }
}

impl DemoConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_FILE)
    }

    /// Reads `path` if it exists, then applies `TYPE_SAFETY__*` environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(
                Environment::with_prefix("TYPE_SAFETY")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("int_items")
                    .with_list_parse_key("str_items")
                    .with_list_parse_key("process_items"),
            )
            .build()?;
        config.try_deserialize()
    }
}
