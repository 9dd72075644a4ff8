mod entity;
pub use entity::EntityConfig;

mod global;
pub use global::{DateType, GlobalConfig};

use crate::{ty::TypeOverride, Error, Result};
use serde::Deserialize;
use std_util::str;

/// Configuration consumed while resolving fields.
///
/// Every key is optional when loading from JSON:
///
/// ```
/// # use tablegen_core::{Config, NamingStrategy};
/// let config = Config::from_json(r#"{
///     "entity": { "column_naming": "underline_to_camel", "version_column_name": "version" }
/// }"#).unwrap();
///
/// assert_eq!(config.entity.column_naming, NamingStrategy::UnderlineToCamel);
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings shared by every generated artifact
    pub global: GlobalConfig,

    /// Entity (generated model) settings
    pub entity: EntityConfig,

    /// When set, all-upper-case column names such as `USER_NAME` are compared
    /// to their property name ignoring case.
    pub capital_mode: bool,

    /// Type mappings consulted, in order, before the default type table
    pub type_overrides: Vec<TypeOverride>,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON document.
    pub fn from_json(src: &str) -> Result<Self> {
        serde_json::from_str(src).map_err(Error::invalid_config)
    }

    /// Set the global configuration
    pub fn global(mut self, global: GlobalConfig) -> Self {
        self.global = global;
        self
    }

    /// Set the entity configuration
    pub fn entity(mut self, entity: EntityConfig) -> Self {
        self.entity = entity;
        self
    }

    pub fn capital_mode(mut self, capital_mode: bool) -> Self {
        self.capital_mode = capital_mode;
        self
    }

    /// Append a type override. Overrides are matched in insertion order.
    pub fn type_override(mut self, type_override: TypeOverride) -> Self {
        self.type_overrides.push(type_override);
        self
    }

    /// Returns `true` if capital-mode naming applies to the given column.
    pub fn is_capital_mode_naming(&self, column: &str) -> bool {
        self.capital_mode && str::is_capital_mode(column)
    }
}
