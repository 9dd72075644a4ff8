use crate::{fill::FillRule, naming::NamingStrategy};
use serde::Deserialize;

/// Settings for generated entities.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    /// How column names are turned into property names
    pub column_naming: NamingStrategy,

    /// Prefixes removed from column names before naming conversion, matched
    /// ignoring case. The first matching prefix wins.
    pub field_prefixes: Vec<String>,

    /// Always emit an explicit column mapping annotation
    pub table_field_annotation: bool,

    /// Drop the `is` prefix from boolean properties (`is_deleted` -> `deleted`)
    pub boolean_column_remove_is_prefix: bool,

    /// Optimistic lock column, compared ignoring case
    pub version_column_name: Option<String>,

    /// Optimistic lock property
    pub version_property_name: Option<String>,

    /// Logical delete column, compared ignoring case
    pub logic_delete_column_name: Option<String>,

    /// Logical delete property
    pub logic_delete_property_name: Option<String>,

    /// Auto-fill rules, matched in order
    pub fill_rules: Vec<FillRule>,
}

impl EntityConfig {
    /// Create a new EntityConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column_naming(mut self, naming: NamingStrategy) -> Self {
        self.column_naming = naming;
        self
    }

    pub fn field_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.field_prefixes.push(prefix.into());
        self
    }

    pub fn table_field_annotation(mut self, enabled: bool) -> Self {
        self.table_field_annotation = enabled;
        self
    }

    pub fn boolean_column_remove_is_prefix(mut self, enabled: bool) -> Self {
        self.boolean_column_remove_is_prefix = enabled;
        self
    }

    pub fn version_column_name(mut self, name: impl Into<String>) -> Self {
        self.version_column_name = Some(name.into());
        self
    }

    pub fn version_property_name(mut self, name: impl Into<String>) -> Self {
        self.version_property_name = Some(name.into());
        self
    }

    pub fn logic_delete_column_name(mut self, name: impl Into<String>) -> Self {
        self.logic_delete_column_name = Some(name.into());
        self
    }

    pub fn logic_delete_property_name(mut self, name: impl Into<String>) -> Self {
        self.logic_delete_property_name = Some(name.into());
        self
    }

    /// Append a fill rule. Earlier rules take precedence.
    pub fn fill_rule(mut self, rule: FillRule) -> Self {
        self.fill_rules.push(rule);
        self
    }
}
