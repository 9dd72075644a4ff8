use serde::{Deserialize, Serialize};
use std::fmt;
use std_util::str;

/// When generated code should populate a field automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldFill {
    Default,
    Insert,
    Update,
    InsertUpdate,
}

/// What a [`FillRule`] name is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillScope {
    /// The raw column name, ignoring case
    Column,

    /// The resolved property name, exactly
    Property,
}

/// Declares that the field with the given column or property name is filled
/// automatically.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FillRule {
    pub name: String,
    pub scope: FillScope,
    pub fill: FieldFill,
}

impl FieldFill {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldFill::Default => "DEFAULT",
            FieldFill::Insert => "INSERT",
            FieldFill::Update => "UPDATE",
            FieldFill::InsertUpdate => "INSERT_UPDATE",
        }
    }
}

impl fmt::Display for FieldFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FillRule {
    pub fn column(name: impl Into<String>, fill: FieldFill) -> Self {
        Self {
            name: name.into(),
            scope: FillScope::Column,
            fill,
        }
    }

    pub fn property(name: impl Into<String>, fill: FieldFill) -> Self {
        Self {
            name: name.into(),
            scope: FillScope::Property,
            fill,
        }
    }

    /// Returns `true` if the rule applies to a field with the given raw
    /// column name and, if resolved, property name.
    pub fn matches(&self, column: &str, property: Option<&str>) -> bool {
        match self.scope {
            FillScope::Column => str::eq_ignore_case(&self.name, column),
            FillScope::Property => property == Some(self.name.as_str()),
        }
    }
}
