use super::ColumnType;
use crate::field::Field;
use serde::Deserialize;
use std_util::str;

/// A user-supplied type mapping that takes precedence over the default
/// type table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeOverride {
    pub matcher: TypeMatch,
    pub ty: ColumnType,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeMatch {
    /// Raw column name, compared ignoring case
    Column(String),

    /// Declared SQL type, compared ignoring case. Without parentheses only
    /// the base type name is compared, so `tinyint` matches any width but
    /// `date` does not match `datetime`. With parentheses it is a prefix of
    /// the full declaration, so `tinyint(1)` matches `tinyint(1) unsigned`.
    DeclaredType(String),
}

impl TypeOverride {
    pub fn column(name: impl Into<String>, ty: impl Into<ColumnType>) -> Self {
        Self {
            matcher: TypeMatch::Column(name.into()),
            ty: ty.into(),
        }
    }

    pub fn declared_type(prefix: impl Into<String>, ty: impl Into<ColumnType>) -> Self {
        Self {
            matcher: TypeMatch::DeclaredType(prefix.into()),
            ty: ty.into(),
        }
    }

    pub fn matches(&self, field: &Field) -> bool {
        match &self.matcher {
            TypeMatch::Column(name) => str::eq_ignore_case(field.name(), name),
            TypeMatch::DeclaredType(declared) if declared.contains('(') => {
                str::strip_prefix_ignore_case(field.ty().trim(), declared.trim()).is_some()
            }
            TypeMatch::DeclaredType(declared) => {
                str::eq_ignore_case(base_type(field.ty()), declared.trim())
            }
        }
    }
}

/// `decimal(10,2)` and `double precision` have the base types `decimal` and
/// `double`.
pub(crate) fn base_type(declared: &str) -> &str {
    declared
        .trim()
        .split(|c: char| c == '(' || c.is_whitespace())
        .next()
        .unwrap_or_default()
}
