use super::{escape_column, Field};
use crate::{fill::FieldFill, Context};
use indexmap::IndexMap;
use serde::Deserialize;
use std::cell::OnceCell;
use std_util::str;

/// A column as reported by the data source introspector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnMeta {
    pub name: String,

    /// Declared SQL type, e.g. `varchar(64)`
    pub ty: String,

    pub nullable: bool,

    pub comment: Option<String>,

    pub primary_key: bool,

    pub auto_increment: bool,
}

/// Accumulates a column's raw attributes before the [`Field`] is built.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    name: String,
    ty: String,
    nullable: bool,
    comment: Option<String>,
    primary_key: bool,
    auto_increment: bool,
    custom: IndexMap<String, serde_json::Value>,
    fill: Option<FieldFill>,
}

impl FieldBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: String::new(),
            nullable: false,
            comment: None,
            primary_key: false,
            auto_increment: false,
            custom: IndexMap::new(),
            fill: None,
        }
    }

    /// Replaces the raw column name.
    pub fn column_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the declared SQL type.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = ty.into();
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Marks the column as (part of) the primary key. The last call wins.
    pub fn primary_key(mut self, auto_increment: bool) -> Self {
        self.primary_key = true;
        self.auto_increment = auto_increment;
        self
    }

    /// Sets a custom attribute, replacing any previous value for the key.
    pub fn custom(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    /// Fixes the fill strategy up front. Fill rules are not consulted for
    /// this field.
    pub fn fill(mut self, fill: FieldFill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Builds the field, escaping the column name if it is a reserved word.
    ///
    /// An empty column name is a caller error.
    pub fn build(self, cx: &Context) -> Field {
        debug_assert!(!self.name.is_empty(), "column name must not be empty");

        let (column_name, keyword) = escape_column(cx, &self.name);

        let comment = match self.comment {
            Some(comment) if cx.config().global.comment_annotations && !str::is_blank(&comment) => {
                Some(comment.replace('"', "\\\""))
            }
            comment => comment,
        };

        Field {
            name: self.name,
            column_name,
            keyword,
            ty: self.ty,
            nullable: self.nullable,
            comment,
            primary_key: self.primary_key,
            auto_increment: self.auto_increment,
            custom: self.custom,
            property: OnceCell::new(),
            preset_fill: self.fill,
            fill: OnceCell::new(),
        }
    }
}

impl From<ColumnMeta> for FieldBuilder {
    fn from(column: ColumnMeta) -> Self {
        let mut builder = FieldBuilder::new(column.name)
            .ty(column.ty)
            .nullable(column.nullable);

        if let Some(comment) = column.comment {
            builder = builder.comment(comment);
        }

        if column.primary_key {
            builder = builder.primary_key(column.auto_increment);
        }

        builder
    }
}
