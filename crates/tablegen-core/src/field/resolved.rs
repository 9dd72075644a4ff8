use super::{Field, Property};
use crate::{config::EntityConfig, fill::FieldFill, naming, ty::ColumnType};
use indexmap::IndexMap;
use serde::Serialize;
use std::borrow::Cow;

/// Read-only view of a fully resolved [`Field`], handed to templates.
///
/// Serializes with camelCase keys.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedField<'a> {
    #[serde(skip)]
    field: &'a Field,
    name: &'a str,
    column_name: &'a str,
    annotation_column_name: Cow<'a, str>,
    keyword: bool,
    ty: &'a str,
    nullable: bool,
    property_name: &'a str,
    capital_name: String,
    column_type: Option<&'a ColumnType>,
    property_type: Option<&'a str>,
    convert: bool,
    comment: Option<&'a str>,
    fill: Option<FieldFill>,
    primary_key: bool,
    auto_increment: bool,
    version_field: bool,
    logic_delete_field: bool,
    custom: &'a IndexMap<String, serde_json::Value>,
}

impl<'a> ResolvedField<'a> {
    pub(super) fn new(
        field: &'a Field,
        property: &'a Property,
        fill: Option<FieldFill>,
        entity: &EntityConfig,
    ) -> Self {
        Self {
            field,
            name: field.name(),
            column_name: field.column_name(),
            annotation_column_name: field.annotation_column_name(),
            keyword: field.is_keyword(),
            ty: field.ty(),
            nullable: field.nullable(),
            property_name: property.name(),
            capital_name: naming::capital_name(property.name()),
            column_type: property.column_type(),
            property_type: property.property_type(),
            convert: property.is_convert(),
            comment: field.comment(),
            fill,
            primary_key: field.is_primary_key(),
            auto_increment: field.is_auto_increment(),
            version_field: field.is_version_field(entity),
            logic_delete_field: field.is_logic_delete_field(entity),
            custom: field.custom(),
        }
    }

    /// Gets the field this view was resolved from.
    pub fn field(&self) -> &'a Field {
        self.field
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn column_name(&self) -> &'a str {
        self.column_name
    }

    pub fn annotation_column_name(&self) -> &str {
        &self.annotation_column_name
    }

    pub fn is_keyword(&self) -> bool {
        self.keyword
    }

    pub fn ty(&self) -> &'a str {
        self.ty
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn property_name(&self) -> &'a str {
        self.property_name
    }

    /// Property name as used in accessor names (`getUserName`).
    pub fn capital_name(&self) -> &str {
        &self.capital_name
    }

    pub fn column_type(&self) -> Option<&'a ColumnType> {
        self.column_type
    }

    pub fn property_type(&self) -> Option<&'a str> {
        self.property_type
    }

    pub fn is_convert(&self) -> bool {
        self.convert
    }

    pub fn comment(&self) -> Option<&'a str> {
        self.comment
    }

    pub fn fill(&self) -> Option<FieldFill> {
        self.fill
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }

    pub fn is_version_field(&self) -> bool {
        self.version_field
    }

    pub fn is_logic_delete_field(&self) -> bool {
        self.logic_delete_field
    }

    pub fn custom(&self) -> &'a IndexMap<String, serde_json::Value> {
        self.custom
    }
}
