use super::Field;
use crate::{naming::NamingStrategy, ty::ColumnType, Config};
use std_util::str;

/// The generated property a column maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,

    /// `None` when the type resolver could not map the declared type
    column_type: Option<ColumnType>,

    /// True if the column-to-property mapping must be declared explicitly
    convert: bool,
}

impl Property {
    pub(super) fn derive(
        field: &Field,
        candidate: String,
        column_type: Option<ColumnType>,
        config: &Config,
    ) -> Property {
        let boolean = column_type.as_ref().is_some_and(ColumnType::is_boolean);

        if boolean && config.entity.boolean_column_remove_is_prefix && candidate.starts_with("is") {
            if let Some(name) = str::remove_prefix_to_lower(&candidate, 2) {
                return Property {
                    name,
                    column_type,
                    convert: true,
                };
            }
        }

        let convert = requires_explicit_mapping(field, &candidate, config);

        Property {
            name: candidate,
            column_type,
            convert,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> Option<&ColumnType> {
        self.column_type.as_ref()
    }

    pub fn property_type(&self) -> Option<&str> {
        self.column_type.as_ref().map(ColumnType::ty)
    }

    pub fn is_convert(&self) -> bool {
        self.convert
    }
}

fn requires_explicit_mapping(field: &Field, property: &str, config: &Config) -> bool {
    if config.entity.table_field_annotation || field.is_keyword() {
        return true;
    }

    let column = field.name();

    if config.is_capital_mode_naming(column) {
        return !str::eq_ignore_case(column, property);
    }

    match config.entity.column_naming {
        // The mapper translates `snake_case` on its own, upper case columns
        // are the only ones it cannot find.
        NamingStrategy::UnderlineToCamel => str::contains_upper_case(column),
        NamingStrategy::NoChange => column != property,
    }
}
