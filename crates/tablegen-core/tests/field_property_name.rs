use std::cell::Cell;
use std_util::prelude::*;
use tablegen_core::{
    config::EntityConfig, err, ColumnType, Config, Context, Field, Keywords, NamingStrategy,
    Result,
};

fn camel() -> EntityConfig {
    EntityConfig::new().column_naming(NamingStrategy::UnderlineToCamel)
}

fn context(entity: EntityConfig) -> Context {
    Context::new(Config::new().entity(entity))
}

#[test]
fn snake_case_column_maps_implicitly() {
    let cx = context(camel());
    let field = Field::builder("user_name").ty("varchar(32)").build(&cx);

    assert_eq!(field.property_name(&cx), "userName");
    assert!(!field.is_convert());
    assert_eq!(field.property_type(), Some("String"));
}

#[test]
fn upper_case_column_requires_mapping() {
    let cx = context(camel());
    let field = Field::builder("UserName").ty("varchar(32)").build(&cx);

    assert_eq!(field.property_name(&cx), "userName");
    assert!(field.is_convert());
}

#[test]
fn boolean_is_prefix_is_stripped() {
    let cx = context(camel().boolean_column_remove_is_prefix(true));
    let field = Field::builder("is_deleted").ty("tinyint(1)").build(&cx);

    assert_eq!(field.property_name(&cx), "deleted");
    assert!(field.is_convert());
    assert_eq!(field.property_type(), Some("Boolean"));
}

#[test]
fn is_prefix_kept_when_stripping_disabled() {
    let cx = context(camel());
    let field = Field::builder("is_deleted").ty("tinyint(1)").build(&cx);

    assert_eq!(field.property_name(&cx), "isDeleted");
    assert!(!field.is_convert());
}

#[test]
fn is_prefix_kept_for_non_boolean_columns() {
    let cx = context(camel().boolean_column_remove_is_prefix(true));
    let field = Field::builder("is_deleted").ty("int").build(&cx);

    assert_eq!(field.property_name(&cx), "isDeleted");
    assert!(!field.is_convert());
}

#[test]
fn bare_is_column_is_not_stripped() {
    let cx = context(camel().boolean_column_remove_is_prefix(true));
    let field = Field::builder("is").ty("boolean").build(&cx);

    assert_eq!(field.property_name(&cx), "is");
    assert!(!field.is_convert());
}

#[test]
fn keyword_column_requires_mapping_regardless_of_naming() {
    for naming in [NamingStrategy::NoChange, NamingStrategy::UnderlineToCamel] {
        let config = Config::new().entity(EntityConfig::new().column_naming(naming));
        let cx = Context::builder(config).keywords(Keywords::mysql()).build();
        let field = Field::builder("order").ty("int").build(&cx);

        assert!(field.is_keyword());
        assert_eq!(field.column_name(), "`order`");
        assert_eq!(field.property_name(&cx), "order");
        assert!(field.is_convert(), "naming={naming:?}");
    }
}

#[test]
fn no_change_naming_compares_names_exactly() {
    let cx = context(EntityConfig::new().field_prefix("t_"));

    let plain = cx.field("user_name");
    assert_eq!(plain.property_name(&cx), "user_name");
    assert!(!plain.is_convert());

    let prefixed = cx.field("t_name");
    assert_eq!(prefixed.property_name(&cx), "name");
    assert!(prefixed.is_convert());
}

#[test]
fn capital_mode_compares_ignoring_case() {
    let cx = Context::new(Config::new().entity(camel()).capital_mode(true));

    let name = cx.field("NAME");
    assert_eq!(name.property_name(&cx), "name");
    assert!(!name.is_convert());

    let user_name = cx.field("USER_NAME");
    assert_eq!(user_name.property_name(&cx), "userName");
    assert!(user_name.is_convert());

    // Without capital mode, any upper case character forces a mapping
    let cx = context(camel());
    let name = cx.field("NAME");
    assert_eq!(name.property_name(&cx), "name");
    assert!(name.is_convert());
}

#[test]
fn table_field_annotation_forces_mapping() {
    let cx = context(camel().table_field_annotation(true));
    let field = cx.field("user_name");

    assert_eq!(field.property_name(&cx), "userName");
    assert!(field.is_convert());
}

#[test]
fn resolution_is_memoized() {
    let cx = context(camel());
    let field = Field::builder("user_name").ty("varchar(32)").build(&cx);

    assert_eq!(field.property_name(&cx), "userName");

    let naming = |_: &str, _: NamingStrategy| "somethingElse".to_string();
    let types = |_: &Field, _: &Config| -> Result<ColumnType> { Ok(ColumnType::new("Long")) };

    assert_eq!(
        field.resolve_property_name(&naming, &types, cx.config()),
        "userName"
    );
    assert_eq!(field.property_type(), Some("String"));
}

#[test]
fn custom_policies_are_consulted_once() {
    let naming_calls = Cell::new(0);
    let type_calls = Cell::new(0);

    let naming = |column: &str, _: NamingStrategy| {
        naming_calls.set(naming_calls.get() + 1);
        column.to_uppercase()
    };
    let types = |_: &Field, _: &Config| -> Result<ColumnType> {
        type_calls.set(type_calls.get() + 1);
        Ok(ColumnType::with_pkg("Money", "com.example.Money"))
    };

    let cx = Context::new(Config::new());
    let field = cx.field("price");

    for _ in 0..2 {
        assert_eq!(
            field.resolve_property_name(&naming, &types, cx.config()),
            "PRICE"
        );
    }
    assert_eq!(naming_calls.get(), 1);
    assert_eq!(type_calls.get(), 1);
    assert_eq!(field.property_name(&cx), "PRICE");
    assert!(field.is_convert());
    assert_eq!(
        field.column_type(),
        Some(&ColumnType::with_pkg("Money", "com.example.Money"))
    );
}

#[test]
fn unmapped_type_degrades_to_none() {
    let cx = context(camel());
    let field = Field::builder("location").ty("geometry").build(&cx);

    assert_eq!(field.property_name(&cx), "location");
    assert_none!(field.column_type());
    assert_none!(field.property_type());
}

#[test]
fn failing_type_resolver_degrades_to_none() {
    let cx = Context::builder(Config::new().entity(camel()))
        .type_convert(|_: &Field, _: &Config| -> Result<ColumnType> {
            Err(err!("type registry offline"))
        })
        .build();
    let field = Field::builder("is_deleted").ty("boolean").build(&cx);

    assert_eq!(field.property_name(&cx), "isDeleted");
    assert_none!(field.column_type());
}

#[test]
fn convert_is_false_before_resolution() {
    let cx = context(camel());
    let field = cx.field("UserName");

    assert_none!(field.property());
    assert!(!field.is_convert());
    assert_none!(field.capital_name());
}

#[test]
fn bind_property_applies_rules_and_is_final() {
    let cx = context(camel().boolean_column_remove_is_prefix(true));
    let field = cx.field("is_active");

    assert_ok!(field.bind_property("isActive", Some(ColumnType::new("Boolean")), cx.config()));
    assert_eq!(field.property_name(&cx), "active");
    assert!(field.is_convert());
    assert_eq!(assert_some!(field.capital_name()), "Active");

    let err = assert_err!(field.bind_property("other", None, cx.config()));
    assert!(err.is_invalid_field_state());
    assert_eq!(field.property_name(&cx), "active");
}
