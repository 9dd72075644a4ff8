use pretty_assertions::assert_eq;
use std_util::prelude::*;
use tablegen_core::{
    config::DateType,
    ty::{TypeMatch, TypeOverride},
    ColumnType, Config, Context, FieldFill, FillRule, NamingStrategy,
};

const FULL: &str = r#"{
    "global": { "comment_annotations": true, "date_type": "sql_pack" },
    "entity": {
        "column_naming": "underline_to_camel",
        "field_prefixes": ["f_"],
        "table_field_annotation": false,
        "boolean_column_remove_is_prefix": true,
        "version_column_name": "version",
        "logic_delete_property_name": "deleted",
        "fill_rules": [
            { "name": "create_time", "scope": "column", "fill": "INSERT" },
            { "name": "updateTime", "scope": "property", "fill": "INSERT_UPDATE" }
        ]
    },
    "capital_mode": true,
    "type_overrides": [
        { "matcher": { "column": "status" }, "ty": { "ty": "OrderStatus", "pkg": "com.example.OrderStatus" } },
        { "matcher": { "declared_type": "tinyint(1)" }, "ty": { "ty": "Boolean" } }
    ]
}"#;

#[test]
fn load_full_config() {
    let config = assert_ok!(Config::from_json(FULL));

    assert!(config.global.comment_annotations);
    assert_eq!(config.global.date_type, DateType::SqlPack);
    assert_eq!(config.entity.column_naming, NamingStrategy::UnderlineToCamel);
    assert_eq!(config.entity.field_prefixes, ["f_"]);
    assert!(config.entity.boolean_column_remove_is_prefix);
    assert_eq!(config.entity.version_column_name.as_deref(), Some("version"));
    assert_none!(config.entity.version_property_name);
    assert_eq!(
        config.entity.logic_delete_property_name.as_deref(),
        Some("deleted")
    );
    assert_eq!(
        config.entity.fill_rules,
        [
            FillRule::column("create_time", FieldFill::Insert),
            FillRule::property("updateTime", FieldFill::InsertUpdate),
        ]
    );
    assert!(config.capital_mode);
    assert_eq!(
        config.type_overrides,
        [
            TypeOverride {
                matcher: TypeMatch::Column("status".to_string()),
                ty: ColumnType::with_pkg("OrderStatus", "com.example.OrderStatus"),
            },
            TypeOverride {
                matcher: TypeMatch::DeclaredType("tinyint(1)".to_string()),
                ty: ColumnType::new("Boolean"),
            },
        ]
    );
}

#[test]
fn empty_config_uses_defaults() {
    let config = assert_ok!(Config::from_json("{}"));

    assert!(!config.global.comment_annotations);
    assert_eq!(config.global.date_type, DateType::TimePack);
    assert_eq!(config.entity.column_naming, NamingStrategy::NoChange);
    assert!(config.entity.fill_rules.is_empty());
    assert!(!config.capital_mode);
    assert!(config.type_overrides.is_empty());
}

#[test]
fn invalid_config_is_reported() {
    let err = assert_err!(
        Config::from_json(r#"{ "entity": { "column_naming": "kebab_case" } }"#),
        "invalid config"
    );
    assert!(err.is_invalid_config());

    let err = assert_err!(Config::from_json("not json"));
    assert!(err.is_invalid_config());
}

#[test]
fn loaded_config_drives_resolution() {
    let cx = Context::new(assert_ok!(Config::from_json(FULL)));

    let field = cx
        .field("f_is_enabled")
        .resolve(&cx)
        .property_name()
        .to_string();
    // `f_is_enabled` has no declared type, so the is-prefix stays
    assert_eq!(field, "isEnabled");

    let status = tablegen_core::Field::builder("status").ty("varchar(8)").build(&cx);
    let resolved = status.resolve(&cx);
    assert_eq!(resolved.property_type(), Some("OrderStatus"));
    assert!(!resolved.is_convert());

    let flag = tablegen_core::Field::builder("f_is_enabled")
        .ty("tinyint(1)")
        .build(&cx);
    assert_eq!(flag.resolve(&cx).property_name(), "enabled");

    let created = tablegen_core::Field::builder("create_time")
        .ty("datetime")
        .comment(r#"set on "insert""#)
        .build(&cx);
    let resolved = created.resolve(&cx);
    assert_eq!(resolved.property_type(), Some("Timestamp"));
    assert_eq!(resolved.fill(), Some(FieldFill::Insert));
    assert_eq!(resolved.comment(), Some(r#"set on \"insert\""#));
}
