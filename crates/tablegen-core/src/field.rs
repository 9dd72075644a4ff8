mod builder;
pub use builder::{ColumnMeta, FieldBuilder};

mod property;
pub use property::Property;

mod resolved;
pub use resolved::ResolvedField;

use crate::{
    config::EntityConfig,
    fill::{FieldFill, FillRule},
    naming::{self, NameConvert},
    ty::{ColumnType, TypeConvert},
    Config, Context, Error, Result,
};
use indexmap::IndexMap;
use std::{borrow::Cow, cell::OnceCell};
use std_util::str;

/// A table column and the field metadata derived from it.
///
/// The raw identity (column name, declared type, flags) is bound when the
/// field is built. The property name, resolved type and fill strategy are
/// derived lazily from the policies of a [`Context`] and memoized: once
/// computed they never change, even if asked again with different policies.
///
/// Resolution is best-effort. Nothing derived here fails; attributes that
/// cannot be derived read as `None` or `false`.
#[derive(Debug, Clone)]
pub struct Field {
    /// Column name as reported by the data source
    name: String,

    /// Column name after keyword escaping
    column_name: String,

    /// True when `column_name` differs from `name`
    keyword: bool,

    /// Declared SQL type
    ty: String,

    nullable: bool,

    comment: Option<String>,

    primary_key: bool,

    /// Only meaningful for primary key columns
    auto_increment: bool,

    /// Pass-through values for templates
    custom: IndexMap<String, serde_json::Value>,

    property: OnceCell<Property>,

    /// Fill strategy fixed when the field was built
    preset_fill: Option<FieldFill>,

    /// Fill strategy matched from fill rules
    fill: OnceCell<FieldFill>,
}

impl Field {
    /// Creates a field for the raw column name, applying the context's
    /// keyword policy.
    pub fn new(cx: &Context, name: impl Into<String>) -> Field {
        Field::builder(name).build(cx)
    }

    pub fn builder(name: impl Into<String>) -> FieldBuilder {
        FieldBuilder::new(name)
    }

    /// Gets the raw column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the column name with keyword escaping applied.
    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    /// Returns `true` if the column name is a reserved word and was escaped.
    pub fn is_keyword(&self) -> bool {
        self.keyword
    }

    /// Gets the declared SQL type.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }

    pub fn custom(&self) -> &IndexMap<String, serde_json::Value> {
        &self.custom
    }

    /// Marks the column as (part of) the primary key. The last call wins.
    pub fn mark_primary_key(&mut self, auto_increment: bool) -> &mut Self {
        self.primary_key = true;
        self.auto_increment = auto_increment;
        self
    }

    /// Rebinds the raw column name, re-running the keyword policy.
    ///
    /// Fails once the property name has been resolved or a fill rule has
    /// matched, as those were derived from the previous name. A fill strategy
    /// fixed on the builder does not depend on the name and is kept.
    pub fn rebind_column(&mut self, cx: &Context, name: impl Into<String>) -> Result<()> {
        let name = name.into();

        if self.property.get().is_some() || self.fill.get().is_some() {
            return Err(Error::invalid_field_state(
                &self.name,
                format!("cannot rebind to `{name}` after derived state was resolved"),
            ));
        }

        let (column_name, keyword) = escape_column(cx, &name);
        self.name = name;
        self.column_name = column_name;
        self.keyword = keyword;
        Ok(())
    }

    /// Gets the resolved property, if resolution already happened.
    pub fn property(&self) -> Option<&Property> {
        self.property.get()
    }

    /// Resolves the property name with the context's policies.
    pub fn property_name(&self, cx: &Context) -> &str {
        self.resolve_property_name(cx.name_convert(), cx.type_convert(), cx.config())
    }

    /// Resolves the property name and column type, or returns the memoized
    /// property name.
    ///
    /// A type resolver error is logged and the field continues without a
    /// resolved type.
    pub fn resolve_property_name<N, T>(&self, naming: &N, types: &T, config: &Config) -> &str
    where
        N: NameConvert + ?Sized,
        T: TypeConvert + ?Sized,
    {
        self.resolve_property(naming, types, config).name()
    }

    fn resolve_property<N, T>(&self, naming: &N, types: &T, config: &Config) -> &Property
    where
        N: NameConvert + ?Sized,
        T: TypeConvert + ?Sized,
    {
        if let Some(property) = self.property.get() {
            return property;
        }

        let column_type = match types.convert(self, config) {
            Ok(column_type) => Some(column_type),
            Err(err) => {
                tracing::warn!(column = %self.name, ty = %self.ty, error = %err, "no type derived for column");
                None
            }
        };

        let candidate = naming.convert(&self.name, config.entity.column_naming);
        let property = Property::derive(self, candidate, column_type, config);

        tracing::debug!(
            column = %self.name,
            property = %property.name(),
            convert = property.is_convert(),
            "resolved property"
        );

        self.property.get_or_init(|| property)
    }

    /// Binds an externally computed property name and type, applying the same
    /// boolean-prefix and explicit-mapping rules as resolution.
    ///
    /// Fails if the property was already resolved or bound.
    pub fn bind_property(
        &self,
        candidate: impl Into<String>,
        column_type: Option<ColumnType>,
        config: &Config,
    ) -> Result<()> {
        let property = Property::derive(self, candidate.into(), column_type, config);

        self.property.set(property).map_err(|_| {
            Error::invalid_field_state(&self.name, "property name was already resolved")
        })
    }

    /// Gets the resolved column type, if resolution already happened and a
    /// type could be derived.
    pub fn column_type(&self) -> Option<&ColumnType> {
        self.property().and_then(Property::column_type)
    }

    pub fn property_type(&self) -> Option<&str> {
        self.property().and_then(Property::property_type)
    }

    /// Returns `true` if generated code must declare the column mapping
    /// explicitly. Always `false` before the property is resolved.
    pub fn is_convert(&self) -> bool {
        self.property().is_some_and(Property::is_convert)
    }

    /// Accessor form of the resolved property name, see
    /// [`naming::capital_name`].
    pub fn capital_name(&self) -> Option<String> {
        self.property()
            .map(|property| naming::capital_name(property.name()))
    }

    /// Returns `true` if this is the optimistic lock field.
    ///
    /// The column signal is always checked. The property signal only counts
    /// once the property name is resolved, through [`Field::property_name`]
    /// or [`Field::resolve`]; before that only the column can match.
    pub fn is_version_field(&self, entity: &EntityConfig) -> bool {
        let by_property = configured(&entity.version_property_name)
            .zip(self.property())
            .is_some_and(|(name, property)| property.name() == name);

        let by_column = configured(&entity.version_column_name)
            .is_some_and(|name| str::eq_ignore_case(&self.name, name));

        by_property || by_column
    }

    /// Returns `true` if this is the logical delete field.
    ///
    /// Like [`Field::is_version_field`], the property signal needs a resolved
    /// property name.
    pub fn is_logic_delete_field(&self, entity: &EntityConfig) -> bool {
        let by_property = configured(&entity.logic_delete_property_name)
            .zip(self.property())
            .is_some_and(|(name, property)| property.name() == name);

        let by_column = configured(&entity.logic_delete_column_name)
            .is_some_and(|name| str::eq_ignore_case(&self.name, name));

        by_property || by_column
    }

    /// Gets the fill strategy fixed on the builder or cached from the rules.
    pub fn fill(&self) -> Option<FieldFill> {
        self.preset_fill.or_else(|| self.fill.get().copied())
    }

    /// Matches the field against the fill rules, in order.
    ///
    /// A fill strategy fixed on the builder wins and the rules are not
    /// consulted. Otherwise the first match is cached and returned by every
    /// later call. Property rules only match once the property name is
    /// resolved. When nothing matches, nothing is cached.
    pub fn resolve_fill(&self, rules: &[FillRule]) -> Option<FieldFill> {
        if let Some(fill) = self.fill() {
            return Some(fill);
        }

        let property = self.property().map(Property::name);
        let rule = rules
            .iter()
            .find(|rule| rule.matches(&self.name, property))?;

        tracing::trace!(column = %self.name, rule = %rule.name, fill = %rule.fill, "matched fill rule");

        Some(*self.fill.get_or_init(|| rule.fill))
    }

    /// Column name to embed in a generated annotation string literal.
    ///
    /// Keywords escaped with double quotes are re-quoted with `\"` so they
    /// survive inside the literal.
    pub fn annotation_column_name(&self) -> Cow<'_, str> {
        if self.keyword && self.column_name.starts_with('"') {
            Cow::Owned(format!("\\\"{}\\\"", self.name))
        } else {
            Cow::Borrowed(&self.column_name)
        }
    }

    /// Resolves everything derivable for this field and returns a read-only
    /// view of it.
    pub fn resolve(&self, cx: &Context) -> ResolvedField<'_> {
        let config = cx.config();
        let property = self.resolve_property(cx.name_convert(), cx.type_convert(), config);
        let fill = self.resolve_fill(&config.entity.fill_rules);

        ResolvedField::new(self, property, fill, &config.entity)
    }
}

fn configured(name: &Option<String>) -> Option<&str> {
    name.as_deref().filter(|name| !str::is_blank(name))
}

fn escape_column(cx: &Context, name: &str) -> (String, bool) {
    let Some(keywords) = cx.keywords() else {
        return (name.to_string(), false);
    };

    if !keywords.is_keyword(name) {
        return (name.to_string(), false);
    }

    let escaped = keywords.format_column(name);
    let keyword = escaped != name;

    if keyword {
        tracing::debug!(column = name, escaped = %escaped, "escaped reserved column name");
    }

    (escaped, keyword)
}
