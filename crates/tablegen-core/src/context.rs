use crate::{
    field::Field,
    keyword::KeywordPolicy,
    naming::{DefaultNameConvert, NameConvert},
    ty::{DefaultTypeConvert, TypeConvert},
    Config,
};
use std::fmt;

/// Configuration and policies shared by every field of a generation run.
///
/// A context is read-only once built, which keeps memoized field state
/// consistent for the whole run.
pub struct Context {
    config: Config,
    name_convert: Box<dyn NameConvert>,
    type_convert: Box<dyn TypeConvert>,
    keywords: Option<Box<dyn KeywordPolicy>>,
}

pub struct ContextBuilder {
    config: Config,
    name_convert: Option<Box<dyn NameConvert>>,
    type_convert: Option<Box<dyn TypeConvert>>,
    keywords: Option<Box<dyn KeywordPolicy>>,
}

impl Context {
    /// Creates a context with the default naming and type policies and no
    /// keyword escaping.
    pub fn new(config: Config) -> Self {
        Self::builder(config).build()
    }

    pub fn builder(config: Config) -> ContextBuilder {
        ContextBuilder {
            config,
            name_convert: None,
            type_convert: None,
            keywords: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn name_convert(&self) -> &dyn NameConvert {
        &*self.name_convert
    }

    pub fn type_convert(&self) -> &dyn TypeConvert {
        &*self.type_convert
    }

    pub fn keywords(&self) -> Option<&dyn KeywordPolicy> {
        self.keywords.as_deref()
    }

    /// Creates a field for the given raw column name, see [`Field::new`].
    pub fn field(&self, name: impl Into<String>) -> Field {
        Field::new(self, name)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("keywords", &self.keywords.is_some())
            .finish_non_exhaustive()
    }
}

impl ContextBuilder {
    pub fn name_convert(mut self, name_convert: impl NameConvert + 'static) -> Self {
        self.name_convert = Some(Box::new(name_convert));
        self
    }

    pub fn type_convert(mut self, type_convert: impl TypeConvert + 'static) -> Self {
        self.type_convert = Some(Box::new(type_convert));
        self
    }

    pub fn keywords(mut self, keywords: impl KeywordPolicy + 'static) -> Self {
        self.keywords = Some(Box::new(keywords));
        self
    }

    pub fn build(self) -> Context {
        let name_convert = self.name_convert.unwrap_or_else(|| {
            Box::new(DefaultNameConvert::with_field_prefixes(
                self.config.entity.field_prefixes.iter().cloned(),
            ))
        });

        Context {
            name_convert,
            type_convert: self
                .type_convert
                .unwrap_or_else(|| Box::new(DefaultTypeConvert)),
            keywords: self.keywords,
            config: self.config,
        }
    }
}
