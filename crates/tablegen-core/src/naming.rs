use serde::Deserialize;
use std_util::str;

/// Convention used to derive property names from column names.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStrategy {
    /// The property keeps the column name as is
    #[default]
    NoChange,

    /// `user_name` becomes `userName`
    UnderlineToCamel,
}

/// Converts a raw column name into a candidate property name.
///
/// Implementations must be pure: the same input always yields the same
/// output. Closures of the form `Fn(&str, NamingStrategy) -> String` implement
/// this trait.
pub trait NameConvert {
    fn convert(&self, column: &str, naming: NamingStrategy) -> String;
}

impl<F> NameConvert for F
where
    F: Fn(&str, NamingStrategy) -> String,
{
    fn convert(&self, column: &str, naming: NamingStrategy) -> String {
        self(column, naming)
    }
}

/// Strips configured field prefixes, then applies the naming strategy.
#[derive(Debug, Default, Clone)]
pub struct DefaultNameConvert {
    field_prefixes: Vec<String>,
}

impl DefaultNameConvert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_prefixes<I>(prefixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            field_prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    fn strip_prefix<'a>(&self, column: &'a str) -> &'a str {
        self.field_prefixes
            .iter()
            .filter(|prefix| !prefix.is_empty())
            .find_map(|prefix| str::strip_prefix_ignore_case(column, prefix))
            .unwrap_or(column)
    }
}

impl NameConvert for DefaultNameConvert {
    fn convert(&self, column: &str, naming: NamingStrategy) -> String {
        let column = self.strip_prefix(column);

        match naming {
            NamingStrategy::NoChange => column.to_string(),
            NamingStrategy::UnderlineToCamel => str::camel_case(column),
        }
    }
}

/// Returns the property name as it appears in accessor names, following the
/// JavaBeans rules: `id` -> `Id`, `userName` -> `UserName`, but `uRL` stays
/// `uRL` because its second character is already upper case.
pub fn capital_name(property: &str) -> String {
    let mut chars = property.chars();

    match (chars.next(), chars.next()) {
        (Some(first), None) => first.to_uppercase().collect(),
        (Some(_), Some(second)) if second.is_lowercase() => str::upper_first(property),
        _ => property.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capital_name_rules() {
        assert_eq!(capital_name("id"), "Id");
        assert_eq!(capital_name("userName"), "UserName");
        assert_eq!(capital_name("uRL"), "uRL");
        assert_eq!(capital_name("URLPath"), "URLPath");
        assert_eq!(capital_name("a"), "A");
        assert_eq!(capital_name(""), "");
    }

    #[test]
    fn field_prefix_is_removed_ignoring_case() {
        let convert = DefaultNameConvert::with_field_prefixes(["c_", "t_"]);

        assert_eq!(
            convert.convert("T_USER_NAME", NamingStrategy::UnderlineToCamel),
            "userName"
        );
        assert_eq!(convert.convert("c_age", NamingStrategy::NoChange), "age");
        assert_eq!(convert.convert("age", NamingStrategy::NoChange), "age");
    }
}
