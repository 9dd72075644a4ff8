use heck::ToLowerCamelCase;

pub fn camel_case(src: &str) -> String {
    src.to_lower_camel_case()
}

/// Returns `true` if the string is empty or only contains whitespace.
pub fn is_blank(src: &str) -> bool {
    src.trim().is_empty()
}

pub fn contains_upper_case(src: &str) -> bool {
    src.chars().any(char::is_uppercase)
}

/// Compares two strings ignoring case, folding non-ASCII letters as well.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Strips `prefix` from the start of `src`, comparing characters ignoring
/// case.
pub fn strip_prefix_ignore_case<'a>(src: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = src.char_indices();

    for expect in prefix.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expect.to_lowercase()) {
            return None;
        }
    }

    Some(chars.next().map_or("", |(i, _)| &src[i..]))
}

/// Returns `true` for names written entirely in upper case, such as
/// `USER_NAME` or `ADDRESS_2`. Digits, `_` and `/` are allowed.
pub fn is_capital_mode(src: &str) -> bool {
    !src.is_empty()
        && src
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '/')
}

/// Drops the first `index` characters and lower-cases the first remaining
/// one: `remove_prefix_to_lower("isDeleted", 2) == "deleted"`.
///
/// Returns `None` when nothing is left after the prefix.
pub fn remove_prefix_to_lower(src: &str, index: usize) -> Option<String> {
    let mut rest = src.chars().skip(index);
    let first = rest.next()?;
    Some(first.to_lowercase().chain(rest).collect())
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn upper_first(src: &str) -> String {
    let mut chars = src.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_from_snake_and_pascal() {
        assert_eq!(camel_case("user_name"), "userName");
        assert_eq!(camel_case("UserName"), "userName");
        assert_eq!(camel_case("USER_NAME"), "userName");
        assert_eq!(camel_case("order"), "order");
    }

    #[test]
    fn capital_mode() {
        assert!(is_capital_mode("USER_NAME"));
        assert!(is_capital_mode("ADDRESS_2"));
        assert!(!is_capital_mode("User_Name"));
        assert!(!is_capital_mode(""));
    }

    #[test]
    fn ignore_case_folds_unicode() {
        assert!(eq_ignore_case("VERSION", "version"));
        assert!(eq_ignore_case("ВЕРСИЯ", "версия"));
        assert!(!eq_ignore_case("Straße", "STRASSE"));
        assert!(!eq_ignore_case("дата", "дат"));
    }

    #[test]
    fn strip_prefix_ignoring_case() {
        assert_eq!(strip_prefix_ignore_case("T_NAME", "t_"), Some("NAME"));
        assert_eq!(strip_prefix_ignore_case("ПР_имя", "пр_"), Some("имя"));
        assert_eq!(strip_prefix_ignore_case("t_", "T_"), Some(""));
        assert_eq!(strip_prefix_ignore_case("name", "t_"), None);
        assert_eq!(strip_prefix_ignore_case("t", "t_"), None);
    }

    #[test]
    fn remove_prefix() {
        assert_eq!(remove_prefix_to_lower("isDeleted", 2).as_deref(), Some("deleted"));
        assert_eq!(remove_prefix_to_lower("isX", 2).as_deref(), Some("x"));
        assert_eq!(remove_prefix_to_lower("is", 2), None);
    }

    #[test]
    fn upper_first_char() {
        assert_eq!(upper_first("id"), "Id");
        assert_eq!(upper_first(""), "");
    }
}
