mod mysql;
mod postgresql;
mod sqlite;

use indexmap::IndexSet;

/// Detects column names that collide with reserved words and escapes them.
pub trait KeywordPolicy {
    /// Returns `true` if the column name is a reserved word.
    fn is_keyword(&self, name: &str) -> bool;

    /// Wraps the column name in the dialect's identifier quotes.
    ///
    /// Must be idempotent: formatting an already formatted name returns it
    /// unchanged.
    fn format_column(&self, name: &str) -> String;
}

/// A keyword set paired with the dialect's identifier quotes.
///
/// Lookups ignore case.
#[derive(Debug, Clone)]
pub struct Keywords {
    open: char,
    close: char,
    words: IndexSet<String>,
}

impl Keywords {
    /// Creates an empty keyword set quoted with `open` and `close`.
    pub fn new(open: char, close: char) -> Self {
        Self {
            open,
            close,
            words: IndexSet::new(),
        }
    }

    /// MySQL reserved words, quoted with backticks.
    pub fn mysql() -> Self {
        Self::new('`', '`').with_words(mysql::WORDS.iter().copied())
    }

    /// PostgreSQL reserved words, quoted with double quotes.
    pub fn postgresql() -> Self {
        Self::new('"', '"').with_words(postgresql::WORDS.iter().copied())
    }

    /// SQLite keywords, quoted with double quotes.
    pub fn sqlite() -> Self {
        Self::new('"', '"').with_words(sqlite::WORDS.iter().copied())
    }

    /// Adds words to the set.
    pub fn with_words<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|word| word.as_ref().to_ascii_uppercase()));
        self
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    fn is_quoted(&self, name: &str) -> bool {
        let mut chars = name.chars();
        name.chars().count() >= 2
            && chars.next() == Some(self.open)
            && chars.next_back() == Some(self.close)
    }
}

impl KeywordPolicy for Keywords {
    fn is_keyword(&self, name: &str) -> bool {
        self.words.contains(&name.to_ascii_uppercase())
    }

    fn format_column(&self, name: &str) -> String {
        if self.is_quoted(name) {
            return name.to_string();
        }

        format!("{}{}{}", self.open, name, self.close)
    }
}
