use serde::Deserialize;

/// Settings shared by all generated artifacts.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Comments are emitted inside annotation string literals (API
    /// documentation annotations), so double quotes in column comments are
    /// escaped when fields are built.
    pub comment_annotations: bool,

    /// Family of date/time types produced by the default type table
    pub date_type: DateType,
}

/// Which family of date/time types to map temporal columns to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateType {
    /// `java.time` types (`LocalDate`, `LocalDateTime`, ...)
    #[default]
    TimePack,

    /// `java.sql` types (`Date`, `Time`, `Timestamp`)
    SqlPack,

    /// `java.util.Date` for every temporal column
    OnlyDate,
}

impl GlobalConfig {
    /// Create a new GlobalConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comment_annotations(mut self, enabled: bool) -> Self {
        self.comment_annotations = enabled;
        self
    }

    pub fn date_type(mut self, date_type: DateType) -> Self {
        self.date_type = date_type;
        self
    }
}
