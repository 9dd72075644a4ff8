use super::Error;

/// Error when generator configuration cannot be loaded.
///
/// This occurs when the JSON source is malformed, when a key holds a value
/// of the wrong shape, or when an enum value (naming strategy, date type,
/// fill kind) is not recognized.
#[derive(Debug)]
pub(super) struct InvalidConfig {
    source: serde_json::Error,
}

impl std::error::Error for InvalidConfig {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl core::fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid config: {}", self.source)
    }
}

impl Error {
    /// Creates an invalid config error from the underlying JSON error.
    pub fn invalid_config(source: serde_json::Error) -> Error {
        Error::from(super::ErrorKind::InvalidConfig(InvalidConfig { source }))
    }

    /// Returns `true` if this error is an invalid config error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConfig(_))
    }
}
