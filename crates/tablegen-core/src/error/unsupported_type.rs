use super::Error;

/// Error when a declared SQL type has no target-language mapping.
///
/// Raised by type resolvers. Field resolution logs it and continues with no
/// resolved type.
#[derive(Debug)]
pub(super) struct UnsupportedType {
    declared: Box<str>,
}

impl std::error::Error for UnsupportedType {}

impl core::fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.declared.is_empty() {
            f.write_str("unsupported type: <empty>")
        } else {
            write!(f, "unsupported type: {}", self.declared)
        }
    }
}

impl Error {
    /// Creates an unsupported type error for the declared SQL type.
    pub fn unsupported_type(declared: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedType {
            declared: declared.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}
