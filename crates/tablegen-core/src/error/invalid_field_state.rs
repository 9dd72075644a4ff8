use super::Error;

/// Error when a field is mutated after derived state has been memoized.
///
/// Rebinding the column name, or binding a property explicitly, once the
/// property name has been resolved would leave the field inconsistent, so the
/// operation is rejected instead.
#[derive(Debug)]
pub(super) struct InvalidFieldState {
    column: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidFieldState {}

impl core::fmt::Display for InvalidFieldState {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid field state for column `{}`: {}",
            self.column, self.message
        )
    }
}

impl Error {
    /// Creates an invalid field state error for the given raw column name.
    pub fn invalid_field_state(column: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidFieldState(InvalidFieldState {
            column: column.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid field state error.
    pub fn is_invalid_field_state(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidFieldState(_))
    }
}
