use super::Error;

/// Error when a binary operator has no single-operator SQL equivalent.
///
/// Currently this is only the null-coalescing operator; callers should use
/// an explicit null-handling function instead.
#[derive(Debug)]
pub(super) struct UnsupportedOperator {
    operator: Box<str>,
    hint: Box<str>,
}

impl std::error::Error for UnsupportedOperator {}

impl core::fmt::Display for UnsupportedOperator {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported operator `{}`: {}", self.operator, self.hint)
    }
}

impl Error {
    /// Creates an unsupported operator error.
    pub fn unsupported_operator(operator: impl Into<String>, hint: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedOperator(UnsupportedOperator {
            operator: operator.into().into(),
            hint: hint.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported operator error.
    pub fn is_unsupported_operator(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedOperator(_))
    }
}
