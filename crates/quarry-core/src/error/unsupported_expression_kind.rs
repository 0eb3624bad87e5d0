use super::Error;

/// Error when a predicate contains a node the compiler cannot translate.
///
/// This occurs when:
/// - A constant holds a value kind with no literal form (lists, bytes)
/// - A method call has neither the instance shape (receiver + one
///   argument) nor the extension shape (two arguments)
///
/// The predicate was built by the caller; there is nothing to recover
/// locally.
#[derive(Debug)]
pub(super) struct UnsupportedExpressionKind {
    message: Box<str>,
}

impl std::error::Error for UnsupportedExpressionKind {}

impl core::fmt::Display for UnsupportedExpressionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported expression: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported expression kind error.
    pub fn unsupported_expression_kind(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedExpressionKind(
            UnsupportedExpressionKind {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported expression kind error.
    pub fn is_unsupported_expression_kind(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedExpressionKind(_))
    }
}
