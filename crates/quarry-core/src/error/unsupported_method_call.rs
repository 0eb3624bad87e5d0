use super::Error;

/// Error when a method call names something other than `Contains`,
/// `StartsWith` or `EndsWith`.
#[derive(Debug)]
pub(super) struct UnsupportedMethodCall {
    method: Box<str>,
}

impl std::error::Error for UnsupportedMethodCall {}

impl core::fmt::Display for UnsupportedMethodCall {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported method call `{}`; expected one of Contains, StartsWith, EndsWith",
            self.method
        )
    }
}

impl Error {
    /// Creates an unsupported method call error.
    pub fn unsupported_method_call(method: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedMethodCall(
            UnsupportedMethodCall {
                method: method.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported method call error.
    pub fn is_unsupported_method_call(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedMethodCall(_))
    }
}
