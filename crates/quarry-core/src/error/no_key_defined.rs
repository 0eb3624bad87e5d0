use super::Error;

/// Error when an UPDATE or DELETE is requested for an entity without keys.
///
/// Without a key the WHERE clause would be empty and the statement would
/// touch every row, so the statement is refused before any text is built.
#[derive(Debug)]
pub(super) struct NoKeyDefined {
    entity: Box<str>,
}

impl std::error::Error for NoKeyDefined {}

impl core::fmt::Display for NoKeyDefined {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no key defined for `{}`; refusing to build an unrestricted WHERE clause",
            self.entity
        )
    }
}

impl Error {
    /// Creates a no-key-defined error for the named entity.
    pub fn no_key_defined(entity: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NoKeyDefined(NoKeyDefined {
            entity: entity.into().into(),
        }))
    }

    /// Returns `true` if this error is a no-key-defined error.
    pub fn is_no_key_defined(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoKeyDefined(_))
    }
}
