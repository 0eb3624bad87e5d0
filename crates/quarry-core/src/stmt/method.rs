use crate::Error;

use std::{fmt, str::FromStr};

/// String and collection matching methods a predicate may call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    /// Collection membership, rendered as `IN (...)`
    Contains,

    /// Prefix match, rendered as `LIKE 'x%'`
    StartsWith,

    /// Suffix match, rendered as `LIKE '%x'`
    EndsWith,
}

impl Method {
    pub fn name(self) -> &'static str {
        match self {
            Self::Contains => "Contains",
            Self::StartsWith => "StartsWith",
            Self::EndsWith => "EndsWith",
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Contains" => Ok(Self::Contains),
            "StartsWith" => Ok(Self::StartsWith),
            "EndsWith" => Ok(Self::EndsWith),
            _ => Err(Error::unsupported_method_call(s)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
