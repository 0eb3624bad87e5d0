use crate::stmt::GeneratedStatement;

/// A statement plus the shape of result the caller expects back.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Run the statement and report the number of affected rows.
    Execute(GeneratedStatement),

    /// Run the statement and return every resulting row.
    Query(GeneratedStatement),

    /// Run the statement and return the first column of the first row.
    Scalar(GeneratedStatement),
}

impl Operation {
    pub fn statement(&self) -> &GeneratedStatement {
        match self {
            Self::Execute(stmt) | Self::Query(stmt) | Self::Scalar(stmt) => stmt,
        }
    }

    pub fn into_statement(self) -> GeneratedStatement {
        match self {
            Self::Execute(stmt) | Self::Query(stmt) | Self::Scalar(stmt) => stmt,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Execute(_) => "execute",
            Self::Query(_) => "query",
            Self::Scalar(_) => "scalar",
        }
    }

    pub fn is_execute(&self) -> bool {
        matches!(self, Self::Execute(_))
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}
