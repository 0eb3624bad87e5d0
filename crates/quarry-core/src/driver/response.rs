use crate::{
    stmt::{Row, Value},
    Error, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// A single value, `Value::Null` when the query produced no row
    Scalar(Value),

    /// Operation result, one entry per row
    Values(Vec<Row>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn scalar(value: impl Into<Value>) -> Self {
        Self {
            rows: Rows::Scalar(value.into()),
        }
    }

    pub fn values(rows: impl Into<Vec<Row>>) -> Self {
        Self {
            rows: Rows::Values(rows.into()),
        }
    }

    pub fn empty_values() -> Self {
        Self::values(vec![])
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Self::Count(_) => "Count",
            Self::Scalar(_) => "Scalar",
            Self::Values(_) => "Values",
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Self::Count(count) => Ok(count),
            _ => Err(self.unexpected("Count")),
        }
    }

    pub fn into_scalar(self) -> Result<Value> {
        match self {
            Self::Scalar(value) => Ok(value),
            _ => Err(self.unexpected("Scalar")),
        }
    }

    pub fn into_values(self) -> Result<Vec<Row>> {
        match self {
            Self::Values(rows) => Ok(rows),
            _ => Err(self.unexpected("Values")),
        }
    }

    fn unexpected(&self, expected: &str) -> Error {
        Error::invalid_result(format!("expected {expected}, got {}", self.kind_name()))
    }
}
