use super::*;

use chrono::{NaiveDate, NaiveDateTime};

/// A boolean filter over the fields of one entity.
///
/// The set of node kinds is closed; every consumer matches on it
/// exhaustively. Trees are built with the constructors on this type (see
/// the `expr_*` modules) and are never mutated once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Binary expression: logical, comparison, or arithmetic
    BinaryOp(ExprBinaryOp),

    /// References a field of the entity by its source name
    Field(ExprField),

    /// A list literal, rendered as a comma separated sequence
    List(ExprList),

    /// `Contains`, `StartsWith` or `EndsWith`
    MethodCall(ExprMethodCall),

    /// A pass-through wrapper, such as a type conversion
    Unary(ExprUnary),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Returns true if the expression is the null constant
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&Expr> for Expr {
    fn from(value: &Expr) -> Self {
        value.clone()
    }
}

macro_rules! impl_from_value {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Self::Value(value.into())
                }
            }
        )*
    };
}

impl_from_value!(bool, char, f64, i32, i64, &str, String, NaiveDate, NaiveDateTime);
