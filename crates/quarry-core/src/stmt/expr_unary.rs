use super::Expr;

/// Wraps an expression without changing its rendering. Callers use it to
/// mark conversions that are meaningful in the host program only.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprUnary {
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn unary(expr: impl Into<Self>) -> Self {
        ExprUnary {
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprUnary> for Expr {
    fn from(value: ExprUnary) -> Self {
        Self::Unary(value)
    }
}
