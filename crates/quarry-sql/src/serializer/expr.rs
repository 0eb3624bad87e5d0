use super::{Comma, Formatter, ToSql};

use quarry_core::{stmt, Error, Result};

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        use stmt::Expr::*;

        match self {
            BinaryOp(expr) => {
                let Some(op) = expr.op.as_sql() else {
                    return Err(Error::unsupported_operator(
                        expr.op.to_string(),
                        "use an explicit ISNULL/COALESCE function",
                    ));
                };

                // Comparison operators never match NULL
                if is_null_literal(&expr.rhs) {
                    match expr.op {
                        stmt::BinaryOp::Eq => {
                            fmt!(f, expr.lhs " IS NULL");
                            return Ok(());
                        }
                        stmt::BinaryOp::Ne => {
                            fmt!(f, expr.lhs " IS NOT NULL");
                            return Ok(());
                        }
                        _ => {}
                    }
                }

                fmt!(f, expr.lhs " " op " " expr.rhs);
            }
            Field(expr) => {
                let mapping = f.mapping;
                let Some(field) = mapping.field(&expr.name) else {
                    return Err(Error::unknown_field(&mapping.name, &expr.name));
                };

                fmt!(f, field.column_name());
            }
            List(expr) => {
                fmt!(f, Comma(&expr.items));
            }
            MethodCall(expr) => {
                fmt!(f, expr);
            }
            Unary(expr) => {
                fmt!(f, expr.expr);
            }
            Value(value) => {
                fmt!(f, value);
            }
        }

        Ok(())
    }
}

/// True if the expression renders as the `null` keyword.
fn is_null_literal(expr: &stmt::Expr) -> bool {
    match expr {
        stmt::Expr::Value(value) => value.is_null(),
        stmt::Expr::Unary(unary) => is_null_literal(&unary.expr),
        _ => false,
    }
}
