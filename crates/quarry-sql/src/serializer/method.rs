use super::{Formatter, ToSql};

use quarry_core::{
    stmt::{ExprMethodCall, Method},
    Error, Result,
};

impl ToSql for &ExprMethodCall {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let Some((subject, operand)) = self.subject_and_operand() else {
            return Err(Error::unsupported_expression_kind(format!(
                "`{}` takes either a receiver and one argument or two arguments, got {} argument(s) {} a receiver",
                self.method,
                self.args.len(),
                if self.target.is_some() { "and" } else { "without" },
            )));
        };

        match self.method {
            Method::Contains => {
                fmt!(f, "(" subject " IN (" operand "))");
            }
            Method::StartsWith => {
                let pattern = f.render(operand)?;
                fmt!(f, "(" subject " LIKE '" unquote(&pattern) "%')");
            }
            Method::EndsWith => {
                let pattern = f.render(operand)?;
                fmt!(f, "(" subject " LIKE '%" unquote(&pattern) "')");
            }
        }

        Ok(())
    }
}

/// Strips the enclosing quote pair of a rendered literal, if any, so it can
/// be re-wrapped in a `LIKE` pattern.
fn unquote(rendered: &str) -> &str {
    rendered
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(rendered)
}
