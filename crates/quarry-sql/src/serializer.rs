#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

// Fragment serializers
mod expr;
mod method;
mod value;

use quarry_core::{schema::EntityMapping, stmt::Expr, Result};

/// Compile a predicate into a `WHERE` clause fragment.
///
/// Field references are resolved to column names through `mapping` and
/// constants are inlined as literals. Sub-expressions are never wrapped in
/// parentheses beyond those `IN` and `LIKE` add, so the tree's nesting has to
/// encode the intended grouping.
pub fn compile(expr: &Expr, mapping: &EntityMapping) -> Result<String> {
    let mut ret = String::new();

    let mut fmt = Formatter {
        mapping,
        dst: &mut ret,
    };

    expr.to_sql(&mut fmt)?;

    log::trace!("compiled predicate for `{}`: {ret}", mapping.name);
    Ok(ret)
}

struct Formatter<'a> {
    /// Mapping used to resolve field references
    mapping: &'a EntityMapping,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Formatter<'_> {
    /// Serialize a fragment into a fresh string instead of `dst`.
    fn render(&self, fragment: impl ToSql) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            mapping: self.mapping,
            dst: &mut ret,
        };

        fragment.to_sql(&mut fmt)?;
        Ok(ret)
    }
}
