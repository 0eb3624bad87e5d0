use super::{Formatter, ToSql};

use quarry_core::{stmt, Error, Result};

use std::fmt::Write;

impl ToSql for &stmt::Value {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        use stmt::Value::*;

        match self {
            Null => fmt!(f, "null"),
            Bool(true) => fmt!(f, "true"),
            Bool(false) => fmt!(f, "false"),
            I32(v) => write_display(f, v),
            I64(v) => write_display(f, v),
            F64(v) if v.is_finite() => write_display(f, v),
            F64(v) => {
                return Err(Error::unsupported_expression_kind(format!(
                    "non-finite float `{v}` has no literal form"
                )));
            }
            String(v) => fmt!(f, Quoted(v)),
            Char(v) => {
                let mut buf = [0; 4];
                fmt!(f, Quoted(v.encode_utf8(&mut buf)));
            }
            Date(v) => {
                let v = v.format("%Y-%m-%d").to_string();
                fmt!(f, Quoted(&v));
            }
            DateTime(v) => {
                let v = v.format("%Y-%m-%d %H:%M:%S%.f").to_string();
                fmt!(f, Quoted(&v));
            }
            Bytes(_) | List(_) => {
                return Err(Error::unsupported_expression_kind(format!(
                    "{} values cannot be used as predicate constants",
                    self.kind_name()
                )));
            }
        }

        Ok(())
    }
}

fn write_display(f: &mut Formatter<'_>, value: impl std::fmt::Display) {
    // Writing to a `String` never fails
    let _ = write!(f.dst, "{value}");
}

/// A single-quoted string literal with embedded quotes doubled.
struct Quoted<'a>(&'a str);

impl ToSql for Quoted<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push('\'');
        for ch in self.0.chars() {
            if ch == '\'' {
                f.dst.push('\'');
            }
            f.dst.push(ch);
        }
        f.dst.push('\'');
        Ok(())
    }
}
