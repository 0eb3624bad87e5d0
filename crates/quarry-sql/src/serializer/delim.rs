use super::{Formatter, ToSql};

use quarry_core::Result;

/// Comma delimited, without padding.
///
/// The output is substituted directly inside `IN (...)`, so there is no
/// trailing separator.
pub(super) struct Comma<L>(pub(super) L);

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = ",";
        }
        Ok(())
    }
}
