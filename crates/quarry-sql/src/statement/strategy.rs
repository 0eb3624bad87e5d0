use super::{Assignment, DeleteFilter, DeleteParts, InsertParts, SelectParts, UpdateParts};

use std::fmt::Debug;

/// Renders an `INSERT` for one record.
pub trait InsertStrategy: Debug + Send + Sync + 'static {
    fn render(&self, parts: &InsertParts<'_>) -> String;
}

/// Renders an `UPDATE` for one record.
pub trait UpdateStrategy: Debug + Send + Sync + 'static {
    fn render(&self, parts: &UpdateParts<'_>) -> String;
}

/// Renders a `DELETE`, either for one record or for a predicate.
pub trait DeleteStrategy: Debug + Send + Sync + 'static {
    fn render(&self, parts: &DeleteParts<'_>) -> String;
}

/// Renders a `SELECT`.
pub trait SelectStrategy: Debug + Send + Sync + 'static {
    fn render(&self, parts: &SelectParts<'_>) -> String;
}

/// The default rendering of every verb.
///
/// ```text
/// INSERT ORT_Test ([Name], Age) VALUES (@Name, @Age)
/// UPDATE ORT_Test SET [Name] = @Name WHERE MyProperty = @MyProperty
/// DELETE FROM ORT_Test WHERE MyProperty = @MyProperty
/// SELECT * FROM ORT_Test WHERE 0=0
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Standard;

impl InsertStrategy for Standard {
    fn render(&self, parts: &InsertParts<'_>) -> String {
        if parts.columns.is_empty() {
            return format!("INSERT {} DEFAULT VALUES", parts.table);
        }

        let columns = join(parts.columns.iter().map(|a| a.column.as_str()), ", ");
        let values = join(parts.columns.iter().map(|a| a.placeholder.as_str()), ", ");

        format!("INSERT {} ({columns}) VALUES ({values})", parts.table)
    }
}

impl UpdateStrategy for Standard {
    fn render(&self, parts: &UpdateParts<'_>) -> String {
        format!(
            "UPDATE {} SET {} WHERE {}",
            parts.table,
            equalities(&parts.set, ", "),
            equalities(&parts.keys, " AND "),
        )
    }
}

impl DeleteStrategy for Standard {
    fn render(&self, parts: &DeleteParts<'_>) -> String {
        match &parts.filter {
            DeleteFilter::Keys(keys) => format!(
                "DELETE FROM {} WHERE {}",
                parts.table,
                equalities(keys, " AND ")
            ),
            DeleteFilter::Predicate(predicate) => {
                format!("DELETE FROM {} WHERE {predicate}", parts.table)
            }
        }
    }
}

impl SelectStrategy for Standard {
    fn render(&self, parts: &SelectParts<'_>) -> String {
        let predicate = parts.predicate.as_deref().unwrap_or("0=0");
        format!("SELECT * FROM {} WHERE {predicate}", parts.table)
    }
}

fn equalities(assignments: &[Assignment], sep: &str) -> String {
    let items: Vec<_> = assignments.iter().map(Assignment::to_equality).collect();
    items.join(sep)
}

fn join<'a>(items: impl Iterator<Item = &'a str>, sep: &str) -> String {
    items.collect::<Vec<_>>().join(sep)
}
