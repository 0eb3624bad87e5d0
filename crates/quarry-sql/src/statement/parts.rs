/// A column paired with the placeholder its value is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Column name, verbatim from the mapping
    pub column: String,

    /// Placeholder name, including the leading `@`
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertParts<'a> {
    pub table: &'a str,

    /// Written columns. Empty when every column was omitted.
    pub columns: Vec<Assignment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateParts<'a> {
    pub table: &'a str,

    /// Non-key columns to assign. Never empty.
    pub set: Vec<Assignment>,

    /// Key columns identifying the row. Never empty.
    pub keys: Vec<Assignment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteParts<'a> {
    pub table: &'a str,
    pub filter: DeleteFilter,
}

/// How a delete selects its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteFilter {
    /// Equality on every key column. Never empty.
    Keys(Vec<Assignment>),

    /// A compiled predicate
    Predicate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectParts<'a> {
    pub table: &'a str,

    /// Compiled predicate, `None` to select every row
    pub predicate: Option<String>,
}

impl Assignment {
    /// `column = placeholder`
    pub fn to_equality(&self) -> String {
        format!("{} = {}", self.column, self.placeholder)
    }
}
