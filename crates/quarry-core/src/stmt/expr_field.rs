use super::Expr;

/// References a field of the entity by its source (in-memory) name. The
/// compiler maps it to the column name.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprField {
    pub name: String,
}

impl Expr {
    pub fn field(name: impl Into<String>) -> Self {
        ExprField { name: name.into() }.into()
    }

    pub fn as_field(&self) -> Option<&ExprField> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}
