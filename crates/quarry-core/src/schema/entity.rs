use super::{Builder, FieldMapping};

/// Table name and ordered field mappings for one entity type.
///
/// Field order is declaration order. It has no semantic weight but keeps
/// generated statement text reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityMapping {
    /// Name of the entity type
    pub name: String,

    /// Explicit table name override
    pub table_name: Option<String>,

    pub fields: Vec<FieldMapping>,
}

impl EntityMapping {
    pub fn builder(name: impl Into<String>) -> Builder {
        Builder::new(name)
    }

    /// The table name override if one was declared, else the entity name.
    pub fn table_name(&self) -> &str {
        self.table_name.as_ref().unwrap_or(&self.name)
    }

    pub fn field(&self, source_name: &str) -> Option<&FieldMapping> {
        self.fields
            .iter()
            .find(|field| field.source_name() == source_name)
    }

    pub fn field_index(&self, source_name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.source_name() == source_name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &FieldMapping> + '_ {
        self.fields.iter().filter(|field| field.is_key())
    }

    pub fn has_keys(&self) -> bool {
        self.keys().next().is_some()
    }
}
