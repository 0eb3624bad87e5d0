#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldName {
    /// Identifier used to read and write the in-memory record.
    pub source: String,

    /// Explicit column name override, used verbatim (including any quoting
    /// such as `[Name]`).
    pub column: Option<String>,
}

impl FieldName {
    pub fn column_name(&self) -> &str {
        self.column.as_ref().unwrap_or(&self.source)
    }
}

/// Storage facts about one field of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldMapping {
    pub name: FieldName,

    /// True if the field identifies the row
    pub primary_key: bool,

    /// True if the store assigns the value; only meaningful for keys
    pub auto_increment: bool,
}

impl FieldMapping {
    pub fn source_name(&self) -> &str {
        &self.name.source
    }

    pub fn column_name(&self) -> &str {
        self.name.column_name()
    }

    pub fn is_key(&self) -> bool {
        self.primary_key
    }

    pub fn is_auto_increment(&self) -> bool {
        self.primary_key && self.auto_increment
    }
}
