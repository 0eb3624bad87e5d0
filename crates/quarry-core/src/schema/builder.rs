use super::{EntityMapping, FieldMapping, FieldName};
use crate::{Error, Result};

use std::collections::HashSet;

/// Declarative description of an entity, checked by [`Builder::build`].
#[derive(Debug, Clone)]
pub struct Builder {
    name: String,
    table_name: Option<String>,
    fields: Vec<Field>,
}

/// Declaration of one field.
#[derive(Debug, Clone)]
pub struct Field {
    name: FieldName,
    primary_key: bool,
    auto_increment: bool,
}

impl Builder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: None,
            fields: vec![],
        }
    }

    /// Map the entity to an explicitly named table.
    pub fn table(mut self, name: impl Into<String>) -> Self {
        self.table_name = Some(name.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(self) -> Result<EntityMapping> {
        let mut sources = HashSet::new();
        let mut columns = HashSet::new();

        for field in &self.fields {
            if !sources.insert(field.name.source.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate field `{}` on `{}`",
                    field.name.source, self.name
                )));
            }

            if !columns.insert(field.name.column_name()) {
                return Err(Error::invalid_schema(format!(
                    "field `{}` on `{}` maps to column `{}`, which is already mapped",
                    field.name.source,
                    self.name,
                    field.name.column_name()
                )));
            }

            if field.auto_increment && !field.primary_key {
                return Err(Error::invalid_schema(format!(
                    "field `{}` on `{}` is auto-increment but not a key",
                    field.name.source, self.name
                )));
            }
        }

        Ok(EntityMapping {
            name: self.name,
            table_name: self.table_name,
            fields: self
                .fields
                .into_iter()
                .map(|field| FieldMapping {
                    name: field.name,
                    primary_key: field.primary_key,
                    auto_increment: field.auto_increment,
                })
                .collect(),
        })
    }
}

impl Field {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            name: FieldName {
                source: source.into(),
                column: None,
            },
            primary_key: false,
            auto_increment: false,
        }
    }

    /// Store the field under an explicit column name.
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.name.column = Some(name.into());
        self
    }

    /// Mark the field as (part of) the key.
    pub fn key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Mark a key field as assigned by the store.
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }
}
