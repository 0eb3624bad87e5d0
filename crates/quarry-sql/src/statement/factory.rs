use super::{
    Assignment, DeleteFilter, DeleteParts, DeleteStrategy, InsertParts, InsertStrategy,
    SelectParts, SelectStrategy, Standard, UpdateParts, UpdateStrategy,
};
use crate::serializer;

use quarry_core::{
    schema::{EntityMapping, FieldMapping},
    stmt::{Expr, GeneratedStatement, Param, Value, ValueRecord},
    Error, Result,
};

use std::sync::Arc;

/// Separates per-record statements of a batch.
const BATCH_SEPARATOR: &str = ";\n";

/// Synthesizes parameterized statements from an [`EntityMapping`].
///
/// Values are always bound as named parameters and never appear in the
/// statement text. Single-record statements name parameters `@<field>`;
/// batches suffix each record's parameters with its index, `@<field>_<n>`.
#[derive(Debug, Clone)]
pub struct StatementFactory {
    insert: Arc<dyn InsertStrategy>,
    update: Arc<dyn UpdateStrategy>,
    delete: Arc<dyn DeleteStrategy>,
    select: Arc<dyn SelectStrategy>,
}

/// Accumulates text and parameters of a (possibly batched) statement.
#[derive(Default)]
struct Batch {
    stmt: GeneratedStatement,
}

impl StatementFactory {
    pub fn new() -> Self {
        Self {
            insert: Arc::new(Standard),
            update: Arc::new(Standard),
            delete: Arc::new(Standard),
            select: Arc::new(Standard),
        }
    }

    pub fn with_insert(mut self, strategy: impl InsertStrategy) -> Self {
        self.insert = Arc::new(strategy);
        self
    }

    pub fn with_update(mut self, strategy: impl UpdateStrategy) -> Self {
        self.update = Arc::new(strategy);
        self
    }

    pub fn with_delete(mut self, strategy: impl DeleteStrategy) -> Self {
        self.delete = Arc::new(strategy);
        self
    }

    pub fn with_select(mut self, strategy: impl SelectStrategy) -> Self {
        self.select = Arc::new(strategy);
        self
    }

    /// Insert one record.
    ///
    /// Auto-increment keys and null values are omitted from both the column
    /// and value lists.
    pub fn insert(
        &self,
        mapping: &EntityMapping,
        record: &ValueRecord,
    ) -> Result<GeneratedStatement> {
        let mut batch = Batch::default();
        self.push_insert(&mut batch, mapping, record, None)?;
        Ok(batch.stmt)
    }

    /// Insert every record in a single batch. Returns `None` for an empty
    /// batch.
    pub fn insert_many(
        &self,
        mapping: &EntityMapping,
        records: &[ValueRecord],
    ) -> Result<Option<GeneratedStatement>> {
        self.batch(records, |batch, record, index| {
            self.push_insert(batch, mapping, record, Some(index))
        })
    }

    /// Update one record, identified by its keys.
    pub fn update(
        &self,
        mapping: &EntityMapping,
        record: &ValueRecord,
    ) -> Result<GeneratedStatement> {
        require_keys(mapping)?;

        let mut batch = Batch::default();
        self.push_update(&mut batch, mapping, record, None)?;
        Ok(batch.stmt)
    }

    pub fn update_many(
        &self,
        mapping: &EntityMapping,
        records: &[ValueRecord],
    ) -> Result<Option<GeneratedStatement>> {
        if records.is_empty() {
            return Ok(None);
        }

        require_keys(mapping)?;

        self.batch(records, |batch, record, index| {
            self.push_update(batch, mapping, record, Some(index))
        })
    }

    /// Delete one record, identified by its keys.
    pub fn delete(
        &self,
        mapping: &EntityMapping,
        record: &ValueRecord,
    ) -> Result<GeneratedStatement> {
        require_keys(mapping)?;

        let mut batch = Batch::default();
        self.push_delete(&mut batch, mapping, record, None)?;
        Ok(batch.stmt)
    }

    pub fn delete_many(
        &self,
        mapping: &EntityMapping,
        records: &[ValueRecord],
    ) -> Result<Option<GeneratedStatement>> {
        if records.is_empty() {
            return Ok(None);
        }

        require_keys(mapping)?;

        self.batch(records, |batch, record, index| {
            self.push_delete(batch, mapping, record, Some(index))
        })
    }

    /// Delete every row matching `filter`.
    pub fn delete_where(
        &self,
        mapping: &EntityMapping,
        filter: &Expr,
    ) -> Result<GeneratedStatement> {
        let parts = DeleteParts {
            table: mapping.table_name(),
            filter: DeleteFilter::Predicate(serializer::compile(filter, mapping)?),
        };

        Ok(GeneratedStatement::new(self.delete.render(&parts)))
    }

    /// Select every row matching `filter`, or every row when there is none.
    pub fn select(
        &self,
        mapping: &EntityMapping,
        filter: Option<&Expr>,
    ) -> Result<GeneratedStatement> {
        let parts = SelectParts {
            table: mapping.table_name(),
            predicate: filter
                .map(|filter| serializer::compile(filter, mapping))
                .transpose()?,
        };

        Ok(GeneratedStatement::new(self.select.render(&parts)))
    }

    fn batch(
        &self,
        records: &[ValueRecord],
        mut push: impl FnMut(&mut Batch, &ValueRecord, usize) -> Result<()>,
    ) -> Result<Option<GeneratedStatement>> {
        if records.is_empty() {
            return Ok(None);
        }

        let mut batch = Batch::default();

        for (index, record) in records.iter().enumerate() {
            push(&mut batch, record, index)
                .map_err(|err| err.context(format!("record {index} of batch")))?;
        }

        Ok(Some(batch.stmt))
    }

    fn push_insert(
        &self,
        batch: &mut Batch,
        mapping: &EntityMapping,
        record: &ValueRecord,
        index: Option<usize>,
    ) -> Result<()> {
        check_arity(mapping, record)?;

        let mut columns = vec![];

        for (field, value) in fields(mapping, record) {
            if field.is_auto_increment() || value.is_null() {
                continue;
            }

            columns.push(batch.bind(field, value, index));
        }

        let parts = InsertParts {
            table: mapping.table_name(),
            columns,
        };

        batch.push_text(self.insert.render(&parts));
        Ok(())
    }

    fn push_update(
        &self,
        batch: &mut Batch,
        mapping: &EntityMapping,
        record: &ValueRecord,
        index: Option<usize>,
    ) -> Result<()> {
        check_arity(mapping, record)?;

        let mut set = vec![];
        let mut keys = vec![];

        for (field, value) in fields(mapping, record) {
            if field.is_key() {
                keys.push(batch.bind(field, value, index));
            } else if !value.is_null() {
                set.push(batch.bind(field, value, index));
            }
        }

        if set.is_empty() {
            return Err(Error::invalid_statement(format!(
                "nothing to update on `{}`; every non-key field is null",
                mapping.name
            )));
        }

        let parts = UpdateParts {
            table: mapping.table_name(),
            set,
            keys,
        };

        batch.push_text(self.update.render(&parts));
        Ok(())
    }

    fn push_delete(
        &self,
        batch: &mut Batch,
        mapping: &EntityMapping,
        record: &ValueRecord,
        index: Option<usize>,
    ) -> Result<()> {
        check_arity(mapping, record)?;

        let keys = fields(mapping, record)
            .filter(|(field, _)| field.is_key())
            .map(|(field, value)| batch.bind(field, value, index))
            .collect();

        let parts = DeleteParts {
            table: mapping.table_name(),
            filter: DeleteFilter::Keys(keys),
        };

        batch.push_text(self.delete.render(&parts));
        Ok(())
    }
}

impl Default for StatementFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl Batch {
    /// Bind `value` as the parameter for `field` and return its assignment.
    fn bind(
        &mut self,
        field: &FieldMapping,
        value: &Value,
        index: Option<usize>,
    ) -> Assignment {
        let placeholder = match index {
            Some(index) => format!("@{}_{index}", field.source_name()),
            None => format!("@{}", field.source_name()),
        };

        self.stmt.params.push(Param {
            name: placeholder.clone(),
            value: value.clone(),
        });

        Assignment {
            column: field.column_name().to_string(),
            placeholder,
        }
    }

    fn push_text(&mut self, text: String) {
        if !self.stmt.text.is_empty() {
            self.stmt.text.push_str(BATCH_SEPARATOR);
        }
        self.stmt.text.push_str(&text);
    }
}

fn fields<'a>(
    mapping: &'a EntityMapping,
    record: &'a ValueRecord,
) -> impl Iterator<Item = (&'a FieldMapping, &'a Value)> + 'a {
    mapping.fields.iter().zip(record.iter())
}

/// A key-less update or delete would touch every row of the table.
fn require_keys(mapping: &EntityMapping) -> Result<()> {
    if mapping.has_keys() {
        Ok(())
    } else {
        Err(Error::no_key_defined(&mapping.name))
    }
}

fn check_arity(mapping: &EntityMapping, record: &ValueRecord) -> Result<()> {
    if mapping.fields.len() == record.len() {
        Ok(())
    } else {
        Err(Error::invalid_statement(format!(
            "record has {} values but `{}` maps {} fields",
            record.len(),
            mapping.name,
            mapping.fields.len()
        )))
    }
}
