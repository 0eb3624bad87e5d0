use crate::Result;

use quarry_core::{
    schema::Entity,
    stmt::{Row, ValueRecord},
};

/// A record type that can be stored through a [`Repository`](crate::Repository).
///
/// Implemented by `#[derive(Model)]`.
pub trait Model: Entity + Sized + Send + Sync + 'static {
    /// Field values in declaration order, matching the entity's mapping.
    fn to_record(&self) -> ValueRecord;

    /// Materialize an instance from a result row.
    ///
    /// Fields whose column is missing from the row, or holds `NULL`, keep
    /// their default value.
    fn load(row: &Row) -> Result<Self>;
}
