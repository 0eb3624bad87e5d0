use super::{Db, Shared};
use crate::{Model, Result};

use quarry_core::{
    driver::Connection,
    schema::{self, EntityMapping},
};
use quarry_sql::StatementFactory;

use std::sync::Arc;
use tokio::sync::Mutex;

type Resolve = fn() -> Result<Arc<EntityMapping>>;

#[derive(Default)]
pub struct Builder {
    /// Models whose mappings are validated when the database is built
    models: Vec<Resolve>,

    factory: StatementFactory,
}

impl Builder {
    pub fn register<M: Model>(&mut self) -> &mut Self {
        self.models.push(schema::resolve::<M>);
        self
    }

    /// Use `factory` instead of the default statement strategies.
    pub fn statement_factory(&mut self, factory: StatementFactory) -> &mut Self {
        self.factory = factory;
        self
    }

    /// Validate every registered model and wrap `connection`.
    pub fn build(&mut self, connection: impl Connection) -> Result<Db> {
        for resolve in &self.models {
            let mapping = resolve()?;
            log::debug!(
                "registered `{}` -> table `{}` ({} fields)",
                mapping.name,
                mapping.table_name(),
                mapping.fields.len()
            );
        }

        Ok(Db {
            shared: Arc::new(Shared {
                connection: Mutex::new(Box::new(connection)),
                factory: self.factory.clone(),
            }),
        })
    }
}
