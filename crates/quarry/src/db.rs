mod builder;
pub use builder::Builder;

use crate::{Model, Repository, Result};

use quarry_core::{
    driver::{Connection, Operation, Response},
    stmt::{GeneratedStatement, Row, Value},
};
use quarry_sql::StatementFactory;

use std::sync::Arc;
use tokio::sync::Mutex;

/// A database handle.
///
/// Cloning is cheap; every clone shares the same connection, and statements
/// run one at a time in the order they acquire it.
#[derive(Clone, Debug)]
pub struct Db {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    connection: Mutex<Box<dyn Connection>>,
    factory: StatementFactory,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// A repository for `M`.
    pub fn repository<M: Model>(&self) -> Repository<M> {
        Repository::new(self.clone())
    }

    /// The factory used to build every statement issued through this handle.
    pub fn statement_factory(&self) -> &StatementFactory {
        &self.shared.factory
    }

    /// Run a statement and return the number of affected rows.
    pub async fn exec(&self, stmt: GeneratedStatement) -> Result<u64> {
        let count = self.run(Operation::Execute(stmt)).await?.rows.into_count()?;
        log::trace!("affected {count} row(s)");
        Ok(count)
    }

    /// Run a statement and return the first column of the first row, or
    /// `Value::Null` if there is none.
    pub async fn scalar(&self, stmt: GeneratedStatement) -> Result<Value> {
        self.run(Operation::Scalar(stmt)).await?.rows.into_scalar()
    }

    /// Run a statement and return every row.
    pub async fn query(&self, stmt: GeneratedStatement) -> Result<Vec<Row>> {
        let rows = self.run(Operation::Query(stmt)).await?.rows.into_values()?;
        log::trace!("returned {} row(s)", rows.len());
        Ok(rows)
    }

    async fn run(&self, op: Operation) -> Result<Response> {
        let stmt = op.statement();
        log::debug!(
            "{}: {}; params=[{}]",
            op.kind_name(),
            stmt.text,
            stmt.param_names().collect::<Vec<_>>().join(", ")
        );

        let mut connection = self.shared.connection.lock().await;
        connection.exec(op).await
    }
}
