use crate::{Db, Model, Result};

use quarry_core::{
    schema::{self, EntityMapping},
    stmt::{Expr, GeneratedStatement, Value, ValueRecord},
};

use std::{fmt, marker::PhantomData, sync::Arc};

/// CRUD access to one model type.
///
/// Every operation builds its statement with the database's
/// [`StatementFactory`](crate::StatementFactory) and hands it to the
/// connection. Errors from the connection are returned unchanged.
pub struct Repository<M> {
    db: Db,
    _p: PhantomData<fn() -> M>,
}

impl<M: Model> Repository<M> {
    pub(crate) fn new(db: Db) -> Self {
        Self {
            db,
            _p: PhantomData,
        }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    pub fn mapping(&self) -> Result<Arc<EntityMapping>> {
        schema::resolve::<M>()
    }

    /// True if any row matches `filter`.
    pub async fn exists(&self, filter: impl Into<Expr>) -> Result<bool> {
        let stmt = self.select(Some(&filter.into()))?;
        self.exists_sql(stmt).await
    }

    pub async fn exists_sql(&self, stmt: GeneratedStatement) -> Result<bool> {
        Ok(!self.db.query(stmt).await?.is_empty())
    }

    /// The first row matching `filter`.
    pub async fn get_one(&self, filter: impl Into<Expr>) -> Result<Option<M>> {
        let stmt = self.select(Some(&filter.into()))?;
        self.get_one_sql(stmt).await
    }

    pub async fn get_one_sql(&self, stmt: GeneratedStatement) -> Result<Option<M>> {
        let rows = self.db.query(stmt).await?;
        rows.first().map(M::load).transpose()
    }

    /// Every row matching `filter`, or every row of the table.
    pub async fn get_many(&self, filter: Option<Expr>) -> Result<Vec<M>> {
        let stmt = self.select(filter.as_ref())?;
        self.get_many_sql(stmt).await
    }

    pub async fn get_many_sql(&self, stmt: GeneratedStatement) -> Result<Vec<M>> {
        let rows = self.db.query(stmt).await?;
        rows.iter().map(M::load).collect()
    }

    /// The named column of the first row, `None` when there are no rows.
    pub async fn get_field(
        &self,
        stmt: GeneratedStatement,
        column: &str,
    ) -> Result<Option<Value>> {
        let rows = self.db.query(stmt).await?;

        Ok(rows
            .into_iter()
            .next()
            .map(|row| row.get(column).cloned().unwrap_or_default()))
    }

    pub async fn insert(&self, model: &M) -> Result<u64> {
        let mapping = self.mapping()?;
        let stmt = self.factory().insert(&mapping, &model.to_record())?;
        self.db.exec(stmt).await
    }

    pub async fn insert_many(&self, models: &[M]) -> Result<u64> {
        let mapping = self.mapping()?;
        let stmt = self.factory().insert_many(&mapping, &records(models))?;
        self.exec_batch(stmt).await
    }

    pub async fn update(&self, model: &M) -> Result<u64> {
        let mapping = self.mapping()?;
        let stmt = self
            .factory()
            .update(&mapping, &model.to_record())
            .map_err(|err| err.context(self.context("update")))?;
        self.db.exec(stmt).await
    }

    pub async fn update_many(&self, models: &[M]) -> Result<u64> {
        let mapping = self.mapping()?;
        let stmt = self
            .factory()
            .update_many(&mapping, &records(models))
            .map_err(|err| err.context(self.context("update_many")))?;
        self.exec_batch(stmt).await
    }

    pub async fn delete(&self, model: &M) -> Result<u64> {
        let mapping = self.mapping()?;
        let stmt = self
            .factory()
            .delete(&mapping, &model.to_record())
            .map_err(|err| err.context(self.context("delete")))?;
        self.db.exec(stmt).await
    }

    pub async fn delete_many(&self, models: &[M]) -> Result<u64> {
        let mapping = self.mapping()?;
        let stmt = self
            .factory()
            .delete_many(&mapping, &records(models))
            .map_err(|err| err.context(self.context("delete_many")))?;
        self.exec_batch(stmt).await
    }

    /// Delete every row matching `filter`.
    pub async fn delete_where(&self, filter: impl Into<Expr>) -> Result<u64> {
        let mapping = self.mapping()?;
        let stmt = self.factory().delete_where(&mapping, &filter.into())?;
        self.db.exec(stmt).await
    }

    fn factory(&self) -> &quarry_sql::StatementFactory {
        self.db.statement_factory()
    }

    fn select(&self, filter: Option<&Expr>) -> Result<GeneratedStatement> {
        let mapping = self.mapping()?;
        self.factory().select(&mapping, filter)
    }

    async fn exec_batch(&self, stmt: Option<GeneratedStatement>) -> Result<u64> {
        match stmt {
            Some(stmt) => self.db.exec(stmt).await,
            None => Ok(0),
        }
    }

    fn context(&self, op: &str) -> String {
        format!("Repository<{}>::{op}()", std::any::type_name::<M>())
    }
}

fn records<M: Model>(models: &[M]) -> Vec<ValueRecord> {
    models.iter().map(Model::to_record).collect()
}

impl<M> Clone for Repository<M> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _p: PhantomData,
        }
    }
}

impl<M> fmt::Debug for Repository<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("model", &std::any::type_name::<M>())
            .finish()
    }
}
