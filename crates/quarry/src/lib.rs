pub mod db;
pub use db::Db;

pub mod driver {
    pub use quarry_core::driver::*;
}

mod model;
pub use model::Model;

mod repository;
pub use repository::Repository;

pub mod stmt;
pub use stmt::{Path, Primitive};

pub use quarry_core::{bail, err, schema, Error, Result};
pub use quarry_macros::Model;
pub use quarry_sql::{compile, statement, StatementFactory};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        stmt::{load_field, Path, Primitive},
        Model, Result,
    };
    pub use quarry_core::{
        schema::{Entity, EntityMapping, Field},
        stmt::{Row, ValueRecord},
    };
    pub use std::vec::Vec;
}
