//! Builds full statements for one entity from its mapping and record values.
//!
//! [`StatementFactory`] decides *what* goes into a statement: which columns
//! are written, which identify the row, and how parameters are named. The
//! textual shape of each verb is delegated to a strategy, so a caller can
//! swap out one verb's dialect without touching the column selection logic.

mod factory;
pub use factory::StatementFactory;

mod parts;
pub use parts::{Assignment, DeleteFilter, DeleteParts, InsertParts, SelectParts, UpdateParts};

mod strategy;
pub use strategy::{DeleteStrategy, InsertStrategy, SelectStrategy, Standard, UpdateStrategy};
