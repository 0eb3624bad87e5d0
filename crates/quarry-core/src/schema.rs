mod builder;
pub use builder::{Builder, Field};

mod entity;
pub use entity::EntityMapping;

mod field;
pub use field::{FieldMapping, FieldName};

mod resolve;
pub use resolve::{resolve, Entity};
