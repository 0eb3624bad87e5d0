mod path;
pub use path::Path;

mod primitive;
pub use primitive::{load_field, Primitive};

mod primitive_chrono;

pub use quarry_core::stmt::*;
