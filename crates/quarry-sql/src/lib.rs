pub mod serializer;
pub use serializer::compile;

pub mod statement;
pub use statement::StatementFactory;
