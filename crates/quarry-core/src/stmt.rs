mod expr;
pub use expr::Expr;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_field;
pub use expr_field::ExprField;

mod expr_list;
pub use expr_list::ExprList;

mod expr_method_call;
pub use expr_method_call::ExprMethodCall;

mod expr_unary;
pub use expr_unary::ExprUnary;

mod generated;
pub use generated::{GeneratedStatement, Param};

mod method;
pub use method::Method;

mod op_binary;
pub use op_binary::BinaryOp;

mod row;
pub use row::Row;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;
