use super::Primitive;

use quarry_core::stmt::Expr;

use std::{fmt, marker::PhantomData};

/// A typed reference to one field of a model, used to build filters.
///
/// ```ignore
/// Test::fields().name().starts_with("s")
/// ```
pub struct Path<T> {
    source: &'static str,
    _p: PhantomData<fn() -> T>,
}

impl<T> Path<T> {
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            _p: PhantomData,
        }
    }

    /// The field's source name.
    pub fn name(&self) -> &'static str {
        self.source
    }

    pub fn into_expr(self) -> Expr {
        Expr::field(self.source)
    }

    pub fn is_null(self) -> Expr {
        self.into_expr().is_null()
    }

    pub fn is_not_null(self) -> Expr {
        self.into_expr().is_not_null()
    }
}

impl<T: Primitive> Path<T> {
    pub fn eq(self, rhs: impl Into<T>) -> Expr {
        Expr::eq(self.into_expr(), operand::<T>(rhs.into()))
    }

    pub fn ne(self, rhs: impl Into<T>) -> Expr {
        Expr::ne(self.into_expr(), operand::<T>(rhs.into()))
    }

    pub fn gt(self, rhs: impl Into<T>) -> Expr {
        Expr::gt(self.into_expr(), operand::<T>(rhs.into()))
    }

    pub fn ge(self, rhs: impl Into<T>) -> Expr {
        Expr::ge(self.into_expr(), operand::<T>(rhs.into()))
    }

    pub fn lt(self, rhs: impl Into<T>) -> Expr {
        Expr::lt(self.into_expr(), operand::<T>(rhs.into()))
    }

    pub fn le(self, rhs: impl Into<T>) -> Expr {
        Expr::le(self.into_expr(), operand::<T>(rhs.into()))
    }

    /// True when the field's value is one of `values`.
    pub fn in_list(self, values: impl IntoIterator<Item = impl Into<T>>) -> Expr {
        let list = Expr::list(values.into_iter().map(|value| operand::<T>(value.into())));
        self.into_expr().in_list(list)
    }
}

macro_rules! impl_text_path {
    ( $( $ty:ty ),* ) => {
        $(
            impl Path<$ty> {
                pub fn starts_with(self, prefix: impl Into<String>) -> Expr {
                    self.into_expr().starts_with(prefix.into())
                }

                pub fn ends_with(self, suffix: impl Into<String>) -> Expr {
                    self.into_expr().ends_with(suffix.into())
                }
            }
        )*
    };
}

impl_text_path!(String, Option<String>);

fn operand<T: Primitive>(value: T) -> Expr {
    Expr::Value(value.to_value())
}

impl<T> From<Path<T>> for Expr {
    fn from(value: Path<T>) -> Self {
        value.into_expr()
    }
}

impl<T> Clone for Path<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Path<T> {}

impl<T> fmt::Debug for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&self.source).finish()
    }
}
