use crate::Result;

use quarry_core::{
    stmt::{Row, Value},
    Error,
};

/// A field type that converts to and from [`Value`].
pub trait Primitive: Sized {
    fn to_value(&self) -> Value;

    fn load(value: Value) -> Result<Self>;
}

/// Read one field of a model from `row`.
///
/// The column is looked up by its mapped name first and by the field's
/// source name second, since an override may carry quoting the store strips
/// from result column names. Absent and `NULL` columns produce the default.
pub fn load_field<T: Primitive + Default>(row: &Row, column: &str, source: &str) -> Result<T> {
    let value = row.get(column).or_else(|| row.get(source));

    match value {
        Some(value) if !value.is_null() => {
            T::load(value.clone()).map_err(|err| err.context(format!("loading `{source}`")))
        }
        _ => Ok(T::default()),
    }
}

impl Primitive for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl Primitive for i32 {
    fn to_value(&self) -> Value {
        Value::I32(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I32(v) => Ok(v),
            Value::I64(v) => i32::try_from(v).map_err(|_| Error::type_conversion(value, "i32")),
            value => Err(Error::type_conversion(value, "i32")),
        }
    }
}

impl Primitive for i64 {
    fn to_value(&self) -> Value {
        Value::I64(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I64(v) => Ok(v),
            Value::I32(v) => Ok(v.into()),
            value => Err(Error::type_conversion(value, "i64")),
        }
    }
}

impl Primitive for f64 {
    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl Primitive for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl Primitive for char {
    fn to_value(&self) -> Value {
        Value::Char(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Char(v) => Ok(v),
            Value::String(ref v) => {
                let mut chars = v.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok(ch),
                    _ => Err(Error::type_conversion(value, "char")),
                }
            }
            value => Err(Error::type_conversion(value, "char")),
        }
    }
}

impl Primitive for Vec<u8> {
    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => Ok(Some(T::load(value)?)),
        }
    }
}
