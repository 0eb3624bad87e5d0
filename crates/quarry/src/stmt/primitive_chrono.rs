use super::Primitive;
use crate::Result;

use chrono::{NaiveDate, NaiveDateTime};
use quarry_core::{stmt::Value, Error};

impl Primitive for NaiveDate {
    fn to_value(&self) -> Value {
        Value::Date(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Date(v) => Ok(v),
            Value::DateTime(v) => Ok(v.date()),
            value => Err(Error::type_conversion(value, "NaiveDate")),
        }
    }
}

impl Primitive for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::DateTime(v) => Ok(v),
            value => Err(Error::type_conversion(value, "NaiveDateTime")),
        }
    }
}
