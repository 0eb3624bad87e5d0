use super::Value;

use std::fmt;

/// Statement text plus its out-of-band parameters.
///
/// This is exactly what a [`Connection`](crate::Connection) receives. Values
/// never appear in `text`; they are referenced by `@name` placeholders.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GeneratedStatement {
    pub text: String,
    pub params: Vec<Param>,
}

/// A named parameter bound to a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Placeholder name, including the leading `@`.
    pub name: String,
    pub value: Value,
}

impl GeneratedStatement {
    /// A statement with no parameters.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: vec![],
        }
    }

    /// Binds an additional parameter.
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.push(Param {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|param| param.name == name)
            .map(|param| &param.value)
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.params.iter().map(|param| param.name.as_str())
    }
}

impl fmt::Display for GeneratedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
