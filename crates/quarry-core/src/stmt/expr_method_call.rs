use super::{Expr, Method};
use crate::Result;

/// A `Contains`, `StartsWith` or `EndsWith` call.
///
/// Two call shapes exist and both must be kept:
///
/// - instance form: `target` is the receiver and `args` holds exactly one
///   argument, e.g. `names.contains(name)` or `name.starts_with("s")`.
/// - extension form: `target` is `None` and `args` holds exactly two
///   arguments. `args[0]` is the collection or pattern and `args[1]` is the
///   value being tested, e.g. `contains(names, name)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprMethodCall {
    pub method: Method,
    pub target: Option<Box<Expr>>,
    pub args: Vec<Expr>,
}

impl ExprMethodCall {
    /// Splits the call into `(subject, operand)` regardless of its shape.
    ///
    /// The subject is the value being tested: the probe of `Contains`, or
    /// the string matched by `StartsWith`/`EndsWith`. The operand is the
    /// collection or the pattern. Returns `None` when the call has neither
    /// shape.
    pub fn subject_and_operand(&self) -> Option<(&Expr, &Expr)> {
        match (&self.target, &self.args[..], self.method) {
            (Some(target), [arg], Method::Contains) => Some((arg, &**target)),
            (Some(target), [arg], _) => Some((&**target, arg)),
            (None, [operand, subject], _) => Some((subject, operand)),
            _ => None,
        }
    }

    /// True for the extension (two argument, no receiver) form.
    pub fn is_extension_form(&self) -> bool {
        self.target.is_none()
    }
}

impl Expr {
    /// Builds a method call from a method name, failing for names outside
    /// `Contains`, `StartsWith` and `EndsWith`.
    pub fn method_call(
        name: &str,
        target: Option<Expr>,
        args: impl IntoIterator<Item = Expr>,
    ) -> Result<Self> {
        Ok(ExprMethodCall {
            method: name.parse()?,
            target: target.map(Box::new),
            args: args.into_iter().collect(),
        }
        .into())
    }

    fn instance_call(method: Method, target: Expr, arg: Expr) -> Self {
        ExprMethodCall {
            method,
            target: Some(Box::new(target)),
            args: vec![arg],
        }
        .into()
    }

    /// `self` is a collection; true when it holds `probe`.
    pub fn contains(self, probe: impl Into<Self>) -> Self {
        Expr::instance_call(Method::Contains, self, probe.into())
    }

    /// True when `self` is one of `list`. Built in extension form.
    pub fn in_list(self, list: impl Into<Self>) -> Self {
        ExprMethodCall {
            method: Method::Contains,
            target: None,
            args: vec![list.into(), self],
        }
        .into()
    }

    pub fn starts_with(self, prefix: impl Into<Self>) -> Self {
        Expr::instance_call(Method::StartsWith, self, prefix.into())
    }

    pub fn ends_with(self, suffix: impl Into<Self>) -> Self {
        Expr::instance_call(Method::EndsWith, self, suffix.into())
    }
}

impl From<ExprMethodCall> for Expr {
    fn from(value: ExprMethodCall) -> Self {
        Self::MethodCall(value)
    }
}
