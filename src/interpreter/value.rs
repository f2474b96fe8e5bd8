use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64_checked,
};

/// The declared type of a variable.
///
/// A variable's type is fixed by its first binding (or by the type keyword of
/// an input statement) and kept for the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    /// A 64-bit signed integer.
    Int,
    /// A single character.
    Char,
    /// A 64-bit floating-point number.
    Real,
}

impl std::fmt::Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Char => "char",
            Self::Real => "real",
        };
        write!(f, "{name}")
    }
}

/// Represents a runtime value in the interpreter.
///
/// This enum models the types that can appear in expressions, assignments and
/// input conversions. The language has no dedicated boolean type; comparison
/// operators produce `Integer(1)` or `Integer(0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An integer value (64-bit).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A single character value.
    Char(char),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Real(r) => (*r).into(),
            LiteralValue::Char(c) => (*c).into(),
        }
    }
}

impl Value {
    /// The type tag of this value.
    ///
    /// # Example
    /// ```
    /// use jnr::interpreter::value::{Value, VarType};
    ///
    /// assert_eq!(Value::Integer(3).var_type(), VarType::Int);
    /// assert_eq!(Value::Char('c').var_type(), VarType::Char);
    /// ```
    #[must_use]
    pub const fn var_type(&self) -> VarType {
        match self {
            Self::Integer(_) => VarType::Int,
            Self::Real(_) => VarType::Real,
            Self::Char(_) => VarType::Char,
        }
    }

    /// Returns `true` if the value is numeric (integer or real).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// For integers, conversion fails if the value is too large to be
    /// represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is real or a safe integer.
    /// - `Err(RuntimeError::TypeMismatch | LiteralTooLarge)`: If the value is
    ///   a character or not exactly representable.
    ///
    /// # Example
    /// ```
    /// use jnr::interpreter::value::Value;
    ///
    /// let x = Value::Integer(10);
    /// let real = x.as_real(42).unwrap();
    ///
    /// assert_eq!(real, 10.0);
    /// ```
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge { line })?),
            Self::Char(_) => {
                Err(RuntimeError::TypeMismatch { details:
                                                     "expected a numeric value, found a character"
                                                         .to_string(),
                                                 line })
            },
        }
    }
}

impl std::fmt::Display for Value {
    /// Writes the value in its natural textual form: integers as decimal,
    /// reals in default precision, characters as the bare character.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Char(c) => write!(f, "{c}"),
        }
    }
}
