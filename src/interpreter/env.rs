use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{Value, VarType},
    },
};

/// A variable binding: the declared type and the current value.
#[derive(Debug, Clone)]
struct Binding {
    ty:    VarType,
    value: Value,
}

/// The variable environment for one program run.
///
/// Maps identifiers to their declared type and current value. A variable must
/// be bound by an assignment or input statement before any read; its type is
/// fixed by the first binding for the rest of the run. The environment starts
/// empty and is discarded when the run ends.
#[derive(Debug, Default)]
pub struct Environment {
    vars: HashMap<String, Binding>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the current value of a variable.
    ///
    /// # Errors
    /// `RuntimeError::UnboundVariable` if the name has never been bound.
    ///
    /// # Example
    /// ```
    /// use jnr::interpreter::{env::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// assert!(env.lookup("x", 1).is_err());
    ///
    /// env.bind("x", Value::Integer(3), 1).unwrap();
    /// assert_eq!(env.lookup("x", 2).unwrap(), &Value::Integer(3));
    /// ```
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<&Value> {
        self.vars
            .get(name)
            .map(|binding| &binding.value)
            .ok_or_else(|| RuntimeError::UnboundVariable { name: name.to_string(),
                                                           line })
    }

    /// The declared type of a variable, if it has been bound.
    #[must_use]
    pub fn declared_type(&self, name: &str) -> Option<VarType> {
        self.vars.get(name).map(|binding| binding.ty)
    }

    /// Binds or re-binds a variable.
    ///
    /// The first binding fixes the variable's type from the value. Later
    /// bindings must carry a value of the same type, with one widening
    /// allowed: an integer value stored into a `real` variable is promoted.
    ///
    /// # Errors
    /// - `RuntimeError::TypeMismatch` when re-binding with an incompatible
    ///   type.
    /// - `RuntimeError::LiteralTooLarge` when a widened integer is not
    ///   exactly representable as a real.
    pub fn bind(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let value = match self.declared_type(name) {
            None => value,
            Some(ty) if ty == value.var_type() => value,
            Some(VarType::Real) if value.var_type() == VarType::Int => {
                Value::Real(value.as_real(line)?)
            },
            Some(ty) => {
                return Err(RuntimeError::TypeMismatch {
                    details: format!("variable '{name}' is declared {ty} but was bound to a {} value",
                                     value.var_type()),
                    line,
                });
            },
        };

        self.vars.insert(name.to_string(),
                         Binding { ty: value.var_type(),
                                   value });
        Ok(())
    }

    /// Binds a variable whose type was declared explicitly.
    ///
    /// Used by typed input statements. The declared type must agree with any
    /// earlier declaration of the same name.
    ///
    /// # Errors
    /// `RuntimeError::TypeMismatch` when the name already has a different
    /// declared type.
    pub fn bind_typed(&mut self,
                      name: &str,
                      ty: VarType,
                      value: Value,
                      line: usize)
                      -> EvalResult<()> {
        if let Some(existing) = self.declared_type(name)
           && existing != ty
        {
            return Err(RuntimeError::TypeMismatch { details: format!("variable '{name}' is declared {existing} and cannot be re-declared {ty}"),
                                                    line });
        }
        self.bind(name, value, line)
    }
}
