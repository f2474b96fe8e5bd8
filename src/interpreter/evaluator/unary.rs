use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a unary operation over an already-evaluated operand.
    ///
    /// Negation requires a numeric operand; integer negation is checked for
    /// overflow (`-i64::MIN` is not representable).
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `value`: The operand value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the negated value.
    pub(crate) fn eval_unary_op(op: UnaryOperator,
                                value: &Value,
                                line: usize)
                                -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { line }),
                Value::Real(r) => Ok(Value::Real(-r)),
                Value::Char(_) => {
                    Err(RuntimeError::TypeMismatch { details:
                                                         "cannot negate a character value"
                                                             .to_string(),
                                                     line })
                },
            },
        }
    }
}
