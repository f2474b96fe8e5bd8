use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        parser::binary::is_relational_op,
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation over two already-evaluated operands.
    ///
    /// Dispatches to arithmetic or comparison evaluation depending on the
    /// operator class.
    pub(crate) fn eval_binary_op(op: BinaryOperator,
                                 left: &Value,
                                 right: &Value,
                                 line: usize)
                                 -> EvalResult<Value> {
        if is_relational_op(op) {
            Self::eval_comparison(op, left, right, line)
        } else {
            Self::eval_arithmetic(op, left, right, line)
        }
    }

    /// Evaluates a scalar arithmetic operation.
    ///
    /// Both operands must be numeric; character operands are a type
    /// mismatch. Two integers stay in integer arithmetic, where overflow is
    /// detected and division truncates. Mixed integer/real operands promote
    /// the result to real. Division and modulo by zero are checked for both
    /// numeric categories.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator (`Add`, `Sub`, `Mul`, `Div` or `Mod`).
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    pub(crate) fn eval_arithmetic(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};
        use Value::{Char, Integer};

        match (left, right) {
            (Char(_), _) | (_, Char(_)) => {
                Err(RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to a character operand"),
                                                 line })
            },
            (Integer(a), Integer(b)) => match op {
                Add => a.checked_add(*b).map(Integer).ok_or(RuntimeError::Overflow { line }),
                Sub => a.checked_sub(*b).map(Integer).ok_or(RuntimeError::Overflow { line }),
                Mul => a.checked_mul(*b).map(Integer).ok_or(RuntimeError::Overflow { line }),
                Div => {
                    if *b == 0 {
                        Err(RuntimeError::DivisionByZero { line })
                    } else {
                        a.checked_div(*b).map(Integer).ok_or(RuntimeError::Overflow { line })
                    }
                },
                Mod => {
                    if *b == 0 {
                        Err(RuntimeError::DivisionByZero { line })
                    } else {
                        a.checked_rem(*b).map(Integer).ok_or(RuntimeError::Overflow { line })
                    }
                },
                _ => unreachable!("eval_arithmetic used with non arithmetic operator"),
            },
            _ => {
                let a = left.as_real(line)?;
                let b = right.as_real(line)?;

                Ok(Value::Real(match op {
                                   Add => a + b,
                                   Sub => a - b,
                                   Mul => a * b,
                                   Div => {
                                       if b == 0.0 {
                                           return Err(RuntimeError::DivisionByZero { line });
                                       }
                                       a / b
                                   },
                                   Mod => {
                                       if b == 0.0 {
                                           return Err(RuntimeError::DivisionByZero { line });
                                       }
                                       a % b
                                   },
                                   _ => unreachable!("eval_arithmetic used with non arithmetic operator"),
                               }))
            },
        }
    }

    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Operands must be of compatible comparable types: numeric against
    /// numeric (with integer/real promotion) or character against character.
    /// The result is the language's truth value, `Integer(1)` or
    /// `Integer(0)`, since there is no dedicated boolean type.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the truth value.
    pub(crate) fn eval_comparison(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        use Value::{Char, Integer};

        let holds = match (left, right) {
            (Char(a), Char(b)) => compare(op, a, b),
            (Integer(a), Integer(b)) => compare(op, a, b),
            _ if left.is_numeric() && right.is_numeric() => {
                let a = left.as_real(line)?;
                let b = right.as_real(line)?;
                compare(op, &a, &b)
            },
            _ => {
                return Err(RuntimeError::TypeMismatch { details: format!("cannot compare a {} value with a {} value",
                                                                         left.var_type(),
                                                                         right.var_type()),
                                                        line });
            },
        };

        Ok(Value::Integer(i64::from(holds)))
    }
}

/// Applies a comparison operator to two operands of the same ordered type.
fn compare<T: PartialOrd>(op: BinaryOperator, a: &T, b: &T) -> bool {
    match op {
        BinaryOperator::Less => a < b,
        BinaryOperator::Greater => a > b,
        BinaryOperator::LessEqual => a <= b,
        BinaryOperator::GreaterEqual => a >= b,
        BinaryOperator::Equal => a == b,
        BinaryOperator::NotEqual => a != b,
        _ => unreachable!("compare used with non comparison operator"),
    }
}
