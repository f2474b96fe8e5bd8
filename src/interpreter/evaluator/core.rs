use std::io::{BufRead, Write};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        env::Environment,
        value::{Value, VarType},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one program run: the variable
/// environment plus the input and output streams driven by `ask` and `show`
/// statements. The streams are borrowed so that tests can substitute
/// in-memory cursors for stdin and stdout.
///
/// ## Usage
///
/// A `Context` is created once per run and consumed by [`Context::run`],
/// which executes the statement list strictly in source order. Errors are
/// fatal to the run; effects of earlier statements are not rolled back.
pub struct Context<'io> {
    env:    Environment,
    input:  &'io mut dyn BufRead,
    output: &'io mut dyn Write,
}

impl<'io> Context<'io> {
    /// Creates a new evaluation context with an empty environment, reading
    /// `ask` input from `input` and writing `show` output to `output`.
    pub fn new(input: &'io mut dyn BufRead, output: &'io mut dyn Write) -> Self {
        Self { env: Environment::new(),
               input,
               output }
    }

    /// Executes a full program, statement by statement, in source order.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised; execution stops there.
    pub fn run(&mut self, program: &[Statement]) -> EvalResult<()> {
        for statement in program {
            self.eval_statement(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// Assignments and input statements mutate the environment; output
    /// statements write one line; a bare expression statement is evaluated
    /// and its result discarded.
    ///
    /// # Errors
    /// Any `RuntimeError` raised while evaluating the statement's
    /// expressions, converting input, or binding variables.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value)?;
                self.env.bind(name, value, *line)
            },
            Statement::Show { exprs, line } => self.exec_show(exprs, *line),
            Statement::Ask { name, ty, line } => self.exec_ask(name, *ty, *line),
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(())
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, variable references,
    /// unary negation and binary operations. Expression evaluation never
    /// mutates the environment.
    ///
    /// # Errors
    /// `RuntimeError::UnboundVariable` for a read of an unbound name, plus
    /// any error raised by the operator evaluation.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, line } => self.env.lookup(name, *line).copied(),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary_op(*op, &value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary_op(*op, &left, &right, *line)
            },
        }
    }

    /// Executes an output statement.
    ///
    /// All expressions are evaluated left to right before anything is
    /// written, so a failing expression produces no output line for the
    /// statement. The rendered values are space separated and terminated by
    /// one newline.
    fn exec_show(&mut self, exprs: &[Expr], line: usize) -> EvalResult<()> {
        let mut rendered = Vec::with_capacity(exprs.len());
        for expr in exprs {
            rendered.push(self.eval(expr)?.to_string());
        }

        writeln!(self.output, "{}", rendered.join(" ")).map_err(|e| RuntimeError::Io { message: e.to_string(),
                                                                                       line })
    }

    /// Executes an input statement.
    ///
    /// Blocks for one line of external input and converts it per the declared
    /// type. Without a declaration the target variable's existing type is
    /// used, and for a fresh variable the type is inferred from the text
    /// (integer, then real, then character).
    fn exec_ask(&mut self, name: &str, ty: Option<VarType>, line: usize) -> EvalResult<()> {
        // Surface a declaration conflict before blocking on input.
        if let Some(declared) = ty
           && let Some(existing) = self.env.declared_type(name)
           && declared != existing
        {
            return Err(RuntimeError::TypeMismatch { details: format!("variable '{name}' is declared {existing} and cannot be re-declared {declared}"),
                                                    line });
        }

        let text = self.read_input_line(line)?;
        let target = ty.or_else(|| self.env.declared_type(name));
        let value = match target {
            Some(target) => convert_input(&text, target, line)?,
            None => infer_input(&text, line)?,
        };

        match ty {
            Some(ty) => self.env.bind_typed(name, ty, value, line),
            None => self.env.bind(name, value, line),
        }
    }

    /// Reads one line from the input stream, without its trailing newline.
    fn read_input_line(&mut self, line: usize) -> EvalResult<String> {
        let mut buffer = String::new();
        let read = self.input
                       .read_line(&mut buffer)
                       .map_err(|e| RuntimeError::Io { message: e.to_string(),
                                                       line })?;
        if read == 0 {
            return Err(RuntimeError::InputExhausted { line });
        }
        Ok(buffer.trim().to_string())
    }
}

/// Converts one line of input text to a value of the requested type.
///
/// # Errors
/// `RuntimeError::InputFormatError` when the text does not parse as the
/// requested type.
fn convert_input(text: &str, ty: VarType, line: usize) -> EvalResult<Value> {
    let converted = match ty {
        VarType::Int => text.parse::<i64>().ok().map(Value::Integer),
        VarType::Real => text.parse::<f64>().ok().map(Value::Real),
        VarType::Char => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Value::Char(c)),
                _ => None,
            }
        },
    };

    converted.ok_or_else(|| RuntimeError::InputFormatError { input: text.to_string(),
                                                             expected: ty.to_string(),
                                                             line })
}

/// Infers a value from input text for a variable without a declared type:
/// integer first, then real, then a single character.
fn infer_input(text: &str, line: usize) -> EvalResult<Value> {
    convert_input(text, VarType::Int, line).or_else(|_| convert_input(text, VarType::Real, line))
                                           .or_else(|_| convert_input(text, VarType::Char, line))
                                           .map_err(|_| RuntimeError::InputFormatError {
                                               input: text.to_string(),
                                               expected: "a value".to_string(),
                                               line,
                                           })
}
