#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read a variable before it was bound.
    UnboundVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Operand or binding types are incompatible.
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value was too large to be represented safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// External input could not be converted to the requested type.
    InputFormatError {
        /// The input text that failed to convert.
        input:    String,
        /// A description of the expected form.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The input stream ended while a value was still expected.
    InputExhausted {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to or reading from a stream failed.
    Io {
        /// The underlying error message.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name, line } => {
                write!(f, "Error on line {line}: Unbound variable '{name}'.")
            },

            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type mismatch: {details}.")
            },

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),

            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Value is too large.")
            },

            Self::InputFormatError { input,
                                     expected,
                                     line, } => write!(f,
                                                       "Error on line {line}: Cannot convert input '{input}' to {expected}."),

            Self::InputExhausted { line } => {
                write!(f, "Error on line {line}: Input ended while a value was expected.")
            },

            Self::Io { message, line } => {
                write!(f, "Error on line {line}: Stream error: {message}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
