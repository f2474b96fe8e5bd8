#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer hit a character that starts no token.
    UnrecognizedCharacter {
        /// The offending slice of source text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A literal started but could not be completed (e.g. an unterminated or
    /// multi-character `'..'` literal, or a number too large to represent).
    MalformedLiteral {
        /// The offending slice of source text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// More than one comparison operator appeared in a single expression;
    /// comparisons are non-associative.
    ChainedComparison {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after a statement should have ended.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { token, line } => {
                write!(f, "Error on line {line}: Unrecognized character: {token}.")
            },

            Self::MalformedLiteral { literal, line } => {
                write!(f, "Error on line {line}: Malformed literal starting at {literal}.")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::ChainedComparison { line } => write!(f,
                                                       "Error on line {line}: Comparisons cannot be chained; at most one comparison operator per expression."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after statement. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
