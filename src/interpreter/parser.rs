/// Expression parsing entry point.
///
/// Declares the shared `ParseResult` alias and the top-level
/// `parse_expression` function that starts the precedence descent.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence levels for comparison, additive and
/// multiplicative operators, and the token-to-operator mapping.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles unary minus, literals, variable references and parenthesized
/// expressions.
pub mod unary;

/// Statement parsing.
///
/// Recognizes the statement forms (assignment, output, input, bare
/// expression) from one token of lookahead and the active dialect.
pub mod statement;
