/// Core evaluation logic for statements and expressions.
///
/// Contains the `Context` struct, statement execution, expression dispatch,
/// and the input/output plumbing for `ask` and `show`.
pub mod core;

/// Binary operator evaluation.
///
/// Implements evaluation for arithmetic and comparison operations, including
/// numeric promotion and the zero checks for division and modulo.
pub mod binary;

/// Unary operator evaluation.
///
/// Handles numeric negation.
pub mod unary;
