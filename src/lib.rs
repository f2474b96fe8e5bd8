//! # jnr
//!
//! jnr is an interpreter for a small imperative scripting language with typed
//! literals, variable assignment, input/output statements, and
//! arithmetic/relational expressions with standard precedence. It parses
//! source text into an abstract syntax tree and executes it directly, with no
//! intermediate representation.
//!
//! The grammar evolved through three revisions; a [`Dialect`] value selects
//! which revision's keyword spellings and statement rules are in force.
//!
//! [`Dialect`]: interpreter::dialect::Dialect

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        dialect::Dialect,
        evaluator::core::Context,
        lexer::{Token, tokenize},
        parser::statement::parse_statement,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches metadata (such as source locations) to AST nodes for error
///   reporting.
/// - Pretty-prints nodes so that printing and re-parsing is the identity.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code execution. It exposes the
/// components behind the crate-level entry points.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable helpers used by the evaluator and value
/// types for converting between integer and floating-point representations
/// without silent data loss.
pub mod util;

/// Parses a full program into its statement list.
///
/// Lexes the source, then parses statement by statement. Empty lines are
/// skipped; every statement must end at a newline or at the end of input.
///
/// # Errors
/// Returns the first `ParseError` encountered while lexing or parsing.
///
/// # Examples
/// ```
/// use jnr::{interpreter::dialect::Dialect, parse_program};
///
/// let program = parse_program("x = 1\n\nshow x + 2", Dialect::Show).unwrap();
/// assert_eq!(program.len(), 2);
///
/// // A second comparison operator in one expression is rejected.
/// assert!(parse_program("show 1 < 2 < 3", Dialect::Show).is_err());
/// ```
pub fn parse_program(source: &str, dialect: Dialect) -> Result<Vec<Statement>, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let mut program = Vec::new();

    while iter.peek().is_some() {
        while let Some((Token::NewLine, _)) = iter.peek() {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }

        program.push(parse_statement(&mut iter, dialect)?);

        match iter.peek() {
            None | Some((Token::NewLine, _)) => {},
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                  line:  *line, });
            },
        }
    }

    Ok(program)
}

/// Parses and executes a program.
///
/// The program's `ask` statements read lines from `input` and its `show`
/// statements write lines to `output`. Execution is strictly sequential; the
/// first error stops the run, and effects of earlier statements (output
/// already written, variables already bound) are not rolled back.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use jnr::{interpreter::dialect::Dialect, run_program};
///
/// let mut input = Cursor::new("");
/// let mut output = Vec::new();
/// run_program("x = 2 + 2\nshow x", Dialect::Show, &mut input, &mut output).unwrap();
/// assert_eq!(output, b"4\n");
///
/// // Example with an intentional error (unbound variable).
/// let mut input = Cursor::new("");
/// let mut output = Vec::new();
/// let res = run_program("show y", Dialect::Show, &mut input, &mut output);
/// assert!(res.is_err());
/// ```
pub fn run_program(source: &str,
                   dialect: Dialect,
                   input: &mut dyn std::io::BufRead,
                   output: &mut dyn std::io::Write)
                   -> Result<(), Box<dyn std::error::Error>> {
    let program = parse_program(source, dialect)?;

    let mut context = Context::new(input, output);
    context.run(&program)?;

    Ok(())
}
