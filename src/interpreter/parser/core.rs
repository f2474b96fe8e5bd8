use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        dialect::Dialect,
        lexer::Token,
        parser::binary::{parse_additive, parse_relational},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level the active dialect defines and recursively
/// descends through the precedence hierarchy. In dialects without comparison
/// operators the additive level is the lowest.
///
/// Grammar: `expression := relational` (or `additive` in the first grammar
/// revision)
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `dialect`: The grammar revision in force.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if dialect.has_comparisons() {
        parse_relational(tokens, dialect)
    } else {
        parse_additive(tokens, dialect)
    }
}
