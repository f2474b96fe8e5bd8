use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        dialect::Dialect,
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
        value::VarType,
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an output statement (`show` / `print` per dialect),
/// - an input statement (`ask` / `input`), optionally prefixed by a type
///   keyword,
/// - an assignment,
/// - an expression used as a statement.
///
/// The statement form is decided from the leading token; an identifier needs
/// one further token of lookahead to split assignments from expression
/// statements. The caller handles statement terminators and empty lines.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `dialect`: The grammar revision in force.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Show | Token::Print, _)) => parse_show(tokens, dialect),
        Some((Token::Ask | Token::Input, line)) => {
            let line = *line;
            parse_ask(tokens, dialect, None, line)
        },
        Some((Token::Int | Token::Char | Token::Real, _)) => parse_typed_ask(tokens, dialect),
        Some((Token::Identifier(_), _)) => {
            if let Some(statement) = parse_assignment(tokens, dialect)? {
                return Ok(statement);
            }
            parse_expression_statement(tokens, dialect)
        },
        _ => parse_expression_statement(tokens, dialect),
    }
}

/// Parses an output statement.
///
/// The keyword must match the dialect's spelling (`show`, or `print` in the
/// first grammar revision). In the comma-separated revision, further
/// expressions may follow, each introduced by `,`; the other revisions take
/// exactly one expression.
///
/// Grammar: `output := SHOW expression ("," expression)*`
///
/// # Errors
/// `ParseError::UnexpectedToken` when the keyword does not belong to the
/// active dialect.
fn parse_show<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (keyword, line) = match tokens.next() {
        Some((token @ (Token::Show | Token::Print), line)) => (token, *line),
        _ => unreachable!(),
    };

    let legacy = matches!(keyword, Token::Print);
    if legacy != dialect.legacy_keywords() {
        return Err(ParseError::UnexpectedToken { token: format!("this dialect spells the output statement '{}'",
                                                                dialect.output_keyword()),
                                                 line });
    }

    let mut exprs = vec![parse_expression(tokens, dialect)?];
    if dialect.show_lists() {
        while let Some((Token::Comma, _)) = tokens.peek() {
            tokens.next();
            exprs.push(parse_expression(tokens, dialect)?);
        }
    }

    Ok(Statement::Show { exprs, line })
}

/// Parses an input statement, with `ty` carrying the type keyword when the
/// caller already consumed one. `start_line` is the line of the statement's
/// first token, used when input ends before the input keyword.
///
/// Grammar: `input := (INT | CHAR | REAL)? ASK identifier`
///
/// # Errors
/// - `ParseError::UnexpectedToken` when the keyword spelling does not belong
///   to the active dialect or the target is not an identifier.
/// - `ParseError::UnexpectedEndOfInput` when the target identifier is
///   missing.
fn parse_ask<'a, I>(tokens: &mut Peekable<I>,
                    dialect: Dialect,
                    ty: Option<VarType>,
                    start_line: usize)
                    -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (keyword, line) = match tokens.next() {
        Some((token @ (Token::Ask | Token::Input), line)) => (token, *line),
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '{}' after type keyword, found {tok:?}",
                                                                    dialect.input_keyword()),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: start_line }),
    };

    let legacy = matches!(keyword, Token::Input);
    if legacy != dialect.legacy_keywords() {
        return Err(ParseError::UnexpectedToken { token: format!("this dialect spells the input statement '{}'",
                                                                dialect.input_keyword()),
                                                 line });
    }

    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(Statement::Ask { name: name.clone(),
                                                                  ty,
                                                                  line }),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses an input statement led by a type keyword (`int ask x`).
fn parse_typed_ask<'a, I>(tokens: &mut Peekable<I>, dialect: Dialect) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (ty, line) = match tokens.next() {
        Some((Token::Int, line)) => (VarType::Int, *line),
        Some((Token::Char, line)) => (VarType::Char, *line),
        Some((Token::Real, line)) => (VarType::Real, *line),
        _ => unreachable!(),
    };
    parse_ask(tokens, dialect, Some(ty), line)
}

/// Parses an assignment statement.
///
/// Supported form: `<identifier> = <expression>`
///
/// The function performs a limited lookahead: if the next token is an
/// identifier and the following token is `=`, an assignment is parsed. If no
/// assignment pattern matches, the function returns `Ok(None)` and does not
/// consume tokens, leaving an expression statement as the fallback.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a potential identifier.
/// - `dialect`: The grammar revision in force.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` when an assignment is parsed,
/// - `Ok(None)` if no assignment is present.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           dialect: Dialect)
                           -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(_), _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();
        if let Some((Token::Equals, line)) = lookahead.peek() {
            let line = *line;
            let name = match tokens.next() {
                Some((Token::Identifier(n), _)) => n.clone(),
                _ => unreachable!(),
            };
            tokens.next();

            let value = parse_expression(tokens, dialect)?;
            return Ok(Some(Statement::Assignment { name, value, line }));
        }
    }
    Ok(None)
}

/// Parses a bare expression as a statement; the result is discarded at
/// execution time.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>,
                                     dialect: Dialect)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let current_line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr: Expr = parse_expression(tokens, dialect)?;

    Ok(Statement::Expression { expr,
                               line: current_line })
}
