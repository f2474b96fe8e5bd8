use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language, across all
/// grammar revisions; the parser decides which of them the active dialect
/// accepts.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Character literal tokens, such as `'a'`.
    #[regex(r"'[^'\n]'", parse_char)]
    CharLit(char),
    /// The `int` type keyword.
    #[token("int")]
    Int,
    /// The `char` type keyword.
    #[token("char")]
    Char,
    /// The `real` type keyword; `float` is an older spelling of the same
    /// keyword.
    #[token("real")]
    #[token("float")]
    Real,
    /// The `show` output keyword.
    #[token("show")]
    Show,
    /// The `print` output keyword (first grammar revision).
    #[token("print")]
    Print,
    /// The `ask` input keyword.
    #[token("ask")]
    Ask,
    /// The `input` input keyword (first grammar revision).
    #[token("input")]
    Input,
    /// Identifier tokens; variable names such as `x` or `total`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!` on its own. The token exists in the token set but no statement or
    /// expression form uses it, so the parser reports it as unexpected.
    #[token("!")]
    Bang,
    /// Statement separator; `\n` is significant.
    #[token("\n", count_newline)]
    NewLine,
    /// Tabs, spaces and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

fn count_newline(lex: &mut logos::Lexer<Token>) {
    lex.extras.line += 1;
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice. Fails (and so
/// rejects the token) when the digits overflow an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Extracts the character between the quotes of a `'x'` literal.
fn parse_char(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().nth(1)
}

/// Tokenizes a full source string.
///
/// Produces the token sequence in source order, each paired with the line it
/// appeared on. Lexing stops at the first unrecognized character or malformed
/// literal.
///
/// # Errors
/// - `ParseError::MalformedLiteral` when the offending slice starts a literal
///   (a quote or a digit) that cannot be completed.
/// - `ParseError::UnrecognizedCharacter` for any other rejected character.
///
/// # Example
/// ```
/// use jnr::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1\nshow x").unwrap();
/// assert_eq!(tokens[1], (Token::Equals, 1));
/// assert_eq!(tokens[4], (Token::Show, 2));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            let line = lexer.extras.line;
            return Err(if slice.starts_with(|c: char| c == '\'' || c.is_ascii_digit()) {
                ParseError::MalformedLiteral { literal: slice.to_string(),
                                               line }
            } else {
                ParseError::UnrecognizedCharacter { token: slice.to_string(),
                                                    line }
            });
        }
    }

    Ok(tokens)
}
