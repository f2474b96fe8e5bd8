/// The dialect module selects which grammar revision is in force.
///
/// The language evolved through three revisions with overlapping token sets.
/// Rather than maintaining parallel implementations, the lexer and AST are
/// shared and a single configuration value picks the keyword spellings, the
/// availability of comparison operators, and the output-statement separator
/// rule.
///
/// # Responsibilities
/// - Defines the `Dialect` enum, one value per grammar revision.
/// - Answers the parser's questions about what the active grammar permits.
pub mod dialect;
/// The environment module stores variable bindings for one program run.
///
/// The environment maps identifiers to their declared type and current value.
/// It is created empty at the start of a run, mutated by assignment and input
/// statements, and discarded when the run ends.
///
/// # Responsibilities
/// - Binds and looks up variables, reporting unbound reads.
/// - Fixes each variable's type at its first binding and rejects re-binding
///   to an incompatible type.
pub mod env;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and comparison operations, manages variable state, and
/// drives the input and output streams. It is the core execution engine of
/// the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Executes assignment, output, and input statements in source order.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric and character literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Applies operator precedence and the active dialect's statement rules.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution: integers,
/// floating-point numbers, and characters. It also provides methods for type
/// classification and safe numeric promotion.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `VarType` type tags.
/// - Implements conversion and promotion between numeric types.
pub mod value;
