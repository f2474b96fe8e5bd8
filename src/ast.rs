use crate::interpreter::dialect::Dialect;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constant values that can appear directly in
/// source code: integer, real and character literals. It is used in the AST to
/// represent literal expressions and carries no further structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A character literal such as `'a'`.
    Char(char),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<char> for LiteralValue {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl std::fmt::Display for LiteralValue {
    /// Writes the literal in its source form, so that re-lexing the printed
    /// text produces the same token. Real literals therefore always keep a
    /// decimal point or exponent and character literals keep their quotes.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Char(c) => write!(f, "'{c}'"),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers literals, variable references, unary negation and binary
/// operations. Each node exclusively owns its children, so the tree is acyclic
/// by construction. Parenthesized sub-expressions parse to the inner
/// expression directly; the `Display` impl reinserts parentheses from operator
/// precedence when printing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use jnr::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }

    /// Binding strength of this node when printed; higher binds tighter.
    const fn precedence(&self) -> u8 {
        match self {
            Self::BinaryOp { op, .. } => op.precedence(),
            Self::UnaryOp { .. } => 4,
            Self::Literal { .. } | Self::Variable { .. } => 5,
        }
    }

    fn fmt_child(child: &Self,
                 needs_parens: bool,
                 f: &mut std::fmt::Formatter<'_>)
                 -> std::fmt::Result {
        if needs_parens {
            write!(f, "({child})")
        } else {
            write!(f, "{child}")
        }
    }
}

impl std::fmt::Display for Expr {
    /// Pretty-prints the expression. Parentheses are emitted exactly where
    /// precedence and associativity require them, so parsing the printed text
    /// yields a structurally identical tree.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, expr, .. } => {
                write!(f, "{op}")?;
                Self::fmt_child(expr, expr.precedence() < 4, f)
            },
            Self::BinaryOp { left, op, right, .. } => {
                let prec = op.precedence();
                // Comparisons are non-associative, so an equal-precedence
                // left child keeps its parentheses there too.
                let left_parens = if op.is_comparison() {
                    left.precedence() <= prec
                } else {
                    left.precedence() < prec
                };
                Self::fmt_child(left, left_parens, f)?;
                write!(f, " {op} ")?;
                // Binary operators are left-associative or non-associative,
                // so an equal-precedence right child keeps its parentheses.
                Self::fmt_child(right, right.precedence() <= prec, f)
            },
        }
    }
}

/// Represents a top-level statement.
///
/// Statements are the units parsed from input lines; a program is an ordered
/// sequence of them and executes in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An output statement (`show` / `print`) writing one line of text.
    Show {
        /// The expressions to evaluate and write, in source order. Holds more
        /// than one element only in the comma-separated grammar revision.
        exprs: Vec<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An input statement (`ask` / `input`) reading one value into a
    /// variable.
    Ask {
        /// The name of the target variable.
        name: String,
        /// The declared type, when the statement is prefixed with a type
        /// keyword.
        ty:   Option<crate::interpreter::value::VarType>,
        /// Line number in the source code.
        line: usize,
    },
    /// A standalone expression evaluated with the result discarded.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Returns an adapter that prints the statement with the keyword
    /// spellings of `dialect`, so the printed text reparses under that same
    /// dialect.
    ///
    /// ## Example
    /// ```
    /// use jnr::{interpreter::dialect::Dialect, parse_program};
    ///
    /// let program = parse_program("print 1 + 2", Dialect::Print).unwrap();
    ///
    /// assert_eq!(program[0].display_with(Dialect::Print).to_string(),
    ///            "print 1 + 2");
    /// ```
    #[must_use]
    pub const fn display_with(&self, dialect: Dialect) -> StatementDisplay<'_> {
        StatementDisplay { statement: self,
                           dialect }
    }
}

/// Prints a [`Statement`] with a chosen dialect's keyword spellings.
///
/// Returned by [`Statement::display_with`].
pub struct StatementDisplay<'a> {
    statement: &'a Statement,
    dialect:   Dialect,
}

impl std::fmt::Display for StatementDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.statement {
            Statement::Assignment { name, value, .. } => write!(f, "{name} = {value}"),
            Statement::Show { exprs, .. } => {
                write!(f, "{} ", self.dialect.output_keyword())?;
                for (index, expr) in exprs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{expr}")?;
                }
                Ok(())
            },
            Statement::Ask { name, ty, .. } => {
                let keyword = self.dialect.input_keyword();
                match ty {
                    Some(ty) => write!(f, "{ty} {keyword} {name}"),
                    None => write!(f, "{keyword} {name}"),
                }
            },
            Statement::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

impl std::fmt::Display for Statement {
    /// Prints the statement using the current revision's `show`/`ask`
    /// keyword spelling.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display_with(Dialect::Show).fmt(f)
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// Binding strength of the operator; higher binds tighter.
    ///
    /// ## Example
    /// ```
    /// use jnr::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert!(BinaryOperator::Add.precedence() > BinaryOperator::Less.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Less
            | Self::Greater
            | Self::LessEqual
            | Self::GreaterEqual
            | Self::Equal
            | Self::NotEqual => 1,
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div | Self::Mod => 3,
        }
    }

    /// Returns `true` when the operator belongs to the non-associative
    /// comparison class.
    ///
    /// ## Example
    /// ```
    /// use jnr::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Less.is_comparison());
    /// assert!(!BinaryOperator::Add.is_comparison());
    /// ```
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
