/// Selects which revision of the grammar is in force for a run.
///
/// The token set and AST are shared by all revisions; the dialect only
/// controls the statement keywords the parser accepts, whether comparison
/// operators are part of the expression grammar, and whether an output
/// statement takes a comma-separated list of expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// The first revision: `print` and `input` keywords, arithmetic
    /// expressions only.
    Print,
    /// The second revision: `show` and `ask` keywords, comparison operators,
    /// and comma-separated expression lists in `show`.
    ShowList,
    /// The third and current revision: `show` and `ask` keywords and
    /// comparison operators, but exactly one expression per `show`.
    #[default]
    Show,
}

impl Dialect {
    /// Returns `true` when comparison operators belong to the expression
    /// grammar of this dialect.
    ///
    /// ## Example
    /// ```
    /// use jnr::interpreter::dialect::Dialect;
    ///
    /// assert!(Dialect::Show.has_comparisons());
    /// assert!(!Dialect::Print.has_comparisons());
    /// ```
    #[must_use]
    pub const fn has_comparisons(self) -> bool {
        !matches!(self, Self::Print)
    }

    /// Returns `true` when an output statement may carry a comma-separated
    /// list of expressions.
    #[must_use]
    pub const fn show_lists(self) -> bool {
        matches!(self, Self::ShowList)
    }

    /// Returns `true` when this dialect spells its statements `print` and
    /// `input` instead of `show` and `ask`.
    #[must_use]
    pub const fn legacy_keywords(self) -> bool {
        matches!(self, Self::Print)
    }

    /// The output-statement keyword of this dialect, for diagnostics.
    #[must_use]
    pub const fn output_keyword(self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::ShowList | Self::Show => "show",
        }
    }

    /// The input-statement keyword of this dialect, for diagnostics.
    #[must_use]
    pub const fn input_keyword(self) -> &'static str {
        match self {
            Self::Print => "input",
            Self::ShowList | Self::Show => "ask",
        }
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "print" => Ok(Self::Print),
            "show-list" => Ok(Self::ShowList),
            "show" => Ok(Self::Show),
            other => Err(format!("unknown dialect '{other}', expected one of: print, show-list, show")),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Print => "print",
            Self::ShowList => "show-list",
            Self::Show => "show",
        };
        write!(f, "{name}")
    }
}
