/// Every symbol that owns an entry in the operator table.
///
/// Parentheses are included so that precedence lookups stay uniform, but the
/// converter matches them explicitly and never pops them by precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`, also written `×`
    Multiply,
    /// `/`, also written `÷`
    Divide,
    /// `sin`, operand in degrees
    Sine,
    /// `cos`, operand in degrees
    Cosine,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

/// Grouping direction for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` would group as `a ^ (b ^ c)`.
    Right,
}

/// Static properties of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorDescriptor {
    /// Higher binds tighter. Parentheses sit at the top as a sentinel.
    pub precedence:    u8,
    /// Tie-break for equal precedence.
    pub associativity: Associativity,
    /// Number of operands consumed during evaluation.
    pub operand_count: usize,
}

impl OperatorDescriptor {
    /// Creates a descriptor from its three properties.
    #[must_use]
    pub const fn new(precedence: u8, associativity: Associativity, operand_count: usize) -> Self {
        Self { precedence,
               associativity,
               operand_count }
    }

    /// Returns `true` for left-associative operators.
    #[must_use]
    pub const fn is_left_associative(&self) -> bool {
        matches!(self.associativity, Associativity::Left)
    }
}

const ADDITIVE: OperatorDescriptor = OperatorDescriptor::new(1, Associativity::Left, 2);
const MULTIPLICATIVE: OperatorDescriptor = OperatorDescriptor::new(2, Associativity::Left, 2);
const FUNCTION: OperatorDescriptor = OperatorDescriptor::new(3, Associativity::Left, 1);
const OPEN_PAREN: OperatorDescriptor = OperatorDescriptor::new(4, Associativity::Right, 0);
const CLOSE_PAREN: OperatorDescriptor = OperatorDescriptor::new(4, Associativity::Left, 0);

/// Looks up the descriptor of an operator.
///
/// | Operator | Level | Associativity | Operands |
/// |---|---|---|---|
/// | `+` `-` | 1 | left | 2 |
/// | `*` `/` | 2 | left | 2 |
/// | `sin` `cos` | 3 | left | 1 |
/// | `(` | 4 | right | 0 |
/// | `)` | 4 | left | 0 |
///
/// # Example
/// ```
/// use shuntcalc::interpreter::symbols::{Associativity, OperatorKind, describe};
///
/// let times = describe(OperatorKind::Multiply);
/// assert_eq!(times.precedence, 2);
/// assert_eq!(times.associativity, Associativity::Left);
/// assert_eq!(times.operand_count, 2);
///
/// assert_eq!(describe(OperatorKind::Sine).operand_count, 1);
/// ```
#[must_use]
pub const fn describe(kind: OperatorKind) -> OperatorDescriptor {
    match kind {
        OperatorKind::Plus | OperatorKind::Minus => ADDITIVE,
        OperatorKind::Multiply | OperatorKind::Divide => MULTIPLICATIVE,
        OperatorKind::Sine | OperatorKind::Cosine => FUNCTION,
        OperatorKind::LeftParen => OPEN_PAREN,
        OperatorKind::RightParen => CLOSE_PAREN,
    }
}

impl OperatorKind {
    /// Every kind, in table order.
    pub const ALL: [Self; 8] = [Self::Plus,
                                Self::Minus,
                                Self::Multiply,
                                Self::Divide,
                                Self::Sine,
                                Self::Cosine,
                                Self::LeftParen,
                                Self::RightParen];

    /// The canonical spelling used when printing postfix sequences and errors.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Sine => "sin",
            Self::Cosine => "cos",
            Self::LeftParen => "(",
            Self::RightParen => ")",
        }
    }

    /// Returns `true` for `(` and `)`.
    #[must_use]
    pub const fn is_parenthesis(self) -> bool {
        matches!(self, Self::LeftParen | Self::RightParen)
    }

    /// Shorthand for `describe(self)`.
    #[must_use]
    pub const fn descriptor(self) -> OperatorDescriptor {
        describe(self)
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
