#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning tokens into postfix
/// order.
pub enum ConversionError {
    /// The expression contains characters outside the supported
    /// number/operator/parenthesis set.
    UndefinedSymbol {
        /// Every offending substring, in input order.
        symbols: Vec<String>,
    },
    /// The parentheses do not pair up, either by count or by placement.
    UnmatchedParenthesis,
    /// A run of digits and decimal points is not a valid number.
    InvalidNumber {
        /// The literal as written in the input.
        literal: String,
    },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedSymbol { symbols } => {
                let listed = symbols.iter()
                                    .map(|s| format!("'{s}'"))
                                    .collect::<Vec<_>>()
                                    .join(", ");
                write!(f, "Undefined symbol(s) in expression: {listed}.")
            },
            Self::UnmatchedParenthesis => write!(f, "Unmatched parenthesis in expression."),
            Self::InvalidNumber { literal } => write!(f, "Invalid number literal '{literal}'."),
        }
    }
}

impl std::error::Error for ConversionError {}
