use crate::error::{ConversionError, EvalError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Failure of the whole string-to-number pipeline.
///
/// Wraps the error of whichever stage stopped the pipeline so callers can
/// tell malformed input apart from an unreducible postfix sequence.
pub enum ExpressionError {
    /// Tokenizing or converting to postfix failed.
    Conversion(ConversionError),
    /// Evaluating the postfix sequence failed.
    Evaluation(EvalError),
}

impl From<ConversionError> for ExpressionError {
    fn from(error: ConversionError) -> Self {
        Self::Conversion(error)
    }
}

impl From<EvalError> for ExpressionError {
    fn from(error: EvalError) -> Self {
        Self::Evaluation(error)
    }
}

impl std::fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conversion(e) => write!(f, "{e}"),
            Self::Evaluation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ExpressionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Conversion(e) => Some(e),
            Self::Evaluation(e) => Some(e),
        }
    }
}
