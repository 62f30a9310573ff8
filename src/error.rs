/// Conversion errors.
///
/// Defines the errors raised while validating tokens and rewriting them into
/// postfix order: unknown symbols, unbalanced parentheses and number literals
/// that do not parse.
pub mod conversion_error;
/// Evaluation errors.
///
/// Contains the errors raised by the postfix stack machine when an operator
/// runs out of operands or the sequence does not reduce to a single value.
pub mod eval_error;
/// Pipeline errors.
///
/// Joins conversion and evaluation failures into one type for callers that
/// go straight from a string to a number.
pub mod expression_error;

pub use conversion_error::ConversionError;
pub use eval_error::EvalError;
pub use expression_error::ExpressionError;
