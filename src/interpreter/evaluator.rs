use crate::{
    error::EvalError,
    interpreter::{converter::PostfixItem, symbols::OperatorKind},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a postfix sequence with an operand stack.
///
/// Numbers are pushed. Each operator pops the operands it needs, right-hand
/// side first, and pushes its result, so `8 2 /` is `8 / 2`. Trigonometric
/// functions read their operand in degrees. Division by zero is not an error
/// and yields infinity or NaN.
///
/// The sequence does not have to come from the converter; any hand-built
/// sequence is checked.
///
/// # Errors
/// - [`EvalError::InsufficientOperands`] when an operator finds fewer values
///   on the stack than it consumes.
/// - [`EvalError::MalformedExpression`] when the sequence does not reduce to
///   exactly one value, or contains a parenthesis.
///
/// # Example
/// ```
/// use shuntcalc::{
///     error::EvalError,
///     interpreter::{converter::PostfixItem, evaluator::evaluate, symbols::OperatorKind},
/// };
///
/// let items = [PostfixItem::Number(8.0),
///              PostfixItem::Number(2.0),
///              PostfixItem::operator(OperatorKind::Divide)];
/// assert_eq!(evaluate(&items), Ok(4.0));
///
/// let dangling = [PostfixItem::operator(OperatorKind::Plus)];
/// assert_eq!(evaluate(&dangling),
///            Err(EvalError::InsufficientOperands { operator:  OperatorKind::Plus,
///                                                  required:  2,
///                                                  available: 0, }));
/// ```
pub fn evaluate(items: &[PostfixItem]) -> EvalResult<f64> {
    let mut operands: Vec<f64> = Vec::with_capacity(items.len());

    for item in items {
        match item {
            PostfixItem::Number(value) => operands.push(*value),
            PostfixItem::Operator { kind, text } => {
                let value = apply(*kind, &mut operands)?;
                log::trace!("'{text}' -> {value}");
                operands.push(value);
            },
        }
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        rest => {
            log::debug!("{} value(s) left on the operand stack", rest.len());
            Err(EvalError::MalformedExpression { depth: rest.len() })
        },
    }
}

/// Pops the operands of `kind` from the stack and computes its result.
fn apply(kind: OperatorKind, operands: &mut Vec<f64>) -> EvalResult<f64> {
    let required = kind.descriptor().operand_count;
    if operands.len() < required {
        return Err(EvalError::InsufficientOperands { operator: kind,
                                                     required,
                                                     available: operands.len() });
    }

    let args = operands.split_off(operands.len() - required);
    match (kind, args.as_slice()) {
        (OperatorKind::Plus, [left, right]) => Ok(left + right),
        (OperatorKind::Minus, [left, right]) => Ok(left - right),
        (OperatorKind::Multiply, [left, right]) => Ok(left * right),
        (OperatorKind::Divide, [left, right]) => Ok(left / right),
        (OperatorKind::Sine, [degrees]) => Ok(degrees.to_radians().sin()),
        (OperatorKind::Cosine, [degrees]) => Ok(degrees.to_radians().cos()),
        _ => Err(EvalError::MalformedExpression { depth: operands.len() }),
    }
}
