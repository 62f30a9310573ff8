use crate::interpreter::symbols::OperatorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum EvalError {
    /// An operator found fewer values on the operand stack than it consumes.
    InsufficientOperands {
        /// The operator being applied.
        operator:  OperatorKind,
        /// How many operands the operator consumes.
        required:  usize,
        /// How many operands were on the stack.
        available: usize,
    },
    /// The sequence did not reduce to exactly one value.
    MalformedExpression {
        /// Number of values left on the operand stack when evaluation stopped.
        depth: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientOperands { operator,
                                         required,
                                         available, } => write!(f,
                                                                "Operator '{operator}' requires {required} operand(s) but only {available} available."),
            Self::MalformedExpression { depth } => write!(f,
                                                          "Malformed expression: {depth} value(s) left after evaluation, expected exactly 1."),
        }
    }
}

impl std::error::Error for EvalError {}
