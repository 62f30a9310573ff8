use crate::{
    error::ConversionError,
    interpreter::{
        lexer::{Token, TokenKind, validate},
        symbols::{OperatorDescriptor, OperatorKind},
    },
};

/// Result type used by the converter.
pub type ConvertResult<T> = Result<T, ConversionError>;

/// One element of a postfix sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum PostfixItem {
    /// A literal operand.
    Number(f64),
    /// An operator or function, with the text it was written as.
    Operator {
        /// Which operator.
        kind: OperatorKind,
        /// The source spelling, e.g. `×` for [`OperatorKind::Multiply`].
        text: String,
    },
}

impl PostfixItem {
    /// Builds an operator item spelled with its canonical symbol.
    #[must_use]
    pub fn operator(kind: OperatorKind) -> Self {
        Self::Operator { kind,
                         text: kind.symbol().to_string() }
    }
}

impl std::fmt::Display for PostfixItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator { kind, .. } => write!(f, "{kind}"),
        }
    }
}

/// Formats a postfix sequence as space-separated items.
///
/// Operators are printed with their canonical symbol, so `×` shows as `*`.
///
/// # Example
/// ```
/// use shuntcalc::interpreter::{
///     converter::{convert, render_postfix},
///     lexer::tokenize,
/// };
///
/// let postfix = convert(&tokenize("(1 + 2) × 0.5")).unwrap();
/// assert_eq!(render_postfix(&postfix), "1 2 + 0.5 *");
/// ```
#[must_use]
pub fn render_postfix(items: &[PostfixItem]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

/// Decides whether the operator on top of the stack must be moved to the
/// output before `incoming` is pushed.
///
/// The top yields when it binds strictly tighter, or equally tight and the
/// incoming operator is left-associative. A right-associative operator
/// therefore never pops an equal-precedence top.
///
/// # Example
/// ```
/// use shuntcalc::interpreter::{
///     converter::yields_to,
///     symbols::{Associativity, OperatorDescriptor, OperatorKind, describe},
/// };
///
/// let minus = describe(OperatorKind::Minus);
/// assert!(yields_to(minus, minus));
///
/// let power = OperatorDescriptor::new(5, Associativity::Right, 2);
/// assert!(!yields_to(power, power));
/// assert!(!yields_to(power, describe(OperatorKind::Multiply)));
/// ```
#[must_use]
pub const fn yields_to(incoming: OperatorDescriptor, top: OperatorDescriptor) -> bool {
    top.precedence > incoming.precedence
    || (top.precedence == incoming.precedence && incoming.is_left_associative())
}

/// Rewrites an infix token sequence into postfix order (shunting-yard).
///
/// The tokens are validated first with [`validate`]. On failure nothing of
/// the partial output is returned.
///
/// # Errors
/// - [`ConversionError::UndefinedSymbol`] if any token is undefined.
/// - [`ConversionError::UnmatchedParenthesis`] if the parentheses differ in
///   count, or a `)` has no `(` to close, or a `(` is never closed.
/// - [`ConversionError::InvalidNumber`] if a number token does not parse,
///   such as `1.2.3`.
///
/// # Example
/// ```
/// use shuntcalc::interpreter::{
///     converter::{PostfixItem, convert},
///     lexer::tokenize,
///     symbols::OperatorKind,
/// };
///
/// let postfix = convert(&tokenize("2+3*4")).unwrap();
/// assert_eq!(postfix,
///            [PostfixItem::Number(2.0),
///             PostfixItem::Number(3.0),
///             PostfixItem::Number(4.0),
///             PostfixItem::operator(OperatorKind::Multiply),
///             PostfixItem::operator(OperatorKind::Plus)]);
/// ```
pub fn convert(tokens: &[Token]) -> ConvertResult<Vec<PostfixItem>> {
    validate(tokens)?;

    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<&Token> = Vec::new();

    for token in tokens {
        let Some(kind) = token.kind.operator() else {
            output.push(PostfixItem::Number(parse_number(&token.text)?));
            continue;
        };

        match kind {
            OperatorKind::LeftParen => stack.push(token),
            OperatorKind::RightParen => close_group(&mut stack, &mut output)?,
            _ => {
                let incoming = kind.descriptor();
                while let Some(top) = stack.last()
                      && let Some(top_kind) = top.kind.operator()
                      && !top_kind.is_parenthesis()
                      && yields_to(incoming, top_kind.descriptor())
                {
                    log::trace!("'{}' pops '{}'", token.text, top.text);
                    output.push(to_item(top_kind, top));
                    stack.pop();
                }
                stack.push(token);
            },
        }
    }

    while let Some(top) = stack.pop() {
        match top.kind.operator() {
            Some(kind) if !kind.is_parenthesis() => output.push(to_item(kind, top)),
            _ => {
                log::debug!("unclosed '{}' left on the operator stack", top.text);
                return Err(ConversionError::UnmatchedParenthesis);
            },
        }
    }

    log::debug!("postfix: {}", render_postfix(&output));
    Ok(output)
}

/// Pops operators to the output until the matching `(`, which is discarded.
fn close_group(stack: &mut Vec<&Token>, output: &mut Vec<PostfixItem>) -> ConvertResult<()> {
    loop {
        let Some(top) = stack.pop() else {
            log::debug!("')' without a matching '('");
            return Err(ConversionError::UnmatchedParenthesis);
        };
        match top.kind {
            TokenKind::LeftParen => return Ok(()),
            _ => match top.kind.operator() {
                Some(kind) if !kind.is_parenthesis() => output.push(to_item(kind, top)),
                _ => return Err(ConversionError::UnmatchedParenthesis),
            },
        }
    }
}

fn to_item(kind: OperatorKind, token: &Token) -> PostfixItem {
    PostfixItem::Operator { kind,
                            text: token.text.clone() }
}

fn parse_number(text: &str) -> ConvertResult<f64> {
    text.parse().map_err(|_| ConversionError::InvalidNumber { literal: text.to_string() })
}
