use logos::Logos;

use crate::{
    error::ConversionError,
    interpreter::{converter::ConvertResult, symbols::OperatorKind},
};

/// Raw lexical classes recognised in a whitespace-free expression.
///
/// Anything the lexer cannot match comes back as a lexer error and is turned
/// into a [`TokenKind::Undefined`] token by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// A run of digits and decimal points. Validity is checked on conversion.
    #[regex(r"[0-9.]+")]
    Number,
    /// `sin`
    #[token("sin")]
    Sine,
    /// `cos`
    #[token("cos")]
    Cosine,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*` or `×`
    #[token("*")]
    #[token("×")]
    Star,
    /// `/` or `÷`
    #[token("/")]
    #[token("÷")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Digits and decimal points, such as `3.14`.
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*` or `×`
    Multiply,
    /// `/` or `÷`
    Divide,
    /// `sin`
    Sine,
    /// `cos`
    Cosine,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Anything outside the supported set.
    Undefined,
}

impl TokenKind {
    /// Maps the token kind to its operator table entry.
    ///
    /// Returns `None` for numbers and undefined symbols.
    #[must_use]
    pub const fn operator(self) -> Option<OperatorKind> {
        match self {
            Self::Plus => Some(OperatorKind::Plus),
            Self::Minus => Some(OperatorKind::Minus),
            Self::Multiply => Some(OperatorKind::Multiply),
            Self::Divide => Some(OperatorKind::Divide),
            Self::Sine => Some(OperatorKind::Sine),
            Self::Cosine => Some(OperatorKind::Cosine),
            Self::LeftParen => Some(OperatorKind::LeftParen),
            Self::RightParen => Some(OperatorKind::RightParen),
            Self::Number | Self::Undefined => None,
        }
    }
}

/// A lexical unit of an expression together with the text it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The literal substring, e.g. `"123"`, `"+"` or `"sin"`.
    pub text: String,
    /// What the substring stands for.
    pub kind: TokenKind,
}

impl Token {
    /// Creates a token from its source text and classification.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self { text: text.into(),
               kind }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

const fn classify(lexeme: Lexeme) -> TokenKind {
    match lexeme {
        Lexeme::Number => TokenKind::Number,
        Lexeme::Sine => TokenKind::Sine,
        Lexeme::Cosine => TokenKind::Cosine,
        Lexeme::Plus => TokenKind::Plus,
        Lexeme::Minus => TokenKind::Minus,
        Lexeme::Star => TokenKind::Multiply,
        Lexeme::Slash => TokenKind::Divide,
        Lexeme::LParen => TokenKind::LeftParen,
        Lexeme::RParen => TokenKind::RightParen,
    }
}

/// Splits an expression into tokens.
///
/// Whitespace is removed before scanning, so `"1 2"` reads as the single
/// number `12`. Digits and decimal points group into one number, `sin` and
/// `cos` are read as functions wherever they appear, and every other symbol
/// stands alone. This function never fails: each unsupported character comes
/// back as its own [`TokenKind::Undefined`] token for [`validate`] to report,
/// so `sinx` reads as `sin` followed by the undefined `x`.
///
/// # Example
/// ```
/// use shuntcalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("12 * sin(3.5)");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number,
///             TokenKind::Multiply,
///             TokenKind::Sine,
///             TokenKind::LeftParen,
///             TokenKind::Number,
///             TokenKind::RightParen]);
/// assert_eq!(tokens[4].text, "3.5");
/// ```
#[must_use]
pub fn tokenize(expression: &str) -> Vec<Token> {
    let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(&compact);

    while let Some(lexeme) = lexer.next() {
        let text = lexer.slice();
        match lexeme {
            Ok(lexeme) => tokens.push(Token::new(text, classify(lexeme))),
            // A failed partial match such as `si` may span several characters.
            Err(()) => tokens.extend(text.chars()
                                         .map(|c| Token::new(c.to_string(), TokenKind::Undefined))),
        }
    }

    log::trace!("tokenized {expression:?} into {} token(s)", tokens.len());
    tokens
}

/// Checks a token sequence before conversion.
///
/// # Errors
/// - [`ConversionError::UndefinedSymbol`] listing every undefined token, in
///   order, if there is at least one.
/// - [`ConversionError::UnmatchedParenthesis`] if the number of `(` differs
///   from the number of `)`.
///
/// Placement of the parentheses is not checked here; [`convert`] does that.
///
/// # Example
/// ```
/// use shuntcalc::{
///     error::ConversionError,
///     interpreter::lexer::{tokenize, validate},
/// };
///
/// assert!(validate(&tokenize("(1 + 2) * 3")).is_ok());
/// assert_eq!(validate(&tokenize("1+2&3")),
///            Err(ConversionError::UndefinedSymbol { symbols: vec!["&".to_string()] }));
/// assert_eq!(validate(&tokenize("(1+2")), Err(ConversionError::UnmatchedParenthesis));
/// ```
///
/// [`convert`]: crate::interpreter::converter::convert
pub fn validate(tokens: &[Token]) -> ConvertResult<()> {
    let symbols: Vec<String> = tokens.iter()
                                     .filter(|t| t.kind == TokenKind::Undefined)
                                     .map(|t| t.text.clone())
                                     .collect();
    if !symbols.is_empty() {
        log::debug!("undefined symbols: {symbols:?}");
        return Err(ConversionError::UndefinedSymbol { symbols });
    }

    let opening = tokens.iter().filter(|t| t.kind == TokenKind::LeftParen).count();
    let closing = tokens.iter().filter(|t| t.kind == TokenKind::RightParen).count();
    if opening != closing {
        log::debug!("parenthesis count mismatch: {opening} '(' vs {closing} ')'");
        return Err(ConversionError::UnmatchedParenthesis);
    }

    Ok(())
}
