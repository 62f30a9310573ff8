/// The converter module rewrites infix tokens into postfix order.
///
/// It implements the shunting-yard algorithm over an operator stack, using
/// the symbol table to decide when a pending operator must be emitted. It
/// also detects parentheses that do not pair up.
///
/// # Responsibilities
/// - Validates the token sequence before rewriting it.
/// - Produces an ordered sequence of numbers and operators.
/// - Fails atomically on malformed input.
pub mod converter;
/// The evaluator module reduces a postfix sequence to a number.
///
/// A single left-to-right pass over the sequence drives an operand stack;
/// each operator pops its operands and pushes its result.
pub mod evaluator;
/// The lexer module tokenizes expression strings.
///
/// The lexer reads the raw text and produces a sequence of tokens for
/// numbers, operators, parentheses and function names. Unknown characters are
/// kept as undefined tokens so that validation can report all of them.
pub mod lexer;
/// Static operator table: precedence, associativity and operand count.
pub mod symbols;
