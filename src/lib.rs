//! # shuntcalc
//!
//! shuntcalc evaluates arithmetic expressions written in infix notation.
//! An expression is tokenized, rewritten into postfix order with the
//! shunting-yard algorithm, and reduced to a number on an operand stack.
//!
//! Supported: decimal numbers, `+ - * /` (also `×` and `÷`), parentheses, and
//! the functions `sin` and `cos`, which take their argument in degrees.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ExpressionError,
    interpreter::{converter::convert, evaluator::evaluate, lexer::tokenize},
};

/// Provides the error types of every pipeline stage.
///
/// Each stage returns its own discriminated failure: conversion errors for
/// malformed input, evaluation errors for postfix sequences that cannot be
/// reduced, and a wrapper for the full pipeline.
///
/// # Responsibilities
/// - Defines one error enum per stage.
/// - Implements `Display` and `std::error::Error` for user feedback.
pub mod error;
/// The expression pipeline: lexer, symbol table, converter and evaluator.
///
/// Data flows one way: string, tokens, postfix sequence, number. No stage
/// keeps state between calls.
pub mod interpreter;

/// Evaluates an infix expression to a number.
///
/// Chains [`tokenize`], [`convert`] and [`evaluate`].
///
/// # Errors
/// Returns [`ExpressionError::Conversion`] for undefined symbols, unbalanced
/// parentheses or invalid numbers, and [`ExpressionError::Evaluation`] when
/// the postfix sequence cannot be reduced to one value.
///
/// # Examples
/// ```
/// use shuntcalc::evaluate_expression;
///
/// assert_eq!(evaluate_expression("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate_expression("8 - 4 - 2").unwrap(), 2.0);
///
/// // An unknown symbol is an error.
/// assert!(evaluate_expression("1 + 2 & 3").is_err());
/// ```
pub fn evaluate_expression(expression: &str) -> Result<f64, ExpressionError> {
    let tokens = tokenize(expression);
    let postfix = convert(&tokens)?;
    let value = evaluate(&postfix)?;
    log::debug!("{expression:?} = {value}");
    Ok(value)
}
