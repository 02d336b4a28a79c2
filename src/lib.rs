//! # finprog
//!
//! finprog is the deterministic half of a conversational financial-QA
//! pipeline: it tokenizes, executes, and compares the small arithmetic
//! "programs" a language model emits to answer questions over financial
//! documents (e.g. `subtract(100, 50), divide(#0, 50)`).
//!
//! The crate owns four concerns: numeric coercion of heterogeneous textual
//! numerals, tokenization of program strings, evaluation of token sequences
//! against a fixed six-operation table, and symbolic equivalence checking of
//! two programs for scoring. Everything is pure, synchronous, and stateless
//! across calls; failures are absorbed into sentinel returns at the public
//! boundary, so nothing here ever panics, logs, or performs I/O.

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

/// Provides unified error types for evaluation and equivalence checking.
///
/// This module defines all failures that can be raised while validating,
/// executing, or comparing programs. Every error is absorbed into a
/// sentinel value at the public boundary; the typed variants exist for
/// callers that want diagnostics and for tests.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (evaluation, equivalence).
/// - Carries positions, step indices, and offending texts for reporting.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates tokenization and execution of program strings.
///
/// This module ties together the lexer, the fixed operation set, the value
/// types, and the evaluator that threads intermediate results through step
/// references to produce a final numeric or decision answer.
///
/// # Responsibilities
/// - Tokenizes raw program strings into typed token sequences.
/// - Validates program structure and executes steps in order.
/// - Absorbs every failure into the not-available sentinel.
pub mod interpreter;
/// Scores predicted programs and answers against gold turns.
///
/// Implements the two per-turn verdicts of the evaluation pipeline:
/// executed-answer matching (with decision and rounding rules) and program
/// matching (symbolic equivalence plus a textual normalization fallback).
pub mod scoring;
/// Symbolic equivalence machinery.
///
/// Expression trees over anonymized symbols, exact multivariate polynomial
/// algebra, canonical rational forms, and the equivalence decision built on
/// top of them.
pub mod symbolic;
/// General utilities for numeric coercion.
///
/// Houses the coercion chain for textual numerals, table cells, and rows,
/// plus the shared answer rounding rule.
pub mod util;

pub use error::{EquivError, EvalError};
pub use interpreter::{
    evaluator::core::{evaluate, evaluate_checked},
    lexer::{tokenize, Token},
    ops::Operation,
    value::Value,
};
pub use scoring::{answers_match, programs_match};
pub use symbolic::equiv::{equivalent_checked, programs_equivalent};
pub use util::num::{coerce, coerce_cell, coerce_row};

/// Executes a raw program string end to end.
///
/// Tokenizes the string and evaluates the resulting sequence, absorbing
/// every failure (malformed syntax, unknown operations, dangling
/// references, zero divisors) into `None`, the not-available answer.
///
/// # Example
/// ```
/// use finprog::{run_program, Value};
///
/// assert_eq!(run_program("subtract(100, 50), divide(#0, 50)"),
///            Some(Value::Number(1.0)));
/// assert_eq!(run_program("greater(10, 5)"), Some(Value::Decision(true)));
/// assert_eq!(run_program("divide(5, 0)"), None);
/// ```
#[must_use]
pub fn run_program(source: &str) -> Option<Value> {
    evaluate(&tokenize(source))
}
