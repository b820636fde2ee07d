//! # tokcalc
//!
//! tokcalc is a small arithmetic expression calculator written in Rust.
//! It tokenizes an expression, sorts its integral literals into even and odd
//! buckets, evaluates it with operator precedence, and renders the result as
//! a chained, chunked or flat view.

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
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

use tracing::debug;

/// Provides the error types for tokenizing, evaluating and rendering.
///
/// This module defines every error the calculator can report. Each stage has
/// its own taxonomy so that callers can tell a typo in the input apart from
/// an expression that cannot be computed, or from a badly configured view.
///
/// # Responsibilities
/// - Defines one error enum per stage (tokenizer, evaluator, view settings).
/// - Carries the messages shown to the user.
/// - Unites the three in a crate-level `Error` for the facade functions.
pub mod error;
/// Orchestrates tokenizing, evaluating and rendering.
///
/// This module ties together the lexer, tokenizer, evaluator and view
/// builder. It exposes the public API used by the shell and the binary.
///
/// # Responsibilities
/// - Converts text into tokens and parity buckets.
/// - Evaluates token sequences to a single number.
/// - Renders the three views.
pub mod interpreter;
/// The interactive read, evaluate and render loop.
///
/// The shell owns all prompting and menu handling. It is generic over its
/// input and output so that it can run on a terminal or on in-memory buffers.
pub mod shell;
/// Defines the token, expression and bucket types.
///
/// These are the values that flow from the tokenizer to the evaluator and the
/// view builder. None of them change after the tokenizer creates them.
pub mod token;
/// General utilities for numeric conversion and formatting.
pub mod util;

pub use crate::{
    error::Error,
    interpreter::{
        evaluator::core::evaluate,
        tokenizer::{Tokenized, tokenize},
        view::{
            chain::{ChainView, render_chain},
            chunked::{Capacities, ChunkedView, render_chunked},
            core::{View, ViewKind},
            flat::{FlatView, render_flat},
        },
    },
};

/// Tokenizes and evaluates an expression.
///
/// # Errors
/// Returns an error if the text cannot be tokenized or the resulting
/// expression cannot be evaluated.
///
/// # Examples
/// ```
/// use tokcalc::calculate;
///
/// assert_eq!(calculate("(1 + 2) * 4").unwrap(), 12.0);
/// assert!(calculate("1 / 0").is_err());
/// assert!(calculate("2 ^ 3").is_err());
/// ```
pub fn calculate(source: &str) -> Result<f64, Error> {
    Ok(tokenize(source)?.evaluate()?)
}

/// Tokenizes an expression and renders the requested view.
///
/// `capacities` is only consulted for [`ViewKind::Chunked`]; for that view the
/// capacities are validated before the expression is evaluated.
///
/// # Errors
/// Returns an error if the text cannot be tokenized, the capacities are
/// invalid, or the expression cannot be evaluated.
///
/// # Examples
/// ```
/// use tokcalc::{Capacities, ViewKind, render};
///
/// let view = render("3+4*2", ViewKind::Chain, Capacities::default()).unwrap();
/// assert_eq!(view.result(), 11.0);
/// assert!(view.to_string().starts_with("Representation: 3.0 -> + -> 4.0"));
///
/// let bad = Capacities { input: 0, bucket: 1 };
/// assert!(render("3+4*2", ViewKind::Chunked, bad).is_err());
/// ```
pub fn render(source: &str, kind: ViewKind, capacities: Capacities) -> Result<View, Error> {
    let tokenized = tokenize(source)?;
    debug!(%kind, "rendering view");

    let view: View = match kind {
        ViewKind::Chain => tokenized.chain_view()?.into(),
        ViewKind::Chunked => tokenized.chunked_view(capacities)?.into(),
        ViewKind::Flat => tokenized.flat_view()?.into(),
    };
    Ok(view)
}
