//! # chapa
//!
//! chapa is an interpreter for a small scripting language whose keywords are
//! Marathi words: `he aahe` declares, `chapa` prints, `jar`/`nahitar` branch,
//! `joparyant` and `paryant` loop, `karya` declares a function and `parat`
//! returns from it.
//!
//! Source text goes through three stages, each usable on its own:
//! [`scan`] turns it into tokens, [`parse`] builds a [`ast::Block`] and
//! [`run`] executes it, returning everything the program printed.

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

use crate::error::Failure;

/// Defines the structure of parsed code.
///
/// This module declares the statement, expression and condition types that
/// represent a program as a tree. The AST is built by the parser, executed by
/// the evaluator and printed back in canonical form by its `Display` impls.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Each stage has its own error enum carrying the details of the failure;
/// `Error` unifies them and `Failure` pairs an error with the output produced
/// before it.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and runtime values.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use interpreter::{
    evaluator::core::{DEFAULT_MAX_CALL_DEPTH, Interpreter, Settings, run},
    lexer::scan,
    parser::core::parse,
};

/// Scans, parses and runs a program, returning everything it printed.
///
/// # Errors
/// A [`Failure`] holding the first lexical, syntax or runtime error. For
/// runtime errors its `output` keeps what was printed before the failure.
///
/// # Examples
/// ```
/// use chapa::interpret;
///
/// assert_eq!(interpret("he aahe x = 2; he aahe y = 3; chapa(x + y);").unwrap(), "5\n");
///
/// // 'y' is never declared.
/// let failure = interpret("chapa(1); chapa(y);").unwrap_err();
/// assert_eq!(failure.output, "1\n");
/// ```
pub fn interpret(source: &str) -> Result<String, Failure> {
    interpret_with(source, Settings::default())
}

/// Like [`interpret`], with explicit interpreter settings.
///
/// # Errors
/// See [`interpret`].
///
/// # Examples
/// ```
/// use chapa::{Settings, error::{Error, EvalError}, interpret_with};
///
/// let source = "karya f(n) { parat f(n + 1); } chapa(f(0));";
/// let failure = interpret_with(source, Settings { max_call_depth: 10 }).unwrap_err();
///
/// assert!(matches!(failure.error,
///                  Error::Eval(EvalError::CallDepthExceeded { limit: 10, .. })));
/// ```
pub fn interpret_with(source: &str, settings: Settings) -> Result<String, Failure> {
    let tokens = scan(source).map_err(Failure::new)?;
    let program = parse(&tokens).map_err(Failure::new)?;

    Interpreter::with_settings(settings).execute(&program)
}
