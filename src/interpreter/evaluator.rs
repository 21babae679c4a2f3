/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, its settings, statement execution with
/// explicit control flow and expression evaluation.
pub mod core;

/// Arithmetic and string concatenation.
pub mod binary;

/// Conditions of `jar`, `joparyant` and `paryant` headers.
pub mod comparison;

/// Function declaration and the call protocol.
///
/// Calls save the whole variable store, bind parameters into it and restore
/// it when the body finishes.
pub mod function;

/// `joparyant` and `paryant` loops.
pub mod loops;
