/// Entry point of the parser and the shared result type.
///
/// Contains `parse`, which turns a whole token stream into the program
/// block and rejects anything left over after it.
pub mod core;

/// Block and body parsing.
///
/// Collects statements until a block terminator and handles the optional
/// braces around if/while/for bodies.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the leading token to declarations, assignments, prints,
/// returns and function declarations.
pub mod statement;

/// Control-flow parsing.
///
/// Parses `jar`, `joparyant` and `paryant` together with their single
/// comparison headers.
pub mod control;

/// Expression parsing.
///
/// Left-to-right operator chains without precedence, literals, variables,
/// calls and parenthesised groups.
pub mod expression;

/// Utility functions for the parser.
///
/// Token expectations, identifiers and comma separated lists.
pub mod utils;
