/// The evaluator module executes the syntax tree and collects output.
///
/// The evaluator walks the AST statement by statement, keeps the variable
/// and function stores, follows control flow and appends every `chapa` to
/// the output buffer.
///
/// # Responsibilities
/// - Executes statements and evaluates expressions and conditions.
/// - Implements the call protocol with copy-in/copy-out variable scoping.
/// - Reports runtime errors such as undefined names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each paired with the line it starts on: keywords, identifiers, numbers,
/// strings, operators and punctuation. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Recognises keywords without regard to case.
/// - Skips whitespace and `//` comments.
/// - Reports stray characters and unterminated strings.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser over the token sequence. Each construct is
/// recognised by its leading token; expressions fold to the left without
/// operator precedence.
///
/// # Responsibilities
/// - Converts tokens into statements, conditions and expressions.
/// - Reports the first grammar violation with the offending line.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// A value is either a 64-bit integer or a string. The module provides the
/// strict and the text-parsing conversions to integers used by the
/// evaluator.
pub mod value;
