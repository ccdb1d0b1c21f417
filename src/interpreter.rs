/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator walks the AST bottom-up and performs checked integer
/// arithmetic. It is a pure function of the tree and the evaluation
/// [`Context`](evaluator::core::Context).
///
/// # Responsibilities
/// - Evaluates literals and binary operations.
/// - Applies the configured division policy.
/// - Reports division by zero and integer overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens on demand: integer
/// literals, the four arithmetic operators, and parentheses. It is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Skips spaces and tabs.
/// - Reports lexical errors for unrecognized characters and oversized
///   literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer one at a time and constructs an AST
/// that honours operator precedence, left associativity and parentheses.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with their source offset.
pub mod parser;
