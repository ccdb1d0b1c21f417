/// Core evaluation logic and context management.
///
/// Contains the tree walk, the runtime context and the division policy.
pub mod core;

/// Binary operator evaluation logic.
///
/// Applies `+ - * /` to two integers with overflow and division-by-zero
/// checks.
pub mod binary;
