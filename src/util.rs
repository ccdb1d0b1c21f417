/// Integer division helpers.
///
/// Provides the two rounding policies offered by
/// [`DivisionMode`](crate::interpreter::evaluator::core::DivisionMode). Both
/// return `None` instead of panicking when the division is undefined or
/// overflows.
pub mod num;
