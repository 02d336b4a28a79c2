/// Numeric coercion helpers.
///
/// This module provides the coercion chain that turns heterogeneous textual
/// numerals (comma-separated numbers, percentages, `const_`-prefixed named
/// constants, currency cells) into floating-point values, plus the answer
/// rounding rule shared by the evaluator and the scoring helpers.
///
/// All functions are total: a parse failure anywhere in the chain resolves
/// to the not-available sentinel (`None`), never a panic.
pub mod num;
