/// Evaluation errors.
///
/// Contains all failures that can be raised while validating and executing a
/// tokenized program: malformed token grouping, unknown operations, dangling
/// step references, uncoercible literals, division by zero, and non-finite
/// results.
pub mod eval_error;
/// Equivalence-check errors.
///
/// Contains all failures that can be raised while expanding two programs
/// into symbolic expression trees and canonicalizing them: malformed steps,
/// missing anonymized symbols, reference cycles, relational operands inside
/// arithmetic, and identically-zero divisors.
pub mod equiv_error;

pub use equiv_error::EquivError;
pub use eval_error::EvalError;
