/// Core evaluation logic.
///
/// Contains the validation pass over the token sequence, the step execution
/// loop with its result table, and both the checked and the sentinel-style
/// entry points.
pub mod core;
