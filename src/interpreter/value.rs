/// Represents the result a program step produces.
///
/// Steps yield either a numeric value or, from the `greater` comparison, a
/// decision. Decisions render as `yes`/`no`, the wire form the surrounding
/// QA pipeline stores and scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean-valued comparison result, rendered as `yes` or `no`.
    Decision(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Decision(v)
    }
}

impl Value {
    /// Extracts the numeric value, or fails when the value is a decision.
    ///
    /// Decisions cannot participate in arithmetic: a step that references a
    /// `greater` result as a numeric operand fails the whole program.
    ///
    /// # Parameters
    /// - `step`: The index of the step using the operand, for error
    ///   reporting.
    pub fn as_number(&self, step: usize) -> Result<f64, crate::error::EvalError> {
        match self {
            Self::Number(number) => Ok(*number),
            Self::Decision(_) => Err(crate::error::EvalError::ExpectedNumber { step }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Decision(true) => write!(f, "yes"),
            Self::Decision(false) => write!(f, "no"),
        }
    }
}
