use crate::{error::EvalError, interpreter::value::Value};

/// The fixed operation set a program may invoke.
///
/// The set is closed: new operations are added only by extending
/// this enum and the exhaustive matches over it, never through open-ended
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `add(a, b)` computes `a + b`.
    Add,
    /// `subtract(a, b)` computes `a - b`.
    Subtract,
    /// `multiply(a, b)` computes `a * b`.
    Multiply,
    /// `divide(a, b)` computes `a / b`; a zero divisor fails the program.
    Divide,
    /// `exp(a, b)` computes `a` raised to the power `b`.
    Exp,
    /// `greater(a, b)` yields the decision `yes` when `a > b`, else `no`.
    Greater,
}

/// Every operation in the fixed set.
pub const ALL_OPERATIONS: [Operation; 6] = [Operation::Add,
                                            Operation::Subtract,
                                            Operation::Multiply,
                                            Operation::Divide,
                                            Operation::Exp,
                                            Operation::Greater];

impl Operation {
    /// Resolves an operation name as written in a program.
    ///
    /// Matching is exact: no trimming, no case folding. Anything not in the
    /// fixed set resolves to `None` and invalidates the whole program.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "add" => Some(Self::Add),
            "subtract" => Some(Self::Subtract),
            "multiply" => Some(Self::Multiply),
            "divide" => Some(Self::Divide),
            "exp" => Some(Self::Exp),
            "greater" => Some(Self::Greater),
            _ => None,
        }
    }

    /// The name this operation carries in program strings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Exp => "exp",
            Self::Greater => "greater",
        }
    }

    /// Applies the operation to two numeric operands.
    ///
    /// Division by exactly zero and non-finite numeric results fail with an
    /// error rather than letting NaN or infinity escape into the result
    /// table.
    ///
    /// # Parameters
    /// - `lhs`, `rhs`: The resolved numeric operands.
    /// - `step`: The index of the executing step, for error reporting.
    ///
    /// # Returns
    /// - `Ok(Value)`: The step result, numeric or decision.
    /// - `Err(EvalError::DivisionByZero | NonFiniteResult)`: On failure.
    pub fn apply(self, lhs: f64, rhs: f64, step: usize) -> Result<Value, EvalError> {
        let value = match self {
            Self::Add => Value::Number(lhs + rhs),
            Self::Subtract => Value::Number(lhs - rhs),
            Self::Multiply => Value::Number(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero { step });
                }
                Value::Number(lhs / rhs)
            },
            Self::Exp => Value::Number(lhs.powf(rhs)),
            Self::Greater => Value::Decision(lhs > rhs),
        };

        if let Value::Number(number) = value {
            if !number.is_finite() {
                return Err(EvalError::NonFiniteResult { step });
            }
        }

        Ok(value)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for operation in ALL_OPERATIONS {
            assert_eq!(Operation::from_name(operation.name()), Some(operation));
        }
        assert_eq!(Operation::from_name("Add"), None);
        assert_eq!(Operation::from_name(" add"), None);
    }

    #[test]
    fn zero_divisor_fails() {
        assert_eq!(Operation::Divide.apply(5.0, 0.0, 3),
                   Err(EvalError::DivisionByZero { step: 3 }));
        assert_eq!(Operation::Divide.apply(5.0, 2.0, 0), Ok(Value::Number(2.5)));
    }

    #[test]
    fn comparison_yields_decisions() {
        assert_eq!(Operation::Greater.apply(2.0, 1.0, 0), Ok(Value::Decision(true)));
        assert_eq!(Operation::Greater.apply(1.0, 2.0, 0), Ok(Value::Decision(false)));
    }
}
