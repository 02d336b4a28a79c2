#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all failures that can occur while evaluating a program.
///
/// None of these escape the sentinel-style public API: `evaluate` absorbs
/// every variant into the not-available sentinel. The checked variants exist
/// for callers that want a diagnostic and for tests.
pub enum EvalError {
    /// The token sequence contained no tokens before the end marker.
    EmptyProgram,
    /// The token sequence did not end with the end-of-program marker.
    MissingTerminator,
    /// A token violated the positional grouping rule.
    MalformedStep {
        /// The token position where the violation was found.
        position: usize,
    },
    /// An operation name is not in the fixed operation set.
    UnknownOperation {
        /// The unrecognized operation name.
        name:     String,
        /// The token position of the operation token.
        position: usize,
    },
    /// An argument position held something other than an argument atom.
    ExpectedArgument {
        /// The token position of the offending token.
        position: usize,
    },
    /// A step reference could not be parsed as an index.
    InvalidReference {
        /// The reference text as written in the program.
        text: String,
    },
    /// A step reference pointed at a step with no recorded result.
    UnresolvedReference {
        /// The referenced step index.
        index: usize,
    },
    /// A literal argument could not be coerced into a numeral.
    NotANumeral {
        /// The literal text as written in the program.
        text: String,
    },
    /// A referenced step produced a decision, but a number was required.
    ExpectedNumber {
        /// The step index where the operand was used.
        step: usize,
    },
    /// Attempted division by exactly zero.
    DivisionByZero {
        /// The step index of the division.
        step: usize,
    },
    /// An operation produced a non-finite number.
    NonFiniteResult {
        /// The step index of the operation.
        step: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProgram => write!(f, "Program is empty."),
            Self::MissingTerminator => {
                write!(f, "Program does not end with the end-of-program marker.")
            },
            Self::MalformedStep { position } => {
                write!(f, "Malformed step at token position {position}.")
            },
            Self::UnknownOperation { name, position } => write!(f,
                                                                "Unknown operation '{name}' at token position {position}."),
            Self::ExpectedArgument { position } => {
                write!(f, "Expected an argument at token position {position}.")
            },
            Self::InvalidReference { text } => {
                write!(f, "Step reference '{text}' is not a valid index.")
            },
            Self::UnresolvedReference { index } => {
                write!(f, "Step reference #{index} has no recorded result.")
            },
            Self::NotANumeral { text } => write!(f, "Argument '{text}' is not a numeral."),
            Self::ExpectedNumber { step } => {
                write!(f, "Step {step} used a decision where a number was required.")
            },
            Self::DivisionByZero { step } => write!(f, "Division by zero in step {step}."),
            Self::NonFiniteResult { step } => {
                write!(f, "Step {step} produced a non-finite number.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
