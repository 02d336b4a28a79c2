#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all failures that can occur during an equivalence check.
///
/// Every variant collapses to `false` at the public boundary: two programs
/// that cannot both be expanded and canonicalized are reported as not
/// equivalent rather than raising.
pub enum EquivError {
    /// The token sequence held no complete step.
    EmptyProgram,
    /// A step window did not have the `op(arg, arg)` shape.
    MalformedStep {
        /// The token position where the violation was found.
        position: usize,
    },
    /// A literal argument had no entry in the anonymization map.
    ///
    /// The map is seeded from the first program only, so a literal that
    /// appears only in the second program lands here.
    UnknownSymbol {
        /// The literal text as written in the program.
        text: String,
    },
    /// A step reference pointed outside the step list.
    UnresolvedReference {
        /// The referenced step index.
        index: usize,
    },
    /// A step reference could not be parsed as an index.
    InvalidReference {
        /// The reference text as written in the program.
        text: String,
    },
    /// Expansion recursed past the depth limit (reference cycle).
    RecursionLimit,
    /// A relational result was used as an arithmetic operand.
    RelationalOperand,
    /// A divisor simplified to the identically-zero expression.
    ZeroDenominator,
    /// An exponent was too large to expand symbolically.
    UnsupportedExponent,
}

impl std::fmt::Display for EquivError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProgram => write!(f, "Program has no complete step."),
            Self::MalformedStep { position } => {
                write!(f, "Malformed step at token position {position}.")
            },
            Self::UnknownSymbol { text } => {
                write!(f, "Literal '{text}' has no anonymized symbol.")
            },
            Self::UnresolvedReference { index } => {
                write!(f, "Step reference #{index} points outside the program.")
            },
            Self::InvalidReference { text } => {
                write!(f, "Step reference '{text}' is not a valid index.")
            },
            Self::RecursionLimit => write!(f, "Step references form a cycle."),
            Self::RelationalOperand => {
                write!(f, "A comparison result cannot be used in arithmetic.")
            },
            Self::ZeroDenominator => write!(f, "Division by an identically-zero expression."),
            Self::UnsupportedExponent => write!(f, "Exponent is too large to expand."),
        }
    }
}

impl std::error::Error for EquivError {}
