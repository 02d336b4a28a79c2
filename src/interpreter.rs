/// The evaluator module executes token sequences and computes answers.
///
/// The evaluator validates the positional grammar of a tokenized program,
/// executes each step against the fixed operation table, threads
/// intermediate results through step references, and produces a final
/// numeric or decision answer, or a failure absorbed into the
/// not-available sentinel.
///
/// # Responsibilities
/// - Validates the 4-token window grouping over the whole sequence.
/// - Resolves step references and coerces literal operands.
/// - Reports evaluation failures such as division by zero or dangling
///   references.
pub mod evaluator;
/// The lexer module tokenizes program strings.
///
/// The lexer reads the raw program text produced by the model and yields a
/// stream of typed tokens: calls, parentheses, argument atoms, and the
/// end-of-program marker. It is total: malformed text tokenizes fine and
/// is rejected later by the evaluator.
///
/// # Responsibilities
/// - Splits the input on the literal `", "` separator.
/// - Scans each comma-group with a logos piece lexer and fuses a chunk with
///   a directly following `(` into a call token.
/// - Appends the end-of-program marker exactly once.
pub mod lexer;
/// The ops module defines the fixed operation set.
///
/// Programs may invoke exactly six operations. The set is a closed enum:
/// name resolution, application semantics, and the symbolic operator
/// mapping all match exhaustively over it.
///
/// # Responsibilities
/// - Resolves operation names as written in program strings.
/// - Applies an operation to resolved numeric operands with explicit zero
///   divisor and non-finite guards.
pub mod ops;
/// The value module defines the runtime result types.
///
/// A step produces either a numeric value or a decision (the `greater`
/// comparison). Decisions render as `yes`/`no`, which is the form stored
/// and compared by the surrounding pipeline.
///
/// # Responsibilities
/// - Defines the `Value` enum and its display form.
/// - Guards against decisions being used as numeric operands.
pub mod value;
