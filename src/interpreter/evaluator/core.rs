use crate::{
    error::EvalError,
    interpreter::{lexer::Token, ops::Operation, value::Value},
    util::num::{coerce, round_answer},
};

/// Result type used by the evaluator.
///
/// All checked evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a tokenized program, absorbing every failure into `None`.
///
/// This is the sentinel-style boundary the scoring and inference pipelines
/// call: malformed grouping, unknown operations, dangling step references,
/// uncoercible literals, zero divisors: all of it resolves to `None`, the
/// not-available answer. Nothing escapes as a fault and nothing is logged;
/// callers own user-visible reporting. Use [`evaluate_checked`] to learn why
/// a program failed.
///
/// # Example
/// ```
/// use finprog::{evaluate, tokenize, Value};
///
/// let tokens = tokenize("subtract(100, 50), divide(#0, 50)");
/// assert_eq!(evaluate(&tokens), Some(Value::Number(1.0)));
///
/// assert_eq!(evaluate(&tokenize("divide(5, 0)")), None);
/// ```
#[must_use]
pub fn evaluate(tokens: &[Token]) -> Option<Value> {
    evaluate_checked(tokens).ok()
}

/// Evaluates a tokenized program, reporting the first failure.
///
/// The pass works in four stages:
/// 1. The sequence must be non-empty and end with the end-of-program
///    marker, which is dropped.
/// 2. A single remaining token is the bare-literal answer form: if it
///    coerces as a numeral, that numeral is the result. A non-coercible
///    single token falls through and fails the grouping check below.
/// 3. Positional validation: every token at `i % 4 == 0` must be a call
///    naming a known operation and every token at `(i + 1) % 4 == 0` must
///    be the closing parenthesis. A violation anywhere invalidates the
///    whole program.
/// 4. Each complete `(op, arg1, arg2, `)`)` window executes in order,
///    recording its result in the step table. Arguments are either `#n`
///    references to an already-recorded step or literals run through the
///    numeric coercion chain.
///
/// A final numeric result is rounded to five decimal places.
///
/// # Errors
/// Returns the corresponding [`EvalError`] for every failure mode described
/// above; see the error type for the full taxonomy.
pub fn evaluate_checked(tokens: &[Token]) -> EvalResult<Value> {
    let (last, body) = tokens.split_last().ok_or(EvalError::EmptyProgram)?;
    if *last != Token::Eof {
        return Err(EvalError::MissingTerminator);
    }
    if body.is_empty() {
        return Err(EvalError::EmptyProgram);
    }

    if let [Token::Atom(text)] = body {
        if let Some(number) = coerce(text) {
            return Ok(Value::Number(round_answer(number)));
        }
    }

    validate_shape(body)?;

    let mut results: Vec<Value> = Vec::new();
    // A trailing partial window that survived positional validation is
    // ignored.
    for (step, window) in body.chunks_exact(4).enumerate() {
        let value = execute_step(step, window, &results)?;
        results.push(value);
    }

    match results.last().ok_or(EvalError::EmptyProgram)? {
        Value::Number(number) => Ok(Value::Number(round_answer(*number))),
        decision => Ok(*decision),
    }
}

/// Checks the positional grouping rule over the whole token sequence.
fn validate_shape(body: &[Token]) -> EvalResult<()> {
    for (position, token) in body.iter().enumerate() {
        if position % 4 == 0 {
            match token {
                Token::Call(name) => {
                    if Operation::from_name(name).is_none() {
                        return Err(EvalError::UnknownOperation { name: name.clone(),
                                                                 position });
                    }
                },
                _ => return Err(EvalError::MalformedStep { position }),
            }
        }

        if (position + 1) % 4 == 0 && *token != Token::RParen {
            return Err(EvalError::MalformedStep { position });
        }
    }

    Ok(())
}

/// Executes one validated 4-token window against the result table.
fn execute_step(step: usize, window: &[Token], results: &[Value]) -> EvalResult<Value> {
    let [call, first, second, _close] = window else {
        return Err(EvalError::MalformedStep { position: step * 4 });
    };

    let Token::Call(name) = call else {
        return Err(EvalError::MalformedStep { position: step * 4 });
    };
    let operation =
        Operation::from_name(name).ok_or_else(|| EvalError::UnknownOperation { name:
                                                                                   name.clone(),
                                                                               position:
                                                                                   step * 4, })?;

    let lhs = resolve_operand(first, step, step * 4 + 1, results)?;
    let rhs = resolve_operand(second, step, step * 4 + 2, results)?;

    operation.apply(lhs, rhs, step)
}

/// Resolves one argument token to a numeric operand.
///
/// A trimmed argument starting with `#` is a step reference and must name a
/// step that already has a recorded result; references only ever point
/// backwards, since the table is filled strictly left to right. Anything
/// else runs through the coercion chain.
fn resolve_operand(token: &Token,
                   step: usize,
                   position: usize,
                   results: &[Value])
                   -> EvalResult<f64> {
    let Token::Atom(text) = token else {
        return Err(EvalError::ExpectedArgument { position });
    };

    let trimmed = text.trim();
    if let Some(reference) = trimmed.strip_prefix('#') {
        let index: usize =
            reference.trim()
                     .parse()
                     .map_err(|_| EvalError::InvalidReference { text: trimmed.to_string() })?;
        return results.get(index)
                      .ok_or(EvalError::UnresolvedReference { index })?
                      .as_number(step);
    }

    coerce(trimmed).ok_or_else(|| EvalError::NotANumeral { text: trimmed.to_string() })
}
