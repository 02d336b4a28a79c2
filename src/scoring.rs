//! Turn-level scoring helpers.
//!
//! Implements the two verdicts an evaluation run needs per dialogue turn:
//! whether the executed answer matches the stored gold answer, and whether
//! the predicted program matches the gold program. Both are pure and
//! sentinel-style: every internal failure reads as "no match".

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    interpreter::{lexer::tokenize, value::Value},
    symbolic::equiv::programs_equivalent,
    util::num::{coerce, round_answer},
};

// Compiled once, reused across all calls.
static TRAILING_POINT_ZERO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\.0([^0-9]|$)").expect("valid regex literal"));

/// Compares an executed answer against the stored gold answer text.
///
/// Gold decisions (`yes`/`no`, case-insensitive) compare against the
/// rendered predicted value. Numeric gold answers are coerced and both
/// sides are rounded to five decimal places before an exact comparison. A
/// failed prediction (`None`) matches only a gold answer that itself does
/// not coerce: "not available" on both sides counts as agreement.
///
/// # Example
/// ```
/// use finprog::{answers_match, Value};
///
/// let prediction = Value::Number(0.33333291);
/// assert!(answers_match(Some(&prediction), "33.333291%"));
/// assert!(answers_match(Some(&Value::Decision(true)), "Yes"));
/// assert!(!answers_match(None, "42"));
/// ```
#[must_use]
pub fn answers_match(predicted: Option<&Value>, gold: &str) -> bool {
    let gold_trimmed = gold.trim();

    if gold_trimmed.eq_ignore_ascii_case("yes") || gold_trimmed.eq_ignore_ascii_case("no") {
        return match predicted {
            Some(value) => value.to_string().eq_ignore_ascii_case(gold_trimmed),
            None => false,
        };
    }

    match (predicted, coerce(gold_trimmed)) {
        (Some(Value::Number(number)), Some(gold_number)) => {
            round_answer(*number) == round_answer(gold_number)
        },
        (None, None) => true,
        _ => false,
    }
}

/// Compares a predicted program against the gold program.
///
/// Symbolic equivalence runs first, with the gold program on the seeded
/// side. When it reports inequivalent, a forgiving textual comparison gets
/// a second opinion: spaces stripped, `.0` dropped from integer-shaped
/// literals, `const_` prefixes removed, then exact string equality.
///
/// # Example
/// ```
/// use finprog::programs_match;
///
/// assert!(programs_match("add(50, 100)", "add(100, 50)"));
/// assert!(programs_match("add(4.0, 5.0)", "add(const_4, 5)"));
/// assert!(!programs_match("subtract(5, 3)", "subtract(3, 5)"));
/// ```
#[must_use]
pub fn programs_match(predicted: &str, gold: &str) -> bool {
    if programs_equivalent(&tokenize(gold), &tokenize(predicted)) {
        return true;
    }
    normalize_program(predicted) == normalize_program(gold)
}

/// Normalizes a program string for the textual fallback comparison.
fn normalize_program(program: &str) -> String {
    let compact = program.replace(' ', "");
    let trimmed = TRAILING_POINT_ZERO.replace_all(&compact, "${1}${2}");
    trimmed.replace("const_", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_drops_integer_point_zero() {
        assert_eq!(normalize_program("add(4.0, 5.0)"), "add(4,5)");
        assert_eq!(normalize_program("add(4.05, 5)"), "add(4.05,5)");
        assert_eq!(normalize_program("divide(#0, const_100)"), "divide(#0,100)");
    }

    #[test]
    fn decision_answers_compare_case_insensitively() {
        assert!(answers_match(Some(&Value::Decision(false)), "No"));
        assert!(!answers_match(Some(&Value::Decision(true)), "no"));
        assert!(!answers_match(Some(&Value::Number(1.0)), "yes"));
    }

    #[test]
    fn numeric_answers_round_before_comparing() {
        assert!(answers_match(Some(&Value::Number(0.123456_789)), "0.12345679"));
        assert!(!answers_match(Some(&Value::Number(0.12346)), "0.12345"));
    }

    #[test]
    fn not_available_matches_only_not_available() {
        assert!(answers_match(None, "n/a"));
        assert!(!answers_match(None, "12"));
        assert!(!answers_match(Some(&Value::Number(12.0)), "n/a"));
    }

    #[test]
    fn gold_side_seeds_the_equivalence_check() {
        // The predicted program may reuse gold literals in any order.
        assert!(programs_match("add(50, 100)", "add(100, 50)"));
    }
}
