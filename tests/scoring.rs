use finprog::{answers_match, programs_match, run_program, Value};

fn assert_answer(program: &str, gold: &str) {
    let predicted = run_program(program);
    assert!(answers_match(predicted.as_ref(), gold),
            "Program '{program}' produced {predicted:?}, which did not match gold '{gold}'");
}

fn assert_answer_mismatch(program: &str, gold: &str) {
    let predicted = run_program(program);
    assert!(!answers_match(predicted.as_ref(), gold),
            "Program '{program}' produced {predicted:?}, which wrongly matched gold '{gold}'");
}

#[test]
fn executed_answers_match_gold_spellings() {
    assert_answer("divide(50, 100)", "0.5");
    assert_answer("divide(50, 100)", "50%");
    assert_answer("add(2,500, 2,500)", "5,000");
    assert_answer("divide(1, 3)", "0.33333");
}

#[test]
fn decisions_match_gold_words() {
    assert_answer("greater(10, 5)", "yes");
    assert_answer("greater(10, 5)", "Yes");
    assert_answer("greater(5, 10)", "no");
    assert_answer_mismatch("greater(5, 10)", "yes");
}

#[test]
fn failed_programs_match_unavailable_gold() {
    assert_answer("divide(5, 0)", "n/a");
    assert_answer_mismatch("divide(5, 0)", "0");
    assert_answer_mismatch("add(1, 2)", "n/a");
}

#[test]
fn rounding_tolerates_low_order_noise() {
    assert_answer("divide(1, 3), multiply(#0, 3), divide(#1, 3)", "0.33333");
    assert_answer_mismatch("divide(1, 3)", "0.3334");
}

#[test]
fn equivalent_programs_match() {
    assert!(programs_match("add(100, 50)", "add(50, 100)"));
    assert!(programs_match("subtract(3, 4), add(1, 2), divide(#1, #0)",
                           "add(1, 2), subtract(3, 4), divide(#0, #1)"));
    assert!(!programs_match("subtract(5, 3)", "subtract(3, 5)"));
}

#[test]
fn textual_fallback_forgives_spelling() {
    assert!(programs_match("add(4.0, 5.0)", "add(const_4, 5)"));
    assert!(programs_match("divide(#0,100)", "divide(#0, const_100)"));
    assert!(!programs_match("add(4.5, 5)", "add(4, 5)"));
}

#[test]
fn identical_strings_always_match() {
    assert!(programs_match("306870", "306870"));
    assert!(programs_match("", ""));
}
