use finprog::{programs_equivalent, tokenize};

fn assert_equivalent(first: &str, second: &str) {
    assert!(programs_equivalent(&tokenize(first), &tokenize(second)),
            "'{first}' and '{second}' were not judged equivalent");
}

fn assert_distinct(first: &str, second: &str) {
    assert!(!programs_equivalent(&tokenize(first), &tokenize(second)),
            "'{first}' and '{second}' were wrongly judged equivalent");
}

#[test]
fn single_chain_programs_are_reflexive() {
    assert_equivalent("add(1, 2)", "add(1, 2)");
    assert_equivalent("subtract(100, 50), divide(#0, 50)",
                      "subtract(100, 50), divide(#0, 50)");
    // Spacing at the outer ends of a step is trimmed from the symbol keys.
    assert_equivalent("add( 1, 2)", "add( 1, 2)");
    assert_equivalent("add(1, 2 )", "add(1, 2 )");
}

#[test]
fn addition_and_multiplication_commute() {
    assert_equivalent("add(3, 4)", "add(4, 3)");
    assert_equivalent("multiply(3, 4)", "multiply(4, 3)");
}

#[test]
fn subtraction_and_division_do_not_commute() {
    assert_distinct("subtract(3, 4)", "subtract(4, 3)");
    assert_distinct("divide(3, 4)", "divide(4, 3)");
}

#[test]
fn relabeled_step_indices_are_equivalent() {
    assert_equivalent("add(1, 2), subtract(3, 4), divide(#0, #1)",
                      "subtract(3, 4), add(1, 2), divide(#1, #0)");
}

#[test]
fn common_factors_cancel() {
    assert_equivalent("multiply(5, 3), divide(#0, 3)", "divide(3, 3), multiply(#0, 5)");
}

#[test]
fn multiplication_distributes_over_addition() {
    assert_equivalent("add(2, 3), multiply(#0, 4)",
                      "multiply(2, 4), multiply(3, 4), add(#0, #1)");
}

#[test]
fn nested_division_associates() {
    assert_equivalent("divide(10, 2), divide(#0, 5)", "divide(10, 5), divide(#0, 2)");
    assert_equivalent("divide(10, 2), divide(#0, 5)", "multiply(2, 5), divide(10, #0)");
}

#[test]
fn comparisons_match_pairwise() {
    assert_equivalent("greater(3, 4)", "greater(3, 4)");
    assert_distinct("greater(3, 4)", "greater(4, 3)");
}

#[test]
fn comparisons_never_match_arithmetic() {
    assert_distinct("greater(3, 4)", "add(3, 4)");
}

#[test]
fn powers_compare_structurally() {
    assert_equivalent("exp(2, 3)", "exp(2, 3)");
    assert_distinct("exp(2, 3)", "exp(3, 2)");
}

#[test]
fn different_operations_are_distinct() {
    assert_distinct("add(3, 4)", "multiply(3, 4)");
}

#[test]
fn literal_spellings_are_distinct_symbols() {
    // "3" and "3.0" anonymize to different operand slots.
    assert_distinct("add(3, 4)", "add(3.0, 4)");
}

#[test]
fn malformed_programs_are_never_equivalent() {
    assert_distinct("add(3, 4)", "add(3");
    assert_distinct("", "");
    assert_distinct("306870", "306870");
    // Extra arguments break the step shape on either side.
    assert_distinct("add(1, 2, 3)", "add(2, 1, 3)");
    assert_distinct("add(1, 2)", "add(1, 2, 3)");
}
