use simplisp::{error::LineError, evaluate_line, interpreter::formatter::format_value, run_lines};

fn assert_evaluates(line: &str, expected: i64) {
    match evaluate_line(line, None) {
        Ok(value) => assert_eq!(value, expected, "Wrong value for: {line}"),
        Err(e) => panic!("Statement failed: {line}\nError: {e}"),
    }
}

fn assert_fails(line: &str) -> LineError {
    match evaluate_line(line, None) {
        Ok(value) => panic!("Statement succeeded with {value} but was expected to fail: {line}"),
        Err(e) => e,
    }
}

#[test]
fn binary_operator_correctness() {
    assert_evaluates("(simplify (+ 2 3))", 5);
    assert_evaluates("(simplify (- 10 4))", 6);
    assert_evaluates("(simplify (* 6 7))", 42);
    assert_evaluates("(simplify (+ 0 0))", 0);
    assert_evaluates("(simplify (- 3 8))", -5);
}

#[test]
fn negative_operands_via_unary_form() {
    assert_evaluates("(simplify (+ (- 2) 3))", 1);
    assert_evaluates("(simplify (* (- 4) (- 5)))", 20);
    assert_evaluates("(simplify (- (- 2) (- 3)))", 1);
}

#[test]
fn unary_negation() {
    assert_evaluates("(simplify (- 5))", -5);
    assert_evaluates("(simplify (- (- 5)))", 5);
    assert_evaluates("(simplify (- 0))", 0);
    assert_eq!(format_value(-5), "(- 5)");
}

#[test]
fn nesting() {
    assert_evaluates("(simplify (+ 2 (* 3 4)))", 14);
    assert_evaluates("(simplify (* (+ 1 2) (- 10 (- 3))))", 39);
}

#[test]
fn bare_number_statement() {
    assert_evaluates("(simplify 7)", 7);
    assert_evaluates("(simplify 0)", 0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_evaluates("  ( simplify ( +  2   3 ) )  ", 5);
    assert_evaluates("(simplify\t(- 5))", -5);
}

#[test]
fn zero_formats_as_plain_zero() {
    assert_eq!(format_value(0), "0");
    let value = evaluate_line("(simplify (- 3 3))", None).unwrap();
    assert_eq!(format_value(value), "0");
}

#[test]
fn round_trip_through_formatter() {
    for v in [0, 1, -1, 5, -5, 4999, -4999, i64::MAX, i64::MIN + 1] {
        let line = format!("(simplify {})", format_value(v));
        assert_evaluates(&line, v);
    }
}

#[test]
fn minimum_value_formats_but_does_not_reparse() {
    // The magnitude of i64::MIN exceeds the literal range, so the formatted
    // text is grammatical but rejected by the lexer on the way back in.
    assert_eq!(format_value(i64::MIN), "(- 9223372036854775808)");
    let line = format!("(simplify {})", format_value(i64::MIN));
    let err = assert_fails(&line);
    assert!(matches!(err, LineError::Lex(_)), "Expected a lex error, got: {err}");
}

#[test]
fn determinism() {
    let line = "(simplify (* (+ 1 2) (- 10 (- 3))))";
    let first = evaluate_line(line, None).unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate_line(line, None).unwrap(), first);
    }
}

#[test]
fn keyword_is_lenient_unless_required() {
    assert_evaluates("(foo 7)", 7);
    assert!(evaluate_line("(simplify 7)", Some("simplify")).is_ok());

    let err = evaluate_line("(foo 7)", Some("simplify")).unwrap_err();
    assert!(matches!(err, LineError::Parse(_)), "Expected a parse error, got: {err}");
}

#[test]
fn unexpected_character_is_a_lex_error() {
    let err = assert_fails("(simplify (+ 2 @))");
    assert!(matches!(err, LineError::Lex(_)), "Expected a lex error, got: {err}");
}

#[test]
fn oversized_literal_is_a_lex_error() {
    let err = assert_fails("(simplify 99999999999999999999)");
    assert!(matches!(err, LineError::Lex(_)), "Expected a lex error, got: {err}");
}

#[test]
fn grammar_violations_are_parse_errors() {
    for line in ["(simplify )",
                 "simplify 7",
                 "(7 simplify)",
                 "(simplify (+ 2))",
                 "(simplify (+ 2 3)",
                 "(simplify 1) 2",
                 "(simplify 1 2)",
                 ""]
    {
        let err = assert_fails(line);
        assert!(matches!(err, LineError::Parse(_)),
                "Expected a parse error for: {line}\nGot: {err}");
    }
}

#[test]
fn arithmetic_overflow_is_an_eval_error() {
    for line in ["(simplify (+ 9223372036854775807 1))",
                 "(simplify (* 9223372036854775807 2))",
                 "(simplify (- (- 9223372036854775807) 2))"]
    {
        let err = assert_fails(line);
        assert!(matches!(err, LineError::Eval(_)),
                "Expected an eval error for: {line}\nGot: {err}");
    }
}

#[test]
fn deep_nesting_is_rejected() {
    let nested = |depth: usize| {
        format!("(simplify {}1{})", "(- ".repeat(depth), ")".repeat(depth))
    };

    assert!(evaluate_line(&nested(50), None).is_ok());

    let err = assert_fails(&nested(300));
    assert!(matches!(err, LineError::Parse(_)), "Expected a parse error, got: {err}");
}

#[test]
fn failing_lines_do_not_stop_the_run() {
    let source = "(simplify (+ 2 @))\n(simplify 7)\n";
    let mut out = Vec::new();
    let mut diag = Vec::new();

    run_lines(source, None, &mut out, &mut diag).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "7\n");
    let diag = String::from_utf8(diag).unwrap();
    assert_eq!(diag.lines().count(), 1);
    assert!(diag.contains("(simplify (+ 2 @))"),
            "Diagnostic should name the failing line: {diag}");
}

#[test]
fn parse_failures_are_isolated_per_line() {
    let source = "(simplify )\n(simplify (- 2 5))\n";
    let mut out = Vec::new();
    let mut diag = Vec::new();

    run_lines(source, None, &mut out, &mut diag).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "(- 3)\n");
    assert_eq!(String::from_utf8(diag).unwrap().lines().count(), 1);
}

#[test]
fn blank_lines_are_skipped() {
    let source = "\n   \n(simplify 1)\n\n(simplify 2)\n";
    let mut out = Vec::new();
    let mut diag = Vec::new();

    run_lines(source, None, &mut out, &mut diag).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n");
    assert!(diag.is_empty());
}

#[test]
fn output_preserves_input_order() {
    let source = "(simplify 3)\n(simplify 1)\n(simplify 2)\n";
    let mut out = Vec::new();
    let mut diag = Vec::new();

    run_lines(source, None, &mut out, &mut diag).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "3\n1\n2\n");
}
