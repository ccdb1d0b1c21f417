use std::fs;

use intcalc::{
    Context, DivisionMode, EvaluationFailure, evaluate, evaluate_with,
    error::{EvaluationErrorKind, LexErrorKind, ParseErrorKind},
};
use walkdir::WalkDir;

#[test]
fn case_files_pass() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let (source, expected) =
                line.rsplit_once(" => ")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing ' => '", i + 1));
            count += 1;

            let actual = match evaluate(source) {
                Ok(value) => value.to_string(),
                Err(e) => failure_kind(&e),
            };
            assert_eq!(actual,
                       expected.trim(),
                       "{path:?}:{}: evaluating {source:?}",
                       i + 1);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn failure_kind(failure: &EvaluationFailure) -> String {
    match failure {
        EvaluationFailure::Lex(e) => format!("{:?}", e.kind),
        EvaluationFailure::Parse(e) => format!("{:?}", e.kind),
        EvaluationFailure::Evaluation(e) => format!("{:?}", e.kind),
    }
}

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "evaluating {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_parse_failure(src: &str, kind: ParseErrorKind, position: usize) {
    match evaluate(src) {
        Err(EvaluationFailure::Parse(e)) => {
            assert_eq!((e.kind, e.position), (kind, position), "evaluating {src:?}");
        },
        other => panic!("Expected a parse error for {src:?}, got {other:?}"),
    }
}

#[test]
fn addition_and_subtraction_of_non_negative_integers() {
    let samples = [0, 1, 2, 7, 10, 99, 12_345, 1_000_000_007];
    for a in samples {
        for b in samples {
            assert_value(&format!("{a}+{b}"), a + b);
            assert_value(&format!("{a}-{b}"), a - b);
        }
    }
}

#[test]
fn multiplication_and_division_with_negative_dividends() {
    let dividends = [-100, -7, -1, 0, 1, 7, 100];
    let divisors = [1, 2, 3, 7, 10];
    for a in dividends {
        for b in divisors {
            // Negative operands can only be written as a subtraction.
            let a_src = if a < 0 { format!("(0-{})", -a) } else { a.to_string() };
            assert_value(&format!("{a_src}*{b}"), a * b);
            assert_value(&format!("{a_src}/{b}"), a.div_euclid(b));
        }
    }
}

#[test]
fn division_policy_is_visible() {
    let truncate = Context::with_division(DivisionMode::Truncate);

    assert_value("7/2", 3);
    assert_value("(0-7)/2", -4);
    assert_eq!(evaluate_with("7/2", &truncate), Ok(3));
    assert_eq!(evaluate_with("(0-7)/2", &truncate), Ok(-3));
    assert_eq!(evaluate_with("7/(0-2)", &truncate), Ok(-3));
}

#[test]
fn division_by_zero() {
    for src in ["4/0", "4/(2-2)", "0/0"] {
        match evaluate(src) {
            Err(EvaluationFailure::Evaluation(e)) => {
                assert_eq!(e.kind, EvaluationErrorKind::DivisionByZero);
            },
            other => panic!("Expected division by zero for {src:?}, got {other:?}"),
        }
    }
}

#[test]
fn precedence_and_associativity() {
    assert_value("8-3-2", 3);
    assert_value("2+3*4", 14);
    assert_value("(2+3)*4", 20);
    assert_value("64/4/2", 8);
    assert_value("2*3-4*5", -14);
    assert_value("4-1*4+12/5+2*2", 6);
}

#[test]
fn whitespace_is_ignored() {
    assert_value(" 4  +   4 ", 8);
    assert_value("\t4\t*\t( 1 + 1 )\t", 8);
}

#[test]
fn malformed_input() {
    assert_parse_failure("4++4", ParseErrorKind::UnexpectedToken, 2);
    assert_parse_failure("(4+4", ParseErrorKind::UnmatchedParen, 0);
    assert_parse_failure("1 + (2 * (3)", ParseErrorKind::UnmatchedParen, 4);
    assert_parse_failure("-4+2", ParseErrorKind::UnexpectedToken, 0);
    assert_parse_failure("4 4", ParseErrorKind::TrailingInput, 2);
    assert_parse_failure("", ParseErrorKind::UnexpectedToken, 0);
    assert_parse_failure("   ", ParseErrorKind::UnexpectedToken, 3);

    match evaluate("4@4") {
        Err(EvaluationFailure::Lex(e)) => {
            assert_eq!(e.kind, LexErrorKind::UnrecognizedCharacter);
            assert_eq!(e.position, 1);
            assert_eq!(e.character, '@');
        },
        other => panic!("Expected a lex error, got {other:?}"),
    }
}

#[test]
fn errors_are_reported_lazily_in_source_order() {
    // The parser stops at the first problem; later characters are never lexed.
    assert_parse_failure("4 ++ @", ParseErrorKind::UnexpectedToken, 3);
    assert!(matches!(evaluate("4 + @ +"), Err(EvaluationFailure::Lex(_))));
}

#[test]
fn overflow_is_an_error() {
    for src in ["9223372036854775807 + 1",
                "(0 - 9223372036854775807 - 1) / (0 - 1)",
                "3037000500 * 3037000500"]
    {
        match evaluate(src) {
            Err(EvaluationFailure::Evaluation(e)) => {
                assert_eq!(e.kind, EvaluationErrorKind::Overflow, "evaluating {src:?}");
            },
            other => panic!("Expected overflow for {src:?}, got {other:?}"),
        }
    }
    assert_value("0 - 9223372036854775807 - 1", i64::MIN);
}

#[test]
fn error_messages() {
    let message = |src: &str| evaluate(src).unwrap_err().to_string();

    assert_eq!(message("4@4"), "Error at column 2: Unrecognized character '@'.");
    assert_eq!(message("4 / 0"), "Error at column 3: Division by zero.");
    assert_eq!(message("4++4"), "Error at column 3: Unexpected token '+'.");
    assert_eq!(message("(4+4"),
               "Error at column 1: Expected closing parenthesis ')' but found end of input.");
    assert_eq!(message("4 5"),
               "Error at column 3: Extra tokens after expression, starting with integer 5.");
}

#[test]
fn evaluation_is_repeatable() {
    for src in ["4-1*4+12/5+2*2", "4/0", "(4+4"] {
        assert_eq!(evaluate(src), evaluate(src));
    }
}

#[test]
fn long_operator_chains() {
    let terms = 200_000;
    let ones = vec!["1"; terms];

    assert_value(&ones.join("+"), 200_000);
    assert_value(&ones.join("*"), 1);
    assert_value(&format!("{}-{}", terms, ones.join("-")), 0);
    // A long multiplicative chain as the right operand of `+`.
    assert_value(&format!("5+{}", vec!["2"; 40].join("*")), 5 + (1 << 40));
    assert_value(&format!("7+{}", ones.join("*")), 8);

    match evaluate(&format!("{}/0", ones.join("+"))) {
        Err(EvaluationFailure::Evaluation(e)) => {
            assert_eq!(e.kind, EvaluationErrorKind::DivisionByZero);
        },
        other => panic!("Expected division by zero, got {other:?}"),
    }
}

#[test]
fn rendered_errors_point_at_the_column() {
    let render = |src: &str| evaluate(src).unwrap_err().render(src);

    assert_eq!(render("4@4"), "4@4\n ^\nError at column 2: Unrecognized character '@'.");
    assert_eq!(render("\t4\t+\t@"),
               "\t4\t+\t@\n\t \t \t^\nError at column 6: Unrecognized character '@'.");
    assert_eq!(render("(1"),
               "(1\n^\nError at column 1: Expected closing parenthesis ')' but found end of input.");
}
