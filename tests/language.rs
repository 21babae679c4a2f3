use std::fs;

use chapa::{
    Interpreter, Settings,
    error::{Error, EvalError, Failure},
    interpret, interpret_with,
    interpreter::{lexer::Operator, value::Value},
};
use walkdir::WalkDir;

#[test]
fn sample_scripts_print_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "mr"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        match interpret(&source) {
            Ok(output) => assert_eq!(output, expected, "Script {path:?} printed the wrong output"),
            Err(e) => panic!("Script {path:?} failed: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn assert_output(src: &str, expected: &str) {
    match interpret(src) {
        Ok(output) => assert_eq!(output, expected, "Script:\n{src}"),
        Err(e) => panic!("Script failed: {e}\nScript:\n{src}"),
    }
}

fn assert_failure(src: &str) -> Failure {
    match interpret(src) {
        Ok(output) => panic!("Script succeeded but was expected to fail, output: {output:?}"),
        Err(failure) => failure,
    }
}

fn assert_eval_error(src: &str) -> EvalError {
    match assert_failure(src).error {
        Error::Eval(e) => e,
        other => panic!("Expected a runtime error, got: {other}"),
    }
}

#[test]
fn declaration_and_print() {
    assert_output("he aahe x = 5; chapa(x);", "5\n");
    assert_output("he aahe x = 2; he aahe y = 3; chapa(x + y);", "5\n");
    assert_output("chapa(\"namaskar\");", "namaskar\n");
    assert_output("", "");
}

#[test]
fn assignment_needs_no_prior_declaration() {
    assert_output("y = 4; chapa(y);", "4\n");
    assert_output("he aahe x = 1; x = x + 1; chapa(x);", "2\n");
}

#[test]
fn expressions_fold_left_without_precedence() {
    assert_output("chapa(2 + 3 * 4);", "20\n");
    assert_output("chapa(10 - 2 - 3);", "5\n");
    assert_output("chapa(2 * (3 + 4));", "14\n");
    assert_output("chapa((((6))));", "6\n");
}

#[test]
fn plus_concatenates_when_either_side_is_a_string() {
    assert_output("he aahe s = \"a\"; chapa(s + 1);", "a1\n");
    assert_output("chapa(\"n=\" + 1 + 2);", "n=12\n");
    assert_output("chapa(1 + 2 + \"x\");", "3x\n");
    assert_output("chapa(\"ab\" + \"cd\");", "abcd\n");
}

#[test]
fn other_arithmetic_parses_strings_as_integers() {
    assert_output("chapa(\"12\" - 2);", "10\n");
    assert_output("chapa(\"6\" * \"7\");", "42\n");

    let error = assert_eval_error("chapa(\"abc\" * 2);");
    assert!(matches!(error, EvalError::ExpectedInteger { ref found, .. } if found == "abc"));
}

#[test]
fn division_truncates_toward_zero() {
    assert_output("chapa(7 / 2);", "3\n");
    assert_output("chapa(0 - 7 / 2);", "-3\n");
}

#[test]
fn remainder_truncates_toward_zero() {
    let rem = |a: i64, b: i64| {
        Interpreter::eval_binary(Operator::Percent, &Value::Integer(a), &Value::Integer(b))
    };

    assert_eq!(rem(7, 2), Ok(Value::Integer(1)));
    assert_eq!(rem(-7, 2), Ok(Value::Integer(-1)));
    assert_eq!(rem(7, -2), Ok(Value::Integer(1)));
    assert_eq!(rem(5, 0), Err(EvalError::DivisionByZero));
}

#[test]
fn remainder_parses_string_operands() {
    let result = Interpreter::eval_binary(Operator::Percent, &Value::from("9"), &Value::Integer(4));
    assert_eq!(result, Ok(Value::Integer(1)));

    let result = Interpreter::eval_binary(Operator::Percent, &Value::from("x"), &Value::Integer(4));
    assert!(matches!(result, Err(EvalError::ExpectedInteger { .. })));
}

#[test]
fn division_by_zero_is_reported() {
    assert_eq!(assert_eval_error("chapa(1 / 0);"), EvalError::DivisionByZero);
    assert_eq!(assert_eval_error("he aahe z = 0; chapa(5 / z);"), EvalError::DivisionByZero);
}

#[test]
fn arithmetic_overflow_is_reported() {
    let error = assert_eval_error("he aahe x = 9223372036854775807; chapa(x + 1);");
    assert_eq!(error, EvalError::Overflow { operator: "+".into() });

    let error = assert_eval_error("chapa(9223372036854775808);");
    assert_eq!(error,
               EvalError::LiteralTooLarge { literal: "9223372036854775808".into() });
}

#[test]
fn keywords_ignore_case_but_names_do_not() {
    assert_output("HE AAHE x = 1; CHAPA(x);", "1\n");
    assert_output("He Aahe x = 1; Jar (x == 1) Chapa(\"ho\"); Nahitar Chapa(\"nahi\");",
                  "ho\n");

    let error = assert_eval_error("he aahe x = 1; chapa(X);");
    assert_eq!(error, EvalError::UndefinedVariable { name: "X".into() });
}

#[test]
fn identifiers_may_start_with_a_keyword() {
    assert_output("he aahe jarvis = 3; chapa(jarvis);", "3\n");
    assert_output("he aahe chapai = 4; chapa(chapai);", "4\n");
}

#[test]
fn if_with_and_without_else() {
    assert_output("jar (1 < 2) { chapa(\"yes\"); } nahitar { chapa(\"no\"); }", "yes\n");
    assert_output("he aahe x = 5; jar (x < 3) { chapa(\"small\"); } nahitar { chapa(\"big\"); }",
                  "big\n");
    assert_output("jar (2 < 1) { chapa(\"never\"); } chapa(\"after\");", "after\n");
}

#[test]
fn bare_bodies_run_to_the_next_terminator() {
    assert_output("jar (3 == 3) chapa(\"eq\");", "eq\n");
    // Without braces the branch swallows every statement that follows.
    assert_output("jar (1 > 2) chapa(1); chapa(2);", "");
}

#[test]
fn all_comparison_operators() {
    assert_output("jar (2 <= 2) chapa(1);", "1\n");
    assert_output("jar (3 >= 4) chapa(1); nahitar chapa(0);", "0\n");
    assert_output("jar (5 > 4) chapa(1);", "1\n");
    assert_output("jar (4 == 5) chapa(1); nahitar chapa(0);", "0\n");
}

#[test]
fn not_equal_is_not_a_comparison() {
    let error = assert_eval_error("jar (3 != 4) chapa(1);");
    assert_eq!(error, EvalError::UnknownOperator { operator: "!=".into() });

    let error = assert_eval_error("jar (3 = 4) chapa(1);");
    assert_eq!(error, EvalError::UnknownOperator { operator: "=".into() });
}

#[test]
fn conditions_need_integers() {
    let error = assert_eval_error("he aahe s = \"a\"; jar (s < 1) chapa(1);");
    assert!(matches!(error, EvalError::ExpectedInteger { .. }));
}

#[test]
fn while_loop() {
    assert_output("he aahe x = 0; joparyant (x < 3) { chapa(x); he aahe x = x + 1; } sampel",
                  "0\n1\n2\n");
    assert_output("he aahe x = 9; joparyant (x < 3) chapa(x); sampel chapa(\"done\");",
                  "done\n");
}

#[test]
fn for_loop_accepts_either_header_form() {
    assert_output("paryant (he aahe i = 0;; i < 3; i = i + 1) chapa(i); sampel",
                  "0\n1\n2\n");
    assert_output("paryant (he aahe i = 1; i <= 3; i = i + 1;) { chapa(i * 10); } sampel",
                  "10\n20\n30\n");
}

#[test]
fn for_loop_variable_outlives_the_loop() {
    assert_output("paryant (he aahe i = 0; i < 2; i = i + 1) { } sampel chapa(i);", "2\n");
}

#[test]
fn functions_return_values() {
    assert_output("karya square(n) { parat n * n; } chapa(square(7));", "49\n");
    assert_output("karya add(a, b) { parat a + b; } chapa(add(2, add(3, 4)));", "9\n");
    assert_output("karya greet(name) { parat \"namaste \" + name; } chapa(greet(\"jag\"));",
                  "namaste jag\n");
}

#[test]
fn recursion() {
    assert_output("karya fact(n) { jar (n <= 1) { parat 1; } parat n * fact(n - 1); } \
                   chapa(fact(5));",
                  "120\n");
}

#[test]
fn calls_copy_the_store_in_and_out() {
    assert_output("he aahe x = 1; karya f(a) { x = 100; parat a; } chapa(f(5)); chapa(x);",
                  "5\n1\n");
    assert_output("he aahe a = 3; karya f(a) { parat a; } chapa(f(9)); chapa(a);",
                  "9\n3\n");
    assert_output("he aahe g = 10; karya h(a) { parat a + g; } chapa(h(1));", "11\n");
}

#[test]
fn later_arguments_see_earlier_parameters() {
    assert_output("he aahe a = 10; karya f(a, b) { parat b; } chapa(f(1, a)); chapa(a);",
                  "1\n10\n");
    assert_output("karya f(x, y) { parat x + y; } chapa(f(2, x * 3));", "8\n");
}

#[test]
fn return_leaves_loops_inside_functions() {
    assert_output("karya first() { he aahe i = 0; joparyant (i < 10) { jar (i == 3) { parat i; } \
                   i = i + 1; } sampel parat 0 - 1; } chapa(first());",
                  "3\n");
}

#[test]
fn later_declaration_replaces_earlier() {
    assert_output("karya f() { parat 1; } karya f() { parat 2; } chapa(f());", "2\n");
}

#[test]
fn wrong_argument_count_names_the_function() {
    let failure = assert_failure("karya f(a) { parat a; } chapa(f(1, 2));");

    assert!(failure.to_string().contains("'f'"));
    assert!(matches!(failure.error,
                     Error::Eval(EvalError::ArgumentCountMismatch { ref name,
                                                                    expected: 1,
                                                                    found: 2 }) if name == "f"));
}

#[test]
fn undeclared_variable_names_the_variable() {
    let failure = assert_failure("chapa(y);");

    assert!(failure.to_string().contains("'y'"));
    assert!(matches!(failure.error,
                     Error::Eval(EvalError::UndefinedVariable { ref name }) if name == "y"));
}

#[test]
fn undefined_function() {
    let error = assert_eval_error("chapa(nothing(1));");
    assert_eq!(error, EvalError::UndefinedFunction { name: "nothing".into() });
}

#[test]
fn using_a_call_without_return_is_an_error() {
    let failure = assert_failure("karya noop() { chapa(\"hi\"); } chapa(noop());");

    assert_eq!(failure.output, "hi\n");
    assert!(matches!(failure.error,
                     Error::Eval(EvalError::MissingValue { ref function }) if function == "noop"));
}

#[test]
fn return_outside_function() {
    assert_eq!(assert_eval_error("chapa(1); parat 1;"), EvalError::ReturnOutsideFunction);
}

#[test]
fn call_depth_is_limited() {
    let source = "karya f(n) { parat f(n + 1); } chapa(f(0));";
    let failure = interpret_with(source, Settings { max_call_depth: 50 }).unwrap_err();

    assert!(matches!(failure.error,
                     Error::Eval(EvalError::CallDepthExceeded { ref function, limit: 50 })
                     if function == "f"));
}

#[test]
fn output_before_an_error_is_kept() {
    let failure = assert_failure("chapa(1); chapa(2); chapa(1 / 0); chapa(3);");
    assert_eq!(failure.output, "1\n2\n");
}

#[test]
fn front_end_errors_carry_no_output() {
    let failure = assert_failure("chapa(1); chapa(2)");
    assert!(matches!(failure.error, Error::Syntax(_)));
    assert_eq!(failure.output, "");

    let failure = assert_failure("chapa(1); #");
    assert!(matches!(failure.error, Error::Lex(_)));
    assert_eq!(failure.output, "");
}

#[test]
fn comments_are_ignored() {
    assert_output("// heading\nchapa(1); // trailing\n// chapa(2);\n", "1\n");
}

#[test]
fn runs_are_deterministic() {
    let source = "he aahe a = 4; he aahe b = \"x\"; chapa(a * 3 - 2); chapa(b + a); \
                  jar (a > 2) chapa(\"big\");";

    let first = interpret(source).unwrap();
    let second = interpret(source).unwrap();

    assert_eq!(first, "10\nx4\nbig\n");
    assert_eq!(first, second);
}
