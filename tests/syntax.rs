use chapa::{
    ast::{Block, Condition, Expr, Statement},
    error::{LexError, SyntaxError},
    interpreter::lexer::{Operator, Token},
    parse, scan,
};

fn kinds(source: &str) -> Vec<Token> {
    scan(source).unwrap_or_else(|e| panic!("Scan failed: {e}"))
                .into_iter()
                .map(|(token, _)| token)
                .collect()
}

fn parse_source(source: &str) -> Block {
    let tokens = scan(source).unwrap_or_else(|e| panic!("Scan failed: {e}"));
    parse(&tokens).unwrap_or_else(|e| panic!("Parse failed: {e}\nSource:\n{source}"))
}

fn assert_syntax_error(source: &str) -> SyntaxError {
    let tokens = scan(source).unwrap_or_else(|e| panic!("Scan failed: {e}"));
    match parse(&tokens) {
        Ok(program) => panic!("Parse succeeded but was expected to fail:\n{program}"),
        Err(e) => e,
    }
}

fn number(text: &str) -> Expr {
    Expr::NumberLiteral(text.into())
}

fn variable(name: &str) -> Expr {
    Expr::Variable(name.into())
}

#[test]
fn keywords_win_only_on_whole_words() {
    assert_eq!(kinds("jarvis jar JAR"),
               vec![Token::Identifier("jarvis".into()), Token::If, Token::If]);
    assert_eq!(kinds("paryant joparyant sampel"),
               vec![Token::For, Token::While, Token::EndWhile]);
    assert_eq!(kinds("HE AAHE karya PARAT nahitar"),
               vec![Token::VarDecl, Token::Function, Token::Return, Token::Else]);
}

#[test]
fn operators_prefer_the_longer_form() {
    assert_eq!(kinds("a != b <= c == d = e"),
               vec![Token::Identifier("a".into()),
                    Token::Operator(Operator::BangEqual),
                    Token::Identifier("b".into()),
                    Token::Operator(Operator::LessEqual),
                    Token::Identifier("c".into()),
                    Token::Operator(Operator::EqualEqual),
                    Token::Identifier("d".into()),
                    Token::Operator(Operator::Assign),
                    Token::Identifier("e".into())]);
}

#[test]
fn literals_keep_their_text() {
    assert_eq!(kinds("007 \"a // b\" x1 été"),
               vec![Token::Number("007".into()),
                    Token::Str("a // b".into()),
                    Token::Identifier("x1".into()),
                    Token::Identifier("été".into())]);
}

#[test]
fn tokens_carry_their_line() {
    let tokens = scan("chapa(1);\n\n  x = 2;\n// note\nparat").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|(_, line)| *line).collect();

    assert_eq!(lines, vec![1, 1, 1, 1, 1, 3, 3, 3, 3, 5]);
}

#[test]
fn lexical_errors() {
    assert_eq!(scan("chapa(1);\nx_1 = 2;").unwrap_err(),
               LexError::UnexpectedCharacter { character: '_',
                                               line:      2, });
    assert_eq!(scan("\n\nchapa(\"abc);").unwrap_err(),
               LexError::UnterminatedString { line: 3 });
    assert_eq!(scan("chapa(\"line\nbreak\");").unwrap_err(),
               LexError::UnterminatedString { line: 1 });
}

#[test]
fn expressions_are_left_associative() {
    let program = parse_source("chapa(1 + 2 * 3);");
    let expected = Expr::binary(Expr::binary(number("1"), Operator::Plus, number("2")),
                                Operator::Star,
                                number("3"));

    assert_eq!(program.statements, vec![Statement::Print(expected)]);
}

#[test]
fn parentheses_only_group() {
    let program = parse_source("chapa(a * (b - 1));");
    let expected = Expr::binary(variable("a"),
                                Operator::Star,
                                Expr::binary(variable("b"), Operator::Minus, number("1")));

    assert_eq!(program.statements, vec![Statement::Print(expected)]);
}

#[test]
fn calls_take_expression_arguments() {
    let program = parse_source("x = f() + g(1, y + 2);");
    let call_g = Expr::FunctionCall { name:      "g".into(),
                                      arguments: vec![number("1"),
                                                      Expr::binary(variable("y"),
                                                                   Operator::Plus,
                                                                   number("2"))], };
    let expected = Expr::binary(Expr::FunctionCall { name:      "f".into(),
                                                     arguments: vec![], },
                                Operator::Plus,
                                call_g);

    assert_eq!(program.statements,
               vec![Statement::Assignment { name:  "x".into(),
                                            value: expected, }]);
}

#[test]
fn bare_if_body_runs_to_the_end_of_input() {
    let program = parse_source("jar (x < 1) chapa(1); chapa(2);");

    assert_eq!(program.statements.len(), 1);
    let Statement::If { condition,
                        then_branch,
                        else_branch, } = &program.statements[0]
    else {
        panic!("expected an if statement");
    };
    assert_eq!(*condition,
               Condition { left:  variable("x"),
                           op:    Operator::Less,
                           right: number("1"), });
    assert_eq!(then_branch.statements.len(), 2);
    assert!(else_branch.is_none());
}

#[test]
fn for_header_semicolons_are_flexible() {
    let single = parse_source("paryant (he aahe i = 0; i < 3; i = i + 1) chapa(i); sampel");
    let double = parse_source("paryant (he aahe i = 0;; i < 3; i = i + 1;) { chapa(i); } sampel");

    assert_eq!(single, double);
}

#[test]
fn function_declaration() {
    let program = parse_source("karya add(a, b) { parat a + b; }");
    let Statement::Function(decl) = &program.statements[0] else {
        panic!("expected a function declaration");
    };

    assert_eq!(decl.name, "add");
    assert_eq!(decl.params, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(decl.body.statements,
               vec![Statement::Return(Expr::binary(variable("a"), Operator::Plus, variable("b")))]);
}

#[test]
fn missing_semicolon() {
    assert_eq!(assert_syntax_error("chapa(1)\nchapa(2);"),
               SyntaxError::UnexpectedToken { expected: "';'".into(),
                                              found:    "'chapa'".into(),
                                              line:     2, });
    assert_eq!(assert_syntax_error("he aahe x = 5"),
               SyntaxError::UnexpectedEndOfInput { expected: "';'".into(),
                                                   line:     1, });
}

#[test]
fn unclosed_loop() {
    let error = assert_syntax_error("joparyant (x < 1)\n  chapa(1);");
    assert_eq!(error,
               SyntaxError::UnexpectedEndOfInput { expected: "'sampel'".into(),
                                                   line:     2, });
}

#[test]
fn stray_terminators_are_rejected() {
    assert_eq!(assert_syntax_error("chapa(1); }"),
               SyntaxError::UnexpectedTrailingTokens { found: "'}'".into(),
                                                       line:  1, });
    assert!(matches!(assert_syntax_error("sampel"),
                     SyntaxError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn conditions_hold_plain_comparands() {
    let error = assert_syntax_error("jar (x + 1 < 2) chapa(1);");
    assert!(matches!(error, SyntaxError::UnexpectedToken { line: 1, .. }));
}

#[test]
fn remainder_is_not_part_of_expressions() {
    let error = assert_syntax_error("chapa(7 % 2);");
    assert_eq!(error,
               SyntaxError::UnexpectedToken { expected: "')'".into(),
                                              found:    "operator '%'".into(),
                                              line:     1, });
}

#[test]
fn statements_cannot_start_with_anything_else() {
    let error = assert_syntax_error("5;");
    assert_eq!(error,
               SyntaxError::UnexpectedToken { expected: "a statement".into(),
                                              found:    "number 5".into(),
                                              line:     1, });
}

#[test]
fn canonical_form_parses_back_to_the_same_tree() {
    let sources = ["he aahe x = 5; chapa(x);",
                   "HE AAHE s = \"a\"; CHAPA(s + 1 * (2 - x));",
                   "jar (1 < 2) { chapa(\"yes\"); } nahitar { chapa(\"no\"); }",
                   "jar (x == 1) chapa(1); jar (y >= 2) chapa(2); nahitar chapa(3);",
                   "joparyant (x < 3) { chapa(x); he aahe x = x + 1; } sampel",
                   "paryant (he aahe i = 0;; i <= 3; i = i + 1) chapa(i); sampel",
                   "karya f(a, b) { jar (a > b) { parat a; } parat f(b, a) + 0; } chapa(f(1, 2));",
                   "karya none() { } x = none();",
                   ""];

    for source in sources {
        let program = parse_source(source);
        let rendered = program.to_string();
        let reparsed = parse_source(&rendered);

        assert_eq!(program, reparsed, "Canonical form did not round-trip:\n{rendered}");
        assert_eq!(rendered, reparsed.to_string());
    }
}

#[test]
fn canonical_form_layout() {
    let program = parse_source("karya f(n) { paryant (he aahe i = 0; i < n; i = i + 1) chapa(i); \
                                sampel }");

    assert_eq!(program.to_string(),
               "karya f(n) {\n    paryant (he aahe i = 0; i < n; i = i + 1) {\n        \
                chapa(i);\n    } sampel\n}\n");
}
