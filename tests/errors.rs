use ceval::{
    error::{EvalError, LexError, ParseError, RuntimeError},
    interpreter::parser::core::{MAX_EXPRESSION_HEIGHT, MAX_NESTING_DEPTH},
    run,
};

fn run_err(src: &str) -> EvalError {
    match run(src) {
        Ok(value) => panic!("Program succeeded with {value} but was expected to fail: {src}"),
        Err(e) => e,
    }
}

#[test]
fn undeclared_variable_read() {
    let err = run_err("({ x; })");
    assert_eq!(err,
               EvalError::Runtime(RuntimeError::UndeclaredVariable { name: "x".to_string(),
                                                                     line: 1, }));
}

#[test]
fn undeclared_variable_write() {
    let err = run_err("int a;\na = 1;\nb = 2;");
    assert_eq!(err,
               EvalError::Runtime(RuntimeError::UndeclaredVariable { name: "b".to_string(),
                                                                     line: 3, }));
}

#[test]
fn use_before_declaration() {
    assert!(matches!(run_err("x = 1; int x;"),
                     EvalError::Runtime(RuntimeError::UndeclaredVariable { .. })));
}

#[test]
fn division_by_zero() {
    assert_eq!(run_err("({ 1/0; })"),
               EvalError::Runtime(RuntimeError::DivisionByZero { line: 1 }));
    assert!(matches!(run_err("int z = 0;\nint a = 10 / z;"),
                     EvalError::Runtime(RuntimeError::DivisionByZero { line: 2 })));
}

#[test]
fn errors_stop_the_run() {
    assert!(matches!(run_err("int i = 0; while (i < 10) { i = i + 1; i = i / (5 - i); }"),
                     EvalError::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn unrecognized_character() {
    assert_eq!(run_err("1 + $"),
               EvalError::Lex(LexError::UnrecognizedCharacter { text: "$".to_string(),
                                                                line: 1, }));
    assert!(matches!(run_err("int a = 1;\na % 2"),
                     EvalError::Lex(LexError::UnrecognizedCharacter { line: 2, .. })));
}

#[test]
fn unterminated_block_comment() {
    assert_eq!(run_err("1 +\n/* never closed\n 2"),
               EvalError::Lex(LexError::UnterminatedComment { line: 2 }));
}

#[test]
fn integer_literal_too_large() {
    assert!(matches!(run_err("99999999999999999999"),
                     EvalError::Lex(LexError::IntegerTooLarge { .. })));
}

#[test]
fn assignment_to_non_variable() {
    assert_eq!(run_err("int a; 1 = a;"),
               EvalError::Parse(ParseError::InvalidAssignmentTarget { line: 1 }));
    assert!(matches!(run_err("int a; int b; a + b = 3;"),
                     EvalError::Parse(ParseError::InvalidAssignmentTarget { .. })));
}

#[test]
fn missing_semicolon() {
    assert!(matches!(run_err("int a = 1 a"),
                     EvalError::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(run_err("({ 1 })"),
                     EvalError::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn unexpected_end_of_input() {
    assert_eq!(run_err("int a = 1;\n({ a;"),
               EvalError::Parse(ParseError::UnexpectedEndOfInput { expected: "'}'".to_string(),
                                                                   line:     2, }));
    assert!(matches!(run_err("1 +"),
                     EvalError::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(run_err("if (1"),
                     EvalError::Parse(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn keywords_are_not_identifiers() {
    assert!(matches!(run_err("int while = 3;"),
                     EvalError::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn malformed_statements() {
    assert!(matches!(run_err("if 1 x = 2;"),
                     EvalError::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(run_err("for (i = 0; i < 3) i;"),
                     EvalError::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(run_err("else 3;"),
                     EvalError::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(run_err(")"),
                     EvalError::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn messages_name_line_and_token() {
    let message = run_err("int a = 1;\nint b = ;").to_string();
    assert_eq!(message, "Error on line 2: Expected expression, found ';'.");

    let message = run_err("int x = 0;\n\ny").to_string();
    assert_eq!(message, "Error on line 3: Undeclared variable 'y'.");

    assert_eq!(run_err("1 +\n\n\n@").line(), 4);

    let message = run_err("/* a\n b\n */ x").to_string();
    assert_eq!(message, "Error on line 3: Undeclared variable 'x'.");
}

fn assert_too_deep(src: &str) {
    assert!(matches!(run_err(src), EvalError::Parse(ParseError::NestingTooDeep { .. })),
            "expected a nesting error");
}

#[test]
fn deeply_nested_parentheses() {
    let n = 10_000;
    assert_eq!(run_err(&format!("{}1{}", "(".repeat(n), ")".repeat(n))),
               EvalError::Parse(ParseError::NestingTooDeep { line: 1 }));

    let n = MAX_NESTING_DEPTH + 1;
    assert_too_deep(&format!("{}1{}", "(".repeat(n), ")".repeat(n)));
}

#[test]
fn deeply_nested_blocks_and_statements() {
    let n = 10_000;
    assert_too_deep(&format!("{}1;{}", "({ ".repeat(n), " })".repeat(n)));
    assert_too_deep(&format!("{}1;{}", "{ ".repeat(n), " }".repeat(n)));
    assert_too_deep(&format!("{}1;", "if (1) ".repeat(n)));
    assert_too_deep(&format!("{}1;", "while (0) ".repeat(n)));
    assert_too_deep(&format!("{}1;", "for (;0;) ".repeat(n)));
}

#[test]
fn long_operator_chains() {
    let n = 10_000;
    assert_too_deep(&format!("{}1", "-".repeat(n)));
    assert_too_deep(&format!("int a; {}1;", "a = ".repeat(n)));
    assert_too_deep(&format!("1{}", " + 1".repeat(n)));
    assert_too_deep(&format!("1{}", " + 1".repeat(MAX_EXPRESSION_HEIGHT)));
}

#[test]
fn nesting_error_names_its_line() {
    let src = format!("int a = 1;\na + {}", "(".repeat(10_000));
    assert_eq!(run_err(&src).to_string(),
               "Error on line 2: Program is nested too deeply.");
}
