use std::fs;

use ceval::{
    interpreter::{
        environment::Environment,
        parser::core::{MAX_EXPRESSION_HEIGHT, MAX_NESTING_DEPTH},
    },
    run, run_with_environment,
};
use walkdir::WalkDir;

/// `(expected, actual)` pairs from the assert-style C test fixture, with `actual`
/// written exactly as it appears in the harness call.
const FIXTURE: &[(i64, &str)] = &[(0, "0"),
                                  (42, "42"),
                                  (21, "5 + 20 - 4"),
                                  (41, "12 + 34 - 5"),
                                  (47, "5 + 6 * 7"),
                                  (15, "5 * (9 - 6)"),
                                  (4, "(3 + 5) / 2"),
                                  (10, "-10 + 20"),
                                  (1, "(-3 + 5) / 2"),
                                  (6, "(-3 * +4) / -2"),
                                  (10, "- -10"),
                                  (10, "- -+10"),
                                  (0, "0 == 1"),
                                  (1, "42 == 42"),
                                  (1, "0 != 1"),
                                  (0, "42 != 42"),
                                  (1, "0 < 1"),
                                  (0, "1 < 1"),
                                  (0, "2 < 1"),
                                  (1, "0 <= 1"),
                                  (1, "1 <= 1"),
                                  (0, "2 <= 1"),
                                  (1, "1 > 0"),
                                  (0, "1 > 1"),
                                  (0, "1 > 2"),
                                  (1, "1 >= 0"),
                                  (1, "1 >= 1"),
                                  (0, "1 >= 2"),
                                  (3, "({ int a; a=3; a; })"),
                                  (8, "({ int a; int z; a=3; z=5; a+z; })"),
                                  (1, "({ int a=5; int z=4; a-z; })"),
                                  (15, "({ int a=3; int z=5; a*z; })"),
                                  (2, "({ int a=8; int z=4; a/z; })"),
                                  (6, "({ int a; int b; a=b=3; a+b; })"),
                                  (3, "({ int foo=3; foo; })"),
                                  (8, "({ int foo123=3; int bar=5; foo123+bar; })"),
                                  (3, "({ int x=0; if (0) x=2; else x=3; x; })"),
                                  (3, "({ int x=0; if (1-1) x=2; else x=3; x; })"),
                                  (2, "({ int x=0; if (1) x=2; else x=3; x; })"),
                                  (2, "({ int x=0; if (2-1) x=2; else x=3; x; })"),
                                  (3, "({ 1; {2;} 3; })"),
                                  (10, "({ int i=0; i=0; while(i<10) i=i+1; i; })"),
                                  (55, "({ int i=0; int j=0; while(i<=10) {j=i+j; i=i+1;} j; })"),
                                  (55, "({ int i=0; int j=0; for (i=0; i<=10; i=i+1) j=i+j; j; })")];

fn assert_value(src: &str, expected: i64) {
    match run(src) {
        Ok(actual) => assert_eq!(actual, expected, "{src} => {expected} expected but got {actual}"),
        Err(e) => panic!("Program failed: {src}\nError: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = run(src) {
        panic!("Program succeeded with {value} but was expected to fail: {src}")
    }
}

#[test]
fn fixture_expressions() {
    for (expected, actual) in FIXTURE {
        assert_value(actual, *expected);
    }
}

#[test]
fn fixture_code_strings_run_as_programs() {
    assert_value("int a; a=3; a;", 3);
    assert_value("int a; int z; a=3; z=5; a+z;", 8);
    assert_value("int foo=3; foo", 3);
    assert_value("int x=0; if (1-1) x=2; else x=3; x;", 3);
    assert_value("1; {2;} 3;", 3);
    assert_value("int i=0; int j=0; while(i<=10) {j=i+j; i=i+1;} j;", 55);
}

#[test]
fn precedence_and_associativity() {
    assert_value("({ 5 + 6 * 7; })", 47);
    assert_value("({ 5 * (9 - 6); })", 15);
    assert_value("({ (3 + 5) / 2; })", 4);
    assert_value("10 - 4 - 3", 3);
    assert_value("64 / 4 / 2", 8);
    assert_value("1 + 2 == 3", 1);
    assert_value("1 < 2 == 2 > 1", 1);
    assert_value("(1 < 2) + (3 >= 3) + (4 != 4)", 2);
}

#[test]
fn unary_operators() {
    assert_value("({ - -10; })", 10);
    assert_value("({ - -+10; })", 10);
    assert_value("-(2 * 3)", -6);
    assert_value("+-+-7", 7);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", 3);
    assert_value("-7 / 2", -3);
    assert_value("7 / -2", -3);
    assert_value("-7 / -2", 3);
}

#[test]
fn arithmetic_wraps_on_overflow() {
    assert_value("9223372036854775807 + 1", i64::MIN);
    assert_value("0 - 9223372036854775807 - 1 - 1", i64::MAX);
    assert_value("(0 - 9223372036854775807 - 1) / -1", i64::MIN);
}

#[test]
fn declarations_and_assignment() {
    assert_value("int a; a", 0);
    assert_value("int a = 7; int a = 2; a", 2);
    assert_value("int a; int b; int c; a = b = c = 4; a + b + c", 12);
    assert_value("int a = 1; (a = 5) + a", 10);
    assert_value("int a = 2; a = a * a; a = a * a; a", 16);
}

#[test]
fn block_expressions() {
    assert_value("({ 1; {2;} 3; })", 3);
    assert_value("({ int a = 2; a * ({ 5; }); })", 10);
    assert_value("({ })", 0);
    assert_value("({ 5; int a; })", 0);
    assert_value("({ 5; if (1) 6; })", 0);
    assert_value("({ 5; {6;} })", 0);
    assert_value("({ int x = ({ int y = 4; y * y; }); x + y; })", 20);
}

#[test]
fn nested_blocks_share_one_scope() {
    assert_value("{ int inner = 9; } inner", 9);
    assert_value("int x = 1; { int x = 2; } x", 2);
}

#[test]
fn if_else() {
    assert_value("({ int x=0; if (0) x=2; else x=3; x; })", 3);
    assert_value("int x = 0; if (-1) x = 1; x", 1);
    assert_value("int x = 5; if (0) x = 1; x", 5);
    assert_value("int x = 1; if (1) if (0) x = 2; else x = 3; x", 3);
    assert_value("int x = 1; if (0) if (1) x = 2; else x = 3; x", 1);
    assert_value("int x = 0; if (0) x = 1; else if (0) x = 2; else x = 3; x", 3);
}

#[test]
fn while_loops() {
    assert_value("({ int i=0; i=0; while(i<10) i=i+1; i; })", 10);
    assert_value("int n = 3; while (0) n = n + 1; n", 3);
    assert_value("int n = 5; int f = 1; while (n) { f = f * n; n = n - 1; } f", 120);
}

#[test]
fn for_loops() {
    assert_value("({ int i=0; int j=0; for (i=0; i<=10; i=i+1) j=i+j; j; })", 55);
    assert_value("int i = 3; for (; i < 10;) i = i + 2; i", 11);
    assert_value("int s = 0; int i; for (i = 10; i < 3; i = i + 1) s = s + 1; s", 0);
    assert_value("int i = 0; for (;;) { i = i + 1; if (i == 4) return i * 10; }", 40);
}

#[test]
fn return_ends_the_program() {
    assert_value("int foo123=3; int bar=5; return foo123+bar;", 8);
    assert_value("int foo123=3; int bar=5; return foo123+bar", 8);
    assert_value("return 1; 2;", 1);
    assert_value("int i = 0; while (1) { i = i + 1; if (i > 6) return i; }", 7);
    assert_value("1 + ({ return 9; 2; })", 9);
}

#[test]
fn only_a_final_top_level_return_may_drop_its_semicolon() {
    assert_failure("return 1 2;");
    assert_failure("int a = 1; if (a) return a");
    assert_failure("({ return 1 })");
}

#[test]
fn nesting_up_to_the_limits() {
    let n = MAX_NESTING_DEPTH;
    assert_value(&format!("{}1{}", "(".repeat(n), ")".repeat(n)), 1);
    assert_value(&format!("{}7", "-".repeat(n)), if n % 2 == 0 { 7 } else { -7 });

    assert_value(&format!("{}7;{}", "({ ".repeat(30), " });".repeat(30)), 7);
    assert_value(&format!("int x = 0; {}x = 5;{} x", "{ ".repeat(30), " }".repeat(30)), 5);

    let terms = i64::try_from(MAX_EXPRESSION_HEIGHT).unwrap();
    assert_value(&format!("1{}", " + 1".repeat(MAX_EXPRESSION_HEIGHT - 1)), terms);
}

#[test]
fn empty_statements() {
    assert_value(";;; 4;", 4);
    assert_value("int i = 0; while (i < 3) i = i + 1; ; i", 3);
    assert_value("({ ; })", 0);
}

#[test]
fn comments_and_whitespace() {
    assert_value("// This is a line comment.\n1 + 1", 2);
    assert_value("/*\n * This is a block comment.\n */\n3 /* inline */ * 4", 12);
    assert_value("\t({\n  int a = 1;\n  a + 1;\n})\n", 2);
}

#[test]
fn runs_are_independent() {
    let src = "({ int a = 3; a = a * 7; a; })";
    assert_eq!(run(src).unwrap(), run(src).unwrap());

    assert_value("int leaked = 1; leaked", 1);
    assert_failure("leaked");
}

#[test]
fn globals_from_a_shared_environment() {
    let mut globals = Environment::new();
    globals.declare("g1", 0);

    for _ in 0..3 {
        run_with_environment("g1 = g1 + 2;", &mut globals).unwrap();
    }

    assert_eq!(globals.get("g1", 1).unwrap(), 6);
    assert_eq!(run_with_environment("int local = g1; local + 1", &mut globals).unwrap(), 7);
    assert!(globals.contains("local"));
    assert_eq!(globals.len(), 2);
}

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "c"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let expected = expected_value(&content).unwrap_or_else(|| {
                                                    panic!("{path:?} has no '// expect:' header")
                                                });

        count += 1;
        match run(&content) {
            Ok(actual) => assert_eq!(actual, expected, "script {path:?}"),
            Err(e) => panic!("Script {path:?} failed:\n{content}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn expected_value(content: &str) -> Option<i64> {
    content.lines()
           .next()?
           .trim()
           .strip_prefix("// expect:")?
           .trim()
           .parse()
           .ok()
}
