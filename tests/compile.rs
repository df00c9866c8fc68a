use minic::{compile, compile_with_options, ErrorKind, Options, ScanPolicy, DEFAULT_MAX_DEPTH};

#[test]
fn test_simple_call() {
    assert_eq!(compile("(add 10 5)").unwrap(), "add(10, 5);");
}

#[test]
fn test_nested_call() {
    assert_eq!(compile("(add 10 (asd 10 6))").unwrap(), "add(10, asd(10, 6));");
}

#[test]
fn test_deeply_nested_call() {
    assert_eq!(
        compile("(add 10 (subtract (quote 5 4) 6))").unwrap(),
        "add(10, subtract(quote(5, 4), 6));"
    );
}

#[test]
fn test_two_top_level_forms() {
    assert_eq!(compile("(a 1)(b 2)").unwrap(), "a(1);\nb(2);");
}

#[test]
fn test_argument_order_preserved() {
    assert_eq!(compile("(f 1 2 3)").unwrap(), "f(1, 2, 3);");
}

#[test]
fn test_literal_text_preserved() {
    assert_eq!(compile("(f 007 0)").unwrap(), "f(007, 0);");
}

#[test]
fn test_only_top_level_calls_end_statements() {
    let out = compile("(f 10 (g 1 2)) (h (i (j)))").unwrap();
    assert_eq!(out, "f(10, g(1, 2));\nh(i(j()));");
    for line in out.lines() {
        assert_eq!(line.matches(';').count(), 1);
        assert!(line.ends_with(';'));
    }
}

#[test]
fn test_sample_program() {
    let program = concat!(
        "(add 10 5)",
        "(add 10 (asd 10 6))",
        "(add 10 (qwerty (asd 10 4) 6))",
        "(add 10 (subtract (quote 5 4) 6))",
        "(add 10 (subtract (quote (saver 3 4) 4) 6))",
    );
    let expected = "\
add(10, 5);
add(10, asd(10, 6));
add(10, qwerty(asd(10, 4), 6));
add(10, subtract(quote(5, 4), 6));
add(10, subtract(quote(saver(3, 4), 4), 6));";
    assert_eq!(compile(program).unwrap(), expected);
}

#[test]
fn test_empty_source() {
    assert_eq!(compile("").unwrap(), "");
}

#[test]
fn test_missing_close_paren() {
    let err = compile("(add 10").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedEndOfInput { expected: "`)`" });
    assert_eq!(err.position(), 7);
    assert_eq!(err.source, "(add 10");
}

#[test]
fn test_stray_close_paren() {
    let err = compile(")").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnexpectedToken { .. }));
    assert_eq!(err.to_string(), "expected a number or `(`, found `)`");
}

#[test]
fn test_invalid_character_is_an_error_by_default() {
    let err = compile("(add 1 $)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidCharacter { ch: '$' });
    assert_eq!(err.position(), 7);
}

#[test]
fn test_truncate_policy() {
    let options = Options {
        scan_policy: ScanPolicy::Truncate,
        ..Options::default()
    };
    assert_eq!(
        compile_with_options("(a 1)(b 2)#(c 3)", &options).unwrap(),
        "a(1);\nb(2);"
    );

    let err = compile_with_options("(add 1 $)", &options).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedEndOfInput { expected: "`)`" });
}

fn nested(depth: usize) -> String {
    format!("{}1{}", "(f ".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_deep_nesting_is_an_error_not_a_crash() {
    let src = nested(100_000);
    let err = compile_with_options(&src, &Options::default()).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::NestingTooDeep {
            limit: DEFAULT_MAX_DEPTH
        }
    );
    assert_eq!(err.position(), 3 * DEFAULT_MAX_DEPTH);
}

#[test]
fn test_nesting_at_the_limit_compiles() {
    let out = compile_with_options(&nested(DEFAULT_MAX_DEPTH), &Options::default()).unwrap();
    assert!(out.starts_with("f(f(f("));
    assert!(out.ends_with("1)));"));
    assert_eq!(out.matches('(').count(), DEFAULT_MAX_DEPTH);
}
