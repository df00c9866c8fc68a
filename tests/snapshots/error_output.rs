use insta::assert_snapshot;
use minic::{CompileError, ErrorKind};

/// Drop SGR escape sequences so the snapshot shows layout only.
fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            out.push(c);
        }
    }
    out
}

fn render(label: &str, err: &CompileError) -> String {
    format!("{label}\n---\n{}\n", strip_ansi(&minic::format_error(err)))
}

#[test]
fn error_outputs() {
    let cases = ["(add 10", ")", "(1 2)", "(add 1 $)", "(a 1)\n(b $)"];

    let mut parts: Vec<String> = cases
        .iter()
        .map(|case| render(&format!("{case:?}"), &minic::compile(case).unwrap_err()))
        .collect();

    // Positions on later lines, as reported for multi-line sources.
    let second_line = CompileError {
        kind: ErrorKind::InvalidCharacter { ch: '$' },
        span: 9..10,
        source: "(a 1)\n(b $)".to_string(),
    };
    parts.push(render("second line", &second_line));

    assert_snapshot!(parts.join("===\n"));
}
