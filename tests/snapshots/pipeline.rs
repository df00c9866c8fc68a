use insta::assert_snapshot;

#[test]
fn calls() {
    let cases = [
        "(add 10 5)",
        "(add 10 (asd 10 6))",
        "(f 1 2 3)",
        "(a 1)(b 2)",
        "(now) (later (now))",
    ];

    let mut out = String::new();
    for (i, case) in cases.iter().enumerate() {
        if i > 0 {
            out.push_str("===\n");
        }
        let c = minic::compile(case).unwrap();
        out.push_str(case);
        out.push_str("\n---\n");
        out.push_str(&c);
        out.push('\n');
    }

    assert_snapshot!(out);
}
