use insta::assert_snapshot;
use minic::{compile_with_debug, render_debug_text, DebugInfo, Options};

#[test]
fn nested_call_trace() {
    let mut info = DebugInfo::default();
    compile_with_debug("(f 1 (g 2))", &Options::default(), Some(&mut info)).unwrap();
    assert_snapshot!(render_debug_text(&info));
}
