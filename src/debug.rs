use std::io::{self, Write};

use crate::ast::TargetProgram;

/// Trace of one compilation: pipeline events, warnings, and the final tree.
#[derive(Debug, Default, Clone)]
pub struct DebugInfo {
    pub steps: Vec<String>,
    /// Recoverable problems, e.g. input dropped by a truncating scan.
    pub warnings: Vec<String>,
    pub tree: Option<String>,
}

/// Text form of a trace. Snapshot tests use it too.
pub fn render_debug_text(info: &DebugInfo) -> String {
    let mut sections = Vec::new();
    if let Some(tree) = &info.tree {
        sections.push(format!("== tree ==\n{tree}\n"));
    }
    if !info.warnings.is_empty() {
        sections.push(format!("== warnings ==\n{}\n", info.warnings.join("\n")));
    }
    let steps: String = info.steps.iter().map(|s| format!("{s}\n")).collect();
    sections.push(format!("== steps ==\n{steps}"));
    sections.join("\n")
}

pub(crate) fn log_debug<F: FnOnce() -> String>(debug: Option<&mut DebugInfo>, f: F) {
    if let Some(d) = debug {
        d.steps.push(f());
    }
}

pub(crate) fn warn(debug: Option<&mut DebugInfo>, message: String) {
    if let Some(d) = debug {
        d.steps.push(format!("warning: {message}"));
        d.warnings.push(message);
    }
}

pub(crate) fn record_tree(program: &TargetProgram, debug: Option<&mut DebugInfo>) {
    if let Some(d) = debug {
        d.tree = Some(format!("{program:#?}"));
    }
}

/// Trace destination named by a `MINIC_TRACE_LOG` value; empty means off.
pub(crate) fn trace_target(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Write the rendered trace to the file `target`, or to stdout for `-`.
pub fn write_trace(info: &DebugInfo, target: &str) -> io::Result<()> {
    let text = render_debug_text(info);
    if target == "-" {
        io::stdout().lock().write_all(text.as_bytes())
    } else {
        std::fs::write(target, text)
    }
}
