pub mod ast;
mod debug;
pub mod error;
mod lexer;
mod parser;
mod render;
mod transform;

pub use ast::{Identifier, NodeKind, SourceNode, SourceProgram, TargetNode, TargetProgram};
pub use debug::{render_debug_text, write_trace, DebugInfo};
pub use error::{format_error, CompileError, ErrorKind};
pub use lexer::{scan, scan_with_policy, ScanPolicy, Token, TokenKind};
pub use parser::{parse, parse_with_limit, DEFAULT_MAX_DEPTH};
pub use render::{generate, render_node};
pub use transform::{transform, traverse, VisitFn, Visitor};

use debug::{log_debug, record_tree, warn};

/// Compilation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub scan_policy: ScanPolicy,
    /// Deepest call nesting accepted before [`ErrorKind::NestingTooDeep`].
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            scan_policy: ScanPolicy::Strict,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Options {
    /// Read `MINIC_SCAN_POLICY` (`strict` or `truncate`) and
    /// `MINIC_MAX_DEPTH`. Unset or unparsable values keep the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("MINIC_SCAN_POLICY").ok().as_deref(),
            std::env::var("MINIC_MAX_DEPTH").ok().as_deref(),
        )
    }

    fn from_vars(scan_policy: Option<&str>, max_depth: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            scan_policy: match scan_policy {
                Some("truncate") => ScanPolicy::Truncate,
                _ => ScanPolicy::Strict,
            },
            max_depth: max_depth
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_depth),
        }
    }
}

/// Compile with options from the environment. `MINIC_TRACE_LOG=<path|->`
/// also writes a trace of the run.
pub fn compile(input: &str) -> Result<String, CompileError> {
    let target = std::env::var("MINIC_TRACE_LOG").ok();
    let Some(target) = debug::trace_target(target.as_deref()) else {
        return compile_with_options(input, &Options::from_env());
    };
    let mut info = DebugInfo::default();
    let result = compile_with_debug(input, &Options::from_env(), Some(&mut info));
    // the trace is a side output; a failed write must not fail the compile
    let _ = write_trace(&info, target);
    result
}

pub fn compile_with_options(input: &str, options: &Options) -> Result<String, CompileError> {
    compile_with_debug(input, options, None)
}

/// Compile, recording steps, warnings and the target tree into `debug`.
pub fn compile_with_debug(
    input: &str,
    options: &Options,
    mut debug: Option<&mut DebugInfo>,
) -> Result<String, CompileError> {
    let (tokens, truncation) = lexer::scan_source(input, options.scan_policy)?;
    if let Some(t) = truncation {
        warn(debug.as_deref_mut(), t.to_string());
    }
    log_debug(debug.as_deref_mut(), || format!("scan: {} tokens", tokens.len()));

    let source = parse_with_limit(tokens, options.max_depth).map_err(|e| e.with_source(input))?;
    log_debug(debug.as_deref_mut(), || {
        format!("parse: {} top-level form(s)", source.body.len())
    });

    let target = traverse(&source, &Visitor::standard(), debug.as_deref_mut())
        .map_err(|e| e.with_source(input))?;
    record_tree(&target, debug.as_deref_mut());

    let out = generate(&target);
    log_debug(debug.as_deref_mut(), || {
        format!("generate: {} line(s)", out.lines().count())
    });
    Ok(out)
}
