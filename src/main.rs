use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use minic::{DebugInfo, Options, ScanPolicy};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compile S-expression calls to C-style calls")]
struct Args {
    /// Source text, e.g. "(add 10 (subtract 4 2))". Read from stdin if omitted.
    expr: Option<String>,
    /// Read the source from a file
    #[arg(short, long, conflicts_with = "expr")]
    file: Option<PathBuf>,
    /// Stop at the first unrecognised character instead of failing
    #[arg(long)]
    truncate: bool,
    /// Deepest call nesting to accept
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,
    /// Write a pipeline trace to PATH (`-` for stdout)
    #[arg(long, value_name = "PATH")]
    trace: Option<String>,
}

fn main() {
    let args = Args::parse();

    let input = match read_input(&args) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let mut options = Options::from_env();
    if args.truncate {
        options.scan_policy = ScanPolicy::Truncate;
    }
    if let Some(depth) = args.max_depth {
        options.max_depth = depth;
    }

    let mut info = DebugInfo::default();
    let result = minic::compile_with_debug(&input, &options, Some(&mut info));
    for warning in &info.warnings {
        eprintln!("warning: {warning}");
    }
    if let Some(target) = &args.trace {
        if let Err(e) = minic::write_trace(&info, target) {
            eprintln!("failed to write trace to {target}: {e}");
        }
    }

    match result {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("{}", minic::format_error(&e));
            std::process::exit(1);
        }
    }
}

fn read_input(args: &Args) -> std::io::Result<String> {
    if let Some(expr) = &args.expr {
        return Ok(expr.clone());
    }
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(strip_line_terminator(text))
}

/// Drop one trailing `\n` or `\r\n`.
fn strip_line_terminator(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
