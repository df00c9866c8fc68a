use anstyle::{AnsiColor, Reset, Style};
use std::fmt;
use std::ops::Range;

/// What went wrong during a compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The scanner met a character that starts no token.
    InvalidCharacter { ch: char },
    /// The parser found a token it cannot use at a decision point.
    UnexpectedToken { expected: &'static str, found: String },
    /// The parser ran out of tokens while it still needed one.
    UnexpectedEndOfInput { expected: &'static str },
    /// Calls nest deeper than the parser allows.
    NestingTooDeep { limit: usize },
    /// A traversal invariant was broken. Trees built by this crate never hit it.
    Internal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    pub kind: ErrorKind,
    /// Byte range in `source` the error points at.
    pub span: Range<usize>,
    pub source: String,
}

impl CompileError {
    pub fn new(kind: ErrorKind, span: Range<usize>) -> Self {
        Self {
            kind,
            span,
            source: String::new(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()), 0..0)
    }

    /// Byte offset of the error in the source text.
    pub fn position(&self) -> usize {
        self.span.start
    }

    /// Attach the source text unless a stage already did.
    pub(crate) fn with_source(mut self, source: &str) -> Self {
        if self.source.is_empty() {
            self.source = source.to_string();
        }
        self
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidCharacter { ch } => write!(f, "invalid character `{}`", ch.escape_default()),
            ErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "expected {expected}, found `{found}`")
            }
            ErrorKind::UnexpectedEndOfInput { expected } => {
                write!(f, "unexpected end of input, expected {expected}")
            }
            ErrorKind::NestingTooDeep { limit } => {
                write!(f, "calls nested more than {limit} levels deep")
            }
            ErrorKind::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for CompileError {}

/// Render an error as a coloured diagnostic: location header, the offending
/// line with the span undercurled, and a caret followed by the message.
pub fn format_error(err: &CompileError) -> String {
    let (line, col, line_start, line_end) = locate(&err.source, err.span.start);
    let line_str = &err.source[line_start..line_end];
    let pad = " ".repeat(col.saturating_sub(1));

    let red_bold = Style::new().fg_color(Some(AnsiColor::Red.into())).bold();
    let dim = Style::new().fg_color(Some(AnsiColor::BrightBlack.into()));
    let reset = Reset.render();
    const UNDERCURL_RED: &str = "\u{001b}[31;4:3m";

    let (pre, target, post) = split_at_columns(line_str, col, err.span.len().max(1));

    format!(
        "{hdr} error{reset}\n{dim}│{reset}  at line {line}, col {col}\n{dim}│{reset}  {pre}{curl}{target}{reset}{post}\n{dim}└{reset}  {pad}{hdr}^{reset}\n   {pad}{msg}",
        hdr = red_bold.render(),
        dim = dim.render(),
        curl = UNDERCURL_RED,
        msg = err.kind,
    )
}

/// Split `line` into the text before column `col`, the `len` chars starting
/// there, and the rest. Columns are 1-based and counted in chars.
fn split_at_columns(line: &str, col: usize, len: usize) -> (&str, &str, &str) {
    let start = line
        .char_indices()
        .nth(col.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    let end = line[start..]
        .char_indices()
        .nth(len)
        .map(|(i, _)| start + i)
        .unwrap_or(line.len());
    (&line[..start], &line[start..end], &line[end..])
}

/// 1-based line and column of `offset`, plus the byte bounds of its line.
fn locate(src: &str, offset: usize) -> (usize, usize, usize, usize) {
    let offset = offset.min(src.len());
    let before = &src[..offset];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line_end = src[line_start..].find('\n').map_or(src.len(), |i| line_start + i);
    let line = before.matches('\n').count() + 1;
    let col = before[line_start..].chars().count() + 1;
    (line, col, line_start, line_end)
}
