use logos::Logos;
use std::fmt;
use std::ops::Range;

use crate::error::{CompileError, ErrorKind};

#[derive(Logos, Debug, Clone, PartialEq)]
enum Tok {
    #[token("(")]
    #[token(")")]
    Paren,
    #[regex(r"[0-9]+")]
    Number,
    #[regex(r"[A-Za-z]+")]
    Name,
    #[regex(r" +", logos::skip)]
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Paren,
    Number,
    Name,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn is_open(&self) -> bool {
        self.kind == TokenKind::Paren && self.value == "("
    }

    pub fn is_close(&self) -> bool {
        self.kind == TokenKind::Paren && self.value == ")"
    }
}

/// What the scanner does with a character that starts no token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPolicy {
    /// Fail with [`ErrorKind::InvalidCharacter`].
    #[default]
    Strict,
    /// Keep the tokens read so far and drop the rest of the input.
    Truncate,
}

/// Where a truncating scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Truncation {
    pub ch: char,
    pub position: usize,
}

impl fmt::Display for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid character `{}` at byte {}; ignoring the rest of the input",
            self.ch.escape_default(),
            self.position
        )
    }
}

/// Scan with [`ScanPolicy::Strict`].
pub fn scan(input: &str) -> Result<Vec<Token>, CompileError> {
    scan_with_policy(input, ScanPolicy::Strict)
}

/// Scan under `policy`. Use [`crate::compile_with_debug`] to learn where a
/// truncating scan stopped.
pub fn scan_with_policy(input: &str, policy: ScanPolicy) -> Result<Vec<Token>, CompileError> {
    scan_source(input, policy).map(|(tokens, _)| tokens)
}

pub(crate) fn scan_source(
    input: &str,
    policy: ScanPolicy,
) -> Result<(Vec<Token>, Option<Truncation>), CompileError> {
    let mut lex = Tok::lexer(input);
    let mut out = Vec::new();
    while let Some(res) = lex.next() {
        let span = lex.span();
        let kind = match res {
            Ok(Tok::Paren) => TokenKind::Paren,
            Ok(Tok::Number) => TokenKind::Number,
            Ok(Tok::Name) => TokenKind::Name,
            Ok(Tok::Space) => continue,
            Err(()) => {
                let ch = input[span.start..].chars().next().unwrap_or('\u{fffd}');
                return match policy {
                    ScanPolicy::Strict => Err(CompileError::new(
                        ErrorKind::InvalidCharacter { ch },
                        span.start..span.start + ch.len_utf8(),
                    )
                    .with_source(input)),
                    ScanPolicy::Truncate => Ok((
                        out,
                        Some(Truncation {
                            ch,
                            position: span.start,
                        }),
                    )),
                };
            }
        };
        out.push(Token {
            kind,
            value: lex.slice().to_string(),
            span,
        });
    }
    Ok((out, None))
}
