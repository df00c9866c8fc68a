use std::ops::Range;

use crate::ast::{SourceNode, SourceProgram};
use crate::error::{CompileError, ErrorKind};
use crate::lexer::{Token, TokenKind};

/// Deepest call nesting [`parse`] accepts. Every later stage recurses once
/// per level, so this also bounds their stack use.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Cursor over one token list. Each call to [`parse`] owns its own parser.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

pub fn parse(tokens: Vec<Token>) -> Result<SourceProgram, CompileError> {
    parse_with_limit(tokens, DEFAULT_MAX_DEPTH)
}

/// Parse, failing with [`ErrorKind::NestingTooDeep`] once calls nest more
/// than `max_depth` levels.
pub fn parse_with_limit(tokens: Vec<Token>, max_depth: usize) -> Result<SourceProgram, CompileError> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        max_depth,
    };
    parser.parse_program()
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Where the input ends: just past the last token.
    fn end_span(&self) -> Range<usize> {
        let end = self.tokens.last().map(|t| t.span.end).unwrap_or(0);
        end..end
    }

    fn end_of_input(&self, expected: &'static str) -> CompileError {
        CompileError::new(ErrorKind::UnexpectedEndOfInput { expected }, self.end_span())
    }

    fn unexpected(token: &Token, expected: &'static str) -> CompileError {
        CompileError::new(
            ErrorKind::UnexpectedToken {
                expected,
                found: token.value.clone(),
            },
            token.span.clone(),
        )
    }

    fn expect_name(&mut self) -> Result<String, CompileError> {
        const EXPECTED: &str = "a function name";
        match self.peek() {
            Some(token) if token.kind == TokenKind::Name => {
                let name = token.value.clone();
                self.advance();
                Ok(name)
            }
            Some(token) => Err(Self::unexpected(token, EXPECTED)),
            None => Err(self.end_of_input(EXPECTED)),
        }
    }

    fn parse_program(&mut self) -> Result<SourceProgram, CompileError> {
        let mut body = Vec::new();
        while self.peek().is_some() {
            body.push(self.parse_expression()?);
        }
        Ok(SourceProgram { body })
    }

    fn parse_expression(&mut self) -> Result<SourceNode, CompileError> {
        const EXPECTED: &str = "a number or `(`";
        let token = self.peek().ok_or_else(|| self.end_of_input(EXPECTED))?;
        match token.kind {
            TokenKind::Number => {
                let value = token.value.clone();
                self.advance();
                Ok(SourceNode::NumberLiteral { value })
            }
            TokenKind::Paren if token.is_open() => self.parse_call(),
            _ => Err(Self::unexpected(token, EXPECTED)),
        }
    }

    fn parse_call(&mut self) -> Result<SourceNode, CompileError> {
        if self.depth == self.max_depth {
            let span = self.peek().map_or_else(|| self.end_span(), |t| t.span.clone());
            return Err(CompileError::new(
                ErrorKind::NestingTooDeep {
                    limit: self.max_depth,
                },
                span,
            ));
        }
        self.depth += 1;
        self.advance(); // `(`
        let name = self.expect_name()?;
        let mut params = Vec::new();
        loop {
            match self.peek() {
                Some(token) if token.is_close() => {
                    self.advance();
                    break;
                }
                Some(_) => params.push(self.parse_expression()?),
                None => return Err(self.end_of_input("`)`")),
            }
        }
        self.depth -= 1;
        Ok(SourceNode::CallExpression { name, params })
    }
}
