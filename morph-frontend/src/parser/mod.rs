//! Recursive descent parser for the supported C subset
//!
//! Parsing an individual construct returns `Result`; a failure is recorded
//! as a diagnostic and the parser resynchronizes at the next statement
//! boundary, so one malformed statement never hides the rest of the file.

pub mod declarations;
pub mod errors;
pub mod expressions;
pub mod statements;

pub use errors::ParseError;

use morph_common::{Diagnostic, ErrorReporter, SourceLocation};

use crate::ast::{Expr, Program};
use crate::lexer::{Token, TokenKind};

/// Statement-starting keywords used as resynchronization anchors
const SYNC_KEYWORDS: &[&str] = &[
    "if", "while", "for", "return", "break", "continue", "int", "float",
    "double", "char", "bool", "string", "void",
];

/// Parse a token stream into a program
///
/// Always produces a program; statements that failed to parse are reported
/// in the returned diagnostics and omitted from the tree.
pub fn parse(tokens: Vec<Token>) -> (Program, Vec<Diagnostic>) {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();
    (program, parser.reporter.into_diagnostics())
}

/// Parse a token stream as a single complete expression
///
/// Used for macro bodies. Trailing tokens after the expression are an
/// error, so `1 + ; 2` cannot silently become `1`.
pub fn parse_expression(tokens: Vec<Token>) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expression()?;
    if !parser.is_at_end() {
        return Err(ParseError::UnexpectedToken {
            expected: "end of expression".to_string(),
            found: parser.peek().clone(),
        });
    }
    Ok(expr)
}

/// Recursive descent parser
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    pub(crate) reporter: ErrorReporter,
}

impl Parser {
    /// Create a parser; the stream is terminated with an `EndOfFile` token
    /// if the lexer did not already do so
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let needs_eof = tokens
            .last()
            .is_none_or(|t| t.kind != TokenKind::EndOfFile);
        if needs_eof {
            let (line, column) = tokens
                .last()
                .map(|t| (t.line, t.column))
                .unwrap_or((1, 1));
            tokens.push(Token::new(TokenKind::EndOfFile, "", line, column));
        }

        Self {
            tokens,
            current: 0,
            reporter: ErrorReporter::new(),
        }
    }

    fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if self.peek().kind == TokenKind::Error {
                let token = self.advance();
                self.reporter.error(token.text.clone(), token.location());
                continue;
            }

            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.reporter.error(err.to_string(), err.location());
                    self.synchronize();
                }
            }
        }

        Program { statements }
    }

    // Token stream helpers

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    pub(crate) fn peek_at(&self, offset: usize) -> &Token {
        let index = (self.current + offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::EndOfFile
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(crate) fn check_text(&self, kind: TokenKind, text: &str) -> bool {
        self.peek().is(kind, text)
    }

    /// Consume the current token if it matches kind and text
    pub(crate) fn match_token(&mut self, kind: TokenKind, text: &str) -> bool {
        if self.check_text(kind, text) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Require a token with the given kind and text
    pub(crate) fn expect(&mut self, kind: TokenKind, text: &str) -> Result<Token, ParseError> {
        if self.check_text(kind, text) {
            return Ok(self.advance());
        }
        Err(self.expectation_error(&format!("'{}'", text)))
    }

    /// Require a token of the given kind, any text
    pub(crate) fn expect_kind(
        &mut self,
        kind: TokenKind,
        description: &str,
    ) -> Result<Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(self.expectation_error(description))
    }

    pub(crate) fn expectation_error(&self, expected: &str) -> ParseError {
        if self.is_at_end() {
            ParseError::UnexpectedEndOfFile {
                expected: expected.to_string(),
                location: self.peek().location(),
            }
        } else {
            ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: self.peek().clone(),
            }
        }
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    /// Skip tokens until a likely statement boundary
    ///
    /// Always consumes the offending token first, then stops after a `;`,
    /// or before a statement-starting keyword, a `printf`/`scanf` call, or
    /// a brace. The unconditional first step guarantees forward progress
    /// even when the bad token is itself a boundary.
    pub(crate) fn synchronize(&mut self) {
        if !self.is_at_end() {
            self.advance();
        }

        while !self.is_at_end() {
            if self.previous().is(TokenKind::Symbol, ";") {
                return;
            }

            let token = self.peek();
            match token.kind {
                TokenKind::Keyword if SYNC_KEYWORDS.contains(&token.text.as_str()) => return,
                TokenKind::Identifier
                    if (token.text == "printf" || token.text == "scanf")
                        && self.peek_at(1).is(TokenKind::Symbol, "(") =>
                {
                    return;
                }
                TokenKind::Symbol if token.text == "{" || token.text == "}" => return,
                _ => {}
            }

            self.advance();
        }
    }
}
