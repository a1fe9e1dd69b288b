//! Token definitions for the C lexer
//!
//! This module defines token kinds and the Token struct.

use morph_common::SourceLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token kinds produced by the lexer
///
/// An `Error` token carries a diagnostic message in its `text` field instead
/// of a lexeme; lexing continues past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    Keyword,
    Identifier,
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    CharLiteral,
    BooleanLiteral,
    Operator,
    Symbol,
    EndOfFile,
    Error,
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::IntegerLiteral => "IntegerLiteral",
            TokenKind::FloatLiteral => "FloatLiteral",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::CharLiteral => "CharLiteral",
            TokenKind::BooleanLiteral => "BooleanLiteral",
            TokenKind::Operator => "Operator",
            TokenKind::Symbol => "Symbol",
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::Error => "Error",
            TokenKind::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

/// A token with its lexeme and source position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    /// Check kind and lexeme at once
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({}) at {}", self.text, self.kind, self.location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Identifier, "main", 3, 5);
        assert_eq!(format!("{}", token), "'main' (Identifier) at line 3, col 5");
    }

    #[test]
    fn test_token_is() {
        let token = Token::new(TokenKind::Symbol, ";", 1, 1);
        assert!(token.is(TokenKind::Symbol, ";"));
        assert!(!token.is(TokenKind::Symbol, ","));
        assert!(!token.is(TokenKind::Operator, ";"));
    }
}
