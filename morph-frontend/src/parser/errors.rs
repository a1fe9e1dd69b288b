//! Parser error types

use thiserror::Error;

use morph_common::{CompilerError, SourceLocation};

use crate::lexer::Token;

/// Errors produced while parsing
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Found a token other than the one the grammar requires
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: Token },

    /// The token stream ended mid-production
    #[error("Unexpected end of file (expected {expected})")]
    UnexpectedEndOfFile {
        expected: String,
        location: SourceLocation,
    },

    /// Left side of `=` is not assignable
    #[error("Invalid assignment target")]
    InvalidAssignmentTarget { location: SourceLocation },

    /// A literal token that cannot be turned into a value
    #[error("{message}")]
    InvalidLiteral {
        message: String,
        location: SourceLocation,
    },
}

impl ParseError {
    /// Source location of the error
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::UnexpectedToken { found, .. } => found.location(),
            ParseError::UnexpectedEndOfFile { location, .. }
            | ParseError::InvalidAssignmentTarget { location }
            | ParseError::InvalidLiteral { location, .. } => *location,
        }
    }
}

impl From<ParseError> for CompilerError {
    fn from(err: ParseError) -> Self {
        let location = err.location();
        CompilerError::parse_error(err.to_string(), location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_unexpected_token_message() {
        let err = ParseError::UnexpectedToken {
            expected: "';'".to_string(),
            found: Token::new(TokenKind::Identifier, "x", 3, 7),
        };
        assert_eq!(err.location(), SourceLocation::new(3, 7));
        assert!(err.to_string().starts_with("Expected ';'"));
    }

    #[test]
    fn test_conversion_to_compiler_error() {
        let err = ParseError::InvalidAssignmentTarget {
            location: SourceLocation::new(2, 5),
        };
        let compiler_err: CompilerError = err.into();
        assert!(compiler_err
            .to_string()
            .contains("Parse error at line 2, col 5"));
    }
}
