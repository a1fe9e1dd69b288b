//! Operator scanning for the C lexer
//!
//! Operators are matched longest-first: three-character candidates, then
//! two-character, then single-character.

use crate::lexer::{Lexer, Token, TokenKind};

const THREE_CHAR_OPERATORS: &[&str] = &["...", "<<=", ">>="];

const TWO_CHAR_OPERATORS: &[&str] = &[
    "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=", "&&", "||", "->",
    "++", "--", "<<", ">>", "&=", "|=", "^=", ".*", "::",
];

const ONE_CHAR_OPERATORS: &[char] = &[
    '+', '-', '*', '/', '%', '=', '!', '<', '>', '&', '|', '^', '~', '.',
    '?', ':',
];

impl Lexer {
    /// Try to tokenize an operator at the current position, longest match
    /// first. Returns `None` when the current character starts no operator.
    pub(crate) fn try_lex_operator(&mut self) -> Option<Token> {
        let line = self.location.line;
        let column = self.location.column;

        if let (Some(a), Some(b), Some(c)) =
            (self.current_char(), self.peek_char(1), self.peek_char(2))
        {
            let candidate: String = [a, b, c].iter().collect();
            if THREE_CHAR_OPERATORS.contains(&candidate.as_str()) {
                self.advance();
                self.advance();
                self.advance();
                return Some(Token::new(TokenKind::Operator, candidate, line, column));
            }
        }

        if let (Some(a), Some(b)) = (self.current_char(), self.peek_char(1)) {
            let candidate: String = [a, b].iter().collect();
            if TWO_CHAR_OPERATORS.contains(&candidate.as_str()) {
                self.advance();
                self.advance();
                return Some(Token::new(TokenKind::Operator, candidate, line, column));
            }
        }

        let ch = self.current_char()?;
        if ONE_CHAR_OPERATORS.contains(&ch) {
            self.advance();
            return Some(Token::new(TokenKind::Operator, ch.to_string(), line, column));
        }

        None
    }
}
