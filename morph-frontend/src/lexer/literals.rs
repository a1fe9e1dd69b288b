//! Literal scanning for the C lexer
//!
//! Handles string, character, and numeric literals. Quote characters are
//! stripped, but escape sequences stay raw in the token text (`\n` is a
//! backslash and an `n`); the parser resolves them when it builds the AST.

use crate::lexer::{Lexer, Token, TokenKind};

impl Lexer {
    /// Tokenize a string literal; the opening `"` is still unconsumed
    pub(crate) fn lex_string_literal(&mut self) -> Token {
        let line = self.location.line;
        let column = self.location.column;

        self.advance(); // opening quote
        let mut value = String::new();

        while let Some(ch) = self.current_char() {
            match ch {
                '"' => {
                    self.advance();
                    return Token::new(TokenKind::StringLiteral, value, line, column);
                }
                '\\' => {
                    self.advance();
                    match self.current_char() {
                        Some(escaped) => {
                            self.advance();
                            value.push('\\');
                            value.push(escaped);
                        }
                        None => {
                            return Token::new(
                                TokenKind::Error,
                                format!(
                                    "Unterminated escape sequence in string literal: \"{}",
                                    value
                                ),
                                line,
                                column,
                            );
                        }
                    }
                }
                _ => {
                    value.push(ch);
                    self.advance();
                }
            }
        }

        Token::new(
            TokenKind::Error,
            format!("Unterminated string literal: \"{}", value),
            line,
            column,
        )
    }

    /// Tokenize a character literal; the opening `'` is still unconsumed
    ///
    /// The literal ends at the next unescaped `'` on the same line; a
    /// newline or EOF before that is an error. Content length is not
    /// checked here, the parser rejects literals that do not resolve to a
    /// single character.
    pub(crate) fn lex_char_literal(&mut self) -> Token {
        let line = self.location.line;
        let column = self.location.column;

        self.advance(); // opening quote
        let mut value = String::new();

        loop {
            match self.current_char() {
                Some('\'') => {
                    self.advance();
                    if value.is_empty() {
                        return Token::new(
                            TokenKind::Error,
                            "Empty character literal",
                            line,
                            column,
                        );
                    }
                    return Token::new(TokenKind::CharLiteral, value, line, column);
                }
                Some('\n') | None => {
                    return Token::new(
                        TokenKind::Error,
                        format!("Unterminated character literal: '{}", value),
                        line,
                        column,
                    );
                }
                Some('\\') => {
                    self.advance();
                    match self.current_char() {
                        Some(escaped) if escaped != '\n' => {
                            self.advance();
                            value.push('\\');
                            value.push(escaped);
                        }
                        _ => {
                            return Token::new(
                                TokenKind::Error,
                                format!("Unterminated character literal: '{}\\", value),
                                line,
                                column,
                            );
                        }
                    }
                }
                Some(ch) => {
                    value.push(ch);
                    self.advance();
                }
            }
        }
    }

    /// Tokenize a numeric literal; the first character is a digit, or a `.`
    /// immediately followed by a digit
    ///
    /// A `.` that is not followed by a digit and not part of a valid
    /// exponent is left unconsumed so it can be tokenized separately
    /// (e.g. `1.foo` lexes as `1`, `.`, `foo`). Likewise an `e`/`E` without
    /// a valid exponent ends the number.
    pub(crate) fn lex_number(&mut self) -> Token {
        let line = self.location.line;
        let column = self.location.column;

        let mut text = String::new();
        let mut is_float = false;

        if self.current_char() == Some('.') {
            // Leading decimal point, e.g. `.5`; next_token guarantees a digit follows
            text.push('.');
            self.advance();
            is_float = true;
            self.consume_digits(&mut text);
        } else {
            self.consume_digits(&mut text);

            if self.current_char() == Some('.') {
                // The dot belongs to the number unless an identifier starts
                // right after it (`1.foo`): then the integer part stands
                // alone and the dot is tokenized separately. A trailing-dot
                // exponent (`1.e5`) still counts as part of the number.
                let dot_is_part_of_number = match self.peek_char(1) {
                    Some(c) if c.is_ascii_digit() => true,
                    Some('e') | Some('E') if self.valid_exponent_at(2) => true,
                    Some(c) if c.is_alphabetic() || c == '_' => false,
                    _ => true,
                };

                if dot_is_part_of_number {
                    text.push('.');
                    self.advance();
                    is_float = true;
                    self.consume_digits(&mut text);
                } else {
                    // The dot belongs to whatever comes next
                    return Token::new(TokenKind::IntegerLiteral, text, line, column);
                }
            }
        }

        if matches!(self.current_char(), Some('e') | Some('E')) {
            match self.peek_char(1) {
                Some(c) if c.is_ascii_digit() => {
                    is_float = true;
                    text.push(self.advance().unwrap_or('e'));
                    self.consume_digits(&mut text);
                }
                Some('+') | Some('-') => {
                    // The sign commits us to an exponent; digits must follow
                    text.push(self.advance().unwrap_or('e'));
                    text.push(self.advance().unwrap_or('+'));
                    if !self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                        return Token::new(
                            TokenKind::Error,
                            format!("Malformed exponent in number (expected digits): {}", text),
                            line,
                            column,
                        );
                    }
                    is_float = true;
                    self.consume_digits(&mut text);
                }
                // A bare 'e'/'E' is tokenized separately as an identifier
                _ => {}
            }
        }

        let kind = if is_float {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntegerLiteral
        };
        Token::new(kind, text, line, column)
    }

    /// Whether a digit run (after an optional sign) starts `offset`
    /// characters ahead, making a preceding `e`/`E` a real exponent
    fn valid_exponent_at(&self, offset: usize) -> bool {
        match self.peek_char(offset) {
            Some(c) if c.is_ascii_digit() => true,
            Some('+') | Some('-') => self
                .peek_char(offset + 1)
                .is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    fn consume_digits(&mut self, text: &mut String) {
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{tokenize, TokenKind};

    fn single_number(input: &str) -> (TokenKind, String) {
        let (tokens, _) = tokenize(input);
        assert_eq!(tokens.len(), 2, "expected one token + EOF for {:?}", input);
        (tokens[0].kind, tokens[0].text.clone())
    }

    #[test]
    fn test_integer_literals() {
        assert_eq!(single_number("42"), (TokenKind::IntegerLiteral, "42".into()));
        assert_eq!(single_number("0"), (TokenKind::IntegerLiteral, "0".into()));
        assert_eq!(
            single_number("1234567890"),
            (TokenKind::IntegerLiteral, "1234567890".into())
        );
    }

    #[test]
    fn test_float_literals() {
        assert_eq!(single_number("1.5"), (TokenKind::FloatLiteral, "1.5".into()));
        assert_eq!(single_number(".5"), (TokenKind::FloatLiteral, ".5".into()));
        assert_eq!(single_number("2."), (TokenKind::FloatLiteral, "2.".into()));
        assert_eq!(single_number("1e5"), (TokenKind::FloatLiteral, "1e5".into()));
        assert_eq!(single_number("1e+5"), (TokenKind::FloatLiteral, "1e+5".into()));
        assert_eq!(single_number("1.2E-3"), (TokenKind::FloatLiteral, "1.2E-3".into()));
        assert_eq!(single_number("1.e5"), (TokenKind::FloatLiteral, "1.e5".into()));
    }

    #[test]
    fn test_trailing_dot_followed_by_identifier() {
        // `1.foo` is an integer, a dot operator, and an identifier
        let (tokens, _) = tokenize("1.foo");
        assert!(tokens[0].is(TokenKind::IntegerLiteral, "1"));
        assert!(tokens[1].is(TokenKind::Operator, "."));
        assert!(tokens[2].is(TokenKind::Identifier, "foo"));
    }

    #[test]
    fn test_bare_exponent_letter_not_consumed() {
        // `1e` is the integer 1 followed by the identifier `e`
        let (tokens, _) = tokenize("1e");
        assert!(tokens[0].is(TokenKind::IntegerLiteral, "1"));
        assert!(tokens[1].is(TokenKind::Identifier, "e"));
    }

    #[test]
    fn test_signed_exponent_without_digits_is_an_error() {
        let (tokens, _) = tokenize("1e+");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert!(tokens[0].text.contains("Malformed exponent"));

        let (tokens, _) = tokenize("2.5E-;");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert!(tokens[1].is(TokenKind::Symbol, ";"));
    }

    #[test]
    fn test_string_escapes_stay_raw() {
        let (tokens, _) = tokenize(r#""hello\nworld\t\"quoted\"""#);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].text, r#"hello\nworld\t\"quoted\""#);
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        let (tokens, _) = tokenize(r#""a\"b" c"#);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].text, r#"a\"b"#);
        assert!(tokens[1].is(TokenKind::Identifier, "c"));
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, _) = tokenize("\"no closing quote");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert!(tokens[0].text.contains("Unterminated string literal"));
    }

    #[test]
    fn test_char_literals_keep_raw_escapes() {
        let (tokens, _) = tokenize(r"'a' '\n' '\\' '\''");
        let expected = ["a", r"\n", r"\\", r"\'"];
        for (token, text) in tokens.iter().zip(&expected) {
            assert_eq!(token.kind, TokenKind::CharLiteral);
            assert_eq!(&token.text, text);
        }
    }

    #[test]
    fn test_empty_char_literal() {
        let (tokens, _) = tokenize("''");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert!(tokens[0].text.contains("Empty character literal"));
    }

    #[test]
    fn test_multi_char_literal_tokenizes() {
        let (tokens, _) = tokenize("'ab'");
        assert_eq!(tokens[0].kind, TokenKind::CharLiteral);
        assert_eq!(tokens[0].text, "ab");
    }

    #[test]
    fn test_unterminated_char_literal_at_newline() {
        let (tokens, _) = tokenize("'a\nx");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert!(tokens[0].text.contains("Unterminated character literal"));
        // Lexing resumes on the next line
        assert!(tokens[1].is(TokenKind::Identifier, "x"));
    }
}
