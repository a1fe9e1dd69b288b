//! C Lexer
//!
//! Tokenizes C source code into a stream of tokens, collecting `#define`
//! macro definitions on the side. Lexing never fails hard: malformed input
//! becomes `Error` tokens (or invalid macros) and scanning continues.

pub mod directives;
pub mod literals;
pub mod operators;
pub mod token;

pub use directives::MacroDefinition;
pub use token::{Token, TokenKind};

use morph_common::SourceLocation;

/// Reserved words of the supported C subset. `true`/`false` are classified
/// separately as boolean literals.
const KEYWORDS: &[&str] = &[
    "auto", "bool", "break", "case", "char", "const", "continue", "default",
    "do", "double", "else", "enum", "extern", "float", "for", "goto", "if",
    "int", "long", "register", "return", "short", "signed", "sizeof",
    "static", "string", "struct", "switch", "typedef", "union", "unsigned",
    "void", "volatile", "while",
];

/// Tokenize a complete source buffer.
///
/// Returns the token sequence (terminated by exactly one `EndOfFile` token)
/// and the macro definitions captured from `#define` directives.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<MacroDefinition>) {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();
    (tokens, lexer.into_macros())
}

/// C Lexer
pub struct Lexer {
    pub(crate) input: Vec<char>,
    pub(crate) position: usize,
    pub(crate) location: SourceLocation,
    pub(crate) macros: Vec<MacroDefinition>,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            location: SourceLocation::default(),
            macros: Vec::new(),
        }
    }

    /// Get current character
    pub(crate) fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    pub(crate) fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Advance to next character
    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.position += 1;
        self.location.advance(ch);
        Some(ch)
    }

    /// Get current location
    pub(crate) fn current_location(&self) -> SourceLocation {
        self.location
    }

    /// Skip whitespace, including newlines
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Skip a `// ...` comment, including the terminating newline
    fn skip_line_comment(&mut self) {
        self.advance(); // first '/'
        self.advance(); // second '/'
        while let Some(ch) = self.current_char() {
            if ch == '\n' {
                self.advance();
                break;
            }
            self.advance();
        }
    }

    /// Skip a `/* ... */` comment; an unterminated comment runs to EOF
    fn skip_block_comment(&mut self) {
        self.advance(); // '/'
        self.advance(); // '*'
        while let Some(ch) = self.current_char() {
            if ch == '*' && self.peek_char(1) == Some('/') {
                self.advance();
                self.advance();
                return;
            }
            self.advance();
        }
    }

    /// Tokenize an identifier, keyword, or boolean literal
    fn lex_identifier(&mut self) -> Token {
        let line = self.location.line;
        let column = self.location.column;
        let mut value = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                value.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if value == "true" || value == "false" {
            TokenKind::BooleanLiteral
        } else if KEYWORDS.contains(&value.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        Token::new(kind, value, line, column)
    }

    /// Get next token
    pub fn next_token(&mut self) -> Token {
        // Skip whitespace, comments, and preprocessor directives. Directives
        // never produce tokens; they are captured (or discarded) on the side.
        loop {
            self.skip_whitespace();

            match (self.current_char(), self.peek_char(1)) {
                (Some('#'), _) => {
                    self.process_directive();
                }
                (Some('/'), Some('/')) => {
                    self.skip_line_comment();
                }
                (Some('/'), Some('*')) => {
                    self.skip_block_comment();
                }
                _ => break,
            }
        }

        let line = self.location.line;
        let column = self.location.column;

        let ch = match self.current_char() {
            None => return Token::new(TokenKind::EndOfFile, "", line, column),
            Some(ch) => ch,
        };

        if ch == '"' {
            return self.lex_string_literal();
        }
        if ch == '\'' {
            return self.lex_char_literal();
        }
        if ch.is_alphabetic() || ch == '_' {
            return self.lex_identifier();
        }
        if ch.is_ascii_digit()
            || (ch == '.' && self.peek_char(1).is_some_and(|c| c.is_ascii_digit()))
        {
            return self.lex_number();
        }

        if let Some(token) = self.try_lex_operator() {
            return token;
        }

        if matches!(ch, ';' | ',' | '(' | ')' | '{' | '}' | '[' | ']') {
            self.advance();
            return Token::new(TokenKind::Symbol, ch.to_string(), line, column);
        }

        self.advance();
        Token::new(
            TokenKind::Error,
            format!("Unrecognized character: {}", ch),
            line,
            column,
        )
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::EndOfFile;
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        tokens
    }

    /// Consume the lexer, returning the captured macro definitions
    pub fn into_macros(self) -> Vec<MacroDefinition> {
        self.macros
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let (tokens, _) = tokenize(input);
        tokens.iter().map(|t| t.kind).collect()
    }

    fn texts(input: &str) -> Vec<String> {
        let (tokens, _) = tokenize(input);
        tokens.iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let (tokens, _) = tokenize("int main void return if else count _private var123");
        assert_eq!(tokens.len(), 10); // 9 lexemes + EOF

        assert!(tokens[0].is(TokenKind::Keyword, "int"));
        assert!(tokens[1].is(TokenKind::Identifier, "main"));
        assert!(tokens[2].is(TokenKind::Keyword, "void"));
        assert!(tokens[3].is(TokenKind::Keyword, "return"));
        assert!(tokens[4].is(TokenKind::Keyword, "if"));
        assert!(tokens[5].is(TokenKind::Keyword, "else"));
        assert!(tokens[6].is(TokenKind::Identifier, "count"));
        assert!(tokens[7].is(TokenKind::Identifier, "_private"));
        assert!(tokens[8].is(TokenKind::Identifier, "var123"));
        assert_eq!(tokens[9].kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_boolean_literals() {
        let (tokens, _) = tokenize("true false bool");
        assert!(tokens[0].is(TokenKind::BooleanLiteral, "true"));
        assert!(tokens[1].is(TokenKind::BooleanLiteral, "false"));
        assert!(tokens[2].is(TokenKind::Keyword, "bool"));
    }

    #[test]
    fn test_operators_longest_match() {
        let expected = vec![
            "<<=", ">>=", "...", "==", "!=", "<=", ">=", "&&", "||", "++",
            "--", "->", "+", "-", "=", "<",
        ];
        let (tokens, _) = tokenize("<<= >>= ... == != <= >= && || ++ -- -> + - = <");
        for (token, text) in tokens.iter().zip(&expected) {
            assert!(token.is(TokenKind::Operator, text), "expected {}, got {}", text, token);
        }
        assert_eq!(tokens.len(), expected.len() + 1);
    }

    #[test]
    fn test_adjacent_operators() {
        // "+++" must lex as "++" then "+"
        assert_eq!(texts("+++"), vec!["++", "+", ""]);
        assert_eq!(texts("<<<="), vec!["<<", "<=", ""]);
    }

    #[test]
    fn test_symbols() {
        let (tokens, _) = tokenize("; , ( ) { } [ ]");
        for token in &tokens[..8] {
            assert_eq!(token.kind, TokenKind::Symbol);
        }
    }

    #[test]
    fn test_line_and_column_tracking() {
        let (tokens, _) = tokenize("int x;\n  y = 1;");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 5));
        assert_eq!((tokens[2].line, tokens[2].column), (1, 6));
        assert_eq!((tokens[3].line, tokens[3].column), (2, 3)); // y
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("a // trailing\nb /* inline */ c"),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::EndOfFile
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        // Tolerated: scanning stops at EOF without an error token
        assert_eq!(
            kinds("a /* never closed"),
            vec![TokenKind::Identifier, TokenKind::EndOfFile]
        );
    }

    #[test]
    fn test_error_token_does_not_stop_lexing() {
        let (tokens, _) = tokenize("a @ b");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert!(tokens[1].text.contains('@'));
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        assert_eq!(tokens[3].kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_single_eof_token() {
        let (tokens, _) = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_simple_function() {
        let (tokens, _) = tokenize("int main() {\n    return 42;\n}\n");
        let expected = vec![
            (TokenKind::Keyword, "int"),
            (TokenKind::Identifier, "main"),
            (TokenKind::Symbol, "("),
            (TokenKind::Symbol, ")"),
            (TokenKind::Symbol, "{"),
            (TokenKind::Keyword, "return"),
            (TokenKind::IntegerLiteral, "42"),
            (TokenKind::Symbol, ";"),
            (TokenKind::Symbol, "}"),
            (TokenKind::EndOfFile, ""),
        ];
        assert_eq!(tokens.len(), expected.len());
        for (token, (kind, text)) in tokens.iter().zip(&expected) {
            assert!(token.is(*kind, text), "expected '{}' ({}), got {}", text, kind, token);
        }
    }
}
