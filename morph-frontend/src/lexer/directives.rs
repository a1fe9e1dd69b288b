//! Preprocessor directive handling
//!
//! Directives are consumed inside the lexer and never surface as tokens.
//! Only `#define` carries information forward, as a [`MacroDefinition`];
//! every other directive (`#include`, `#ifdef`, ...) is skipped. A macro
//! with a malformed name or parameter list is kept with `is_valid` cleared
//! so later stages can report or ignore it.

use serde::{Deserialize, Serialize};

use crate::lexer::Lexer;

/// A `#define` captured during lexing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDefinition {
    pub name: String,
    pub is_function_like: bool,
    pub parameters: Vec<String>,
    pub body: String,
    pub defining_line: u32,
    pub is_valid: bool,
}

impl Lexer {
    /// Consume a preprocessor directive starting at `#`
    pub(crate) fn process_directive(&mut self) {
        let location = self.current_location();
        self.advance(); // '#'
        self.skip_inline_whitespace();

        let mut directive = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() {
                directive.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if directive == "define" {
            self.process_define(location.line);
        } else {
            log::debug!("Skipping #{} directive at {}", directive, location);
            self.skip_logical_line();
        }
    }

    fn process_define(&mut self, defining_line: u32) {
        self.skip_inline_whitespace();

        let mut name = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                name.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let name_ok = name
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_');
        if !name_ok {
            log::warn!(
                "Invalid macro name '{}' at {}",
                name,
                self.current_location()
            );
            self.skip_logical_line();
            self.macros.push(MacroDefinition {
                name,
                is_function_like: false,
                parameters: Vec::new(),
                body: String::new(),
                defining_line,
                is_valid: false,
            });
            return;
        }

        // A '(' immediately after the name (no whitespace) makes the macro
        // function-like; otherwise the '(' belongs to the body.
        let mut is_function_like = false;
        let mut parameters = Vec::new();
        let mut is_valid = true;

        if self.current_char() == Some('(') {
            is_function_like = true;
            self.advance();

            let mut param_text = String::new();
            let mut closed = false;
            while let Some(ch) = self.current_char() {
                if ch == ')' {
                    self.advance();
                    closed = true;
                    break;
                }
                if ch == '\n' {
                    break;
                }
                if ch == '\\' && self.peek_char(1) == Some('\n') {
                    self.advance();
                    self.advance();
                    param_text.push(' ');
                    continue;
                }
                param_text.push(ch);
                self.advance();
            }

            if closed {
                for param in param_text.split(',') {
                    let param = param.trim();
                    if !param.is_empty() {
                        parameters.push(param.to_string());
                    }
                }
            } else {
                log::warn!(
                    "Unterminated parameter list for macro '{}' at {}",
                    name,
                    self.current_location()
                );
                is_valid = false;
            }
        }

        let body = if is_valid {
            self.read_logical_line().trim().to_string()
        } else {
            self.skip_logical_line();
            String::new()
        };

        self.macros.push(MacroDefinition {
            name,
            is_function_like,
            parameters,
            body,
            defining_line,
            is_valid,
        });
    }

    /// Skip spaces and tabs without crossing a newline
    fn skip_inline_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch == ' ' || ch == '\t' {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Read the rest of the logical line, folding `\`-newline continuations
    /// into a single space. The terminating newline stays unconsumed.
    fn read_logical_line(&mut self) -> String {
        let mut text = String::new();
        while let Some(ch) = self.current_char() {
            if ch == '\\' && self.peek_char(1) == Some('\n') {
                self.advance();
                self.advance();
                text.push(' ');
                continue;
            }
            if ch == '\n' {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }

    /// Discard the rest of the logical line, honoring continuations
    fn skip_logical_line(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch == '\\' && self.peek_char(1) == Some('\n') {
                self.advance();
                self.advance();
                continue;
            }
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }
}
