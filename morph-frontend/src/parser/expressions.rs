//! Expression parsing
//!
//! One function per precedence tier, lowest binding first:
//! assignment, `||`, `&&`, equality, comparison, additive, multiplicative,
//! prefix unary, postfix, primary.

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::parser::{ParseError, Parser};
use crate::lexer::TokenKind;

impl Parser {
    /// Parse an expression
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    /// Parse assignment (right-associative)
    ///
    /// Compound assignments desugar here: `x += e` parses as `x = x + e`.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_logical_or()?;

        if self.match_token(TokenKind::Operator, "=") {
            let location = self.previous().location();
            if !expr.is_lvalue() {
                return Err(ParseError::InvalidAssignmentTarget { location });
            }
            let value = self.parse_assignment()?;
            return Ok(Expr::Assignment {
                target: Box::new(expr),
                value: Box::new(value),
            });
        }

        const COMPOUND: &[(&str, BinaryOp)] = &[
            ("+=", BinaryOp::Add),
            ("-=", BinaryOp::Sub),
            ("*=", BinaryOp::Mul),
            ("/=", BinaryOp::Div),
            ("%=", BinaryOp::Mod),
        ];
        for (text, op) in COMPOUND {
            if self.match_token(TokenKind::Operator, text) {
                let location = self.previous().location();
                if !expr.is_lvalue() {
                    return Err(ParseError::InvalidAssignmentTarget { location });
                }
                let value = self.parse_assignment()?;
                return Ok(Expr::Assignment {
                    target: Box::new(expr.clone()),
                    value: Box::new(Expr::Binary {
                        op: *op,
                        left: Box::new(expr),
                        right: Box::new(value),
                    }),
                });
            }
        }

        Ok(expr)
    }

    /// Parse logical OR (`||`)
    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_logical_and()?;

        while self.match_token(TokenKind::Operator, "||") {
            let right = self.parse_logical_and()?;
            expr = Expr::Binary {
                op: BinaryOp::LogicalOr,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parse logical AND (`&&`)
    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_equality()?;

        while self.match_token(TokenKind::Operator, "&&") {
            let right = self.parse_equality()?;
            expr = Expr::Binary {
                op: BinaryOp::LogicalAnd,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parse equality (`==`, `!=`)
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_comparison()?;

        loop {
            let op = if self.match_token(TokenKind::Operator, "==") {
                BinaryOp::Equal
            } else if self.match_token(TokenKind::Operator, "!=") {
                BinaryOp::NotEqual
            } else {
                break;
            };

            let right = self.parse_comparison()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parse comparison (`<`, `>`, `<=`, `>=`)
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_term()?;

        loop {
            let op = if self.match_token(TokenKind::Operator, "<=") {
                BinaryOp::LessEqual
            } else if self.match_token(TokenKind::Operator, ">=") {
                BinaryOp::GreaterEqual
            } else if self.match_token(TokenKind::Operator, "<") {
                BinaryOp::Less
            } else if self.match_token(TokenKind::Operator, ">") {
                BinaryOp::Greater
            } else {
                break;
            };

            let right = self.parse_term()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parse additive (`+`, `-`)
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_factor()?;

        loop {
            let op = if self.match_token(TokenKind::Operator, "+") {
                BinaryOp::Add
            } else if self.match_token(TokenKind::Operator, "-") {
                BinaryOp::Sub
            } else {
                break;
            };

            let right = self.parse_factor()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parse multiplicative (`*`, `/`, `%`)
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_unary()?;

        loop {
            let op = if self.match_token(TokenKind::Operator, "*") {
                BinaryOp::Mul
            } else if self.match_token(TokenKind::Operator, "/") {
                BinaryOp::Div
            } else if self.match_token(TokenKind::Operator, "%") {
                BinaryOp::Mod
            } else {
                break;
            };

            let right = self.parse_unary()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parse prefix unary (`!`, `-`, `&`, `++`, `--`)
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = if self.match_token(TokenKind::Operator, "!") {
            Some(UnaryOp::Not)
        } else if self.match_token(TokenKind::Operator, "-") {
            Some(UnaryOp::Negate)
        } else if self.match_token(TokenKind::Operator, "&") {
            Some(UnaryOp::AddressOf)
        } else if self.match_token(TokenKind::Operator, "++") {
            Some(UnaryOp::PreIncrement)
        } else if self.match_token(TokenKind::Operator, "--") {
            Some(UnaryOp::PreDecrement)
        } else {
            None
        };

        if let Some(op) = op {
            let operand = self.parse_unary()?;
            return Ok(Expr::Unary {
                op,
                operand: Box::new(operand),
            });
        }

        self.parse_postfix()
    }

    /// Parse postfix operations: calls, subscripts, `++`, `--`
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            if self.check_text(TokenKind::Symbol, "(") {
                let name = match &expr {
                    Expr::Identifier(name) => name.clone(),
                    _ => {
                        return Err(ParseError::InvalidLiteral {
                            message: "Only named functions can be called".to_string(),
                            location: self.current_location(),
                        });
                    }
                };
                self.advance();
                let args = self.parse_call_arguments()?;
                expr = Expr::Call { name, args };
            } else if self.match_token(TokenKind::Symbol, "[") {
                let index = self.parse_expression()?;
                self.expect(TokenKind::Symbol, "]")?;
                expr = Expr::Subscript {
                    array: Box::new(expr),
                    index: Box::new(index),
                };
            } else if self.match_token(TokenKind::Operator, "++") {
                expr = Expr::Unary {
                    op: UnaryOp::PostIncrement,
                    operand: Box::new(expr),
                };
            } else if self.match_token(TokenKind::Operator, "--") {
                expr = Expr::Unary {
                    op: UnaryOp::PostDecrement,
                    operand: Box::new(expr),
                };
            } else {
                break;
            }
        }

        Ok(expr)
    }

    /// Parse comma-separated call arguments up to `)`
    fn parse_call_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();

        if !self.check_text(TokenKind::Symbol, ")") {
            loop {
                args.push(self.parse_expression()?);
                if !self.match_token(TokenKind::Symbol, ",") {
                    break;
                }
            }
        }

        self.expect(TokenKind::Symbol, ")")?;
        Ok(args)
    }

    /// Parse a primary expression: literal, identifier, or parenthesized
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek().kind {
            TokenKind::BooleanLiteral => {
                let token = self.advance();
                Ok(Expr::Bool(token.text == "true"))
            }
            TokenKind::IntegerLiteral | TokenKind::FloatLiteral => {
                let token = self.advance();
                Ok(Expr::Number(token.text))
            }
            TokenKind::StringLiteral => {
                let token = self.advance();
                Ok(Expr::Str(unescape(&token.text)))
            }
            TokenKind::CharLiteral => {
                let token = self.advance();
                let value = unescape(&token.text);
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok(Expr::Char(ch)),
                    _ => Err(ParseError::InvalidLiteral {
                        message: format!(
                            "Character literal must contain exactly one character: '{}'",
                            token.text
                        ),
                        location: token.location(),
                    }),
                }
            }
            TokenKind::Identifier => {
                let token = self.advance();
                Ok(Expr::Identifier(token.text))
            }
            TokenKind::Symbol if self.peek().text == "(" => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::Symbol, ")")?;
                Ok(expr)
            }
            TokenKind::Error => {
                let token = self.advance();
                Err(ParseError::InvalidLiteral {
                    message: token.text.clone(),
                    location: token.location(),
                })
            }
            _ => Err(self.expectation_error("expression")),
        }
    }
}

/// Resolve the escape sequences the lexer left raw in literal token text
///
/// Unrecognized escapes pass the escaped character through; a dangling
/// trailing backslash stays a backslash.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use crate::ast::{BinaryOp, Expr, UnaryOp};
    use crate::lexer::tokenize;
    use crate::parser::{parse_expression, ParseError};

    fn parse_expr(source: &str) -> Result<Expr, ParseError> {
        let (tokens, _) = tokenize(source);
        parse_expression(tokens)
    }

    fn ident(name: &str) -> Expr {
        Expr::Identifier(name.to_string())
    }

    fn number(text: &str) -> Expr {
        Expr::Number(text.to_string())
    }

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        let expr = parse_expr("2 + 3 * 4").unwrap();
        assert_eq!(
            expr,
            Expr::Binary {
                op: BinaryOp::Add,
                left: Box::new(number("2")),
                right: Box::new(Expr::Binary {
                    op: BinaryOp::Mul,
                    left: Box::new(number("3")),
                    right: Box::new(number("4")),
                }),
            }
        );
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        let expr = parse_expr("a - b - c").unwrap();
        assert_eq!(
            expr,
            Expr::Binary {
                op: BinaryOp::Sub,
                left: Box::new(Expr::Binary {
                    op: BinaryOp::Sub,
                    left: Box::new(ident("a")),
                    right: Box::new(ident("b")),
                }),
                right: Box::new(ident("c")),
            }
        );
    }

    #[test]
    fn test_assignment_is_right_associative() {
        let expr = parse_expr("a = b = 1").unwrap();
        assert_eq!(
            expr,
            Expr::Assignment {
                target: Box::new(ident("a")),
                value: Box::new(Expr::Assignment {
                    target: Box::new(ident("b")),
                    value: Box::new(number("1")),
                }),
            }
        );
    }

    #[test]
    fn test_compound_assignment_desugars() {
        let expr = parse_expr("i += 2").unwrap();
        assert_eq!(
            expr,
            Expr::Assignment {
                target: Box::new(ident("i")),
                value: Box::new(Expr::Binary {
                    op: BinaryOp::Add,
                    left: Box::new(ident("i")),
                    right: Box::new(number("2")),
                }),
            }
        );
    }

    #[test]
    fn test_invalid_assignment_target() {
        let err = parse_expr("1 = 2").unwrap_err();
        assert!(matches!(err, ParseError::InvalidAssignmentTarget { .. }));

        let err = parse_expr("f() = 2").unwrap_err();
        assert!(matches!(err, ParseError::InvalidAssignmentTarget { .. }));
    }

    #[test]
    fn test_subscript_is_valid_assignment_target() {
        let expr = parse_expr("arr[i] = 0").unwrap();
        assert!(matches!(expr, Expr::Assignment { .. }));
    }

    #[test]
    fn test_logical_operators_precedence() {
        // && binds tighter than ||
        let expr = parse_expr("a || b && c").unwrap();
        assert!(matches!(
            expr,
            Expr::Binary {
                op: BinaryOp::LogicalOr,
                ..
            }
        ));
    }

    #[test]
    fn test_prefix_unary_chain() {
        let expr = parse_expr("!-x").unwrap();
        assert_eq!(
            expr,
            Expr::Unary {
                op: UnaryOp::Not,
                operand: Box::new(Expr::Unary {
                    op: UnaryOp::Negate,
                    operand: Box::new(ident("x")),
                }),
            }
        );
    }

    #[test]
    fn test_postfix_increment() {
        let expr = parse_expr("i++").unwrap();
        assert_eq!(
            expr,
            Expr::Unary {
                op: UnaryOp::PostIncrement,
                operand: Box::new(ident("i")),
            }
        );
    }

    #[test]
    fn test_call_with_arguments() {
        let expr = parse_expr("max(a, b + 1)").unwrap();
        assert_eq!(
            expr,
            Expr::Call {
                name: "max".to_string(),
                args: vec![
                    ident("a"),
                    Expr::Binary {
                        op: BinaryOp::Add,
                        left: Box::new(ident("b")),
                        right: Box::new(number("1")),
                    },
                ],
            }
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        let expr = parse_expr("(2 + 3) * 4").unwrap();
        assert!(matches!(
            expr,
            Expr::Binary {
                op: BinaryOp::Mul,
                ..
            }
        ));
    }

    #[test]
    fn test_multi_character_char_literal_rejected() {
        let err = parse_expr("'ab'").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLiteral { .. }));
    }

    #[test]
    fn test_escape_resolution() {
        assert_eq!(
            parse_expr(r#""a\tb\\c\"d""#).unwrap(),
            Expr::Str("a\tb\\c\"d".to_string())
        );
        assert_eq!(parse_expr(r"'\n'").unwrap(), Expr::Char('\n'));
        assert_eq!(parse_expr(r"'\0'").unwrap(), Expr::Char('\0'));
        // Unknown escapes pass the character through
        assert_eq!(parse_expr(r#""a\qb""#).unwrap(), Expr::Str("aqb".to_string()));
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse_expr("true").unwrap(), Expr::Bool(true));
        assert_eq!(parse_expr("false").unwrap(), Expr::Bool(false));
        assert_eq!(parse_expr("'x'").unwrap(), Expr::Char('x'));
        assert_eq!(
            parse_expr("\"hi\\n\"").unwrap(),
            Expr::Str("hi\n".to_string())
        );
        assert_eq!(parse_expr("3.14").unwrap(), number("3.14"));
    }
}
