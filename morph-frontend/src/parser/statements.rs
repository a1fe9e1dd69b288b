//! Statement parsing

use crate::ast::{Expr, Stmt, TypeName};
use crate::parser::{ParseError, Parser};
use crate::lexer::TokenKind;

impl Parser {
    /// Parse a single statement or declaration
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let kind = self.peek().kind;
        let text = self.peek().text.clone();

        match kind {
            TokenKind::Keyword => {
                if TypeName::from_keyword(&text).is_some() {
                    return self.parse_declaration();
                }
                match text.as_str() {
                    "if" => self.parse_if(),
                    "while" => self.parse_while(),
                    "for" => self.parse_for(),
                    "return" => self.parse_return(),
                    "break" => {
                        self.advance();
                        self.expect(TokenKind::Symbol, ";")?;
                        Ok(Stmt::Break)
                    }
                    "continue" => {
                        self.advance();
                        self.expect(TokenKind::Symbol, ";")?;
                        Ok(Stmt::Continue)
                    }
                    _ => Err(self.expectation_error("statement")),
                }
            }
            TokenKind::Symbol if text == "{" => {
                self.advance();
                self.parse_block()
            }
            TokenKind::Identifier
                if text == "printf" && self.peek_at(1).is(TokenKind::Symbol, "(") =>
            {
                self.parse_printf()
            }
            TokenKind::Identifier
                if text == "scanf" && self.peek_at(1).is(TokenKind::Symbol, "(") =>
            {
                self.parse_scanf()
            }
            _ => self.parse_expression_statement(),
        }
    }

    /// Parse a brace-delimited block; the `{` is already consumed
    ///
    /// Recovers from bad statements inside the block so the closing `}`
    /// is still found.
    pub(crate) fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        let mut statements = Vec::new();

        while !self.check_text(TokenKind::Symbol, "}") && !self.is_at_end() {
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

        self.expect(TokenKind::Symbol, "}")?;
        Ok(Stmt::Block(statements))
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // 'if'
        self.expect(TokenKind::Symbol, "(")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::Symbol, ")")?;

        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.match_token(TokenKind::Keyword, "else") {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // 'while'
        self.expect(TokenKind::Symbol, "(")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::Symbol, ")")?;
        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::While { condition, body })
    }

    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // 'for'
        self.expect(TokenKind::Symbol, "(")?;

        let init = if self.match_token(TokenKind::Symbol, ";") {
            None
        } else if self.peek().kind == TokenKind::Keyword
            && TypeName::from_keyword(&self.peek().text).is_some()
        {
            Some(Box::new(self.parse_declaration()?))
        } else {
            let expr = self.parse_expression()?;
            self.expect(TokenKind::Symbol, ";")?;
            Some(Box::new(Stmt::Expression(expr)))
        };

        let condition = if self.check_text(TokenKind::Symbol, ";") {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Symbol, ";")?;

        let increment = if self.check_text(TokenKind::Symbol, ")") {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Symbol, ")")?;

        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::For {
            init,
            condition,
            increment,
            body,
        })
    }

    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // 'return'
        let value = if self.check_text(TokenKind::Symbol, ";") {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Symbol, ";")?;

        Ok(Stmt::Return(value))
    }

    fn parse_printf(&mut self) -> Result<Stmt, ParseError> {
        let (format, args) = self.parse_io_call("printf")?;
        Ok(Stmt::Printf { format, args })
    }

    fn parse_scanf(&mut self) -> Result<Stmt, ParseError> {
        let (format, args) = self.parse_io_call("scanf")?;
        Ok(Stmt::Scanf { format, args })
    }

    /// Shared shape of `printf`/`scanf`: a string-literal format followed
    /// by zero or more argument expressions
    fn parse_io_call(&mut self, name: &str) -> Result<(Expr, Vec<Expr>), ParseError> {
        self.advance(); // the builtin name
        self.expect(TokenKind::Symbol, "(")?;

        let format_location = self.current_location();
        let format = self.parse_expression()?;
        if !matches!(format, Expr::Str(_)) {
            return Err(ParseError::InvalidLiteral {
                message: format!("{} format must be a string literal", name),
                location: format_location,
            });
        }

        let mut args = Vec::new();
        while self.match_token(TokenKind::Symbol, ",") {
            args.push(self.parse_expression()?);
        }

        self.expect(TokenKind::Symbol, ")")?;
        self.expect(TokenKind::Symbol, ";")?;
        Ok((format, args))
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;
        self.expect(TokenKind::Symbol, ";")?;
        Ok(Stmt::Expression(expr))
    }
}

#[cfg(test)]
mod tests {
    use morph_common::Diagnostic;

    use crate::ast::{Expr, Program, Stmt};
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn parse_source(source: &str) -> (Program, Vec<Diagnostic>) {
        let (tokens, _) = tokenize(source);
        parse(tokens)
    }

    fn parse_single(source: &str) -> Stmt {
        let (program, diagnostics) = parse_source(source);
        assert!(diagnostics.is_empty(), "diagnostics: {:?}", diagnostics);
        assert_eq!(program.statements.len(), 1);
        program.statements.into_iter().next().unwrap()
    }

    #[test]
    fn test_if_else_chain() {
        let stmt = parse_single("if (a) x = 1; else if (b) x = 2; else x = 3;");
        let Stmt::If { else_branch, .. } = stmt else {
            panic!("expected if");
        };
        let else_branch = else_branch.expect("else branch");
        assert!(matches!(
            *else_branch,
            Stmt::If {
                else_branch: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn test_while_with_block_body() {
        let stmt = parse_single("while (i < 10) { i = i + 1; }");
        let Stmt::While { body, .. } = stmt else {
            panic!("expected while");
        };
        assert!(matches!(*body, Stmt::Block(ref stmts) if stmts.len() == 1));
    }

    #[test]
    fn test_for_with_all_clauses() {
        let stmt = parse_single("for (int i = 0; i < 10; i++) { }");
        let Stmt::For {
            init,
            condition,
            increment,
            ..
        } = stmt
        else {
            panic!("expected for");
        };
        assert!(matches!(*init.unwrap(), Stmt::VarDecl { .. }));
        assert!(condition.is_some());
        assert!(increment.is_some());
    }

    #[test]
    fn test_for_with_empty_clauses() {
        let stmt = parse_single("for (;;) break;");
        let Stmt::For {
            init,
            condition,
            increment,
            body,
        } = stmt
        else {
            panic!("expected for");
        };
        assert!(init.is_none());
        assert!(condition.is_none());
        assert!(increment.is_none());
        assert!(matches!(*body, Stmt::Break));
    }

    #[test]
    fn test_return_forms() {
        assert!(matches!(parse_single("return;"), Stmt::Return(None)));
        assert!(matches!(
            parse_single("return x + 1;"),
            Stmt::Return(Some(_))
        ));
    }

    #[test]
    fn test_printf_statement() {
        let stmt = parse_single("printf(\"%d\\n\", x);");
        let Stmt::Printf { format, args } = stmt else {
            panic!("expected printf");
        };
        assert_eq!(format, Expr::Str("%d\n".to_string()));
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn test_scanf_statement() {
        let stmt = parse_single("scanf(\"%d\", &x);");
        let Stmt::Scanf { format, args } = stmt else {
            panic!("expected scanf");
        };
        assert_eq!(format, Expr::Str("%d".to_string()));
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn test_printf_requires_string_literal_format() {
        let (_, diagnostics) = parse_source("printf(fmt, x);");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0]
            .message
            .contains("printf format must be a string literal"));
    }

    #[test]
    fn test_printf_as_plain_call_in_expression() {
        // Without the trailing '(' pattern, printf is an ordinary identifier
        let stmt = parse_single("x = printf;");
        assert!(matches!(stmt, Stmt::Expression(Expr::Assignment { .. })));
    }

    #[test]
    fn test_block_recovers_inside_braces() {
        let (program, diagnostics) = parse_source(
            "void f(void) {\n    int a = ;\n    int b = 2;\n}\n",
        );
        assert_eq!(diagnostics.len(), 1);
        let Stmt::FunctionDecl { body, .. } = &program.statements[0] else {
            panic!("expected function");
        };
        assert_eq!(body.as_ref().unwrap().len(), 1);
    }
}
