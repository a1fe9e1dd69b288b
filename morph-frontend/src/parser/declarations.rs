//! Declaration parsing: variables, arrays, and functions

use crate::ast::{Parameter, Stmt, TypeName};
use crate::parser::{ParseError, Parser};
use crate::lexer::TokenKind;

impl Parser {
    /// Parse a declaration; the current token is a type keyword
    pub(crate) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        let type_token = self.advance();
        let ty = TypeName::from_keyword(&type_token.text).ok_or_else(|| {
            ParseError::UnexpectedToken {
                expected: "type name".to_string(),
                found: type_token.clone(),
            }
        })?;

        let name = self.expect_kind(TokenKind::Identifier, "identifier")?.text;

        if self.match_token(TokenKind::Symbol, "[") {
            return self.parse_array_decl(name, ty);
        }
        if self.check_text(TokenKind::Symbol, "(") {
            return self.parse_function_decl(name, ty);
        }

        let init = if self.match_token(TokenKind::Operator, "=") {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect(TokenKind::Symbol, ";")?;

        Ok(Stmt::VarDecl { name, ty, init })
    }

    /// Parse an array declaration; the `[` is already consumed
    fn parse_array_decl(&mut self, name: String, elem_ty: TypeName) -> Result<Stmt, ParseError> {
        let size = self.parse_expression()?;
        self.expect(TokenKind::Symbol, "]")?;

        if self.match_token(TokenKind::Operator, "=") {
            self.reporter.warning(
                format!("Array initializer for '{}' is not supported; skipping it", name),
                self.previous().location(),
            );
            while !self.check_text(TokenKind::Symbol, ";") && !self.is_at_end() {
                self.advance();
            }
        }

        self.expect(TokenKind::Symbol, ";")?;
        Ok(Stmt::ArrayDecl {
            name,
            elem_ty,
            size,
        })
    }

    /// Parse a function definition or prototype; the `(` is still current
    fn parse_function_decl(&mut self, name: String, return_ty: TypeName) -> Result<Stmt, ParseError> {
        self.advance(); // '('
        let params = self.parse_parameter_list()?;

        let body = if self.match_token(TokenKind::Symbol, ";") {
            None
        } else {
            self.expect(TokenKind::Symbol, "{")?;
            match self.parse_block()? {
                Stmt::Block(statements) => Some(statements),
                _ => unreachable!("parse_block always yields a block"),
            }
        };

        Ok(Stmt::FunctionDecl {
            name,
            return_ty,
            params,
            body,
        })
    }

    /// Parse `type name` parameters up to `)`; `(void)` means no parameters
    fn parse_parameter_list(&mut self) -> Result<Vec<Parameter>, ParseError> {
        let mut params = Vec::new();

        if self.match_token(TokenKind::Symbol, ")") {
            return Ok(params);
        }
        if self.check_text(TokenKind::Keyword, "void")
            && self.peek_at(1).is(TokenKind::Symbol, ")")
        {
            self.advance();
            self.advance();
            return Ok(params);
        }

        loop {
            let type_token = self.expect_kind(TokenKind::Keyword, "parameter type")?;
            let ty = TypeName::from_keyword(&type_token.text).ok_or_else(|| {
                ParseError::UnexpectedToken {
                    expected: "parameter type".to_string(),
                    found: type_token.clone(),
                }
            })?;

            let name = self.expect_kind(TokenKind::Identifier, "parameter name")?.text;

            let is_array = if self.match_token(TokenKind::Symbol, "[") {
                self.expect(TokenKind::Symbol, "]")?;
                true
            } else {
                false
            };

            params.push(Parameter { name, ty, is_array });

            if !self.match_token(TokenKind::Symbol, ",") {
                break;
            }
        }

        self.expect(TokenKind::Symbol, ")")?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use morph_common::{Diagnostic, Severity};

    use crate::ast::{Expr, Program, Stmt, TypeName};
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn parse_source(source: &str) -> (Program, Vec<Diagnostic>) {
        let (tokens, _) = tokenize(source);
        parse(tokens)
    }

    fn parse_clean(source: &str) -> Program {
        let (program, diagnostics) = parse_source(source);
        let errors: Vec<_> = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .collect();
        assert!(errors.is_empty(), "errors: {:?}", errors);
        program
    }

    #[test]
    fn test_scalar_declarations() {
        let program = parse_clean("int x;\nfloat y = 1.5;\nbool done = false;");
        assert_eq!(program.statements.len(), 3);

        assert!(matches!(
            &program.statements[0],
            Stmt::VarDecl { name, ty: TypeName::Int, init: None } if name == "x"
        ));
        assert!(matches!(
            &program.statements[1],
            Stmt::VarDecl { ty: TypeName::Float, init: Some(_), .. }
        ));
        assert!(matches!(
            &program.statements[2],
            Stmt::VarDecl { init: Some(Expr::Bool(false)), .. }
        ));
    }

    #[test]
    fn test_array_declaration() {
        let program = parse_clean("int data[10];");
        assert!(matches!(
            &program.statements[0],
            Stmt::ArrayDecl { name, elem_ty: TypeName::Int, size: Expr::Number(n) }
                if name == "data" && n == "10"
        ));
    }

    #[test]
    fn test_array_initializer_skipped_with_warning() {
        let (program, diagnostics) = parse_source("int data[3] = {1, 2, 3};");
        assert!(matches!(&program.statements[0], Stmt::ArrayDecl { .. }));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert!(diagnostics[0].message.contains("not supported"));
    }

    #[test]
    fn test_function_definition() {
        let program = parse_clean("int add(int a, int b) { return a + b; }");
        let Stmt::FunctionDecl {
            name,
            return_ty,
            params,
            body,
        } = &program.statements[0]
        else {
            panic!("expected function");
        };
        assert_eq!(name, "add");
        assert_eq!(*return_ty, TypeName::Int);
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "a");
        assert!(!params[0].is_array);
        assert_eq!(body.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_function_prototype() {
        let program = parse_clean("float area(float r);");
        assert!(matches!(
            &program.statements[0],
            Stmt::FunctionDecl { body: None, .. }
        ));
    }

    #[test]
    fn test_void_parameter_list() {
        let program = parse_clean("int main(void) { return 0; }");
        let Stmt::FunctionDecl { params, .. } = &program.statements[0] else {
            panic!("expected function");
        };
        assert!(params.is_empty());
    }

    #[test]
    fn test_array_parameter() {
        let program = parse_clean("void fill(int data[], int n) { }");
        let Stmt::FunctionDecl { params, .. } = &program.statements[0] else {
            panic!("expected function");
        };
        assert!(params[0].is_array);
        assert!(!params[1].is_array);
    }

    #[test]
    fn test_double_maps_to_float() {
        let program = parse_clean("double d = 2.5;");
        assert!(matches!(
            &program.statements[0],
            Stmt::VarDecl { ty: TypeName::Float, .. }
        ));
    }
}
