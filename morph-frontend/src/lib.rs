//! CodeMorph frontend: C lexing, parsing, and Python code generation
//!
//! The pipeline has three stages. [`lexer::tokenize`] turns source text
//! into tokens and captured macro definitions, [`parser::parse`] builds an
//! AST with error recovery, and [`codegen::generate`] walks the tree and
//! emits Python. [`translate`] runs all three.

pub mod ast;
pub mod codegen;
pub mod lexer;
pub mod parser;

pub use ast::{Expr, Program, Stmt};
pub use lexer::{tokenize, MacroDefinition, Token, TokenKind};
pub use parser::{parse, ParseError};

use morph_common::Diagnostic;

/// Result of a whole-source translation
#[derive(Debug, Clone)]
pub struct Translation {
    /// The generated Python module text
    pub python: String,
    /// Errors and warnings collected while parsing
    pub diagnostics: Vec<Diagnostic>,
}

/// Translate C source text into Python source text
///
/// Never fails outright: malformed constructs are reported in
/// `diagnostics` and omitted from the output.
pub fn translate(source: &str) -> Translation {
    let (tokens, macro_defs) = lexer::tokenize(source);
    let (program, diagnostics) = parser::parse(tokens);
    let python = codegen::generate(&program, &macro_defs);

    Translation {
        python,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_common::Severity;

    #[test]
    fn test_translate_small_program() {
        let result = translate("int x = 1;\nprintf(\"%d\\n\", x);");
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.python, "x = 1\nprint(f\"{x}\\n\", end=\"\")\n");
    }

    #[test]
    fn test_translate_reports_errors_but_still_produces_output() {
        let result = translate("int x = ;\nint y = 2;");
        assert_eq!(result.python, "y = 2\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].severity, Severity::Error);
    }
}
