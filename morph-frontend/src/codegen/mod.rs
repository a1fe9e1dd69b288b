//! Python code generation
//!
//! Walks the AST and emits Python 3 source. Indentation is four spaces per
//! level, threaded explicitly through the statement emitters. Macro
//! definitions are rendered first so names they bind are defined before
//! any code that uses them.

pub mod expressions;
pub mod format;
pub mod macros;
pub mod statements;

use crate::ast::Program;
use crate::lexer::MacroDefinition;

/// One level of Python indentation
pub const INDENT: &str = "    ";

/// Append `level` indentation steps to the output
pub(crate) fn pad(level: usize, out: &mut String) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

/// Generate a Python module from a parsed program and its macros
pub fn generate(program: &Program, macro_defs: &[MacroDefinition]) -> String {
    let mut out = String::new();

    let rendered_macros = macros::render_macros(macro_defs);
    if !rendered_macros.is_empty() {
        out.push_str(&rendered_macros);
        if !program.statements.is_empty() {
            out.push('\n');
        }
    }

    for stmt in &program.statements {
        statements::gen_statement(stmt, 0, &mut out);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse;

    pub(crate) fn translate_snippet(source: &str) -> String {
        let (tokens, macro_defs) = tokenize(source);
        let (program, diagnostics) = parse(tokens);
        assert!(diagnostics.is_empty(), "diagnostics: {:?}", diagnostics);
        generate(&program, &macro_defs)
    }

    #[test]
    fn test_macros_precede_code() {
        let python = translate_snippet("#define PI 3.14159\nfloat r = PI;");
        assert_eq!(python, "PI = 3.14159\n\nr = PI\n");
    }

    #[test]
    fn test_empty_program_is_empty_output() {
        assert_eq!(translate_snippet(""), "");
    }
}
