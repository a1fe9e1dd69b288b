//! Macro rendering
//!
//! Object-like macros become module-level assignments, function-like
//! macros become one-line functions. The macro body is lexed and parsed
//! on its own as an expression; a body that is empty or does not parse
//! renders as `None`. Macros marked invalid during lexing are skipped.

use crate::codegen::expressions::gen_expr;
use crate::lexer::{tokenize, MacroDefinition};
use crate::parser::parse_expression;

pub(crate) fn render_macros(macro_defs: &[MacroDefinition]) -> String {
    let mut chunks = Vec::new();

    for def in macro_defs {
        if !def.is_valid {
            log::warn!("Skipping invalid macro '{}'", def.name);
            continue;
        }

        let body = macro_body_expr(&def.body).unwrap_or_else(|| "None".to_string());
        if def.is_function_like {
            chunks.push(format!(
                "def {}({}):\n    return {}",
                def.name,
                def.parameters.join(", "),
                body
            ));
        } else {
            chunks.push(format!("{} = {}", def.name, body));
        }
    }

    if chunks.is_empty() {
        String::new()
    } else {
        format!("{}\n", chunks.join("\n"))
    }
}

/// Parse a macro body as a standalone expression and render it
fn macro_body_expr(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let (tokens, _) = tokenize(body);
    match parse_expression(tokens) {
        Ok(expr) => Some(gen_expr(&expr)),
        Err(err) => {
            log::warn!("Macro body {:?} is not an expression: {}", body, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn render(source: &str) -> String {
        let (_, macro_defs) = tokenize(source);
        render_macros(&macro_defs)
    }

    #[test]
    fn test_object_like_macro() {
        assert_eq!(render("#define PI 3.14159\n"), "PI = 3.14159\n");
    }

    #[test]
    fn test_function_like_macro() {
        assert_eq!(
            render("#define SQUARE(x) ((x) * (x))\n"),
            "def SQUARE(x):\n    return (x * x)\n"
        );
    }

    #[test]
    fn test_two_parameter_macro() {
        assert_eq!(
            render("#define MAX(a, b) a > b\n"),
            "def MAX(a, b):\n    return (a > b)\n"
        );
    }

    #[test]
    fn test_empty_body_renders_none() {
        assert_eq!(render("#define DEBUG\n"), "DEBUG = None\n");
    }

    #[test]
    fn test_unparseable_body_renders_none() {
        assert_eq!(render("#define WEIRD 1 +\n"), "WEIRD = None\n");
    }

    #[test]
    fn test_invalid_macro_skipped() {
        assert_eq!(render("#define 123BAD 42\n"), "");
    }

    #[test]
    fn test_macros_render_in_definition_order() {
        let python = render("#define A 1\n#define B 2\n");
        assert_eq!(python, "A = 1\nB = 2\n");
    }
}
