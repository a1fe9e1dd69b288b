//! Expression rendering
//!
//! Binary expressions are always parenthesized, so C precedence survives
//! regardless of the Python context the text lands in. Logical operators
//! map to `and`/`or`/`not`. Address-of has no Python counterpart and is
//! erased, leaving the operand. An assignment used as a value becomes a
//! `:=` expression when the target is a plain name.

use crate::ast::{BinaryOp, Expr, UnaryOp};

/// Render an expression as Python source
pub fn gen_expr(expr: &Expr) -> String {
    match expr {
        Expr::Assignment { target, value } => match target.as_ref() {
            Expr::Identifier(name) => format!("({} := {})", name, gen_expr(value)),
            _ => {
                log::warn!(
                    "assignment to {} used as a value; emitting the right-hand side",
                    gen_expr(target)
                );
                gen_expr(value)
            }
        },
        Expr::Binary { op, left, right } => {
            format!("({} {} {})", gen_expr(left), py_binary_op(*op), gen_expr(right))
        }
        Expr::Unary { op, operand } => match op {
            UnaryOp::Not => format!("(not {})", gen_expr(operand)),
            UnaryOp::Negate => format!("(-{})", gen_expr(operand)),
            UnaryOp::AddressOf => gen_expr(operand),
            UnaryOp::PreIncrement
            | UnaryOp::PreDecrement
            | UnaryOp::PostIncrement
            | UnaryOp::PostDecrement => {
                log::warn!(
                    "{} used as a value; emitting the operand unchanged",
                    op.symbol()
                );
                gen_expr(operand)
            }
        },
        Expr::Identifier(name) => name.clone(),
        Expr::Subscript { array, index } => {
            format!("{}[{}]", gen_expr(array), gen_expr(index))
        }
        Expr::Call { name, args } => {
            let args: Vec<String> = args.iter().map(gen_expr).collect();
            format!("{}({})", name, args.join(", "))
        }
        Expr::Number(text) => text.clone(),
        Expr::Str(value) => py_string_literal(value),
        Expr::Char(value) => py_char_literal(*value),
        Expr::Bool(value) => if *value { "True" } else { "False" }.to_string(),
    }
}

fn py_binary_op(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::LogicalOr => "or",
        BinaryOp::LogicalAnd => "and",
        _ => op.symbol(),
    }
}

/// Render a double-quoted Python string literal
pub(crate) fn py_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        push_escaped(ch, '"', &mut out);
    }
    out.push('"');
    out
}

/// Render a single-quoted one-character Python string
pub(crate) fn py_char_literal(value: char) -> String {
    let mut out = String::new();
    out.push('\'');
    push_escaped(value, '\'', &mut out);
    out.push('\'');
    out
}

fn push_escaped(ch: char, quote: char, out: &mut String) {
    match ch {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\t' => out.push_str("\\t"),
        '\r' => out.push_str("\\r"),
        '\0' => out.push_str("\\x00"),
        '\u{8}' => out.push_str("\\b"),
        '\u{c}' => out.push_str("\\f"),
        _ if ch == quote => {
            out.push('\\');
            out.push(quote);
        }
        _ => out.push(ch),
    }
}
