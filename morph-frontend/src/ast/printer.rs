//! Human-readable AST dump
//!
//! Renders the tree one node per line with two-space indentation, for the
//! `ast` driver subcommand and for debugging.

use crate::ast::{Expr, Program, Stmt};

/// Render a program as an indented tree
pub fn dump(program: &Program) -> String {
    let mut out = String::new();
    out.push_str("Program\n");
    for stmt in &program.statements {
        dump_stmt(stmt, 1, &mut out);
    }
    out
}

fn pad(level: usize, out: &mut String) {
    for _ in 0..level {
        out.push_str("  ");
    }
}

fn dump_stmt(stmt: &Stmt, level: usize, out: &mut String) {
    pad(level, out);
    match stmt {
        Stmt::Block(statements) => {
            out.push_str("Block\n");
            for s in statements {
                dump_stmt(s, level + 1, out);
            }
        }
        Stmt::Expression(expr) => {
            out.push_str("ExpressionStatement\n");
            dump_expr(expr, level + 1, out);
        }
        Stmt::VarDecl { name, ty, init } => {
            out.push_str(&format!("VarDecl {}: {}\n", name, ty));
            if let Some(init) = init {
                dump_expr(init, level + 1, out);
            }
        }
        Stmt::ArrayDecl { name, elem_ty, size } => {
            out.push_str(&format!("ArrayDecl {}: {}[]\n", name, elem_ty));
            dump_expr(size, level + 1, out);
        }
        Stmt::FunctionDecl {
            name,
            return_ty,
            params,
            body,
        } => {
            let params: Vec<String> = params
                .iter()
                .map(|p| {
                    if p.is_array {
                        format!("{} {}[]", p.ty, p.name)
                    } else {
                        format!("{} {}", p.ty, p.name)
                    }
                })
                .collect();
            out.push_str(&format!(
                "FunctionDecl {}({}) -> {}\n",
                name,
                params.join(", "),
                return_ty
            ));
            match body {
                Some(statements) => {
                    for s in statements {
                        dump_stmt(s, level + 1, out);
                    }
                }
                None => {
                    pad(level + 1, out);
                    out.push_str("(prototype)\n");
                }
            }
        }
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            out.push_str("If\n");
            dump_expr(condition, level + 1, out);
            pad(level + 1, out);
            out.push_str("Then\n");
            dump_stmt(then_branch, level + 2, out);
            if let Some(else_branch) = else_branch {
                pad(level + 1, out);
                out.push_str("Else\n");
                dump_stmt(else_branch, level + 2, out);
            }
        }
        Stmt::While { condition, body } => {
            out.push_str("While\n");
            dump_expr(condition, level + 1, out);
            dump_stmt(body, level + 1, out);
        }
        Stmt::For {
            init,
            condition,
            increment,
            body,
        } => {
            out.push_str("For\n");
            if let Some(init) = init {
                pad(level + 1, out);
                out.push_str("Init\n");
                dump_stmt(init, level + 2, out);
            }
            if let Some(condition) = condition {
                pad(level + 1, out);
                out.push_str("Condition\n");
                dump_expr(condition, level + 2, out);
            }
            if let Some(increment) = increment {
                pad(level + 1, out);
                out.push_str("Increment\n");
                dump_expr(increment, level + 2, out);
            }
            pad(level + 1, out);
            out.push_str("Body\n");
            dump_stmt(body, level + 2, out);
        }
        Stmt::Return(value) => {
            out.push_str("Return\n");
            if let Some(value) = value {
                dump_expr(value, level + 1, out);
            }
        }
        Stmt::Break => out.push_str("Break\n"),
        Stmt::Continue => out.push_str("Continue\n"),
        Stmt::Printf { format, args } => {
            out.push_str("Printf\n");
            dump_expr(format, level + 1, out);
            for arg in args {
                dump_expr(arg, level + 1, out);
            }
        }
        Stmt::Scanf { format, args } => {
            out.push_str("Scanf\n");
            dump_expr(format, level + 1, out);
            for arg in args {
                dump_expr(arg, level + 1, out);
            }
        }
    }
}

fn dump_expr(expr: &Expr, level: usize, out: &mut String) {
    pad(level, out);
    match expr {
        Expr::Assignment { target, value } => {
            out.push_str("Assignment\n");
            dump_expr(target, level + 1, out);
            dump_expr(value, level + 1, out);
        }
        Expr::Binary { op, left, right } => {
            out.push_str(&format!("Binary {}\n", op));
            dump_expr(left, level + 1, out);
            dump_expr(right, level + 1, out);
        }
        Expr::Unary { op, operand } => {
            let fixity = if op.is_postfix() { "postfix" } else { "prefix" };
            out.push_str(&format!("Unary {} ({})\n", op, fixity));
            dump_expr(operand, level + 1, out);
        }
        Expr::Identifier(name) => out.push_str(&format!("Identifier {}\n", name)),
        Expr::Subscript { array, index } => {
            out.push_str("Subscript\n");
            dump_expr(array, level + 1, out);
            dump_expr(index, level + 1, out);
        }
        Expr::Call { name, args } => {
            out.push_str(&format!("Call {}\n", name));
            for arg in args {
                dump_expr(arg, level + 1, out);
            }
        }
        Expr::Number(text) => out.push_str(&format!("Number {}\n", text)),
        Expr::Str(value) => out.push_str(&format!("String {:?}\n", value)),
        Expr::Char(value) => out.push_str(&format!("Char {:?}\n", value)),
        Expr::Bool(value) => out.push_str(&format!("Bool {}\n", value)),
    }
}
