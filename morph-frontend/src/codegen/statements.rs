//! Statement rendering
//!
//! Statement emitters thread the indentation level explicitly. Suites that
//! would come out empty (a C loop with an empty body, or one whose only
//! statement produces no Python) become `pass`.
//!
//! Countable `for` loops are rendered as `range()` calls; anything else
//! falls back to a `while` loop with the increment appended to the body.

use crate::ast::{BinaryOp, Expr, Stmt, UnaryOp};
use crate::codegen::expressions::gen_expr;
use crate::codegen::{format, pad};

pub(crate) fn gen_statement(stmt: &Stmt, level: usize, out: &mut String) {
    match stmt {
        Stmt::Block(statements) => {
            // C braces do not open a Python scope; an empty block still
            // needs a statement
            let mut inner = String::new();
            for s in statements {
                gen_statement(s, level, &mut inner);
            }
            flush_suite(inner, level, out);
        }
        Stmt::Expression(expr) => {
            pad(level, out);
            out.push_str(&gen_expr_statement_text(expr));
            out.push('\n');
        }
        Stmt::VarDecl { name, init, .. } => {
            // An uninitialized C declaration has no Python counterpart
            if let Some(init) = init {
                pad(level, out);
                out.push_str(&format!("{} = {}\n", name, gen_expr(init)));
            }
        }
        Stmt::ArrayDecl { name, size, .. } => {
            pad(level, out);
            out.push_str(&format!("{} = [None] * {}\n", name, gen_expr(size)));
        }
        Stmt::FunctionDecl {
            name, params, body, ..
        } => {
            // Parameter types are dropped; Python binds by name only
            let params: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
            pad(level, out);
            out.push_str(&format!("def {}({}):\n", name, params.join(", ")));
            match body {
                Some(body) => gen_suite(body, level + 1, out),
                // A prototype has no statements to carry over
                None => {
                    pad(level + 1, out);
                    out.push_str("pass\n");
                }
            }
            if level == 0 {
                out.push('\n');
            }
        }
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => gen_if(condition, then_branch, else_branch, level, out),
        Stmt::While { condition, body } => {
            pad(level, out);
            out.push_str(&format!("while {}:\n", gen_expr(condition)));
            gen_suite_stmt(body, level + 1, out);
        }
        Stmt::For {
            init,
            condition,
            increment,
            body,
        } => gen_for(init.as_deref(), condition.as_ref(), increment.as_ref(), body, level, out),
        Stmt::Return(value) => {
            pad(level, out);
            match value {
                Some(value) => out.push_str(&format!("return {}\n", gen_expr(value))),
                None => out.push_str("return\n"),
            }
        }
        Stmt::Break => {
            pad(level, out);
            out.push_str("break\n");
        }
        Stmt::Continue => {
            pad(level, out);
            out.push_str("continue\n");
        }
        Stmt::Printf { format, args } => {
            pad(level, out);
            match format {
                Expr::Str(text) => {
                    let args: Vec<String> = args.iter().map(gen_expr).collect();
                    out.push_str(&format::gen_printf(text, &args));
                }
                other => out.push_str(&format!("print({})", gen_expr(other))),
            }
            out.push('\n');
        }
        Stmt::Scanf { format, args } => match format {
            Expr::Str(text) => format::gen_scanf(text, args, level, out),
            other => {
                pad(level, out);
                out.push_str(&format!("input()  # scanf with non-literal format {}\n", gen_expr(other)));
            }
        },
    }
}

/// Emit a statement list as an indented suite, with `pass` if it is empty
pub(crate) fn gen_suite(statements: &[Stmt], level: usize, out: &mut String) {
    let mut inner = String::new();
    for stmt in statements {
        gen_statement(stmt, level, &mut inner);
    }
    flush_suite(inner, level, out);
}

/// Emit a single statement (possibly a block) as an indented suite
fn gen_suite_stmt(body: &Stmt, level: usize, out: &mut String) {
    let mut inner = String::new();
    gen_statement(body, level, &mut inner);
    flush_suite(inner, level, out);
}

fn flush_suite(inner: String, level: usize, out: &mut String) {
    if inner.is_empty() {
        pad(level, out);
        out.push_str("pass\n");
    } else {
        out.push_str(&inner);
    }
}

/// Render an expression in statement position
///
/// Assignments lose their outer parentheses and chain (`a = b = 1`), and
/// a bare `++`/`--` becomes an augmented assignment.
pub(crate) fn gen_expr_statement_text(expr: &Expr) -> String {
    match expr {
        Expr::Assignment { target, value } => {
            let value_text = match value.as_ref() {
                chained @ Expr::Assignment { .. } => gen_expr_statement_text(chained),
                other => gen_expr(other),
            };
            format!("{} = {}", gen_expr(target), value_text)
        }
        Expr::Unary {
            op: UnaryOp::PreIncrement | UnaryOp::PostIncrement,
            operand,
        } => format!("{} += 1", gen_expr(operand)),
        Expr::Unary {
            op: UnaryOp::PreDecrement | UnaryOp::PostDecrement,
            operand,
        } => format!("{} -= 1", gen_expr(operand)),
        other => gen_expr(other),
    }
}

/// Emit an if statement, flattening `else if` chains into `elif` at the
/// same indentation level
fn gen_if(
    condition: &Expr,
    then_branch: &Stmt,
    else_branch: &Option<Box<Stmt>>,
    level: usize,
    out: &mut String,
) {
    pad(level, out);
    out.push_str(&format!("if {}:\n", gen_expr(condition)));
    gen_suite_stmt(then_branch, level + 1, out);

    let mut current = else_branch;
    while let Some(branch) = current {
        match branch.as_ref() {
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                pad(level, out);
                out.push_str(&format!("elif {}:\n", gen_expr(condition)));
                gen_suite_stmt(then_branch, level + 1, out);
                current = else_branch;
            }
            other => {
                pad(level, out);
                out.push_str("else:\n");
                gen_suite_stmt(other, level + 1, out);
                break;
            }
        }
    }
}

struct RangeLoop {
    var: String,
    start: String,
    bound: String,
    step: i64,
}

fn gen_for(
    init: Option<&Stmt>,
    condition: Option<&Expr>,
    increment: Option<&Expr>,
    body: &Stmt,
    level: usize,
    out: &mut String,
) {
    if let Some(range) = recognize_range_loop(init, condition, increment) {
        pad(level, out);
        out.push_str(&format!(
            "for {} in range({}, {}, {}):\n",
            range.var, range.start, range.bound, range.step
        ));
        gen_suite_stmt(body, level + 1, out);
        return;
    }

    if let Some(init) = init {
        gen_statement(init, level, out);
    }

    pad(level, out);
    match condition {
        Some(condition) => out.push_str(&format!("while {}:\n", gen_expr(condition))),
        None => out.push_str("while True:\n"),
    }

    let mut inner = String::new();
    gen_statement(body, level + 1, &mut inner);
    if let Some(increment) = increment {
        pad(level + 1, &mut inner);
        inner.push_str(&gen_expr_statement_text(increment));
        inner.push('\n');
    }
    flush_suite(inner, level + 1, out);
}

/// Match the `for (v = start; v < bound; v += step)` family
///
/// The loop variable must be a plain identifier that the condition compares
/// on the left and the increment steps by a literal integer amount, in the
/// direction the comparison expects.
fn recognize_range_loop(
    init: Option<&Stmt>,
    condition: Option<&Expr>,
    increment: Option<&Expr>,
) -> Option<RangeLoop> {
    let (var, start) = match init? {
        Stmt::VarDecl {
            name,
            init: Some(start),
            ..
        } => (name.clone(), gen_expr(start)),
        Stmt::Expression(Expr::Assignment { target, value }) => match target.as_ref() {
            Expr::Identifier(name) => (name.clone(), gen_expr(value)),
            _ => return None,
        },
        _ => return None,
    };

    let step = recognize_step(increment?, &var)?;

    let Expr::Binary { op, left, right } = condition? else {
        return None;
    };
    if !matches!(left.as_ref(), Expr::Identifier(name) if *name == var) {
        return None;
    }

    let bound = match *op {
        BinaryOp::Less if step > 0 => gen_expr(right),
        BinaryOp::LessEqual if step > 0 => adjust_bound(right, 1),
        BinaryOp::Greater if step < 0 => gen_expr(right),
        BinaryOp::GreaterEqual if step < 0 => adjust_bound(right, -1),
        _ => return None,
    };

    Some(RangeLoop {
        var,
        start,
        bound,
        step,
    })
}

/// Integer step of the increment clause, if it has one
fn recognize_step(increment: &Expr, var: &str) -> Option<i64> {
    match increment {
        Expr::Unary { op, operand } => {
            if !matches!(operand.as_ref(), Expr::Identifier(name) if name == var) {
                return None;
            }
            match op {
                UnaryOp::PreIncrement | UnaryOp::PostIncrement => Some(1),
                UnaryOp::PreDecrement | UnaryOp::PostDecrement => Some(-1),
                _ => None,
            }
        }
        Expr::Assignment { target, value } => {
            if !matches!(target.as_ref(), Expr::Identifier(name) if name == var) {
                return None;
            }
            let Expr::Binary { op, left, right } = value.as_ref() else {
                return None;
            };
            if !matches!(left.as_ref(), Expr::Identifier(name) if name == var) {
                return None;
            }
            let Expr::Number(text) = right.as_ref() else {
                return None;
            };
            let amount: i64 = text.parse().ok()?;
            match *op {
                BinaryOp::Add => Some(amount),
                BinaryOp::Sub => Some(-amount),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Inclusive-bound adjustment: fold into integer literals, otherwise
/// append `+ 1` / `- 1` to the rendered bound
fn adjust_bound(bound: &Expr, delta: i64) -> String {
    if let Expr::Number(text) = bound {
        if let Ok(value) = text.parse::<i64>() {
            return (value + delta).to_string();
        }
    }
    let rendered = gen_expr(bound);
    if delta > 0 {
        format!("{} + 1", rendered)
    } else {
        format!("{} - 1", rendered)
    }
}
