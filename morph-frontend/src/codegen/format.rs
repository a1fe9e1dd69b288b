//! `printf` and `scanf` translation
//!
//! `printf` becomes a single `print(f"...", end="")` call: each format
//! specifier is replaced by an f-string placeholder holding the matching
//! argument, `%%` collapses to `%`, and literal text is re-escaped for the
//! Python string. `scanf` becomes `input()` reads with per-specifier
//! conversions; multiple targets share one `input().split()`.

use crate::ast::{Expr, UnaryOp};
use crate::codegen::expressions::gen_expr;
use crate::codegen::pad;

/// Render a printf call; `args` are already-rendered Python expressions
pub(crate) fn gen_printf(format: &str, args: &[String]) -> String {
    let chars: Vec<char> = format.chars().collect();
    let mut inner = String::new();
    let mut next_arg = args.iter();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '%' {
            push_literal(chars[i], &mut inner);
            i += 1;
            continue;
        }

        if chars.get(i + 1) == Some(&'%') {
            inner.push('%');
            i += 2;
            continue;
        }

        // Flags, width, and precision, then a conversion letter
        let mut j = i + 1;
        while j < chars.len()
            && (chars[j].is_ascii_digit() || matches!(chars[j], '-' | '+' | ' ' | '#' | '.'))
        {
            j += 1;
        }

        if j < chars.len() && chars[j].is_ascii_alphabetic() {
            match next_arg.next() {
                Some(arg) => {
                    inner.push('{');
                    inner.push_str(arg);
                    inner.push('}');
                }
                None => {
                    // More specifiers than arguments; keep the raw text
                    for &ch in &chars[i..=j] {
                        push_literal(ch, &mut inner);
                    }
                }
            }
            i = j + 1;
        } else {
            // A '%' that starts no specifier stays literal
            inner.push('%');
            i += 1;
        }
    }

    format!("print(f\"{}\", end=\"\")", inner)
}

/// Escape a literal character for the inside of an f-string
fn push_literal(ch: char, out: &mut String) {
    match ch {
        '{' => out.push_str("{{"),
        '}' => out.push_str("}}"),
        '"' => out.push_str("\\\""),
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\t' => out.push_str("\\t"),
        '\r' => out.push_str("\\r"),
        _ => out.push(ch),
    }
}

/// Render a scanf call as one or more input-reading statements
pub(crate) fn gen_scanf(format: &str, args: &[Expr], level: usize, out: &mut String) {
    let specifiers = collect_specifiers(format);
    let targets: Vec<(String, Option<&'static str>)> = args.iter().map(scanf_target).collect();

    if specifiers.len() != targets.len() {
        pad(level, out);
        out.push_str(&format!(
            "# scanf: {} format specifier(s) for {} argument(s)\n",
            specifiers.len(),
            targets.len()
        ));
    }

    let pairs: Vec<(&char, &(String, Option<&'static str>))> =
        specifiers.iter().zip(targets.iter()).collect();

    match pairs.as_slice() {
        [] => {}
        [(conv, (target, note))] => {
            let (value, conv_note) = convert_read(**conv, "input()".to_string());
            pad(level, out);
            out.push_str(&format!("{} = {}", target, value));
            append_notes(&[*note, conv_note], out);
            out.push('\n');
        }
        _ => {
            pad(level, out);
            out.push_str("_inputs = input().split()\n");
            for (index, (conv, (target, note))) in pairs.iter().enumerate() {
                let source = format!("_inputs[{}]", index);
                let (value, conv_note) = convert_read(**conv, source);
                pad(level, out);
                out.push_str(&format!("{} = {}", target, value));
                append_notes(&[*note, conv_note], out);
                out.push('\n');
            }
        }
    }
}

/// The conversion letters of the format string, `%%` excluded
fn collect_specifiers(format: &str) -> Vec<char> {
    let chars: Vec<char> = format.chars().collect();
    let mut specifiers = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '%' {
            i += 1;
            continue;
        }
        if chars.get(i + 1) == Some(&'%') {
            i += 2;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len()
            && (chars[j].is_ascii_digit() || matches!(chars[j], '-' | '+' | ' ' | '#' | '.'))
        {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_alphabetic() {
            specifiers.push(chars[j]);
            i = j + 1;
        } else {
            i += 1;
        }
    }

    specifiers
}

/// Target variable text for a scanf argument; a missing `&` is noted but
/// the argument is still used
fn scanf_target(arg: &Expr) -> (String, Option<&'static str>) {
    match arg {
        Expr::Unary {
            op: UnaryOp::AddressOf,
            operand,
        } => (gen_expr(operand), None),
        other => (gen_expr(other), Some("expected &argument")),
    }
}

/// Wrap a read expression in the conversion a specifier calls for
fn convert_read(conv: char, source: String) -> (String, Option<&'static str>) {
    match conv {
        'd' | 'i' | 'u' => (format!("int({})", source), None),
        'f' | 'e' | 'g' => (format!("float({})", source), None),
        's' => (source, None),
        'c' => (format!("{}[:1]", source), None),
        _ => (source, Some("unsupported format specifier")),
    }
}

fn append_notes(notes: &[Option<&'static str>], out: &mut String) {
    let notes: Vec<&str> = notes.iter().flatten().copied().collect();
    if !notes.is_empty() {
        out.push_str(&format!("  # scanf: {}", notes.join("; ")));
    }
}
