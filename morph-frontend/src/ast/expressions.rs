//! Expression nodes

use serde::{Deserialize, Serialize};

use crate::ast::{BinaryOp, UnaryOp};

/// An expression
///
/// Numeric literals keep their source spelling so output can reproduce the
/// exact digits the input used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// `target = value` (right-associative)
    Assignment {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    /// `left op right`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Prefix or postfix unary operation
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// Variable or function name
    Identifier(String),
    /// `array[index]`
    Subscript {
        array: Box<Expr>,
        index: Box<Expr>,
    },
    /// `name(args...)`
    Call {
        name: String,
        args: Vec<Expr>,
    },
    /// Integer or float literal, source spelling preserved
    Number(String),
    /// String literal with escapes already resolved
    Str(String),
    /// Character literal
    Char(char),
    /// `true` or `false`
    Bool(bool),
}

impl Expr {
    /// Whether the expression may appear on the left of an assignment
    pub fn is_lvalue(&self) -> bool {
        matches!(self, Expr::Identifier(_) | Expr::Subscript { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lvalue_classification() {
        assert!(Expr::Identifier("x".to_string()).is_lvalue());
        assert!(Expr::Subscript {
            array: Box::new(Expr::Identifier("a".to_string())),
            index: Box::new(Expr::Number("0".to_string())),
        }
        .is_lvalue());
        assert!(!Expr::Number("1".to_string()).is_lvalue());
        assert!(!Expr::Call {
            name: "f".to_string(),
            args: vec![],
        }
        .is_lvalue());
    }
}
