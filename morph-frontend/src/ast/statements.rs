//! Statement and declaration nodes

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::Expr;

/// Type names of the supported C subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeName {
    Int,
    Float,
    Char,
    Bool,
    Str,
    Void,
}

impl TypeName {
    /// Map a type keyword lexeme to a type, if it is one
    pub fn from_keyword(text: &str) -> Option<TypeName> {
        match text {
            "int" => Some(TypeName::Int),
            "float" | "double" => Some(TypeName::Float),
            "char" => Some(TypeName::Char),
            "bool" => Some(TypeName::Bool),
            "string" => Some(TypeName::Str),
            "void" => Some(TypeName::Void),
            _ => None,
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeName::Int => "int",
            TypeName::Float => "float",
            TypeName::Char => "char",
            TypeName::Bool => "bool",
            TypeName::Str => "string",
            TypeName::Void => "void",
        };
        write!(f, "{}", name)
    }
}

/// A function parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeName,
    pub is_array: bool,
}

/// A statement or declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// `{ ... }`
    Block(Vec<Stmt>),
    /// Expression used as a statement
    Expression(Expr),
    /// Scalar variable declaration, optionally initialized
    VarDecl {
        name: String,
        ty: TypeName,
        init: Option<Expr>,
    },
    /// Fixed-size array declaration
    ArrayDecl {
        name: String,
        elem_ty: TypeName,
        size: Expr,
    },
    /// Function definition, or prototype when `body` is `None`
    FunctionDecl {
        name: String,
        return_ty: TypeName,
        params: Vec<Parameter>,
        body: Option<Vec<Stmt>>,
    },
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    /// Classic three-clause for loop; any clause may be absent
    For {
        init: Option<Box<Stmt>>,
        condition: Option<Expr>,
        increment: Option<Expr>,
        body: Box<Stmt>,
    },
    Return(Option<Expr>),
    Break,
    Continue,
    /// `printf(format, args...)`, recognized as a builtin
    Printf {
        format: Expr,
        args: Vec<Expr>,
    },
    /// `scanf(format, args...)`, recognized as a builtin
    Scanf {
        format: Expr,
        args: Vec<Expr>,
    },
}

/// A complete translation unit
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_keyword() {
        assert_eq!(TypeName::from_keyword("int"), Some(TypeName::Int));
        assert_eq!(TypeName::from_keyword("double"), Some(TypeName::Float));
        assert_eq!(TypeName::from_keyword("string"), Some(TypeName::Str));
        assert_eq!(TypeName::from_keyword("while"), None);
        assert_eq!(TypeName::from_keyword("main"), None);
    }

    #[test]
    fn test_type_display() {
        assert_eq!(TypeName::Str.to_string(), "string");
        assert_eq!(TypeName::Void.to_string(), "void");
    }
}
