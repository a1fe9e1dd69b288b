//! Abstract syntax tree for the supported C subset
//!
//! The tree is a pair of closed enums ([`Expr`] and [`Stmt`]) so every
//! consumer matches exhaustively; adding a node form is a compile-time
//! event at every use site.

pub mod expressions;
pub mod ops;
pub mod printer;
pub mod statements;

pub use expressions::Expr;
pub use ops::{BinaryOp, UnaryOp};
pub use statements::{Parameter, Program, Stmt, TypeName};
