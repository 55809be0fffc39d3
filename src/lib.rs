//! riccilang
//!
//! Front end of a small interpreted language: source text goes through the
//! [`Lexer`] into the [`Parser`], which builds a [`Program`] and collects
//! diagnostics along the way.

pub mod feedback;
pub mod frontend;
pub mod repl;
pub mod utils;

pub use frontend::ast::{Node, Program};
pub use frontend::lexer::Lexer;
pub use frontend::parser::Parser;
pub use frontend::token::{Token, TokenKind};
