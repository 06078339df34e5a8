//! LENS Condition Expressions
//!
//! This crate provides the restricted expression language used by business
//! rule conditions:
//! - Lexing and parsing into an explicit expression tree (no runtime string
//!   evaluation anywhere)
//! - Comparison and logical operators over property references and literals
//! - A stateless evaluator over a name-to-value scope
//!
//! Conditions are parsed once at schema registration; evaluation is a pure
//! function of the scope handed in.

mod ast;
mod error;
mod eval;
mod lexer;
mod parser;

pub use ast::*;
pub use error::*;
pub use eval::Evaluator;
pub use parser::{parse_condition, Parser};
