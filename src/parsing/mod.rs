//! Incremental, character-at-a-time parsing of arithmetic
//! expressions.

pub mod error;
pub mod literal;
pub mod parser;
pub mod source;

pub use error::ParseError;
pub use parser::Parser;
