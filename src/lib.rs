//! Arithmetic expressions parsed and evaluated one character at a
//! time, strictly left-to-right.

pub mod error;
pub mod expr;
pub mod parsing;
pub mod runner;

use error::Error;
use parsing::parser::Parser;

/// Parses `input` in full and evaluates the result. Returns
/// `Ok(None)` if the input contains no operand at all.
pub fn evaluate(input: &str) -> Result<Option<f64>, Error> {
  let parser = Parser::parse(input)?;
  Ok(parser.result()?)
}
