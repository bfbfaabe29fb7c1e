use crate::expr::error::EvalError;
use crate::parsing::error::ParseError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  ParseError(#[from] ParseError),
  #[error("{0}")]
  EvalError(#[from] EvalError),
}
