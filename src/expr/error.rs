use super::operator::BinaryOperator;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EvalError {
  #[error("Second argument of ({operator}) not set")]
  IncompleteOperand {
    operator: BinaryOperator,
  },
}
