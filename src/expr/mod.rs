pub mod error;
pub mod operator;
pub mod walker;

use error::EvalError;
use operator::BinaryOperator;

use std::fmt::{self, Display, Formatter};

/// A numeric expression tree, as built by the incremental
/// [`Parser`](crate::parsing::parser::Parser).
///
/// A binary node is created as soon as its operator character is
/// read, at which point only the left-hand side is known. The
/// right-hand side starts out absent and is filled in at most once,
/// when the next operand (a literal or a parenthesized group) is
/// finalized.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
  Literal(f64),
  BinaryOp {
    kind: BinaryOperator,
    left: Box<ExprNode>,
    right: Option<Box<ExprNode>>,
  },
}

impl ExprNode {
  pub fn literal(value: f64) -> ExprNode {
    ExprNode::Literal(value)
  }

  /// A binary node whose right-hand operand has not been supplied
  /// yet.
  pub fn binary(kind: BinaryOperator, left: ExprNode) -> ExprNode {
    ExprNode::BinaryOp {
      kind,
      left: Box::new(left),
      right: None,
    }
  }

  /// Convenience constructor for a binary node with both operands
  /// known up front.
  pub fn binary_complete(kind: BinaryOperator, left: ExprNode, right: ExprNode) -> ExprNode {
    ExprNode::BinaryOp {
      kind,
      left: Box::new(left),
      right: Some(Box::new(right)),
    }
  }

  /// Whether this node has every operand it needs. Only the node
  /// itself is inspected, not its children; see
  /// [`ExprNode::is_fully_complete`] for the recursive check.
  pub fn is_complete(&self) -> bool {
    match self {
      ExprNode::Literal(_) => true,
      ExprNode::BinaryOp { right, .. } => right.is_some(),
    }
  }

  /// Whether every node in this tree is complete.
  pub fn is_fully_complete(&self) -> bool {
    !walker::any(self, |node| !node.is_complete())
  }

  /// Places `operand` in the pending right-hand slot of this node. If
  /// there is no pending slot (`self` is a literal or is already
  /// complete), the operand is handed back unchanged.
  pub fn fill_right(&mut self, operand: ExprNode) -> Result<(), ExprNode> {
    match self {
      ExprNode::BinaryOp { right, .. } if right.is_none() => {
        *right = Some(Box::new(operand));
        Ok(())
      }
      _ => Err(operand),
    }
  }

  /// Computes the value of the tree. Arithmetic follows IEEE 754
  /// semantics, so division by zero is not an error. Fails only if
  /// some binary node is missing its right-hand operand.
  pub fn evaluate(&self) -> Result<f64, EvalError> {
    match self {
      ExprNode::Literal(value) => Ok(*value),
      ExprNode::BinaryOp { kind, left, right } => {
        let left = left.evaluate()?;
        let right = right.as_deref()
          .ok_or(EvalError::IncompleteOperand { operator: *kind })?
          .evaluate()?;
        Ok(kind.apply(left, right))
      }
    }
  }
}

impl From<f64> for ExprNode {
  fn from(value: f64) -> ExprNode {
    ExprNode::Literal(value)
  }
}

/// Renders the tree as fully parenthesized infix text, such as `((2.0
/// + 3.0) * 4.0)`. A missing right-hand operand is shown as `?`.
impl Display for ExprNode {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      ExprNode::Literal(value) => {
        fmt_literal(f, *value)
      }
      ExprNode::BinaryOp { kind, left, right } => {
        write!(f, "({left} {kind} ")?;
        match right {
          Some(right) => write!(f, "{right})"),
          None => write!(f, "?)"),
        }
      }
    }
  }
}

fn fmt_literal(f: &mut Formatter<'_>, d: f64) -> fmt::Result {
  // If the float is actually a (small) integer, force one decimal
  // point. Otherwise, use default printer.
  if d.fract() == 0.0 && d.abs() < u64::MAX as f64 {
    write!(f, "{:.1}", d)
  } else {
    write!(f, "{}", d)
  }
}
