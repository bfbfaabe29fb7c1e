//! Utility functions for walking an expression tree.

use super::ExprNode;

/// Visits every node of the tree in post-order: left operand, then
/// right operand (if present), then the node itself.
pub fn postorder_walk_borrowed<F>(expr: &ExprNode, mut f: F)
where F: FnMut(&ExprNode) {
  postorder_walk_borrowed_impl(expr, &mut f);
}

fn postorder_walk_borrowed_impl<F>(expr: &ExprNode, f: &mut F)
where F: FnMut(&ExprNode) {
  if let ExprNode::BinaryOp { left, right, .. } = expr {
    postorder_walk_borrowed_impl(left, f);
    if let Some(right) = right {
      postorder_walk_borrowed_impl(right, f);
    }
  }
  f(expr);
}

/// Returns true if any of the sub-expressions of `expr` (including
/// `expr` itself) satisfies the predicate.
pub fn any<F>(expr: &ExprNode, f: F) -> bool
where F: Fn(&ExprNode) -> bool {
  let mut result = false;
  postorder_walk_borrowed(expr, |e| {
    if f(e) {
      result = true;
    }
  });
  result
}
