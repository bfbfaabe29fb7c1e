use super::error::ParseError;
use super::literal::LiteralBuffer;
use super::source::SourceOffset;
use crate::expr::ExprNode;
use crate::expr::error::EvalError;
use crate::expr::operator::BinaryOperator;

use tracing::{debug, warn};

/// An incremental parser for arithmetic expressions.
///
/// Characters are fed one at a time with [`Parser::add_char`] and the
/// expression tree is built eagerly as they arrive. There is no
/// tokenizer and no operator precedence: every operator wraps the
/// entire tree built so far as its left-hand operand, so `2+3*4`
/// means `(2+3)*4`. Parentheses are the only way to group
/// differently.
///
/// A parenthesized group is handled by a nested `Parser`, which
/// receives every character up to the matching `)`. When the group
/// closes, the nested parser is finished and its tree is moved into
/// this one as an operand.
///
/// Once any method has returned an error, the parser should be
/// discarded.
#[derive(Debug, Default)]
pub struct Parser {
  literal: LiteralBuffer,
  root: Option<ExprNode>,
  nested: Option<Box<Parser>>,
  // Number of unmatched `(`. Nonzero iff `nested` is present.
  depth: usize,
  position: SourceOffset,
  finished: bool,
}

impl Parser {
  pub fn new() -> Self {
    Self::default()
  }

  /// A parser whose first character sits at `position` in the
  /// overall input. Used for nested groups, so that error positions
  /// are reported relative to the whole expression.
  fn starting_at(position: SourceOffset) -> Self {
    Self {
      position,
      ..Self::default()
    }
  }

  /// Feeds every character of `input` and then finishes the parser.
  #[tracing::instrument(level = "debug")]
  pub fn parse(input: &str) -> Result<Parser, ParseError> {
    let mut parser = Parser::new();
    parser.feed(input)?;
    parser.finish()?;
    Ok(parser)
  }

  /// Feeds a chunk of input without finishing. Feeding a string in
  /// several chunks is equivalent to feeding it all at once.
  pub fn feed(&mut self, input: &str) -> Result<(), ParseError> {
    input.chars().try_for_each(|c| self.add_char(c))
  }

  pub fn add_char(&mut self, c: char) -> Result<(), ParseError> {
    if self.finished {
      return Err(ParseError::AlreadyFinished);
    }
    let pos = self.position;
    self.position += 1;

    if let Some(nested) = self.nested.as_mut() {
      return match c {
        '(' => {
          self.depth += 1;
          nested.add_char(c)
        }
        ')' => {
          self.depth -= 1;
          if self.depth == 0 {
            self.close_group()
          } else {
            nested.add_char(c)
          }
        }
        _ => nested.add_char(c),
      };
    }

    match c {
      '(' => {
        self.open_group(pos);
        Ok(())
      }
      _ if c.is_whitespace() => Ok(()),
      _ if LiteralBuffer::accepts(c) => {
        self.literal.push(c, pos);
        Ok(())
      }
      _ => self.read_operator(c, pos),
    }
  }

  /// Finalizes the pending literal, if any. No characters may be fed
  /// afterward.
  pub fn finish(&mut self) -> Result<(), ParseError> {
    if self.finished {
      return Err(ParseError::AlreadyFinished);
    }
    self.finished = true;
    if self.depth > 0 {
      return Err(ParseError::UnclosedParenthesis { depth: self.depth });
    }
    self.finalize_literal()
  }

  /// Evaluates the tree built so far. Returns `Ok(None)` if no
  /// operand was ever read.
  pub fn result(&self) -> Result<Option<f64>, EvalError> {
    self.root.as_ref().map(ExprNode::evaluate).transpose()
  }

  pub fn root(&self) -> Option<&ExprNode> {
    self.root.as_ref()
  }

  pub fn into_root(self) -> Option<ExprNode> {
    self.root
  }

  /// The number of currently unmatched `(` characters.
  pub fn depth(&self) -> usize {
    self.depth
  }

  pub fn is_finished(&self) -> bool {
    self.finished
  }

  fn open_group(&mut self, pos: SourceOffset) {
    debug!(position = %pos, "opening nested group");
    self.depth = 1;
    self.nested = Some(Box::new(Parser::starting_at(pos + 1)));
  }

  fn close_group(&mut self) -> Result<(), ParseError> {
    let Some(mut nested) = self.nested.take() else {
      return Ok(());
    };
    nested.finish()?;
    match nested.into_root() {
      Some(group) => {
        debug!(group = %group, "closing nested group");
        self.attach(group);
      }
      None => {
        debug!("closing empty nested group");
      }
    }
    Ok(())
  }

  fn read_operator(&mut self, c: char, pos: SourceOffset) -> Result<(), ParseError> {
    self.finalize_literal()?;
    let unexpected = ParseError::UnexpectedCharacter { ch: c, position: pos };
    if self.root.as_ref().is_some_and(ExprNode::is_complete) {
      let kind = BinaryOperator::from_char(c).ok_or(unexpected)?;
      self.root = self.root.take().map(|left| ExprNode::binary(kind, left));
      Ok(())
    } else if c == '-' {
      self.literal.mark_negative();
      Ok(())
    } else {
      Err(unexpected)
    }
  }

  fn finalize_literal(&mut self) -> Result<(), ParseError> {
    if let Some(value) = self.literal.take()? {
      self.attach(ExprNode::literal(value));
    }
    Ok(())
  }

  /// Places a freshly completed operand: as the root if there is
  /// none yet, otherwise in the root's pending right-hand slot.
  fn attach(&mut self, operand: ExprNode) {
    match self.root.as_mut() {
      None => {
        self.root = Some(operand);
      }
      Some(root) => {
        if let Err(dropped) = root.fill_right(operand) {
          warn!(%dropped, %root, "discarding operand, expression is already complete");
        }
      }
    }
  }
}
