use super::error::ParseError;
use super::source::{SourceOffset, Span};

use once_cell::sync::Lazy;
use regex::Regex;

use std::mem;
use std::str::FromStr;

/// Accumulates the text of a numeric literal one character at a
/// time, together with a pending unary minus.
///
/// There is no dedicated negation node in the expression tree. A `-`
/// which cannot be read as a binary operator instead marks the next
/// literal to be finalized as negative.
#[derive(Debug, Clone, Default)]
pub struct LiteralBuffer {
  text: String,
  span: Option<Span>,
  negative: bool,
}

impl LiteralBuffer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Whether `c` belongs inside a numeric literal: an ASCII digit or
  /// one of the two equivalent fractional separators `.` and `,`.
  pub fn accepts(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ','
  }

  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }

  pub fn is_negative(&self) -> bool {
    self.negative
  }

  pub fn as_str(&self) -> &str {
    &self.text
  }

  pub fn push(&mut self, c: char, pos: SourceOffset) {
    self.text.push(c);
    match &mut self.span {
      Some(span) => span.extend_to(pos),
      None => self.span = Some(Span::single(pos)),
    }
  }

  pub fn mark_negative(&mut self) {
    self.negative = true;
  }

  /// Converts the accumulated text into a number, applying the
  /// pending minus sign. Returns `Ok(None)` if no text has been
  /// accumulated, in which case the pending minus sign is kept for
  /// the next literal.
  ///
  /// Whenever there was text to convert, the buffer and the minus
  /// sign are reset, even if the conversion fails.
  pub fn take(&mut self) -> Result<Option<f64>, ParseError> {
    if self.text.is_empty() {
      return Ok(None);
    }
    let text = mem::take(&mut self.text);
    let span = self.span.take().unwrap_or_else(|| Span::single(SourceOffset(0)));
    let negative = mem::take(&mut self.negative);
    let value = parse_literal(&text).ok_or(ParseError::MalformedLiteral { text, span })?;
    Ok(Some(if negative { -value } else { value }))
  }
}

/// Parses a decimal literal in which `,` and `.` both act as the
/// fractional separator. At most one separator is permitted, and at
/// least one digit is required.
fn parse_literal(text: &str) -> Option<f64> {
  static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+[.,]?[0-9]*|[.,][0-9]+)$").unwrap());
  if !RE.is_match(text) {
    return None;
  }
  f64::from_str(&text.replace(',', ".")).ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn buffer_of(text: &str) -> LiteralBuffer {
    let mut buffer = LiteralBuffer::new();
    for (i, c) in text.chars().enumerate() {
      buffer.push(c, SourceOffset(i));
    }
    buffer
  }

  #[test]
  fn test_accepts() {
    for c in "0123456789.,".chars() {
      assert!(LiteralBuffer::accepts(c));
    }
    for c in "+-*/^() &xe".chars() {
      assert!(!LiteralBuffer::accepts(c));
    }
  }

  #[test]
  fn test_parse_literal() {
    assert_eq!(parse_literal("17"), Some(17.0));
    assert_eq!(parse_literal("2.5"), Some(2.5));
    assert_eq!(parse_literal("2,5"), Some(2.5));
    assert_eq!(parse_literal(".5"), Some(0.5));
    assert_eq!(parse_literal(",5"), Some(0.5));
    assert_eq!(parse_literal("3."), Some(3.0));
    assert_eq!(parse_literal("007"), Some(7.0));
  }

  #[test]
  fn test_parse_literal_malformed() {
    assert_eq!(parse_literal("."), None);
    assert_eq!(parse_literal(","), None);
    assert_eq!(parse_literal(".."), None);
    assert_eq!(parse_literal(",,"), None);
    assert_eq!(parse_literal("1.2.3"), None);
    assert_eq!(parse_literal("1,2.3"), None);
    assert_eq!(parse_literal(""), None);
  }

  #[test]
  fn test_take_empty() {
    let mut buffer = LiteralBuffer::new();
    assert_eq!(buffer.take(), Ok(None));
  }

  #[test]
  fn test_take_resets() {
    let mut buffer = buffer_of("42");
    assert_eq!(buffer.as_str(), "42");
    assert_eq!(buffer.take(), Ok(Some(42.0)));
    assert!(buffer.is_empty());
    assert_eq!(buffer.take(), Ok(None));
  }

  #[test]
  fn test_take_negative() {
    let mut buffer = LiteralBuffer::new();
    buffer.mark_negative();
    // Nothing to finalize yet, so the sign survives.
    assert_eq!(buffer.take(), Ok(None));
    assert!(buffer.is_negative());
    buffer.push('5', SourceOffset(1));
    assert_eq!(buffer.take(), Ok(Some(-5.0)));
    assert!(!buffer.is_negative());
  }

  #[test]
  fn test_take_malformed() {
    let mut buffer = LiteralBuffer::new();
    buffer.mark_negative();
    buffer.push('.', SourceOffset(4));
    buffer.push('.', SourceOffset(5));
    assert_eq!(
      buffer.take(),
      Err(ParseError::MalformedLiteral {
        text: String::from(".."),
        span: Span::new(SourceOffset(4), SourceOffset(6)),
      }),
    );
    assert!(buffer.is_empty());
    assert!(!buffer.is_negative());
  }
}
