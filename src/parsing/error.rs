use super::source::{SourceOffset, Span};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
  #[error("Unexpected character ({ch}) found at position {position}")]
  UnexpectedCharacter {
    ch: char,
    position: SourceOffset,
  },
  #[error("Malformed number \"{text}\" at {span}")]
  MalformedLiteral {
    text: String,
    span: Span,
  },
  #[error("Expected ')' to close {depth} open group(s)")]
  UnclosedParenthesis {
    depth: usize,
  },
  #[error("Parser already finished")]
  AlreadyFinished,
}

impl ParseError {
  /// The offending character, for errors that are caused by one.
  pub fn unexpected_char(&self) -> Option<char> {
    match self {
      ParseError::UnexpectedCharacter { ch, .. } => Some(*ch),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_messages() {
    let err = ParseError::UnexpectedCharacter { ch: '&', position: SourceOffset(1) };
    assert_eq!(err.to_string(), "Unexpected character (&) found at position 1");
    assert_eq!(err.unexpected_char(), Some('&'));

    let err = ParseError::MalformedLiteral {
      text: String::from(".."),
      span: Span::new(SourceOffset(0), SourceOffset(2)),
    };
    assert_eq!(err.to_string(), "Malformed number \"..\" at 0-2");
    assert_eq!(err.unexpected_char(), None);

    assert_eq!(
      ParseError::UnclosedParenthesis { depth: 3 }.to_string(),
      "Expected ')' to close 3 open group(s)",
    );
  }
}
