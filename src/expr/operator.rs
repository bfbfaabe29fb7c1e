use std::fmt::{self, Display, Formatter};

/// The five binary operators understood by the calculator.
///
/// There is no precedence or associativity attached to
/// these. The [`Parser`](crate::parsing::parser::Parser) applies
/// every operator to the whole tree built so far, so evaluation order
/// is strictly left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
  Add,
  Sub,
  Mul,
  Div,
  Pow,
}

impl BinaryOperator {
  pub const ALL: [BinaryOperator; 5] = [
    BinaryOperator::Add,
    BinaryOperator::Sub,
    BinaryOperator::Mul,
    BinaryOperator::Div,
    BinaryOperator::Pow,
  ];

  /// Looks up the operator denoted by the given character, if any.
  pub fn from_char(c: char) -> Option<BinaryOperator> {
    match c {
      '+' => Some(BinaryOperator::Add),
      '-' => Some(BinaryOperator::Sub),
      '*' => Some(BinaryOperator::Mul),
      '/' => Some(BinaryOperator::Div),
      '^' => Some(BinaryOperator::Pow),
      _ => None,
    }
  }

  pub fn symbol(self) -> char {
    match self {
      BinaryOperator::Add => '+',
      BinaryOperator::Sub => '-',
      BinaryOperator::Mul => '*',
      BinaryOperator::Div => '/',
      BinaryOperator::Pow => '^',
    }
  }

  /// Applies the operator under IEEE 754 double-precision rules.
  /// Division by zero and fractional powers of negative numbers
  /// produce infinities and NaN respectively; they are never reported
  /// as errors.
  pub fn apply(self, left: f64, right: f64) -> f64 {
    match self {
      BinaryOperator::Add => left + right,
      BinaryOperator::Sub => left - right,
      BinaryOperator::Mul => left * right,
      BinaryOperator::Div => left / right,
      BinaryOperator::Pow => left.powf(right),
    }
  }
}

impl Display for BinaryOperator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_symbol_roundtrip() {
    for op in BinaryOperator::ALL {
      assert_eq!(BinaryOperator::from_char(op.symbol()), Some(op));
    }
  }

  #[test]
  fn test_from_char_rejects_other_chars() {
    assert_eq!(BinaryOperator::from_char('&'), None);
    assert_eq!(BinaryOperator::from_char('('), None);
    assert_eq!(BinaryOperator::from_char('x'), None);
    assert_eq!(BinaryOperator::from_char('%'), None);
  }

  #[test]
  fn test_apply() {
    assert_eq!(BinaryOperator::Add.apply(17.0, 4.0), 21.0);
    assert_eq!(BinaryOperator::Sub.apply(13.0, 2.0), 11.0);
    assert_eq!(BinaryOperator::Mul.apply(64.0, 2.0), 128.0);
    assert_eq!(BinaryOperator::Div.apply(24.0, 6.0), 4.0);
    assert_eq!(BinaryOperator::Pow.apply(2.0, 4.0), 16.0);
  }

  #[test]
  fn test_apply_ieee_edge_cases() {
    assert_eq!(BinaryOperator::Div.apply(1.0, 0.0), f64::INFINITY);
    assert_eq!(BinaryOperator::Div.apply(-1.0, 0.0), f64::NEG_INFINITY);
    assert!(BinaryOperator::Div.apply(0.0, 0.0).is_nan());
    assert!(BinaryOperator::Pow.apply(-8.0, 0.5).is_nan());
  }
}
