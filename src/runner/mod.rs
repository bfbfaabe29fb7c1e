//! The interactive loop: read one expression per line, parse it with
//! a fresh [`Parser`], and print the tree and its value.

use crate::expr::ExprNode;
use crate::parsing::parser::Parser;

use anyhow::Context;
use tracing::debug;

use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerOptions {
  /// Printed before each line of input is read.
  pub prompt: String,
  /// Whether to print the parenthesized tree before the result.
  pub show_tree: bool,
}

impl Default for RunnerOptions {
  fn default() -> Self {
    Self {
      prompt: String::from("Enter expression: "),
      show_tree: true,
    }
  }
}

/// Runs until `input` is exhausted. Parse and evaluation failures are
/// reported on `output` and do not stop the loop; only I/O failures
/// do.
pub fn run<R, W>(mut input: R, mut output: W, opts: &RunnerOptions) -> anyhow::Result<()>
where R: BufRead,
      W: Write {
  let mut line = String::new();
  loop {
    write!(output, "{}", opts.prompt)?;
    output.flush()?;
    line.clear();
    let bytes_read = input.read_line(&mut line).context("failed to read expression")?;
    if bytes_read == 0 {
      break;
    }
    let expression = line.trim_end_matches(|c| c == '\n' || c == '\r');
    run_line(&mut output, expression, opts).context("failed to write result")?;
  }
  Ok(())
}

fn run_line<W: Write>(output: &mut W, line: &str, opts: &RunnerOptions) -> io::Result<()> {
  let parser = match Parser::parse(line) {
    Ok(parser) => parser,
    Err(err) => {
      debug!(%err, "parse failed");
      return writeln!(output, "{err}");
    }
  };
  if opts.show_tree {
    match parser.root() {
      Some(root) => writeln!(output, "Parsed: {root}")?,
      None => writeln!(output, "Parsed: (empty)")?,
    }
  }
  match parser.result() {
    Ok(Some(value)) => writeln!(output, "Result: {}", ExprNode::literal(value)),
    Ok(None) => writeln!(output, "Result: (none)"),
    Err(err) => writeln!(output, "{err}"),
  }
}
