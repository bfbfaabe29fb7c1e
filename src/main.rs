use charcalc::runner::{self, RunnerOptions};

use tracing_subscriber::EnvFilter;

use std::io;

fn main() -> anyhow::Result<()> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();

  let stdin = io::stdin();
  runner::run(stdin.lock(), io::stdout(), &RunnerOptions::default())
}
