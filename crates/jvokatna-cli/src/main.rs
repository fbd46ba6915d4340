//! jvokatna-cli entry point

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jvokatna_cli::config::Config;
use jvokatna_cli::pipeline;

fn main() {
  // Logging initialization
  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).init();

  if let Err(err) = run() {
    tracing::error!(code = err.code(), "{err}");
    std::process::exit(err.exit_code());
  }
}

fn run() -> jvokatna_cli::errors::Result<()> {
  // Configuration loading
  let config = Config::from_env()?;
  tracing::info!(
    lexicon = %config.lexicon_path.display(),
    input = %config.input_path.display(),
    output = %config.output_path.display(),
    format = ?config.format,
    "configuration loaded"
  );

  // Pipeline execution
  pipeline::run(&config)
}
