pub mod cli;
pub mod colors;
pub mod commands;

pub use cli::Cli;
pub use colors::Colors;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

fn term_width() -> u16 {
  if let Ok((width, _)) = crossterm::terminal::size() {
    width
  } else {
    80
  }
}

/// Installs the stderr diagnostics layer. `RUST_LOG` overrides the default level.
pub fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  let fmt_layer = tracing_subscriber::fmt::layer()
    .with_writer(std::io::stderr)
    .with_target(true)
    .with_filter(filter);

  if tracing_subscriber::registry().with(fmt_layer).try_init().is_err() {
    eprintln!("Warning: tracing subscriber already initialized");
  }
}
