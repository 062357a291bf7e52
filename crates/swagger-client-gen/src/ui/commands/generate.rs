use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  fetcher::{DocumentSource, HttpSource},
  generator::{AcceptPolicy, DecodePolicy, GenerateOptions, GenerationStats, Orchestrator, PathParamMode},
  ui::{Cli, Colors},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

/// Default output location: `service.rs` in the system temp directory.
#[must_use]
pub fn default_output_path() -> PathBuf {
  std::env::temp_dir().join("service.rs")
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub url: String,
  pub package: String,
  pub output: PathBuf,
  pub decode_policy: DecodePolicy,
  pub accept_policy: AcceptPolicy,
  pub path_param_mode: PathParamMode,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_cli(cli: Cli) -> Self {
    let Cli {
      url,
      package,
      output,
      decode,
      accept,
      strict_path_params,
      verbose,
      quiet,
      ..
    } = cli;

    Self {
      url,
      package,
      output: output.unwrap_or_else(default_output_path),
      decode_policy: decode,
      accept_policy: accept,
      path_param_mode: if strict_path_params {
        PathParamMode::Strict
      } else {
        PathParamMode::Lenient
      },
      verbose,
      quiet,
    }
  }

  pub fn options(&self) -> GenerateOptions {
    GenerateOptions::builder()
      .package(self.package.as_str())
      .decode_policy(self.decode_policy)
      .accept_policy(self.accept_policy)
      .path_param_mode(self.path_param_mode)
      .build()
  }

  async fn write_output(&self, code: String) -> anyhow::Result<()> {
    if let Some(parent) = self.output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&self.output, code)
      .await
      .with_context(|| format!("failed to write {}", self.output.display()))
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_fetching(&self) {
    self.info(
      &format!("Fetching Swagger description from: {}", self.config.url)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(
      &format!("Generating Rust client module `{}`...", self.config.package)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("APIs fetched:", stats.apis_fetched.to_string());
    self.stat("Methods generated:", stats.operations_generated.to_string());
    self.stat("Models generated:", stats.models_generated.to_string());
    if stats.models_replaced > 0 {
      self.stat("", format!("{} redefined by a later API", stats.models_replaced));
    }
    if self.config.verbose {
      self.stat("Decode policy:", self.config.decode_policy.to_string());
      self.stat("Accept policy:", self.config.accept_policy.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || self.config.quiet {
      return;
    }

    println!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        warning.as_str().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated Rust client".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  generate_with_source(&config, HttpSource::new()?, colors).await
}

/// Runs generation against any document source. The output file is written
/// only after the whole description was fetched and emitted.
pub async fn generate_with_source<S: DocumentSource>(
  config: &GenerateConfig,
  source: S,
  colors: &Colors,
) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(config, colors);
  let orchestrator = Orchestrator::new(source, config.options());

  logger.log_fetching();
  let description = orchestrator.fetch(&config.url).await?;

  logger.log_generating();
  let (code, stats) = orchestrator.emit(&description)?;
  logger.print_statistics(&stats);

  logger.log_writing();
  config.write_output(code).await?;

  logger.log_success();
  Ok(())
}
