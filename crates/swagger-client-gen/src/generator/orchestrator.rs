//! Orchestration of the fetch and emit pipeline.
//!
//! ```no_run
//! use swagger_client_gen::{
//!   fetcher::HttpSource,
//!   generator::{GenerateOptions, Orchestrator},
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let options = GenerateOptions::builder().package("users").build();
//! let orchestrator = Orchestrator::new(HttpSource::new()?, options);
//! let (code, stats) = orchestrator.generate("http://localhost:8080/apidocs.json").await?;
//!
//! println!("Generated {} methods with {} warnings", stats.operations_generated, stats.warnings.len());
//! std::fs::write("service.rs", code)?;
//! # Ok(())
//! # }
//! ```

use anyhow::Context;

use super::{codegen::CodeEmitter, context::GenerateOptions};
use crate::fetcher::{DescriptionFetcher, DocumentSource, FetchedDescription};

/// Statistics about one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationStats {
  /// Number of API declarations fetched after the listing
  pub apis_fetched: usize,
  /// Number of client methods emitted
  pub operations_generated: usize,
  /// Number of model structs emitted
  pub models_generated: usize,
  /// Number of model definitions replaced by a later declaration
  pub models_replaced: usize,
  /// Non-fatal warnings, such as unbound path placeholders in lenient mode
  pub warnings: Vec<String>,
}

/// One operation of the description, as shown by `--list-operations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSummary {
  pub nickname: String,
  pub method: String,
  pub path: String,
  pub summary: Option<String>,
}

pub struct Orchestrator<S> {
  fetcher: DescriptionFetcher<S>,
  options: GenerateOptions,
}

impl<S: DocumentSource> Orchestrator<S> {
  pub fn new(source: S, options: GenerateOptions) -> Self {
    Self {
      fetcher: DescriptionFetcher::new(source),
      options,
    }
  }

  /// Fetches the description at `url` and generates the client source.
  ///
  /// Any fetch failure aborts the run before code is emitted.
  pub async fn generate(&self, url: &str) -> anyhow::Result<(String, GenerationStats)> {
    let description = self.fetch(url).await?;
    self.emit(&description)
  }

  /// Generates the client source for a description returned by [`Orchestrator::fetch`].
  pub fn emit(&self, description: &FetchedDescription) -> anyhow::Result<(String, GenerationStats)> {
    generate_from_description(description, &self.options)
  }

  /// Fetches the description at `url` and lists its operations in emission order.
  pub async fn list_operations(&self, url: &str) -> anyhow::Result<Vec<OperationSummary>> {
    let description = self.fetch(url).await?;

    let operations = description
      .declarations
      .iter()
      .flat_map(|fetched| &fetched.declaration.apis)
      .flat_map(|api| {
        api.operations.iter().map(|operation| OperationSummary {
          nickname: operation.nickname.clone(),
          method: operation.http_method.to_ascii_uppercase(),
          path: api.path.clone(),
          summary: operation.summary.clone(),
        })
      })
      .collect();
    Ok(operations)
  }

  /// Fetches the listing at `url` and every declaration it references.
  pub async fn fetch(&self, url: &str) -> anyhow::Result<FetchedDescription> {
    self
      .fetcher
      .fetch_description(url)
      .await
      .with_context(|| format!("failed to fetch the API description from {url}"))
  }
}

/// Generates the client source for an already fetched description.
pub fn generate_from_description(
  description: &FetchedDescription,
  options: &GenerateOptions,
) -> anyhow::Result<(String, GenerationStats)> {
  let emitted = CodeEmitter::new(options.clone(), description.url.as_str())
    .emit(description)
    .context("failed to generate the client")?;

  let stats = GenerationStats {
    apis_fetched: description.declarations.len(),
    operations_generated: emitted.operations,
    models_generated: emitted.models,
    models_replaced: emitted.models_replaced,
    warnings: emitted.warnings,
  };
  Ok((emitted.code, stats))
}
