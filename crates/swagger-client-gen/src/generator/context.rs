use clap::ValueEnum;
use indexmap::IndexMap;
use strum::Display;

use crate::description::ModelDefinition;

/// How generated methods decode response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum DecodePolicy {
  /// Always decode JSON; the response content type is not inspected.
  #[default]
  Json,
  /// Branch on the response `Content-Type`: JSON, XML, or an unsupported-content-type error.
  JsonXml,
}

/// How the `Accept` header is derived from an operation's `consumes` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum AcceptPolicy {
  /// All declared MIME types joined with `,`.
  #[default]
  Joined,
  /// Only the first declared MIME type.
  First,
}

/// What happens when a path template placeholder has no matching path parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum PathParamMode {
  /// Record a warning; the runtime substitutes an empty segment.
  #[default]
  Lenient,
  /// Fail the generation run.
  Strict,
}

#[derive(Debug, Clone, bon::Builder)]
pub struct GenerateOptions {
  /// Name of the module wrapping the generated client.
  #[builder(into, default = String::from("client"))]
  pub package: String,
  #[builder(default)]
  pub decode_policy: DecodePolicy,
  #[builder(default)]
  pub accept_policy: AcceptPolicy,
  #[builder(default)]
  pub path_param_mode: PathParamMode,
}

impl Default for GenerateOptions {
  fn default() -> Self {
    Self::builder().build()
  }
}

/// Model definitions collected across all declarations, keyed by model id.
///
/// Iteration follows the order in which ids were first registered. A later
/// definition for an existing id replaces the earlier one in place.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
  models: IndexMap<String, ModelDefinition>,
}

impl ModelRegistry {
  /// Registers `model`, returning the definition it replaced.
  ///
  /// `key` is the declaration's map key and is used when the model has no `id`.
  pub fn register(&mut self, key: &str, model: ModelDefinition) -> Option<ModelDefinition> {
    let id = if model.id.is_empty() {
      key.to_string()
    } else {
      model.id.clone()
    };
    self.models.insert(id, model)
  }

  #[must_use]
  pub fn get(&self, id: &str) -> Option<&ModelDefinition> {
    self.models.get(id)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelDefinition)> {
    self.models.iter().map(|(id, model)| (id.as_str(), model))
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.models.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.models.is_empty()
  }
}

/// State threaded through one generation run.
#[derive(Debug, Clone)]
pub struct GenerationContext {
  pub options: GenerateOptions,
  pub source_url: String,
  pub models: ModelRegistry,
  pub warnings: Vec<String>,
}

impl GenerationContext {
  #[must_use]
  pub fn new(options: GenerateOptions, source_url: impl Into<String>) -> Self {
    Self {
      options,
      source_url: source_url.into(),
      models: ModelRegistry::default(),
      warnings: Vec::new(),
    }
  }
}
