use crate::generator::context::{DecodePolicy, GenerateOptions};

const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");

/// Descriptive metadata rendered as `//!` lines above the generated module.
#[derive(Debug, Clone)]
pub(crate) struct FileHeader<'a> {
  pub(crate) options: &'a GenerateOptions,
  pub(crate) source_url: &'a str,
  pub(crate) title: Option<&'a str>,
  pub(crate) description: Option<&'a str>,
  pub(crate) api_version: Option<&'a str>,
  pub(crate) swagger_version: Option<&'a str>,
}

impl FileHeader<'_> {
  pub(crate) fn render(&self) -> String {
    let title = self.title.map_or_else(|| String::from("Swagger 1.2 client"), doc_lines);
    let description = self
      .description
      .map(|description| format!("//!\n//! {}\n", doc_lines(description)))
      .unwrap_or_default();

    let mut requires = vec![
      "reqwest (blocking)",
      "serde (derive)",
      "serde_json",
      "percent-encoding",
    ];
    if self.options.decode_policy == DecodePolicy::JsonXml {
      requires.push("quick-xml (serialize)");
    }

    format!(
      r"//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! {title}
//! Package: {package}
//! Source: {source}
//! API version: {api_version}
//! Swagger version: {swagger_version}
//! Generated by `{GENERATOR_NAME}`
{description}//!
//! Decode policy: {decode}
//! Accept policy: {accept}
//! Path parameters: {path_params}
//! Requires: {requires}
",
      package = self.options.package,
      source = self.source_url,
      api_version = self.api_version.unwrap_or("unspecified"),
      swagger_version = self.swagger_version.unwrap_or("unspecified"),
      decode = self.options.decode_policy,
      accept = self.options.accept_policy,
      path_params = self.options.path_param_mode,
      requires = requires.join(", "),
    )
  }
}

fn doc_lines(text: &str) -> String {
  text.trim().replace('\n', "\n//! ")
}
