#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
  #[error("operation `{operation}`: path placeholder `{{{placeholder}}}` has no path parameter")]
  UnboundPathParameter { operation: String, placeholder: String },

  #[error("embedded URI runtime failed to parse: {0}")]
  RuntimeSource(#[source] syn::Error),

  #[error("generated client is not valid Rust: {0}")]
  InvalidOutput(#[source] syn::Error),
}
