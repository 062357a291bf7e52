use std::{collections::HashMap, fmt};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unescaped in path values and query components (RFC 3986 unreserved set).
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Returned by [`UriBuilder::try_build`] when a template placeholder has no bound value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnboundPathParameter(pub String);

impl fmt::Display for UnboundPathParameter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "path parameter `{}` is not bound", self.0)
  }
}

impl std::error::Error for UnboundPathParameter {}

/// Builds a request URI from a slash-delimited path template and bound parameters.
///
/// Segments wrapped in `{` and `}` are replaced by the value bound with
/// [`UriBuilder::path_param`]. Query parameters keep their append order and a
/// key may be appended more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriBuilder {
  scheme: String,
  host: String,
  port: u16,
  template: String,
  path_parameters: HashMap<String, String>,
  query_parameters: Vec<(String, String)>,
}

impl UriBuilder {
  #[must_use]
  pub fn new(scheme: impl Into<String>, host: impl Into<String>, port: u16, template: impl Into<String>) -> Self {
    Self {
      scheme: scheme.into(),
      host: host.into(),
      port,
      template: template.into(),
      path_parameters: HashMap::new(),
      query_parameters: Vec::new(),
    }
  }

  /// Binds the value substituted for the `{name}` segment, replacing any earlier value.
  pub fn path_param(&mut self, name: impl Into<String>, value: impl fmt::Display) -> &mut Self {
    self.path_parameters.insert(name.into(), value.to_string());
    self
  }

  /// Appends one `name=value` pair to the query string.
  pub fn query_param(&mut self, name: impl Into<String>, value: impl fmt::Display) -> &mut Self {
    self.query_parameters.push((name.into(), value.to_string()));
    self
  }

  /// Renders the URI. Placeholders without a bound value render as an empty segment.
  #[must_use]
  pub fn build(&self) -> String {
    let mut uri = format!("{}://{}:{}", self.scheme, self.host, self.port);

    for segment in self.segments() {
      uri.push('/');
      match placeholder_name(segment) {
        Some(name) => {
          // Values are percent-encoded, never spliced raw: a `/` or `?` in a
          // value must not change the path structure.
          if let Some(value) = self.path_parameters.get(name) {
            uri.push_str(&encode_component(value));
          }
        }
        None => uri.push_str(segment),
      }
    }

    if !self.query_parameters.is_empty() {
      let pairs = self
        .query_parameters
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>();
      uri.push('?');
      uri.push_str(&pairs.join("&"));
    }

    uri
  }

  /// Renders the URI, failing on the first placeholder that has no bound value.
  pub fn try_build(&self) -> Result<String, UnboundPathParameter> {
    if let Some(name) = self
      .segments()
      .filter_map(placeholder_name)
      .find(|name| !self.path_parameters.contains_key(*name))
    {
      return Err(UnboundPathParameter(name.to_string()));
    }
    Ok(self.build())
  }

  fn segments(&self) -> impl Iterator<Item = &str> {
    self.template.split('/').filter(|segment| !segment.is_empty())
  }
}

fn placeholder_name(segment: &str) -> Option<&str> {
  segment.strip_prefix('{').and_then(|rest| rest.strip_suffix('}'))
}

fn encode_component(value: &str) -> String {
  utf8_percent_encode(value, COMPONENT_ENCODE_SET).to_string()
}
