//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! User Service
//! Package: users
//! Source: http://localhost:8080/apidocs.json
//! API version: 1.0
//! Swagger version: 1.2
//! Generated by `swagger-client-gen`
//!
//! Manages users
//!
//! Decode policy: json-xml
//! Accept policy: joined
//! Path parameters: lenient
//! Requires: reqwest (blocking), serde (derive), serde_json, percent-encoding, quick-xml (serialize)

#[allow(dead_code, non_snake_case, unused_mut, unused_variables, clippy::all)]
pub mod users {
    use serde::{Deserialize, Serialize};
    #[derive(Debug)]
    pub enum ClientError {
        /// The request could not be sent or the response body could not be read.
        Transport(reqwest::Error),
        /// The server answered with a status other than `200 OK`.
        Status(String),
        /// The request body could not be serialized.
        Encode(Box<dyn std::error::Error + Send + Sync>),
        /// The response body could not be decoded into the expected model.
        Decode(Box<dyn std::error::Error + Send + Sync>),
        /// The response carried a content type the client cannot decode.
        UnsupportedContentType(String),
            /// The operation's HTTP method is not a valid method token.
        InvalidMethod(String),
    }
    impl ClientError {
        fn encode(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
            Self::Encode(err.into())
        }
        fn decode(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
            Self::Decode(err.into())
        }
        /// Status code followed by its reason phrase, or the bare code when none is registered.
        fn status(status: reqwest::StatusCode) -> Self {
            match status.canonical_reason() {
                Some(reason) => Self::Status(format!("{} {reason}", status.as_u16())),
                None => Self::Status(status.as_u16().to_string()),
            }
        }
    }
    impl std::fmt::Display for ClientError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::Transport(err) => write!(f, "transport error: {err}"),
                Self::Status(status) => write!(f, "unexpected status: {status}"),
                Self::Encode(err) => write!(f, "unable to encode request body: {err}"),
                Self::Decode(err) => write!(f, "unable to decode response body: {err}"),
                Self::UnsupportedContentType(content_type) => {
                    write!(f, "unsupported content type `{content_type}`")
                }
                Self::InvalidMethod(method) => write!(f, "invalid HTTP method `{method}`"),
            }
        }
    }
    impl std::error::Error for ClientError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                Self::Transport(err) => Some(err),
                Self::Encode(err) | Self::Decode(err) => Some(err.as_ref()),
                _ => None,
            }
        }
    }
    impl From<reqwest::Error> for ClientError {
        fn from(err: reqwest::Error) -> Self {
            Self::Transport(err)
        }
    }
    /// Client for the described service. Every method performs one blocking request.
    #[derive(Debug, Clone)]
    pub struct Service {
        client: reqwest::blocking::Client,
        scheme: String,
        host: String,
        port: u16,
    }
    impl Service {
        pub fn new(
            client: reqwest::blocking::Client,
            scheme: impl Into<String>,
            host: impl Into<String>,
            port: u16,
        ) -> Self {
            Self {
                client,
                scheme: scheme.into(),
                host: host.into(),
                port,
            }
        }
    }
    impl Service {
        /// get a user
        /// GET /users/{user-id}
        pub fn findUser(&self, user_id: String) -> Result<User, ClientError> {
            let mut uri = UriBuilder::new(
                &self.scheme,
                &self.host,
                self.port,
                "/users/{user-id}",
            );
            uri.path_param("user-id", &user_id);
            let request = self.client.get(uri.build());
            let request = request.header(reqwest::header::ACCEPT, "application/json");
            let response = request.send()?;
            if response.status() != reqwest::StatusCode::OK {
                return Err(ClientError::status(response.status()));
            }
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let bytes = response.bytes()?;
            let essence = content_type
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase();
            match essence.as_str() {
                "application/json" => {
                    serde_json::from_slice::<User>(&bytes).map_err(ClientError::decode)
                }
                "application/xml" => {
                    quick_xml::de::from_reader::<_, User>(bytes.as_ref())
                        .map_err(ClientError::decode)
                }
                _ => Err(ClientError::UnsupportedContentType(content_type)),
            }
        }
        /// DELETE /users/{user-id}
        pub fn removeUser(&self, user_id: String) -> Result<(), ClientError> {
            let mut uri = UriBuilder::new(
                &self.scheme,
                &self.host,
                self.port,
                "/users/{user-id}",
            );
            uri.path_param("user-id", &user_id);
            let request = self.client.delete(uri.build());
            let request = request
                .header(reqwest::header::ACCEPT, "application/json,application/xml");
            let response = request.send()?;
            if response.status() != reqwest::StatusCode::OK {
                return Err(ClientError::status(response.status()));
            }
            Ok(())
        }
        /// PUT /users
        pub fn createUser(&self, body: User) -> Result<(), ClientError> {
            let uri = UriBuilder::new(&self.scheme, &self.host, self.port, "/users");
            let request = self.client.put(uri.build());
            let request = request.header(reqwest::header::ACCEPT, "application/json");
            let request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(&body).map_err(ClientError::encode)?);
            let response = request.send()?;
            if response.status() != reqwest::StatusCode::OK {
                return Err(ClientError::status(response.status()));
            }
            Ok(())
        }
        /// GET /users
        pub fn searchUsers(
            &self,
            tag: Vec<String>,
            limit: Option<i32>,
            x_request_id: String,
        ) -> Result<Vec<User>, ClientError> {
            let mut uri = UriBuilder::new(&self.scheme, &self.host, self.port, "/users");
            for value in &tag {
                uri.query_param("tag", value);
            }
            if let Some(value) = &limit {
                uri.query_param("limit", value);
            }
            let request = self.client.get(uri.build());
            let request = request.header(reqwest::header::ACCEPT, "");
            let request = request.header("X-Request-Id", x_request_id.to_string());
            let response = request.send()?;
            if response.status() != reqwest::StatusCode::OK {
                return Err(ClientError::status(response.status()));
            }
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let bytes = response.bytes()?;
            let essence = content_type
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase();
            match essence.as_str() {
                "application/json" => {
                    serde_json::from_slice::<Vec<User>>(&bytes).map_err(ClientError::decode)
                }
                "application/xml" => {
                    quick_xml::de::from_reader::<_, Vec<User>>(bytes.as_ref())
                        .map_err(ClientError::decode)
                }
                _ => Err(ClientError::UnsupportedContentType(content_type)),
            }
        }
    }
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct User {
        #[serde(rename = "Id")]
        pub id: String,
        /// display name
        #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
    }
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
}
