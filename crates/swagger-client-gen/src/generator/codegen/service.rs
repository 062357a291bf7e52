use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// The `ClientError` type returned by every generated method.
///
/// `Display` and `Error` are written out so the client needs no error crate.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ClientErrorFragment {
  pub(crate) content_negotiation: bool,
}

impl ToTokens for ClientErrorFragment {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let (variant, display) = if self.content_negotiation {
      (
        quote! {
          /// The response carried a content type the client cannot decode.
          UnsupportedContentType(String),
        },
        quote! {
          Self::UnsupportedContentType(content_type) => write!(f, "unsupported content type `{content_type}`"),
        },
      )
    } else {
      (TokenStream::new(), TokenStream::new())
    };

    tokens.extend(quote! {
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
        #variant
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
            #display
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
    });
  }
}

/// The `Service` handle holding the transport and the target endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ServiceFragment;

impl ToTokens for ServiceFragment {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    tokens.extend(quote! {
      /// Client for the described service. Every method performs one blocking request.
      #[derive(Debug, Clone)]
      pub struct Service {
        client: reqwest::blocking::Client,
        scheme: String,
        host: String,
        port: u16,
      }

      impl Service {
        pub fn new(client: reqwest::blocking::Client, scheme: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
          Self {
            client,
            scheme: scheme.into(),
            host: host.into(),
            port,
          }
        }
      }
    });
  }
}
