use mediatype::MediaType;
use proc_macro2::{Ident, TokenStream};
use quote::quote;

use super::{
  context::{AcceptPolicy, DecodePolicy, GenerateOptions},
  types::TypeRef,
};

const DEFAULT_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentCategory {
  #[default]
  Json,
  Xml,
  Other,
}

impl ContentCategory {
  /// Classifies a MIME type. Unparseable values count as JSON.
  #[must_use]
  pub fn from_content_type(content_type: &str) -> Self {
    let Ok(media) = MediaType::parse(content_type.trim()) else {
      return Self::Json;
    };

    let suffix = media.suffix.as_ref().map(mediatype::Name::as_str);
    match (media.ty.as_str(), media.subty.as_str(), suffix) {
      ("text" | "application", "xml", _) | (_, _, Some("xml")) => Self::Xml,
      ("application", "json", _) | (_, _, Some("json")) => Self::Json,
      _ => Self::Other,
    }
  }
}

/// Decides the negotiation headers, body encoding and response decoding of generated methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentNegotiator {
  decode_policy: DecodePolicy,
  accept_policy: AcceptPolicy,
}

impl ContentNegotiator {
  #[must_use]
  pub fn new(options: &GenerateOptions) -> Self {
    Self {
      decode_policy: options.decode_policy,
      accept_policy: options.accept_policy,
    }
  }

  /// The `Accept` header value. An empty list gives an empty value.
  #[must_use]
  pub fn accept_value(&self, consumes: &[String]) -> String {
    match self.accept_policy {
      AcceptPolicy::Joined => consumes.join(","),
      AcceptPolicy::First => consumes.first().cloned().unwrap_or_default(),
    }
  }

  /// The `Content-Type` sent with a request body.
  #[must_use]
  pub fn content_type<'a>(&self, consumes: &'a [String]) -> &'a str {
    consumes.first().map_or(DEFAULT_CONTENT_TYPE, String::as_str)
  }

  /// Statements attaching `body` to `request` with its content type.
  #[must_use]
  pub fn body_tokens(&self, body: &Ident, body_type: &TypeRef, consumes: &[String]) -> TokenStream {
    let content_type = self.content_type(consumes);
    let encoded = match (body_type, self.body_category(content_type)) {
      (TypeRef::Bytes, _) => quote! { #body },
      (_, ContentCategory::Xml) => quote! { quick_xml::se::to_string(&#body).map_err(ClientError::encode)? },
      _ => quote! { serde_json::to_vec(&#body).map_err(ClientError::encode)? },
    };

    quote! {
      let request = request
        .header(reqwest::header::CONTENT_TYPE, #content_type)
        .body(#encoded);
    }
  }

  fn body_category(&self, content_type: &str) -> ContentCategory {
    match self.decode_policy {
      DecodePolicy::Json => ContentCategory::Json,
      DecodePolicy::JsonXml => ContentCategory::from_content_type(content_type),
    }
  }

  /// Statements turning `response` into the method's return value.
  #[must_use]
  pub fn decode_tokens(&self, return_type: &TypeRef) -> TokenStream {
    match self.decode_policy {
      DecodePolicy::Json => quote! {
        let bytes = response.bytes()?;
        let model = serde_json::from_slice::<#return_type>(&bytes).map_err(ClientError::decode)?;
        Ok(model)
      },
      DecodePolicy::JsonXml => quote! {
        let content_type = response
          .headers()
          .get(reqwest::header::CONTENT_TYPE)
          .and_then(|value| value.to_str().ok())
          .unwrap_or_default()
          .to_string();
        let bytes = response.bytes()?;
        let essence = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        match essence.as_str() {
          "application/json" => serde_json::from_slice::<#return_type>(&bytes).map_err(ClientError::decode),
          "application/xml" => quick_xml::de::from_reader::<_, #return_type>(bytes.as_ref()).map_err(ClientError::decode),
          _ => Err(ClientError::UnsupportedContentType(content_type)),
        }
      },
    }
  }

  #[must_use]
  pub const fn decode_policy(&self) -> DecodePolicy {
    self.decode_policy
  }
}
