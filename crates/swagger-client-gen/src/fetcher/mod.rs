//! Retrieval and decoding of description documents.
//!
//! Every document is fetched to completion before the next one is requested.
//! There is no retry and no timeout: a hanging server blocks generation.

use std::future::Future;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use crate::description::{ApiDeclaration, ApiReference, ResourceListing};


#[derive(Debug, thiserror::Error)]
pub enum FetchError {
  #[error("unable to create HTTP client: {0}")]
  Client(#[source] reqwest::Error),

  #[error("unable to fetch description from {url}: {source}")]
  Transport {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("no description document at {url}")]
  NotFound { url: String },

  #[error("unable to decode description from {url}: {source}")]
  Decode {
    url: String,
    #[source]
    source: serde_path_to_error::Error<serde_json::Error>,
  },
}

/// Transport that returns the raw body of a description document.
pub trait DocumentSource {
  fn retrieve(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Fetches documents with a plain HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
  client: reqwest::Client,
}

impl HttpSource {
  pub fn new() -> Result<Self, FetchError> {
    let client = reqwest::Client::builder().build().map_err(FetchError::Client)?;
    Ok(Self { client })
  }

  #[must_use]
  pub fn with_client(client: reqwest::Client) -> Self {
    Self { client }
  }
}

impl DocumentSource for HttpSource {
  async fn retrieve(&self, url: &str) -> Result<Vec<u8>, FetchError> {
    tracing::debug!(url, "fetching description document");

    let transport = |source| FetchError::Transport {
      url: url.to_string(),
      source,
    };
    let response = self
      .client
      .get(url)
      .send()
      .await
      .and_then(reqwest::Response::error_for_status)
      .map_err(transport)?;
    let body = response.bytes().await.map_err(transport)?;

    tracing::debug!(url, bytes = body.len(), "fetched description document");
    Ok(body.to_vec())
  }
}

/// Serves documents from memory, keyed by their full URL.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
  documents: IndexMap<String, Vec<u8>>,
}

impl StaticSource {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn with_document(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
    self.documents.insert(url.into(), body.into());
    self
  }
}

impl DocumentSource for StaticSource {
  async fn retrieve(&self, url: &str) -> Result<Vec<u8>, FetchError> {
    tracing::debug!(url, "reading in-memory description document");
    self
      .documents
      .get(url)
      .cloned()
      .ok_or_else(|| FetchError::NotFound { url: url.to_string() })
  }
}

/// One API declaration together with the listing entry it was fetched for.
#[derive(Debug, Clone)]
pub struct FetchedDeclaration {
  pub reference: ApiReference,
  pub url: String,
  pub declaration: ApiDeclaration,
}

/// A resource listing and all of its declarations, in listing order.
#[derive(Debug, Clone)]
pub struct FetchedDescription {
  pub url: String,
  pub listing: ResourceListing,
  pub declarations: Vec<FetchedDeclaration>,
}

#[derive(Debug, Clone)]
pub struct DescriptionFetcher<S> {
  source: S,
}

impl<S: DocumentSource> DescriptionFetcher<S> {
  pub fn new(source: S) -> Self {
    Self { source }
  }

  /// Retrieves `url` and decodes it into `T`.
  pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
    let body = self.source.retrieve(url).await?;
    decode(url, &body)
  }

  /// Fetches the listing at `base_url`, then each declaration at `base_url` + API path.
  pub async fn fetch_description(&self, base_url: &str) -> Result<FetchedDescription, FetchError> {
    let listing: ResourceListing = self.fetch(base_url).await?;

    let mut declarations = Vec::with_capacity(listing.apis.len());
    for reference in &listing.apis {
      let url = format!("{base_url}{}", reference.path);
      let declaration: ApiDeclaration = self.fetch(&url).await?;
      declarations.push(FetchedDeclaration {
        reference: reference.clone(),
        url,
        declaration,
      });
    }

    Ok(FetchedDescription {
      url: base_url.to_string(),
      listing,
      declarations,
    })
  }
}

fn decode<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T, FetchError> {
  let deserializer = &mut serde_json::Deserializer::from_slice(body);
  serde_path_to_error::deserialize(deserializer).map_err(|source| FetchError::Decode {
    url: url.to_string(),
    source,
  })
}
