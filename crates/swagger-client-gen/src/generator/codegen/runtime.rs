use std::fmt;

use proc_macro2::TokenStream;
use quote::{ToTokens, TokenStreamExt};

use crate::{generator::errors::GenerateError, runtime::URI_BUILDER_SOURCE};

/// The URI template runtime, spliced into the generated module once.
#[derive(Clone)]
pub(crate) struct RuntimeFragment {
  items: Vec<syn::Item>,
}

impl RuntimeFragment {
  pub(crate) fn load() -> Result<Self, GenerateError> {
    let file = syn::parse_file(URI_BUILDER_SOURCE).map_err(GenerateError::RuntimeSource)?;
    Ok(Self { items: file.items })
  }
}

impl fmt::Debug for RuntimeFragment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RuntimeFragment").field("items", &self.items.len()).finish()
  }
}

impl ToTokens for RuntimeFragment {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    tokens.append_all(&self.items);
  }
}
