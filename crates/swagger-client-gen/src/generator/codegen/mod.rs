//! Assembly of the generated client file.
//!
//! Each part of the output is a fragment implementing [`ToTokens`]. The
//! fragments are composed into a single module, parsed into a [`syn::File`]
//! and formatted with `prettyplease`.

use std::collections::HashSet;

use indexmap::IndexMap;
use proc_macro2::{Ident, TokenStream};
use quote::{ToTokens, quote};

use super::{
  context::{DecodePolicy, GenerateOptions, GenerationContext, PathParamMode},
  errors::GenerateError,
  negotiator::ContentNegotiator,
};
use crate::{
  description::{ApiPath, Operation, ParamType},
  fetcher::FetchedDescription,
  naming::identifiers::{ident, to_module_name},
};

mod header;
mod methods;
mod models;
mod runtime;
mod service;


use header::FileHeader;
use methods::ClientMethodFragment;
use models::ModelFragment;
use runtime::RuntimeFragment;
use service::{ClientErrorFragment, ServiceFragment};

/// The whole generated module: prelude, service, methods, models and runtime.
#[derive(Debug, Clone)]
pub(crate) struct ClientModule {
  module: Ident,
  error: ClientErrorFragment,
  service: ServiceFragment,
  methods: Vec<ClientMethodFragment>,
  models: Vec<ModelFragment>,
  runtime: RuntimeFragment,
}

impl ToTokens for ClientModule {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let module = &self.module;
    let error = &self.error;
    let service = &self.service;
    let methods = &self.methods;
    let models = &self.models;
    let runtime = &self.runtime;

    tokens.extend(quote! {
      #[allow(dead_code, non_snake_case, unused_mut, unused_variables, clippy::all)]
      pub mod #module {
        use serde::{Deserialize, Serialize};

        #error
        #service

        impl Service {
          #(#methods)*
        }

        #(#models)*

        #runtime
      }
    });
  }
}

/// The formatted client together with what went into it.
#[derive(Debug, Clone)]
pub struct EmittedClient {
  pub code: String,
  pub operations: usize,
  pub models: usize,
  pub models_replaced: usize,
  pub warnings: Vec<String>,
}

/// Turns a fetched description into client source text.
#[derive(Debug, Clone)]
pub struct CodeEmitter {
  context: GenerationContext,
  negotiator: ContentNegotiator,
}

impl CodeEmitter {
  #[must_use]
  pub fn new(options: GenerateOptions, source_url: impl Into<String>) -> Self {
    let negotiator = ContentNegotiator::new(&options);
    Self {
      context: GenerationContext::new(options, source_url),
      negotiator,
    }
  }

  /// Emits methods in listing, declaration, path and operation order, then
  /// the deduplicated models, then the URI runtime.
  pub fn emit(mut self, description: &FetchedDescription) -> Result<EmittedClient, GenerateError> {
    let mut methods = Vec::new();
    let mut method_names = HashSet::new();
    let mut models_replaced = 0;

    for fetched in &description.declarations {
      for api in &fetched.declaration.apis {
        for operation in &api.operations {
          self.check_path_parameters(api, operation)?;
          if operation.http_method.trim().is_empty() {
            self.warn(format!("operation `{}` has no HTTP method; using GET", operation.nickname));
          }

          let method = ClientMethodFragment::new(&api.path, operation, &self.negotiator);
          if !method_names.insert(method.name.clone()) {
            self.warn(format!("method `{}` is generated more than once", method.name));
          }
          methods.push(method);
        }
      }

      for (key, model) in &fetched.declaration.models {
        if self.context.models.register(key, model.clone()).is_some() {
          tracing::debug!(model = key.as_str(), url = fetched.url.as_str(), "model redefined, keeping the later definition");
          models_replaced += 1;
        }
      }
    }

    let mut models: IndexMap<String, ModelFragment> = IndexMap::with_capacity(self.context.models.len());
    for (id, model) in self.context.models.iter() {
      let fragment = ModelFragment::new(id, model);
      let name = fragment.name().to_string();
      if models.insert(name.clone(), fragment).is_some() {
        let message = format!("model `{id}` maps to an existing type `{name}`; keeping the later definition");
        tracing::warn!("{message}");
        self.context.warnings.push(message);
        models_replaced += 1;
      }
    }
    let models: Vec<ModelFragment> = models.into_values().collect();

    let operations = methods.len();
    let model_count = models.len();
    let module = ClientModule {
      module: ident(&to_module_name(&self.context.options.package)),
      error: ClientErrorFragment {
        content_negotiation: self.context.options.decode_policy == DecodePolicy::JsonXml,
      },
      service: ServiceFragment,
      methods,
      models,
      runtime: RuntimeFragment::load()?,
    };

    let syntax_tree = syn::parse2::<syn::File>(module.into_token_stream()).map_err(GenerateError::InvalidOutput)?;
    let formatted = prettyplease::unparse(&syntax_tree);

    let listing = &description.listing;
    let info = listing.info.as_ref();
    let header = FileHeader {
      options: &self.context.options,
      source_url: &self.context.source_url,
      title: info.and_then(|info| info.title.as_deref()),
      description: info.and_then(|info| info.description.as_deref()),
      api_version: listing.api_version.as_deref(),
      swagger_version: listing.swagger_version.as_deref(),
    };

    Ok(EmittedClient {
      code: format!("{}\n{formatted}", header.render()),
      operations,
      models: model_count,
      models_replaced,
      warnings: self.context.warnings,
    })
  }

  /// Checks every `{name}` placeholder of the template against the declared path parameters.
  fn check_path_parameters(&mut self, api: &ApiPath, operation: &Operation) -> Result<(), GenerateError> {
    let declared: HashSet<&str> = operation
      .parameters
      .iter()
      .filter(|parameter| parameter.param_type == ParamType::Path)
      .map(|parameter| parameter.name.as_str())
      .collect();

    let unbound = api
      .path
      .split('/')
      .filter_map(|segment| segment.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')))
      .filter(|placeholder| !declared.contains(placeholder));

    for placeholder in unbound {
      let err = GenerateError::UnboundPathParameter {
        operation: operation.nickname.clone(),
        placeholder: placeholder.to_string(),
      };
      match self.context.options.path_param_mode {
        PathParamMode::Strict => return Err(err),
        PathParamMode::Lenient => self.warn(err.to_string()),
      }
    }
    Ok(())
  }

  fn warn(&mut self, message: String) {
    tracing::warn!("{message}");
    self.context.warnings.push(message);
  }
}
