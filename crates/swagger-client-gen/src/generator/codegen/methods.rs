use proc_macro2::{Ident, Span, TokenStream};
use quote::{ToTokens, quote};

use crate::{
  description::Operation,
  generator::{
    binder::{BindingStatement, ParameterBinder, ParameterBinding},
    negotiator::ContentNegotiator,
    types::TypeRef,
  },
  naming::identifiers::{ident, to_method_name},
};

/// The expression creating the `RequestBuilder` for one HTTP method.
#[derive(Debug, Clone)]
pub(crate) struct HttpInitFragment {
  method: String,
}

impl HttpInitFragment {
  pub(crate) fn new(method: &str) -> Self {
    Self {
      method: method.trim().to_ascii_uppercase(),
    }
  }
}

impl ToTokens for HttpInitFragment {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let parsed = http::Method::from_bytes(self.method.as_bytes()).ok();

    let ts = match parsed.as_ref().map(http::Method::as_str) {
      Some("GET") => quote! { self.client.get(uri.build()) },
      Some("POST") => quote! { self.client.post(uri.build()) },
      Some("PUT") => quote! { self.client.put(uri.build()) },
      Some("DELETE") => quote! { self.client.delete(uri.build()) },
      Some("PATCH") => quote! { self.client.patch(uri.build()) },
      Some("HEAD") => quote! { self.client.head(uri.build()) },
      Some(method @ ("OPTIONS" | "CONNECT" | "TRACE")) => {
        let method = Ident::new(method, Span::call_site());
        quote! { self.client.request(reqwest::Method::#method, uri.build()) }
      }
      _ => {
        let name = self.method.as_str();
        let bytes = syn::LitByteStr::new(name.as_bytes(), Span::call_site());
        quote! {
          self.client.request(
            reqwest::Method::from_bytes(#bytes).map_err(|_| ClientError::InvalidMethod(#name.to_string()))?,
            uri.build(),
          )
        }
      }
    };
    tokens.extend(ts);
  }
}

/// One `Service` method issuing a single operation.
#[derive(Debug, Clone)]
pub(crate) struct ClientMethodFragment {
  pub(crate) name: String,
  docs: Vec<String>,
  template: String,
  bindings: Vec<ParameterBinding>,
  http: HttpInitFragment,
  accept: String,
  body: Option<TokenStream>,
  return_type: Option<TypeRef>,
  decode: TokenStream,
}

impl ClientMethodFragment {
  pub(crate) fn new(path: &str, operation: &Operation, negotiator: &ContentNegotiator) -> Self {
    let mut binder = ParameterBinder::new();
    let bindings: Vec<ParameterBinding> = operation.parameters.iter().map(|p| binder.bind(p)).collect();

    let body = bindings
      .iter()
      .find(|binding| binding.statement == BindingStatement::Body)
      .map(|binding| negotiator.body_tokens(&binding.ident, &binding.value_type, &operation.consumes));

    let method = if operation.http_method.trim().is_empty() {
      "GET"
    } else {
      operation.http_method.as_str()
    };

    let return_type = TypeRef::resolve(&operation.data_type);
    let decode = match &return_type {
      Some(ty) => negotiator.decode_tokens(ty),
      None => quote! { Ok(()) },
    };

    Self {
      name: to_method_name(&operation.nickname),
      docs: method_docs(path, method, operation),
      template: path.to_string(),
      bindings,
      http: HttpInitFragment::new(method),
      accept: negotiator.accept_value(&operation.consumes),
      body,
      return_type,
      decode,
    }
  }
}

fn method_docs(path: &str, method: &str, operation: &Operation) -> Vec<String> {
  let mut docs: Vec<String> = [operation.summary.as_deref(), operation.notes.as_deref()]
    .into_iter()
    .flatten()
    .flat_map(str::lines)
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .map(str::to_string)
    .collect();
  docs.push(format!("{} {path}", method.trim().to_ascii_uppercase()));
  docs
}

impl ToTokens for ClientMethodFragment {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let docs = self.docs.iter().map(|line| {
      let line = format!(" {line}");
      quote! { #[doc = #line] }
    });
    let name = ident(&self.name);
    let signatures = self.bindings.iter().map(ParameterBinding::signature);
    let return_type = match &self.return_type {
      Some(ty) => ty.to_token_stream(),
      None => quote! { () },
    };

    let uri_statements: Vec<TokenStream> = self.bindings.iter().filter_map(ParameterBinding::uri_tokens).collect();
    let header_statements = self.bindings.iter().filter_map(ParameterBinding::header_tokens);
    let uri_binding = if uri_statements.is_empty() {
      quote! { let uri }
    } else {
      quote! { let mut uri }
    };

    let template = self.template.as_str();
    let http = &self.http;
    let accept = self.accept.as_str();
    let body = &self.body;
    let decode = &self.decode;

    tokens.extend(quote! {
      #(#docs)*
      pub fn #name(&self #(, #signatures)*) -> Result<#return_type, ClientError> {
        #uri_binding = UriBuilder::new(&self.scheme, &self.host, self.port, #template);
        #(#uri_statements)*
        let request = #http;
        let request = request.header(reqwest::header::ACCEPT, #accept);
        #(#header_statements)*
        #body
        let response = request.send()?;
        if response.status() != reqwest::StatusCode::OK {
          return Err(ClientError::status(response.status()));
        }
        #decode
      }
    });
  }
}
