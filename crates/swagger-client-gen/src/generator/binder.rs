use proc_macro2::{Ident, TokenStream};
use quote::quote;

use super::types::TypeRef;
use crate::{
  description::{ParamType, Parameter},
  naming::identifiers::{ident, to_parameter_name},
};

/// Local names used inside every generated method body.
const METHOD_LOCALS: &[&str] = &["uri", "request", "response", "bytes", "value"];

/// Where a parameter's value goes when the generated method runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingStatement {
  PathSet,
  QueryAppend,
  QueryAppendEach,
  Header,
  Body,
  /// In the signature only; `form` and unknown parameter kinds.
  Unbound,
}

#[derive(Debug, Clone)]
pub struct ParameterBinding {
  /// Name as declared, used on the wire.
  pub wire_name: String,
  pub ident: Ident,
  pub value_type: TypeRef,
  pub optional: bool,
  pub statement: BindingStatement,
}

impl ParameterBinding {
  /// The argument type in the method signature.
  #[must_use]
  pub fn signature_type(&self) -> TokenStream {
    let ty = &self.value_type;
    if self.optional {
      quote! { Option<#ty> }
    } else {
      quote! { #ty }
    }
  }

  #[must_use]
  pub fn signature(&self) -> TokenStream {
    let ident = &self.ident;
    let ty = self.signature_type();
    quote! { #ident: #ty }
  }

  /// The statement applied to the `UriBuilder`, if the parameter belongs in the URI.
  #[must_use]
  pub fn uri_tokens(&self) -> Option<TokenStream> {
    let name = self.wire_name.as_str();
    let ident = &self.ident;

    let tokens = match self.statement {
      BindingStatement::PathSet if self.value_type.is_multi_valued() => quote! {
        uri.path_param(#name, #ident.iter().map(ToString::to_string).collect::<Vec<_>>().join(","));
      },
      BindingStatement::PathSet => quote! { uri.path_param(#name, &#ident); },
      BindingStatement::QueryAppend if self.optional => quote! {
        if let Some(value) = &#ident {
          uri.query_param(#name, value);
        }
      },
      BindingStatement::QueryAppend => quote! { uri.query_param(#name, &#ident); },
      BindingStatement::QueryAppendEach => quote! {
        for value in &#ident {
          uri.query_param(#name, value);
        }
      },
      BindingStatement::Header | BindingStatement::Body | BindingStatement::Unbound => return None,
    };
    Some(tokens)
  }

  /// The statement adding this parameter as a request header.
  #[must_use]
  pub fn header_tokens(&self) -> Option<TokenStream> {
    if self.statement != BindingStatement::Header {
      return None;
    }

    let name = self.wire_name.as_str();
    let ident = &self.ident;
    let to_value = |value: TokenStream| {
      if self.value_type.is_multi_valued() {
        quote! { #value.iter().map(ToString::to_string).collect::<Vec<_>>().join(",") }
      } else {
        quote! { #value.to_string() }
      }
    };

    let tokens = if self.optional {
      let value = to_value(quote! { value });
      quote! {
        let request = match &#ident {
          Some(value) => request.header(#name, #value),
          None => request,
        };
      }
    } else {
      let value = to_value(quote! { #ident });
      quote! { let request = request.header(#name, #value); }
    };
    Some(tokens)
  }
}

/// Maps declared parameters onto method arguments and binding statements.
#[derive(Debug, Default)]
pub struct ParameterBinder {
  taken: Vec<String>,
}

impl ParameterBinder {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Binds one parameter. Argument names stay unique across calls on the same binder.
  pub fn bind(&mut self, parameter: &Parameter) -> ParameterBinding {
    let declared = TypeRef::resolve_or_string(&parameter.data_type);

    let (value_type, optional, statement) = match parameter.param_type {
      ParamType::Path => (declared, false, BindingStatement::PathSet),
      ParamType::Query if parameter.allow_multiple || declared.is_multi_valued() => {
        let value_type = if declared.is_multi_valued() {
          declared
        } else {
          TypeRef::Vec(Box::new(declared))
        };
        (value_type, false, BindingStatement::QueryAppendEach)
      }
      ParamType::Query => (declared, !parameter.required, BindingStatement::QueryAppend),
      ParamType::Header => (declared, !parameter.required, BindingStatement::Header),
      ParamType::Body => (declared, false, BindingStatement::Body),
      ParamType::Form | ParamType::Unknown => (declared, false, BindingStatement::Unbound),
    };

    ParameterBinding {
      wire_name: parameter.name.clone(),
      ident: ident(&self.claim(&parameter.name)),
      value_type,
      optional,
      statement,
    }
  }

  fn claim(&mut self, name: &str) -> String {
    let mut base = to_parameter_name(name);
    if METHOD_LOCALS.contains(&base.as_str()) {
      base.push('_');
    }

    let mut candidate = base.clone();
    let mut suffix = 2;
    while self.taken.contains(&candidate) {
      candidate = format!("{base}_{suffix}");
      suffix += 1;
    }
    self.taken.push(candidate.clone());
    candidate
  }
}
