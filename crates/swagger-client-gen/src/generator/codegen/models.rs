use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use crate::{
  description::ModelDefinition,
  generator::types::TypeRef,
  naming::identifiers::{ident, strip_namespace, to_rust_field_name, to_rust_type_name},
};

#[derive(Debug, Clone)]
struct FieldFragment {
  wire_name: String,
  name: String,
  ty: TypeRef,
  required: bool,
  boxed: bool,
  docs: Vec<String>,
}

impl ToTokens for FieldFragment {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let name = ident(&self.name);
    let ty = &self.ty;
    let ty = if self.boxed { quote! { Box<#ty> } } else { quote! { #ty } };
    let ty = if self.required { ty } else { quote! { Option<#ty> } };

    let docs = self.docs.iter().map(|line| {
      let line = format!(" {line}");
      quote! { #[doc = #line] }
    });

    let mut args = Vec::with_capacity(3);
    if self.name.trim_start_matches("r#") != self.wire_name {
      let wire_name = self.wire_name.as_str();
      args.push(quote! { rename = #wire_name });
    }
    if !self.required {
      args.push(quote! { default });
      args.push(quote! { skip_serializing_if = "Option::is_none" });
    }
    let serde = if args.is_empty() {
      TokenStream::new()
    } else {
      quote! { #[serde(#(#args),*)] }
    };

    tokens.extend(quote! {
      #(#docs)*
      #serde
      pub #name: #ty,
    });
  }
}

/// A serde struct for one model of the registry.
#[derive(Debug, Clone)]
pub(crate) struct ModelFragment {
  name: String,
  docs: Vec<String>,
  fields: Vec<FieldFragment>,
}

impl ModelFragment {
  pub(crate) fn new(id: &str, model: &ModelDefinition) -> Self {
    let name = to_rust_type_name(strip_namespace(id));
    let mut taken: Vec<String> = Vec::with_capacity(model.properties.len());

    let fields = model
      .properties
      .iter()
      .map(|(wire_name, property)| {
        let ty = TypeRef::resolve_or_string(&property.data_type);
        let boxed = ty.model_name() == Some(name.as_str());
        FieldFragment {
          wire_name: wire_name.clone(),
          name: unique_field_name(&mut taken, wire_name),
          ty,
          required: model.is_required(wire_name),
          boxed,
          docs: doc_lines(property.description.as_deref()),
        }
      })
      .collect();

    Self {
      name,
      docs: doc_lines(model.description.as_deref()),
      fields,
    }
  }

  #[must_use]
  pub(crate) fn name(&self) -> &str {
    &self.name
  }
}

fn doc_lines(text: Option<&str>) -> Vec<String> {
  text
    .into_iter()
    .flat_map(str::lines)
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .map(str::to_string)
    .collect()
}

fn unique_field_name(taken: &mut Vec<String>, wire_name: &str) -> String {
  let base = to_rust_field_name(wire_name);
  let mut candidate = base.clone();
  let mut suffix = 2;
  while taken.contains(&candidate) {
    candidate = format!("{base}_{suffix}");
    suffix += 1;
  }
  taken.push(candidate.clone());
  candidate
}

impl ToTokens for ModelFragment {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let name = ident(&self.name);
    let docs = self.docs.iter().map(|line| {
      let line = format!(" {line}");
      quote! { #[doc = #line] }
    });
    let fields = &self.fields;

    tokens.extend(quote! {
      #(#docs)*
      #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
      pub struct #name {
        #(#fields)*
      }
    });
  }
}
