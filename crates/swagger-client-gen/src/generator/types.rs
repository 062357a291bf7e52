use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use crate::{
  description::{DataType, ItemsRef},
  naming::identifiers::{ident, strip_namespace, to_rust_type_name},
};

/// A Rust type resolved from a Swagger 1.2 type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
  String,
  I32,
  I64,
  F32,
  F64,
  Bool,
  /// `File` parameters and properties.
  Bytes,
  /// Untyped values, such as an `array` without `items`.
  Any,
  Vec(Box<TypeRef>),
  /// A generated model struct, by its Rust type name.
  Model(String),
}

impl TypeRef {
  /// Resolves a data type, returning `None` when it is `void` or missing.
  #[must_use]
  pub fn resolve(data_type: &DataType) -> Option<Self> {
    let name = data_type.type_reference().filter(|name| *name != "void")?;
    let items = data_type.items.as_ref().map(Self::from_items);
    Some(Self::from_name(name, data_type.format.as_deref(), items))
  }

  /// Like [`TypeRef::resolve`], but a missing type becomes [`TypeRef::String`].
  ///
  /// Parameters and properties always need a type in the generated signature.
  #[must_use]
  pub fn resolve_or_string(data_type: &DataType) -> Self {
    Self::resolve(data_type).unwrap_or(Self::String)
  }

  fn from_items(items: &ItemsRef) -> Self {
    items
      .type_reference()
      .map_or(Self::Any, |name| Self::from_name(name, items.format.as_deref(), None))
  }

  /// Maps a type name plus optional format and item type onto a Rust type.
  #[must_use]
  pub fn from_name(name: &str, format: Option<&str>, items: Option<Self>) -> Self {
    if let Some(inner) = container_element(name) {
      return Self::Vec(Box::new(Self::from_name(inner, None, None)));
    }

    match (name, format) {
      ("string" | "date" | "date-time", _) => Self::String,
      ("integer", Some("int32")) | ("int32", _) => Self::I32,
      ("integer" | "int64", _) => Self::I64,
      ("number", Some("float")) | ("float", _) => Self::F32,
      ("number" | "double", _) => Self::F64,
      ("boolean", _) => Self::Bool,
      ("File", _) => Self::Bytes,
      ("array" | "List" | "Set", _) => Self::Vec(Box::new(items.unwrap_or(Self::Any))),
      _ => Self::Model(to_rust_type_name(strip_namespace(name))),
    }
  }

  /// Whether values of this type are bound element by element.
  #[must_use]
  pub const fn is_multi_valued(&self) -> bool {
    matches!(self, Self::Vec(_) | Self::Bytes)
  }

  /// The model this type names directly, not through a container.
  #[must_use]
  pub fn model_name(&self) -> Option<&str> {
    match self {
      Self::Model(name) => Some(name),
      _ => None,
    }
  }
}

/// Extracts `X` from the `List[X]`, `Set[X]` and `Array[X]` shorthand.
fn container_element(name: &str) -> Option<&str> {
  let (container, rest) = name.split_once('[')?;
  let inner = rest.strip_suffix(']')?;
  matches!(container, "List" | "Set" | "Array" | "array").then_some(inner.trim())
}

impl ToTokens for TypeRef {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let ts = match self {
      Self::String => quote! { String },
      Self::I32 => quote! { i32 },
      Self::I64 => quote! { i64 },
      Self::F32 => quote! { f32 },
      Self::F64 => quote! { f64 },
      Self::Bool => quote! { bool },
      Self::Bytes => quote! { Vec<u8> },
      Self::Any => quote! { serde_json::Value },
      Self::Vec(inner) => quote! { Vec<#inner> },
      Self::Model(name) => {
        let name = ident(name);
        quote! { #name }
      }
    };
    tokens.extend(ts);
  }
}
