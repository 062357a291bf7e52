//! In-memory representation of a Swagger 1.2 description.
//!
//! A description has two levels: the [`ResourceListing`] served at the base
//! URL, and one [`ApiDeclaration`] per listed API, served at the base URL
//! followed by the API reference path.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceListing {
  #[serde(default)]
  pub api_version: Option<String>,
  #[serde(default)]
  pub swagger_version: Option<String>,
  #[serde(default)]
  pub apis: Vec<ApiReference>,
  #[serde(default)]
  pub info: Option<ApiInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfo {
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiReference {
  pub path: String,
  #[serde(default)]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDeclaration {
  #[serde(default)]
  pub api_version: Option<String>,
  #[serde(default)]
  pub swagger_version: Option<String>,
  #[serde(default)]
  pub base_path: Option<String>,
  #[serde(default)]
  pub resource_path: Option<String>,
  #[serde(default)]
  pub apis: Vec<ApiPath>,
  #[serde(default)]
  pub models: IndexMap<String, ModelDefinition>,
  #[serde(default)]
  pub consumes: Vec<String>,
  #[serde(default)]
  pub produces: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiPath {
  pub path: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  #[serde(default, alias = "method")]
  pub http_method: String,
  #[serde(default)]
  pub nickname: String,
  #[serde(default)]
  pub summary: Option<String>,
  #[serde(default)]
  pub notes: Option<String>,
  #[serde(flatten)]
  pub data_type: DataType,
  #[serde(default)]
  pub parameters: Vec<Parameter>,
  #[serde(default)]
  pub consumes: Vec<String>,
  #[serde(default)]
  pub produces: Vec<String>,
}

impl Operation {
  /// An operation returns no body when its type is `void` or missing.
  #[must_use]
  pub fn is_void(&self) -> bool {
    self.data_type.type_reference().is_none_or(|name| name == "void")
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
  Path,
  Query,
  Body,
  Header,
  Form,
  #[default]
  #[serde(other)]
  Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
  pub name: String,
  #[serde(default)]
  pub param_type: ParamType,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub required: bool,
  #[serde(default)]
  pub allow_multiple: bool,
  #[serde(flatten)]
  pub data_type: DataType,
}

/// The Swagger 1.2 data type fields shared by operations, parameters and model properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataType {
  #[serde(default, rename = "type")]
  pub type_name: Option<String>,
  #[serde(default, rename = "$ref")]
  pub reference: Option<String>,
  #[serde(default)]
  pub format: Option<String>,
  #[serde(default)]
  pub items: Option<ItemsRef>,
}

impl DataType {
  /// The referenced type name, preferring `$ref` over `type`.
  #[must_use]
  pub fn type_reference(&self) -> Option<&str> {
    self
      .reference
      .as_deref()
      .or(self.type_name.as_deref())
      .filter(|name| !name.is_empty())
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsRef {
  #[serde(default, rename = "type")]
  pub type_name: Option<String>,
  #[serde(default, rename = "$ref")]
  pub reference: Option<String>,
  #[serde(default)]
  pub format: Option<String>,
}

impl ItemsRef {
  #[must_use]
  pub fn type_reference(&self) -> Option<&str> {
    self
      .reference
      .as_deref()
      .or(self.type_name.as_deref())
      .filter(|name| !name.is_empty())
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDefinition {
  #[serde(default)]
  pub id: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub required: Vec<String>,
  #[serde(default)]
  pub properties: IndexMap<String, ModelProperty>,
}

impl ModelDefinition {
  #[must_use]
  pub fn is_required(&self, property: &str) -> bool {
    self.required.iter().any(|name| name == property)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelProperty {
  #[serde(default)]
  pub description: Option<String>,
  #[serde(flatten)]
  pub data_type: DataType,
}
