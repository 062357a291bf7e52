use proc_macro2::TokenStream;

use crate::{
  description::{ApiDeclaration, ApiReference, ResourceListing},
  fetcher::{FetchedDeclaration, FetchedDescription, StaticSource},
  generator::{CodeEmitter, EmittedClient, GenerateOptions},
};

pub(crate) const BASE: &str = "http://localhost:8080/apidocs.json";

pub(crate) const USERS_LISTING: &str = r#"{
  "apiVersion": "1.0",
  "swaggerVersion": "1.2",
  "apis": [{"path": "/users", "description": "User management"}],
  "info": {"title": "User Service", "description": "Manages users"}
}"#;

pub(crate) const USERS_DECLARATION: &str = r#"{
  "apiVersion": "1.0",
  "swaggerVersion": "1.2",
  "basePath": "http://localhost:8080",
  "resourcePath": "/users",
  "apis": [
    {
      "path": "/users/{user-id}",
      "operations": [
        {
          "httpMethod": "GET",
          "nickname": "findUser",
          "summary": "get a user",
          "type": "main.User",
          "parameters": [
            {"name": "user-id", "paramType": "path", "type": "string", "required": true}
          ],
          "consumes": ["application/json"],
          "produces": ["application/json"]
        },
        {
          "httpMethod": "DELETE",
          "nickname": "removeUser",
          "type": "void",
          "parameters": [
            {"name": "user-id", "paramType": "path", "type": "string", "required": true}
          ],
          "consumes": ["application/json", "application/xml"]
        }
      ]
    },
    {
      "path": "/users",
      "operations": [
        {
          "httpMethod": "PUT",
          "nickname": "createUser",
          "type": "void",
          "parameters": [
            {"name": "body", "paramType": "body", "type": "main.User", "required": true}
          ],
          "consumes": ["application/json"]
        },
        {
          "httpMethod": "GET",
          "nickname": "searchUsers",
          "type": "array",
          "items": {"$ref": "main.User"},
          "parameters": [
            {"name": "tag", "paramType": "query", "type": "string", "allowMultiple": true},
            {"name": "limit", "paramType": "query", "type": "integer", "format": "int32"},
            {"name": "X-Request-Id", "paramType": "header", "type": "string", "required": true}
          ]
        }
      ]
    }
  ],
  "models": {
    "main.User": {
      "id": "main.User",
      "required": ["Id"],
      "properties": {
        "Id": {"type": "string"},
        "Name": {"type": "string", "description": "display name"}
      }
    }
  }
}"#;

pub(crate) fn users_source() -> StaticSource {
  StaticSource::new()
    .with_document(BASE, USERS_LISTING)
    .with_document(format!("{BASE}/users"), USERS_DECLARATION)
}

/// Builds a fetched description from declaration documents, one listing entry per document.
pub(crate) fn description(declarations: &[(&str, &str)]) -> FetchedDescription {
  let mut listing: ResourceListing =
    serde_json::from_str(r#"{"apiVersion": "1.0", "swaggerVersion": "1.2"}"#).unwrap();
  let declarations = declarations
    .iter()
    .map(|(path, body)| {
      let reference = ApiReference {
        path: (*path).to_string(),
        description: None,
      };
      listing.apis.push(reference.clone());
      FetchedDeclaration {
        reference,
        url: format!("{BASE}{path}"),
        declaration: serde_json::from_str::<ApiDeclaration>(body).unwrap(),
      }
    })
    .collect();

  FetchedDescription {
    url: BASE.to_string(),
    listing,
    declarations,
  }
}

pub(crate) fn users_description() -> FetchedDescription {
  let mut description = description(&[("/users", USERS_DECLARATION)]);
  description.listing = serde_json::from_str(USERS_LISTING).unwrap();
  description
}

pub(crate) fn emit(description: &FetchedDescription, options: GenerateOptions) -> EmittedClient {
  CodeEmitter::new(options, BASE).emit(description).unwrap()
}

/// Token text with all whitespace removed, for substring assertions.
pub(crate) fn compact(tokens: &TokenStream) -> String {
  tokens.to_string().split_whitespace().collect()
}
