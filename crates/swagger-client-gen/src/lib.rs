//! Generates typed Rust HTTP clients from Swagger 1.2 API descriptions.
//!
//! The [`fetcher`] retrieves the resource listing and every API declaration it
//! references, the [`generator`] turns them into a single Rust module, and the
//! [`runtime`] holds the URI builder that is embedded into each generated file.

pub mod description;
pub mod fetcher;
pub mod generator;
pub(crate) mod naming;
pub mod runtime;
pub mod ui;
