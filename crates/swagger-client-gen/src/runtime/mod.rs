//! URI templating runtime.
//!
//! The same source file is compiled into this crate and appended, once, to
//! every generated client.

mod uri_builder;

pub use uri_builder::{UnboundPathParameter, UriBuilder};

/// Source text of [`UriBuilder`] as embedded into generated clients.
pub const URI_BUILDER_SOURCE: &str = include_str!("uri_builder.rs");
