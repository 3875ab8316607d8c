//! Search and indexing gateway for the persons index.
//!
//! Request bodies are built by substituting escaped values into static JSON
//! templates, sent to Elasticsearch over HTTP, and the replies are mapped
//! back into domain values by walking a fixed set of JSON paths.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod escape;
pub mod model;
pub mod parse;
pub mod template;

pub use client::EsClient;
pub use endpoint::EsConfig;
pub use error::SearchError;
pub use model::{Person, SearchHit, SearchResponse};
