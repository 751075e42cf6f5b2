//! HTTP module containing HTTP client functionality.
//!
//! - [`client`] - HTTP client creation with tracing middleware, timeouts,
//!   proxy and default headers

pub mod client;

pub use client::{create_http_client, HttpClientConfig};
