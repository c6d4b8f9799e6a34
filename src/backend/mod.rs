//! REST backend integration.
//!
//! This module owns the outbound half of the server: the declarative
//! request-building rules each tool declares, the generic builder that
//! resolves a rule against an argument bag, and the HTTP client that issues
//! exactly one call per invocation.

pub mod client;
pub mod error;
pub mod request;

pub use client::BackendClient;
pub use error::{BackendError, BackendResult};
pub use request::{build_request, BackendRequest, BodySpec, JsonObject, Method, RequestRule};
