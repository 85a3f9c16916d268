//! Trait abstractions at the transport seam.
//!
//! - [`HttpClient`] - GET/POST against the assessment backend

pub mod http;

pub use http::{json_headers, Headers, HttpClient, HttpError, Response};
