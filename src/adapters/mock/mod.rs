//! Test doubles for the transport seam.
//!
//! - [`MockHttpClient`] - scripted responses, gates, delays and hangs

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
