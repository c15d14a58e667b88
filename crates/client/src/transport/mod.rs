//! Transport layer for the OpenML client.

pub mod http;

pub use http::{FetchOutcome, HttpTransport, QueryParams};
