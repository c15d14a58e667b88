//! # OpenML client
//!
//! Async client for the [OpenML](https://www.openml.org) REST API.
//!
//! Every call is a single GET. Bodies come back as untyped JSON
//! ([`FetchOutcome::Json`]) because the upstream schema is neither fixed
//! nor validated here; empty and non-JSON bodies come back as a short
//! description ([`FetchOutcome::Text`]).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use openml_client::{FetchOutcome, FilterPath, OpenMlClient, OpenMlResult};
//!
//! #[tokio::main]
//! async fn main() -> OpenMlResult<()> {
//!     let client = OpenMlClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     if let FetchOutcome::Json(iris) = client.datasets().get(61).await? {
//!         println!("{}", iris["data_set_description"]["name"]);
//!     }
//!
//!     let filters = FilterPath::new("limit/5/tag/uci").expect("non-empty filters");
//!     let listing = client.datasets().list(&filters).await?;
//!     println!("{:?}", listing);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod transport;

pub use client::{OpenMlClient, OpenMlClientBuilder};
pub use config::{ClientConfig, RetryConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::{OpenMlError, OpenMlResult};
pub use filter::FilterPath;
pub use transport::{FetchOutcome, QueryParams};
