//! # uberVU Metrics API client
//!
//! Rust client for the uberVU Metrics API supporting:
//! - Query-string authentication with an `(email, apikey)` pair
//! - Groups, context folders and keywords (streams)
//! - Stream workflows: create a stream in the company folder, delete a
//!   stream by query
//! - Pluggable HTTP transport (`reqwest` by default)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ubervu::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(
//!         "ubervu@example.com",
//!         "12345678",
//!         "https://api.ubervu.com/front-api/v1",
//!     )?;
//!
//!     let stream = client.streams().create("tesla").await?;
//!     println!("created stream {}", stream.id);
//!
//!     client.streams().delete("tesla").await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use streams::Streams;
pub use types::*;

// Module declarations
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod resources;
pub mod streams;
pub mod types;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use ubervu::prelude::*;
/// ```
pub mod prelude {

    pub use crate::{
        Client, ClientConfig, Error, Result,
        http::HttpTransport,
        streams::Streams,
        types::{ContextType, CurrentUser, Folder, Group, Id, Keyword, ObjectList},
    };
}

/// Client version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
