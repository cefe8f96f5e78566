//! CRM API Client - typed access to the back office REST API
//!
//! This crate wraps the `/api/...` endpoints of the CRM/HRM back office
//! behind one shared HTTP client (fixed base URL, fixed timeout, auth token
//! header read from persisted local storage) and one controller handle per
//! business area.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use crm_api_client::{ApiClient, ClientConfig, Fallback, MemoryStorage};
//!
//! # async fn run() -> Result<(), crm_api_client::ApiError> {
//! let config = ClientConfig::new("https://crm.example.com");
//! let client = ApiClient::new(&config, Arc::new(MemoryStorage::with_token("secret")))?;
//!
//! // Reads: collapse failures into an empty list for display.
//! let attributes = client.products().attributes().await.or_empty("list attributes");
//! println!("{} attributes", attributes.len());
//!
//! // Writes: failures are returned to the caller.
//! client.opportunities().toggle(42, true).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod de;
pub mod controllers;
pub mod envelope;
pub mod error;
pub mod http;
pub mod storage;

// Re-export commonly used types at the crate root
pub use client::{ApiClient, Credentials, Session};
pub use config::ClientConfig;
pub use controllers::*;
pub use envelope::{unwrap_payload, Envelope, EnvelopeStatus, Fallback, Shape};
pub use error::ApiError;
pub use http::{HttpClient, RequestOptions};
pub use storage::{FileStorage, LocalStorage, MemoryStorage, StorageError, TOKEN_KEY};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
