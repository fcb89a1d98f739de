//! REST API client module for smart-me.
//!
//! This module provides a type-safe HTTP client for the smart-me REST API:
//! device lists, current measurement values and historical values.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use smartme::api::{RequestContext, SmartMeClient};
//! use chrono::{Duration, Utc};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client with default settings
//!     let client = SmartMeClient::new("user@example.com", "password")?;
//!     let ctx = RequestContext::background();
//!
//!     // Get all devices
//!     let devices = client.get_devices(&ctx).await?;
//!     println!("Found {} devices", devices.len());
//!
//!     // Counter reading of the first device one day ago
//!     if let Some(id) = devices.first().and_then(|d| d.id.as_deref()) {
//!         let yesterday = Utc::now() - Duration::days(1);
//!         let value = client.get_values_in_past(&ctx, id, &yesterday).await?;
//!         println!("{} at {}", value.value, value.date);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```rust,ignore
//! use smartme::api::SmartMeClient;
//! use std::time::Duration;
//!
//! let client = SmartMeClient::builder("user@example.com", "password")
//!     .base_url("http://localhost:8080/")
//!     .timeout(Duration::from_secs(30))
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>` which is an alias for `Result<T, ApiError>`.
//! Nothing is retried; the caller decides what to do with a failure:
//!
//! ```rust,ignore
//! use smartme::api::ApiError;
//!
//! match client.get_values(&ctx, device_id).await {
//!     Ok(values) => println!("{} values", values.values.len()),
//!     Err(ApiError::Status { status_code: 404, .. }) => println!("Unknown device"),
//!     Err(e) if e.is_context() => println!("Aborted: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod context;
pub mod error;
pub mod serde_util;
pub mod types;

// Re-export main types for convenience
pub use client::{format_timestamp, SmartMeClient, SmartMeClientBuilder};
pub use context::RequestContext;
pub use error::{ApiError, ApiResult};
pub use types::*;

pub use tokio_util::sync::CancellationToken;
