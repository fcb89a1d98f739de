//! # smart-me Rust SDK
//!
//! A Rust client for the smart-me metering REST API.
//!
//! ## Modules
//!
//! - `api`: REST API client (`http` feature), request context and response types
//! - [`config`]: Credential loading from the environment or a JSON file
//! - [`network`]: Default endpoint and timeout
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use smartme::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SmartMeClient::new("user@example.com", "password")?;
//!     let ctx = RequestContext::background();
//!
//!     for device in client.get_devices(&ctx).await? {
//!         println!("{:?}: {:?} kW", device.name, device.active_power);
//!     }
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Network constants (API endpoint, default timeout).
pub mod network;

/// Credential loading.
pub mod config;

/// REST API client module for devices and measurement values.
#[cfg(feature = "http")]
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use smartme::prelude::*;
/// ```
pub mod prelude {
    // API module exports
    #[cfg(feature = "http")]
    pub use crate::api::{
        ApiError, ApiResult, CancellationToken, RequestContext, SmartMeClient,
        SmartMeClientBuilder,
        // Response types
        ChargeStationState, Device, DeviceValues, MeterEnergyType, MeterFamilyType,
        MeterSubType, ObisValue, Value,
    };

    // Configuration
    pub use crate::config::{ConfigError, Credentials};

    // Network constants
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
}
