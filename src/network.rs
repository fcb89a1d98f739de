//! Network constants for the smart-me SDK.

use std::time::Duration;

/// Default REST API base URL for smart-me.
pub const DEFAULT_API_URL: &str = "https://api.smart-me.com/";

/// Default overall timeout of a single API call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
