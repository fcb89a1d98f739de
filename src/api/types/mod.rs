//! API response types for the smart-me REST API.
//!
//! This module contains all the type definitions decoded by the API client,
//! organized by category.

pub mod device;
pub mod meter;
pub mod values;

// Re-export all types for convenience
pub use device::*;
pub use meter::*;
pub use values::*;
