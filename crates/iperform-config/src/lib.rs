//! # I Perform Config
//!
//! Configuration types loaded from environment variables:
//!
//! - [`gateway`]: inference service endpoint, model, and timeout settings
//!
//! # Example
//!
//! ```ignore
//! use iperform_config::GatewayConfig;
//!
//! let config = GatewayConfig::from_env();
//! ```

pub mod gateway;

// Re-export commonly used types at crate root
pub use gateway::GatewayConfig;
