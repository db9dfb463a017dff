//! # I Perform Gateway
//!
//! The remote mutation gateway: the only component that talks to the hosted
//! inference service. It exposes two state operations behind the
//! [`StateSynthesizer`] seam (materialize a new State, mutate an existing
//! one) plus the side services (lab advisor, timetable generator) that
//! return non-state payloads.
//!
//! Everything inbound passes through `iperform_models::sanitize`, and the
//! two state operations fail differently on purpose:
//!
//! - **materialize** recovers locally with the deterministic demo dataset in
//!   [`fallback`]; at session start nothing has been lost yet.
//! - **mutate** surfaces a [`GatewayError`]; the user's unsaved intent must
//!   not silently vanish.

pub mod client;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod lab;
pub mod prompts;
pub mod seed;

// Re-export commonly used types at crate root
pub use client::{InferenceClient, StateSynthesizer};
pub use error::GatewayError;
pub use fallback::{FALLBACK_CODE, fallback_state};
pub use lab::{LabMeasurements, LabReport};
pub use seed::{AdminSeed, SeedRequest};
