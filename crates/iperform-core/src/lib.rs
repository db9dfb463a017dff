//! # I Perform Core
//!
//! Foundation types for the I Perform synchronization core.
//!
//! This crate provides the pieces shared by every other workspace member:
//!
//! - [`errors`]: authentication error types surfaced to the console shell
//! - [`serde`]: lenient deserialization helpers used to decode documents
//!   returned by the inference service
//!
//! The inference service returns whole JSON documents with no schema
//! enforcement on its side, so the decoding layer in [`serde`] is written to
//! be total: a wrong-typed field coerces to a sensible value instead of
//! failing the surrounding document.

pub mod errors;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AuthError;
