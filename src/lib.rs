//! # I Perform
//!
//! An AI-backed school management console. Every piece of application state
//! lives in one JSON document owned by a hosted inference service; this
//! program sends free-text actions, receives complete replacement documents,
//! sanitizes them defensively, and commits them atomically.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── iperform-core      # lenient decoding layer, shared error types
//! ├── iperform-config    # environment-driven configuration
//! ├── iperform-models    # the State document + the sanitizer
//! ├── iperform-gateway   # remote mutation gateway (materialize / mutate)
//! └── iperform-store     # state store, dispatch loop, login gate
//! src/
//! ├── cli/               # clap subcommands and the interactive shell
//! └── logging.rs         # tracing initialization
//! ```
//!
//! Data flow: shell → action string → gateway → raw JSON → sanitizer →
//! store → next snapshot. The store enforces the one-mutation-in-flight
//! rule at runtime; a failed mutation keeps the previous state untouched and
//! surfaces the error, while a failed initial generation falls back to a
//! built-in demo dataset.
//!
//! ## Quick start
//!
//! ```bash
//! INFERENCE_API_KEY=... cargo run -- run          # interactive session
//! cargo run -- demo                               # offline demo dataset
//! cargo run -- materialize --school "Hill College"
//! ```

pub mod cli;
pub mod logging;

// Re-export workspace crates for convenience
pub use iperform_config;
pub use iperform_core;
pub use iperform_gateway;
pub use iperform_models;
pub use iperform_store;
