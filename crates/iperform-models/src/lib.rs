//! # I Perform Models
//!
//! The State document: every record type the school database holds, plus the
//! sanitizer that turns an arbitrary JSON reply from the inference service
//! into a structurally valid [`SchoolState`].
//!
//! The whole document is replaced on every successful mutation, so these
//! types are written to survive anything the service sends back:
//!
//! - every field decodes leniently (see `iperform_core::serde`), so a
//!   wrong-typed scalar coerces instead of failing the record;
//! - unknown fields, on records and at the top level, are preserved in
//!   flattened `extra` maps and travel back to the service on the next
//!   mutation;
//! - [`Role`] is a closed enumeration with an explicit synonym table for the
//!   verbose labels the service likes to invent.
//!
//! Model modules mirror the staff domains of the school: [`users`],
//! [`academics`], [`discipline`], [`library`], [`finance`], [`stock`],
//! [`messaging`].

pub mod academics;
pub mod discipline;
pub mod finance;
pub mod library;
pub mod messaging;
pub mod profile;
pub mod roles;
pub mod sanitize;
pub mod state;
pub mod stock;
pub mod users;

// Re-export commonly used types at crate root
pub use profile::SchoolProfile;
pub use roles::Role;
pub use sanitize::sanitize;
pub use state::SchoolState;
pub use users::User;
