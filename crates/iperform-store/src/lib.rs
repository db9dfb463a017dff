//! # I Perform Store
//!
//! The single owner of application state and the session gate in front of
//! it.
//!
//! [`SyncStore`] holds the one live [`iperform_models::SchoolState`] value
//! and runs the synchronization loop every dashboard relies on: dispatch a
//! free-text action, receive a whole replacement document, commit it
//! atomically, or keep the previous state untouched when the gateway
//! fails. One mutation may be in flight at a time, enforced by the store
//! itself rather than by UI affordance.
//!
//! [`Session`] is the two-slot login gate: users who must still change
//! their password stay in a pending slot and only a successful clearing
//! mutation promotes them to the authenticated slot.

pub mod session;
pub mod store;

// Re-export commonly used types at crate root
pub use session::{
    ChangePasswordRequest, LoginOutcome, RegisterSchoolRequest, Session, SessionError,
};
pub use store::{StoreError, StoreSnapshot, SyncStore};
