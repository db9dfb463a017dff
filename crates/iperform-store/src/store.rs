//! The state store and dispatch loop.
//!
//! One `SyncStore` owns the single live State for the session. Readers take
//! cheap `Arc` snapshots; writers go through [`SyncStore::initialize`] and
//! [`SyncStore::dispatch`], which are the only two suspension points in the
//! core. A successful dispatch replaces the document wholesale; a failed one
//! leaves the previous snapshot untouched, down to pointer identity.
//!
//! At most one mutation is in flight at a time. This is a runtime
//! guarantee: a second dispatch is rejected with
//! [`StoreError::MutationInFlight`] before it can reach the gateway.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{error, info};

use iperform_gateway::{SeedRequest, StateSynthesizer};
use iperform_models::SchoolState;

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No state has been materialized yet.
    NotReady,
    /// An initialize call is already running.
    LoadInFlight,
    /// A mutation is already running; the caller should retry after it
    /// resolves.
    MutationInFlight,
    /// Materialize failed; the store stays empty and can be retried.
    InitializationFailed(String),
    /// The mutation failed; the previous state is retained unchanged.
    MutationFailed(String),
}

impl std::error::Error for StoreError {}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "no school data has been loaded yet"),
            Self::LoadInFlight => write!(f, "initial data is already being loaded"),
            Self::MutationInFlight => {
                write!(f, "another update is still in progress, try again shortly")
            }
            Self::InitializationFailed(msg) => write!(f, "failed to load school data: {}", msg),
            Self::MutationFailed(msg) => write!(f, "update failed: {}", msg),
        }
    }
}

/// A point-in-time view of the store, safe to hold across awaits.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub state: Option<Arc<SchoolState>>,
    pub is_loading: bool,
    pub is_mutating: bool,
    pub error: Option<String>,
}

#[derive(Default)]
struct Inner {
    state: Option<Arc<SchoolState>>,
    error: Option<String>,
}

/// Single-slot in-flight guard. Acquire flips the flag, drop releases it,
/// so the flag is released on every exit path including panics.
struct FlightGuard<'a>(&'a AtomicBool);

impl<'a> FlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self(flag))
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// The single owner of application state.
pub struct SyncStore {
    gateway: Arc<dyn StateSynthesizer>,
    inner: Mutex<Inner>,
    loading: AtomicBool,
    mutating: AtomicBool,
}

impl SyncStore {
    pub fn new(gateway: Arc<dyn StateSynthesizer>) -> Self {
        Self {
            gateway,
            inner: Mutex::new(Inner::default()),
            loading: AtomicBool::new(false),
            mutating: AtomicBool::new(false),
        }
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        // Inner is only ever updated by whole-field assignment, so a panic
        // elsewhere cannot leave it half-written; recover from poisoning.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current view of the store.
    pub fn snapshot(&self) -> StoreSnapshot {
        let inner = self.inner();
        StoreSnapshot {
            state: inner.state.clone(),
            is_loading: self.loading.load(Ordering::Acquire),
            is_mutating: self.mutating.load(Ordering::Acquire),
            error: inner.error.clone(),
        }
    }

    /// The current state, if the store is Ready.
    pub fn state(&self) -> Option<Arc<SchoolState>> {
        self.inner().state.clone()
    }

    /// Clears a surfaced error without touching state.
    pub fn clear_error(&self) {
        self.inner().error = None;
    }

    /// Materializes the session's State through the gateway. On success the
    /// store becomes Ready; on failure it stays empty with `error` set, and
    /// calling this again is the retry path. Also used by registration,
    /// where it replaces whatever demo state was on screen.
    pub async fn initialize(
        &self,
        seed: Option<&SeedRequest>,
    ) -> Result<Arc<SchoolState>, StoreError> {
        let _gate = FlightGuard::acquire(&self.loading).ok_or(StoreError::LoadInFlight)?;
        self.inner().error = None;

        match self.gateway.materialize(seed).await {
            Ok(state) => {
                let state = Arc::new(state);
                let mut inner = self.inner();
                inner.state = Some(state.clone());
                inner.error = None;
                info!(
                    school = %state.school_profile.name,
                    users = state.users.len(),
                    "state store ready"
                );
                Ok(state)
            }
            Err(err) => {
                let message = err.to_string();
                self.inner().error = Some(message.clone());
                error!(error = %message, "initialization failed");
                Err(StoreError::InitializationFailed(message))
            }
        }
    }

    /// Applies one free-text action through the gateway and commits the
    /// replacement document. Requires a Ready store and no other mutation in
    /// flight. On failure the previous state is retained unchanged and the
    /// error message is recorded for the UI; the action is considered not
    /// applied.
    pub async fn dispatch(&self, action: &str) -> Result<Arc<SchoolState>, StoreError> {
        let _gate = FlightGuard::acquire(&self.mutating).ok_or(StoreError::MutationInFlight)?;

        let current = {
            let mut inner = self.inner();
            inner.error = None;
            inner.state.clone().ok_or(StoreError::NotReady)?
        };

        match self.gateway.mutate(&current, action).await {
            Ok(next) => {
                let next = Arc::new(next);
                self.inner().state = Some(next.clone());
                info!(action, "mutation committed");
                Ok(next)
            }
            Err(err) => {
                let message = err.to_string();
                self.inner().error = Some(message.clone());
                error!(action, error = %message, "mutation failed, previous state retained");
                Err(StoreError::MutationFailed(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_guard_is_exclusive_and_releases() {
        let flag = AtomicBool::new(false);
        let guard = FlightGuard::acquire(&flag);
        assert!(guard.is_some());
        assert!(FlightGuard::acquire(&flag).is_none());
        drop(guard);
        assert!(FlightGuard::acquire(&flag).is_some());
    }

    #[test]
    fn test_store_error_messages_are_user_facing() {
        assert!(
            StoreError::MutationInFlight
                .to_string()
                .contains("in progress")
        );
        assert!(
            StoreError::MutationFailed("boom".into())
                .to_string()
                .contains("boom")
        );
    }
}
