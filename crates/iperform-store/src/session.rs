//! The login gate.
//!
//! Two slots: `current` holds the authenticated user, `pending` holds a user
//! who logged in with valid credentials but is required to change their
//! password first. Only a successful password-change mutation promotes
//! pending to current, so an interrupted change leaves the user
//! un-authenticated rather than half-authenticated. Logout clears both
//! slots unconditionally.

use std::fmt;

use tracing::info;
use validator::Validate;

use iperform_core::AuthError;
use iperform_gateway::{AdminSeed, SeedRequest};
use iperform_models::{Role, SchoolState, User};

use crate::store::{StoreError, SyncStore};

/// The fixed per-role demo passwords accepted alongside a user's stored
/// password. This is a demo-only backdoor kept from the original system so
/// the generated datasets are always reachable; it is not a security
/// boundary and must not be reproduced as production auth.
pub fn default_password(role: &Role) -> Option<&'static str> {
    match role {
        Role::Principal => Some("prin123"),
        Role::Dos => Some("dos123"),
        Role::Dod => Some("dod123"),
        Role::Teacher => Some("012"),
        Role::Student => Some("123"),
        Role::Librarian => Some("lib123"),
        Role::Bursar => Some("bur123"),
        Role::Secretary => Some("sec123"),
        Role::StockKeeper => Some("stock123"),
        Role::HeadBoy => Some("hb123"),
        Role::HeadGirl => Some("hg123"),
        Role::Parent => Some("parent123"),
        Role::Unrecognized(_) => None,
    }
}

/// What a successful login led to.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    LoggedIn(User),
    /// Credentials were valid but the account requires a password change;
    /// the user is parked in the pending slot until it succeeds.
    PasswordChangeRequired(User),
}

/// Error type for the password-change and registration flows.
#[derive(Debug)]
pub enum SessionError {
    /// No user is waiting in the pending slot.
    NothingPending,
    /// The request failed validation.
    InvalidRequest(String),
    /// The underlying mutation failed; the pending slot is kept so the user
    /// can retry.
    Mutation(StoreError),
}

impl std::error::Error for SessionError {}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingPending => write!(f, "no password change is pending"),
            Self::InvalidRequest(msg) => write!(f, "invalid request: {}", msg),
            Self::Mutation(err) => write!(f, "{}", err),
        }
    }
}

/// A mandatory password change, with the usual confirmation field.
#[derive(Debug, Clone, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
    #[validate(must_match(other = "new_password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// A new-school registration; validated before it becomes a materialize
/// seed.
#[derive(Debug, Clone, Validate)]
pub struct RegisterSchoolRequest {
    #[validate(length(min = 1, max = 120, message = "School name is required"))]
    pub school_name: String,
    #[validate(length(min = 1, message = "Administrator name is required"))]
    pub admin_name: String,
    #[validate(email(message = "A valid administrator email is required"))]
    pub admin_email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub admin_password: String,
}

impl RegisterSchoolRequest {
    pub fn into_seed(self) -> SeedRequest {
        SeedRequest {
            school_name: self.school_name,
            admin: Some(AdminSeed {
                name: self.admin_name,
                email: self.admin_email,
                password: self.admin_password,
            }),
        }
    }
}

/// The two-slot login gate.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<User>,
    pending: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn pending(&self) -> Option<&User> {
        self.pending.as_ref()
    }

    /// Checks credentials against the user directory. The username match is
    /// case-insensitive and trimmed; the password matches either the stored
    /// value or the role's demo default. Unknown user and wrong password
    /// produce the same error.
    pub fn login(
        &mut self,
        state: Option<&SchoolState>,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, AuthError> {
        let state = state.ok_or(AuthError::DirectoryUnavailable)?;
        let user = state
            .find_user(username)
            .ok_or(AuthError::InvalidCredentials)?;

        let candidate = password.trim();
        let stored_match = user.password.as_deref().is_some_and(|p| p == candidate);
        let default_match = default_password(&user.role).is_some_and(|p| p == candidate);
        if !stored_match && !default_match {
            return Err(AuthError::InvalidCredentials);
        }

        if user.must_change_password {
            info!(username = %user.username, "login held for mandatory password change");
            self.pending = Some(user.clone());
            Ok(LoginOutcome::PasswordChangeRequired(user.clone()))
        } else {
            info!(username = %user.username, role = %user.role, "login");
            self.current = Some(user.clone());
            Ok(LoginOutcome::LoggedIn(user.clone()))
        }
    }

    /// Completes a mandatory password change through the store. The pending
    /// user is promoted only when the clearing mutation succeeds; on failure
    /// they stay pending (and un-authenticated) so the flow can be retried.
    pub async fn complete_password_change(
        &mut self,
        store: &SyncStore,
        request: &ChangePasswordRequest,
    ) -> Result<User, SessionError> {
        request
            .validate()
            .map_err(|e| SessionError::InvalidRequest(e.to_string()))?;
        let pending = self.pending.clone().ok_or(SessionError::NothingPending)?;

        let action = format!(
            "Update user '{}': set password to '{}' and set mustChangePassword to false.",
            pending.username, request.new_password
        );
        store.dispatch(&action).await.map_err(SessionError::Mutation)?;

        let mut user = pending;
        user.must_change_password = false;
        user.password = Some(request.new_password.clone());
        self.pending = None;
        self.current = Some(user.clone());
        info!(username = %user.username, "password change completed, user promoted");
        Ok(user)
    }

    /// After registration, adopt the generated principal account as the
    /// authenticated user.
    pub fn adopt_principal(&mut self, state: &SchoolState) -> Option<User> {
        let principal = state
            .users
            .iter()
            .find(|u| u.role == Role::Principal)
            .cloned()?;
        self.pending = None;
        self.current = Some(principal.clone());
        Some(principal)
    }

    /// Clears both slots.
    pub fn logout(&mut self) {
        self.current = None;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_password_covers_every_recognized_role() {
        for token in Role::CANONICAL {
            assert!(default_password(&Role::parse(token)).is_some(), "{}", token);
        }
        assert!(default_password(&Role::Unrecognized("janitor".into())).is_none());
    }

    #[test]
    fn test_change_password_request_validation() {
        let ok = ChangePasswordRequest {
            new_password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
        };
        assert!(ok.validate().is_ok());

        let mismatch = ChangePasswordRequest {
            new_password: "hunter22".to_string(),
            confirm_password: "hunter23".to_string(),
        };
        assert!(mismatch.validate().is_err());

        let short = ChangePasswordRequest {
            new_password: "abc".to_string(),
            confirm_password: "abc".to_string(),
        };
        assert!(short.validate().is_err());
    }

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterSchoolRequest {
            school_name: "Hill College".to_string(),
            admin_name: "Jane Head".to_string(),
            admin_email: "jane@hill.example".to_string(),
            admin_password: "s3cret99".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = RegisterSchoolRequest {
            admin_email: "not-an-email".to_string(),
            ..ok
        };
        assert!(bad_email.validate().is_err());
    }
}
