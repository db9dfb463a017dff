use std::fmt;

/// Error type for login attempts against the in-memory user directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No state has been materialized yet, so there is no directory to
    /// check credentials against.
    DirectoryUnavailable,
    /// Unknown username or wrong password. Collapsed into one variant so the
    /// login prompt cannot be used to enumerate usernames.
    InvalidCredentials,
}

impl std::error::Error for AuthError {}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryUnavailable => {
                write!(f, "User data is not available. Please wait or retry.")
            }
            Self::InvalidCredentials => write!(f, "Invalid username or password."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid username or password."
        );
        assert!(
            AuthError::DirectoryUnavailable
                .to_string()
                .contains("not available")
        );
    }
}
