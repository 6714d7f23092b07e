use serde::Deserialize;

use crate::forms::{FormError, FormResult, non_blank};

pub const REQUIRED_LOGIN_FIELDS: &str = "Username and password are required";

/// Body of `POST /auth/login`.
#[derive(Deserialize, Default)]
pub struct LoginPayload {
    pub username: Option<String>,
    pub password: Option<String>,
}

// Keeps the password out of logs.
impl std::fmt::Debug for LoginPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginPayload")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Credentials submitted for verification.
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginPayload {
    /// The username is trimmed, the password is taken verbatim.
    pub fn into_credentials(self) -> FormResult<LoginCredentials> {
        match (
            non_blank(self.username),
            self.password.filter(|password| !password.is_empty()),
        ) {
            (Some(username), Some(password)) => Ok(LoginCredentials { username, password }),
            _ => Err(FormError::MissingFields(REQUIRED_LOGIN_FIELDS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_not_trimmed() {
        let payload = LoginPayload {
            username: Some(" admin ".to_string()),
            password: Some(" secret ".to_string()),
        };

        let credentials = payload.into_credentials().unwrap();

        assert_eq!(credentials.username, "admin");
        assert_eq!(credentials.password, " secret ");
    }

    #[test]
    fn missing_password_is_rejected() {
        let payload = LoginPayload {
            username: Some("admin".to_string()),
            password: None,
        };

        assert!(payload.into_credentials().is_err());
    }

    #[test]
    fn debug_output_masks_password() {
        let payload = LoginPayload {
            username: Some("admin".to_string()),
            password: Some("hunter2".to_string()),
        };

        assert!(!format!("{payload:?}").contains("hunter2"));
    }
}
