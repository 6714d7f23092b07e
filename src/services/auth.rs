//! Admin credential checks backed by Argon2id PHC hashes.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::config::AdminCredentials;
use crate::forms::auth::LoginPayload;
use crate::services::{ServiceError, ServiceResult};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Hash `password` with Argon2id and a random salt, returning the PHC string.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// `Ok(false)` on a mismatch, `Err` only when `hash` cannot be parsed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Check a login payload against the configured administrator.
///
/// Returns the username to store in the session.
pub fn authenticate(admin: &AdminCredentials, payload: LoginPayload) -> ServiceResult<String> {
    let credentials = payload.into_credentials()?;

    // The hash is checked even for an unknown username.
    let password_ok = verify_password(&credentials.password, &admin.password_hash)
        .map_err(|err| ServiceError::Internal(format!("password hash: {err}")))?;

    if password_ok && credentials.username == admin.username {
        Ok(credentials.username)
    } else {
        Err(ServiceError::Unauthorized)
    }
}
