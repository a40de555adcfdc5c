//! Credential hashing with Argon2. Registration stores only the PHC-format
//! digest; the plain password never leaves the handler.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Hash error: {0}")]
    Hash(String),
}

/// Derives a PHC-format Argon2 digest from a plain password.
pub fn hash_password(password: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CredentialError::Hash(e.to_string()))
}

/// Checks a plain password against a stored digest.
pub fn verify_password(password: &str, digest: &str) -> Result<bool, CredentialError> {
    let parsed = PasswordHash::new(digest).map_err(|e| CredentialError::Hash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
