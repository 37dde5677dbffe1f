//! Password hashing and verification
//!
//! Argon2id with a random salt per hash. Hashing is CPU-bound, so the async
//! helpers move it off the runtime worker threads.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash
///
/// # Errors
/// Returns an error if the stored hash cannot be parsed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash on the blocking pool
    ///
    /// # Errors
    /// Returns an error if hashing fails or the blocking task is cancelled
    pub async fn hash(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(AppError::internal)?
    }

    /// Verify on the blocking pool; a mismatch is `InvalidCredentials`
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the password doesn't match
    pub async fn verify_or_error(&self, password: &str, hash: &str) -> Result<(), AppError> {
        let (password, hash) = (password.to_owned(), hash.to_owned());
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(AppError::internal)??;

        if matches {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let password = "password123";
        let hash = hash_password(password).unwrap();

        assert!(hash.starts_with("$argon2"));
        // Different salt every time
        assert_ne!(hash, hash_password(password).unwrap());
    }

    #[test]
    fn test_verify_password() {
        let hash = hash_password("password123").unwrap();
        assert!(verify_password("password123", &hash).unwrap());
        assert!(!verify_password("password124", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(verify_password("password123", "not-a-hash").is_err());
    }

    #[tokio::test]
    async fn test_service_round_trip() {
        let service = PasswordService::new();
        let hash = service.hash("password123").await.unwrap();

        assert!(service.verify_or_error("password123", &hash).await.is_ok());
        assert!(matches!(
            service.verify_or_error("wrong", &hash).await,
            Err(AppError::InvalidCredentials)
        ));
    }
}
