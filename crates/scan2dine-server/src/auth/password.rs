use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::utils::error::DomainError;

/// Argon2id hashing for owner passwords.
pub struct PasswordService;

impl PasswordService {
    pub fn hash_password(password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))
    }

    pub fn verify_password(password: &str, hash: &str) -> Result<bool, DomainError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = PasswordService::hash_password("hunter2-secret").unwrap();
        assert_ne!(hash, "hunter2-secret");
        assert!(PasswordService::verify_password("hunter2-secret", &hash).unwrap());
        assert!(!PasswordService::verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let first = PasswordService::hash_password("same-password").unwrap();
        let second = PasswordService::hash_password("same-password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let err = PasswordService::verify_password("anything", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, DomainError::PasswordHashError(_)));
    }
}
