//! Password hashing for the auth endpoints.
//!
//! Passwords are bcrypt-hashed before they reach the store and verified
//! against the stored hash on login. The hash never leaves the process.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::errors::AppError;

/// Hash a plaintext password for at-rest storage.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Check a plaintext password against a stored bcrypt hash.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    Ok(verify(password, stored_hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verify_roundtrip() {
        let hashed = hash_password("correct-horse").unwrap();
        assert_ne!(hashed, "correct-horse");
        assert!(verify_password("correct-horse", &hashed).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hashed = hash_password("correct-horse").unwrap();
        assert!(!verify_password("battery-staple", &hashed).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same-input").unwrap();
        let second = hash_password("same-input").unwrap();
        assert_ne!(first, second);
    }
}
