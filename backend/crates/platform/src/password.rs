//! Password Hashing and Verification
//!
//! Argon2id hashing with per-record salt, producing PHC-formatted hash
//! strings. Plaintext is zeroized on drop and never stored; the stored
//! value can only be compared through [`HashedPassword::verify`].

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Maximum password length in characters (bounds Argon2 input size)
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains control characters
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone` and redacts its `Debug` output, so the
/// plaintext cannot leak through accidental copies or logging.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct RawPassword(String);

impl RawPassword {
    /// Create a raw password from client input
    ///
    /// Unicode is normalized with NFKC before validation. Only shape
    /// constraints are enforced (non-empty, no control characters,
    /// bounded length); password strength policy is out of scope.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        for ch in normalized.chars() {
            if ch.is_control() {
                return Err(PasswordPolicyError::InvalidCharacter);
            }
        }

        Ok(Self(normalized))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with Argon2id and a fresh random salt
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(OsRng);

        let hash = Argon2::default()
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword(hash.to_string()))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawPassword(REDACTED)")
    }
}

/// Stored password hash (PHC string format)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Wrap a PHC string loaded from the store, validating its format
    pub fn from_phc(phc: String) -> Result<Self, PasswordHashError> {
        PasswordHash::new(&phc).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self(phc))
    }

    /// The PHC string for persistence
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// One-way comparison against a candidate password
    ///
    /// Returns `Ok(false)` on mismatch; errors only when the stored
    /// hash itself is unreadable.
    pub fn verify(&self, candidate: &RawPassword) -> Result<bool, PasswordHashError> {
        let parsed = PasswordHash::new(&self.0).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordHashError::HashingFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let password = RawPassword::new("secret".to_string()).unwrap();
        let hashed = password.hash().unwrap();

        assert!(hashed.verify(&password).unwrap());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let password = RawPassword::new("secret".to_string()).unwrap();
        let hashed = password.hash().unwrap();

        let wrong = RawPassword::new("wrong".to_string()).unwrap();
        assert!(!hashed.verify(&wrong).unwrap());
    }

    #[test]
    fn test_stored_value_is_not_plaintext() {
        let password = RawPassword::new("secret".to_string()).unwrap();
        let hashed = password.hash().unwrap();

        assert_ne!(hashed.as_str(), "secret");
        assert!(hashed.as_str().starts_with("$argon2id$"));
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let password = RawPassword::new("secret".to_string()).unwrap();
        let first = password.hash().unwrap();
        let second = password.hash().unwrap();

        assert_ne!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_empty_password_rejected() {
        assert_eq!(
            RawPassword::new("".to_string()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
        assert_eq!(
            RawPassword::new("   ".to_string()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
    }

    #[test]
    fn test_control_characters_rejected() {
        assert_eq!(
            RawPassword::new("pass\x00word".to_string()).unwrap_err(),
            PasswordPolicyError::InvalidCharacter
        );
    }

    #[test]
    fn test_overlong_password_rejected() {
        let long = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        assert!(matches!(
            RawPassword::new(long).unwrap_err(),
            PasswordPolicyError::TooLong { .. }
        ));
    }

    #[test]
    fn test_invalid_phc_rejected() {
        assert!(matches!(
            HashedPassword::from_phc("not a phc string".to_string()),
            Err(PasswordHashError::InvalidHashFormat)
        ));
    }
}
