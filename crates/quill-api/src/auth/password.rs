//! Password hashing.

use bcrypt::{BcryptError, DEFAULT_COST, hash, verify};

/// Hashes a plaintext password for storage.
pub fn hash_password(plain: &str) -> Result<String, BcryptError> {
    hash(plain, DEFAULT_COST)
}

/// Checks a plaintext password against a stored hash.
///
/// An unparseable hash (including the empty hash carried by seeded
/// demo users) counts as a mismatch, not an error.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    verify(plain, hashed).unwrap_or(false)
}
