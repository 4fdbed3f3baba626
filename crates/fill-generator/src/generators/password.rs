//! Password hash generator.
//!
//! Every seeded user shares the same password, so the hash is a constant.

use sha2::{Digest, Sha256};

/// Plain-text password given to every seeded user.
pub const DEFAULT_PASSWORD: &str = "1234";

/// Hex SHA-256 digest of [`DEFAULT_PASSWORD`].
pub const DEFAULT_PASSWORD_HASH: &str =
    "03ac674216f3e15c761ee1a5e255f067953623c8b388b4459e13f978d7c846f4";

/// Hash a password as lowercase hex SHA-256.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_password_hash_matches_digest() {
        assert_eq!(hash_password(DEFAULT_PASSWORD), DEFAULT_PASSWORD_HASH);
    }

    #[test]
    fn test_hash_is_lowercase_hex() {
        let hash = hash_password("anything");
        assert_eq!(hash.len(), 64);
        assert!(hash
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
