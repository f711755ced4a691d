//! Hashing helpers

use sha2::{Digest, Sha256};

/// SHA-256 of a UTF-8 string as lowercase hex (used for migration checksums)
pub fn sha256_hex(data: &str) -> String {
    hex::encode(Sha256::digest(data.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex_known_vectors() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex("hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_sha256_hex_differs_per_schema() {
        assert_ne!(sha256_hex("CREATE TABLE a (x)"), sha256_hex("CREATE TABLE a (y)"));
        assert_eq!(sha256_hex("pokemon").len(), 64);
    }
}
