//! Content Hash Value Object
//!
//! SHA-256 digest used to name compressed cache artifacts.

use std::fmt;

/// Content hash value object
///
/// Wraps the lowercase hex SHA-256 of some content. Cache artifact names
/// use the bare hex form, so unlike a lockfile hash there is no prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Length of a hex SHA-256 digest
    pub const HEX_LEN: usize = 64;

    /// Compute the hash of a string
    pub fn from_content(content: &str) -> Self {
        Self::from_bytes(content.as_bytes())
    }

    /// Compute the hash of raw bytes
    pub fn from_bytes(content: &[u8]) -> Self {
        use sha2::{Digest, Sha256};
        Self(format!("{:x}", Sha256::digest(content)))
    }

    /// Hash of several parts concatenated without a separator
    pub fn from_parts<'a>(parts: impl IntoIterator<Item = &'a str>) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part.as_bytes());
        }
        Self(format!("{:x}", hasher.finalize()))
    }

    /// The hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `len` hex characters, for short suffixes
    pub fn short(&self, len: usize) -> &str {
        &self.0[..len.min(self.0.len())]
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
