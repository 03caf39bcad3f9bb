//! Cache key generation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Length of the encoded payload in a [`KeyStrategy::Truncated`] key.
pub const DEFAULT_KEY_LENGTH: usize = 32;

const PART_SEPARATOR: char = '\u{1f}';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub hash: String,
}

impl CacheKey {
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hash)
    }
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CacheKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// How the payload part of a key is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStrategy {
    /// Base64 of the payload cut to `max_len` characters. Payloads that share
    /// a long enough prefix map to the same key.
    Truncated { max_len: usize },
    /// Hex SHA-256 of the payload.
    Digest,
}

impl Default for KeyStrategy {
    fn default() -> Self {
        KeyStrategy::Truncated {
            max_len: DEFAULT_KEY_LENGTH,
        }
    }
}

/// Derives `"{operation}_{encoded payload}"` keys.
#[derive(Debug, Clone, Default)]
pub struct CacheKeyGenerator {
    strategy: KeyStrategy,
}

impl CacheKeyGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: KeyStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> KeyStrategy {
        self.strategy
    }

    /// Payload parts are joined with a unit separator before encoding so that
    /// `["ab", "c"]` and `["a", "bc"]` stay distinct.
    pub fn generate(&self, operation: &str, parts: &[&str]) -> CacheKey {
        let mut payload = String::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                payload.push(PART_SEPARATOR);
            }
            payload.push_str(part);
        }
        CacheKey::new(format!("{}_{}", operation, self.encode(&payload)))
    }

    fn encode(&self, payload: &str) -> String {
        match self.strategy {
            KeyStrategy::Truncated { max_len } => {
                let mut encoded = STANDARD.encode(payload.as_bytes());
                // base64 output is ASCII, so any byte index is a char boundary
                encoded.truncate(max_len);
                encoded
            }
            KeyStrategy::Digest => {
                let mut hasher = Sha256::new();
                hasher.update(payload.as_bytes());
                hasher
                    .finalize()
                    .iter()
                    .map(|b| format!("{:02x}", b))
                    .collect()
            }
        }
    }
}
