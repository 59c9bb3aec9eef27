//! Request signature scheme.
//!
//! The signature is `hex(sha256(canonical + secret))` where the canonical
//! string is `public_id={id}&timestamp={ts}`. Parameter order is fixed and no
//! other parameters participate.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Timestamp and signature attached to a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Authorization {
    /// Unix seconds, decimal
    pub timestamp: String,
    /// Lowercase hex SHA-256
    pub signature: String,
}

impl Authorization {
    /// Sign `resource_id` at `timestamp` (unix seconds) with `secret`.
    pub fn derive(resource_id: &str, timestamp: i64, secret: &str) -> Self {
        let timestamp = timestamp.to_string();
        let signature = sign(&canonical_params(resource_id, &timestamp), secret);
        Self {
            timestamp,
            signature,
        }
    }
}

/// Build the exact string that gets hashed.
pub fn canonical_params(resource_id: &str, timestamp: &str) -> String {
    let mut params = String::with_capacity(resource_id.len() + timestamp.len() + 21);
    params.push_str("public_id=");
    params.push_str(resource_id);
    params.push_str("&timestamp=");
    params.push_str(timestamp);
    params
}

/// Hash `canonical` followed by `secret`.
pub fn sign(canonical: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}
