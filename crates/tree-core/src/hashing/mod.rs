//! Hashing y canonicalización JSON para fingerprints de reportes.

pub mod canonical_json;
pub mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::{hash_str, hash_value};
