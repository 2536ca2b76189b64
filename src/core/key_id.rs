//! Public-key identifiers.
//!
//! The server keys each record by the SHA-256 of `<n>:<e>`, both written as
//! lowercase hex without leading zeros. Recomputing it shows whether a
//! record's key material still matches the hash it is filed under.

use crate::constants;
use crate::models::record::CredentialRecord;
use sha2::{Digest, Sha256};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyIdStatus {
    Verified,
    Mismatch { computed: String },
    Unverifiable(String),
}

impl fmt::Display for KeyIdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyIdStatus::Verified => write!(f, "verified"),
            KeyIdStatus::Mismatch { computed } => write!(f, "MISMATCH (computed {})", computed),
            KeyIdStatus::Unverifiable(reason) => write!(f, "cannot verify ({})", reason),
        }
    }
}

/// Compute the identifier for a key pair given as hex strings.
/// Returns `None` when either component is not a hex integer.
pub fn public_key_id(n_hex: &str, e_hex: &str) -> Option<String> {
    let n = canonical_hex(n_hex)?;
    let e = canonical_hex(e_hex)?;
    let hash = Sha256::digest(format!("{}:{}", n, e).as_bytes());
    Some(format!("{:064x}", hash))
}

/// Check a record's hash against its key material.
pub fn verify(record: &CredentialRecord) -> KeyIdStatus {
    let Some(n) = record.get(constants::PROP_PUBLIC_KEY_N) else {
        return KeyIdStatus::Unverifiable(format!("missing {}", constants::PROP_PUBLIC_KEY_N));
    };
    let Some(e) = record.get(constants::PROP_PUBLIC_KEY_E) else {
        return KeyIdStatus::Unverifiable(format!("missing {}", constants::PROP_PUBLIC_KEY_E));
    };
    match public_key_id(n, e) {
        Some(computed) if computed.eq_ignore_ascii_case(&record.hash) => KeyIdStatus::Verified,
        Some(computed) => KeyIdStatus::Mismatch { computed },
        None => KeyIdStatus::Unverifiable("key material is not hex".to_string()),
    }
}

/// Normalise a signed hex integer: lowercase, no leading zeros, no `+`.
fn canonical_hex(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digits = digits.trim_start_matches('0').to_ascii_lowercase();
    if digits.is_empty() {
        return Some("0".to_string());
    }
    Some(if negative { format!("-{}", digits) } else { digits })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID_C0FFEE_10001: &str =
        "2606cfdd418aae7f70d3d63320e87b1c32e400f3f9369d26f648704e815b1f3b";

    fn record(hash: &str, n: Option<&str>, e: Option<&str>) -> CredentialRecord {
        let mut record = CredentialRecord::new(hash);
        if let Some(n) = n {
            record.properties.insert("publicKeyN".into(), n.into());
        }
        if let Some(e) = e {
            record.properties.insert("publicKeyE".into(), e.into());
        }
        record
    }

    #[test]
    fn test_public_key_id() {
        assert_eq!(
            public_key_id("a", "3").as_deref(),
            Some("579d74b93fe3eaa13a678bce79050a96c44c30ba32da6e13c53f7a119cfe4df8")
        );
    }

    #[test]
    fn test_public_key_id_normalises_case_and_zeros() {
        assert_eq!(public_key_id("00C0FFEE", "+010001").as_deref(), Some(ID_C0FFEE_10001));
    }

    #[test]
    fn test_public_key_id_rejects_non_hex() {
        assert_eq!(public_key_id("xyz", "3"), None);
        assert_eq!(public_key_id("", "3"), None);
    }

    #[test]
    fn test_canonical_hex() {
        assert_eq!(canonical_hex("000").as_deref(), Some("0"));
        assert_eq!(canonical_hex("-0").as_deref(), Some("0"));
        assert_eq!(canonical_hex("-0Ab").as_deref(), Some("-ab"));
    }

    #[test]
    fn test_verify_match() {
        let r = record(ID_C0FFEE_10001, Some("c0ffee"), Some("10001"));
        assert_eq!(verify(&r), KeyIdStatus::Verified);
    }

    #[test]
    fn test_verify_mismatch() {
        let r = record("deadbeef", Some("c0ffee"), Some("10001"));
        assert_eq!(
            verify(&r),
            KeyIdStatus::Mismatch {
                computed: ID_C0FFEE_10001.to_string()
            }
        );
    }

    #[test]
    fn test_verify_missing_component() {
        let r = record("h", Some("c0ffee"), None);
        assert_eq!(verify(&r).to_string(), "cannot verify (missing publicKeyE)");
    }

    #[test]
    fn test_verify_not_hex() {
        let r = record("h", Some("zz"), Some("3"));
        assert_eq!(verify(&r).to_string(), "cannot verify (key material is not hex)");
    }
}
