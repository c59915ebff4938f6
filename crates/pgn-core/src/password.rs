//! Deterministic password derivation from normalized move text.
//!
//! The same move text and length always produce the same password, on any
//! platform: the output is a pure function of the SHA-256 digest of the
//! input and the two fixed character tables below.

use sha2::{Digest, Sha256};

/// Special characters eligible for the mandatory fourth class.
/// Order is part of the derivation contract — do not reorder.
pub const SPECIALS: &[u8; 14] = b"!@#$%^&*()_+-=";

/// Four reserved slots, one per mandated character class.
pub const MIN_LENGTH: usize = 4;

/// SHA-256 digest width. Hardcoded so the fill and shuffle indexing stays
/// fixed even if the hash backend were ever swapped.
const DIGEST_LEN: usize = 32;

/// Printable ASCII range 33..=126 has exactly 94 code points.
const PRINTABLE_RANGE: u8 = 94;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("password length must be at least {MIN_LENGTH}, got {requested}")]
    InvalidLength { requested: usize },

    /// The hash backend could not be invoked. The bundled pure-Rust
    /// SHA-256 never fails, so this is only produced by backends that can
    /// (e.g. a platform crypto API); callers still match on it.
    #[error("hash backend unavailable")]
    HashUnavailable,
}

/// Derive a printable password of exactly `length` characters from move
/// text. Guarantees at least one uppercase letter, one lowercase letter,
/// one digit and one character from [`SPECIALS`] for any `length >= 4`.
///
/// Empty move text is valid input — it derives from the digest of the
/// empty string.
pub fn derive_password(move_text: &str, length: usize) -> Result<String, PasswordError> {
    if length < MIN_LENGTH {
        return Err(PasswordError::InvalidLength { requested: length });
    }

    let digest = Sha256::digest(move_text.as_bytes());
    debug_assert_eq!(digest.len(), DIGEST_LEN);

    let mut chars: Vec<u8> = Vec::with_capacity(length);

    // One character per mandatory class, consuming digest[0..=3] in order.
    chars.push(b'A' + digest[0] % 26);
    chars.push(b'a' + digest[1] % 26);
    chars.push(b'0' + digest[2] % 10);
    chars.push(SPECIALS[digest[3] as usize % SPECIALS.len()]);

    // Fill the rest from the printable ASCII range, cycling the digest by
    // a running counter (not by the current output length).
    let mut i = MIN_LENGTH;
    while chars.len() < length {
        chars.push(33 + digest[i % DIGEST_LEN] % PRINTABLE_RANGE);
        i += 1;
    }

    // Fisher-Yates pass keyed by the digest itself, so the placement of
    // the four seeded characters is deterministic too.
    for i in (1..chars.len()).rev() {
        let j = digest[i % DIGEST_LEN] as usize % (i + 1);
        chars.swap(i, j);
    }

    chars.truncate(length);
    Ok(chars.into_iter().map(char::from).collect())
}
