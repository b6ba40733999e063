use genics_core::constants::ALPHABET_LEN;
use genics_core::models::CipherSet;

use crate::reduce::reduce_master;

/// Compute the four cipher values for one identity string.
///
/// Case-insensitive; non-letter characters are ignored. An identity with no
/// ASCII letters maps to [`CipherSet::ZERO`] — this is the graceful path for
/// malformed identities, never an error.
pub fn cipher_of(text: &str) -> CipherSet {
    let mut ordinal = 0u32;
    let mut reverse = 0u32;

    for c in text.chars() {
        if !c.is_ascii_alphabetic() {
            continue;
        }
        let pos = (c.to_ascii_lowercase() as u32) - ('a' as u32) + 1;
        ordinal += pos;
        reverse += ALPHABET_LEN + 1 - pos;
    }

    CipherSet {
        ordinal,
        reduction: reduce_master(ordinal),
        reverse,
        reverse_reduction: reduce_master(reverse),
    }
}

/// Cipher over the combined subject + affiliation + role identity, capturing
/// the joint signal of who the entity is in context.
pub fn composite_cipher(subject: &str, affiliation: &str, role: &str) -> CipherSet {
    cipher_of(&format!("{subject} {affiliation} {role}"))
}
