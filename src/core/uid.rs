use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest. 128 bits is plenty of
/// collision resistance and keeps commands readable.
const UID_HEX_LEN: usize = 32;

/// Derive a stable identifier from arbitrary text.
///
/// Same text always yields the same identifier; distinct texts collide only
/// with negligible probability.
pub fn generate_uid_from_text(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut hex = String::with_capacity(UID_HEX_LEN);
    for byte in digest.iter().take(UID_HEX_LEN / 2) {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_is_deterministic() {
        assert_eq!(
            generate_uid_from_text("python train.py --seed 1"),
            generate_uid_from_text("python train.py --seed 1")
        );
    }

    #[test]
    fn uid_differs_for_different_text() {
        assert_ne!(
            generate_uid_from_text("python train.py --seed 1"),
            generate_uid_from_text("python train.py --seed 2")
        );
    }

    #[test]
    fn uid_is_lowercase_hex() {
        let uid = generate_uid_from_text("anything");
        assert_eq!(uid.len(), 32);
        assert!(uid.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
