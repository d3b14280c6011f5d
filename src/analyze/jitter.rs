use sha2::{Digest, Sha256};

pub const JITTER_SPAN: u64 = 11;
pub const JITTER_OFFSET: i32 = 5;

/// Deterministic offset in `-5..=5`: the first eight bytes of the SHA-256
/// digest of `text`, read big-endian, reduced modulo 11, minus 5.
pub fn jitter(text: &str) -> i32 {
    let digest = Sha256::digest(text.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let folded = u64::from_be_bytes(prefix) % JITTER_SPAN;
    // folded < 11, the cast cannot truncate
    folded as i32 - JITTER_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_is_stable_for_same_text() {
        let text = "organic cotton bag plastic-free, compostable";
        assert_eq!(jitter(text), jitter(text));
        assert_eq!(jitter(" "), jitter(&String::from(" ")));
    }

    #[test]
    fn jitter_stays_within_bounds() {
        for idx in 0..500 {
            let value = jitter(&format!("product #{idx} with glass lid"));
            assert!((-5..=5).contains(&value), "jitter {value} out of range");
        }
    }

    #[test]
    fn jitter_varies_across_texts() {
        let distinct = (0..200)
            .map(|idx| jitter(&format!("sample {idx}")))
            .collect::<std::collections::BTreeSet<_>>();
        assert!(distinct.len() > 5, "expected spread, got {distinct:?}");
    }
}
