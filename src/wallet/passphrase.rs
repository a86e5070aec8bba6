//! Passphrase generation
//!
//! A passphrase is 15 words from the BIP-39 English list. Each 32-bit random
//! word `x` yields three list indices by repeated division with carry:
//! `w1 = x mod 2048`, `w2 = (x / 2048 + w1) mod 2048`,
//! `w3 = (x / 2048² + w2) mod 2048`. The result is not a BIP-39 mnemonic
//! (no checksum) and is used verbatim as the key derivation input.

use bip39::Language;
use zeroize::Zeroizing;

use crate::crypto::entropy::{random_words, EntropySource};
use crate::error::{WavesError, WavesResult};

/// Random 32-bit words drawn per passphrase (160 bits)
pub const RANDOM_WORD_COUNT: usize = 5;

/// Words in a generated passphrase
pub const PASSPHRASE_WORD_COUNT: usize = RANDOM_WORD_COUNT * 3;

const WORD_COUNT: u32 = 2048;

/// Generate a fresh passphrase. Fails when the source has no entropy.
pub fn generate_passphrase(entropy: &dyn EntropySource) -> WavesResult<Zeroizing<String>> {
    let words = random_words::<RANDOM_WORD_COUNT>(entropy).ok_or_else(|| {
        WavesError::entropy_unavailable("Secure random source is unavailable")
    })?;
    let words = Zeroizing::new(words);
    Ok(passphrase_from_words(&words))
}

/// Deterministic mapping of random words to a passphrase
pub fn passphrase_from_words(words: &[u32; RANDOM_WORD_COUNT]) -> Zeroizing<String> {
    let list = Language::English.word_list();
    let mut phrase = Zeroizing::new(String::with_capacity(PASSPHRASE_WORD_COUNT * 9));

    for &x in words {
        let w1 = x % WORD_COUNT;
        let w2 = (x / WORD_COUNT + w1) % WORD_COUNT;
        let w3 = (x / WORD_COUNT / WORD_COUNT + w2) % WORD_COUNT;

        for index in [w1, w2, w3] {
            if !phrase.is_empty() {
                phrase.push(' ');
            }
            phrase.push_str(list[index as usize]);
        }
    }
    phrase
}

/// True when every whitespace-separated word is on the English list
pub fn is_wordlist_phrase(phrase: &str) -> bool {
    let mut words = phrase.split_whitespace().peekable();
    words.peek().is_some() && words.all(|w| Language::English.find_word(w).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::entropy::{FixedEntropy, NoEntropy, OsEntropy};
    use crate::error::ErrorCode;

    #[test]
    fn test_carry_reduction() {
        let phrase = passphrase_from_words(&[0, 1, 2047, 2048, u32::MAX]);
        assert_eq!(
            phrase.as_str(),
            "abandon abandon abandon ability ability ability zoo zoo zoo abandon ability ability zoo zone leisure"
        );
    }

    #[test]
    fn test_fixed_entropy_is_deterministic() {
        let phrase = generate_passphrase(&FixedEntropy::new(vec![1, 2, 3, 4])).unwrap();
        assert_eq!(
            phrase.as_str(),
            "dizzy equip evolve dizzy equip evolve dizzy equip evolve dizzy equip evolve dizzy equip evolve"
        );
    }

    #[test]
    fn test_generated_phrase_shape() {
        let phrase = generate_passphrase(&OsEntropy).unwrap();
        assert_eq!(phrase.split(' ').count(), PASSPHRASE_WORD_COUNT);
        assert!(is_wordlist_phrase(&phrase));
    }

    #[test]
    fn test_no_entropy_fails() {
        let err = generate_passphrase(&NoEntropy).unwrap_err();
        assert_eq!(err.code, ErrorCode::EntropyUnavailable);
    }

    #[test]
    fn test_wordlist_check() {
        assert!(is_wordlist_phrase("abandon zoo"));
        assert!(!is_wordlist_phrase("abandon zoomer"));
        assert!(!is_wordlist_phrase("   "));
    }
}
