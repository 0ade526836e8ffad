use proptest::prelude::*;

use seedkit_types::{EntropyBits, Mnemonic, VersionedPayload, WordIndex};

fn strength() -> impl Strategy<Value = EntropyBits> {
    prop::sample::select(EntropyBits::ALL.to_vec())
}

proptest! {
    /// EntropyBits converts to its bit count and back.
    #[test]
    fn entropy_bits_u32_roundtrip(s in strength()) {
        let bits: u32 = s.into();
        prop_assert_eq!(EntropyBits::try_from(bits).unwrap(), s);
    }

    /// Only the five BIP39 sizes are accepted.
    #[test]
    fn entropy_bits_rejects_everything_else(bits in 0u32..1024) {
        let allowed = [128, 160, 192, 224, 256].contains(&bits);
        prop_assert_eq!(EntropyBits::try_from(bits).is_ok(), allowed);
    }

    /// word_count and from_word_count agree.
    #[test]
    fn word_count_roundtrip(s in strength()) {
        prop_assert_eq!(EntropyBits::from_word_count(s.word_count()).unwrap(), s);
    }

    /// from_masked always lands in [0, 2047] and preserves the low 11 bits.
    #[test]
    fn word_index_masked_in_range(v in any::<u32>()) {
        let idx = WordIndex::from_masked(v);
        prop_assert!(idx.value() <= WordIndex::MAX);
        prop_assert_eq!(idx.value() as u32, v & 0x7FF);
    }

    /// from_phrase/phrase is stable once whitespace is normalized.
    #[test]
    fn phrase_roundtrip(words in prop::collection::vec("[a-z]{3,8}", 0..24)) {
        let m = Mnemonic::from_words(words.clone());
        let again = Mnemonic::from_phrase(&m.phrase());
        prop_assert_eq!(again.words(), &words[..]);
    }

    /// to_bytes is always one byte longer than the payload.
    #[test]
    fn versioned_payload_len(version in any::<u8>(), payload in prop::collection::vec(any::<u8>(), 0..64)) {
        let vp = VersionedPayload::new(version, payload.clone());
        let bytes = vp.to_bytes();
        prop_assert_eq!(bytes.len(), payload.len() + 1);
        prop_assert_eq!(bytes[0], version);
        prop_assert_eq!(&bytes[1..], &payload[..]);
    }
}
