#![no_main]

use libfuzzer_sys::fuzz_target;
use seedkit_crypto::{append_checksum, mnemonic_from_entropy, word_indices, Wordlist};
use seedkit_types::{Entropy, Mnemonic};

fuzz_target!(|data: &[u8]| {
    let Ok(entropy) = Entropy::from_bytes(data) else {
        return;
    };
    let wordlist = Wordlist::english();

    let indices = word_indices(&append_checksum(&entropy));
    assert_eq!(indices.len(), entropy.strength().word_count());

    let mnemonic = mnemonic_from_entropy(&entropy, &wordlist);
    assert_eq!(mnemonic.len(), indices.len());
    for (word, index) in mnemonic.words().iter().zip(&indices) {
        assert_eq!(wordlist.index_of(word), Some(*index));
    }

    let reparsed = Mnemonic::from_phrase(&mnemonic.phrase());
    assert_eq!(reparsed.words(), mnemonic.words());
});
