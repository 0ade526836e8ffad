//! End-to-end mnemonic pipeline tests with deterministic entropy.

use seedkit_crypto::{
    generate_entropy, random_mnemonic_and_seed, to_seed, MnemonicEngine, MnemonicError, Wordlist,
};
use seedkit_nullables::NullEntropy;
use seedkit_types::{EntropyBits, Mnemonic};

#[test]
fn fixed_entropy_gives_reference_mnemonic() {
    let source = NullEntropy::fixed(&[0x80]);
    let (seed, mnemonic) =
        random_mnemonic_and_seed(EntropyBits::Bits128, &Wordlist::english(), "TREZOR", &source)
            .unwrap();
    assert_eq!(
        mnemonic.phrase(),
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage above"
    );
    assert_eq!(
        seed.to_hex(),
        "d71de856f81a8acc65e6fc851a38d4d7ec216fd0796d0a6827a3ad6ed5511a30\
         fa280f12eb2e47ed2ac03b5c462a0358d18d69fe4f985ec81778c1b370b652a8"
    );
    assert_eq!(source.calls(), 1);
}

#[test]
fn seed_is_recomputable_from_phrase() {
    let engine = MnemonicEngine::new(Wordlist::english(), Box::new(NullEntropy::constant(0x7F)));
    let (seed, mnemonic) = engine.generate(EntropyBits::Bits192, "extra").unwrap();
    assert_eq!(mnemonic.len(), 18);

    let reparsed = Mnemonic::from_phrase(&mnemonic.to_string());
    assert_eq!(to_seed(&reparsed, "extra").unwrap(), seed);
}

#[test]
fn successive_draws_differ_with_sequenced_source() {
    let engine = MnemonicEngine::new(
        Wordlist::english(),
        Box::new(NullEntropy::new(vec![vec![0x00], vec![0xFF]])),
    );
    let (_, first) = engine.generate(EntropyBits::Bits128, "").unwrap();
    let (_, second) = engine.generate(EntropyBits::Bits128, "").unwrap();
    assert_ne!(first, second);
    assert_eq!(second.words().last().map(String::as_str), Some("wrong"));
}

#[test]
fn exhausted_source_is_fatal() {
    let source = NullEntropy::failing("entropy pool exhausted");
    let err = generate_entropy(EntropyBits::Bits256, &source).unwrap_err();
    match err {
        MnemonicError::RandomSourceFailure(e) => assert_eq!(e.0, "entropy pool exhausted"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn every_strength_roundtrips_through_bip39_validation() {
    let engine = MnemonicEngine::new(Wordlist::english(), Box::new(NullEntropy::fixed(&[0x12, 0x34, 0x56])));
    for strength in EntropyBits::ALL {
        let (_, mnemonic) = engine.generate(strength, "").unwrap();
        assert_eq!(mnemonic.strength().unwrap(), strength);
        // The bip39 crate validates the checksum bits we appended.
        assert!(bip39::Mnemonic::parse_normalized(&mnemonic.phrase()).is_ok());
    }
}
