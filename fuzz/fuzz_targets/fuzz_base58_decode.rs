#![no_main]

use libfuzzer_sys::fuzz_target;
use seedkit_crypto::base58;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary text must never panic.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(bytes) = base58::decode(text) {
            // Base58 strings are canonical: leading '1's map to zero bytes
            // one-to-one and the rest has no leading zero digit.
            assert_eq!(base58::encode(&bytes), text);
        }
    }

    // Arbitrary bytes always roundtrip.
    let encoded = base58::encode(data);
    assert!(base58::is_valid(&encoded));
    assert_eq!(base58::decode(&encoded).unwrap(), data);
});
