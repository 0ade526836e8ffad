#![no_main]

use libfuzzer_sys::fuzz_target;
use seedkit_crypto::base58check;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(decoded) = base58check::decode(text) {
            let _ = base58check::verify(&decoded);
        }
    }

    if let Some((&version, payload)) = data.split_first() {
        let encoded = base58check::encode(version, payload);
        let decoded = base58check::decode_verified(&encoded).unwrap();
        assert_eq!(decoded.version, version);
        assert_eq!(decoded.payload, payload);
    }
});
