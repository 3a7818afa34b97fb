#![no_main]

use libfuzzer_sys::fuzz_target;
use player_crypto::{verify, verify_from_card};

fuzz_target!(|input: (&str, &str, &[u8])| {
    let (public_key, message, signature) = input;

    // Both entry points are fail-closed: any input yields a bool
    let _ = verify(public_key, message, signature);
    let _ = verify_from_card(public_key.as_bytes(), message, signature);
});
