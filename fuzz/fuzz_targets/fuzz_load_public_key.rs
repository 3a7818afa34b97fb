#![no_main]

use libfuzzer_sys::fuzz_target;
use player_crypto::load_public_key;

fuzz_target!(|data: &str| {
    // Arbitrary text must be rejected, never panic
    let _ = load_public_key(data);
});
