#![no_main]

use libfuzzer_sys::fuzz_target;
use player_crypto::{load_private_key, LEGACY_PASSWORD};

fuzz_target!(|data: &str| {
    let _ = load_private_key(data, LEGACY_PASSWORD);
});
