#![no_main]

use libfuzzer_sys::fuzz_target;
use player_crypto::{sym_open, SealedMessage};

const KEY: &str = "AAAAAAAAAAAAAAAAAAAAAA==";

fuzz_target!(|data: &str| {
    if let Ok(sealed) = SealedMessage::try_from(data) {
        // Parsed messages must survive a round trip through text
        let reparsed = SealedMessage::try_from(sealed.to_string().as_str());
        assert_eq!(reparsed.ok(), Some(sealed.clone()));

        let _ = sym_open(KEY, &sealed);
    }
});
