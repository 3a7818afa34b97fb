//! `PlayerCredentials` - nickname and smart-card PIN supplied by the player.
//!
//! Nothing in this crate interprets either value. The type exists so the
//! player layer can carry the PIN around without it showing up in logs.

use core::fmt::{self, Debug};

use zeroize::Zeroizing;

/// A player's nickname and smart-card PIN, both opaque text.
#[derive(Clone)]
pub struct PlayerCredentials {
    nickname: String,
    pin: Zeroizing<String>,
}

impl PlayerCredentials {
    /// Creates credentials from a nickname and a PIN.
    pub fn new(nickname: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            pin: Zeroizing::new(pin.into()),
        }
    }

    /// Returns the nickname.
    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Returns the PIN.
    #[must_use]
    pub fn pin(&self) -> &str {
        &self.pin
    }
}

impl Debug for PlayerCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerCredentials")
            .field("nickname", &self.nickname)
            .field("pin", &"[REDACTED]")
            .finish()
    }
}
