//! Short codes players type to find a game.

use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::GameRng;
use crate::error::ParseError;

/// Characters a code may contain. Omits `I`, `O`, `0` and `1`.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Characters per code.
pub const CODE_LENGTH: usize = 4;

/// Number of distinct codes.
pub const CODE_SPACE: usize = CODE_ALPHABET.len().pow(CODE_LENGTH as u32);

/// Random draws before `generate` walks the code space in order.
const RANDOM_ATTEMPTS: usize = 64;

/// A four-character game code such as `K7QX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct GameCode([u8; CODE_LENGTH]);

impl GameCode {
    /// Draw a random code that is not in `existing`.
    ///
    /// Returns `None` only when every code is taken. After a few clashing
    /// draws the first free code in alphabet order is used instead.
    #[must_use]
    pub fn generate(rng: &mut GameRng, existing: &FxHashSet<GameCode>) -> Option<Self> {
        if existing.len() >= CODE_SPACE {
            return None;
        }
        for _ in 0..RANDOM_ATTEMPTS {
            let code = Self::from_ordinal(rng.gen_range_usize(0..CODE_SPACE));
            if !existing.contains(&code) {
                return Some(code);
            }
        }
        debug!(taken = existing.len(), "Random game codes keep clashing; scanning");
        (0..CODE_SPACE)
            .map(Self::from_ordinal)
            .find(|code| !existing.contains(code))
    }

    /// The code at position `n` of the code space, first character most
    /// significant.
    fn from_ordinal(mut n: usize) -> Self {
        let base = CODE_ALPHABET.len();
        let mut bytes = [0u8; CODE_LENGTH];
        for byte in bytes.iter_mut().rev() {
            *byte = CODE_ALPHABET[n % base];
            n /= base;
        }
        GameCode(bytes)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ever built from CODE_ALPHABET.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl std::fmt::Display for GameCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameCode {
    type Err = ParseError;

    /// Parse user input: surrounding whitespace is ignored and letters are
    /// uppercased.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        let bytes: [u8; CODE_LENGTH] = normalized
            .as_bytes()
            .try_into()
            .map_err(|_| ParseError::GameCode(s.to_string()))?;
        if !bytes.iter().all(|b| CODE_ALPHABET.contains(b)) {
            return Err(ParseError::GameCode(s.to_string()));
        }
        Ok(GameCode(bytes))
    }
}

impl From<GameCode> for String {
    fn from(code: GameCode) -> Self {
        code.as_str().to_string()
    }
}

impl TryFrom<String> for GameCode {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
