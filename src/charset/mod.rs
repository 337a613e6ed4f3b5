// src/charset/mod.rs
use serde::{Deserialize, Serialize};

/// The four character classes a password can draw from.
///
/// Alphabets are fixed, ASCII-only and disjoint across classes, so byte-wise
/// generation and membership checks are safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

impl CharClass {
    /// All classes, in the canonical order used to build working alphabets.
    pub const fn all() -> [CharClass; 4] {
        [
            CharClass::Upper,
            CharClass::Lower,
            CharClass::Digit,
            CharClass::Symbol,
        ]
    }

    /// The canonical alphabet for this class.
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Whether `byte` belongs to this class's alphabet.
    pub fn contains(self, byte: u8) -> bool {
        self.alphabet().contains(&byte)
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharClass::Upper => write!(f, "uppercase"),
            CharClass::Lower => write!(f, "lowercase"),
            CharClass::Digit => write!(f, "digits"),
            CharClass::Symbol => write!(f, "symbols"),
        }
    }
}
