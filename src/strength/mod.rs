// src/strength/mod.rs
pub mod phrases;

use serde::{Deserialize, Serialize};

use crate::models::StrengthReport;

/// Assumed attacker throughput: 100 billion guesses per second, an offline
/// high-speed attack.
pub const DEFAULT_GUESS_RATE: f64 = 1e11;

/// Substrings that mark a password as trivially guessable no matter what the
/// entropy math says.
const COMMON_PATTERNS: [&str; 3] = ["password", "123456", "qwerty"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthCategory {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl std::fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthCategory::VeryWeak => write!(f, "Very Weak"),
            StrengthCategory::Weak => write!(f, "Weak"),
            StrengthCategory::Medium => write!(f, "Medium"),
            StrengthCategory::Strong => write!(f, "Strong"),
            StrengthCategory::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

/// Entropy-based strength model.
///
/// Deliberately approximate: effective alphabet size from which character
/// classes are present, times length, plus a small bonus for distinct
/// characters. This is a usability heuristic, not a cryptographic guarantee,
/// and in particular it is not a zxcvbn-style pattern cracker.
pub struct StrengthEstimator {
    guess_rate: f64,
}

impl StrengthEstimator {
    pub fn new() -> Self {
        Self {
            guess_rate: DEFAULT_GUESS_RATE,
        }
    }

    /// Override the assumed attacker throughput (guesses per second).
    pub fn with_guess_rate(guess_rate: f64) -> Self {
        Self { guess_rate }
    }

    /// Evaluate a password. Total: any string, including empty, has a verdict.
    pub fn evaluate(&self, password: &str) -> StrengthReport {
        let entropy_bits = entropy_bits(password);
        let seconds = (2f64).powf(entropy_bits) / self.guess_rate;

        let (mut category, mut crack_time) = categorize(seconds);

        // Common-pattern detection trumps the entropy math.
        let lowered = password.to_lowercase();
        if COMMON_PATTERNS.iter().any(|p| lowered.contains(p)) {
            category = StrengthCategory::VeryWeak;
            crack_time = "Instantly".to_string();
        }

        StrengthReport {
            category,
            crack_time,
            entropy_bits,
        }
    }
}

impl Default for StrengthEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Estimated entropy in bits: `length * log2(pool) + distinct * 0.5`.
///
/// Pool size sums fixed per-class constants (26 lower, 26 upper, 10 digit,
/// 32 symbol) over the classes actually present; an empty password gets a
/// pool of 1 so the logarithm stays defined.
fn entropy_bits(password: &str) -> f64 {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let mut pool = 0u32;
    if has_lower {
        pool += 26;
    }
    if has_upper {
        pool += 26;
    }
    if has_digit {
        pool += 10;
    }
    if has_symbol {
        pool += 32;
    }

    let distinct = {
        let mut chars: Vec<char> = password.chars().collect();
        chars.sort_unstable();
        chars.dedup();
        chars.len()
    };

    let length = password.chars().count() as f64;
    length * f64::from(pool.max(1)).log2() + distinct as f64 * 0.5
}

fn categorize(seconds: f64) -> (StrengthCategory, String) {
    if seconds < 1.0 {
        (StrengthCategory::VeryWeak, "Instantly".to_string())
    } else if seconds < 60.0 {
        (
            StrengthCategory::Weak,
            format!("{} seconds", seconds.round() as u64),
        )
    } else if seconds < 3600.0 {
        (
            StrengthCategory::Medium,
            format!("{} minutes", (seconds / 60.0).round() as u64),
        )
    } else if seconds < 86400.0 {
        (
            StrengthCategory::Strong,
            format!("{} hours", (seconds / 3600.0).round() as u64),
        )
    } else {
        (
            StrengthCategory::VeryStrong,
            format!("{} days+", (seconds / 86400.0).round() as u64),
        )
    }
}
