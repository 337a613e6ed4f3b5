// src/core/config.rs
use std::env;

use crate::strength::DEFAULT_GUESS_RATE;

/// Default base URL of the k-anonymity range API.
pub const DEFAULT_RANGE_API: &str = "https://api.pwnedpasswords.com";

// Configuration for the password toolkit
#[derive(Debug, Clone)]
pub struct Config {
    // Breach checking
    pub range_api_base: String,

    // Password generation
    pub default_length: usize,

    // Strength model
    pub guess_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            range_api_base: DEFAULT_RANGE_API.to_string(),
            default_length: 16,
            guess_rate: DEFAULT_GUESS_RATE,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(base) = env::var("PASSGUARD_RANGE_API") {
            if !base.is_empty() {
                config.range_api_base = base;
            }
        }

        if let Ok(length) = env::var("PASSGUARD_DEFAULT_LENGTH") {
            match length.parse::<usize>() {
                Ok(n) if n > 0 => config.default_length = n,
                _ => log::warn!("ignoring invalid PASSGUARD_DEFAULT_LENGTH: {length:?}"),
            }
        }

        if let Ok(rate) = env::var("PASSGUARD_GUESS_RATE") {
            match rate.parse::<f64>() {
                Ok(r) if r > 0.0 => config.guess_rate = r,
                _ => log::warn!("ignoring invalid PASSGUARD_GUESS_RATE: {rate:?}"),
            }
        }

        config
    }

    /// A config pointed at a specific range API base, defaults elsewhere.
    pub fn with_range_api(base: impl Into<String>) -> Self {
        Self {
            range_api_base: base.into(),
            ..Self::default()
        }
    }
}
