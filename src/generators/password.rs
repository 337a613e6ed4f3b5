// src/generators/password.rs
use thiserror::Error;

use crate::charset::CharClass;
use crate::models::GenerationPolicy;
use crate::random::RandomSource;

/// Hard cap on requested password length.
pub const MAX_PASSWORD_LENGTH: usize = 128;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("at least one character class must be enabled")]
    NoClassEnabled,

    #[error("length {length} cannot cover {classes} enabled classes")]
    LengthTooShort { length: usize, classes: usize },

    #[error("length {0} exceeds the maximum of {MAX_PASSWORD_LENGTH}")]
    LengthTooLong(usize),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Constrained random password generator.
///
/// Every enabled class is guaranteed at least one character via a dedicated
/// draw from that class's own alphabet; the rest of the password is drawn
/// from the union alphabet and the whole buffer is Fisher-Yates shuffled so
/// the guaranteed characters hold no predictable positions.
///
/// The alternative strategy (sample from the union alphabet and retry until
/// every class is represented) produces the same distribution of accepted
/// outputs but has unbounded worst-case time; the guaranteed-slot approach
/// always terminates in one pass.
pub struct PasswordGenerator {
    rng: RandomSource,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self {
            rng: RandomSource::new(),
        }
    }

    /// Build a generator over a specific random source.
    pub fn with_source(rng: RandomSource) -> Self {
        Self { rng }
    }

    /// Generate a password satisfying `policy`.
    ///
    /// Output is exactly `policy.length` bytes long and contains at least one
    /// character from every enabled class. When `length == classes.len()` the
    /// output is exactly the shuffled guaranteed set, one character per class.
    pub fn generate(&mut self, policy: &GenerationPolicy) -> Result<String> {
        if policy.classes.is_empty() {
            return Err(GeneratorError::NoClassEnabled);
        }
        if policy.length < policy.class_count() {
            return Err(GeneratorError::LengthTooShort {
                length: policy.length,
                classes: policy.class_count(),
            });
        }
        if policy.length > MAX_PASSWORD_LENGTH {
            return Err(GeneratorError::LengthTooLong(policy.length));
        }

        // Stable class order keeps the union alphabet reproducible; the draws
        // themselves stay uniformly random.
        let mut pool: Vec<u8> = Vec::new();
        let mut chars: Vec<u8> = Vec::with_capacity(policy.length);

        for class in CharClass::all() {
            if policy.classes.contains(&class) {
                let alphabet = class.alphabet();
                pool.extend_from_slice(alphabet);
                chars.push(alphabet[self.rng.index(alphabet.len())]);
            }
        }

        for _ in chars.len()..policy.length {
            chars.push(pool[self.rng.index(pool.len())]);
        }

        self.rng.shuffle(&mut chars);

        log::debug!(
            "generated {}-char password over {} classes (csprng: {})",
            policy.length,
            policy.class_count(),
            self.rng.is_csprng()
        );

        // All alphabets are ASCII, so the buffer is valid UTF-8.
        Ok(String::from_utf8(chars).expect("password bytes are ASCII"))
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_classes(length: usize) -> GenerationPolicy {
        GenerationPolicy {
            length,
            classes: CharClass::all().into_iter().collect(),
        }
    }

    #[test]
    fn output_has_requested_length() {
        let mut gen = PasswordGenerator::new();
        for length in [4, 8, 16, 30, MAX_PASSWORD_LENGTH] {
            let pw = gen.generate(&all_classes(length)).unwrap();
            assert_eq!(pw.len(), length);
        }
    }

    #[test]
    fn every_enabled_class_is_represented() {
        let mut gen = PasswordGenerator::new();
        for _ in 0..50 {
            let pw = gen.generate(&all_classes(8)).unwrap();
            for class in CharClass::all() {
                assert!(
                    pw.bytes().any(|b| class.contains(b)),
                    "missing {class} in {pw:?}"
                );
            }
        }
    }

    #[test]
    fn minimal_length_yields_exactly_one_char_per_class() {
        let mut gen = PasswordGenerator::new();
        for _ in 0..50 {
            let pw = gen.generate(&all_classes(4)).unwrap();
            for class in CharClass::all() {
                assert_eq!(
                    pw.bytes().filter(|&b| class.contains(b)).count(),
                    1,
                    "class {class} not represented exactly once in {pw:?}"
                );
            }
        }
    }

    #[test]
    fn single_class_output_stays_in_alphabet() {
        let mut gen = PasswordGenerator::new();
        let policy = GenerationPolicy::new(12).with(CharClass::Digit);
        for _ in 0..20 {
            let pw = gen.generate(&policy).unwrap();
            assert!(pw.bytes().all(|b| CharClass::Digit.contains(b)), "{pw:?}");
        }
    }

    #[test]
    fn no_class_is_rejected() {
        let mut gen = PasswordGenerator::new();
        let result = gen.generate(&GenerationPolicy::new(16));
        assert!(matches!(result, Err(GeneratorError::NoClassEnabled)));
    }

    #[test]
    fn length_below_class_count_is_rejected() {
        let mut gen = PasswordGenerator::new();
        let result = gen.generate(&all_classes(3));
        assert!(matches!(
            result,
            Err(GeneratorError::LengthTooShort {
                length: 3,
                classes: 4
            })
        ));
    }

    #[test]
    fn oversized_length_is_rejected() {
        let mut gen = PasswordGenerator::new();
        let result = gen.generate(&all_classes(MAX_PASSWORD_LENGTH + 1));
        assert!(matches!(result, Err(GeneratorError::LengthTooLong(_))));
    }
}
