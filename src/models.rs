// src/models.rs
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::charset::CharClass;

/// What a single generation request asks for.
///
/// Built per request, never persisted. Validation (at least one class, length
/// large enough to cover every enabled class) happens in the generator, not
/// here, so callers can assemble a policy incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationPolicy {
    pub length: usize,
    pub classes: HashSet<CharClass>,
}

impl GenerationPolicy {
    /// A policy with the given length and no classes enabled yet.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            classes: HashSet::new(),
        }
    }

    /// Enable a character class.
    pub fn with(mut self, class: CharClass) -> Self {
        self.classes.insert(class);
        self
    }

    /// Number of enabled classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: 16,
            classes: CharClass::all().into_iter().collect(),
        }
    }
}

/// Strength verdict for a password.
///
/// Recomputed on every evaluation; the entropy figure is a heuristic, not a
/// cryptanalytic measure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthReport {
    pub category: crate::strength::StrengthCategory,
    pub crack_time: String,
    pub entropy_bits: f64,
}

/// Outcome of a k-anonymity breach lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreachReport {
    pub compromised: bool,
    pub count: u64,
}
