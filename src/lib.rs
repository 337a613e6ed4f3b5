// src/lib.rs
//! passguard: password generation, strength estimation and breach checking.
//!
//! Three independent, stateless flows:
//! - [`generators::PasswordGenerator`] produces random passwords under a
//!   [`models::GenerationPolicy`], guaranteeing coverage of every enabled
//!   character class.
//! - [`strength::StrengthEstimator`] converts any password into an
//!   entropy-based strength category and an estimated crack time.
//! - [`breach::BreachChecker`] checks breach membership over a k-anonymity
//!   hash-prefix range API without ever sending the plaintext or the full
//!   digest.

pub mod breach;
pub mod charset;
pub mod cli;
pub mod core;
pub mod generators;
pub mod models;
pub mod random;
pub mod strength;

pub use breach::{BreachChecker, BreachError};
pub use charset::CharClass;
pub use crate::core::config::Config;
pub use generators::{GeneratorError, PasswordGenerator};
pub use models::{BreachReport, GenerationPolicy, StrengthReport};
pub use random::RandomSource;
pub use strength::{StrengthCategory, StrengthEstimator};
