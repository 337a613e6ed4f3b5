// tests/toolkit.rs
//! End-to-end flow over the public API: generate under a policy, then score.

use passguard::{
    CharClass, GenerationPolicy, GeneratorError, PasswordGenerator, StrengthCategory,
    StrengthEstimator,
};

#[test]
fn generated_passwords_satisfy_their_policy_and_score_well() {
    let mut generator = PasswordGenerator::new();
    let estimator = StrengthEstimator::new();
    let policy = GenerationPolicy::default();

    for _ in 0..20 {
        let password = generator.generate(&policy).unwrap();
        assert_eq!(password.len(), 16);
        for class in CharClass::all() {
            assert!(password.bytes().any(|b| class.contains(b)));
        }

        // 16 chars over all four classes sits far above the day threshold.
        let report = estimator.evaluate(&password);
        assert_eq!(report.category, StrengthCategory::VeryStrong);
    }
}

#[test]
fn partial_policies_only_use_enabled_classes() {
    let mut generator = PasswordGenerator::new();
    let policy = GenerationPolicy::new(12)
        .with(CharClass::Lower)
        .with(CharClass::Digit);

    for _ in 0..20 {
        let password = generator.generate(&policy).unwrap();
        assert!(password
            .bytes()
            .all(|b| CharClass::Lower.contains(b) || CharClass::Digit.contains(b)));
        assert!(password.bytes().any(|b| CharClass::Lower.contains(b)));
        assert!(password.bytes().any(|b| CharClass::Digit.contains(b)));
    }
}

#[test]
fn invalid_policies_are_rejected_before_any_drawing() {
    let mut generator = PasswordGenerator::new();

    let empty = GenerationPolicy::new(16);
    assert!(matches!(
        generator.generate(&empty),
        Err(GeneratorError::NoClassEnabled)
    ));

    let cramped = GenerationPolicy::new(1)
        .with(CharClass::Lower)
        .with(CharClass::Digit);
    assert!(matches!(
        generator.generate(&cramped),
        Err(GeneratorError::LengthTooShort { .. })
    ));
}
