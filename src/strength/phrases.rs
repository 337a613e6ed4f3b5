// src/strength/phrases.rs
//! Wizard-themed verdict phrases, one pool per strength category.
//!
//! Pure display flavor for callers; picking a phrase is the only randomized
//! part of the strength flow and goes through the same [`RandomSource`] as
//! generation.

use crate::random::RandomSource;
use crate::strength::StrengthCategory;

const VERY_WEAK: [&str; 10] = [
    "This password would fail Magic 101!",
    "Even a goblin could crack this!",
    "Flimsier than a paper shield!",
    "About as secure as a wet tissue!",
    "A gust of wind could blow this away!",
    "This spell lacks any power!",
    "Worse than a simple \"123456\"!",
    "A baby dragon could break this!",
    "Not even apprentice-level security!",
    "This protection charm has failed!",
];

const WEAK: [&str; 10] = [
    "Mediocre magical protection!",
    "Could use some enchantment!",
    "Basic ward - needs improvement!",
    "A troll might struggle with this!",
    "Half-decent shielding spell!",
    "Novice-level security!",
    "Better than nothing, but barely!",
    "A determined ogre could breach this!",
    "Needs magical reinforcement!",
    "Basic charm - easily breakable!",
];

const MEDIUM: [&str; 10] = [
    "Decent magical shielding!",
    "Adequate for common threats!",
    "Standard protection charm!",
    "Would slow down most dark mages!",
    "Reasonable security incantation!",
    "Moderate defensive spell!",
    "Good enough for casual use!",
    "Requires some effort to break!",
    "Standard ward against minor demons!",
    "Acceptable for everyday magic!",
];

const STRONG: [&str; 10] = [
    "Powerful arcane protection!",
    "Impressive defensive magic!",
    "Worthy of a seasoned wizard!",
    "This would challenge a dark lord!",
    "Strong enough for royal vaults!",
    "A dragon might pause at this gate!",
    "Magical security of the highest order!",
    "This ward could stop a basilisk!",
    "Formidable protective enchantment!",
    "Security fit for a grand mage!",
];

const VERY_STRONG: [&str; 10] = [
    "Legendary arcane security!",
    "Unbreakable magical barrier!",
    "The gods themselves would approve!",
    "This ward could withstand Ragnarok!",
    "Elder dragon-level protection!",
    "Mythical-grade security spell!",
    "The stuff of magical legends!",
    "A phoenix would respect this defense!",
    "Divine-level protective charm!",
    "The ultimate in magical security!",
];

fn pool(category: StrengthCategory) -> &'static [&'static str; 10] {
    match category {
        StrengthCategory::VeryWeak => &VERY_WEAK,
        StrengthCategory::Weak => &WEAK,
        StrengthCategory::Medium => &MEDIUM,
        StrengthCategory::Strong => &STRONG,
        StrengthCategory::VeryStrong => &VERY_STRONG,
    }
}

/// Pick a random phrase matching the given category.
pub fn random_phrase(category: StrengthCategory, rng: &mut RandomSource) -> &'static str {
    let phrases = pool(category);
    phrases[rng.index(phrases.len())]
}
