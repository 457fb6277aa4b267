use std::collections::HashMap;

use crate::types::{BonusRule, CategoryTier, TasteProfile};

/// Maps a score onto the category ladder.
///
/// Scans the tiers in ascending bound order and returns the label of the
/// first tier whose bound is greater than or equal to the score. Scores
/// above the last bound get the fallback label. With a validated ladder
/// every non-negative score maps to exactly one label.
pub fn category_for<'a>(tiers: &'a [CategoryTier], fallback: &'a str, score: u64) -> &'a str {
    for tier in tiers {
        if score <= tier.upper_bound {
            return &tier.label;
        }
    }

    fallback
}

/// Checks a taste profile for structural problems.
///
/// Runs once at load time; the scorer itself never re-validates. An error
/// here is fatal for the process because a broken ladder would let scores
/// map to no category or to several.
///
/// # Errors
///
/// Returns a message describing the first problem found:
/// - no threshold tiers at all
/// - an empty tier or fallback label
/// - tier bounds that are not strictly increasing
pub fn validate_profile(profile: &TasteProfile) -> Result<(), String> {
    if profile.thresholds.is_empty() {
        return Err("category thresholds must contain at least one tier".to_string());
    }

    if profile.fallback_label.trim().is_empty() {
        return Err("fallback category label must not be empty".to_string());
    }

    let mut prev: Option<u64> = None;
    for tier in &profile.thresholds {
        if tier.label.trim().is_empty() {
            return Err(format!(
                "category tier at bound {} has an empty label",
                tier.upper_bound
            ));
        }

        if let Some(prev_bound) = prev {
            if tier.upper_bound <= prev_bound {
                return Err(format!(
                    "category thresholds must be strictly increasing: bound {} follows {}",
                    tier.upper_bound, prev_bound
                ));
            }
        }
        prev = Some(tier.upper_bound);
    }

    Ok(())
}

/// Builds the compiled-in default taste profile.
///
/// Used when no profile file exists in the data directory yet. The ladder
/// runs from bug to cat with dragon as the open-ended top tier.
pub fn default_profile() -> TasteProfile {
    let weights: HashMap<String, u64> = [
        ("pop", 100),
        ("rock", 120),
        ("indie pop", 125),
        ("electronica", 130),
        ("k-pop", 140),
        ("j-pop", 150),
        ("metal", 160),
        ("anime", 170),
        ("classic rock", 180),
        ("city pop", 200),
        ("jazz", 220),
        ("shibuya-kei", 240),
        ("progressive rock", 250),
        ("classical", 260),
    ]
    .into_iter()
    .map(|(genre, weight)| (genre.to_string(), weight))
    .collect();

    let thresholds = [
        (500, "bug"),
        (1000, "fish"),
        (1500, "octopus"),
        (2000, "crab"),
        (3000, "frog"),
        (4000, "snake"),
        (8000, "horse"),
        (9000, "dog"),
        (13000, "cat"),
    ]
    .into_iter()
    .map(|(upper_bound, label)| CategoryTier {
        upper_bound,
        label: label.to_string(),
    })
    .collect();

    TasteProfile {
        weights,
        bonus_rules: vec![BonusRule {
            artist_name: "The Beatles".to_string(),
            amount: 50,
        }],
        thresholds,
        fallback_label: "dragon".to_string(),
        dedupe_genres: false,
    }
}
