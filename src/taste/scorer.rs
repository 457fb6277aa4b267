use std::collections::{HashMap, HashSet};

use rand::seq::IndexedRandom;

use crate::types::{ScoreResult, TasteProfile, TrackPlay};

#[derive(Debug, PartialEq, Eq)]
pub enum ScoreError {
    /// The play history was empty, so neither a meaningful score nor an
    /// influence keyword can be produced. Callers use this to distinguish
    /// "no data yet" from a genuinely low score.
    EmptyHistory,
}

/// Per-genre share of the total score, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreContribution {
    pub genre: String,
    pub plays: u64,
    pub weight: u64,
    pub subtotal: u64,
}

/// Computes the taste score, category, and influence keyword for a play history.
///
/// Walks the plays in input order, summing the configured weight of every
/// genre tag (unknown genres weigh zero) and adding any artist bonus rules
/// that match a play's artist exactly. The final score is mapped through
/// the profile's category ladder, and one influence keyword is drawn
/// uniformly from the pool of all track names, artist names, and genre
/// tags encountered. Duplicates stay in the pool so frequently occurring
/// terms are more likely to be picked.
///
/// With `dedupe_genres` set on the profile, repeated genre tags within a
/// single play are counted once instead of once per occurrence.
///
/// # Arguments
///
/// * `plays` - Resolved playback history; treated as an unordered multiset
/// * `profile` - Immutable scoring configuration
/// * `rng` - Random source for the keyword draw; seed it for reproducibility
///
/// # Errors
///
/// Returns `ScoreError::EmptyHistory` if `plays` is empty.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let result = compute_score(&plays, &profile, &mut rng)?;
/// println!("{} -> {}", result.definition_score, result.category);
/// ```
pub fn compute_score<R: rand::Rng + ?Sized>(
    plays: &[TrackPlay],
    profile: &TasteProfile,
    rng: &mut R,
) -> Result<ScoreResult, ScoreError> {
    if plays.is_empty() {
        return Err(ScoreError::EmptyHistory);
    }

    let mut score: u64 = 0;
    let mut influence_candidates: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for play in plays {
        influence_candidates.push(&play.track_name);
        influence_candidates.push(&play.artist_name);

        seen.clear();
        for genre in &play.genres {
            if profile.dedupe_genres && !seen.insert(genre.as_str()) {
                continue;
            }

            score += profile.weights.get(genre).copied().unwrap_or(0);
            influence_candidates.push(genre);
        }

        for rule in &profile.bonus_rules {
            if rule.artist_name == play.artist_name {
                score += rule.amount;
            }
        }
    }

    let category = super::profile::category_for(&profile.thresholds, &profile.fallback_label, score);

    // plays is non-empty, so the pool holds at least a track and an artist name
    let influence_keyword = influence_candidates
        .choose(rng)
        .copied()
        .unwrap_or_default()
        .to_string();

    Ok(ScoreResult {
        definition_score: score,
        category: category.to_string(),
        influence_keyword,
    })
}

/// Aggregates the play history into per-genre contribution rows.
///
/// Counts genre occurrences the same way `compute_score` does (including
/// the `dedupe_genres` behavior) and pairs each genre with its configured
/// unit weight and subtotal. Genres keep their first-seen order so the
/// listing follows the play history.
pub fn genre_contributions(plays: &[TrackPlay], profile: &TasteProfile) -> Vec<GenreContribution> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for play in plays {
        seen.clear();
        for genre in &play.genres {
            if profile.dedupe_genres && !seen.insert(genre.as_str()) {
                continue;
            }

            let count = counts.entry(genre.clone()).or_insert(0);
            if *count == 0 {
                order.push(genre.clone());
            }
            *count += 1;
        }
    }

    order
        .into_iter()
        .map(|genre| {
            let plays = counts[&genre];
            let weight = profile.weights.get(&genre).copied().unwrap_or(0);
            GenreContribution {
                plays,
                weight,
                subtotal: weight * plays,
                genre,
            }
        })
        .collect()
}
