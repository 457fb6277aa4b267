use rand::{SeedableRng, rngs::StdRng};
use tabled::Table;

use crate::{
    error, info,
    management::{HistoryManager, ProfileManager},
    success, taste,
    types::{ContributionTableRow, TasteProfile},
};

pub async fn score(seed: Option<u64>, dedupe_genres: bool) {
    let profile_mgr = match ProfileManager::load_or_default().await {
        Ok(manager) => manager,
        Err(e) => error!("Failed to load taste profile: {:?}", e),
    };

    let mut profile: TasteProfile = profile_mgr.profile().clone();
    if dedupe_genres {
        profile.dedupe_genres = true;
    }

    let plays = match HistoryManager::load().await {
        Ok(manager) => manager.get_plays(),
        Err(e) => error!(
            "Failed to load recent plays: {}\nRun spiritcli recent update.",
            e
        ),
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let result = match taste::compute_score(&plays, &profile, &mut rng) {
        Ok(result) => result,
        Err(taste::ScoreError::EmptyHistory) => {
            error!("No cached plays to score.\nRun spiritcli recent update first.");
        }
    };

    let contributions = taste::genre_contributions(&plays, &profile);
    if !contributions.is_empty() {
        let table_rows: Vec<ContributionTableRow> = contributions
            .into_iter()
            .map(|c| ContributionTableRow {
                genre: c.genre,
                plays: c.plays,
                weight: c.weight,
                subtotal: c.subtotal,
            })
            .collect();

        let table = Table::new(table_rows);
        println!("{}", table);
    }

    info!("Scored {} recent plays", plays.len());
    success!("Taste score: {}", result.definition_score);
    success!("Spirit animal: {}", result.category);
    success!("Influence keyword: {}", result.influence_keyword);
}
