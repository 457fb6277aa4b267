use std::{collections::HashSet, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    management::{HistoryManager, TokenManager},
    spotify, success,
    types::{Artist, PlayHistoryItem, RecentTableRow, TrackPlay},
    utils, warning,
};

pub async fn list_recent(limit: Option<usize>) {
    match HistoryManager::load().await {
        Ok(manager) => {
            let mut plays = manager.get_plays();
            if let Some(limit) = limit {
                plays.truncate(limit);
            }

            let table_rows: Vec<RecentTableRow> = plays
                .into_iter()
                .map(|p| RecentTableRow {
                    played_at: utils::format_played_at(&p.played_at),
                    track: p.track_name,
                    artist: p.artist_name,
                    genres: utils::summarize_genres(&p.genres),
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => warning!(
            "Failed to load recent plays: {}\nRun spiritcli recent update.",
            e
        ),
    }
}

pub async fn update_recent(limit: u32) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run spiritcli auth\n Error: {}",
                e
            );
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching recently played tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let token = token_mgr.get_valid_token().await;
    let items: Vec<PlayHistoryItem> =
        match spotify::history::get_recently_played(&token, limit).await {
            Ok(items) => items,
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch recently played tracks: {}", e);
            }
        };

    if items.is_empty() {
        pb.finish_and_clear();
        warning!("No recently played tracks returned. Listen to some music first.");
        return;
    }

    // unique primary artist ids, batched 50 per lookup request
    let mut seen_ids = HashSet::new();
    let artist_ids: Vec<String> = items
        .iter()
        .filter_map(|item| item.track.artists.first())
        .filter(|artist| seen_ids.insert(artist.id.clone()))
        .map(|artist| artist.id.clone())
        .collect();

    pb.set_message(format!(
        "Resolving genres for {} artists...",
        artist_ids.len()
    ));

    let mut artists: Vec<Artist> = Vec::new();
    for chunk in artist_ids.chunks(50) {
        let token = token_mgr.get_valid_token().await;
        match spotify::history::get_several_artists(&token, chunk).await {
            Ok(batch) => artists.extend(batch),
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to resolve artist genres: {}", e);
            }
        }
    }

    pb.finish_and_clear();

    let plays: Vec<TrackPlay> = spotify::history::resolve_plays(&items, &artists);
    let manager = HistoryManager::new(Some(plays));
    if let Err(e) = manager.persist().await {
        error!("Failed to cache recent plays. Err: {}", e);
    }

    success!("Cached {} recent plays!", manager.count());
}
