use std::{collections::HashMap, time::Duration};

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{Artist, PlayHistoryItem, RecentlyPlayedResponse, SeveralArtistsResponse, TrackPlay},
    warning,
};

/// Retrieves the user's recently played tracks from the Spotify Web API.
///
/// Fetches up to `limit` (1-50) playback-history entries in reverse
/// chronological order. The function handles rate limiting by honoring the
/// `Retry-After` header on 429 Too Many Requests responses and retries
/// automatically on transient 502 Bad Gateway errors with a 10-second delay.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `limit` - Maximum number of history entries to return (1-50)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<PlayHistoryItem>)` - Playback history entries, most recent first
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Example
///
/// ```
/// let token = "BQC..."; // Valid access token
/// let items = get_recently_played(token, 50).await?;
/// println!("Fetched {} plays", items.len());
/// ```
pub async fn get_recently_played(
    token: &str,
    limit: u32,
) -> Result<Vec<PlayHistoryItem>, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/player/recently-played?limit={limit}",
        uri = &config::spotify_apiurl(),
        limit = limit
    );

    loop {
        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => {
                if resp.status() == StatusCode::TOO_MANY_REQUESTS {
                    let retry_after = resp
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse::<u64>().ok())
                        .unwrap_or(0);
                    if retry_after <= 120 {
                        sleep(Duration::from_secs(retry_after)).await;
                        continue; // retry
                    }
                    warning!(
                        "Retry after has reached an abnormal high of {} seconds. Try again later.",
                        retry_after
                    );
                }

                match resp.error_for_status() {
                    Ok(valid_response) => valid_response,
                    Err(err) => {
                        if let Some(status) = err.status() {
                            if status == StatusCode::BAD_GATEWAY {
                                sleep(Duration::from_secs(10)).await;
                                continue; // retry
                            }
                        }
                        return Err(err); // propagate other errors
                    }
                }
            }
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let res = response.json::<RecentlyPlayedResponse>().await?;
        return Ok(res.items);
    }
}

/// Retrieves metadata for multiple artists in a single API request.
///
/// Fetches artist records (including genre tags) for a batch of Spotify
/// artist IDs. The endpoint accepts up to 50 IDs per request; the caller
/// chunks accordingly. Implements the same 502 retry logic as the other
/// history operations.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `ids` - Spotify artist IDs to fetch, at most 50
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Artist>)` - Artist records in request order
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn get_several_artists(
    token: &str,
    ids: &[String],
) -> Result<Vec<Artist>, reqwest::Error> {
    let artist_ids = ids
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let api_url = format!(
        "{uri}/artists?ids={artist_ids}",
        uri = &config::spotify_apiurl(),
        artist_ids = artist_ids
    );

    loop {
        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let res = response.json::<SeveralArtistsResponse>().await?;
        return Ok(res.artists);
    }
}

/// Resolves raw playback-history entries into scorer-ready track plays.
///
/// Pairs each history entry with the genre tags of its primary artist.
/// Artists missing from the lookup (or carrying no genre metadata) yield
/// an empty genre list, which simply contributes zero weight downstream.
pub fn resolve_plays(items: &[PlayHistoryItem], artists: &[Artist]) -> Vec<TrackPlay> {
    let genres_by_artist: HashMap<&str, &Vec<String>> = artists
        .iter()
        .map(|artist| (artist.id.as_str(), &artist.genres))
        .collect();

    items
        .iter()
        .map(|item| {
            let primary = item.track.artists.first();
            let artist_name = primary.map(|a| a.name.clone()).unwrap_or_default();
            let genres = primary
                .and_then(|a| genres_by_artist.get(a.id.as_str()))
                .map(|genres| (*genres).clone())
                .unwrap_or_default();

            TrackPlay {
                track_name: item.track.name.clone(),
                artist_name,
                played_at: item.played_at.clone(),
                genres,
            }
        })
        .collect()
}
