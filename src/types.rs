use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralArtistsResponse {
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentlyPlayedResponse {
    pub items: Vec<PlayHistoryItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayHistoryItem {
    pub track: PlayedTrack,
    pub played_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayedTrack {
    pub id: String,
    pub name: String,
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

/// One playback-history entry resolved to the data the scorer consumes.
///
/// The genre tags belong to the primary artist of the track and may be
/// empty when Spotify carries no genre metadata for that artist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPlay {
    pub track_name: String,
    pub artist_name: String,
    pub played_at: String,
    pub genres: Vec<String>,
}

/// A fixed score addition triggered by an exact artist-name match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusRule {
    pub artist_name: String,
    pub amount: u64,
}

/// One rung of the category ladder: scores up to and including
/// `upper_bound` that no earlier rung claimed map to `label`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTier {
    pub upper_bound: u64,
    pub label: String,
}

/// Static scoring configuration, loaded once at startup and treated as
/// read-only for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasteProfile {
    pub weights: std::collections::HashMap<String, u64>,
    pub bonus_rules: Vec<BonusRule>,
    pub thresholds: Vec<CategoryTier>,
    pub fallback_label: String,
    pub dedupe_genres: bool,
}

/// The outcome of a single scoring pass. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub definition_score: u64,
    pub category: String,
    pub influence_keyword: String,
}

#[derive(Tabled)]
pub struct RecentTableRow {
    pub played_at: String,
    pub track: String,
    pub artist: String,
    pub genres: String,
}

#[derive(Tabled)]
pub struct ContributionTableRow {
    pub genre: String,
    pub plays: u64,
    pub weight: u64,
    pub subtotal: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePredictionRequest {
    pub version: String,
    pub input: PredictionInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionInput {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub id: String,
    pub status: String,
    pub output: Option<Vec<String>>,
    pub error: Option<String>,
}
