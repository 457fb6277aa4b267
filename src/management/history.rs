use std::path::PathBuf;

use crate::types::TrackPlay;

/// Cache of the most recently fetched playback history, resolved down to
/// the track/artist/genre records the scorer consumes.
pub struct HistoryManager {
    plays: Vec<TrackPlay>,
}

impl HistoryManager {
    pub fn new(plays: Option<Vec<TrackPlay>>) -> Self {
        Self {
            plays: plays.unwrap_or_default(),
        }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::cache_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let plays: Vec<TrackPlay> = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { plays })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::cache_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.plays).map_err(|e| e.to_string())?;
        async_fs::write(Self::cache_path(), json)
            .await
            .map_err(|e| e.to_string())
    }

    pub fn get_plays(&self) -> Vec<TrackPlay> {
        self.plays.clone()
    }

    pub fn count(&self) -> usize {
        self.plays.len()
    }

    fn cache_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spiritcli/cache/recent-plays.json");
        path
    }
}
