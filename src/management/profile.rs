use std::{
    io::{Error, ErrorKind},
    path::PathBuf,
};

use crate::{taste, types::TasteProfile};

#[derive(Debug)]
pub enum ProfileError {
    IoError(Error),
    CriticalError(String),
    SerdeError(serde_json::Error),
}

impl From<Error> for ProfileError {
    fn from(err: Error) -> Self {
        ProfileError::IoError(err)
    }
}

/// Loads and validates the taste profile (genre weights, bonus rules, and
/// the category ladder) from the data directory.
///
/// A missing file falls back to the compiled-in defaults and writes them
/// out so the user has something to tune. A malformed file or an invalid
/// ladder is an error; the caller is expected to treat it as fatal.
pub struct ProfileManager {
    profile: TasteProfile,
}

impl ProfileManager {
    pub async fn load_or_default() -> Result<Self, ProfileError> {
        let path = Self::profile_path();
        let manager = match async_fs::read_to_string(&path).await {
            Ok(content) => {
                let profile: TasteProfile =
                    serde_json::from_str(&content).map_err(|e| ProfileError::SerdeError(e))?;
                Self { profile }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let manager = Self {
                    profile: taste::default_profile(),
                };
                manager.persist().await?;
                manager
            }
            Err(e) => return Err(ProfileError::IoError(e)),
        };

        taste::validate_profile(&manager.profile).map_err(|e| ProfileError::CriticalError(e))?;
        Ok(manager)
    }

    pub async fn persist(&self) -> Result<(), ProfileError> {
        let path = Self::profile_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| ProfileError::IoError(e))?;
        }

        let json = serde_json::to_string_pretty(&self.profile)
            .map_err(|e| ProfileError::SerdeError(e))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| ProfileError::IoError(e))
    }

    pub fn profile(&self) -> &TasteProfile {
        &self.profile
    }

    fn profile_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spiritcli/taste-profile.json");
        path
    }
}
