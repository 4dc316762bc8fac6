use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::ClimberProfile;

/// Errors that can occur with the profile directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Profile not found: {0}")]
    NotFound(String),
}

/// In-memory store of climber profiles keyed by user id
///
/// Cloning is cheap; clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct ProfileDirectory {
    profiles: Arc<RwLock<HashMap<String, ClimberProfile>>>,
}

impl ProfileDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from a list of profiles; later duplicates win
    pub fn from_profiles(profiles: Vec<ClimberProfile>) -> Self {
        let mut map = HashMap::with_capacity(profiles.len());
        for profile in profiles {
            if let Some(previous) = map.insert(profile.id.clone(), profile) {
                tracing::warn!("Duplicate profile id in seed data: {}", previous.id);
            }
        }

        Self {
            profiles: Arc::new(RwLock::new(map)),
        }
    }

    /// Load profiles from a JSON file containing an array of profiles
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let profiles: Vec<ClimberProfile> = serde_json::from_slice(&bytes)?;

        tracing::info!("Loaded {} profiles from {}", profiles.len(), path.display());

        Ok(Self::from_profiles(profiles))
    }

    /// Get a single profile
    pub async fn get(&self, user_id: &str) -> Result<ClimberProfile, DirectoryError> {
        self.profiles
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(user_id.to_string()))
    }

    /// Snapshot of every profile
    pub async fn all(&self) -> Vec<ClimberProfile> {
        self.profiles.read().await.values().cloned().collect()
    }

    /// Insert or replace a profile, returning the one it replaced
    pub async fn upsert(&self, profile: ClimberProfile) -> Option<ClimberProfile> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.id.clone(), profile)
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}
