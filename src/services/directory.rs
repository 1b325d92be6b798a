use std::path::Path;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::core::{
    availability::{request_go_offline, request_go_online, GateRejection, Transition},
    profile::{ProfileError, ProfileUpdate},
};
use crate::models::Provider;

/// Errors that can occur when reading or writing the provider directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Provider not found: {0}")]
    NotFound(String),

    #[error("Provider already exists: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Rejected(#[from] GateRejection),

    #[error(transparent)]
    InvalidProfile(#[from] ProfileError),

    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory provider directory
///
/// Searches read a snapshot; availability toggles run the gate check and the
/// commit under a single write lock so concurrent toggles of one provider
/// cannot lose an update.
#[derive(Debug, Default)]
pub struct ProviderDirectory {
    providers: RwLock<Vec<Provider>>,
}

impl ProviderDirectory {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self {
            providers: RwLock::new(providers),
        }
    }

    /// Load providers from a JSON array on disk
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let providers: Vec<Provider> = serde_json::from_str(&raw)?;
        tracing::info!(
            "Loaded {} providers from {}",
            providers.len(),
            path.as_ref().display()
        );
        Ok(Self::new(providers))
    }

    /// Copy of every provider in directory order
    pub async fn snapshot(&self) -> Vec<Provider> {
        self.providers.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.providers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.providers.read().await.is_empty()
    }

    pub async fn get(&self, provider_id: &str) -> Result<Provider, DirectoryError> {
        self.providers
            .read()
            .await
            .iter()
            .find(|p| p.id == provider_id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(provider_id.to_string()))
    }

    /// Append a newly onboarded provider
    pub async fn insert(&self, provider: Provider) -> Result<(), DirectoryError> {
        let mut providers = self.providers.write().await;
        if providers.iter().any(|p| p.id == provider.id) {
            return Err(DirectoryError::Duplicate(provider.id));
        }
        tracing::info!("Onboarded provider {} ({})", provider.id, provider.name);
        providers.push(provider);
        Ok(())
    }

    /// Run the availability gate for a provider and commit the outcome
    pub async fn set_online(
        &self,
        provider_id: &str,
        online: bool,
    ) -> Result<Transition, DirectoryError> {
        let mut providers = self.providers.write().await;
        let provider = providers
            .iter_mut()
            .find(|p| p.id == provider_id)
            .ok_or_else(|| DirectoryError::NotFound(provider_id.to_string()))?;

        let transition = if online {
            request_go_online(provider).map_err(|rejection| {
                tracing::warn!(
                    "Go-online rejected for {}: {}",
                    provider_id,
                    rejection.code()
                );
                rejection
            })?
        } else {
            request_go_offline(provider)
        };

        transition.apply(provider);
        if transition.changes_state() {
            tracing::info!(
                "Provider {} moved {:?} -> {:?}",
                provider_id,
                transition.from,
                transition.to
            );
        }

        Ok(transition)
    }

    /// Apply a price/experience edit
    pub async fn update_profile(
        &self,
        provider_id: &str,
        update: ProfileUpdate,
    ) -> Result<Provider, DirectoryError> {
        let mut providers = self.providers.write().await;
        let provider = providers
            .iter_mut()
            .find(|p| p.id == provider_id)
            .ok_or_else(|| DirectoryError::NotFound(provider_id.to_string()))?;

        update.apply(provider)?;
        tracing::debug!("Updated profile of {}", provider_id);

        Ok(provider.clone())
    }
}
