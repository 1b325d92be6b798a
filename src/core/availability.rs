use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Provider;

/// Operational state of a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityState {
    Offline,
    Online,
}

impl AvailabilityState {
    pub fn of(provider: &Provider) -> Self {
        if provider.is_online {
            AvailabilityState::Online
        } else {
            AvailabilityState::Offline
        }
    }

    pub fn is_online(self) -> bool {
        self == AvailabilityState::Online
    }
}

/// Why a go-online request was refused
///
/// Checks run in declaration order and only the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateRejection {
    #[error("Please set your price per hour before going online. You can do this in 'Manage Profile'.")]
    MissingPrice,

    #[error("Please add your years of experience before going online. You can do this in 'Manage Profile'.")]
    MissingExperience,

    #[error("Location is missing. Please complete your profile.")]
    MissingLocation,
}

impl GateRejection {
    /// Stable machine-readable reason
    pub fn code(&self) -> &'static str {
        match self {
            GateRejection::MissingPrice => "missing_price",
            GateRejection::MissingExperience => "missing_experience",
            GateRejection::MissingLocation => "missing_location",
        }
    }
}

/// Permitted state change for one provider
///
/// The gate never mutates the provider itself; the directory commits the
/// transition with [`Transition::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    #[serde(rename = "providerId")]
    pub provider_id: String,
    pub from: AvailabilityState,
    pub to: AvailabilityState,
}

impl Transition {
    fn new(provider: &Provider, to: AvailabilityState) -> Self {
        Self {
            provider_id: provider.id.clone(),
            from: AvailabilityState::of(provider),
            to,
        }
    }

    /// Whether committing this transition changes anything
    pub fn changes_state(&self) -> bool {
        self.from != self.to
    }

    pub fn apply(&self, provider: &mut Provider) {
        provider.is_online = self.to.is_online();
    }
}

/// Ask to move a provider online
///
/// Requires a positive price, positive experience and a location. Approval is
/// not checked here; it is a separate gate applied at search time.
pub fn request_go_online(provider: &Provider) -> Result<Transition, GateRejection> {
    if provider.price() == 0 {
        return Err(GateRejection::MissingPrice);
    }
    if provider.experience() == 0 {
        return Err(GateRejection::MissingExperience);
    }
    if provider.location.is_none() {
        return Err(GateRejection::MissingLocation);
    }

    Ok(Transition::new(provider, AvailabilityState::Online))
}

/// Ask to move a provider offline; always permitted
pub fn request_go_offline(provider: &Provider) -> Transition {
    Transition::new(provider, AvailabilityState::Offline)
}
