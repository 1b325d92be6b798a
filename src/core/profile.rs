use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Provider;

/// Errors when a provider edits their profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Price must be a positive number.")]
    InvalidPrice,

    #[error("Experience must be a positive number.")]
    InvalidExperience,
}

impl ProfileError {
    pub fn code(&self) -> &'static str {
        match self {
            ProfileError::InvalidPrice => "invalid_price",
            ProfileError::InvalidExperience => "invalid_experience",
        }
    }
}

/// Price and experience edit from the profile management screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(rename = "pricePerHour")]
    pub price_per_hour: u32,
    #[serde(rename = "experienceYears")]
    pub experience_years: u32,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.price_per_hour == 0 {
            return Err(ProfileError::InvalidPrice);
        }
        if self.experience_years == 0 {
            return Err(ProfileError::InvalidExperience);
        }
        Ok(())
    }

    /// Validate and write the update onto a provider; leaves it untouched on error
    pub fn apply(&self, provider: &mut Provider) -> Result<(), ProfileError> {
        self.validate()?;
        provider.price_per_hour = Some(self.price_per_hour);
        provider.experience_years = Some(self.experience_years);
        Ok(())
    }
}
