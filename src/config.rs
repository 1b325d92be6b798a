use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{
    geofence::ZoneTable,
    onboarding::{Landmark, OnboardingRules},
    ranking::{AreaResolution, MatchingConfig, DEFAULT_RADIUS_KM},
};
use crate::models::{ProviderLocation, ServiceZone};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub matching: MatchingSettings,
    /// Ordered; the first zone containing a point wins
    pub zones: Vec<ServiceZone>,
    pub customer: CustomerSettings,
    pub onboarding: OnboardingRules,
    pub landmarks: Vec<Landmark>,
    pub directory: DirectorySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
    #[serde(default)]
    pub area_resolution: AreaResolution,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            radius_km: default_radius_km(),
            area_resolution: AreaResolution::default(),
        }
    }
}

fn default_radius_km() -> f64 { DEFAULT_RADIUS_KM }

/// Fixed reference location used when a search carries no coordinate
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerSettings {
    pub latitude: f64,
    pub longitude: f64,
    pub area_name: String,
}

impl Default for CustomerSettings {
    fn default() -> Self {
        Self {
            latitude: 18.4591,
            longitude: 73.8512,
            area_name: "Katraj".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorySettings {
    /// JSON array of providers loaded at startup
    pub seed_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

/// Pune launch zones
fn default_zones() -> Vec<ServiceZone> {
    vec![
        ServiceZone::new("Katraj", [18.448, 73.845, 18.470, 73.865]),
        ServiceZone::new("Kondhwa", [18.470, 73.880, 18.495, 73.905]),
        ServiceZone::new("Bibwewadi", [18.468, 73.855, 18.490, 73.875]),
    ]
}

fn default_landmarks() -> Vec<Landmark> {
    vec![
        Landmark::new("katraj", 18.4591, 73.8512),
        Landmark::new("kondhwa", 18.4776, 73.8915),
        Landmark::new("bibwewadi", 18.4784, 73.8631),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            matching: MatchingSettings::default(),
            zones: default_zones(),
            customer: CustomerSettings::default(),
            onboarding: OnboardingRules::default(),
            landmarks: default_landmarks(),
            directory: DirectorySettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct (Pune launch)
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HYPERLOCAL__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HYPERLOCAL__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        finish(settings)
    }

    /// Reject configurations the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.matching.radius_km.is_finite() || self.matching.radius_km <= 0.0 {
            return Err(ConfigError::Message(format!(
                "matching.radius_km must be a positive number, got {}",
                self.matching.radius_km
            )));
        }

        if self.zones.is_empty() {
            return Err(ConfigError::Message("at least one service zone is required".to_string()));
        }

        for zone in &self.zones {
            let b = &zone.bounds;
            if !(b.min_lat <= b.max_lat && b.min_lon <= b.max_lon) {
                return Err(ConfigError::Message(format!(
                    "zone {} has inverted bounds",
                    zone.name
                )));
            }
        }

        Ok(())
    }

    /// Immutable engine configuration derived from these settings
    pub fn matching_config(&self) -> MatchingConfig {
        MatchingConfig::new(ZoneTable::new(self.zones.clone()))
            .with_radius_km(self.matching.radius_km)
            .with_area_resolution(self.matching.area_resolution)
    }

    pub fn customer_location(&self) -> ProviderLocation {
        ProviderLocation::new(
            self.customer.latitude,
            self.customer.longitude,
            self.customer.area_name.clone(),
        )
    }
}

fn environment() -> Environment {
    Environment::with_prefix("HYPERLOCAL")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Post-build pass shared by every loader
fn finish(settings: Config) -> Result<Settings, ConfigError> {
    let settings: Settings = apply_env_overrides(settings, std::env::var("PORT").ok())?.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}

/// Honour the conventional `PORT` variable set by hosting platforms
fn apply_env_overrides(settings: Config, port: Option<String>) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Some(port) = port {
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()
}
