use crate::core::{
    filters::visible_providers,
    geofence::ZoneTable,
    ranking::{rank_detailed, MatchingConfig},
};
use crate::models::{Provider, ProviderLocation, RankedProvider};

/// Result of the search pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub providers: Vec<RankedProvider>,
    pub total_candidates: usize,
    pub total_visible: usize,
    pub used_fallback: bool,
}

/// Search orchestrator
///
/// # Pipeline Stages
/// 1. Visibility filter (approved and online)
/// 2. Distance from the customer's reference location
/// 3. Radius cutoff with single-closest fallback
/// 4. Deterministic hyperlocal ordering
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchingConfig,
}

impl Matcher {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    pub fn zones(&self) -> &ZoneTable {
        &self.config.zones
    }

    /// Find providers for a customer in a directory snapshot
    ///
    /// # Arguments
    /// * `directory` - Every provider record, in directory order
    /// * `customer` - The customer's reference location
    pub fn search(&self, directory: &[Provider], customer: &ProviderLocation) -> MatchResult {
        let total_candidates = directory.len();
        let visible = visible_providers(directory);
        let total_visible = visible.len();

        for provider in visible.iter().filter(|p| p.location.is_none()) {
            tracing::warn!("Visible provider {} has no location, leaving it out of ranking", provider.id);
        }

        let ranking = rank_detailed(&visible, customer, &self.config);

        if ranking.used_fallback {
            tracing::debug!(
                "No provider within {} km of {}, falling back to closest",
                self.config.radius_km,
                customer.area_name
            );
        }

        MatchResult {
            providers: ranking.providers,
            total_candidates,
            total_visible,
            used_fallback: ranking.used_fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceZone;

    fn create_provider(id: &str, approved: bool, online: bool, lat: f64, lon: f64, area: &str) -> Provider {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("Provider {}", id),
            "isApproved": approved,
            "isOnline": online,
            "pricePerHour": 450,
            "experienceYears": 4,
            "location": { "latitude": lat, "longitude": lon, "areaName": area },
        }))
        .unwrap()
    }

    fn create_matcher() -> Matcher {
        Matcher::new(MatchingConfig::new(ZoneTable::new(vec![
            ServiceZone::new("Katraj", [18.448, 73.845, 18.470, 73.865]),
            ServiceZone::new("Kondhwa", [18.470, 73.880, 18.495, 73.905]),
            ServiceZone::new("Bibwewadi", [18.468, 73.855, 18.490, 73.875]),
        ])))
    }

    fn katraj_customer() -> ProviderLocation {
        ProviderLocation::new(18.4591, 73.8512, "Katraj")
    }

    #[test]
    fn test_search_hides_invisible_providers() {
        let directory = vec![
            create_provider("offline", true, false, 18.4591, 73.8512, "Katraj"),
            create_provider("unapproved", false, true, 18.4591, 73.8512, "Katraj"),
            create_provider("live", true, true, 18.4650, 73.8600, "Bibwewadi"),
        ];

        let result = create_matcher().search(&directory, &katraj_customer());

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.total_visible, 1);
        assert_eq!(result.providers.len(), 1);
        assert_eq!(result.providers[0].provider.id, "live");
        assert!(!result.used_fallback);
    }

    #[test]
    fn test_search_with_nobody_online() {
        let directory = vec![create_provider("offline", true, false, 18.4591, 73.8512, "Katraj")];

        let result = create_matcher().search(&directory, &katraj_customer());

        assert!(result.providers.is_empty());
        assert!(!result.used_fallback);
    }

    #[test]
    fn test_search_falls_back_to_closest() {
        let directory = vec![
            create_provider("kondhwa", true, true, 18.4776, 73.8915, "Kondhwa"),
            create_provider("far-kondhwa", true, true, 18.4900, 73.9000, "Kondhwa"),
        ];

        let result = create_matcher().search(&directory, &katraj_customer());

        assert!(result.used_fallback);
        assert_eq!(result.providers.len(), 1);
        assert_eq!(result.providers[0].provider.id, "kondhwa");
        assert!(result.providers[0].is_far);
    }

    #[test]
    fn test_search_skips_providers_without_location() {
        let mut unplaced = create_provider("unplaced", true, true, 0.0, 0.0, "Katraj");
        unplaced.location = None;
        let directory = vec![
            unplaced,
            create_provider("katraj", true, true, 18.4600, 73.8520, "Katraj"),
        ];

        let result = create_matcher().search(&directory, &katraj_customer());

        // Still counted as visible, but never ranked
        assert_eq!(result.total_visible, 2);
        assert_eq!(result.providers.len(), 1);
        assert_eq!(result.providers[0].provider.id, "katraj");
    }
}
