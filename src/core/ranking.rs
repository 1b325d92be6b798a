use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::{distance::distance_km, geofence::ZoneTable};
use crate::models::{Provider, ProviderLocation, RankedProvider};

/// Proximity radius used when none is configured
pub const DEFAULT_RADIUS_KM: f64 = 2.0;

/// Where a provider's zone comes from when checking same-zone affinity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaResolution {
    /// Use the area name recorded at onboarding
    #[default]
    Stored,
    /// Re-derive the area from the coordinate through the zone table,
    /// keeping the stored name for coordinates outside every zone
    Recompute,
}

/// Immutable engine configuration handed to every search
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    pub radius_km: f64,
    pub zones: ZoneTable,
    pub area_resolution: AreaResolution,
}

impl MatchingConfig {
    pub fn new(zones: ZoneTable) -> Self {
        Self {
            radius_km: DEFAULT_RADIUS_KM,
            zones,
            area_resolution: AreaResolution::Stored,
        }
    }

    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    pub fn with_area_resolution(mut self, area_resolution: AreaResolution) -> Self {
        self.area_resolution = area_resolution;
        self
    }

    fn area_of<'a>(&'a self, location: &'a ProviderLocation) -> &'a str {
        match self.area_resolution {
            AreaResolution::Stored => &location.area_name,
            AreaResolution::Recompute => self
                .zones
                .locate(&location.coordinate())
                .map(|zone| zone.name.as_str())
                .unwrap_or(&location.area_name),
        }
    }
}

/// Ranked result plus whether the single-closest fallback kicked in
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    pub providers: Vec<RankedProvider>,
    pub used_fallback: bool,
}

#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    provider: &'a Provider,
    distance_km: f64,
    same_zone: bool,
}

/// Rank visible providers around a customer
///
/// See [`rank_detailed`].
pub fn rank(
    visible: &[Provider],
    customer: &ProviderLocation,
    config: &MatchingConfig,
) -> Vec<RankedProvider> {
    rank_detailed(visible, customer, config).providers
}

/// Rank visible providers around a customer, reporting fallback use
///
/// 1. Distance every visible provider from the customer
/// 2. Keep those within `config.radius_km`
/// 3. If none are within the radius, keep only the single closest one
///    (first in input order on ties) and flag the whole result as far
/// 4. Sort: same zone first, then nearer, then verified, then more experienced
///
/// Providers without a location cannot be distanced and are left out. An empty
/// visible set, or one where nobody has a location, yields an empty ranking;
/// otherwise the ranking is never empty.
pub fn rank_detailed(
    visible: &[Provider],
    customer: &ProviderLocation,
    config: &MatchingConfig,
) -> Ranking {
    let origin = customer.coordinate();
    let customer_area = config.area_of(customer);

    let candidates: Vec<Candidate<'_>> = visible
        .iter()
        .filter_map(|provider| {
            let location = provider.location.as_ref()?;
            Some(Candidate {
                provider,
                distance_km: distance_km(&origin, &location.coordinate()),
                same_zone: config.area_of(location) == customer_area,
            })
        })
        .collect();

    if candidates.is_empty() {
        return Ranking::default();
    }

    let within_radius: Vec<Candidate<'_>> = candidates
        .iter()
        .copied()
        .filter(|c| c.distance_km <= config.radius_km)
        .collect();

    let used_fallback = within_radius.is_empty();
    let mut working: Vec<Candidate<'_>> = if used_fallback {
        // min_by keeps the first of equally close candidates
        candidates
            .iter()
            .copied()
            .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
            .into_iter()
            .collect()
    } else {
        within_radius
    };

    // sort_by is stable, so full ties keep input order
    working.sort_by(compare_candidates);

    tracing::debug!(
        visible = visible.len(),
        ranked = working.len(),
        used_fallback,
        "ranked providers"
    );

    let providers = working
        .into_iter()
        .map(|c| RankedProvider {
            provider: c.provider.clone(),
            distance_km: c.distance_km,
            is_far: used_fallback || !c.same_zone,
        })
        .collect();

    Ranking {
        providers,
        used_fallback,
    }
}

fn compare_candidates(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.same_zone
        .cmp(&a.same_zone)
        .then_with(|| a.distance_km.total_cmp(&b.distance_km))
        .then_with(|| b.provider.is_verified.cmp(&a.provider.is_verified))
        .then_with(|| b.provider.experience().cmp(&a.provider.experience()))
}
