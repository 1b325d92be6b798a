// Integration tests for Hyperlocal Match

use hyperlocal_match::config::Settings;
use hyperlocal_match::core::{
    availability::{request_go_online, AvailabilityState, GateRejection},
    filters::visible_providers,
    ranking::{rank, rank_detailed, MatchingConfig},
    Matcher,
};
use hyperlocal_match::models::{Provider, ProviderLocation, RankedProvider};
use hyperlocal_match::services::ProviderDirectory;

const KM_PER_DEGREE_LAT: f64 = 6371.0 * std::f64::consts::PI / 180.0;

fn katraj_customer() -> ProviderLocation {
    ProviderLocation::new(18.4591, 73.8512, "Katraj")
}

fn pune_config() -> MatchingConfig {
    Settings::default().matching_config()
}

/// Approved, online provider `km` due north of the Katraj customer
fn create_test_provider(id: &str, area: &str, km: f64, verified: bool, experience: u32) -> Provider {
    let origin = katraj_customer();
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": format!("Provider {}", id),
        "isVerified": verified,
        "isApproved": true,
        "isOnline": true,
        "pricePerHour": 500,
        "experienceYears": experience,
        "location": {
            "latitude": origin.latitude + km / KM_PER_DEGREE_LAT,
            "longitude": origin.longitude,
            "areaName": area,
        },
    }))
    .unwrap()
}

fn ids(ranked: &[RankedProvider]) -> Vec<&str> {
    ranked.iter().map(|r| r.provider.id.as_str()).collect()
}

#[test]
fn test_same_zone_providers_outrank_closer_neighbour() {
    let visible = vec![
        create_test_provider("P1", "Katraj", 0.5, true, 8),
        create_test_provider("P2", "Katraj", 1.8, false, 3),
        create_test_provider("P3", "Kondhwa", 1.0, true, 6),
    ];

    let ranked = rank(&visible, &katraj_customer(), &pune_config());

    assert_eq!(ids(&ranked), vec!["P1", "P2", "P3"]);
    assert!((ranked[0].distance_km - 0.5).abs() < 1e-6);
    assert!((ranked[1].distance_km - 1.8).abs() < 1e-6);
    assert_eq!(
        ranked.iter().map(|r| r.is_far).collect::<Vec<_>>(),
        vec![false, false, true]
    );
}

#[test]
fn test_lone_distant_provider_returned_through_fallback() {
    let visible = vec![create_test_provider("P4", "Bibwewadi", 5.2, true, 10)];

    let ranking = rank_detailed(&visible, &katraj_customer(), &pune_config());

    assert!(ranking.used_fallback);
    assert_eq!(ids(&ranking.providers), vec!["P4"]);
    assert!(ranking.providers[0].is_far);
    assert!((ranking.providers[0].distance_km - 5.2).abs() < 1e-6);
}

#[test]
fn test_incomplete_experience_blocks_going_online() {
    let mut provider = create_test_provider("P5", "Katraj", 0.2, false, 0);
    provider.is_online = false;
    provider.price_per_hour = Some(500);

    let rejection = request_go_online(&provider).unwrap_err();

    assert_eq!(rejection, GateRejection::MissingExperience);
    assert!(rejection.to_string().contains("years of experience"));
    assert_eq!(AvailabilityState::of(&provider), AvailabilityState::Offline);
}

#[test]
fn test_zero_price_blocks_going_online() {
    let mut provider = create_test_provider("P6", "Katraj", 0.2, false, 4);
    provider.is_online = false;
    provider.price_per_hour = Some(0);

    assert_eq!(request_go_online(&provider), Err(GateRejection::MissingPrice));
    assert!(!provider.is_online);
}

#[test]
fn test_alternate_radius_without_touching_algorithm() {
    let visible = vec![
        create_test_provider("near", "Katraj", 1.5, false, 1),
        create_test_provider("mid", "Katraj", 3.5, true, 9),
    ];

    let default_radius = rank(&visible, &katraj_customer(), &pune_config());
    assert_eq!(ids(&default_radius), vec!["near"]);

    let wide = pune_config().with_radius_km(5.0);
    let wide_radius = rank(&visible, &katraj_customer(), &wide);
    assert_eq!(ids(&wide_radius), vec!["near", "mid"]);
}

#[test]
fn test_seeded_directory_search_end_to_end() {
    let directory = ProviderDirectory::from_seed_file("data/providers.json").unwrap();
    let matcher = Matcher::new(pune_config());

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let snapshot = runtime.block_on(directory.snapshot());
    let result = matcher.search(&snapshot, &katraj_customer());

    assert_eq!(result.total_candidates, 4);
    assert_eq!(result.total_visible, 4);
    assert!(!result.used_fallback);
    // Rajesh sits on the customer; Karan is ~1.2 km away in Bibwewadi
    assert_eq!(ids(&result.providers), vec!["provider_rajesh", "provider_karan"]);
    assert!(!result.providers[0].is_far);
    assert!(result.providers[1].is_far);
    assert_eq!(result.providers[0].distance_km, 0.0);
}

#[test]
fn test_toggle_feeds_next_search() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut offline = create_test_provider("P7", "Katraj", 0.4, true, 5);
    offline.is_online = false;
    let directory = ProviderDirectory::new(vec![offline]);
    let matcher = Matcher::new(pune_config());

    let before = matcher.search(&runtime.block_on(directory.snapshot()), &katraj_customer());
    assert!(before.providers.is_empty());

    runtime.block_on(directory.set_online("P7", true)).unwrap();

    let after = matcher.search(&runtime.block_on(directory.snapshot()), &katraj_customer());
    assert_eq!(ids(&after.providers), vec!["P7"]);
}

#[test]
fn test_visibility_then_rank_never_shows_hidden_providers() {
    let mut hidden = create_test_provider("hidden", "Katraj", 0.1, true, 20);
    hidden.is_approved = false;
    let all = vec![hidden, create_test_provider("shown", "Kondhwa", 4.0, false, 1)];

    let visible = visible_providers(&all);
    let ranked = rank(&visible, &katraj_customer(), &pune_config());

    assert_eq!(ids(&ranked), vec!["shown"]);
    assert!(ranked[0].is_far);
}
