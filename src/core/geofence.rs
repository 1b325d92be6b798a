use serde::{Deserialize, Serialize};

use crate::models::{BoundingBox, Coordinate, ProviderLocation, ServiceZone};

/// Outcome of checking a coordinate against the service zones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneValidation {
    #[serde(rename = "isAllowed")]
    pub is_allowed: bool,
    #[serde(rename = "areaName")]
    pub area_name: Option<String>,
}

impl ZoneValidation {
    fn allowed(zone: &ServiceZone) -> Self {
        Self {
            is_allowed: true,
            area_name: Some(zone.name.clone()),
        }
    }

    fn rejected() -> Self {
        Self {
            is_allowed: false,
            area_name: None,
        }
    }
}

/// Check if a point is within a bounding box (edges included)
#[inline]
pub fn is_within_bounding_box(lat: f64, lon: f64, bbox: &BoundingBox) -> bool {
    lat >= bbox.min_lat && lat <= bbox.max_lat && lon >= bbox.min_lon && lon <= bbox.max_lon
}

/// Ordered, immutable table of the zones the marketplace operates in
///
/// Zones may overlap; the first declared zone containing a point wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoneTable {
    zones: Vec<ServiceZone>,
}

impl ZoneTable {
    pub fn new(zones: Vec<ServiceZone>) -> Self {
        Self { zones }
    }

    pub fn zones(&self) -> &[ServiceZone] {
        &self.zones
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// First zone, in declaration order, whose bounds contain the coordinate
    pub fn locate(&self, coord: &Coordinate) -> Option<&ServiceZone> {
        self.zones
            .iter()
            .find(|zone| is_within_bounding_box(coord.latitude, coord.longitude, &zone.bounds))
    }

    /// Decide whether a coordinate falls inside any service zone
    ///
    /// NaN coordinates fail every comparison and are therefore rejected.
    pub fn validate_zone(&self, coord: &Coordinate) -> ZoneValidation {
        match self.locate(coord) {
            Some(zone) => ZoneValidation::allowed(zone),
            None => ZoneValidation::rejected(),
        }
    }

    /// Tag a raw coordinate with its zone, if it has one
    pub fn assign(&self, coord: &Coordinate) -> Option<ProviderLocation> {
        self.locate(coord)
            .map(|zone| ProviderLocation::new(coord.latitude, coord.longitude, zone.name.clone()))
    }

    /// Human readable list of zone names, e.g. "Katraj, Kondhwa & Bibwewadi"
    pub fn describe(&self) -> String {
        let names: Vec<&str> = self.zones.iter().map(|z| z.name.as_str()).collect();
        match names.split_last() {
            None => String::new(),
            Some((last, [])) => (*last).to_string(),
            Some((last, rest)) => format!("{} & {}", rest.join(", "), last),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pune_zones() -> ZoneTable {
        ZoneTable::new(vec![
            ServiceZone::new("Katraj", [18.448, 73.845, 18.470, 73.865]),
            ServiceZone::new("Kondhwa", [18.470, 73.880, 18.495, 73.905]),
            ServiceZone::new("Bibwewadi", [18.468, 73.855, 18.490, 73.875]),
        ])
    }

    #[test]
    fn test_point_inside_zone() {
        let result = pune_zones().validate_zone(&Coordinate::new(18.4776, 73.8915));
        assert!(result.is_allowed);
        assert_eq!(result.area_name.as_deref(), Some("Kondhwa"));
    }

    #[test]
    fn test_point_outside_all_zones() {
        let result = pune_zones().validate_zone(&Coordinate::new(18.52, 73.85));
        assert!(!result.is_allowed);
        assert_eq!(result.area_name, None);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let zones = pune_zones();
        assert!(zones.validate_zone(&Coordinate::new(18.448, 73.845)).is_allowed);
        assert!(zones.validate_zone(&Coordinate::new(18.495, 73.905)).is_allowed);
    }

    #[test]
    fn test_overlap_first_declared_wins() {
        // Katraj and Bibwewadi overlap on 18.468..=18.470 / 73.855..=73.865
        let result = pune_zones().validate_zone(&Coordinate::new(18.469, 73.860));
        assert_eq!(result.area_name.as_deref(), Some("Katraj"));
    }

    #[test]
    fn test_nan_is_rejected() {
        let result = pune_zones().validate_zone(&Coordinate::new(f64::NAN, 73.86));
        assert!(!result.is_allowed);
    }

    #[test]
    fn test_describe_zone_names() {
        assert_eq!(pune_zones().describe(), "Katraj, Kondhwa & Bibwewadi");
        let single = ZoneTable::new(vec![ServiceZone::new("Katraj", [0.0, 0.0, 1.0, 1.0])]);
        assert_eq!(single.describe(), "Katraj");
        assert_eq!(ZoneTable::default().describe(), "");
    }
}
