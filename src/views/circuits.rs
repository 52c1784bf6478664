// Circuit view: lap time profile, DNF ranking and map markers

use serde::Serialize;
use uom::si::f64::Time;
use uom::si::time::{millisecond, second};

use crate::dataset::{CircuitProfile, Dataset, Year};
use crate::ranking::{DNF_RANKING_LIMIT, rank_circuits_by_dnf};

pub(crate) fn ms_to_seconds(ms: f64) -> f64 {
    Time::new::<millisecond>(ms).get::<second>()
}

/// Circuits that hosted this many races or fewer get the smallest marker
const MIN_SIZE_HINT: u32 = 6;
const MAX_SIZE_HINT: u32 = 20;
const MIN_MARKER_RADIUS: f64 = 4.0;
const MAX_MARKER_RADIUS: f64 = 12.0;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LapProfilePoint {
    pub circuit: String,
    pub country: String,
    pub avg_lap_s: f64,
    pub lap_std_dev_s: f64,
    pub dnf_rate: f64,
    pub size_hint: u32,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DnfEntry {
    pub circuit: String,
    pub dnf_rate: f64,
    pub coordinates: Option<(f64, f64)>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapMarker {
    pub circuit: String,
    pub lat: f64,
    pub lng: f64,
    pub radius: f64,
    pub location: String,
    pub country: String,
    pub races_hosted: u32,
    pub dnf_rate: f64,
    pub first_year: Option<Year>,
    pub last_year: Option<Year>,
    pub avg_lap_s: Option<f64>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CircuitsView {
    pub lap_profile: Vec<LapProfilePoint>,
    pub dnf_ranking: Vec<DnfEntry>,
    pub map_markers: Vec<MapMarker>,
}

fn lap_profile_point(name: &str, profile: &CircuitProfile) -> Option<LapProfilePoint> {
    let (avg_lap_ms, lap_variance_ms) = profile.lap_statistics()?;
    Some(LapProfilePoint {
        circuit: name.to_string(),
        country: profile.country.clone(),
        avg_lap_s: ms_to_seconds(avg_lap_ms),
        lap_std_dev_s: ms_to_seconds(lap_variance_ms),
        dnf_rate: profile.dnf_rate,
        size_hint: profile.races_hosted.clamp(MIN_SIZE_HINT, MAX_SIZE_HINT),
    })
}

fn map_marker(name: &str, profile: &CircuitProfile) -> Option<MapMarker> {
    let (lat, lng) = profile.coordinates()?;
    Some(MapMarker {
        circuit: name.to_string(),
        lat,
        lng,
        radius: (f64::from(profile.races_hosted) / 3.0).clamp(MIN_MARKER_RADIUS, MAX_MARKER_RADIUS),
        location: profile.location.clone(),
        country: profile.country.clone(),
        races_hosted: profile.races_hosted,
        dnf_rate: profile.dnf_rate,
        first_year: profile.years.first().copied(),
        last_year: profile.years.last().copied(),
        avg_lap_s: profile
            .avg_lap_ms
            .filter(|ms| *ms != 0.0)
            .map(ms_to_seconds),
    })
}

pub fn derive_circuits(dataset: &Dataset) -> CircuitsView {
    let circuits = dataset.circuits();

    CircuitsView {
        lap_profile: circuits
            .iter()
            .filter_map(|(name, profile)| lap_profile_point(name, profile))
            .collect(),
        dnf_ranking: rank_circuits_by_dnf(circuits, DNF_RANKING_LIMIT)
            .into_iter()
            .map(|(name, profile)| DnfEntry {
                circuit: name.to_string(),
                dnf_rate: profile.dnf_rate,
                coordinates: profile.coordinates(),
            })
            .collect(),
        map_markers: circuits
            .iter()
            .filter_map(|(name, profile)| map_marker(name, profile))
            .collect(),
    }
}
