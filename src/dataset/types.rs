// Typed views over the six precomputed JSON collections

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A championship season, e.g. `2021`
pub type Year = u16;
/// A round number within a season, starting at 1
pub type Round = u32;

/// Collection-wide lists, team colors and the per-season driver to constructor mapping
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default, deserialize_with = "deserialize_years")]
    pub years: Vec<Year>,
    #[serde(default)]
    pub drivers: Vec<EntitySummary>,
    #[serde(default)]
    pub constructors: Vec<EntitySummary>,
    #[serde(default)]
    pub circuits: Vec<EntitySummary>,
    /// Constructor name to its livery color as a `#RRGGBB` string
    #[serde(default)]
    pub team_colors: BTreeMap<String, String>,
    /// Season to driver name to the constructor the driver raced for
    #[serde(default)]
    pub driver_constructor_map: BTreeMap<Year, BTreeMap<String, String>>,
}

impl Metadata {
    /// Constructor a driver raced for in the given season, if known
    pub fn constructor_for(&self, season: Year, driver: &str) -> Option<&str> {
        self.driver_constructor_map
            .get(&season)
            .and_then(|drivers| drivers.get(driver))
            .map(String::as_str)
    }
}

/// Summary row for a driver, constructor or circuit
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntitySummary {
    pub name: String,
    #[serde(default)]
    pub races: Option<u32>,
    #[serde(default)]
    pub first_year: Option<Year>,
    #[serde(default)]
    pub last_year: Option<Year>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Season to standings progression
pub type ChampionshipBattles = BTreeMap<Year, SeasonStandings>;

/// Round list and per-driver progression for one season
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SeasonStandings {
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub drivers: BTreeMap<String, DriverSeasonRecord>,
}

impl SeasonStandings {
    /// Highest round number listed for the season
    pub fn final_round(&self) -> Option<Round> {
        self.rounds.iter().copied().max()
    }

    pub fn contains_driver(&self, name: &str) -> bool {
        self.drivers.contains_key(name)
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DriverSeasonRecord {
    /// Three letter driver code, e.g. `VER`
    #[serde(default)]
    pub code: String,
    #[serde(default, rename = "ref")]
    pub reference: Option<String>,
    /// Cumulative points after each round the driver was classified in
    #[serde(default)]
    pub points: BTreeMap<Round, f64>,
    /// Championship position after each round; `null` entries are unclassified
    #[serde(default)]
    pub positions: BTreeMap<Round, Option<u32>>,
    #[serde(default)]
    pub wins: u32,
}

impl DriverSeasonRecord {
    pub fn points_at(&self, round: Round) -> Option<f64> {
        self.points.get(&round).copied()
    }

    pub fn position_at(&self, round: Round) -> Option<u32> {
        self.positions.get(&round).copied().flatten()
    }

    /// Driver code, falling back to the first three letters of the family name
    pub fn display_code(&self, name: &str) -> String {
        if !self.code.is_empty() {
            return self.code.clone();
        }
        fallback_code(name)
    }
}

pub(crate) fn fallback_code(name: &str) -> String {
    name.split(' ')
        .next_back()
        .unwrap_or_default()
        .chars()
        .take(3)
        .collect::<String>()
        .to_uppercase()
}

/// Points share per constructor per season, with the derived competitive entropy
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ConstructorDominance {
    /// Seasons the collection covers; share entries for other seasons are ignored
    #[serde(default, deserialize_with = "deserialize_years")]
    pub years: Vec<Year>,
    /// Season to constructor to percentage of that season's points
    #[serde(default)]
    pub shares: BTreeMap<Year, BTreeMap<String, f64>>,
    /// Season to Shannon entropy (bits) of the share distribution
    #[serde(default)]
    pub entropy: BTreeMap<Year, f64>,
}

impl ConstructorDominance {
    pub fn share(&self, year: Year, constructor: &str) -> Option<f64> {
        self.shares
            .get(&year)
            .and_then(|shares| shares.get(constructor))
            .copied()
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridVsRace {
    #[serde(default)]
    pub per_season: BTreeMap<Year, Vec<GridRaceRecord>>,
    /// All-time average positions gained, in the order the source published them
    #[serde(default, deserialize_with = "deserialize_ordered_entries")]
    pub avg_positions_gained: Vec<(String, f64)>,
}

/// One driver entry in one race
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GridRaceRecord {
    #[serde(rename = "g")]
    pub grid: u32,
    #[serde(rename = "f")]
    pub finish: u32,
    /// Positions gained as computed upstream. Never re-derived from grid and finish.
    #[serde(rename = "pg")]
    pub positions_gained: i32,
    #[serde(rename = "d", default)]
    pub driver: String,
    #[serde(rename = "c", default)]
    pub constructor: String,
    #[serde(rename = "ci", default)]
    pub circuit: String,
}

/// Circuit name to profile
pub type Circuits = BTreeMap<String, CircuitProfile>;

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CircuitProfile {
    #[serde(default)]
    pub circuit_id: Option<u32>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub races_hosted: u32,
    #[serde(default)]
    pub total_entries: Option<u32>,
    #[serde(default)]
    pub dnfs: Option<u32>,
    /// Percentage of entries that did not finish
    #[serde(default)]
    pub dnf_rate: f64,
    #[serde(default)]
    pub avg_lap_ms: Option<f64>,
    /// Standard deviation of lap times in milliseconds
    #[serde(default)]
    pub lap_variance: Option<f64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_years")]
    pub years: Vec<Year>,
}

impl CircuitProfile {
    /// Average lap and lap deviation, only when both were recorded
    pub fn lap_statistics(&self) -> Option<(f64, f64)> {
        match (self.avg_lap_ms, self.lap_variance) {
            (Some(avg), Some(variance)) if avg != 0.0 && variance != 0.0 => Some((avg, variance)),
            _ => None,
        }
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.lat?, self.lng?))
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PitStops {
    /// Season to median stop duration in milliseconds
    #[serde(default)]
    pub median_per_season: BTreeMap<Year, f64>,
    /// Season to sampled stop durations in milliseconds
    #[serde(default)]
    pub distribution: BTreeMap<Year, Vec<f64>>,
    #[serde(default)]
    pub constructor_stats: BTreeMap<String, PitStopStats>,
}

/// Five-number summary of a constructor's stop durations, in milliseconds
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PitStopStats {
    pub count: u32,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

// Year lists are published as numbers by some collections and as strings by others
#[derive(Deserialize)]
#[serde(untagged)]
enum YearValue {
    Number(Year),
    Text(String),
}

fn deserialize_years<'de, D>(deserializer: D) -> Result<Vec<Year>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<YearValue>::deserialize(deserializer)?
        .into_iter()
        .map(|value| match value {
            YearValue::Number(year) => Ok(year),
            YearValue::Text(text) => text
                .trim()
                .parse::<Year>()
                .map_err(|e| de::Error::custom(format!("invalid year {text:?}: {e}"))),
        })
        .collect()
}

fn deserialize_ordered_entries<'de, D>(deserializer: D) -> Result<Vec<(String, f64)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, f64)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of names to numbers")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, value)) = map.next_entry::<String, f64>()? {
                entries.push((name, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}
