// Pit stop view: median trend, duration distribution and per-constructor summaries

use itertools::Itertools;
use serde::Serialize;

use crate::colors::Color;
use crate::dataset::{Dataset, PitStops, Year};
use crate::filters::SeasonFilter;
use crate::ranking::{MIN_PIT_STOPS, PIT_STOP_RANKING_LIMIT, rank_pit_constructors};
use crate::views::circuits::ms_to_seconds;
use crate::views::histogram::Histogram;

pub const DURATION_BINS: usize = 50;

/// Five-number summary of one constructor's stops, in seconds
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ConstructorBox {
    pub constructor: String,
    pub lower: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper: f64,
    pub count: u32,
    pub color: Color,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PitStopsView {
    pub season: SeasonFilter,
    /// Median stop duration per season, in seconds
    pub median_trend: Vec<(Year, f64)>,
    pub distribution: Histogram,
    pub constructors: Vec<ConstructorBox>,
}

/// Stop durations of the selected season, or of every season, in seconds
pub fn selected_durations(pit_stops: &PitStops, season: SeasonFilter) -> Vec<f64> {
    pit_stops
        .distribution
        .iter()
        .filter(|(year, _)| season.contains(**year))
        .flat_map(|(_, durations)| durations.iter().copied().map(ms_to_seconds))
        .collect_vec()
}

pub fn derive_pit_stops(dataset: &Dataset, season: SeasonFilter) -> PitStopsView {
    let pit_stops = dataset.pit_stops();
    let colors = dataset.colors();

    let constructors = rank_pit_constructors(&pit_stops.constructor_stats, MIN_PIT_STOPS, PIT_STOP_RANKING_LIMIT)
        .into_iter()
        .enumerate()
        .map(|(rank, (name, stats))| ConstructorBox {
            constructor: name.to_string(),
            lower: ms_to_seconds(stats.min),
            q1: ms_to_seconds(stats.q1),
            median: ms_to_seconds(stats.median),
            q3: ms_to_seconds(stats.q3),
            upper: ms_to_seconds(stats.max),
            count: stats.count,
            color: colors.color_for(Some(name), rank),
        })
        .collect();

    PitStopsView {
        season,
        median_trend: pit_stops
            .median_per_season
            .iter()
            .map(|(year, ms)| (*year, ms_to_seconds(*ms)))
            .collect(),
        distribution: Histogram::equal_width(&selected_durations(pit_stops, season), DURATION_BINS),
        constructors,
    }
}
