// Chart-ready views derived from a dataset and the current filter state.
// Every function here is pure: the same dataset and filters always give the same view.

pub mod championship;
pub mod circuits;
pub mod constructors;
pub mod grid;
pub mod histogram;
pub mod pit_stops;

use itertools::Itertools;
use serde::Serialize;

use crate::dataset::{Dataset, Year};
use crate::filters::{FilterState, SeasonFilter};

pub use championship::{ChampionshipView, DriverOption, PointsSeries, StandingsRow, derive_championship};
pub use circuits::{CircuitsView, DnfEntry, LapProfilePoint, MapMarker, derive_circuits};
pub use constructors::{ConstructorsView, ShareMatrix, ShareTrend, derive_constructors};
pub use grid::{AverageGain, GridPoint, GridView, derive_grid};
pub use histogram::{Histogram, HistogramBin, ValueCount};
pub use pit_stops::{ConstructorBox, PitStopsView, derive_pit_stops};

/// Dataset size counters shown in the header
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderStats {
    pub seasons: usize,
    pub drivers: usize,
    pub constructors: usize,
    pub circuits: usize,
}

impl HeaderStats {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let metadata = dataset.metadata();
        Self {
            seasons: metadata.years.len(),
            drivers: metadata.drivers.len(),
            constructors: metadata.constructors.len(),
            circuits: metadata.circuits.len(),
        }
    }
}

/// Seasons offered by each picker, latest first
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct SeasonOptions {
    pub championship: Vec<Year>,
    pub grid: Vec<Year>,
    pub pit_stops: Vec<SeasonFilter>,
}

impl SeasonOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            championship: dataset.championship().keys().rev().copied().collect_vec(),
            grid: dataset
                .grid_vs_race()
                .per_season
                .keys()
                .rev()
                .copied()
                .collect_vec(),
            pit_stops: std::iter::once(SeasonFilter::All)
                .chain(
                    dataset
                        .pit_stops()
                        .distribution
                        .keys()
                        .rev()
                        .map(|year| SeasonFilter::Season(*year)),
                )
                .collect_vec(),
        }
    }
}

/// Everything the dashboard draws for one filter state
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub header: HeaderStats,
    pub seasons: SeasonOptions,
    pub championship: Option<ChampionshipView>,
    pub constructors: ConstructorsView,
    pub grid: GridView,
    pub circuits: CircuitsView,
    pub pit_stops: PitStopsView,
}

pub fn derive_view(dataset: &Dataset, filters: &FilterState) -> DashboardView {
    DashboardView {
        header: HeaderStats::from_dataset(dataset),
        seasons: SeasonOptions::from_dataset(dataset),
        championship: derive_championship(dataset, &filters.championship),
        constructors: derive_constructors(dataset, &filters.constructor_era, filters.constructor_count),
        grid: derive_grid(dataset, filters.grid_season),
        circuits: derive_circuits(dataset),
        pit_stops: derive_pit_stops(dataset, filters.pit_season),
    }
}
