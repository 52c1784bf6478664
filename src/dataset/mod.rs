// Dataset store module
// Holds the six precomputed collections the dashboard derives its views from

pub mod loader;
pub mod types;

use std::fmt;

pub use loader::{CollectionSource, DirectorySource, MemorySource, load, load_blocking};
pub use types::{
    ChampionshipBattles, CircuitProfile, Circuits, ConstructorDominance, DriverSeasonRecord,
    EntitySummary, GridRaceRecord, GridVsRace, Metadata, PitStopStats, PitStops, Round,
    SeasonStandings, Year,
};

use crate::colors::ColorResolver;

/// The named collections making up a dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Metadata,
    ChampionshipBattles,
    ConstructorDominance,
    GridVsRace,
    Circuits,
    PitStops,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Metadata,
        Collection::ChampionshipBattles,
        Collection::ConstructorDominance,
        Collection::GridVsRace,
        Collection::Circuits,
        Collection::PitStops,
    ];

    /// Stable collection name, also the stem of its JSON document
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Metadata => "metadata",
            Collection::ChampionshipBattles => "championship_battles",
            Collection::ConstructorDominance => "constructor_dominance",
            Collection::GridVsRace => "grid_vs_race",
            Collection::Circuits => "circuits",
            Collection::PitStops => "pit_stops",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully loaded dataset. Only ever constructed once every collection parsed, and never
/// mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    metadata: Metadata,
    championship: ChampionshipBattles,
    constructor_dominance: ConstructorDominance,
    grid_vs_race: GridVsRace,
    circuits: Circuits,
    pit_stops: PitStops,
}

impl Dataset {
    pub fn from_parts(
        metadata: Metadata,
        championship: ChampionshipBattles,
        constructor_dominance: ConstructorDominance,
        grid_vs_race: GridVsRace,
        circuits: Circuits,
        pit_stops: PitStops,
    ) -> Self {
        Self {
            metadata,
            championship,
            constructor_dominance,
            grid_vs_race,
            circuits,
            pit_stops,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn championship(&self) -> &ChampionshipBattles {
        &self.championship
    }

    pub fn constructor_dominance(&self) -> &ConstructorDominance {
        &self.constructor_dominance
    }

    pub fn grid_vs_race(&self) -> &GridVsRace {
        &self.grid_vs_race
    }

    pub fn circuits(&self) -> &Circuits {
        &self.circuits
    }

    pub fn pit_stops(&self) -> &PitStops {
        &self.pit_stops
    }

    pub fn championship_season(&self, year: Year) -> Option<&SeasonStandings> {
        self.championship.get(&year)
    }

    /// Color resolver backed by the published team colors
    pub fn colors(&self) -> ColorResolver<'_> {
        ColorResolver::new(&self.metadata.team_colors)
    }
}
