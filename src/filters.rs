// User filter choices, parsed from the text the CLI and pickers hand us

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::config::DashboardConfig;
use crate::dataset::{Dataset, Year};
use crate::errors::PaddockError;
use crate::selection::ChampionshipSession;

/// Inclusive range of seasons used to scope constructor aggregation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Era {
    #[default]
    All,
    Range {
        start: Year,
        end: Year,
    },
}

impl Era {
    /// Preset eras offered by the constructor picker
    pub const PRESETS: [Era; 7] = [
        Era::All,
        Era::Range { start: 1950, end: 1969 },
        Era::Range { start: 1970, end: 1989 },
        Era::Range { start: 1990, end: 2005 },
        Era::Range { start: 2006, end: 2013 },
        Era::Range { start: 2014, end: 2021 },
        Era::Range { start: 2022, end: 2030 },
    ];

    pub fn contains(&self, year: Year) -> bool {
        match self {
            Era::All => true,
            Era::Range { start, end } => (*start..=*end).contains(&year),
        }
    }
}

impl FromStr for Era {
    type Err = PaddockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Era::All);
        }

        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| PaddockError::invalid_filter("era", format!("expected \"all\" or START-END, got {s:?}")))?;
        let parse = |text: &str| {
            text.trim()
                .parse::<Year>()
                .map_err(|e| PaddockError::invalid_filter("era", format!("invalid year {text:?}: {e}")))
        };
        let (start, end) = (parse(start)?, parse(end)?);
        if start > end {
            return Err(PaddockError::invalid_filter(
                "era",
                format!("start year {start} is after end year {end}"),
            ));
        }
        Ok(Era::Range { start, end })
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Era::All => f.write_str("all"),
            Era::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

impl Serialize for Era {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single season or every season
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeasonFilter {
    #[default]
    All,
    Season(Year),
}

impl SeasonFilter {
    pub fn contains(&self, year: Year) -> bool {
        match self {
            SeasonFilter::All => true,
            SeasonFilter::Season(season) => *season == year,
        }
    }
}

impl FromStr for SeasonFilter {
    type Err = PaddockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(SeasonFilter::All);
        }
        s.parse::<Year>()
            .map(SeasonFilter::Season)
            .map_err(|e| PaddockError::invalid_filter("season", format!("invalid season {s:?}: {e}")))
    }
}

impl fmt::Display for SeasonFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonFilter::All => f.write_str("all"),
            SeasonFilter::Season(year) => write!(f, "{year}"),
        }
    }
}

impl Serialize for SeasonFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Every choice the user has made across the dashboard modules
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub championship: ChampionshipSession,
    pub constructor_era: Era,
    pub constructor_count: usize,
    pub grid_season: Option<Year>,
    pub pit_season: SeasonFilter,
}

impl FilterState {
    /// Start-up state: latest championship season with its top drivers selected, every era,
    /// latest grid season and every pit stop season.
    pub fn initial(dataset: &Dataset, config: &DashboardConfig) -> Self {
        let mut championship = ChampionshipSession::new();
        if let Some(latest) = dataset.championship().keys().next_back() {
            championship.change_season(dataset.championship(), *latest, config.default_top_drivers);
        }

        Self {
            championship,
            constructor_era: Era::All,
            constructor_count: config.default_constructor_count,
            grid_season: dataset.grid_vs_race().per_season.keys().next_back().copied(),
            pit_season: SeasonFilter::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_era() {
        assert_eq!("all".parse::<Era>().unwrap(), Era::All);
        assert_eq!(
            " 2010-2013 ".parse::<Era>().unwrap(),
            Era::Range {
                start: 2010,
                end: 2013
            }
        );
        assert!("2013-2010".parse::<Era>().is_err());
        assert!("2010".parse::<Era>().is_err());
        assert!("twenty-ten".parse::<Era>().is_err());
    }

    #[test]
    fn test_era_round_trips_through_display() {
        for era in Era::PRESETS {
            assert_eq!(era.to_string().parse::<Era>().unwrap(), era);
        }
    }

    #[test]
    fn test_era_bounds_are_inclusive() {
        let era = Era::Range {
            start: 2010,
            end: 2013,
        };
        assert!(era.contains(2010));
        assert!(era.contains(2013));
        assert!(!era.contains(2009));
        assert!(!era.contains(2014));
    }

    #[test]
    fn test_parse_season_filter() {
        assert_eq!("ALL".parse::<SeasonFilter>().unwrap(), SeasonFilter::All);
        assert_eq!(
            "2019".parse::<SeasonFilter>().unwrap(),
            SeasonFilter::Season(2019)
        );
        match "19x".parse::<SeasonFilter>() {
            Err(PaddockError::InvalidFilter { field, .. }) => assert_eq!(field, "season"),
            other => panic!("Expected InvalidFilter error, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_state_on_empty_dataset() {
        let state = FilterState::initial(&Dataset::default(), &DashboardConfig::default());
        assert_eq!(state.championship.season(), None);
        assert!(state.championship.selected().is_empty());
        assert_eq!(state.grid_season, None);
        assert_eq!(state.constructor_count, 10);
        assert_eq!(state.pit_season, SeasonFilter::All);
    }
}
