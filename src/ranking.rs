// Ranking and aggregation over the loaded collections
// All sorts are stable, so equal keys keep the key order of the source map.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::dataset::{
    CircuitProfile, ConstructorDominance, DriverSeasonRecord, PitStopStats, SeasonStandings, Year,
};
use crate::filters::Era;

/// Standings position given to drivers with no final-round position
pub const UNRANKED_POSITION: u32 = 99;
pub const DNF_RANKING_LIMIT: usize = 25;
pub const PIT_STOP_RANKING_LIMIT: usize = 30;
/// Constructors with fewer recorded stops are left out of the pit stop ranking
pub const MIN_PIT_STOPS: u32 = 50;

/// A driver's standing at the final round of a season
#[derive(Clone, Debug, PartialEq)]
pub struct RankedDriver<'a> {
    pub name: &'a str,
    pub record: &'a DriverSeasonRecord,
    /// Points at the final round, `None` when the driver has no entry for it
    pub final_points: Option<f64>,
    pub final_position: u32,
}

impl RankedDriver<'_> {
    /// Points used for ordering, absent points count as zero
    pub fn ranking_points(&self) -> f64 {
        self.final_points.unwrap_or(0.0)
    }
}

fn final_standings(season: &SeasonStandings) -> impl Iterator<Item = RankedDriver<'_>> {
    let final_round = season.final_round();
    season.drivers.iter().map(move |(name, record)| RankedDriver {
        name,
        record,
        final_points: final_round.and_then(|round| record.points_at(round)),
        final_position: final_round
            .and_then(|round| record.position_at(round))
            .unwrap_or(UNRANKED_POSITION),
    })
}

/// Drivers by final-round points, highest first
pub fn rank_by_final_points(season: &SeasonStandings) -> Vec<RankedDriver<'_>> {
    final_standings(season)
        .sorted_by(|a, b| b.ranking_points().total_cmp(&a.ranking_points()))
        .collect_vec()
}

/// Drivers by final-round position, unranked drivers last
pub fn standings_order(season: &SeasonStandings) -> Vec<RankedDriver<'_>> {
    final_standings(season)
        .sorted_by_key(|driver| driver.final_position)
        .collect_vec()
}

/// A constructor's summed points share over an era
#[derive(Clone, Debug, PartialEq)]
pub struct RankedConstructor<'a> {
    pub name: &'a str,
    pub total_share: f64,
}

/// Seasons of the collection that fall inside `era`, ascending
pub fn era_seasons(dominance: &ConstructorDominance, era: &Era) -> Vec<Year> {
    dominance
        .years
        .iter()
        .copied()
        .filter(|year| era.contains(*year))
        .collect_vec()
}

/// Top `limit` constructors by summed share across the seasons of `era`
pub fn rank_constructors_by_share<'a>(
    dominance: &'a ConstructorDominance,
    era: &Era,
    limit: usize,
) -> Vec<RankedConstructor<'a>> {
    let mut totals: BTreeMap<&'a str, f64> = BTreeMap::new();
    for year in era_seasons(dominance, era) {
        let Some(shares) = dominance.shares.get(&year) else {
            continue;
        };
        for (constructor, share) in shares {
            *totals.entry(constructor.as_str()).or_insert(0.0) += share;
        }
    }

    totals
        .into_iter()
        .map(|(name, total_share)| RankedConstructor { name, total_share })
        .sorted_by(|a, b| b.total_share.total_cmp(&a.total_share))
        .take(limit)
        .collect_vec()
}

/// Circuits by DNF rate, highest first
pub fn rank_circuits_by_dnf(
    circuits: &BTreeMap<String, CircuitProfile>,
    limit: usize,
) -> Vec<(&str, &CircuitProfile)> {
    circuits
        .iter()
        .map(|(name, profile)| (name.as_str(), profile))
        .sorted_by(|(_, a), (_, b)| b.dnf_rate.total_cmp(&a.dnf_rate))
        .take(limit)
        .collect_vec()
}

/// Constructors by median stop duration, fastest first, skipping small samples
pub fn rank_pit_constructors(
    stats: &BTreeMap<String, PitStopStats>,
    min_stops: u32,
    limit: usize,
) -> Vec<(&str, &PitStopStats)> {
    stats
        .iter()
        .map(|(name, stats)| (name.as_str(), stats))
        .sorted_by(|(_, a), (_, b)| a.median.total_cmp(&b.median))
        .filter(|(_, stats)| stats.count >= min_stops)
        .take(limit)
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn driver(points: &[(u32, f64)], positions: &[(u32, Option<u32>)]) -> DriverSeasonRecord {
        DriverSeasonRecord {
            points: points.iter().copied().collect(),
            positions: positions.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn season_2021() -> SeasonStandings {
        SeasonStandings {
            rounds: vec![1, 22],
            drivers: BTreeMap::from([
                (
                    "Lewis Hamilton".to_string(),
                    driver(&[(1, 25.0), (22, 387.5)], &[(1, Some(1)), (22, Some(2))]),
                ),
                (
                    "Max Verstappen".to_string(),
                    driver(&[(1, 18.0), (22, 395.5)], &[(1, Some(2)), (22, Some(1))]),
                ),
                (
                    "Nikita Mazepin".to_string(),
                    driver(&[(1, 0.0)], &[(1, None)]),
                ),
            ]),
        }
    }

    fn dominance(shares: &[(u16, &[(&str, f64)])]) -> ConstructorDominance {
        ConstructorDominance {
            years: shares.iter().map(|(year, _)| *year).collect(),
            shares: shares
                .iter()
                .map(|(year, entries)| {
                    (
                        *year,
                        entries
                            .iter()
                            .map(|(name, share)| (name.to_string(), *share))
                            .collect(),
                    )
                })
                .collect(),
            entropy: BTreeMap::new(),
        }
    }

    #[test]
    fn test_standings_order_puts_unranked_last() {
        let season = season_2021();
        let standings = standings_order(&season);
        let names = standings.iter().map(|d| d.name).collect_vec();

        assert_eq!(names, vec!["Max Verstappen", "Lewis Hamilton", "Nikita Mazepin"]);
        assert_eq!(standings[2].final_position, UNRANKED_POSITION);
        assert_eq!(standings[2].final_points, None);
        assert_eq!(standings[0].final_points, Some(395.5));
    }

    #[test]
    fn test_rank_by_final_points() {
        let season = season_2021();
        let ranked = rank_by_final_points(&season);
        assert_eq!(ranked[0].name, "Max Verstappen");
        assert_eq!(ranked[1].name, "Lewis Hamilton");
        assert_eq!(ranked[2].ranking_points(), 0.0);
    }

    #[test]
    fn test_constructor_ranking_over_era() {
        let dominance = dominance(&[
            (2009, &[("Brawn", 90.0), ("Ferrari", 10.0)]),
            (2010, &[("Red Bull", 40.0), ("Ferrari", 20.0)]),
            (2011, &[("Red Bull", 45.0), ("Ferrari", 15.0)]),
            (2012, &[("Red Bull", 40.0), ("Ferrari", 20.0)]),
            (2013, &[("Red Bull", 45.0), ("Ferrari", 15.0)]),
        ]);
        let era = Era::Range {
            start: 2010,
            end: 2013,
        };

        let ranked = rank_constructors_by_share(&dominance, &era, 10);
        assert_eq!(
            ranked,
            vec![
                RankedConstructor {
                    name: "Red Bull",
                    total_share: 170.0
                },
                RankedConstructor {
                    name: "Ferrari",
                    total_share: 70.0
                },
            ]
        );

        let all = rank_constructors_by_share(&dominance, &Era::All, 1);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Red Bull");
    }

    #[test]
    fn test_constructor_ranking_only_uses_listed_years() {
        let mut dominance = dominance(&[(2010, &[("Red Bull", 40.0)])]);
        dominance
            .shares
            .insert(2011, BTreeMap::from([("Ferrari".to_string(), 99.0)]));

        let ranked = rank_constructors_by_share(&dominance, &Era::All, 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "Red Bull");
    }

    #[test]
    fn test_equal_shares_keep_name_order() {
        let dominance = dominance(&[(2020, &[("Zeta", 10.0), ("Alpha", 10.0), ("Mid", 10.0)])]);
        let ranked = rank_constructors_by_share(&dominance, &Era::All, 3);
        assert_eq!(
            ranked.iter().map(|c| c.name).collect_vec(),
            vec!["Alpha", "Mid", "Zeta"]
        );
    }

    #[test]
    fn test_dnf_ranking() {
        let circuits: BTreeMap<String, CircuitProfile> = (0..30)
            .map(|i| {
                (
                    format!("Circuit {i:02}"),
                    CircuitProfile {
                        dnf_rate: i as f64,
                        ..Default::default()
                    },
                )
            })
            .collect();

        let ranked = rank_circuits_by_dnf(&circuits, DNF_RANKING_LIMIT);
        assert_eq!(ranked.len(), 25);
        assert_eq!(ranked[0].0, "Circuit 29");
        assert_eq!(ranked[24].0, "Circuit 05");
    }

    #[test]
    fn test_pit_ranking_excludes_small_samples() {
        let stats = BTreeMap::from([
            (
                "Forty Nine".to_string(),
                PitStopStats {
                    count: 49,
                    median: 1000.0,
                    ..Default::default()
                },
            ),
            (
                "Fifty".to_string(),
                PitStopStats {
                    count: 50,
                    median: 2500.0,
                    ..Default::default()
                },
            ),
            (
                "Quick".to_string(),
                PitStopStats {
                    count: 400,
                    median: 2100.0,
                    ..Default::default()
                },
            ),
        ]);

        let ranked = rank_pit_constructors(&stats, MIN_PIT_STOPS, PIT_STOP_RANKING_LIMIT);
        assert_eq!(ranked.iter().map(|(name, _)| *name).collect_vec(), vec!["Quick", "Fifty"]);
    }

    #[test]
    fn test_pit_ranking_keeps_fastest_thirty() {
        // medians fall as the index rises, so T39 is the fastest
        let mut stats: BTreeMap<String, PitStopStats> = (0..40u32)
            .map(|i| {
                (
                    format!("T{i:02}"),
                    PitStopStats {
                        count: 50 + i,
                        median: 100.0 - f64::from(i),
                        ..Default::default()
                    },
                )
            })
            .collect();

        let ranked = rank_pit_constructors(&stats, MIN_PIT_STOPS, PIT_STOP_RANKING_LIMIT);
        assert_eq!(ranked.len(), PIT_STOP_RANKING_LIMIT);
        assert_eq!(ranked[0].0, "T39");
        assert_eq!(ranked[29].0, "T10");
        assert!(ranked.windows(2).all(|pair| pair[0].1.median < pair[1].1.median));
        assert!(ranked.iter().all(|(name, _)| *name >= "T10"));

        // a too-small sample is dropped before the cutoff, letting T09 in
        stats.get_mut("T39").unwrap().count = 49;
        let ranked = rank_pit_constructors(&stats, MIN_PIT_STOPS, PIT_STOP_RANKING_LIMIT);
        assert_eq!(ranked.len(), PIT_STOP_RANKING_LIMIT);
        assert_eq!(ranked[0].0, "T38");
        assert_eq!(ranked[29].0, "T09");
    }

    #[test]
    fn test_era_ranking_uses_only_listed_years() {
        let mut dominance = dominance(&[(2010, &[("Red Bull", 40.0)])]);
        dominance.years.clear();

        assert!(era_seasons(&dominance, &Era::All).is_empty());
        assert!(rank_constructors_by_share(&dominance, &Era::All, 10).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_top_constructors_ignore_weaker_additions(
            shares in proptest::collection::vec(10.0f64..100.0, 1..12),
            limit in 1usize..8,
            extra in 0.0f64..9.99,
        ) {
            let names = (0..shares.len()).map(|i| format!("Team {i:02}")).collect_vec();
            let entries = names.iter().map(String::as_str).zip(shares.iter().copied()).collect_vec();
            let base = dominance(&[(2000, entries.as_slice())]);
            let ranked = rank_constructors_by_share(&base, &Era::All, limit)
                .iter()
                .map(|c| c.name.to_string())
                .collect_vec();

            let mut extended = base.clone();
            if let Some(season) = extended.shares.get_mut(&2000) {
                season.insert("Backmarker".to_string(), extra);
            }
            let extended_ranked = rank_constructors_by_share(&extended, &Era::All, limit)
                .iter()
                .map(|c| c.name.to_string())
                .collect_vec();

            if shares.len() >= limit {
                prop_assert_eq!(ranked, extended_ranked);
            } else {
                prop_assert_eq!(&extended_ranked[..ranked.len()], &ranked[..]);
            }
        }
    }
}
