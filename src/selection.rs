// Championship driver selection, the only mutable state of a dashboard session

use itertools::Itertools;
use log::debug;

use crate::dataset::{ChampionshipBattles, SeasonStandings, Year};
use crate::ranking::rank_by_final_points;

/// Label shown when no driver is selected
pub const EMPTY_SELECTION_LABEL: &str = "Select drivers...";

/// The season being inspected and the drivers chosen from it. Selected drivers always
/// belong to the current season and keep the order they were added in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChampionshipSession {
    season: Option<Year>,
    selected: Vec<String>,
}

impl ChampionshipSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_season(season: Year) -> Self {
        Self {
            season: Some(season),
            selected: Vec::new(),
        }
    }

    pub fn season(&self) -> Option<Year> {
        self.season
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, driver: &str) -> bool {
        self.selected.iter().any(|name| name == driver)
    }

    fn current_season<'a>(&self, battles: &'a ChampionshipBattles) -> Option<&'a SeasonStandings> {
        self.season.and_then(|season| battles.get(&season))
    }

    /// Switch season and clear the selection
    pub fn set_season(&mut self, season: Year) {
        debug!("Championship season changed to {}", season);
        self.season = Some(season);
        self.selected.clear();
    }

    /// Switch season and select its top `top_n` drivers
    pub fn change_season(&mut self, battles: &ChampionshipBattles, season: Year, top_n: usize) {
        self.set_season(season);
        self.select_top_n(battles, top_n);
    }

    /// Replace the selection with the `n` drivers with the most points at the final round
    pub fn select_top_n(&mut self, battles: &ChampionshipBattles, n: usize) {
        self.selected = self
            .current_season(battles)
            .map(|season| {
                rank_by_final_points(season)
                    .into_iter()
                    .take(n)
                    .map(|driver| driver.name.to_string())
                    .collect_vec()
            })
            .unwrap_or_default();
    }

    /// Select every driver of the season, in final points order
    pub fn select_all(&mut self, battles: &ChampionshipBattles) {
        self.select_top_n(battles, usize::MAX);
    }

    /// Add or remove a driver. Returns whether the driver is selected afterwards; drivers
    /// that did not race in the current season are ignored.
    pub fn toggle(&mut self, battles: &ChampionshipBattles, driver: &str) -> bool {
        let known = self
            .current_season(battles)
            .is_some_and(|season| season.contains_driver(driver));
        if !known {
            return false;
        }

        if let Some(index) = self.selected.iter().position(|name| name == driver) {
            self.selected.remove(index);
            false
        } else {
            self.selected.push(driver.to_string());
            true
        }
    }

    /// Comma separated driver codes of the selection
    pub fn selected_codes(&self, season: Option<&SeasonStandings>) -> String {
        if self.selected.is_empty() {
            return EMPTY_SELECTION_LABEL.to_string();
        }
        self.selected
            .iter()
            .map(|name| match season.and_then(|season| season.drivers.get(name)) {
                Some(record) => record.display_code(name),
                None => crate::dataset::types::fallback_code(name),
            })
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DriverSeasonRecord;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn battles() -> ChampionshipBattles {
        let season = |drivers: &[(&str, &str, f64)]| SeasonStandings {
            rounds: vec![1, 2],
            drivers: drivers
                .iter()
                .map(|(name, code, points)| {
                    (
                        name.to_string(),
                        DriverSeasonRecord {
                            code: code.to_string(),
                            points: BTreeMap::from([(1, points / 2.0), (2, *points)]),
                            ..Default::default()
                        },
                    )
                })
                .collect(),
        };
        BTreeMap::from([
            (
                2020,
                season(&[("Lewis Hamilton", "HAM", 347.0), ("Valtteri Bottas", "BOT", 223.0)]),
            ),
            (
                2021,
                season(&[
                    ("Max Verstappen", "VER", 395.5),
                    ("Lewis Hamilton", "HAM", 387.5),
                    ("Valtteri Bottas", "BOT", 226.0),
                    ("Sergio Perez", "", 190.0),
                ]),
            ),
        ])
    }

    #[test]
    fn test_top_n_selection() {
        let battles = battles();
        let mut session = ChampionshipSession::for_season(2021);

        session.select_top_n(&battles, 1);
        assert_eq!(session.selected(), ["Max Verstappen"]);

        session.select_top_n(&battles, 2);
        assert_eq!(session.selected(), ["Max Verstappen", "Lewis Hamilton"]);

        session.select_top_n(&battles, 10);
        assert_eq!(session.selected().len(), 4);
    }

    #[test]
    fn test_season_change_clears_selection() {
        let battles = battles();
        let mut session = ChampionshipSession::for_season(2021);
        session.select_all(&battles);
        assert_eq!(session.selected().len(), 4);

        session.set_season(2020);
        assert!(session.selected().is_empty());

        session.change_season(&battles, 2021, 5);
        assert_eq!(session.selected().len(), 4);
        assert_eq!(session.season(), Some(2021));
    }

    #[test]
    fn test_toggle_ignores_drivers_outside_the_season() {
        let battles = battles();
        let mut session = ChampionshipSession::for_season(2020);

        assert!(!session.toggle(&battles, "Max Verstappen"));
        assert!(session.selected().is_empty());

        assert!(session.toggle(&battles, "Valtteri Bottas"));
        assert!(session.is_selected("Valtteri Bottas"));
        assert!(!session.toggle(&battles, "Valtteri Bottas"));
        assert!(session.selected().is_empty());
    }

    #[test]
    fn test_missing_season_selects_nothing() {
        let battles = battles();
        let mut session = ChampionshipSession::for_season(1950);
        session.select_all(&battles);
        assert!(session.selected().is_empty());
        assert!(!session.toggle(&battles, "Lewis Hamilton"));
    }

    #[test]
    fn test_selected_codes_label() {
        let battles = battles();
        let mut session = ChampionshipSession::for_season(2021);
        assert_eq!(session.selected_codes(battles.get(&2021)), EMPTY_SELECTION_LABEL);

        session.toggle(&battles, "Max Verstappen");
        session.toggle(&battles, "Sergio Perez");
        assert_eq!(session.selected_codes(battles.get(&2021)), "VER, PER");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_top_n_is_bounded_and_ordered(
            points in proptest::collection::vec(0.0f64..500.0, 0..25),
            n in 0usize..30,
        ) {
            let season = SeasonStandings {
                rounds: vec![1],
                drivers: points
                    .iter()
                    .enumerate()
                    .map(|(i, points)| {
                        (
                            format!("Driver {i:02}"),
                            DriverSeasonRecord {
                                points: BTreeMap::from([(1, *points)]),
                                ..Default::default()
                            },
                        )
                    })
                    .collect(),
            };
            let battles = BTreeMap::from([(2000, season)]);
            let mut session = ChampionshipSession::for_season(2000);
            session.select_top_n(&battles, n);

            prop_assert_eq!(session.selected().len(), n.min(points.len()));
            let season = &battles[&2000];
            let selected_points = session
                .selected()
                .iter()
                .map(|name| season.drivers[name].points_at(1).unwrap_or(0.0))
                .collect_vec();
            prop_assert!(selected_points.windows(2).all(|pair| pair[0] >= pair[1]));
            let cutoff = selected_points.last().copied().unwrap_or(f64::INFINITY);
            for (name, record) in &season.drivers {
                if !session.is_selected(name) && n > 0 {
                    prop_assert!(record.points_at(1).unwrap_or(0.0) <= cutoff);
                }
            }
        }

        #[test]
        fn prop_selection_stays_within_season(
            toggles in proptest::collection::vec(0usize..6, 0..20),
            switch_to_2020 in any::<bool>(),
        ) {
            let names = [
                "Max Verstappen",
                "Lewis Hamilton",
                "Valtteri Bottas",
                "Sergio Perez",
                "Nobody",
                "Juan Manuel Fangio",
            ];
            let battles = battles();
            let mut session = ChampionshipSession::for_season(2021);
            for index in toggles {
                session.toggle(&battles, names[index]);
            }
            if switch_to_2020 {
                session.set_season(2020);
                prop_assert!(session.selected().is_empty());
            }
            let season = session.season().and_then(|year| battles.get(&year));
            for name in session.selected() {
                prop_assert!(season.is_some_and(|s| s.contains_driver(name)));
            }
            prop_assert!(session.selected().iter().all_unique());
        }
    }
}
