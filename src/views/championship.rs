// Championship battle view: points progression of the selected drivers and the final standings

use serde::Serialize;

use crate::colors::{Color, ColorResolver};
use crate::dataset::{Dataset, Metadata, Round, SeasonStandings, Year};
use crate::ranking::{rank_by_final_points, standings_order};
use crate::selection::ChampionshipSession;

/// Cumulative points of one driver over the season's rounds
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PointsSeries {
    pub driver: String,
    /// Series label, the driver code
    pub name: String,
    pub color: Color,
    /// One entry per round of the season; `None` where the driver has no points recorded
    pub points: Vec<(Round, Option<f64>)>,
}

impl PointsSeries {
    /// Runs of consecutive rounds with points, so a gap splits the line
    pub fn segments(&self) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (round, points) in &self.points {
            match points {
                Some(points) => current.push([*round as f64, *points]),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StandingsRow {
    /// Final-round position, `None` for unranked drivers
    pub position: Option<u32>,
    pub driver: String,
    pub code: String,
    pub constructor: String,
    pub points: Option<f64>,
    pub wins: u32,
    pub podium: bool,
    pub champion: bool,
}

/// A driver offered by the selection picker
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DriverOption {
    pub driver: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ChampionshipView {
    pub season: Year,
    pub rounds: Vec<Round>,
    pub series: Vec<PointsSeries>,
    pub standings: Vec<StandingsRow>,
    pub driver_options: Vec<DriverOption>,
    pub selection_label: String,
}

fn points_series(
    season: Year,
    standings: &SeasonStandings,
    session: &ChampionshipSession,
    metadata: &Metadata,
    colors: ColorResolver<'_>,
) -> Vec<PointsSeries> {
    session
        .selected()
        .iter()
        .filter_map(|name| standings.drivers.get_key_value(name))
        .enumerate()
        .map(|(ordinal, (name, record))| PointsSeries {
            driver: name.clone(),
            name: record.display_code(name),
            color: colors.color_for(metadata.constructor_for(season, name), ordinal),
            points: standings
                .rounds
                .iter()
                .map(|round| (*round, record.points_at(*round)))
                .collect(),
        })
        .collect()
}

fn standings_table(season: Year, standings: &SeasonStandings, metadata: &Metadata) -> Vec<StandingsRow> {
    let final_round = standings.final_round();
    standings_order(standings)
        .into_iter()
        .map(|driver| {
            let position = final_round.and_then(|round| driver.record.position_at(round));
            StandingsRow {
                position,
                driver: driver.name.to_string(),
                code: driver.record.display_code(driver.name),
                constructor: metadata
                    .constructor_for(season, driver.name)
                    .unwrap_or_default()
                    .to_string(),
                points: driver.final_points,
                wins: driver.record.wins,
                podium: position.is_some_and(|p| p <= 3),
                champion: position == Some(1),
            }
        })
        .collect()
}

/// Championship view for the session's season, `None` when the season has no data
pub fn derive_championship(dataset: &Dataset, session: &ChampionshipSession) -> Option<ChampionshipView> {
    let season = session.season()?;
    let standings = dataset.championship_season(season)?;
    let metadata = dataset.metadata();

    let driver_options = rank_by_final_points(standings)
        .into_iter()
        .map(|driver| DriverOption {
            driver: driver.name.to_string(),
            label: format!("{} — {}", driver.record.display_code(driver.name), driver.name),
            selected: session.is_selected(driver.name),
        })
        .collect();

    Some(ChampionshipView {
        season,
        rounds: standings.rounds.clone(),
        series: points_series(season, standings, session, metadata, dataset.colors()),
        standings: standings_table(season, standings, metadata),
        driver_options,
        selection_label: session.selected_codes(Some(standings)),
    })
}
