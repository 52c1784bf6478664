// Grid versus race view: start against finish, positions gained and all-time averages

use serde::Serialize;

use crate::colors::Color;
use crate::dataset::{Dataset, GridRaceRecord, Year};
use crate::views::histogram::{ValueCount, value_counts};

/// Diagonal where finish equals grid, drawn for reference
pub const REFERENCE_LINE: [[f64; 2]; 2] = [[1.0, 1.0], [22.0, 22.0]];

/// One scatter point with its hover labels
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GridPoint {
    pub grid: u32,
    pub finish: u32,
    pub positions_gained: i32,
    pub driver: String,
    pub constructor: String,
    pub circuit: String,
}

impl From<&GridRaceRecord> for GridPoint {
    fn from(record: &GridRaceRecord) -> Self {
        Self {
            grid: record.grid,
            finish: record.finish,
            positions_gained: record.positions_gained,
            driver: record.driver.clone(),
            constructor: record.constructor.clone(),
            circuit: record.circuit.clone(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AverageGain {
    pub name: String,
    pub average: f64,
    pub color: Color,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GridView {
    pub season: Option<Year>,
    pub points: Vec<GridPoint>,
    pub reference_line: [[f64; 2]; 2],
    pub gained_distribution: Vec<ValueCount>,
    pub average_gains: Vec<AverageGain>,
}

pub fn derive_grid(dataset: &Dataset, season: Option<Year>) -> GridView {
    let grid_vs_race = dataset.grid_vs_race();
    let records: &[GridRaceRecord] = season
        .and_then(|season| grid_vs_race.per_season.get(&season))
        .map(Vec::as_slice)
        .unwrap_or_default();

    let average_gains = grid_vs_race
        .avg_positions_gained
        .iter()
        .map(|(name, average)| AverageGain {
            name: name.clone(),
            average: *average,
            color: if *average >= 0.0 {
                Color::primary()
            } else {
                Color::secondary()
            },
        })
        .collect();

    GridView {
        season,
        points: records.iter().map(GridPoint::from).collect(),
        reference_line: REFERENCE_LINE,
        gained_distribution: value_counts(records.iter().map(|r| r.positions_gained)),
        average_gains,
    }
}
