// Constructor dominance view: share heatmap, share trends and competitive entropy

use itertools::Itertools;
use serde::Serialize;

use crate::colors::Color;
use crate::dataset::{Dataset, Year};
use crate::filters::Era;
use crate::ranking::{era_seasons, rank_constructors_by_share};

/// Only the leading constructors get a trend line
pub const TREND_LINE_LIMIT: usize = 8;

/// Constructor by season share matrix, rows in ranking order
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ShareMatrix {
    pub constructors: Vec<String>,
    pub seasons: Vec<Year>,
    /// `cells[row][column]`, zero where the constructor has no share that season
    pub cells: Vec<Vec<f64>>,
    pub max_share: f64,
}

impl ShareMatrix {
    pub fn cell(&self, constructor: &str, season: Year) -> Option<f64> {
        let row = self.constructors.iter().position(|c| c == constructor)?;
        let column = self.seasons.iter().position(|s| *s == season)?;
        Some(self.cells[row][column])
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ShareTrend {
    pub constructor: String,
    pub color: Color,
    pub shares: Vec<(Year, f64)>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ConstructorsView {
    pub era: Era,
    pub heatmap: ShareMatrix,
    pub trends: Vec<ShareTrend>,
    /// Entropy per season of the era, seasons without a value omitted
    pub entropy: Vec<(Year, f64)>,
}

pub fn derive_constructors(dataset: &Dataset, era: &Era, count: usize) -> ConstructorsView {
    let dominance = dataset.constructor_dominance();
    let colors = dataset.colors();
    let seasons = era_seasons(dominance, era);
    let ranked = rank_constructors_by_share(dominance, era, count);

    let share_row = |constructor: &str| {
        seasons
            .iter()
            .map(|season| dominance.share(*season, constructor).unwrap_or(0.0))
            .collect_vec()
    };

    let cells = ranked.iter().map(|c| share_row(c.name)).collect_vec();
    let max_share = cells
        .iter()
        .flatten()
        .copied()
        .fold(0.0, f64::max);
    let heatmap = ShareMatrix {
        constructors: ranked.iter().map(|c| c.name.to_string()).collect(),
        seasons: seasons.clone(),
        cells,
        max_share,
    };

    let trends = ranked
        .iter()
        .take(TREND_LINE_LIMIT)
        .enumerate()
        .map(|(rank, c)| ShareTrend {
            constructor: c.name.to_string(),
            color: colors.color_for(Some(c.name), rank),
            shares: seasons.iter().copied().zip(share_row(c.name)).collect(),
        })
        .collect();

    let entropy = seasons
        .iter()
        .filter_map(|season| dominance.entropy.get(season).map(|bits| (*season, *bits)))
        .collect();

    ConstructorsView {
        era: *era,
        heatmap,
        trends,
        entropy,
    }
}
