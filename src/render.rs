// Rendering boundary: a derived view is split into payloads addressed to stable chart targets

use std::fmt;

use serde::Serialize;

use crate::dataset::Year;
use crate::errors::PaddockError;
use crate::views::{
    AverageGain, ConstructorBox, DashboardView, DnfEntry, GridPoint, HeaderStats, Histogram,
    LapProfilePoint, MapMarker, PointsSeries, ShareMatrix, ShareTrend, StandingsRow, ValueCount,
};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartTarget {
    #[serde(rename = "headerStats")]
    HeaderStats,
    #[serde(rename = "champPointsChart")]
    ChampionshipPoints,
    #[serde(rename = "champStandingsTable")]
    ChampionshipStandings,
    #[serde(rename = "constrHeatmap")]
    ConstructorHeatmap,
    #[serde(rename = "constrTrend")]
    ConstructorTrend,
    #[serde(rename = "constrEntropy")]
    ConstructorEntropy,
    #[serde(rename = "gridScatter")]
    GridScatter,
    #[serde(rename = "gridHistogram")]
    GridHistogram,
    #[serde(rename = "gridBarChart")]
    GridBarChart,
    #[serde(rename = "circuitScatter")]
    CircuitScatter,
    #[serde(rename = "circuitDNF")]
    CircuitDnf,
    #[serde(rename = "circuitMap")]
    CircuitMap,
    #[serde(rename = "pitTrend")]
    PitTrend,
    #[serde(rename = "pitHistogram")]
    PitHistogram,
    #[serde(rename = "pitConstructor")]
    PitConstructor,
}

impl ChartTarget {
    pub const ALL: [ChartTarget; 15] = [
        ChartTarget::HeaderStats,
        ChartTarget::ChampionshipPoints,
        ChartTarget::ChampionshipStandings,
        ChartTarget::ConstructorHeatmap,
        ChartTarget::ConstructorTrend,
        ChartTarget::ConstructorEntropy,
        ChartTarget::GridScatter,
        ChartTarget::GridHistogram,
        ChartTarget::GridBarChart,
        ChartTarget::CircuitScatter,
        ChartTarget::CircuitDnf,
        ChartTarget::CircuitMap,
        ChartTarget::PitTrend,
        ChartTarget::PitHistogram,
        ChartTarget::PitConstructor,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ChartTarget::HeaderStats => "headerStats",
            ChartTarget::ChampionshipPoints => "champPointsChart",
            ChartTarget::ChampionshipStandings => "champStandingsTable",
            ChartTarget::ConstructorHeatmap => "constrHeatmap",
            ChartTarget::ConstructorTrend => "constrTrend",
            ChartTarget::ConstructorEntropy => "constrEntropy",
            ChartTarget::GridScatter => "gridScatter",
            ChartTarget::GridHistogram => "gridHistogram",
            ChartTarget::GridBarChart => "gridBarChart",
            ChartTarget::CircuitScatter => "circuitScatter",
            ChartTarget::CircuitDnf => "circuitDNF",
            ChartTarget::CircuitMap => "circuitMap",
            ChartTarget::PitTrend => "pitTrend",
            ChartTarget::PitHistogram => "pitHistogram",
            ChartTarget::PitConstructor => "pitConstructor",
        }
    }
}

impl fmt::Display for ChartTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Data handed to one chart target, borrowed from a [`DashboardView`]
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(untagged)]
pub enum ChartPayload<'a> {
    Header(&'a HeaderStats),
    PointsSeries(&'a [PointsSeries]),
    Standings(&'a [StandingsRow]),
    ShareMatrix(&'a ShareMatrix),
    ShareTrends(&'a [ShareTrend]),
    SeasonValues(&'a [(Year, f64)]),
    GridScatter {
        reference_line: &'a [[f64; 2]; 2],
        points: &'a [GridPoint],
    },
    ValueCounts(&'a [ValueCount]),
    AverageGains(&'a [AverageGain]),
    LapProfile(&'a [LapProfilePoint]),
    DnfRanking(&'a [DnfEntry]),
    MapMarkers(&'a [MapMarker]),
    Histogram(&'a Histogram),
    ConstructorBoxes(&'a [ConstructorBox]),
}

/// Receives chart payloads, one call per target
pub trait ChartSink {
    fn render(&mut self, target: ChartTarget, payload: ChartPayload<'_>) -> Result<(), PaddockError>;
}

impl DashboardView {
    /// Push every chart payload of the view into `sink`, in [`ChartTarget::ALL`] order.
    /// A view without championship data still emits empty championship payloads.
    pub fn emit<S: ChartSink + ?Sized>(&self, sink: &mut S) -> Result<(), PaddockError> {
        let (series, standings): (&[PointsSeries], &[StandingsRow]) = match &self.championship {
            Some(championship) => (&championship.series, &championship.standings),
            None => (&[], &[]),
        };

        for target in ChartTarget::ALL {
            let payload = match target {
                ChartTarget::HeaderStats => ChartPayload::Header(&self.header),
                ChartTarget::ChampionshipPoints => ChartPayload::PointsSeries(series),
                ChartTarget::ChampionshipStandings => ChartPayload::Standings(standings),
                ChartTarget::ConstructorHeatmap => ChartPayload::ShareMatrix(&self.constructors.heatmap),
                ChartTarget::ConstructorTrend => ChartPayload::ShareTrends(&self.constructors.trends),
                ChartTarget::ConstructorEntropy => ChartPayload::SeasonValues(&self.constructors.entropy),
                ChartTarget::GridScatter => ChartPayload::GridScatter {
                    reference_line: &self.grid.reference_line,
                    points: &self.grid.points,
                },
                ChartTarget::GridHistogram => ChartPayload::ValueCounts(&self.grid.gained_distribution),
                ChartTarget::GridBarChart => ChartPayload::AverageGains(&self.grid.average_gains),
                ChartTarget::CircuitScatter => ChartPayload::LapProfile(&self.circuits.lap_profile),
                ChartTarget::CircuitDnf => ChartPayload::DnfRanking(&self.circuits.dnf_ranking),
                ChartTarget::CircuitMap => ChartPayload::MapMarkers(&self.circuits.map_markers),
                ChartTarget::PitTrend => ChartPayload::SeasonValues(&self.pit_stops.median_trend),
                ChartTarget::PitHistogram => ChartPayload::Histogram(&self.pit_stops.distribution),
                ChartTarget::PitConstructor => ChartPayload::ConstructorBoxes(&self.pit_stops.constructors),
            };
            sink.render(target, payload)?;
        }
        Ok(())
    }
}
