// Library interface for paddock
// Loads the precomputed F1 collections and derives chart-ready views from them

pub mod colors;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod export;
pub mod filters;
pub mod ranking;
pub mod render;
pub mod selection;
pub mod views;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use dataset::{Collection, CollectionSource, Dataset, DirectorySource, MemorySource};
pub use errors::PaddockError;
pub use filters::{Era, FilterState, SeasonFilter};
pub use render::{ChartPayload, ChartSink, ChartTarget};
pub use selection::ChampionshipSession;
pub use views::{DashboardView, derive_view};
