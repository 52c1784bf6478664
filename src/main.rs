mod ui;

use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use egui::Vec2;
use log::{error, info, warn};

use paddock::{
    DashboardConfig, Era, FilterState, PaddockError, SeasonFilter,
    dataset::{DirectorySource, Year, load_blocking},
    derive_view,
    export::JsonLinesSink,
};
use ui::dashboard::DashboardApp;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive dashboard
    View {
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
    /// Derive the views for a filter state and write one JSON line per chart
    Export {
        #[arg(short, long)]
        data_dir: PathBuf,

        /// Championship season, defaults to the latest
        #[arg(short, long)]
        season: Option<Year>,

        /// Constructor era, "all" or START-END
        #[arg(short, long)]
        era: Option<Era>,

        /// Number of constructors in the dominance views
        #[arg(short, long)]
        constructors: Option<usize>,

        /// Number of drivers selected in the championship view
        #[arg(short, long)]
        top: Option<usize>,

        #[arg(long)]
        grid_season: Option<Year>,

        /// Pit stop season, or "all"
        #[arg(long)]
        pit_season: Option<SeasonFilter>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

struct ExportFilters {
    season: Option<Year>,
    era: Option<Era>,
    constructors: Option<usize>,
    top: Option<usize>,
    grid_season: Option<Year>,
    pit_season: Option<SeasonFilter>,
}

fn view(data_dir: Option<PathBuf>, config: DashboardConfig) -> Result<(), PaddockError> {
    let data_dir = data_dir.or_else(|| config.data_dir.clone());

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_inner_size(Vec2::new(1280., 860.))
        .with_min_inner_size(Vec2::new(800., 600.));

    eframe::run_native(
        "Paddock",
        native_options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(data_dir, config, cc)))),
    )
    .map_err(|e| PaddockError::ViewerError {
        reason: e.to_string(),
    })
}

fn export(
    data_dir: &Path,
    filters: ExportFilters,
    output: Option<&Path>,
    config: &DashboardConfig,
) -> Result<(), PaddockError> {
    let dataset = load_blocking(&DirectorySource::new(data_dir))?;

    let mut state = FilterState::initial(&dataset, config);
    let top = filters.top.unwrap_or(config.default_top_drivers);
    match filters.season {
        Some(season) => state
            .championship
            .change_season(dataset.championship(), season, top),
        None => state.championship.select_top_n(dataset.championship(), top),
    }
    if let Some(era) = filters.era {
        state.constructor_era = era;
    }
    if let Some(count) = filters.constructors {
        state.constructor_count = count;
    }
    if filters.grid_season.is_some() {
        state.grid_season = filters.grid_season;
    }
    if let Some(pit_season) = filters.pit_season {
        state.pit_season = pit_season;
    }

    let view = derive_view(&dataset, &state);
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| PaddockError::ExportWriteError { source: e })?;
            let mut sink = JsonLinesSink::new(file);
            view.emit(&mut sink)?;
            let written = sink.written();
            sink.finish()?;
            info!("Wrote {} chart payloads to {:?}", written, path);
        }
        None => {
            let mut sink = JsonLinesSink::new(io::stdout().lock());
            view.emit(&mut sink)?;
            sink.finish()?
                .flush()
                .map_err(|e| PaddockError::ExportWriteError { source: e })?;
        }
    }
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    let config = match DashboardConfig::from_local_file() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            warn!("Could not read config file, using defaults: {}", e);
            DashboardConfig::default()
        }
    };

    let result = match cli.command {
        Commands::View { data_dir } => view(data_dir, config),
        Commands::Export {
            data_dir,
            season,
            era,
            constructors,
            top,
            grid_season,
            pit_season,
            output,
        } => export(
            &data_dir,
            ExportFilters {
                season,
                era,
                constructors,
                top,
                grid_season,
                pit_season,
            },
            output.as_deref(),
            &config,
        ),
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
