use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};

use egui::{Color32, Frame, Layout, Margin, RichText, Ui};
use log::{debug, error, info};

use paddock::config::DashboardConfig;
use paddock::dataset::{Dataset, Year};
use paddock::filters::{Era, FilterState, SeasonFilter};
use paddock::views::{DashboardView, HeaderStats, derive_view};

use super::{PALETTE_ACCENT, PALETTE_SLATE, dashboard_visuals};

mod championship_view;
mod circuits_view;
mod constructors_view;
mod grid_view;
mod loader;
mod pit_stops_view;

use loader::{LoadResult, spawn_load};

/// A filter change requested by one of the tabs
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum FilterAction {
    ChampionshipSeason(Year),
    SelectTopDrivers,
    SelectAllDrivers,
    ToggleDriver(String),
    ConstructorEra(Era),
    ConstructorCount(usize),
    GridSeason(Year),
    PitSeason(SeasonFilter),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Championship,
    Constructors,
    Grid,
    Circuits,
    PitStops,
}

impl Tab {
    const ALL: [Tab; 5] = [
        Tab::Championship,
        Tab::Constructors,
        Tab::Grid,
        Tab::Circuits,
        Tab::PitStops,
    ];

    fn title(&self) -> &'static str {
        match self {
            Tab::Championship => "Championship",
            Tab::Constructors => "Constructors",
            Tab::Grid => "Grid vs Race",
            Tab::Circuits => "Circuits",
            Tab::PitStops => "Pit Stops",
        }
    }
}

/// Text buffers backing the season drop downs
#[derive(Default)]
pub(crate) struct PickerText {
    pub(crate) championship_season: String,
    pub(crate) constructor_era: String,
    pub(crate) constructor_count: String,
    pub(crate) grid_season: String,
    pub(crate) pit_season: String,
}

impl PickerText {
    fn from_filters(filters: &FilterState) -> Self {
        Self {
            championship_season: filters
                .championship
                .season()
                .map(|season| season.to_string())
                .unwrap_or_default(),
            constructor_era: filters.constructor_era.to_string(),
            constructor_count: filters.constructor_count.to_string(),
            grid_season: filters
                .grid_season
                .map(|season| season.to_string())
                .unwrap_or_default(),
            pit_season: filters.pit_season.to_string(),
        }
    }
}

pub(crate) struct DashboardScreen {
    dataset: Dataset,
    filters: FilterState,
    view: DashboardView,
    tab: Tab,
    pickers: PickerText,
}

impl DashboardScreen {
    fn new(dataset: Dataset, config: &DashboardConfig) -> Self {
        let filters = FilterState::initial(&dataset, config);
        let view = derive_view(&dataset, &filters);
        let pickers = PickerText::from_filters(&filters);
        Self {
            dataset,
            filters,
            view,
            tab: Tab::Championship,
            pickers,
        }
    }

    fn apply(&mut self, action: FilterAction, config: &DashboardConfig) {
        debug!("Applying filter action {:?}", action);
        let battles = self.dataset.championship();
        match action {
            FilterAction::ChampionshipSeason(season) => {
                self.filters
                    .championship
                    .change_season(battles, season, config.default_top_drivers);
            }
            FilterAction::SelectTopDrivers => self
                .filters
                .championship
                .select_top_n(battles, config.default_top_drivers),
            FilterAction::SelectAllDrivers => self.filters.championship.select_all(battles),
            FilterAction::ToggleDriver(driver) => {
                self.filters.championship.toggle(battles, &driver);
            }
            FilterAction::ConstructorEra(era) => self.filters.constructor_era = era,
            FilterAction::ConstructorCount(count) => self.filters.constructor_count = count,
            FilterAction::GridSeason(season) => self.filters.grid_season = Some(season),
            FilterAction::PitSeason(season) => self.filters.pit_season = season,
        }
        self.view = derive_view(&self.dataset, &self.filters);
    }

    fn show(&mut self, ui: &mut Ui, config: &DashboardConfig) {
        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                let title = RichText::new(tab.title().to_uppercase()).strong();
                if ui.selectable_label(self.tab == tab, title).clicked() {
                    self.tab = tab;
                }
            }
        });
        ui.separator();

        let actions = egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match self.tab {
                Tab::Championship => championship_view::show(ui, &self.view, &mut self.pickers),
                Tab::Constructors => constructors_view::show(ui, &self.view.constructors, &mut self.pickers),
                Tab::Grid => grid_view::show(ui, &self.view, &mut self.pickers),
                Tab::Circuits => {
                    circuits_view::show(ui, &self.view.circuits);
                    Vec::new()
                }
                Tab::PitStops => pit_stops_view::show(ui, &self.view, &mut self.pickers),
            })
            .inner;

        for action in actions {
            self.apply(action, config);
        }
    }
}

pub(crate) enum UiState {
    Loading { receiver: Receiver<LoadResult> },
    Error { message: String },
    Display { screen: Box<DashboardScreen> },
}

pub struct DashboardApp {
    ui_state: UiState,
    config: DashboardConfig,
    data_dir: Option<PathBuf>,
}

impl DashboardApp {
    pub fn new(data_dir: Option<PathBuf>, config: DashboardConfig, cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(dashboard_visuals());

        let ui_state = match &data_dir {
            Some(dir) => UiState::Loading {
                receiver: spawn_load(dir.clone()),
            },
            None => UiState::Error {
                message: "Choose a data directory to load".to_string(),
            },
        };

        Self {
            ui_state,
            config,
            data_dir,
        }
    }

    fn open_data_dir(&mut self, dir: PathBuf) {
        info!("Opening data directory {:?}", dir);
        self.ui_state = UiState::Loading {
            receiver: spawn_load(dir.clone()),
        };
        self.data_dir = Some(dir);
    }

    fn poll_loader(&mut self) {
        let UiState::Loading { receiver } = &self.ui_state else {
            return;
        };
        let next_state = match receiver.try_recv() {
            Ok(Ok(dataset)) => UiState::Display {
                screen: Box::new(DashboardScreen::new(dataset, &self.config)),
            },
            Ok(Err(e)) => UiState::Error {
                message: format!("Failed to load dataset: {}", e),
            },
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => UiState::Error {
                message: "Dataset loader stopped unexpectedly".to_string(),
            },
        };
        self.ui_state = next_state;
    }

    fn show_header(&mut self, ui: &mut Ui) {
        ui.with_layout(Layout::left_to_right(egui::Align::Center), |ui| {
            ui.label(RichText::new("PADDOCK").color(PALETTE_ACCENT).strong().size(18.));
            if let UiState::Display { screen } = &self.ui_state {
                show_header_stats(ui, &screen.view.header);
            }
            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("📂 Open data directory").clicked()
                    && let Some(dir) = rfd::FileDialog::new().pick_folder()
                {
                    self.open_data_dir(dir);
                }
                if let Some(dir) = &self.data_dir {
                    ui.label(RichText::new(dir.display().to_string()).color(PALETTE_SLATE).small());
                }
            });
        });
    }
}

fn show_header_stats(ui: &mut Ui, header: &HeaderStats) {
    for (count, label) in [
        (header.seasons, "Seasons"),
        (header.drivers, "Drivers"),
        (header.constructors, "Teams"),
        (header.circuits, "Circuits"),
    ] {
        ui.separator();
        ui.label(RichText::new(count.to_string()).color(PALETTE_ACCENT).strong());
        ui.label(RichText::new(label).color(PALETTE_SLATE));
    }
}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.data_dir.is_some() && self.config.data_dir != self.data_dir {
            self.config.data_dir = self.data_dir.clone();
            if let Err(e) = self.config.save() {
                error!("Error while saving config file: {}", e);
            }
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();

        egui::TopBottomPanel::top("dashboard_header")
            .frame(Frame::new().inner_margin(Margin::same(6)))
            .show(ctx, |ui| self.show_header(ui));

        let config = &self.config;
        egui::CentralPanel::default().show(ctx, |ui| match &mut self.ui_state {
            UiState::Loading { .. } => {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            }
            UiState::Error { message } => {
                ui.heading(RichText::new(message.as_str()).color(Color32::RED).strong());
            }
            UiState::Display { screen } => screen.show(ui, config),
        });

        if matches!(self.ui_state, UiState::Loading { .. }) {
            ctx.request_repaint();
        }
    }
}
