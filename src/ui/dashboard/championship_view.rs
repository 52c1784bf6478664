use egui::{Color32, RichText, Ui};
use egui_dropdown::DropDownBox;
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use paddock::views::{ChampionshipView, DashboardView};

use super::{FilterAction, PickerText};
use crate::ui::{PALETTE_ACCENT, PALETTE_SLATE, to_color32};

const PODIUM_COLORS: [Color32; 3] = [
    Color32::from_rgb(250, 204, 21),
    Color32::from_rgb(203, 213, 225),
    Color32::from_rgb(217, 119, 6),
];

pub(super) fn show(ui: &mut Ui, view: &DashboardView, pickers: &mut PickerText) -> Vec<FilterAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.label(RichText::new("Season: ").color(Color32::WHITE));
        let previous = pickers.championship_season.clone();
        ui.add(
            DropDownBox::from_iter(
                view.seasons.championship.iter().map(|season| season.to_string()),
                "championship_season_dropbox",
                &mut pickers.championship_season,
                |ui, text| ui.selectable_label(false, text),
            )
            .filter_by_input(false),
        );
        if previous != pickers.championship_season
            && let Ok(season) = pickers.championship_season.parse()
        {
            actions.push(FilterAction::ChampionshipSeason(season));
        }

        ui.separator();
        if ui.button("Top drivers").clicked() {
            actions.push(FilterAction::SelectTopDrivers);
        }
        if ui.button("All").clicked() {
            actions.push(FilterAction::SelectAllDrivers);
        }

        if let Some(championship) = &view.championship {
            ui.separator();
            ui.menu_button(championship.selection_label.as_str(), |ui| {
                egui::ScrollArea::vertical().max_height(320.).show(ui, |ui| {
                    for option in &championship.driver_options {
                        let mut selected = option.selected;
                        if ui.checkbox(&mut selected, option.label.as_str()).changed() {
                            actions.push(FilterAction::ToggleDriver(option.driver.clone()));
                        }
                    }
                });
            });
        }
    });

    match &view.championship {
        Some(championship) => {
            show_points_chart(ui, championship);
            ui.add_space(8.);
            show_standings_table(ui, championship);
        }
        None => {
            ui.label(RichText::new("No championship data for this season").color(PALETTE_SLATE));
        }
    }

    actions
}

fn show_points_chart(ui: &mut Ui, championship: &ChampionshipView) {
    Plot::new("championship_points")
        .height(360.)
        .show_background(false)
        .legend(Legend::default())
        .x_axis_label("ROUND")
        .y_axis_label("CUMULATIVE POINTS")
        .include_y(0.)
        .show(ui, |plot_ui| {
            for series in &championship.series {
                let color = to_color32(&series.color);
                for segment in series.segments() {
                    plot_ui.line(
                        Line::new(series.name.as_str(), PlotPoints::new(segment.clone()))
                            .color(color)
                            .width(2.5),
                    );
                    plot_ui.points(
                        Points::new(series.name.as_str(), PlotPoints::new(segment))
                            .color(color)
                            .radius(2.5),
                    );
                }
            }
        });
}

fn show_standings_table(ui: &mut Ui, championship: &ChampionshipView) {
    ui.push_id("championship_standings", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::exact(40.))
            .column(Column::remainder().at_least(220.))
            .column(Column::auto().at_least(140.))
            .column(Column::exact(60.))
            .column(Column::exact(50.))
            .header(20., |mut header| {
                for title in ["POS", "DRIVER", "TEAM", "PTS", "WINS"] {
                    header.col(|ui| {
                        ui.label(RichText::new(title).color(PALETTE_SLATE).strong());
                    });
                }
            })
            .body(|mut body| {
                for row in &championship.standings {
                    body.row(20., |mut table_row| {
                        let position_color = row
                            .position
                            .filter(|_| row.podium)
                            .and_then(|p| p.checked_sub(1))
                            .and_then(|index| PODIUM_COLORS.get(index as usize).copied())
                            .unwrap_or(Color32::WHITE);
                        table_row.col(|ui| {
                            let position = row.position.map(|p| p.to_string()).unwrap_or_default();
                            ui.label(RichText::new(position).color(position_color).strong());
                        });
                        table_row.col(|ui| {
                            ui.label(RichText::new(row.code.as_str()).color(PALETTE_ACCENT).strong());
                            ui.label(row.driver.as_str());
                            if row.champion {
                                ui.label(RichText::new("P1").color(PALETTE_ACCENT).small());
                            }
                        });
                        table_row.col(|ui| {
                            ui.label(RichText::new(row.constructor.as_str()).color(PALETTE_SLATE));
                        });
                        table_row.col(|ui| {
                            ui.label(row.points.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()));
                        });
                        table_row.col(|ui| {
                            ui.label(row.wins.to_string());
                        });
                    });
                }
            });
    });
}
