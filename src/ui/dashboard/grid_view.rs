use egui::{Color32, RichText, Ui};
use egui_dropdown::DropDownBox;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use paddock::views::{DashboardView, GridView};

use super::{FilterAction, PickerText};
use crate::ui::{PALETTE_ACCENT, PALETTE_SLATE, PALETTE_VIOLET, stroke_shade, to_color32};

/// Gains beyond this many places get the full end of the color scale
const GAIN_COLOR_RANGE: f32 = 10.;

fn gain_color(positions_gained: i32) -> Color32 {
    let y = (positions_gained as f32 + GAIN_COLOR_RANGE) / (2. * GAIN_COLOR_RANGE);
    stroke_shade(PALETTE_VIOLET, PALETTE_ACCENT, y)
}

pub(super) fn show(ui: &mut Ui, view: &DashboardView, pickers: &mut PickerText) -> Vec<FilterAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.label(RichText::new("Season: ").color(Color32::WHITE));
        let previous = pickers.grid_season.clone();
        ui.add(
            DropDownBox::from_iter(
                view.seasons.grid.iter().map(|season| season.to_string()),
                "grid_season_dropbox",
                &mut pickers.grid_season,
                |ui, text| ui.selectable_label(false, text),
            )
            .filter_by_input(false),
        );
        if previous != pickers.grid_season
            && let Ok(season) = pickers.grid_season.parse()
        {
            actions.push(FilterAction::GridSeason(season));
        }
    });

    let grid = &view.grid;
    ui.columns(2, |columns| {
        show_scatter(&mut columns[0], grid);
        show_gained_histogram(&mut columns[1], grid);
    });
    ui.add_space(8.);
    show_average_gains(ui, grid);

    actions
}

fn show_scatter(ui: &mut Ui, grid: &GridView) {
    ui.label(RichText::new("GRID VS FINISH").color(PALETTE_SLATE).strong());
    Plot::new("grid_scatter")
        .height(340.)
        .show_background(false)
        .data_aspect(1.)
        .x_axis_label("GRID POSITION")
        .y_axis_label("FINISH POSITION")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("Grid = Finish", PlotPoints::new(grid.reference_line.to_vec()))
                    .color(PALETTE_ACCENT.gamma_multiply(0.3))
                    .width(1.),
            );
            for point in &grid.points {
                let label = format!(
                    "{} ({}) at {}, gained {}",
                    point.driver, point.constructor, point.circuit, point.positions_gained
                );
                plot_ui.points(
                    Points::new(label, vec![[f64::from(point.grid), f64::from(point.finish)]])
                        .color(gain_color(point.positions_gained))
                        .radius(3.)
                        .filled(true),
                );
            }
        });
}

fn show_gained_histogram(ui: &mut Ui, grid: &GridView) {
    ui.label(RichText::new("POSITIONS GAINED").color(PALETTE_SLATE).strong());
    let bars = grid
        .gained_distribution
        .iter()
        .map(|bucket| {
            Bar::new(f64::from(bucket.value), bucket.count as f64)
                .width(0.9)
                .fill(PALETTE_ACCENT.gamma_multiply(0.6))
        })
        .collect();
    Plot::new("grid_gained_histogram")
        .height(340.)
        .show_background(false)
        .x_axis_label("POSITIONS GAINED")
        .y_axis_label("COUNT")
        .show(ui, |plot_ui| plot_ui.bar_chart(BarChart::new("Positions gained", bars)));
}

fn show_average_gains(ui: &mut Ui, grid: &GridView) {
    ui.label(RichText::new("ALL-TIME AVERAGE POSITIONS GAINED").color(PALETTE_SLATE).strong());
    let bars = grid
        .average_gains
        .iter()
        .enumerate()
        .map(|(index, gain)| {
            Bar::new(index as f64, gain.average)
                .name(gain.name.as_str())
                .width(0.8)
                .fill(to_color32(&gain.color))
        })
        .collect();
    Plot::new("grid_average_gains")
        .height(280.)
        .show_background(false)
        .y_axis_label("AVG POSITIONS GAINED")
        .show(ui, |plot_ui| plot_ui.bar_chart(BarChart::new("Average gained", bars)));
}
