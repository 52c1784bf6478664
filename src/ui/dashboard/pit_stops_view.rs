use egui::{Color32, RichText, Stroke, Ui};
use egui_dropdown::DropDownBox;
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Line, Plot, PlotPoints, Points};

use paddock::views::{DashboardView, PitStopsView};

use super::{FilterAction, PickerText};
use crate::ui::{PALETTE_ACCENT, PALETTE_SLATE, PALETTE_VIOLET, to_color32};

pub(super) fn show(ui: &mut Ui, view: &DashboardView, pickers: &mut PickerText) -> Vec<FilterAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.label(RichText::new("Season: ").color(Color32::WHITE));
        let previous = pickers.pit_season.clone();
        ui.add(
            DropDownBox::from_iter(
                view.seasons.pit_stops.iter().map(|season| season.to_string()),
                "pit_season_dropbox",
                &mut pickers.pit_season,
                |ui, text| ui.selectable_label(false, text),
            )
            .filter_by_input(false),
        );
        if previous != pickers.pit_season
            && let Ok(season) = pickers.pit_season.parse()
        {
            actions.push(FilterAction::PitSeason(season));
        }
    });

    let pit_stops = &view.pit_stops;
    ui.columns(2, |columns| {
        show_median_trend(&mut columns[0], pit_stops);
        show_duration_histogram(&mut columns[1], pit_stops);
    });
    ui.add_space(8.);
    show_constructor_boxes(ui, pit_stops);

    actions
}

fn show_median_trend(ui: &mut Ui, pit_stops: &PitStopsView) {
    ui.label(RichText::new("MEDIAN STOP DURATION").color(PALETTE_SLATE).strong());
    let points = pit_stops
        .median_trend
        .iter()
        .map(|(season, seconds)| [f64::from(*season), *seconds])
        .collect::<Vec<_>>();
    Plot::new("pit_median_trend")
        .height(300.)
        .show_background(false)
        .x_axis_label("SEASON")
        .y_axis_label("MEDIAN (S)")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("Median", PlotPoints::new(points.clone()))
                    .color(PALETTE_ACCENT)
                    .width(2.5)
                    .fill(0.),
            );
            plot_ui.points(Points::new("Median", points).color(PALETTE_ACCENT).radius(3.));
        });
}

fn show_duration_histogram(ui: &mut Ui, pit_stops: &PitStopsView) {
    ui.label(
        RichText::new(format!("STOP DURATIONS ({})", pit_stops.season).to_uppercase())
            .color(PALETTE_SLATE)
            .strong(),
    );
    let bars = pit_stops
        .distribution
        .bins
        .iter()
        .map(|bin| {
            Bar::new(bin.center(), bin.count as f64)
                .width(bin.width().max(0.05))
                .fill(PALETTE_VIOLET.gamma_multiply(0.6))
        })
        .collect();
    Plot::new("pit_duration_histogram")
        .height(300.)
        .show_background(false)
        .x_axis_label("DURATION (S)")
        .y_axis_label("COUNT")
        .show(ui, |plot_ui| plot_ui.bar_chart(BarChart::new("Stops", bars)));
}

fn show_constructor_boxes(ui: &mut Ui, pit_stops: &PitStopsView) {
    ui.label(RichText::new("STOP DURATION BY CONSTRUCTOR").color(PALETTE_SLATE).strong());
    let boxes = pit_stops
        .constructors
        .iter()
        .enumerate()
        .map(|(index, summary)| {
            let color = to_color32(&summary.color);
            BoxElem::new(
                index as f64,
                BoxSpread::new(summary.lower, summary.q1, summary.median, summary.q3, summary.upper),
            )
            .name(format!("{} ({} stops)", summary.constructor, summary.count))
            .box_width(0.6)
            .fill(color.gamma_multiply(0.1))
            .stroke(Stroke::new(1.5, color))
        })
        .collect();
    Plot::new("pit_constructor_boxes")
        .height(340.)
        .show_background(false)
        .y_axis_label("DURATION (S)")
        .show(ui, |plot_ui| plot_ui.box_plot(BoxPlot::new("Constructors", boxes)));
}
