use egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Plot, Points};

use paddock::views::{CircuitsView, MapMarker};

use crate::ui::{PALETTE_ACCENT, PALETTE_SLATE, heat_color};

pub(super) fn show(ui: &mut Ui, view: &CircuitsView) {
    let max_dnf_rate = view
        .dnf_ranking
        .first()
        .map(|entry| entry.dnf_rate)
        .unwrap_or(0.);

    ui.columns(2, |columns| {
        columns[0].label(RichText::new("LAP TIME PROFILE").color(PALETTE_SLATE).strong());
        Plot::new("circuit_lap_profile")
            .height(340.)
            .show_background(false)
            .x_axis_label("AVERAGE LAP TIME (S)")
            .y_axis_label("LAP TIME STD DEV (S)")
            .show(&mut columns[0], |plot_ui| {
                for point in &view.lap_profile {
                    plot_ui.points(
                        Points::new(
                            format!("{} ({}), DNF {:.1}%", point.circuit, point.country, point.dnf_rate),
                            vec![[point.avg_lap_s, point.lap_std_dev_s]],
                        )
                        .radius(point.size_hint as f32 / 2.)
                        .color(heat_color(point.dnf_rate, max_dnf_rate))
                        .filled(true),
                    );
                }
            });

        columns[1].label(RichText::new("HIGHEST DNF RATES").color(PALETTE_SLATE).strong());
        let bars = view
            .dnf_ranking
            .iter()
            .rev()
            .enumerate()
            .map(|(index, entry)| {
                Bar::new(index as f64, entry.dnf_rate)
                    .name(entry.circuit.as_str())
                    .width(0.8)
                    .fill(heat_color(entry.dnf_rate, max_dnf_rate))
            })
            .collect();
        Plot::new("circuit_dnf_ranking")
            .height(340.)
            .show_background(false)
            .x_axis_label("DNF RATE (%)")
            .show(&mut columns[1], |plot_ui| {
                plot_ui.bar_chart(BarChart::new("DNF rate", bars).horizontal())
            });
    });

    ui.add_space(8.);
    ui.label(RichText::new("CIRCUIT MAP").color(PALETTE_SLATE).strong());
    Plot::new("circuit_map")
        .height(360.)
        .show_background(false)
        .data_aspect(1.)
        .include_x(-180.)
        .include_x(180.)
        .include_y(-60.)
        .include_y(75.)
        .x_axis_label("LONGITUDE")
        .y_axis_label("LATITUDE")
        .show(ui, |plot_ui| {
            for marker in &view.map_markers {
                plot_ui.points(
                    Points::new(marker.circuit.as_str(), vec![[marker.lng, marker.lat]])
                        .radius(marker.radius as f32)
                        .color(PALETTE_ACCENT.gamma_multiply(0.6))
                        .filled(true),
                );
            }
        });

    ui.add_space(8.);
    show_marker_table(ui, &view.map_markers);
}

fn show_marker_table(ui: &mut Ui, markers: &[MapMarker]) {
    ui.push_id("circuit_markers", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(180.))
            .column(Column::remainder().at_least(200.))
            .column(Column::exact(60.))
            .column(Column::exact(70.))
            .column(Column::exact(90.))
            .column(Column::exact(70.))
            .header(20., |mut header| {
                for title in ["CIRCUIT", "LOCATION", "RACES", "DNF", "YEARS", "AVG LAP"] {
                    header.col(|ui| {
                        ui.label(RichText::new(title).color(PALETTE_SLATE).strong());
                    });
                }
            })
            .body(|mut body| {
                for marker in markers {
                    body.row(18., |mut row| {
                        row.col(|ui| {
                            ui.label(RichText::new(marker.circuit.as_str()).strong());
                        });
                        row.col(|ui| {
                            ui.label(format!("{}, {}", marker.location, marker.country));
                        });
                        row.col(|ui| {
                            ui.label(marker.races_hosted.to_string());
                        });
                        row.col(|ui| {
                            ui.label(format!("{}%", marker.dnf_rate));
                        });
                        row.col(|ui| {
                            let years = match (marker.first_year, marker.last_year) {
                                (Some(first), Some(last)) => format!("{first}–{last}"),
                                _ => String::new(),
                            };
                            ui.label(years);
                        });
                        row.col(|ui| {
                            let avg_lap = marker
                                .avg_lap_s
                                .map(|seconds| format!("{seconds:.1}s"))
                                .unwrap_or_default();
                            ui.label(avg_lap);
                        });
                    });
                }
            });
    });
}
