use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, RichText, Sense, Ui, Vec2};
use egui_dropdown::DropDownBox;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use paddock::filters::Era;
use paddock::views::{ConstructorsView, ShareMatrix};

use super::{FilterAction, PickerText};
use crate::ui::{PALETTE_ACCENT, PALETTE_SLATE, heat_color, to_color32};

const CONSTRUCTOR_COUNTS: [usize; 4] = [5, 10, 15, 20];
const HEATMAP_LABEL_WIDTH: f32 = 140.;
const HEATMAP_ROW_HEIGHT: f32 = 18.;

pub(super) fn show(ui: &mut Ui, view: &ConstructorsView, pickers: &mut PickerText) -> Vec<FilterAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.label(RichText::new("Era: ").color(Color32::WHITE));
        let previous_era = pickers.constructor_era.clone();
        ui.add(
            DropDownBox::from_iter(
                Era::PRESETS.iter().map(|era| era.to_string()),
                "constructor_era_dropbox",
                &mut pickers.constructor_era,
                |ui, text| ui.selectable_label(false, text),
            )
            .filter_by_input(false),
        );
        if previous_era != pickers.constructor_era
            && let Ok(era) = pickers.constructor_era.parse()
        {
            actions.push(FilterAction::ConstructorEra(era));
        }

        ui.separator();
        ui.label(RichText::new("Constructors: ").color(Color32::WHITE));
        let previous_count = pickers.constructor_count.clone();
        ui.add(
            DropDownBox::from_iter(
                CONSTRUCTOR_COUNTS.iter().map(|count| count.to_string()),
                "constructor_count_dropbox",
                &mut pickers.constructor_count,
                |ui, text| ui.selectable_label(false, text),
            )
            .filter_by_input(false),
        );
        if previous_count != pickers.constructor_count
            && let Ok(count) = pickers.constructor_count.parse()
        {
            actions.push(FilterAction::ConstructorCount(count));
        }
    });

    ui.label(RichText::new("POINTS SHARE BY SEASON").color(PALETTE_SLATE).strong());
    show_heatmap(ui, &view.heatmap);
    ui.add_space(8.);

    ui.columns(2, |columns| {
        Plot::new("constructor_trends")
            .height(300.)
            .show_background(false)
            .legend(Legend::default())
            .x_axis_label("SEASON")
            .y_axis_label("POINTS SHARE (%)")
            .show(&mut columns[0], |plot_ui| {
                for trend in &view.trends {
                    let points = trend
                        .shares
                        .iter()
                        .map(|(season, share)| [f64::from(*season), *share])
                        .collect::<Vec<_>>();
                    plot_ui.line(
                        Line::new(trend.constructor.as_str(), PlotPoints::new(points))
                            .color(to_color32(&trend.color))
                            .width(2.),
                    );
                }
            });

        Plot::new("constructor_entropy")
            .height(300.)
            .show_background(false)
            .x_axis_label("SEASON")
            .y_axis_label("SHANNON ENTROPY (BITS)")
            .show(&mut columns[1], |plot_ui| {
                let points = view
                    .entropy
                    .iter()
                    .map(|(season, bits)| [f64::from(*season), *bits])
                    .collect::<Vec<_>>();
                plot_ui.line(
                    Line::new("Entropy", PlotPoints::new(points))
                        .color(PALETTE_ACCENT)
                        .width(2.)
                        .fill(0.),
                );
            });
    });

    actions
}

fn show_heatmap(ui: &mut Ui, matrix: &ShareMatrix) {
    if matrix.constructors.is_empty() || matrix.seasons.is_empty() {
        ui.label(RichText::new("No constructor data for this era").color(PALETTE_SLATE));
        return;
    }

    let width = ui.available_width().max(HEATMAP_LABEL_WIDTH * 2.);
    let height = HEATMAP_ROW_HEIGHT * (matrix.constructors.len() + 1) as f32;
    let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::hover());
    let origin = response.rect.min;
    let cell_width = (width - HEATMAP_LABEL_WIDTH) / matrix.seasons.len() as f32;
    let font = FontId::proportional(11.);

    for (row, constructor) in matrix.constructors.iter().enumerate() {
        let y = origin.y + HEATMAP_ROW_HEIGHT * row as f32;
        painter.text(
            Pos2::new(origin.x + HEATMAP_LABEL_WIDTH - 6., y + HEATMAP_ROW_HEIGHT / 2.),
            Align2::RIGHT_CENTER,
            constructor,
            font.clone(),
            Color32::WHITE,
        );
        for (column, share) in matrix.cells[row].iter().enumerate() {
            let min = Pos2::new(origin.x + HEATMAP_LABEL_WIDTH + cell_width * column as f32, y);
            let rect = Rect::from_min_size(min, Vec2::new(cell_width, HEATMAP_ROW_HEIGHT));
            painter.rect_filled(rect.shrink(0.5), CornerRadius::ZERO, heat_color(*share, matrix.max_share));
        }
    }

    // label roughly every tenth season so the axis stays readable
    let label_every = matrix.seasons.len().div_ceil(10).max(1);
    let axis_y = origin.y + HEATMAP_ROW_HEIGHT * matrix.constructors.len() as f32;
    for (column, season) in matrix.seasons.iter().enumerate().step_by(label_every) {
        painter.text(
            Pos2::new(
                origin.x + HEATMAP_LABEL_WIDTH + cell_width * (column as f32 + 0.5),
                axis_y + HEATMAP_ROW_HEIGHT / 2.,
            ),
            Align2::CENTER_CENTER,
            season.to_string(),
            font.clone(),
            PALETTE_SLATE,
        );
    }

    if let Some(pointer) = response.hover_pos() {
        let row = ((pointer.y - origin.y) / HEATMAP_ROW_HEIGHT).floor();
        let column = ((pointer.x - origin.x - HEATMAP_LABEL_WIDTH) / cell_width).floor();
        if row >= 0. && column >= 0. {
            let (row, column) = (row as usize, column as usize);
            if let (Some(constructor), Some(season), Some(share)) = (
                matrix.constructors.get(row),
                matrix.seasons.get(column),
                matrix.cells.get(row).and_then(|cells| cells.get(column)),
            ) {
                response.on_hover_text(format!("{constructor}\n{season}: {share:.1}%"));
            }
        }
    }
}
