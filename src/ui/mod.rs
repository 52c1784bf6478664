use egui::{Color32, Visuals, style::Widgets};
use log::debug;

use paddock::colors::Color;

pub(crate) mod dashboard;

pub(crate) const PALETTE_BACKGROUND: Color32 = Color32::from_rgb(11, 15, 20);
pub(crate) const PALETTE_PANEL: Color32 = Color32::from_rgb(17, 24, 39);
pub(crate) const PALETTE_SLATE: Color32 = Color32::from_rgb(91, 100, 120);
pub(crate) const PALETTE_ACCENT: Color32 = Color32::from_rgb(0, 229, 255);
pub(crate) const PALETTE_VIOLET: Color32 = Color32::from_rgb(124, 58, 237);
pub(crate) const PALETTE_DEEP_BLUE: Color32 = Color32::from_rgb(13, 40, 71);

pub(crate) fn dashboard_visuals() -> Visuals {
    Visuals {
        dark_mode: true,
        hyperlink_color: PALETTE_ACCENT,
        faint_bg_color: PALETTE_PANEL,
        extreme_bg_color: PALETTE_BACKGROUND,
        panel_fill: PALETTE_BACKGROUND,
        window_fill: PALETTE_PANEL,
        button_frame: true,
        widgets: Widgets::dark(),
        striped: true,
        ..Default::default()
    }
}

/// Converts a derived view color, falling back to the accent for malformed hex strings
pub(crate) fn to_color32(color: &Color) -> Color32 {
    match color.rgb() {
        Some((r, g, b)) => Color32::from_rgb(r, g, b),
        None => {
            debug!("Invalid color {}, using accent", color);
            PALETTE_ACCENT
        }
    }
}

/// Linear interpolation between two colors, `y` in `[0, 1]`
pub(crate) fn stroke_shade(start: Color32, end: Color32, y: f32) -> Color32 {
    let y = if y.is_finite() { y.clamp(0., 1.) } else { 0. };
    let channel = |start: u8, end: u8| (start as f32 + y * (end as f32 - start as f32)).round() as u8;
    Color32::from_rgb(
        channel(start.r(), end.r()),
        channel(start.g(), end.g()),
        channel(start.b(), end.b()),
    )
}

/// Heatmap scale from the background blue to the accent
pub(crate) fn heat_color(value: f64, max: f64) -> Color32 {
    if max <= 0. {
        return PALETTE_BACKGROUND;
    }
    let y = (value / max) as f32;
    if y < 0.5 {
        stroke_shade(PALETTE_BACKGROUND, PALETTE_DEEP_BLUE, y * 2.)
    } else {
        stroke_shade(PALETTE_DEEP_BLUE, PALETTE_ACCENT, (y - 0.5) * 2.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_shade_endpoints() {
        assert_eq!(stroke_shade(Color32::BLACK, Color32::WHITE, 0.), Color32::BLACK);
        assert_eq!(stroke_shade(Color32::BLACK, Color32::WHITE, 1.), Color32::WHITE);
        assert_eq!(stroke_shade(Color32::BLACK, Color32::WHITE, 7.), Color32::WHITE);
        assert_eq!(stroke_shade(Color32::BLACK, Color32::WHITE, f32::NAN), Color32::BLACK);
    }

    #[test]
    fn test_heat_color_scale() {
        assert_eq!(heat_color(0., 0.), PALETTE_BACKGROUND);
        assert_eq!(heat_color(10., 10.), PALETTE_ACCENT);
        assert_eq!(heat_color(5., 10.), PALETTE_DEEP_BLUE);
    }

    #[test]
    fn test_to_color32() {
        assert_eq!(to_color32(&Color::new("#7C3AED")), PALETTE_VIOLET);
        assert_eq!(to_color32(&Color::new("red")), PALETTE_ACCENT);
    }
}
