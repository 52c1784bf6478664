// Entity color resolution

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Fallback palette, indexed by an entity's ordinal position in the current view
pub const PALETTE: [&str; 20] = [
    "#00E5FF", "#7C3AED", "#06B6D4", "#3B82F6", "#8B5CF6", "#0EA5E9", "#6366F1", "#22D3EE",
    "#818CF8", "#38BDF8", "#A78BFA", "#67E8F9", "#C084FC", "#2DD4BF", "#34D399", "#60A5FA",
    "#A5B4FC", "#93C5FD", "#BAE6FD", "#4ADE80",
];

pub const PRIMARY: &str = "#00E5FF";
pub const SECONDARY: &str = "#7C3AED";

// Team colors that disappear on the dark background, and what they are drawn as instead
const REMAPPED_COLORS: [(&str, &str); 6] = [
    ("#DC0000", "#EC4899"),
    ("#CC0000", "#EC4899"),
    ("#900000", "#EC4899"),
    ("#FFFFFF", "#94A3B8"),
    ("#000000", "#64748B"),
    ("#FFF500", "#FACC15"),
];

/// A display color as a `#RRGGBB` hex string
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn primary() -> Self {
        Self::new(PRIMARY)
    }

    pub fn secondary() -> Self {
        Self::new(SECONDARY)
    }

    pub fn hex(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels, if the hex string is well formed
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let digits = self.0.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn palette_color(ordinal: usize) -> Color {
    Color::new(PALETTE[ordinal % PALETTE.len()])
}

fn remap(hex: &str) -> Color {
    REMAPPED_COLORS
        .iter()
        .find(|(from, _)| from.eq_ignore_ascii_case(hex))
        .map(|(_, to)| Color::new(*to))
        .unwrap_or_else(|| Color::new(hex))
}

/// Resolves entity names to display colors from a team color table
#[derive(Clone, Copy, Debug)]
pub struct ColorResolver<'a> {
    team_colors: &'a BTreeMap<String, String>,
}

impl<'a> ColorResolver<'a> {
    pub fn new(team_colors: &'a BTreeMap<String, String>) -> Self {
        Self { team_colors }
    }

    /// Team color for a known entity, otherwise the palette entry for `ordinal`
    pub fn color_for(&self, entity: Option<&str>, ordinal: usize) -> Color {
        entity
            .and_then(|name| self.team_colors.get(name))
            .map(|hex| remap(hex))
            .unwrap_or_else(|| palette_color(ordinal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_colors() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Ferrari".to_string(), "#dc0000".to_string()),
            ("Red Bull".to_string(), "#0600EF".to_string()),
            ("Williams".to_string(), "#FFFFFF".to_string()),
            ("Jordan".to_string(), "#FFF500".to_string()),
        ])
    }

    #[test]
    fn test_known_colors_are_remapped_case_insensitively() {
        let colors = team_colors();
        let resolver = ColorResolver::new(&colors);

        assert_eq!(resolver.color_for(Some("Ferrari"), 3).hex(), "#EC4899");
        assert_eq!(resolver.color_for(Some("Williams"), 3).hex(), "#94A3B8");
        assert_eq!(resolver.color_for(Some("Jordan"), 3).hex(), "#FACC15");
        assert_eq!(resolver.color_for(Some("Red Bull"), 3).hex(), "#0600EF");
    }

    #[test]
    fn test_unknown_entities_use_the_palette() {
        let colors = team_colors();
        let resolver = ColorResolver::new(&colors);

        assert_eq!(resolver.color_for(Some("Minardi"), 0).hex(), "#00E5FF");
        assert_eq!(resolver.color_for(None, 1).hex(), "#7C3AED");
        assert_eq!(resolver.color_for(None, 21), palette_color(1));
    }

    #[test]
    fn test_rgb_channels() {
        assert_eq!(Color::new("#00E5FF").rgb(), Some((0, 229, 255)));
        assert_eq!(Color::new("00E5FF").rgb(), None);
        assert_eq!(Color::new("#00E5F").rgb(), None);
        assert_eq!(Color::new("#GGGGGG").rgb(), None);
    }
}
