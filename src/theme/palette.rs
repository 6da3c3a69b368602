//! Resolved theme variants and their terminal palettes.
//!
//! `ThemeVariant` is the concrete light/dark value after the tri-state
//! preference has been resolved; `ColorPalette` maps every semantic UI role
//! to a ratatui `Style` for that variant. The applied palette is the single
//! authoritative presentation flag for the whole UI.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Theme Variant
// ============================================================================

/// A resolved theme: the value left after `system` has been reconciled
/// against the OS signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// The other variant. Toggling negates the resolved value.
    pub fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Category panel --
    pub category_normal: Style,
    pub category_selected: Style,
    pub category_count: Style,

    // -- Show / episode lists --
    pub list_title: Style,
    pub list_selected: Style,
    pub list_creator: Style,
    pub list_date: Style,
    pub featured_badge: Style,
    pub rating: Style,
    pub tag: Style,

    // -- Detail pane --
    pub detail_heading: Style,
    pub detail_body: Style,
    pub detail_metadata: Style,
    pub detail_link: Style,

    // -- Chrome --
    pub search_input: Style,
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            category_normal: Style::default(),
            category_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            category_count: Style::default().fg(Color::DarkGray),

            list_title: Style::default().add_modifier(Modifier::BOLD),
            list_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            list_creator: Style::default().fg(Color::Gray),
            list_date: Style::default().fg(Color::DarkGray),
            featured_badge: Style::default().fg(Color::Yellow),
            rating: Style::default().fg(Color::Yellow),
            tag: Style::default().fg(Color::Cyan),

            detail_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            detail_body: Style::default(),
            detail_metadata: Style::default().fg(Color::DarkGray),
            detail_link: Style::default().fg(Color::Blue),

            search_input: Style::default().fg(Color::White),
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
        }
    }

    /// Light palette — adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            category_normal: Style::default().fg(Color::Black),
            category_selected: Style::default().bg(Color::Blue).fg(Color::White),
            category_count: Style::default().fg(Color::DarkGray),

            list_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            list_selected: Style::default().bg(Color::Blue).fg(Color::White),
            list_creator: Style::default().fg(Color::DarkGray),
            list_date: Style::default().fg(Color::DarkGray),
            featured_badge: Style::default().fg(Color::Magenta),
            rating: Style::default().fg(Color::Magenta),
            tag: Style::default().fg(Color::Blue),

            detail_heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            detail_body: Style::default().fg(Color::Black),
            detail_metadata: Style::default().fg(Color::DarkGray),
            detail_link: Style::default().fg(Color::Blue),

            search_input: Style::default().fg(Color::Black),
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_from_str_name() {
        assert_eq!(ThemeVariant::from_str_name("dark"), Some(ThemeVariant::Dark));
        assert_eq!(
            ThemeVariant::from_str_name("Light"),
            Some(ThemeVariant::Light)
        );
        assert_eq!(ThemeVariant::from_str_name("DARK"), Some(ThemeVariant::Dark));
        assert_eq!(ThemeVariant::from_str_name("system"), None);
        assert_eq!(ThemeVariant::from_str_name("neon"), None);
    }

    #[test]
    fn opposite_is_involutive() {
        assert_eq!(ThemeVariant::Dark.opposite(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.opposite(), ThemeVariant::Dark);
        assert_eq!(ThemeVariant::Dark.opposite().opposite(), ThemeVariant::Dark);
    }

    #[test]
    fn is_dark_matches_variant() {
        assert!(ThemeVariant::Dark.is_dark());
        assert!(!ThemeVariant::Light.is_dark());
    }

    #[test]
    fn palettes_differ_between_variants() {
        let dark = ThemeVariant::Dark.palette();
        let light = ThemeVariant::Light.palette();
        assert_ne!(dark.list_selected, light.list_selected);
        assert_ne!(dark.status_bar, light.status_bar);
    }

    #[test]
    fn dark_selection_uses_dark_gray() {
        let palette = ThemeVariant::Dark.palette();
        assert_eq!(
            palette.list_selected,
            Style::default().bg(Color::DarkGray).fg(Color::White)
        );
    }
}
