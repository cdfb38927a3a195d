//! Color palettes for the light and dark display modes.

use ratatui::style::Color;

use crate::app::Theme;

/// Resolved color set for one display mode.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Screen background
    pub bg: Color,
    /// Primary text
    pub fg: Color,
    /// Borders and separators
    pub border: Color,
    /// Secondary text: metadata, hints
    pub dim: Color,
    /// Highlights: selected card, headings
    pub accent: Color,
}

/// Light mode palette (default).
pub const LIGHT: Palette = Palette {
    bg: Color::White,
    fg: Color::Black,
    border: Color::Gray,
    dim: Color::DarkGray,
    accent: Color::Blue,
};

/// Dark mode palette.
pub const DARK: Palette = Palette {
    bg: Color::Rgb(17, 24, 39),
    fg: Color::White,
    border: Color::DarkGray,
    dim: Color::Gray,
    accent: Color::LightBlue,
};

impl Palette {
    /// Palette for the given display mode.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_per_theme() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.bg, dark.bg);
        assert_ne!(light.fg, dark.fg);
    }
}
