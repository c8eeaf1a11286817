//! Colors and glyphs shared by every widget.

use crossterm::style::{Attribute, Color};
use tessera_core::Style;

/// Styles and glyphs used when painting panels and widgets.
///
/// The defaults reproduce the classic installer palette: a white-on-blue
/// table header, a black-on-white selection bar and white-on-magenta input
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Panel border.
    pub border: Style,
    /// Panel text and unselected table rows.
    pub text: Style,
    /// Table header row.
    pub header: Style,
    /// Selected table row.
    pub selected: Style,
    /// Text field contents, padded to the field's length.
    pub field: Style,
    /// Glyph for a checked toggle.
    pub checked: char,
    /// Glyph for an unchecked toggle.
    pub unchecked: char,
    /// Character shown in place of each character of a masked field.
    pub mask: char,
}

fn colors(fg: Color, bg: Color) -> Style {
    Style {
        foreground_color: Some(fg),
        background_color: Some(bg),
        ..Style::default()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default(),
            text: Style::default(),
            header: colors(Color::White, Color::Blue),
            selected: colors(Color::Black, Color::White),
            field: colors(Color::White, Color::Magenta),
            checked: '🗹',
            unchecked: '🗷',
            mask: '*',
        }
    }
}

impl Theme {
    /// A theme without colors, for terminals that render them poorly.
    pub fn plain() -> Self {
        Self {
            header: Style::default(),
            selected: Style {
                attributes: Attribute::Reverse.into(),
                ..Style::default()
            },
            field: Style {
                attributes: Attribute::Underlined.into(),
                ..Style::default()
            },
            ..Self::default()
        }
    }
}
