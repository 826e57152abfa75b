//! Theme resolution
//!
//! Turns a raw theme record into a fully populated `Theme`. Resolution
//! never fails: missing or malformed colors become black.

use std::collections::HashMap;

use tracing::debug;

use super::style::{Color, Font, Style};
use super::tables::{RawTheme, ThemeTable};

/// Light or dark appearance of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeStyle {
    Light,
    #[default]
    Dark,
}

impl ThemeStyle {
    /// "light" is light, anything else is dark
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("light") => ThemeStyle::Light,
            _ => ThemeStyle::Dark,
        }
    }
}

/// A resolved theme
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Color of text no rule covers
    pub default_color: Color,
    pub background: Color,
    pub current_line: Color,
    pub selection: Color,
    pub cursor: Color,
    /// Gutter line numbers
    pub line_number: Color,
    /// Gutter line number of the current line
    pub line_number_active: Color,
    pub style: ThemeStyle,
    pub font: Font,
    /// Token type to color
    pub colors: HashMap<String, Color>,
}

impl Theme {
    /// Resolve a raw record, embedding the given font
    pub fn resolve(raw: &RawTheme, font: Font) -> Self {
        let color = |field: &Option<String>| Color::hex_or_black(field.as_deref().unwrap_or("#000000"));

        let mut colors: HashMap<String, Color> = HashMap::new();
        if let Some(definitions) = &raw.definitions {
            for (token_type, hex) in definitions.iter() {
                // First value for a token type is kept
                colors
                    .entry(token_type.to_string())
                    .or_insert_with(|| Color::hex_or_black(hex));
            }
        }

        debug!(colors = colors.len(), font = %font.family, "resolved theme");

        Self {
            default_color: color(&raw.default),
            background: color(&raw.background),
            current_line: color(&raw.current_line),
            selection: color(&raw.selection),
            cursor: color(&raw.cursor),
            line_number: color(&raw.line_number),
            line_number_active: color(&raw.line_number_active),
            style: ThemeStyle::from_name(raw.style.as_deref()),
            font,
            colors,
        }
    }

    /// Color for a token type, falling back to the default color
    pub fn color_for(&self, token_type: &str) -> Color {
        self.colors.get(token_type).copied().unwrap_or(self.default_color)
    }

    /// Baseline style for uncovered text
    pub fn default_style(&self) -> Style {
        Style::new(self.default_color, self.font.clone())
    }

    /// Style painted by rules of a token type
    pub fn style_for(&self, token_type: &str) -> Style {
        Style::new(self.color_for(token_type), self.font.clone())
    }
}

impl Default for Theme {
    /// Black on white with the system font, used before any theme is set
    fn default() -> Self {
        Self {
            default_color: Color::BLACK,
            background: Color::WHITE,
            current_line: Color::rgba(0, 0, 0, 0),
            selection: Color::rgb(0, 0, 255),
            cursor: Color::rgb(0, 0, 255),
            line_number: Color::WHITE,
            line_number_active: Color::WHITE,
            style: ThemeStyle::Light,
            font: Font::default(),
            colors: HashMap::new(),
        }
    }
}

impl ThemeTable {
    /// Resolve a named theme with the system font, without any highlighter state
    pub fn resolve(&self, name: &str) -> Option<Theme> {
        self.get(name).map(|raw| Theme::resolve(raw, Font::default()))
    }
}
