//! Highlighting facade
//!
//! `Syntax` holds the current language, theme and font together with the
//! compiled rule list and resolved theme derived from them. Every setter
//! recompiles synchronously; painting only reads the stored state.

use std::ops::Range;

use tracing::debug;

use super::builtin;
use super::compiler;
use super::overlay;
use super::rules::Definition;
use super::style::{Color, Font, StyledText, DEFAULT_FONT_SIZE};
use super::tables::{LanguageTable, ThemeTable};
use super::theme::Theme;

/// Font families resolved by name when no others are registered
const KNOWN_FONTS: &[&str] = &[
    "Menlo",
    "Monaco",
    "SF Mono",
    "Courier",
    "Courier New",
    "Consolas",
    "DejaVu Sans Mono",
    "Fira Code",
    "JetBrains Mono",
    "Source Code Pro",
];

/// Stateful highlighter
pub struct Syntax {
    /// Language rule tables
    languages: LanguageTable,
    /// Theme tables
    themes: ThemeTable,
    /// Font families `set_font` can resolve
    fonts: Vec<String>,
    language: String,
    theme_name: String,
    font: Font,
    font_size: f32,
    /// Rules of the current language plus the placeholder rule
    definitions: Vec<Definition>,
    /// Theme resolved with the current font
    theme: Theme,
}

impl Syntax {
    /// Create a highlighter over the built-in tables
    pub fn new(language: &str, theme: &str, font: &str) -> Self {
        Self::with_tables(builtin::all_languages(), builtin::all_themes(), language, theme, font)
    }

    /// Create a highlighter over custom tables
    pub fn with_tables(
        languages: LanguageTable,
        themes: ThemeTable,
        language: &str,
        theme: &str,
        font: &str,
    ) -> Self {
        let mut syntax = Self {
            languages,
            themes,
            fonts: KNOWN_FONTS.iter().map(|f| f.to_string()).collect(),
            language: String::new(),
            theme_name: String::new(),
            font: Font::system(DEFAULT_FONT_SIZE),
            font_size: DEFAULT_FONT_SIZE,
            definitions: Vec::new(),
            theme: Theme::default(),
        };
        syntax.set_language(language);
        syntax.set_font(font);
        syntax.set_theme(theme);
        syntax
    }

    /// Switch language and recompile its rules
    ///
    /// Unknown languages leave only the placeholder rule.
    pub fn set_language(&mut self, name: &str) {
        self.definitions = compiler::compile(name, &self.languages, true);
        self.language = name.to_string();
    }

    /// Switch theme; unknown names keep the current theme
    pub fn set_theme(&mut self, name: &str) {
        match self.themes.get(name) {
            Some(raw) => {
                self.theme = Theme::resolve(raw, self.font.clone());
                self.theme_name = name.to_string();
            }
            None => debug!(theme = name, "unknown theme, keeping current"),
        }
    }

    /// Switch font and re-resolve the theme around it
    ///
    /// "system" selects the platform default font. Other names are matched
    /// case-insensitively against the registered families and fall back to
    /// the platform default.
    pub fn set_font(&mut self, name: &str) {
        self.font = self.lookup_font(name);
        match self.themes.get(&self.theme_name) {
            Some(raw) => self.theme = Theme::resolve(raw, self.font.clone()),
            // Built-in default theme; keep the font current regardless
            None => self.theme.font = self.font.clone(),
        }
    }

    /// Change the point size of the current font
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
        let family = self.font.family.clone();
        self.set_font(&family);
    }

    /// Make a font family resolvable by `set_font`
    pub fn register_font(&mut self, family: &str) {
        if self.find_font(family).is_none() {
            self.fonts.push(family.to_string());
        }
    }

    fn find_font(&self, name: &str) -> Option<&str> {
        self.fonts
            .iter()
            .find(|f| f.eq_ignore_ascii_case(name))
            .map(|f| f.as_str())
    }

    fn lookup_font(&self, name: &str) -> Font {
        if name == Font::SYSTEM_FAMILY {
            return Font::system(self.font_size);
        }
        match self.find_font(name) {
            Some(family) => Font::named(family, self.font_size),
            None => {
                debug!(font = name, "unknown font, using system font");
                Font::system(self.font_size)
            }
        }
    }

    /// Highlight text with the current state
    pub fn paint(&self, text: &str) -> StyledText {
        overlay::paint(text, &self.definitions, &self.theme)
    }

    /// Repaint a byte range of already styled text with the current state
    pub fn paint_range(&self, styled: &mut StyledText, range: Range<usize>) {
        overlay::repaint(styled, range, &self.definitions, &self.theme);
    }

    /// Color the current theme uses for a token type
    pub fn color_for(&self, token_type: &str) -> Color {
        self.theme.color_for(token_type)
    }

    /// Sorted names of the known languages
    pub fn available_languages(&self) -> Vec<&str> {
        self.languages.names()
    }

    /// Sorted names of the known themes
    pub fn available_themes(&self) -> Vec<&str> {
        self.themes.names()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Name of the theme in effect, empty while the built-in default is used
    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    /// The resolved current theme
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Language rule tables
    pub fn languages(&self) -> &LanguageTable {
        &self.languages
    }

    /// Theme tables
    pub fn themes(&self) -> &ThemeTable {
        &self.themes
    }

    /// The compiled rule list, in paint order
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// Whether the current language asks for multi-line re-highlighting
    pub fn has_multiline_rules(&self) -> bool {
        self.definitions.iter().any(|d| d.multi_line)
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self::new(builtin::DEFAULT_LANGUAGE, builtin::DEFAULT_THEME, Font::SYSTEM_FAMILY)
    }
}

/// One-shot highlight without a `Syntax`
///
/// Compiles `language` from `languages` (no placeholder rule) and paints
/// `text` with `theme`.
pub fn highlight(text: &str, theme: &Theme, language: &str, languages: &LanguageTable) -> StyledText {
    let definitions = compiler::compile(language, languages, false);
    overlay::paint(text, &definitions, theme)
}
