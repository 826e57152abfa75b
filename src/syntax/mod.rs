//! Syntax highlighting
//!
//! This module turns language rule tables and theme tables into styled
//! text:
//! - `compiler` orders a language's rules by priority
//! - `theme` resolves raw color records
//! - `overlay` paints rules over text, later rules winning overlaps
//! - `manager` keeps the current language, theme and font

mod builtin;
mod compiler;
mod manager;
mod overlay;
mod rules;
mod style;
mod tables;
mod theme;

pub use builtin::{all_languages, all_themes, language_for_extension, DEFAULT_LANGUAGE, DEFAULT_THEME};
pub use compiler::{compile, compile_language};
pub use manager::{highlight, Syntax};
pub use overlay::{paint, repaint};
pub use rules::{Definition, MatchOption, PLACEHOLDER_PATTERN, PLACEHOLDER_PRIORITY, PLACEHOLDER_TYPE};
pub use style::{Color, Font, Span, Style, StyledText, DEFAULT_FONT_SIZE};
pub use tables::{LanguageTable, RawLanguage, RawRule, RawTheme, ThemeTable, TokenColors};
pub use theme::{Theme, ThemeStyle};
