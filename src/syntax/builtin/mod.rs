//! Built-in rule and theme tables
//!
//! This module provides highlighting rules for common languages and a
//! few color themes, so the highlighter works without external tables.

mod c;
mod json;
mod markdown;
mod python;
mod rust;
mod swift;
mod themes;
mod toml_lang;

use super::tables::{LanguageTable, RawLanguage, ThemeTable};

/// Language selected before anything else is chosen; it has no rules
pub const DEFAULT_LANGUAGE: &str = "default";
/// Theme selected before anything else is chosen
pub const DEFAULT_THEME: &str = "Basic";

/// File extension to language name
const EXTENSIONS: &[(&str, &str)] = &[
    ("rs", "rust"),
    ("c", "c"),
    ("h", "c"),
    ("py", "python"),
    ("pyw", "python"),
    ("pyi", "python"),
    ("toml", "toml"),
    ("md", "markdown"),
    ("markdown", "markdown"),
    ("swift", "swift"),
    ("json", "json"),
];

/// Get all built-in languages
pub fn all_languages() -> LanguageTable {
    let mut table = LanguageTable::new();
    table.insert(DEFAULT_LANGUAGE, RawLanguage::new());
    table.insert("rust", rust::rust_language());
    table.insert("c", c::c_language());
    table.insert("python", python::python_language());
    table.insert("toml", toml_lang::toml_language());
    table.insert("markdown", markdown::markdown_language());
    table.insert("swift", swift::swift_language());
    table.insert("json", json::json_language());
    table
}

/// Get all built-in themes
pub fn all_themes() -> ThemeTable {
    let mut table = ThemeTable::new();
    for (name, theme) in themes::all_themes() {
        table.insert(name, theme);
    }
    table
}

/// Detect a built-in language from a file extension (case-insensitive)
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_lowercase();
    EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, name)| *name)
}
