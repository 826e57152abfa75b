//! Configuration file support
//!
//! Loads settings from ~/.firefly.conf (or %USERPROFILE%\.firefly.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # firefly configuration
//! theme = Gruvbox Dark
//! font = Menlo
//! font-size = 13
//! line-numbers = true
//! languages-file = /home/me/.config/firefly/languages.toml
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::syntax::{
    all_languages, all_themes, LanguageTable, Syntax, ThemeTable, DEFAULT_FONT_SIZE,
    DEFAULT_LANGUAGE, DEFAULT_THEME,
};

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Theme selected at startup
    pub theme: String,
    /// Language used when none is given or detected
    pub language: String,
    /// Font family, or "system"
    pub font: String,
    /// Font point size
    pub font_size: f32,
    /// Whether to print a line-number gutter
    pub show_line_numbers: bool,
    /// Extra language rules merged over the built-ins
    pub languages_file: Option<PathBuf>,
    /// Extra themes merged over the built-ins
    pub themes_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            font: "system".to_string(),
            font_size: DEFAULT_FONT_SIZE,
            show_line_numbers: false,
            languages_file: None,
            themes_file: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".firefly.conf"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".firefly.conf"))
        }
    }

    /// Load configuration from file
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                debug!(path = %path.display(), "loading config");
                let settings = Self::parse(&contents);
                config.apply(&settings);
            }
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key = value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(value) = settings.get("theme") {
            self.theme = value.clone();
        }

        if let Some(value) = settings.get("language") {
            self.language = value.clone();
        }

        if let Some(value) = settings.get("font") {
            self.font = value.clone();
        }

        if let Some(value) = settings.get("font-size") {
            if let Ok(n) = value.parse::<f32>() {
                if n.is_finite() {
                    self.font_size = n.clamp(6.0, 96.0);
                }
            }
        }

        if let Some(value) = settings.get("line-numbers") {
            self.show_line_numbers = parse_bool(value);
        }

        if let Some(value) = settings.get("languages-file") {
            self.languages_file = Some(PathBuf::from(value));
        }

        if let Some(value) = settings.get("themes-file") {
            self.themes_file = Some(PathBuf::from(value));
        }
    }

    /// Built-in language rules with the configured file merged over them
    pub fn language_table(&self) -> Result<LanguageTable> {
        let mut table = all_languages();
        if let Some(path) = &self.languages_file {
            table.merge(LanguageTable::load(path)?);
        }
        Ok(table)
    }

    /// Built-in themes with the configured file merged over them
    pub fn theme_table(&self) -> Result<ThemeTable> {
        let mut table = all_themes();
        if let Some(path) = &self.themes_file {
            table.merge(ThemeTable::load(path)?);
        }
        Ok(table)
    }

    /// Build a highlighter from these settings
    pub fn build_syntax(&self) -> Result<Syntax> {
        let mut syntax = Syntax::with_tables(
            self.language_table()?,
            self.theme_table()?,
            &self.language,
            &self.theme,
            &self.font,
        );
        if self.font_size != DEFAULT_FONT_SIZE {
            syntax.set_font_size(self.font_size);
        }
        Ok(syntax)
    }

    /// Save current configuration to file
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            let mut contents = format!(
                "# firefly configuration\n\
                 # Generated automatically\n\n\
                 theme = {}\n\
                 language = {}\n\
                 font = {}\n\
                 font-size = {}\n\
                 line-numbers = {}\n",
                self.theme, self.language, self.font, self.font_size, self.show_line_numbers
            );
            if let Some(file) = &self.languages_file {
                contents.push_str(&format!("languages-file = {}\n", file.display()));
            }
            if let Some(file) = &self.themes_file {
                contents.push_str(&format!("themes-file = {}\n", file.display()));
            }
            fs::write(path, contents)?;
        }
        Ok(())
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> bool {
    let s = s.to_lowercase();
    matches!(s.as_str(), "true" | "yes" | "on" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Color;
    use std::path::Path;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
theme = Gruvbox Dark
font = Menlo
font-size = 13
line-numbers = true
        "#;

        let settings = Config::parse(contents);
        assert_eq!(settings.get("theme"), Some(&"Gruvbox Dark".to_string()));
        assert_eq!(settings.get("font"), Some(&"Menlo".to_string()));
        assert_eq!(settings.get("font-size"), Some(&"13".to_string()));
        assert_eq!(settings.get("line-numbers"), Some(&"true".to_string()));
    }

    #[test]
    fn test_apply_settings() {
        let mut config = Config::default();
        let mut settings = HashMap::new();
        settings.insert("theme".to_string(), "One Dark".to_string());
        settings.insert("language".to_string(), "rust".to_string());
        settings.insert("font-size".to_string(), "200".to_string());
        settings.insert("line-numbers".to_string(), "yes".to_string());
        settings.insert("themes-file".to_string(), "/tmp/themes.toml".to_string());

        config.apply(&settings);

        assert_eq!(config.theme, "One Dark");
        assert_eq!(config.language, "rust");
        assert_eq!(config.font_size, 96.0);
        assert!(config.show_line_numbers);
        assert_eq!(config.themes_file.as_deref(), Some(Path::new("/tmp/themes.toml")));
        assert_eq!(config.languages_file, None);
    }

    #[test]
    fn test_bad_font_size_ignored() {
        let mut config = Config::default();
        let mut settings = HashMap::new();
        settings.insert("font-size".to_string(), "huge".to_string());
        config.apply(&settings);
        assert_eq!(config.font_size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_build_syntax() {
        let config = Config {
            theme: "Gruvbox Light".to_string(),
            language: "python".to_string(),
            font: "Menlo".to_string(),
            font_size: 11.0,
            ..Config::default()
        };
        let syntax = config.build_syntax().unwrap();
        assert_eq!(syntax.theme_name(), "Gruvbox Light");
        assert_eq!(syntax.language(), "python");
        assert_eq!(syntax.font().size, 11.0);
        assert_eq!(&*syntax.font().family, "Menlo");
    }

    #[test]
    fn test_missing_table_file_is_an_error() {
        let config = Config {
            languages_file: Some(PathBuf::from("/nonexistent/firefly/languages.toml")),
            ..Config::default()
        };
        assert!(config.language_table().is_err());
        assert!(config.theme_table().is_ok());
    }

    #[test]
    fn test_wrong_typed_table_files_degrade() {
        let dir = std::env::temp_dir().join(format!("firefly-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let languages = dir.join("languages.toml");
        let themes = dir.join("themes.toml");
        fs::write(&languages, "[demo.keyword]\npattern = 'if'\npriority = \"high\"\n").unwrap();
        fs::write(&themes, "[Odd]\ndefault = 0x3c3836\n").unwrap();

        let config = Config {
            theme: "Odd".to_string(),
            language: "demo".to_string(),
            languages_file: Some(languages),
            themes_file: Some(themes),
            ..Config::default()
        };
        let syntax = config.build_syntax().unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(syntax.theme_name(), "Odd");
        assert_eq!(syntax.theme().default_color, Color::BLACK);
        assert_eq!(syntax.definitions()[0].relevance, 0);
        assert_eq!(syntax.paint("if").color_at(0), Some(Color::BLACK));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("True"));
        assert!(parse_bool("yes"));
        assert!(parse_bool("on"));
        assert!(parse_bool("1"));

        assert!(!parse_bool("false"));
        assert!(!parse_bool("off"));
        assert!(!parse_bool("anything"));
    }
}
