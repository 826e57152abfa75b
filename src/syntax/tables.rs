//! Raw language and theme tables
//!
//! These are the untyped inputs of the highlighter: rule records keyed by
//! language and token type, and color records keyed by theme name. They can
//! be built in code (see `builtin`) or loaded from TOML files:
//!
//! ```toml
//! [rust.keyword]
//! pattern = '\b(fn|let|mut)\b'
//! priority = 5
//!
//! [rust.comment]
//! pattern = '//.*'
//! priority = 1
//! ```
//!
//! ```toml
//! [Basic]
//! default = "#000000"
//! background = "#ffffff"
//! style = "light"
//!
//! [Basic.definitions]
//! keyword = "#aa0d91"
//! ```
//!
//! Only malformed TOML is an error. A field of the wrong type falls back to
//! its default, and so does a record that is not a table.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::error::Result;

/// Deserialize a field, substituting its default on a type mismatch
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = toml::Value::deserialize(deserializer)?;
    let found = value.type_str();
    Ok(value.try_into().unwrap_or_else(|_| {
        warn!(found, "field has the wrong type, using its default");
        T::default()
    }))
}

/// Convert a whole record, substituting defaults when it is not a table
fn record_or_default<T: DeserializeOwned + Default>(name: &str, value: toml::Value) -> T {
    let found = value.type_str();
    value.try_into().unwrap_or_else(|_| {
        warn!(name, found, "entry is not a table, using defaults");
        T::default()
    })
}

/// One rule record as supplied by a language table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawRule {
    /// Regular expression source
    #[serde(deserialize_with = "lenient")]
    pub pattern: String,
    /// Capture group whose range is colored (0 = whole match)
    #[serde(deserialize_with = "lenient")]
    pub capture_group: usize,
    /// Higher priority wins on overlap
    #[serde(deserialize_with = "lenient")]
    pub priority: i32,
    /// Regex flag names, e.g. "caseInsensitive"
    #[serde(deserialize_with = "lenient")]
    pub match_options: Vec<String>,
    /// Hint for callers choosing re-highlight granularity
    #[serde(deserialize_with = "lenient")]
    pub spans_multiple_lines: bool,
}

impl RawRule {
    /// Create a rule record with just a pattern
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            ..Default::default()
        }
    }

    /// Builder: set priority
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Builder: set capture group
    pub fn group(mut self, group: usize) -> Self {
        self.capture_group = group;
        self
    }

    /// Builder: add a match option
    pub fn option(mut self, name: &str) -> Self {
        self.match_options.push(name.to_string());
        self
    }

    /// Builder: mark as spanning multiple lines
    pub fn multiline(mut self) -> Self {
        self.spans_multiple_lines = true;
        self
    }
}

/// Rules of one language, keyed by token type
pub type RawLanguage = BTreeMap<String, RawRule>;

/// All known languages, keyed by lowercase name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageTable {
    languages: BTreeMap<String, RawLanguage>,
}

impl LanguageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a language; the name is stored lowercased
    pub fn insert(&mut self, name: &str, language: RawLanguage) {
        self.languages.insert(name.to_lowercase(), language);
    }

    /// Look up a language case-insensitively
    pub fn get(&self, name: &str) -> Option<&RawLanguage> {
        self.languages.get(&name.to_lowercase())
    }

    /// Sorted language names
    pub fn names(&self) -> Vec<&str> {
        self.languages.keys().map(|s| s.as_str()).collect()
    }

    /// Merge another table over this one; same-named languages are replaced
    pub fn merge(&mut self, other: LanguageTable) {
        for (name, language) in other.languages {
            self.insert(&name, language);
        }
    }

    /// Parse a table from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let parsed: toml::Table = toml::from_str(contents)?;
        let mut table = LanguageTable::new();
        for (name, rules) in parsed {
            let language = match rules {
                toml::Value::Table(rules) => rules
                    .into_iter()
                    .map(|(token_type, rule)| {
                        let rule = record_or_default(&token_type, rule);
                        (token_type, rule)
                    })
                    .collect(),
                other => {
                    warn!(language = %name, found = other.type_str(), "language is not a table, no rules");
                    RawLanguage::new()
                }
            };
            table.insert(&name, language);
        }
        Ok(table)
    }

    /// Load a table from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Token type to hex color pairs, in the order they were supplied
///
/// Kept as a list rather than a map so the resolver decides what happens
/// to duplicate keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenColors(pub Vec<(String, String)>);

impl TokenColors {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TokenColors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'de> Deserialize<'de> for TokenColors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = TokenColors;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of token types to hex colors")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
                let mut pairs = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, toml::Value>()? {
                    // A non-string color resolves like any malformed hex
                    let hex = value.as_str().unwrap_or_default().to_string();
                    pairs.push((key, hex));
                }
                Ok(TokenColors(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

/// One theme record; every color is an optional hex string
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawTheme {
    #[serde(deserialize_with = "lenient")]
    pub default: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub background: Option<String>,
    #[serde(rename = "currentLine", deserialize_with = "lenient")]
    pub current_line: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub selection: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub cursor: Option<String>,
    #[serde(rename = "lineNumber", deserialize_with = "lenient")]
    pub line_number: Option<String>,
    #[serde(rename = "lineNumber-Active", deserialize_with = "lenient")]
    pub line_number_active: Option<String>,
    /// "light" or anything else for dark
    #[serde(deserialize_with = "lenient")]
    pub style: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub definitions: Option<TokenColors>,
}

/// All known themes, keyed by name (case-sensitive)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeTable {
    themes: BTreeMap<String, RawTheme>,
}

impl ThemeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a theme
    pub fn insert(&mut self, name: &str, theme: RawTheme) {
        self.themes.insert(name.to_string(), theme);
    }

    pub fn get(&self, name: &str) -> Option<&RawTheme> {
        self.themes.get(name)
    }

    /// Sorted theme names
    pub fn names(&self) -> Vec<&str> {
        self.themes.keys().map(|s| s.as_str()).collect()
    }

    /// Merge another table over this one; same-named themes are replaced
    pub fn merge(&mut self, other: ThemeTable) {
        self.themes.extend(other.themes);
    }

    /// Parse a table from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let parsed: toml::Table = toml::from_str(contents)?;
        let mut table = ThemeTable::new();
        for (name, theme) in parsed {
            let theme = record_or_default(&name, theme);
            table.insert(&name, theme);
        }
        Ok(table)
    }

    /// Load a table from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
