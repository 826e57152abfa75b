//! Typed highlighting rules
//!
//! A `Definition` is one compiled entry of a language's rule list: a token
//! type, a regex source, the capture group to color and a priority.

use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Token type of the synthetic editor placeholder rule
pub const PLACEHOLDER_TYPE: &str = "placeholder";
/// Matches `<#name#>` editor placeholders on a single line
pub const PLACEHOLDER_PATTERN: &str = "(<#)([^\"\\n]*?)(#>)";
/// Declared priority of the placeholder rule
pub const PLACEHOLDER_PRIORITY: i32 = 10;

/// Regex compilation flags a rule may request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOption {
    /// Letters match regardless of case
    CaseInsensitive,
    /// Whitespace and `#` comments in the pattern are ignored
    AllowCommentsAndWhitespace,
    /// `.` also matches line separators
    DotMatchesLineSeparators,
    /// `^` and `$` match at line boundaries
    AnchorsMatchLines,
    /// Swap greedy and lazy quantifiers
    SwapGreed,
}

impl MatchOption {
    /// Parse an option from its table name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "caseInsensitive" => Some(MatchOption::CaseInsensitive),
            "allowCommentsAndWhitespace" => Some(MatchOption::AllowCommentsAndWhitespace),
            "dotMatchesLineSeparators" => Some(MatchOption::DotMatchesLineSeparators),
            "anchorsMatchLines" => Some(MatchOption::AnchorsMatchLines),
            "swapGreed" => Some(MatchOption::SwapGreed),
            _ => None,
        }
    }

    /// Get the table name for this option
    pub fn name(&self) -> &'static str {
        match self {
            MatchOption::CaseInsensitive => "caseInsensitive",
            MatchOption::AllowCommentsAndWhitespace => "allowCommentsAndWhitespace",
            MatchOption::DotMatchesLineSeparators => "dotMatchesLineSeparators",
            MatchOption::AnchorsMatchLines => "anchorsMatchLines",
            MatchOption::SwapGreed => "swapGreed",
        }
    }

    fn apply(self, builder: &mut RegexBuilder) {
        match self {
            MatchOption::CaseInsensitive => builder.case_insensitive(true),
            MatchOption::AllowCommentsAndWhitespace => builder.ignore_whitespace(true),
            MatchOption::DotMatchesLineSeparators => builder.dot_matches_new_line(true),
            MatchOption::AnchorsMatchLines => builder.multi_line(true),
            MatchOption::SwapGreed => builder.swap_greed(true),
        };
    }
}

/// A single highlighting rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Token type, used to look up the theme color
    pub token_type: String,
    /// Regex source
    pub pattern: String,
    /// Capture group whose range is painted
    pub group: usize,
    /// Priority (higher = painted later, wins overlaps)
    pub relevance: i32,
    /// Regex flags applied when the pattern is compiled
    pub options: Vec<MatchOption>,
    /// Whether matches may cross line breaks
    pub multi_line: bool,
}

impl Definition {
    /// Create a rule coloring whole matches with default options
    pub fn new(token_type: &str, pattern: &str, relevance: i32) -> Self {
        Self {
            token_type: token_type.to_string(),
            pattern: pattern.to_string(),
            group: 0,
            relevance,
            options: Vec::new(),
            multi_line: false,
        }
    }

    /// The editor placeholder rule
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_TYPE, PLACEHOLDER_PATTERN, PLACEHOLDER_PRIORITY)
    }

    /// Builder: set capture group
    pub fn with_group(mut self, group: usize) -> Self {
        self.group = group;
        self
    }

    /// Builder: add a match option
    pub fn with_option(mut self, option: MatchOption) -> Self {
        self.options.push(option);
        self
    }

    /// Compile the pattern with every requested option
    ///
    /// Returns None if the pattern is not a valid regex.
    pub fn matcher(&self) -> Option<Regex> {
        let mut builder = RegexBuilder::new(&self.pattern);
        for option in &self.options {
            option.apply(&mut builder);
        }
        match builder.build() {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!(token_type = %self.token_type, "skipping rule with invalid pattern: {}", e);
                None
            }
        }
    }
}
