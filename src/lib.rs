//! firefly - regex-driven syntax highlighting
//!
//! Languages are tables of named regex rules with priorities; themes are
//! tables of hex colors. [`Syntax`] compiles the current language into an
//! ordered rule list and paints text with it:
//!
//! ```
//! use firefly::Syntax;
//!
//! let mut syntax = Syntax::new("rust", "One Dark", "system");
//! let styled = syntax.paint("fn main() {}");
//! assert_eq!(styled.color_at(0), Some(syntax.color_for("keyword")));
//!
//! syntax.set_theme("Gruvbox Light");
//! ```

pub mod config;
pub mod error;
pub mod syntax;
pub mod terminal;

pub use error::{FireflyError, Result};
pub use syntax::{highlight, Color, Font, LanguageTable, StyledText, Syntax, Theme, ThemeTable};
