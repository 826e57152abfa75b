//! Built-in color themes

use crate::syntax::tables::{RawTheme, TokenColors};

struct Palette {
    default: &'static str,
    background: &'static str,
    current_line: &'static str,
    selection: &'static str,
    cursor: &'static str,
    line_number: &'static str,
    line_number_active: &'static str,
    style: &'static str,
    definitions: &'static [(&'static str, &'static str)],
}

impl Palette {
    fn to_raw(&self) -> RawTheme {
        RawTheme {
            default: Some(self.default.into()),
            background: Some(self.background.into()),
            current_line: Some(self.current_line.into()),
            selection: Some(self.selection.into()),
            cursor: Some(self.cursor.into()),
            line_number: Some(self.line_number.into()),
            line_number_active: Some(self.line_number_active.into()),
            style: Some(self.style.into()),
            definitions: Some(self.definitions.iter().copied().collect::<TokenColors>()),
        }
    }
}

const BASIC: Palette = Palette {
    default: "#000000",
    background: "#ffffff",
    current_line: "#e8f2ff",
    selection: "#b2d7ff",
    cursor: "#000000",
    line_number: "#a6a6a6",
    line_number_active: "#000000",
    style: "light",
    definitions: &[
        ("keyword", "#9b2393"),
        ("type", "#0b4f79"),
        ("builtin", "#0b4f79"),
        ("function", "#326d74"),
        ("macro", "#643820"),
        ("attribute", "#643820"),
        ("preprocessor", "#643820"),
        ("number", "#1c00cf"),
        ("boolean", "#9b2393"),
        ("string", "#c41a16"),
        ("character", "#1c00cf"),
        ("lifetime", "#9b2393"),
        ("comment", "#5d6c79"),
        ("key", "#0b4f79"),
        ("section", "#9b2393"),
        ("heading", "#9b2393"),
        ("strong", "#000000"),
        ("emphasis", "#5d6c79"),
        ("link", "#0e0eff"),
        ("list", "#643820"),
        ("code", "#c41a16"),
        ("codeBlock", "#c41a16"),
        ("placeholder", "#0e0eff"),
    ],
};

const GRUVBOX_LIGHT: Palette = Palette {
    default: "#3c3836",
    background: "#f9f5d7",
    current_line: "#ebdbb260",
    selection: "#689d6a40",
    cursor: "#3c3836",
    line_number: "#bdae93",
    line_number_active: "#bdae93",
    style: "light",
    definitions: &[
        ("keyword", "#9d0006"),
        ("type", "#b57614"),
        ("builtin", "#b57614"),
        ("function", "#79740e"),
        ("macro", "#427b58"),
        ("attribute", "#427b58"),
        ("preprocessor", "#427b58"),
        ("number", "#8f3f71"),
        ("boolean", "#8f3f71"),
        ("string", "#79740e"),
        ("character", "#8f3f71"),
        ("lifetime", "#af3a03"),
        ("comment", "#928374"),
        ("key", "#076678"),
        ("section", "#9d0006"),
        ("heading", "#9d0006"),
        ("strong", "#3c3836"),
        ("emphasis", "#7c6f64"),
        ("link", "#076678"),
        ("list", "#af3a03"),
        ("code", "#79740e"),
        ("codeBlock", "#79740e"),
        ("placeholder", "#076678"),
    ],
};

const GRUVBOX_DARK: Palette = Palette {
    default: "#ebdbb2",
    background: "#1d2021",
    current_line: "#3c383660",
    selection: "#689d6a40",
    cursor: "#ebdbb2",
    line_number: "#665c54",
    line_number_active: "#bdae93",
    style: "dark",
    definitions: &[
        ("keyword", "#fb4934"),
        ("type", "#fabd2f"),
        ("builtin", "#fabd2f"),
        ("function", "#b8bb26"),
        ("macro", "#8ec07c"),
        ("attribute", "#8ec07c"),
        ("preprocessor", "#8ec07c"),
        ("number", "#d3869b"),
        ("boolean", "#d3869b"),
        ("string", "#b8bb26"),
        ("character", "#d3869b"),
        ("lifetime", "#fe8019"),
        ("comment", "#928374"),
        ("key", "#83a598"),
        ("section", "#fb4934"),
        ("heading", "#fb4934"),
        ("strong", "#ebdbb2"),
        ("emphasis", "#a89984"),
        ("link", "#83a598"),
        ("list", "#fe8019"),
        ("code", "#b8bb26"),
        ("codeBlock", "#b8bb26"),
        ("placeholder", "#83a598"),
    ],
};

const ONE_DARK: Palette = Palette {
    default: "#abb2bf",
    background: "#282c34",
    current_line: "#2c313c",
    selection: "#3e4451",
    cursor: "#528bff",
    line_number: "#495162",
    line_number_active: "#abb2bf",
    style: "dark",
    definitions: &[
        ("keyword", "#c678dd"),
        ("type", "#e5c07b"),
        ("builtin", "#e5c07b"),
        ("function", "#61afef"),
        ("macro", "#56b6c2"),
        ("attribute", "#d19a66"),
        ("preprocessor", "#c678dd"),
        ("number", "#d19a66"),
        ("boolean", "#d19a66"),
        ("string", "#98c379"),
        ("character", "#98c379"),
        ("lifetime", "#e06c75"),
        ("comment", "#5c6370"),
        ("key", "#e06c75"),
        ("section", "#c678dd"),
        ("heading", "#e06c75"),
        ("strong", "#d19a66"),
        ("emphasis", "#c678dd"),
        ("link", "#61afef"),
        ("list", "#e06c75"),
        ("code", "#98c379"),
        ("codeBlock", "#98c379"),
        ("placeholder", "#61afef"),
    ],
};

/// All built-in themes with their names
pub fn all_themes() -> Vec<(&'static str, RawTheme)> {
    vec![
        ("Basic", BASIC.to_raw()),
        ("Gruvbox Light", GRUVBOX_LIGHT.to_raw()),
        ("Gruvbox Dark", GRUVBOX_DARK.to_raw()),
        ("One Dark", ONE_DARK.to_raw()),
    ]
}
