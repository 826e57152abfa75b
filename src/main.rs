//! firefly - highlight source files in the terminal

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use firefly::config::Config;
use firefly::error::{FireflyError, Result};
use firefly::syntax::{highlight, language_for_extension};
use firefly::terminal::TerminalRenderer;

#[derive(Parser, Debug)]
#[command(name = "firefly")]
#[command(about = "Regex syntax highlighter")]
#[command(version)]
#[command(after_help = "Settings are read from ~/.firefly.conf; set FIREFLY_LOG=debug for logs.")]
/// Command-line arguments.
struct Cli {
    /// File to highlight (stdin when omitted or '-')
    file: Option<PathBuf>,

    /// Language (default: from the file extension)
    #[arg(long, short = 'l', value_name = "NAME")]
    language: Option<String>,

    /// Color theme
    #[arg(long, short = 't', value_name = "NAME")]
    theme: Option<String>,

    /// Font family, or 'system'
    #[arg(long, short = 'f', value_name = "NAME")]
    font: Option<String>,

    /// Print a line-number gutter
    #[arg(long, short = 'n')]
    line_numbers: bool,

    /// Mark line N as the current line
    #[arg(long, value_name = "N")]
    line: Option<usize>,

    /// Do not highlight <#placeholder#> tokens
    #[arg(long)]
    no_placeholders: bool,

    /// List available languages
    #[arg(long)]
    list_languages: bool,

    /// List available themes
    #[arg(long)]
    list_themes: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("FIREFLY_LOG"))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load();
    let mut syntax = config.build_syntax()?;

    if cli.list_languages {
        for name in syntax.available_languages() {
            println!("{}", name);
        }
        return Ok(());
    }
    if cli.list_themes {
        for name in syntax.available_themes() {
            println!("{}", name);
        }
        return Ok(());
    }

    let language = cli
        .language
        .clone()
        .or_else(|| {
            let ext = cli.file.as_deref()?.extension()?.to_str()?;
            language_for_extension(ext).map(|s| s.to_string())
        })
        .unwrap_or_else(|| config.language.clone());

    // The highlighter degrades silently; the command line reports typos
    if !syntax.available_languages().contains(&language.to_lowercase().as_str()) {
        return Err(FireflyError::UnknownLanguage(language));
    }
    if let Some(theme) = &cli.theme {
        if !syntax.available_themes().contains(&theme.as_str()) {
            return Err(FireflyError::UnknownTheme(theme.clone()));
        }
        syntax.set_theme(theme);
    }
    if let Some(font) = &cli.font {
        syntax.set_font(font);
    }
    syntax.set_language(&language);

    let text = match &cli.file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    debug!(language = %language, theme = syntax.theme_name(), bytes = text.len(), "highlighting");

    let styled = if cli.no_placeholders {
        highlight(&text, syntax.theme(), &language, syntax.languages())
    } else {
        syntax.paint(&text)
    };

    let mut renderer = TerminalRenderer::new(io::stdout().lock())
        .with_line_numbers(cli.line_numbers || config.show_line_numbers)
        .with_current_line(cli.line);
    renderer.render(&styled, syntax.theme())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_options() {
        let cli = Cli::try_parse_from([
            "firefly", "-l", "rust", "-t", "One Dark", "-n", "--line", "3", "--no-placeholders", "main.rs",
        ])
        .unwrap();
        assert_eq!(cli.language.as_deref(), Some("rust"));
        assert_eq!(cli.theme.as_deref(), Some("One Dark"));
        assert!(cli.line_numbers);
        assert_eq!(cli.line, Some(3));
        assert!(cli.no_placeholders);
        assert_eq!(cli.file, Some(PathBuf::from("main.rs")));
    }

    #[test]
    fn test_stdin_and_defaults() {
        let cli = Cli::try_parse_from(["firefly", "-"]).unwrap();
        assert_eq!(cli.file.as_deref(), Some(Path::new("-")));
        assert!(!cli.no_placeholders);
        assert_eq!(cli.line, None);

        let cli = Cli::try_parse_from(["firefly"]).unwrap();
        assert_eq!(cli.file, None);
    }

    #[test]
    fn test_bad_arguments_rejected() {
        assert!(Cli::try_parse_from(["firefly", "--line", "three"]).is_err());
        assert!(Cli::try_parse_from(["firefly", "--theme"]).is_err());
        assert!(Cli::try_parse_from(["firefly", "--bogus"]).is_err());
    }
}
