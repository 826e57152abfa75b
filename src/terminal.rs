//! Terminal output of styled text using crossterm
//!
//! Writes 24-bit foreground colors as ANSI escapes, with an optional
//! line-number gutter colored from the theme.

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::error::Result;
use crate::syntax::{Color, StyledText, Theme};

/// Renders styled text to any writer
pub struct TerminalRenderer<W: Write> {
    out: W,
    /// Whether to print a line-number gutter
    line_numbers: bool,
    /// 1-based line drawn with the active gutter color and current-line background
    current_line: Option<usize>,
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a renderer with no gutter
    pub fn new(out: W) -> Self {
        Self {
            out,
            line_numbers: false,
            current_line: None,
        }
    }

    /// Builder: toggle the line-number gutter
    pub fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    /// Builder: mark a 1-based line as current
    pub fn with_current_line(mut self, line: Option<usize>) -> Self {
        self.current_line = line;
        self
    }

    /// Write the text, run by run
    pub fn render(&mut self, styled: &StyledText, theme: &Theme) -> Result<()> {
        let text = styled.text();
        let width = text.lines().count().max(1).to_string().len();
        let mut line = 1;
        let mut at_line_start = true;

        for span in styled.runs() {
            for piece in text[span.start..span.end].split_inclusive('\n') {
                if at_line_start {
                    self.start_line(line, width, theme)?;
                }
                queue!(self.out, SetForegroundColor(to_terminal(span.style.fg)), Print(piece))?;
                at_line_start = piece.ends_with('\n');
                if at_line_start {
                    line += 1;
                }
            }
        }

        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }

    fn start_line(&mut self, line: usize, width: usize, theme: &Theme) -> Result<()> {
        let is_current = self.current_line == Some(line);
        queue!(self.out, ResetColor)?;
        if self.line_numbers {
            let color = if is_current {
                theme.line_number_active
            } else {
                theme.line_number
            };
            queue!(
                self.out,
                SetForegroundColor(to_terminal(color)),
                Print(format!("{:>width$} ", line, width = width))
            )?;
        }
        if is_current {
            queue!(self.out, SetBackgroundColor(to_terminal(theme.current_line)))?;
        }
        Ok(())
    }

    /// Consume the renderer and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn to_terminal(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
