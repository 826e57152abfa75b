//! Style types for highlighted text
//!
//! This module provides the colors, fonts and the styled text value
//! produced by the overlay engine and consumed by renderers.

use std::ops::Range;
use std::sync::Arc;

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse "#RGB", "#RRGGBB" or "#RRGGBBAA" (the leading '#' is optional)
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: Range<usize>| u8::from_str_radix(&s[range], 16).ok();
        match s.len() {
            3 => {
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Some(Color::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Some(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// Parse a hex string, substituting black when it is malformed
    pub fn hex_or_black(s: &str) -> Self {
        Self::from_hex(s).unwrap_or(Self::BLACK)
    }

    /// Format as "#RRGGBB", or "#RRGGBBAA" when not opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Point size used when nothing else is configured
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// A resolved font: family name plus point size
///
/// The family name is shared, so cloning a font is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: Arc<str>,
    pub size: f32,
}

impl Font {
    /// Family name of the platform default font
    pub const SYSTEM_FAMILY: &'static str = "system";

    /// The platform default font at the given size
    pub fn system(size: f32) -> Self {
        Self::named(Self::SYSTEM_FAMILY, size)
    }

    /// A font with an explicit family name
    pub fn named(family: &str, size: f32) -> Self {
        Self {
            family: Arc::from(family),
            size,
        }
    }

    /// Check if this is the platform default font
    pub fn is_system(&self) -> bool {
        &*self.family == Self::SYSTEM_FAMILY
    }

    /// Same family at a different size
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            family: Arc::clone(&self.family),
            size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(DEFAULT_FONT_SIZE)
    }
}

/// Attributes painted over a character
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Font
    pub font: Font,
}

impl Style {
    pub fn new(fg: Color, font: Font) -> Self {
        Self { fg, font }
    }
}

/// A styled run of text
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Style applied to this span
    pub style: Style,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self { start, end, style }
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Text annotated with a style for every byte
///
/// Distinct styles are kept once in a palette and each byte stores an index
/// into it. Paint operations are widened to character boundaries, so every
/// byte of a multi-byte character carries the same style.
#[derive(Debug, Clone)]
pub struct StyledText {
    text: String,
    palette: Vec<Style>,
    indices: Vec<u32>,
}

impl StyledText {
    /// Wrap text with a single baseline style over its whole length
    pub fn new(text: impl Into<String>, base: Style) -> Self {
        let text = text.into();
        let indices = vec![0; text.len()];
        Self {
            text,
            palette: vec![base],
            indices,
        }
    }

    /// The underlying characters
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Overwrite the style of a byte range
    ///
    /// The range is clamped to the text and widened to character boundaries.
    pub fn paint(&mut self, range: Range<usize>, style: &Style) {
        let range = self.char_range(range);
        if range.is_empty() {
            return;
        }
        let index = self.intern(style);
        self.indices[range].fill(index);
    }

    /// Clamp a byte range to the text and widen it to character boundaries
    pub fn char_range(&self, range: Range<usize>) -> Range<usize> {
        let text = &self.text;
        let mut start = range.start.min(text.len());
        let mut end = range.end.clamp(start, text.len());
        let empty = start == end;
        while !text.is_char_boundary(start) {
            start -= 1;
        }
        if empty {
            return start..start;
        }
        while !text.is_char_boundary(end) {
            end += 1;
        }
        start..end
    }

    fn intern(&mut self, style: &Style) -> u32 {
        let index = match self.palette.iter().position(|s| s == style) {
            Some(index) => index,
            None => {
                self.palette.push(style.clone());
                self.palette.len() - 1
            }
        };
        index as u32
    }

    /// Style at a byte offset
    pub fn style_at(&self, pos: usize) -> Option<&Style> {
        self.indices
            .get(pos)
            .and_then(|&index| self.palette.get(index as usize))
    }

    /// Foreground color at a byte offset
    pub fn color_at(&self, pos: usize) -> Option<Color> {
        self.style_at(pos).map(|s| s.fg)
    }

    /// Coalesce adjacent bytes with equal styles into spans
    pub fn runs(&self) -> Vec<Span> {
        let mut runs: Vec<(usize, usize, u32)> = Vec::new();
        for (pos, &index) in self.indices.iter().enumerate() {
            match runs.last_mut() {
                // The palette holds no duplicates, so equal styles share an index
                Some((_, end, last)) if *last == index => *end = pos + 1,
                _ => runs.push((pos, pos + 1, index)),
            }
        }
        runs.into_iter()
            .filter_map(|(start, end, index)| {
                let style = self.palette.get(index as usize)?;
                Some(Span::new(start, end, style.clone()))
            })
            .collect()
    }

    /// Consume and return the raw text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl PartialEq for StyledText {
    /// Equal text with an equal style on every byte, however the palette is ordered
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && (0..self.len()).all(|pos| self.style_at(pos) == other.style_at(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#3c3836"), Some(Color::rgb(0x3c, 0x38, 0x36)));
        assert_eq!(Color::from_hex("ff0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("#fff"), Some(Color::WHITE));
        assert_eq!(
            Color::from_hex("#ebdbb260"),
            Some(Color::rgba(0xeb, 0xdb, 0xb2, 0x60))
        );
    }

    #[test]
    fn test_invalid_hex_is_black() {
        assert_eq!(Color::hex_or_black("#zzzzzz"), Color::BLACK);
        assert_eq!(Color::hex_or_black(""), Color::BLACK);
        assert_eq!(Color::hex_or_black("#12345"), Color::BLACK);
        assert_eq!(Color::hex_or_black("#ééé"), Color::BLACK);
        assert_eq!(Color::hex_or_black("#+fffff"), Color::BLACK);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(1, 2, 255).to_hex(), "#0102ff");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_hex(), "#01020304");
    }

    #[test]
    fn test_font() {
        let font = Font::default();
        assert!(font.is_system());
        let big = font.with_size(20.0);
        assert_eq!(big.size, 20.0);
        assert!(!Font::named("Menlo", 12.0).is_system());
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(5, 10, Style::new(Color::BLACK, Font::default()));
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_paint_and_runs() {
        let base = Style::new(Color::BLACK, Font::default());
        let red = Style::new(Color::rgb(255, 0, 0), Font::default());
        let mut text = StyledText::new("hello world", base.clone());
        text.paint(0..5, &red);
        text.paint(20..30, &red);

        let runs = text.runs();
        assert_eq!(runs.len(), 2);
        assert_eq!((runs[0].start, runs[0].end), (0, 5));
        assert_eq!(runs[0].style, red);
        assert_eq!((runs[1].start, runs[1].end), (5, 11));
        assert_eq!(runs[1].style, base);
    }

    #[test]
    fn test_paint_widens_to_char_boundaries() {
        let base = Style::new(Color::BLACK, Font::default());
        let red = Style::new(Color::rgb(255, 0, 0), Font::default());
        let mut text = StyledText::new("aé", base.clone());
        // 2 falls inside 'é'
        text.paint(0..2, &red);
        assert_eq!(text.color_at(2), Some(red.fg));
        assert_eq!(text.runs(), vec![Span::new(0, 3, red.clone())]);

        let mut text = StyledText::new("éa", base.clone());
        text.paint(1..3, &red);
        assert_eq!(text.runs(), vec![Span::new(0, 3, red)]);
        assert_eq!(text.char_range(1..1), 0..0);
    }

    #[test]
    fn test_styles_are_shared() {
        let base = Style::new(Color::BLACK, Font::default());
        let red = Style::new(Color::rgb(255, 0, 0), Font::default());
        let mut text = StyledText::new("abcdef", base.clone());
        text.paint(0..2, &red);
        text.paint(4..6, &red);
        text.paint(0..6, &base);
        assert_eq!(text.palette.len(), 2);
        assert_eq!(text.runs(), vec![Span::new(0, 6, base.clone())]);

        // Same styles reached in a different order still compare equal
        let mut other = StyledText::new("abcdef", red.clone());
        other.paint(0..6, &base);
        assert_eq!(text, other);
    }

    #[test]
    fn test_empty_text_has_no_runs() {
        let text = StyledText::new("", Style::new(Color::BLACK, Font::default()));
        assert!(text.is_empty());
        assert!(text.runs().is_empty());
    }
}
