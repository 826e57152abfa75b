//! Pattern overlay engine
//!
//! Paints text by running every rule over it in list order. Each match's
//! capture range is overwritten with the rule's color, so the last rule to
//! cover a character decides its color. There is no other conflict
//! resolution.

use std::ops::Range;

use super::rules::Definition;
use super::style::StyledText;
use super::theme::Theme;

/// Paint `text` with `definitions` on top of the theme's default style
pub fn paint(text: &str, definitions: &[Definition], theme: &Theme) -> StyledText {
    let mut styled = StyledText::new(text, theme.default_style());
    apply(&mut styled, 0..text.len(), definitions, theme);
    styled
}

/// Reset `range` to the default style and paint it again
///
/// Patterns only see the text inside the range, so matches never leak
/// outside it. The range is clamped and widened to character boundaries.
pub fn repaint(styled: &mut StyledText, range: Range<usize>, definitions: &[Definition], theme: &Theme) {
    let range = styled.char_range(range);
    styled.paint(range.clone(), &theme.default_style());
    apply(styled, range, definitions, theme);
}

fn apply(styled: &mut StyledText, range: Range<usize>, definitions: &[Definition], theme: &Theme) {
    let text = styled.text()[range.clone()].to_string();
    for definition in definitions {
        let Some(regex) = definition.matcher() else {
            continue;
        };
        let style = theme.style_for(&definition.token_type);
        for captures in regex.captures_iter(&text) {
            if let Some(group) = captures.get(definition.group) {
                styled.paint(range.start + group.start()..range.start + group.end(), &style);
            }
        }
    }
}
