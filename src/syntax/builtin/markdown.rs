//! Markdown language rules

use crate::syntax::tables::{RawLanguage, RawRule};

/// Create the Markdown rule table
pub fn markdown_language() -> RawLanguage {
    let mut lang = RawLanguage::new();

    lang.insert("emphasis".into(), RawRule::new(r"\*[^*\n]+\*|_[^_\n]+_").priority(1));
    lang.insert("strong".into(), RawRule::new(r"\*\*[^*\n]+\*\*|__[^_\n]+__").priority(2));
    lang.insert("link".into(), RawRule::new(r"!?\[[^\]\n]*\]\([^)\n]+\)").priority(3));
    lang.insert(
        "list".into(),
        RawRule::new(r"^\s*(?:[-*+]|\d+\.)\s").option("anchorsMatchLines").priority(3),
    );
    lang.insert(
        "heading".into(),
        RawRule::new(r"^#{1,6}\s+.*$").option("anchorsMatchLines").priority(4),
    );
    lang.insert("code".into(), RawRule::new(r"`[^`\n]+`").priority(6));
    lang.insert(
        "codeBlock".into(),
        RawRule::new(r"^```[\s\S]*?^```")
            .option("anchorsMatchLines")
            .priority(8)
            .multiline(),
    );

    lang
}
