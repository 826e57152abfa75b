//! TOML language rules

use crate::syntax::tables::{RawLanguage, RawRule};

/// Create the TOML rule table
pub fn toml_language() -> RawLanguage {
    let mut lang = RawLanguage::new();

    // Bare key in front of `=`
    lang.insert(
        "key".into(),
        RawRule::new(r"^\s*([\w.\-]+)\s*=").group(1).option("anchorsMatchLines").priority(1),
    );
    lang.insert("boolean".into(), RawRule::new(r"\b(true|false)\b").priority(2));
    lang.insert(
        "number".into(),
        RawRule::new(r"\b[+-]?(?:0x[0-9a-fA-F_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?)\b").priority(2),
    );
    lang.insert(
        "section".into(),
        RawRule::new(r"^\s*\[\[?[^\]\n]+\]\]?").option("anchorsMatchLines").priority(3),
    );
    lang.insert(
        "string".into(),
        RawRule::new(r#""""[\s\S]*?"""|'''[\s\S]*?'''|"(?:[^"\\\n]|\\.)*"|'[^'\n]*'"#)
            .priority(7)
            .multiline(),
    );
    lang.insert("comment".into(), RawRule::new(r"#[^\n]*").priority(9));

    lang
}
