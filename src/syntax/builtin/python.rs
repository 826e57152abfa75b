//! Python language rules

use crate::syntax::tables::{RawLanguage, RawRule};

/// Create the Python rule table
pub fn python_language() -> RawLanguage {
    let mut lang = RawLanguage::new();

    lang.insert(
        "keyword".into(),
        RawRule::new(r"\b(False|None|True|and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b")
            .priority(1),
    );
    lang.insert(
        "builtin".into(),
        RawRule::new(r"\b(abs|all|any|bool|dict|enumerate|filter|float|int|isinstance|len|list|map|max|min|open|print|range|repr|set|sorted|str|sum|super|tuple|type|zip|self|cls)\b")
            .priority(2),
    );
    lang.insert(
        "number".into(),
        RawRule::new(r"\b(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?j?)\b")
            .priority(2),
    );
    lang.insert("function".into(), RawRule::new(r"\b(?:def|class)\s+(\w+)").group(1).priority(3));
    lang.insert("attribute".into(), RawRule::new(r"@[\w.]+").priority(4));
    lang.insert(
        "string".into(),
        RawRule::new(r#"[fFrRbBuU]{0,2}(?:"""[\s\S]*?"""|'''[\s\S]*?'''|"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*')"#)
            .priority(7)
            .multiline(),
    );
    lang.insert("comment".into(), RawRule::new(r"#[^\n]*").priority(9));

    lang
}
