//! Swift language rules

use crate::syntax::tables::{RawLanguage, RawRule};

/// Create the Swift rule table
pub fn swift_language() -> RawLanguage {
    let mut lang = RawLanguage::new();

    lang.insert(
        "keyword".into(),
        RawRule::new(r"\b(associatedtype|break|case|catch|class|continue|default|defer|deinit|do|else|enum|extension|fallthrough|false|fileprivate|for|func|guard|if|import|in|init|inout|internal|is|let|nil|open|operator|private|protocol|public|repeat|rethrows|return|self|Self|static|struct|subscript|super|switch|throw|throws|true|try|typealias|var|where|while)\b")
            .priority(1),
    );
    lang.insert("type".into(), RawRule::new(r"\b[A-Z][A-Za-z0-9_]*\b").priority(2));
    lang.insert(
        "number".into(),
        RawRule::new(r"\b(?:0x[0-9a-fA-F_]+|0b[01_]+|0o[0-7_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?)\b").priority(2),
    );
    lang.insert("function".into(), RawRule::new(r"\bfunc\s+(\w+)").group(1).priority(3));
    lang.insert("attribute".into(), RawRule::new(r"@\w+").priority(4));
    lang.insert(
        "string".into(),
        RawRule::new(r#""""[\s\S]*?"""|"(?:[^"\\\n]|\\.)*""#).priority(7).multiline(),
    );
    lang.insert(
        "comment".into(),
        RawRule::new(r"//[^\n]*|/\*[\s\S]*?\*/").priority(9).multiline(),
    );

    lang
}
