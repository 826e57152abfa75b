//! C language rules

use crate::syntax::tables::{RawLanguage, RawRule};

/// Create the C rule table
pub fn c_language() -> RawLanguage {
    let mut lang = RawLanguage::new();

    lang.insert(
        "keyword".into(),
        RawRule::new(r"\b(auto|break|case|const|continue|default|do|else|enum|extern|for|goto|if|inline|register|restrict|return|sizeof|static|struct|switch|typedef|union|volatile|while)\b")
            .priority(1),
    );
    lang.insert(
        "type".into(),
        RawRule::new(r"\b(void|char|short|int|long|float|double|signed|unsigned|bool|_Bool|size_t|ssize_t|u?int(?:8|16|32|64)_t|FILE)\b")
            .priority(2),
    );
    lang.insert(
        "number".into(),
        RawRule::new(r"\b(?:0[xX][0-9a-fA-F]+|\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)[uUlLfF]*\b").priority(2),
    );
    lang.insert("function".into(), RawRule::new(r"\b([A-Za-z_]\w*)\s*\(").group(1).priority(3));
    lang.insert(
        "preprocessor".into(),
        RawRule::new(r"^\s*#\s*\w+").option("anchorsMatchLines").priority(4),
    );
    lang.insert("character".into(), RawRule::new(r"'(?:[^'\\\n]|\\.)'").priority(6));
    lang.insert("string".into(), RawRule::new(r#""(?:[^"\\\n]|\\.)*""#).priority(7));
    lang.insert(
        "comment".into(),
        RawRule::new(r"//[^\n]*|/\*[\s\S]*?\*/").priority(9).multiline(),
    );

    lang
}
