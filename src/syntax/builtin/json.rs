//! JSON language rules

use crate::syntax::tables::{RawLanguage, RawRule};

/// Create the JSON rule table
pub fn json_language() -> RawLanguage {
    let mut lang = RawLanguage::new();

    lang.insert("keyword".into(), RawRule::new(r"\b(true|false|null)\b").priority(1));
    lang.insert("number".into(), RawRule::new(r"-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b").priority(2));
    lang.insert("string".into(), RawRule::new(r#""(?:[^"\\\n]|\\.)*""#).priority(7));
    // Object keys are strings followed by a colon
    lang.insert("key".into(), RawRule::new(r#"("(?:[^"\\\n]|\\.)*")\s*:"#).group(1).priority(8));

    lang
}
