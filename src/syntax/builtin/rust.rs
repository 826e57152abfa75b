//! Rust language rules

use crate::syntax::tables::{RawLanguage, RawRule};

/// Create the Rust rule table
pub fn rust_language() -> RawLanguage {
    let mut lang = RawLanguage::new();

    lang.insert(
        "keyword".into(),
        RawRule::new(r"\b(as|async|await|break|const|continue|crate|dyn|else|enum|extern|false|fn|for|if|impl|in|let|loop|match|mod|move|mut|pub|ref|return|self|Self|static|struct|super|trait|true|type|union|unsafe|use|where|while)\b")
            .priority(1),
    );

    // Built-in types and capitalized identifiers
    lang.insert(
        "type".into(),
        RawRule::new(r"\b(bool|char|str|u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize|f32|f64|[A-Z][A-Za-z0-9_]*)\b")
            .priority(2),
    );

    lang.insert(
        "number".into(),
        RawRule::new(r"\b(?:0x[0-9a-fA-F_]+|0b[01_]+|0o[0-7_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?)(?:[iu](?:8|16|32|64|128|size)|f32|f64)?\b")
            .priority(2),
    );

    // Name after `fn`
    lang.insert("function".into(), RawRule::new(r"\bfn\s+(\w+)").group(1).priority(3));
    lang.insert("macro".into(), RawRule::new(r"\b\w+!").priority(3));
    lang.insert("attribute".into(), RawRule::new(r"#!?\[[^\]\n]*\]").priority(4));
    lang.insert("lifetime".into(), RawRule::new(r"'[a-zA-Z_]\w*\b").priority(5));
    lang.insert("character".into(), RawRule::new(r"'(?:[^'\\\n]|\\.)'").priority(6));
    lang.insert(
        "string".into(),
        RawRule::new(r#""(?:[^"\\]|\\.)*""#).priority(7).multiline(),
    );
    lang.insert(
        "comment".into(),
        RawRule::new(r"//[^\n]*|/\*[\s\S]*?\*/").priority(9).multiline(),
    );

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::compiler::compile_language;

    #[test]
    fn test_rust_patterns_compile() {
        for definition in compile_language(&rust_language()) {
            assert!(definition.matcher().is_some(), "{}", definition.token_type);
        }
    }

    #[test]
    fn test_rust_comment_wins_over_keyword() {
        let definitions = compile_language(&rust_language());
        assert_eq!(definitions.last().unwrap().token_type, "comment");
    }

    #[test]
    fn test_function_name_group() {
        let lang = rust_language();
        let regex = crate::syntax::Definition::new("function", &lang["function"].pattern, 0)
            .matcher()
            .unwrap();
        let caps = regex.captures("pub fn main() {}").unwrap();
        assert_eq!(&caps[1], "main");
    }
}
