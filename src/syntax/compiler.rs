//! Definition compiler
//!
//! Turns a language's raw rule records into the ordered rule list the
//! overlay engine paints with. The list is ascending by priority so that
//! later, higher-priority rules overwrite earlier ones.

use tracing::{debug, warn};

use super::rules::{Definition, MatchOption};
use super::tables::{LanguageTable, RawLanguage, RawRule};

/// Compile the rules of `language` (looked up case-insensitively)
///
/// An unknown language yields an empty list. With `inject_placeholder` the
/// placeholder rule is appended last, whatever its priority.
pub fn compile(language: &str, table: &LanguageTable, inject_placeholder: bool) -> Vec<Definition> {
    let mut definitions = match table.get(language) {
        Some(raw) => compile_language(raw),
        None => {
            debug!(language, "unknown language, no rules");
            Vec::new()
        }
    };

    if inject_placeholder {
        definitions.push(Definition::placeholder());
    }

    debug!(language, rules = definitions.len(), "compiled definitions");
    definitions
}

/// Extract and order the rules of one language
pub fn compile_language(raw: &RawLanguage) -> Vec<Definition> {
    let mut definitions: Vec<Definition> = raw
        .iter()
        .map(|(token_type, rule)| definition_from_raw(token_type, rule))
        .collect();

    // Stable sort, highest first, then flip so the highest paints last
    definitions.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    definitions.reverse();
    definitions
}

fn definition_from_raw(token_type: &str, rule: &RawRule) -> Definition {
    let options = rule
        .match_options
        .iter()
        .filter_map(|name| {
            let option = MatchOption::from_name(name);
            if option.is_none() {
                warn!(token_type, option = %name, "ignoring unknown match option");
            }
            option
        })
        .collect();

    Definition {
        token_type: token_type.to_string(),
        pattern: rule.pattern.clone(),
        group: rule.capture_group,
        relevance: rule.priority,
        options,
        multi_line: rule.spans_multiple_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::PLACEHOLDER_TYPE;
    use proptest::prelude::*;

    fn table() -> LanguageTable {
        let mut rules = RawLanguage::new();
        rules.insert("keyword".into(), RawRule::new(r"\bif\b").priority(5));
        rules.insert("comment".into(), RawRule::new("//.*").priority(1));
        rules.insert("string".into(), RawRule::new("\"[^\"]*\"").priority(20).multiline());
        rules.insert("number".into(), RawRule::new(r"\d+"));
        rules.insert(
            "call".into(),
            RawRule::new(r"(\w+)\(").group(1).option("caseInsensitive").option("bogus"),
        );
        let mut table = LanguageTable::new();
        table.insert("demo", rules);
        table
    }

    fn priorities(definitions: &[Definition]) -> Vec<i32> {
        definitions.iter().map(|d| d.relevance).collect()
    }

    #[test]
    fn test_sorted_ascending() {
        let definitions = compile("demo", &table(), false);
        assert_eq!(priorities(&definitions), vec![0, 0, 1, 5, 20]);
        assert!(definitions.windows(2).all(|w| w[0].relevance <= w[1].relevance));
    }

    #[test]
    fn test_equal_priorities_reverse_table_order() {
        let definitions = compile("demo", &table(), false);
        // "call" precedes "number" in the table, so it paints after it
        assert_eq!(definitions[0].token_type, "number");
        assert_eq!(definitions[1].token_type, "call");
    }

    #[test]
    fn test_placeholder_is_last() {
        let definitions = compile("demo", &table(), true);
        assert_eq!(definitions.len(), 6);
        let last = definitions.last().unwrap();
        assert_eq!(last.token_type, PLACEHOLDER_TYPE);
        // Declared priority 10 is below "string", yet it still goes last
        assert_eq!(last.relevance, 10);
        assert_eq!(definitions[4].relevance, 20);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(compile("DeMo", &table(), false).len(), 5);
    }

    #[test]
    fn test_unknown_language() {
        assert!(compile("not-a-real-language", &table(), false).is_empty());
        let with_placeholder = compile("not-a-real-language", &table(), true);
        assert_eq!(with_placeholder.len(), 1);
        assert_eq!(with_placeholder[0].token_type, PLACEHOLDER_TYPE);
    }

    #[test]
    fn test_fields_carried_over() {
        let definitions = compile("demo", &table(), false);
        let call = definitions.iter().find(|d| d.token_type == "call").unwrap();
        assert_eq!(call.group, 1);
        assert_eq!(call.options, vec![MatchOption::CaseInsensitive]);
        let string = definitions.iter().find(|d| d.token_type == "string").unwrap();
        assert!(string.multi_line);
        assert!(!call.multi_line);
    }

    proptest! {
        #[test]
        fn prop_ascending_with_placeholder_last(
            ranks in prop::collection::vec(-50i32..50, 0..16)
        ) {
            let mut rules = RawLanguage::new();
            for (i, priority) in ranks.iter().enumerate() {
                rules.insert(format!("t{i:02}"), RawRule::new("x").priority(*priority));
            }
            let mut table = LanguageTable::new();
            table.insert("generated", rules);

            let definitions = compile("generated", &table, true);
            prop_assert_eq!(definitions.len(), ranks.len() + 1);
            let (last, rules) = definitions.split_last().unwrap();
            prop_assert_eq!(last.token_type.as_str(), PLACEHOLDER_TYPE);
            prop_assert!(rules.windows(2).all(|w| w[0].relevance <= w[1].relevance));

            let mut sorted = ranks.clone();
            sorted.sort();
            prop_assert_eq!(priorities(rules), sorted);
        }
    }
}
