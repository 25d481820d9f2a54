//! Signature Extractor
//!
//! Pattern-based extraction of class names and function-like signatures.
//!
//! A word token is a run of letters, numbers and `_`. Both patterns are
//! text heuristics with no notion of comments, string literals or nesting:
//!
//! - `class <word>` matches the keyword anywhere, including inside
//!   identifiers such as `subclass Foo` and inside comments.
//! - `<word> <word>(...)` matches any `word word(...)` on one line. It
//!   picks up `return compute(x)` and misses `x = compute()`, generic return
//!   types, annotations between the tokens and multi-line argument lists.

use regex::Regex;
use std::path::Path;

use crate::constants::patterns;
use crate::types::{FileMatchRecord, Result};

pub struct SignatureExtractor {
    class_pattern: Regex,
    function_pattern: Regex,
}

impl SignatureExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            class_pattern: Regex::new(patterns::CLASS)?,
            function_pattern: Regex::new(patterns::FUNCTION)?,
        })
    }

    /// Class names in order of appearance
    pub fn classes(&self, content: &str) -> Vec<String> {
        self.class_pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Function names (second token of each match) in order of appearance
    pub fn functions(&self, content: &str) -> Vec<String> {
        self.function_pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(2))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    pub fn extract(&self, path: &Path, content: &str) -> FileMatchRecord {
        FileMatchRecord::new(path, self.classes(content), self.functions(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn extractor() -> SignatureExtractor {
        SignatureExtractor::new().unwrap()
    }

    #[test]
    fn test_classes_in_order() {
        let content = "class Foo {}\nclass Bar extends Foo {}";
        assert_eq!(extractor().classes(content), vec!["Foo", "Bar"]);
    }

    #[test]
    fn test_classes_match_inside_comments_and_identifiers() {
        let content = "// this class Ghost is only mentioned\nabstract subclass Real {}";
        assert_eq!(extractor().classes(content), vec!["Ghost", "Real"]);
    }

    #[test]
    fn test_class_requires_single_space() {
        let content = "class\tTabbed {}\nclass  Spaced {}";
        assert!(extractor().classes(content).is_empty());
    }

    #[test]
    fn test_class_name_stops_at_combining_and_connector_marks() {
        let content = "class Cafe\u{301} {} class Foo\u{203f}Bar {} class Été {}";
        assert_eq!(extractor().classes(content), vec!["Cafe", "Foo", "Été"]);
    }

    #[test]
    fn test_function_name_with_combining_mark_not_matched() {
        assert!(extractor().functions("void a\u{301}b() {}").is_empty());
        assert_eq!(extractor().functions("void größe2() {}"), vec!["größe2"]);
    }

    #[test]
    fn test_function_two_tokens() {
        let functions = extractor().functions("void doThing() {}");
        assert_eq!(functions, vec!["doThing"]);
    }

    #[test]
    fn test_function_single_token_not_matched() {
        assert!(extractor().functions("int x = compute();").is_empty());
    }

    #[test]
    fn test_function_keeps_name_only() {
        let content = "String getName() => name;\nFuture<void> load() async {}\nint add(int a, int b) {}";
        // `Future<void> load()` has a generic return type and is missed
        assert_eq!(extractor().functions(content), vec!["getName", "add"]);
    }

    #[test]
    fn test_function_matches_control_flow_shapes() {
        let content = "  return compute(x);\n  await save(data);\n  if (ready) {}";
        assert_eq!(extractor().functions(content), vec!["compute", "save"]);
    }

    #[test]
    fn test_function_arguments_stay_on_one_line() {
        let content = "Widget build(\n  BuildContext context,\n) {}";
        assert!(extractor().functions(content).is_empty());
    }

    #[test]
    fn test_extract_record() {
        let record = extractor().extract(
            Path::new("a/x.dart"),
            r#"class X { String getName() => "x"; }"#,
        );
        assert_eq!(record.path(), Path::new("a/x.dart"));
        assert_eq!(record.classes, vec!["X"]);
        assert_eq!(record.functions, vec!["getName"]);
    }

    #[test]
    fn test_extract_nothing() {
        let record = extractor().extract(Path::new("empty.dart"), "// nothing here\n");
        assert!(record.is_empty());
    }

    proptest! {
        #[test]
        fn prop_every_declared_class_is_found(
            names in prop::collection::vec("[A-Z][A-Za-z0-9_]{0,12}", 0..8)
        ) {
            let content: String = names
                .iter()
                .map(|n| format!("class {} {{}}\n", n))
                .collect();
            prop_assert_eq!(extractor().classes(&content), names);
        }

        #[test]
        fn prop_every_void_function_is_found(
            names in prop::collection::vec("[a-z][A-Za-z0-9_]{0,12}", 0..8)
        ) {
            let content: String = names
                .iter()
                .map(|n| format!("void {}() {{}}\n", n))
                .collect();
            prop_assert_eq!(extractor().functions(&content), names);
        }
    }
}
