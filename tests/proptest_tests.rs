// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests use property-based testing to verify that parsing and type
//! inference handle arbitrary inputs correctly.

use kvcfg::domain::{infer_value, ConfigValue, ErrorKind};
use kvcfg::service::{parse_document, ConfigParser};
use proptest::prelude::*;

/// Randomly upper- or lower-cases each character of `word`.
fn mixed_case(word: &str, mask: &[bool]) -> String {
    word.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

/// Strategy for a well-formed document: unique keys, values without `=`,
/// interleaved with comments and blank lines.
fn valid_document() -> impl Strategy<Value = String> {
    prop::collection::btree_map("[a-z][a-z0-9_.]{0,8}", "[^=\\r\\n]{0,12}", 0..12).prop_map(
        |entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (key, value))| {
                    if i % 3 == 0 {
                        format!("# entry {}\n{} = {}\n\n", i, key, value)
                    } else {
                        format!("{}={}\r\n", key, value)
                    }
                })
                .collect()
        },
    )
}

// Parsing the same text twice yields the same store
proptest! {
    #[test]
    fn test_parsing_is_deterministic(doc in valid_document()) {
        let first = parse_document(&doc).unwrap();
        let second = parse_document(&doc).unwrap();
        prop_assert_eq!(first, second);
    }
}

// Keys that were never set are reported absent without panicking
proptest! {
    #[test]
    fn test_missing_keys_are_absent(doc in valid_document(), missing in "[A-Z]{1,8}") {
        let parser = ConfigParser::new(doc).unwrap();
        prop_assert!(parser.get(&missing).is_none());
    }
}

// Entries come back in document order
proptest! {
    #[test]
    fn test_entries_follow_document_order(doc in valid_document()) {
        let parser = ConfigParser::new(doc.clone()).unwrap();
        let expected: Vec<String> = doc
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .filter_map(|l| l.split('=').next())
            .map(|k| k.trim().to_string())
            .collect();
        let actual: Vec<String> = parser.entries().map(|(k, _)| k.to_string()).collect();
        prop_assert_eq!(actual, expected);
    }
}

// Boolean equivalents are recognized in any casing
proptest! {
    #[test]
    fn test_boolean_case_insensitive(
        index in 0usize..5,
        truthy in prop::bool::ANY,
        mask in prop::collection::vec(prop::bool::ANY, 1..8)
    ) {
        let table = if truthy {
            ["yes", "on", "true", "enabled", "enable"]
        } else {
            ["no", "off", "false", "disabled", "disable"]
        };
        let word = mixed_case(table[index], &mask);
        prop_assert_eq!(infer_value(&word), ConfigValue::Bool(truthy));
    }
}

// Whitespace-only values are empty strings, never zero
proptest! {
    #[test]
    fn test_blank_value_is_empty_string(blank in "[ \t]*") {
        prop_assert_eq!(infer_value(&blank), ConfigValue::from(""));

        let parser = ConfigParser::new(format!("key ={}", blank)).unwrap();
        prop_assert_eq!(parser.get("key"), Some(&ConfigValue::from("")));
    }
}

// Integers survive a trip through the document
proptest! {
    #[test]
    fn test_integer_values(n in prop::num::i64::ANY) {
        let parser = ConfigParser::new(format!("n = {}", n)).unwrap();
        prop_assert_eq!(parser.get("n").and_then(ConfigValue::as_i64), Some(n));
    }
}

// Finite floats are inferred as numbers
proptest! {
    #[test]
    fn test_float_values(f in prop::num::f64::NORMAL) {
        let value = infer_value(&f.to_string());
        let parsed = value.as_f64().unwrap();
        prop_assert!((parsed - f).abs() <= 1e-10 * f.abs().max(1.0));
    }
}

// Alphabetic text that is not a boolean word stays a string, trimmed
proptest! {
    #[test]
    fn test_text_preserved_as_string(
        leading in "[ \t]*",
        content in "[a-z][a-z ]{0,10}[a-z]",
        trailing in "[ \t]*"
    ) {
        prop_assume!(infer_value(&content).as_bool().is_none());
        let raw = format!("{}{}{}", leading, content, trailing);
        prop_assert_eq!(infer_value(&raw), ConfigValue::String(content));
    }
}

// A repeated key is always reported at its second line
proptest! {
    #[test]
    fn test_duplicate_reported_on_second_line(
        key in "[a-z]{1,6}",
        gap in 0usize..5
    ) {
        let doc = format!("{} = 1\n{}{} = 2\n", key, "\n".repeat(gap), key);
        let err = parse_document(&doc).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::DuplicateIndex);
        prop_assert_eq!(err.line(), Some(gap + 1));
    }
}

// Lines without '=' that are not comments are rejected
proptest! {
    #[test]
    fn test_lines_without_separator_rejected(word in "[a-zA-Z0-9 ]*[a-zA-Z0-9][a-zA-Z0-9 ]*") {
        let err = parse_document(&word).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Parse);
        prop_assert_eq!(err.line(), Some(0));
    }
}
