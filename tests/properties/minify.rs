//! Property tests for the minifiers

use proptest::prelude::*;
use themekit::domain::services::{minify_css, minify_js};

proptest! {
    #[test]
    fn js_minify_never_grows(input in "\\PC{0,200}") {
        let out = minify_js(&input);
        prop_assert!(out.chars().count() <= input.chars().count());
    }

    #[test]
    fn css_minify_never_grows(input in "\\PC{0,200}") {
        let out = minify_css(&input);
        prop_assert!(out.chars().count() <= input.chars().count());
    }

    #[test]
    fn js_words_keep_one_separator(
        words in proptest::collection::vec("[a-z]{1,8}", 1..8),
        gaps in proptest::collection::vec("[ \t]{1,4}", 8),
    ) {
        let mut input = String::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                input.push_str(&gaps[i]);
            }
            input.push_str(word);
        }
        prop_assert_eq!(minify_js(&input), words.join(" "));
    }

    #[test]
    fn js_string_literals_survive(body in "[a-z /*]{0,20}") {
        let input = format!("x = \"{body}\" ;");
        let out = minify_js(&input);
        let literal = format!("\"{body}\"");
        prop_assert!(out.contains(&literal));
    }
}
