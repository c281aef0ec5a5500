//! Text normalization for extracted PDF pages.
//!
//! Joins per-page extraction results into one string, then collapses all
//! whitespace so downstream analyses see flat prose. Page boundaries are
//! destroyed by the collapse step; this is a lossy, one-way transform.

use crate::types::PageText;
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Regex matching any maximal run of whitespace characters.
static WHITESPACE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Separator inserted between pages by the join step.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Normalizer for raw per-page extraction results.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Create a new text normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Join per-page results in page order with a double-newline separator.
    ///
    /// Absent pages contribute the empty string, so the join is total over
    /// any sequence of inputs.
    pub fn join_pages(&self, pages: &[PageText]) -> String {
        pages
            .iter()
            .map(|p| p.text.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(PAGE_SEPARATOR)
    }

    /// Collapse every whitespace run to a single space and trim both ends.
    ///
    /// Text is NFC-normalized first so composed and decomposed forms of
    /// the same character compare equal downstream.
    pub fn collapse(&self, text: &str) -> String {
        let composed: String = text.nfc().collect();
        WHITESPACE_RUN_REGEX
            .replace_all(&composed, " ")
            .trim()
            .to_string()
    }

    /// Full pipeline: join pages, then collapse whitespace.
    ///
    /// The output has no internal multi-space runs and no leading or
    /// trailing whitespace. Applying [`collapse`](Self::collapse) to the
    /// result again yields the same string.
    pub fn normalize_pages(&self, pages: &[PageText]) -> String {
        self.collapse(&self.join_pages(pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_preserves_page_order_and_separator() {
        let normalizer = TextNormalizer::new();
        let pages = vec![PageText::new(1, "one"), PageText::new(2, "two")];

        assert_eq!(normalizer.join_pages(&pages), "one\n\ntwo");
    }

    #[test]
    fn test_join_substitutes_empty_for_absent() {
        let normalizer = TextNormalizer::new();
        let pages = vec![
            PageText::new(1, "first"),
            PageText::absent(2),
            PageText::new(3, "third"),
        ];

        assert_eq!(normalizer.join_pages(&pages), "first\n\n\n\nthird");
    }

    #[test]
    fn test_join_is_total_over_all_absent() {
        let normalizer = TextNormalizer::new();
        let pages = vec![PageText::absent(1), PageText::absent(2)];

        assert_eq!(normalizer.normalize_pages(&pages), "");
    }

    #[test]
    fn test_join_empty_sequence() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize_pages(&[]), "");
    }

    #[test]
    fn test_collapse_spaces_tabs_newlines() {
        let normalizer = TextNormalizer::new();

        assert_eq!(normalizer.collapse("Hello    world"), "Hello world");
        assert_eq!(normalizer.collapse("a\t\tb\nc"), "a b c");
        assert_eq!(normalizer.collapse("  padded  "), "padded");
    }

    #[test]
    fn test_collapse_non_breaking_space() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.collapse("a\u{00A0}\u{00A0}b"), "a b");
    }

    #[test]
    fn test_clean_two_page_document() {
        let normalizer = TextNormalizer::new();
        let pages = vec![
            PageText::new(1, "Hello   world.\n"),
            PageText::new(2, "Second  page."),
        ];

        assert_eq!(
            normalizer.join_pages(&pages),
            "Hello   world.\n\n\nSecond  page."
        );
        assert_eq!(
            normalizer.normalize_pages(&pages),
            "Hello world. Second page."
        );
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let normalizer = TextNormalizer::new();
        let pages = vec![
            PageText::new(1, "  Mixed \t whitespace \n everywhere  "),
            PageText::absent(2),
            PageText::new(3, "and\r\nmore"),
        ];

        let once = normalizer.normalize_pages(&pages);
        let twice = normalizer.collapse(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_whitespace_invariant() {
        let normalizer = TextNormalizer::new();
        let inputs = [
            "a  b",
            "\t\n\r ",
            "one\n\n\n\ntwo",
            " leading and trailing ",
            "",
        ];

        for input in inputs {
            let out = normalizer.collapse(input);
            assert!(!out.contains("  "), "double space in {:?}", out);
            assert_eq!(out, out.trim());
        }
    }

    #[test]
    fn test_nfc_composition() {
        let normalizer = TextNormalizer::new();
        // "e" + combining acute accent composes to "é".
        assert_eq!(normalizer.collapse("caf\u{0065}\u{0301}"), "caf\u{00E9}");
    }
}
