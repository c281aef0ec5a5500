//! Keyword extraction.
//!
//! Co-occurrence scoring in the RAKE family: candidate phrases are maximal
//! runs of content words between stopwords and punctuation, scored by the
//! degree-to-frequency ratio of their words. Higher score = more relevant;
//! results are returned in descending order.

use pdfnlp_core::{Keyword, KeywordExtractor};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Phrase delimiters: any punctuation that is not word-internal.
static PUNCTUATION_SPLIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s'\-]+").unwrap());

/// Candidate phrases longer than this are discarded as run-ons.
const MAX_PHRASE_WORDS: usize = 4;

const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "an", "and", "any", "are", "as",
    "at", "be", "because", "been", "before", "being", "between", "both", "but", "by", "can",
    "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
    "i", "if", "in", "into", "is", "it", "its", "just", "may", "me", "might", "more", "most",
    "must", "my", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other", "our",
    "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your",
];

/// RAKE-style keyword extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CooccurrenceExtractor;

impl CooccurrenceExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl KeywordExtractor for CooccurrenceExtractor {
    fn keywords(&self, text: &str) -> Vec<Keyword> {
        let phrases = candidate_phrases(text);
        if phrases.is_empty() {
            return Vec::new();
        }

        // Word degree and frequency over all candidate phrases. Degree
        // counts the words each occurrence co-occurs with, itself included.
        let mut frequency: HashMap<&str, f64> = HashMap::new();
        let mut degree: HashMap<&str, f64> = HashMap::new();
        for phrase in &phrases {
            let len = phrase.len() as f64;
            for word in phrase {
                *frequency.entry(word.as_str()).or_default() += 1.0;
                *degree.entry(word.as_str()).or_default() += len;
            }
        }

        // Phrase score = sum of member word scores; duplicates collapse.
        let mut scored: HashMap<String, f64> = HashMap::new();
        for phrase in &phrases {
            let score: f64 = phrase
                .iter()
                .map(|w| degree[w.as_str()] / frequency[w.as_str()])
                .sum();
            scored.entry(phrase.join(" ")).or_insert(score);
        }

        let mut keywords: Vec<Keyword> = scored
            .into_iter()
            .map(|(phrase, score)| Keyword { phrase, score })
            .collect();
        keywords.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.phrase.cmp(&b.phrase))
        });
        keywords
    }
}

/// Split text into candidate phrases: runs of lowercased content words
/// bounded by punctuation, stopwords, and bare numbers.
fn candidate_phrases(text: &str) -> Vec<Vec<String>> {
    let mut phrases = Vec::new();

    for fragment in PUNCTUATION_SPLIT_REGEX.split(text) {
        let mut current: Vec<String> = Vec::new();
        for raw in fragment.split_whitespace() {
            let word = raw
                .trim_matches(['\'', '-'])
                .to_lowercase();

            let is_break = word.is_empty()
                || STOPWORDS.contains(&word.as_str())
                || word.chars().all(|c| c.is_ascii_digit());
            if is_break {
                flush_phrase(&mut phrases, &mut current);
            } else {
                current.push(word);
            }
        }
        flush_phrase(&mut phrases, &mut current);
    }

    phrases
}

fn flush_phrase(phrases: &mut Vec<Vec<String>>, current: &mut Vec<String>) {
    if !current.is_empty() && current.len() <= MAX_PHRASE_WORDS {
        phrases.push(std::mem::take(current));
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<Keyword> {
        CooccurrenceExtractor::new().keywords(text)
    }

    #[test]
    fn test_empty_text_yields_no_keywords() {
        assert!(extract("").is_empty());
        assert!(extract("the of and").is_empty());
    }

    #[test]
    fn test_phrases_are_bounded_by_stopwords() {
        let keywords = extract("linear regression is a simple model");
        let phrases: Vec<&str> = keywords.iter().map(|k| k.phrase.as_str()).collect();

        assert!(phrases.contains(&"linear regression"));
        assert!(phrases.contains(&"simple model"));
    }

    #[test]
    fn test_phrases_are_bounded_by_punctuation() {
        let keywords = extract("neural networks, deep learning");
        let phrases: Vec<&str> = keywords.iter().map(|k| k.phrase.as_str()).collect();

        assert_eq!(phrases.len(), 2);
        assert!(phrases.contains(&"neural networks"));
        assert!(phrases.contains(&"deep learning"));
    }

    #[test]
    fn test_multiword_phrases_outrank_their_words() {
        let keywords = extract(
            "machine learning systems are useful. machine learning is popular. \
             data is everywhere.",
        );

        let score_of = |phrase: &str| {
            keywords
                .iter()
                .find(|k| k.phrase == phrase)
                .map(|k| k.score)
                .unwrap()
        };
        assert!(score_of("machine learning systems") > score_of("data"));
    }

    #[test]
    fn test_descending_score_order() {
        let keywords = extract(
            "keyword extraction works well. extraction helps. ranking helps too.",
        );

        for pair in keywords.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_duplicate_phrases_reported_once() {
        let keywords = extract("error handling is common. error handling is needed.");
        let count = keywords
            .iter()
            .filter(|k| k.phrase == "error handling")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_bare_numbers_break_phrases() {
        let keywords = extract("chapter 7 covers recursion");
        let phrases: Vec<&str> = keywords.iter().map(|k| k.phrase.as_str()).collect();

        assert!(phrases.contains(&"chapter"));
        assert!(phrases.contains(&"covers recursion"));
        assert!(!phrases.iter().any(|p| p.contains('7')));
    }
}
