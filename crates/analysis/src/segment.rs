//! Sentence segmentation.
//!
//! Rule-based splitting at sentence terminators, with guards for common
//! abbreviations, single-letter initials, and decimal numbers.

use pdfnlp_core::SentenceSegmenter;

/// Abbreviations whose trailing period does not end a sentence.
/// Compared lowercase, without the trailing period.
const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "prof", "rev", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "cf",
    "fig", "no", "vol", "dept", "approx", "inc", "ltd", "co", "corp",
];

/// Punctuation that may trail a terminator and still belong to the
/// sentence (closing quotes and brackets, extra terminators).
const TRAILERS: &[char] = &['.', '!', '?', '"', '\'', ')', ']'];

/// Rule-based sentence segmenter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSegmenter;

impl RuleSegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl SentenceSegmenter for RuleSegmenter {
    fn sentences(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            current.push(c);

            if matches!(c, '.' | '!' | '?') {
                // Absorb closing quotes/brackets and terminator runs.
                while i + 1 < chars.len() && TRAILERS.contains(&chars[i + 1]) {
                    i += 1;
                    current.push(chars[i]);
                }

                let next = chars.get(i + 1).copied();
                let next_word = first_after_whitespace(&chars, i + 1);
                if is_boundary(&current, next, next_word) {
                    flush(&mut sentences, &mut current);
                }
            }

            i += 1;
        }

        flush(&mut sentences, &mut current);
        sentences
    }
}

/// Whether the terminator just consumed ends a sentence.
fn is_boundary(current: &str, next: Option<char>, next_word: Option<char>) -> bool {
    match next {
        // End of input.
        None => true,
        // "3.14", "e.g": terminator glued to the next character.
        Some(c) if !c.is_whitespace() => false,
        Some(_) => {
            let token = last_token(current);

            // "Dr.", "etc." and friends.
            if ABBREVIATIONS.contains(&token.to_lowercase().as_str()) {
                return false;
            }
            // "J. Smith": single uppercase initial.
            if token.chars().count() == 1
                && token.chars().next().is_some_and(|c| c.is_uppercase())
            {
                return false;
            }
            // A lowercase continuation means the terminator was internal.
            match next_word {
                Some(c) if c.is_lowercase() => false,
                _ => true,
            }
        }
    }
}

/// Last whitespace-separated token of `s`, with trailing terminator
/// punctuation and leading brackets stripped.
fn last_token(s: &str) -> &str {
    s.trim_end_matches(TRAILERS)
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(['(', '[', '"', '\''])
}

/// First non-whitespace character at or after `start`.
fn first_after_whitespace(chars: &[char], start: usize) -> Option<char> {
    chars[start.min(chars.len())..]
        .iter()
        .copied()
        .find(|c| !c.is_whitespace())
}

fn flush(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        RuleSegmenter::new().sentences(text)
    }

    #[test]
    fn test_detects_terminator_boundaries() {
        let sentences = split("One. Two! Three?");
        assert_eq!(sentences, vec!["One.", "Two!", "Three?"]);
    }

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        assert!(split("").is_empty());
        assert!(split("   ").is_empty());
    }

    #[test]
    fn test_text_without_terminator_is_one_sentence() {
        assert_eq!(split("no terminator here"), vec!["no terminator here"]);
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let sentences = split("Dr. Smith arrived early. He sat down.");
        assert_eq!(
            sentences,
            vec!["Dr. Smith arrived early.", "He sat down."]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        let sentences = split("The report cites J. Smith at length.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_decimals_do_not_split() {
        let sentences = split("The rate was 3.14 percent. It rose later.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "The rate was 3.14 percent.");
    }

    #[test]
    fn test_lowercase_continuation_does_not_split() {
        let sentences = split("It worked... and then it stopped.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let sentences = split("She said \"stop.\" Then she left.");
        assert_eq!(sentences[0], "She said \"stop.\"");
        assert_eq!(sentences[1], "Then she left.");
    }

    #[test]
    fn test_trailing_fragment_is_kept() {
        let sentences = split("A full sentence. And a fragment");
        assert_eq!(sentences, vec!["A full sentence.", "And a fragment"]);
    }
}
