//! Named-entity recognition.
//!
//! Pattern- and lexicon-based recognition over a fixed category set:
//! dates, percentages, and numbers via regex; organizations via corporate
//! suffixes; persons via honorifics; products via name-plus-model
//! patterns. Categories are claimed in priority order so a span is
//! reported once (a percentage is never also a number).

use pdfnlp_core::{Entity, EntityLabel, EntityRecognizer};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|\
                      November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec";

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:(?:{m})\.?\s+\d{{1,2}}(?:st|nd|rd|th)?(?:,\s*\d{{4}})?|\d{{1,2}}\s+(?:{m})\w*\s+\d{{4}}|(?:{m})\s+\d{{4}}|\d{{4}}-\d{{2}}-\d{{2}}|\d{{1,2}}/\d{{1,2}}/\d{{2,4}})\b",
        m = MONTHS
    ))
    .unwrap()
});

static PERCENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?(?:\s*%|\s+percent\b)").unwrap());

static ORG_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:[A-Z][A-Za-z&-]+\s+){1,4}(?:Inc|Corp|Corporation|Incorporated|Ltd|LLC|Co|Company|Group|Bank|University|Institute|Laboratories|Labs|Foundation|Association|Agency|Committee|Council|Department|Ministry)\b\.?",
    )
    .unwrap()
});

static ORG_OF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:University|Bank|Institute|Ministry|Department)\s+of\s+[A-Z][A-Za-z]+\b")
        .unwrap()
});

static PERSON_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:Mr|Mrs|Ms|Dr|Prof|Professor|President|Senator|Sir|Dame)\.?\s+(?P<name>[A-Z][a-z]+(?:\s+[A-Z][a-z]+){0,2})\b",
    )
    .unwrap()
});

static PRODUCT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)?\s+(?:\d{1,4}[A-Za-z]{0,2}|[IVX]{2,4})\b")
        .unwrap()
});

static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{1,3}(?:,\d{3})+(?:\.\d+)?\b|\b\d+(?:\.\d+)?\b").unwrap()
});

/// Pattern-based entity recognizer over the fixed label set.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalRecognizer;

impl LexicalRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl EntityRecognizer for LexicalRecognizer {
    fn entities(&self, text: &str) -> Vec<Entity> {
        let mut found: Vec<(usize, Entity)> = Vec::new();
        let mut claimed: Vec<(usize, usize)> = Vec::new();

        // Priority order: specific categories claim their spans before
        // generic ones run.
        claim_matches(&DATE_REGEX, text, EntityLabel::Date, &mut found, &mut claimed);
        claim_matches(&PERCENT_REGEX, text, EntityLabel::Percent, &mut found, &mut claimed);
        claim_matches(&ORG_SUFFIX_REGEX, text, EntityLabel::Organization, &mut found, &mut claimed);
        claim_matches(&ORG_OF_REGEX, text, EntityLabel::Organization, &mut found, &mut claimed);
        claim_persons(text, &mut found, &mut claimed);
        claim_matches(&PRODUCT_REGEX, text, EntityLabel::Product, &mut found, &mut claimed);
        claim_matches(&NUMBER_REGEX, text, EntityLabel::Number, &mut found, &mut claimed);

        // Report in document order, one entry per distinct (span, label).
        found.sort_by_key(|(start, _)| *start);
        let mut seen = HashSet::new();
        found
            .into_iter()
            .filter(|(_, e)| seen.insert((e.text.clone(), e.label)))
            .map(|(_, e)| e)
            .collect()
    }
}

fn claim_matches(
    regex: &Regex,
    text: &str,
    label: EntityLabel,
    found: &mut Vec<(usize, Entity)>,
    claimed: &mut Vec<(usize, usize)>,
) {
    for m in regex.find_iter(text) {
        if overlaps(claimed, m.start(), m.end()) {
            continue;
        }
        claimed.push((m.start(), m.end()));
        found.push((m.start(), Entity::new(m.as_str().trim(), label)));
    }
}

/// Persons span only the name; the honorific is claimed but not reported.
fn claim_persons(
    text: &str,
    found: &mut Vec<(usize, Entity)>,
    claimed: &mut Vec<(usize, usize)>,
) {
    for caps in PERSON_REGEX.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        if overlaps(claimed, whole.start(), whole.end()) {
            continue;
        }
        let name = &caps["name"];
        claimed.push((whole.start(), whole.end()));
        found.push((whole.start(), Entity::new(name, EntityLabel::Person)));
    }
}

fn overlaps(claimed: &[(usize, usize)], start: usize, end: usize) -> bool {
    claimed.iter().any(|&(s, e)| start < e && s < end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognize(text: &str) -> Vec<Entity> {
        LexicalRecognizer::new().entities(text)
    }

    fn labels_of(entities: &[Entity], label: EntityLabel) -> Vec<&str> {
        entities
            .iter()
            .filter(|e| e.label == label)
            .map(|e| e.text.as_str())
            .collect()
    }

    #[test]
    fn test_recognizes_month_name_dates() {
        let entities = recognize("The meeting on March 12, 2024 was short.");
        assert_eq!(labels_of(&entities, EntityLabel::Date), vec!["March 12, 2024"]);
    }

    #[test]
    fn test_recognizes_iso_and_slash_dates() {
        let entities = recognize("Filed 2023-07-01, reviewed 4/15/2024.");
        assert_eq!(
            labels_of(&entities, EntityLabel::Date),
            vec!["2023-07-01", "4/15/2024"]
        );
    }

    #[test]
    fn test_percent_is_not_also_a_number() {
        let entities = recognize("Revenue grew 45% over the quarter.");
        assert_eq!(labels_of(&entities, EntityLabel::Percent), vec!["45%"]);
        assert!(labels_of(&entities, EntityLabel::Number).is_empty());
    }

    #[test]
    fn test_percent_spelled_out() {
        let entities = recognize("about 12.5 percent of responses");
        assert_eq!(
            labels_of(&entities, EntityLabel::Percent),
            vec!["12.5 percent"]
        );
    }

    #[test]
    fn test_recognizes_organizations() {
        let entities = recognize("Acme Corp hired staff from the University of Oxford.");
        let orgs = labels_of(&entities, EntityLabel::Organization);
        assert!(orgs.contains(&"Acme Corp"));
        assert!(orgs.contains(&"University of Oxford"));
    }

    #[test]
    fn test_recognizes_person_without_honorific_in_span() {
        let entities = recognize("Dr. Jane Smith presented the findings.");
        assert_eq!(labels_of(&entities, EntityLabel::Person), vec!["Jane Smith"]);
    }

    #[test]
    fn test_recognizes_products() {
        let entities = recognize("They shipped it on Windows 11 machines.");
        assert_eq!(labels_of(&entities, EntityLabel::Product), vec!["Windows 11"]);
    }

    #[test]
    fn test_recognizes_plain_numbers() {
        let entities = recognize("The survey had 1,204 responses.");
        assert_eq!(labels_of(&entities, EntityLabel::Number), vec!["1,204"]);
    }

    #[test]
    fn test_duplicate_spans_reported_once() {
        let entities = recognize("Acme Corp grew. Acme Corp shrank.");
        assert_eq!(
            labels_of(&entities, EntityLabel::Organization),
            vec!["Acme Corp"]
        );
    }

    #[test]
    fn test_document_order() {
        let entities = recognize("On March 3, 2024 Acme Corp reported 99 units.");
        let labels: Vec<EntityLabel> = entities.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![EntityLabel::Date, EntityLabel::Organization, EntityLabel::Number]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(recognize("").is_empty());
    }
}
