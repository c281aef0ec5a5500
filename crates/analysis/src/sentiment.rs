//! Sentiment scoring.
//!
//! Valence-lexicon scorer in the VADER family: each lexicon word carries a
//! signed intensity, preceding negations flip it, preceding boosters
//! amplify or dampen it. The summed valence is squashed into a compound
//! polarity in [-1, 1]; negative/neutral/positive proportions are derived
//! from the same pass.

use pdfnlp_core::{SentimentScore, SentimentScorer};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Valence flip applied by a preceding negation.
const NEGATION_SCALAR: f64 = -0.74;

/// Normalization constant for the compound score.
const NORMALIZATION_ALPHA: f64 = 15.0;

/// How many preceding tokens are checked for negations and boosters.
const MODIFIER_WINDOW: usize = 3;

/// Signed word intensities, roughly on the VADER -4..4 scale.
const LEXICON: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("awful", -2.9),
    ("bad", -2.5),
    ("beautiful", 2.9),
    ("benefit", 1.7),
    ("best", 3.2),
    ("better", 1.9),
    ("boring", -1.3),
    ("broken", -1.8),
    ("catastrophe", -3.4),
    ("clear", 1.2),
    ("confusing", -1.4),
    ("crisis", -3.1),
    ("damage", -2.2),
    ("danger", -2.4),
    ("dangerous", -2.4),
    ("decline", -1.6),
    ("delight", 2.9),
    ("disaster", -3.1),
    ("dreadful", -2.8),
    ("easy", 1.9),
    ("effective", 2.1),
    ("efficient", 1.8),
    ("error", -1.7),
    ("excellent", 2.7),
    ("fail", -2.3),
    ("failure", -2.4),
    ("fantastic", 2.6),
    ("fine", 0.8),
    ("flaw", -1.8),
    ("fraud", -2.8),
    ("gain", 1.6),
    ("good", 1.9),
    ("great", 3.1),
    ("growth", 1.4),
    ("happy", 2.7),
    ("harm", -2.5),
    ("hate", -2.7),
    ("helpful", 1.8),
    ("horrible", -2.5),
    ("improve", 1.9),
    ("improvement", 1.6),
    ("innovative", 1.9),
    ("inferior", -1.9),
    ("loss", -1.3),
    ("love", 3.2),
    ("mediocre", -0.7),
    ("mistake", -1.7),
    ("negative", -1.5),
    ("nice", 1.8),
    ("outstanding", 3.1),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("poor", -2.1),
    ("positive", 2.3),
    ("problem", -1.6),
    ("profit", 1.8),
    ("progress", 1.6),
    ("reliable", 1.9),
    ("risk", -1.1),
    ("robust", 1.5),
    ("sad", -2.1),
    ("safe", 1.6),
    ("slow", -0.9),
    ("strong", 2.0),
    ("succeed", 2.2),
    ("success", 2.7),
    ("successful", 2.4),
    ("superior", 2.1),
    ("terrible", -3.1),
    ("threat", -2.3),
    ("ugly", -2.3),
    ("unreliable", -1.9),
    ("useful", 1.9),
    ("useless", -1.8),
    ("weak", -1.8),
    ("welcome", 1.9),
    ("wonderful", 2.7),
    ("worst", -3.1),
    ("wrong", -2.1),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nor", "cannot", "can't", "won't", "don't",
    "doesn't", "didn't", "isn't", "wasn't", "aren't", "weren't", "hardly", "without",
];

/// Intensity modifiers; positive entries amplify, negative dampen.
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("extremely", 0.293),
    ("highly", 0.293),
    ("incredibly", 0.293),
    ("really", 0.267),
    ("remarkably", 0.267),
    ("very", 0.293),
    ("marginally", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.267),
];

static LEXICON_MAP: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| LEXICON.iter().copied().collect());

static BOOSTER_MAP: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| BOOSTERS.iter().copied().collect());

/// Lexicon-based sentiment scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let tokens: Vec<String> = text
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .collect();

        if tokens.is_empty() {
            return SentimentScore {
                negative: 0.0,
                neutral: 0.0,
                positive: 0.0,
                compound: 0.0,
            };
        }

        let mut valences = vec![0.0_f64; tokens.len()];
        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = LEXICON_MAP.get(token.as_str()) else {
                continue;
            };
            valences[i] = modified_valence(base, &tokens, i);
        }

        let sum: f64 = valences.iter().sum();
        let compound = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();

        let mut positive_sum = 0.0;
        let mut negative_sum = 0.0;
        let mut neutral_count = 0.0;
        for &v in &valences {
            if v > 0.0 {
                positive_sum += v + 1.0;
            } else if v < 0.0 {
                negative_sum += v.abs() + 1.0;
            } else {
                neutral_count += 1.0;
            }
        }

        let total = positive_sum + negative_sum + neutral_count;
        SentimentScore {
            negative: negative_sum / total,
            neutral: neutral_count / total,
            positive: positive_sum / total,
            compound,
        }
    }
}

/// Apply boosters and negations found in the preceding window.
fn modified_valence(base: f64, tokens: &[String], index: usize) -> f64 {
    let mut valence = base;
    let window_start = index.saturating_sub(MODIFIER_WINDOW);

    for (distance, token) in tokens[window_start..index].iter().rev().enumerate() {
        if let Some(&boost) = BOOSTER_MAP.get(token.as_str()) {
            // Modifiers further away contribute less.
            let damping = 1.0 - 0.05 * distance as f64;
            valence += valence.signum() * boost * damping;
        }
    }

    let negated = tokens[window_start..index]
        .iter()
        .any(|t| NEGATIONS.contains(&t.as_str()));
    if negated {
        valence *= NEGATION_SCALAR;
    }

    valence
}
