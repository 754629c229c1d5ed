/*!
 * Lexicon-based sentiment estimator for English text.
 *
 * Every sentiment-bearing word carries a polarity and a subjectivity value.
 * An intensifier right before a word scales both values, and a negator up to
 * three tokens earlier flips the polarity and halves it. The score of a text
 * is the mean over all matched words; text without matches scores (0, 0).
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::errors::ProviderError;
use crate::providers::{Scorer, SentimentScore};

const NEGATION_FACTOR: f64 = -0.5;
const NEGATION_WINDOW: usize = 3;

#[rustfmt::skip]
const WORDS: &[(&str, f64, f64)] = &[
    // positive
    ("good", 0.7, 0.6), ("great", 0.8, 0.75), ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9), ("wonderful", 1.0, 1.0), ("fantastic", 0.4, 0.9),
    ("awesome", 1.0, 1.0), ("perfect", 1.0, 1.0), ("best", 1.0, 0.3),
    ("better", 0.5, 0.5), ("love", 0.5, 0.6), ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75), ("like", 0.1, 0.2), ("liked", 0.6, 0.8),
    ("enjoy", 0.4, 0.5), ("enjoyed", 0.5, 0.6), ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0), ("nice", 0.6, 1.0), ("beautiful", 0.85, 1.0),
    ("pretty", 0.25, 1.0), ("brilliant", 0.9, 1.0), ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0), ("pleasant", 0.73, 0.97), ("delightful", 1.0, 1.0),
    ("superb", 1.0, 1.0), ("outstanding", 0.5, 0.67), ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9), ("friendly", 0.38, 0.5), ("kind", 0.6, 0.9),
    ("helpful", 0.5, 0.5), ("useful", 0.3, 0.0), ("easy", 0.43, 0.83),
    ("fast", 0.2, 0.6), ("clean", 0.37, 0.69), ("fresh", 0.3, 0.5),
    ("positive", 0.23, 0.55), ("success", 0.3, 0.0), ("successful", 0.75, 0.95),
    ("win", 0.8, 0.4), ("exciting", 0.3, 0.8), ("excited", 0.38, 0.75),
    ("interesting", 0.5, 0.5), ("calm", 0.3, 0.75), ("safe", 0.5, 0.5),
    ("thanks", 0.2, 0.2), ("thank", 0.2, 0.2), ("grateful", 0.6, 0.8),
    ("recommend", 0.4, 0.4), ("satisfied", 0.5, 1.0), ("comfortable", 0.4, 0.6),
    ("hope", 0.3, 0.5), ("cool", 0.35, 0.65), ("fine", 0.42, 0.5),
    ("correct", 0.0, 0.0), ("joy", 0.8, 0.8), ("peace", 0.5, 0.5),
    // negative
    ("bad", -0.7, 0.67), ("terrible", -1.0, 1.0), ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0), ("worst", -1.0, 1.0), ("worse", -0.4, 0.6),
    ("hate", -0.8, 0.9), ("hated", -0.9, 0.7), ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0), ("boring", -1.0, 1.0), ("poor", -0.4, 0.6),
    ("ugly", -0.7, 1.0), ("disappointing", -0.6, 0.7), ("disappointed", -0.75, 0.75),
    ("wrong", -0.5, 0.9), ("stupid", -0.8, 1.0), ("annoying", -0.8, 0.9),
    ("broken", -0.4, 0.4), ("slow", -0.3, 0.4), ("dirty", -0.6, 0.8),
    ("dangerous", -0.6, 0.9), ("difficult", -0.5, 1.0), ("hard", -0.29, 0.54),
    ("problem", -0.2, 0.3), ("fail", -0.5, 0.3), ("failed", -0.5, 0.3),
    ("failure", -0.32, 0.3), ("useless", -0.5, 0.2), ("pain", -0.4, 0.6),
    ("painful", -0.7, 0.9), ("sick", -0.71, 0.86), ("tired", -0.4, 0.7),
    ("afraid", -0.6, 0.9), ("scary", -0.5, 1.0), ("fear", -0.5, 0.6),
    ("worried", -0.3, 0.7), ("lonely", -0.4, 0.7), ("cry", -0.4, 0.5),
    ("expensive", -0.5, 0.7), ("cheap", 0.4, 0.7), ("crazy", -0.6, 0.9),
    ("mess", -0.4, 0.6), ("nasty", -1.0, 1.0), ("disgusting", -1.0, 1.0),
    ("mediocre", -0.3, 0.5), ("unhappy", -0.6, 0.9), ("negative", -0.3, 0.4),
    ("lose", -0.3, 0.3), ("lost", -0.2, 0.3), ("waste", -0.2, 0.4),
];

#[rustfmt::skip]
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3), ("really", 1.3), ("extremely", 1.5), ("so", 1.3),
    ("too", 1.3), ("quite", 1.1), ("incredibly", 1.4), ("absolutely", 1.4),
    ("highly", 1.2), ("totally", 1.3), ("super", 1.3), ("most", 1.2),
    ("slightly", 0.7), ("somewhat", 0.8), ("barely", 0.5), ("rather", 0.9),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "neither", "nor", "without", "cannot",
];

static LEXICON: Lazy<HashMap<&'static str, (f64, f64)>> =
    Lazy::new(|| WORDS.iter().map(|&(w, p, s)| (w, (p, s))).collect());

static INTENSITY: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| INTENSIFIERS.iter().copied().collect());

/// Letters, digits and inner apostrophes, so "don't" stays one token
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}]+)*").unwrap());

/// Built-in English sentiment estimator
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }

    fn is_negator(token: &str) -> bool {
        NEGATORS.contains(&token) || token.ends_with("n't") || token.ends_with("n’t")
    }

    /// Score every sentiment-bearing token of `text`
    pub fn assessments(&self, text: &str) -> Vec<SentimentScore> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = TOKEN_REGEX.find_iter(&lowered).map(|m| m.as_str()).collect();
        let mut result = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(&(mut polarity, mut subjectivity)) = LEXICON.get(*token) else {
                continue;
            };

            if i > 0 {
                if let Some(&factor) = INTENSITY.get(tokens[i - 1]) {
                    polarity *= factor;
                    subjectivity *= factor;
                }
            }

            let negated = (1..=NEGATION_WINDOW).any(|k| i >= k && Self::is_negator(tokens[i - k]));
            if negated {
                polarity *= NEGATION_FACTOR;
            }

            result.push(SentimentScore::new(
                polarity.clamp(-1.0, 1.0),
                subjectivity.clamp(0.0, 1.0),
            ));
        }

        result
    }
}

impl Scorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<SentimentScore, ProviderError> {
        let assessments = self.assessments(text);
        if assessments.is_empty() {
            return Ok(SentimentScore::neutral());
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n;
        Ok(SentimentScore::new(polarity, subjectivity))
    }
}
