/*!
 * Output value of an analysis and the bucketing of raw scores.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::app_config::Thresholds;
use crate::providers::SentimentScore;
use crate::text::FrequencyTable;

use super::diagnostics::Diagnostic;

/// Sentiment bucket of a polarity value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        };
        f.write_str(label)
    }
}

/// Subjectivity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectivityLevel {
    High,
    Low,
}

impl fmt::Display for SubjectivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "high",
            Self::Low => "low",
        })
    }
}

impl Thresholds {
    pub fn classify_polarity(&self, polarity: f64) -> SentimentLabel {
        if polarity > self.positive {
            SentimentLabel::Positive
        } else if polarity < self.negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn classify_subjectivity(&self, subjectivity: f64) -> SubjectivityLevel {
        if subjectivity > self.subjectivity {
            SubjectivityLevel::High
        } else {
            SubjectivityLevel::Low
        }
    }
}

/// The i-th unit of the original text paired with the i-th unit of its translation.
///
/// Pairing is positional; translation may merge or split sentences, in which
/// case the pair is not guaranteed to correspond semantically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub original: String,
    pub translated: String,
}

/// A phrase with its score, if scoring succeeded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPhrase {
    #[serde(flatten)]
    pub phrase: Phrase,
    /// `None` when the scorer failed on this phrase
    pub score: Option<SentimentScore>,
    /// Bucket of `score`, neutral when unscored
    pub sentiment: SentimentLabel,
}

impl ScoredPhrase {
    pub fn polarity(&self) -> Option<f64> {
        self.score.map(|s| s.polarity)
    }

    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }
}

/// Complete outcome of one analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub polarity: f64,
    pub subjectivity: f64,
    pub sentiment: SentimentLabel,
    pub subjectivity_level: SubjectivityLevel,
    pub phrases: Vec<ScoredPhrase>,
    pub frequencies: FrequencyTable,
    pub original_text: String,
    pub translated_text: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisResult {
    /// Whether translation fell back to the original text
    pub fn translation_fell_back(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_translation_fallback)
    }

    /// Number of phrases that could not be scored
    pub fn unscored_phrase_count(&self) -> usize {
        self.phrases.iter().filter(|p| !p.is_scored()).count()
    }

    /// Phrase counts per sentiment bucket: (positive, neutral, negative)
    pub fn sentiment_breakdown(&self) -> (usize, usize, usize) {
        self.phrases.iter().fold((0, 0, 0), |(pos, neu, neg), p| match p.sentiment {
            SentimentLabel::Positive => (pos + 1, neu, neg),
            SentimentLabel::Neutral => (pos, neu + 1, neg),
            SentimentLabel::Negative => (pos, neu, neg + 1),
        })
    }
}
