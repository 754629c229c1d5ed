/*!
 * Non-fatal events recorded while an analysis runs.
 *
 * Every recoverable failure becomes a `Diagnostic` on the result and is
 * logged at warn level, so callers can surface it without the pipeline
 * aborting.
 */

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// A recoverable event observed during an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Translation failed or timed out; the source text was used instead
    TranslationFallback { reason: String },

    /// Whole-text scoring failed; a neutral score was substituted
    ScoringFallback { reason: String },

    /// One phrase could not be scored and is reported without a score
    PhraseUnscored { index: usize, reason: String },

    /// Original and translated texts split into a different number of phrases
    PhraseCountMismatch { original: usize, translated: usize },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Self::PhraseCountMismatch { .. } => Severity::Info,
            _ => Severity::Warning,
        }
    }

    pub fn is_translation_fallback(&self) -> bool {
        matches!(self, Self::TranslationFallback { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TranslationFallback { reason } => {
                write!(f, "Translation unavailable, analyzing original text ({})", reason)
            }
            Self::ScoringFallback { reason } => {
                write!(f, "Could not score the text, using a neutral score ({})", reason)
            }
            Self::PhraseUnscored { index, reason } => {
                write!(f, "Phrase {} could not be scored ({})", index + 1, reason)
            }
            Self::PhraseCountMismatch { original, translated } => write!(
                f,
                "Original has {} phrases and translation has {}; only the first {} are paired",
                original,
                translated,
                original.min(translated)
            ),
        }
    }
}

/// Collects diagnostics for one analysis call
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and log a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Warning => warn!("{}", diagnostic),
            Severity::Info => info!("{}", diagnostic),
        }
        self.entries.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
