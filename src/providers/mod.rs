/*!
 * Capability boundaries for the analysis pipeline.
 *
 * Translation and sentiment scoring are external collaborators. The pipeline
 * only sees these traits, so any implementation can be injected:
 * - `ollama`: translation through a local Ollama server
 * - `lexicon`: built-in lexicon-based polarity/subjectivity estimator
 * - `mock`: deterministic stand-ins for tests and offline runs
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Translates text between two languages
///
/// Implementations may block on the network; the caller is responsible for
/// applying a timeout.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate `text` from `source_language` to `target_language`
    ///
    /// # Arguments
    /// * `text` - Text to translate
    /// * `source_language` - ISO code of the input language
    /// * `target_language` - ISO code of the output language
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError>;

    /// Short provider name used in logs
    fn name(&self) -> &str;
}

/// Sentiment estimate for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScore {
    /// -1.0 (very negative) to 1.0 (very positive)
    pub polarity: f64,
    /// 0.0 (objective) to 1.0 (subjective)
    pub subjectivity: f64,
}

impl SentimentScore {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }

    /// Polarity 0, subjectivity 0
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// Estimates polarity and subjectivity of a text
pub trait Scorer: Send + Sync + Debug {
    /// Score `text`; polarity must lie in [-1, 1] and subjectivity in [0, 1]
    fn score(&self, text: &str) -> Result<SentimentScore, ProviderError>;
}

/// Translator that returns its input unchanged
#[derive(Debug, Clone, Default)]
pub struct IdentityTranslator;

#[async_trait]
impl Translator for IdentityTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_language: &str,
        _target_language: &str,
    ) -> Result<String, ProviderError> {
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "identity"
    }
}

pub mod lexicon;
pub mod mock;
pub mod ollama;

pub use lexicon::LexiconScorer;
pub use ollama::OllamaTranslator;
