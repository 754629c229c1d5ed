/*!
 * Adapters wrapping the external capabilities with the pipeline's failure policy.
 */

use log::debug;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::AnalysisError;
use crate::language_utils;
use crate::providers::{Scorer, SentimentScore, Translator};

/// Outcome of a pipeline step that can degrade instead of failing
#[derive(Debug, Clone)]
pub enum StepOutcome<T> {
    /// The step produced its value
    Completed(T),
    /// The step failed and `value` is the fallback
    Degraded { value: T, failure: AnalysisError },
}

impl<T> StepOutcome<T> {
    pub fn value(&self) -> &T {
        match self {
            Self::Completed(value) | Self::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Completed(value) | Self::Degraded { value, .. } => value,
        }
    }

    pub fn failure(&self) -> Option<&AnalysisError> {
        match self {
            Self::Completed(_) => None,
            Self::Degraded { failure, .. } => Some(failure),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

/// Translates in a fixed direction, falling back to the source text on failure
#[derive(Debug, Clone)]
pub struct TranslatorAdapter {
    translator: Arc<dyn Translator>,
    source_language: String,
    target_language: String,
    timeout: Duration,
}

impl TranslatorAdapter {
    pub fn new(
        translator: Arc<dyn Translator>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            translator,
            source_language: source_language.into(),
            target_language: target_language.into(),
            timeout,
        }
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// Translate `text`.
    ///
    /// Blank text and identical language pairs skip the capability. Errors and
    /// timeouts degrade to the untranslated text.
    pub async fn translate(&self, text: &str) -> StepOutcome<String> {
        if text.trim().is_empty()
            || language_utils::language_codes_match(&self.source_language, &self.target_language)
        {
            return StepOutcome::Completed(text.to_string());
        }

        debug!(
            "Translating {} chars {} -> {} with {}",
            text.chars().count(),
            self.source_language,
            self.target_language,
            self.translator.name()
        );

        let call = self
            .translator
            .translate(text, &self.source_language, &self.target_language);

        let failure = match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(translated)) => return StepOutcome::Completed(translated),
            Ok(Err(e)) => AnalysisError::TranslationFailure(e),
            Err(_) => AnalysisError::TranslationTimeout { timeout: self.timeout },
        };

        StepOutcome::Degraded {
            value: text.to_string(),
            failure,
        }
    }
}

/// Scores text through the injected capability
#[derive(Debug, Clone)]
pub struct ScorerAdapter {
    scorer: Arc<dyn Scorer>,
}

impl ScorerAdapter {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self { scorer }
    }

    /// Score `text`; a capability failure is tagged as a scoring failure
    pub fn score(&self, text: &str) -> Result<SentimentScore, AnalysisError> {
        self.scorer.score(text).map_err(AnalysisError::ScoringFailure)
    }
}
