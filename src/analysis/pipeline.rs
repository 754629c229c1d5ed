/*!
 * Analysis pipeline orchestrator.
 *
 * One call to `analyze` walks a linear sequence of stages:
 * 1. **Translate** the whole text (falls back to the source text)
 * 2. **Score** the translated text (neutral fallback unless strict)
 * 3. **Split** original and translation into phrases and pair them by position
 * 4. **Score phrases** one by one (a failing phrase stays unscored)
 * 5. **Count** word frequencies over the translated text
 * 6. **Assemble** the immutable result
 */

use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::app_config::{Config, Thresholds, TranslationProvider};
use crate::errors::AnalysisError;
use crate::file_utils::decode_text;
use crate::providers::{IdentityTranslator, LexiconScorer, OllamaTranslator, Scorer, SentimentScore, Translator};
use crate::text::{FrequencyTable, StopWordSet, Tokenizer, split_sentences};

use super::adapters::{ScorerAdapter, StepOutcome, TranslatorAdapter};
use super::diagnostics::{Diagnostic, Diagnostics};
use super::result::{AnalysisResult, Phrase, ScoredPhrase, SentimentLabel};

/// Configuration for the analysis pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Language of the input text
    pub source_language: String,

    /// Language used for scoring and counting
    pub target_language: String,

    /// Time allowed for the translation call
    pub translation_timeout: Duration,

    /// Bucket cutoffs for polarity and subjectivity
    pub thresholds: Thresholds,

    /// Fail the call when the whole text cannot be scored
    pub strict_scoring: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_language: "es".to_string(),
            target_language: "en".to_string(),
            translation_timeout: Duration::from_secs(30),
            thresholds: Thresholds::default(),
            strict_scoring: false,
        }
    }
}

impl PipelineConfig {
    /// Create a new pipeline configuration.
    pub fn new(source_language: &str, target_language: &str) -> Self {
        Self {
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            ..Default::default()
        }
    }

    /// Set the translation timeout.
    pub fn with_translation_timeout(mut self, timeout: Duration) -> Self {
        self.translation_timeout = timeout;
        self
    }

    /// Set custom bucket thresholds.
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Enable or disable strict whole-text scoring.
    pub fn with_strict_scoring(mut self, strict: bool) -> Self {
        self.strict_scoring = strict;
        self
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            source_language: config.source_language.clone(),
            target_language: config.target_language.clone(),
            translation_timeout: Duration::from_secs(config.translation.timeout_secs),
            thresholds: config.thresholds,
            strict_scoring: config.strict_scoring,
        }
    }
}

/// Stages of one analysis call, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Init,
    Translated,
    Scored,
    Split,
    PhraseScored,
    Counted,
    Done,
}

/// Translate, score, segment and count one text.
#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    translator: TranslatorAdapter,
    scorer: ScorerAdapter,
    config: PipelineConfig,
}

impl AnalysisPipeline {
    /// Create a pipeline from explicit capabilities.
    pub fn new(translator: Arc<dyn Translator>, scorer: Arc<dyn Scorer>, config: PipelineConfig) -> Self {
        let translator = TranslatorAdapter::new(
            translator,
            config.source_language.clone(),
            config.target_language.clone(),
            config.translation_timeout,
        );
        Self {
            translator,
            scorer: ScorerAdapter::new(scorer),
            config,
        }
    }

    /// Create a pipeline with the capabilities selected by the application config.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let translator: Arc<dyn Translator> = match config.translation.provider {
            TranslationProvider::Ollama => Arc::new(OllamaTranslator::new_with_config(
                config.translation.endpoint.clone(),
                config.translation.model.clone(),
                config.translation.temperature,
                config.translation.retry_count,
                config.translation.retry_backoff_ms,
            )),
            TranslationProvider::Disabled => Arc::new(IdentityTranslator),
        };

        Ok(Self::new(translator, Arc::new(LexiconScorer::new()), PipelineConfig::from(config)))
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Decode a UTF-8 payload and analyze it.
    pub async fn analyze_bytes(&self, bytes: &[u8]) -> Result<AnalysisResult, AnalysisError> {
        let text = decode_text(bytes)?;
        self.analyze(&text).await
    }

    /// Run the full analysis on `raw_text`.
    ///
    /// Only a whole-text scoring failure in strict mode returns an error; every
    /// other failure degrades locally and is recorded as a diagnostic.
    pub async fn analyze(&self, raw_text: &str) -> Result<AnalysisResult, AnalysisError> {
        let start_time = Instant::now();
        let mut diagnostics = Diagnostics::new();
        let mut stage = PipelineStage::Init;

        let translated_text = match self.translator.translate(raw_text).await {
            StepOutcome::Completed(text) => text,
            StepOutcome::Degraded { value, failure } => {
                diagnostics.push(Diagnostic::TranslationFallback {
                    reason: failure.to_string(),
                });
                value
            }
        };
        stage = self.advance(stage, PipelineStage::Translated);

        let overall = match self.scorer.score(&translated_text) {
            Ok(score) => score,
            Err(e) if self.config.strict_scoring => return Err(e),
            Err(e) => {
                diagnostics.push(Diagnostic::ScoringFallback { reason: e.to_string() });
                SentimentScore::neutral()
            }
        };
        stage = self.advance(stage, PipelineStage::Scored);

        let phrases = self.align_phrases(raw_text, &translated_text, &mut diagnostics);
        stage = self.advance(stage, PipelineStage::Split);

        let phrases = self.score_phrases(phrases, &mut diagnostics);
        stage = self.advance(stage, PipelineStage::PhraseScored);

        let words = Tokenizer::new(StopWordSet::bilingual()).extract_words(&translated_text);
        let frequencies = FrequencyTable::from_words(&words);
        stage = self.advance(stage, PipelineStage::Counted);

        let thresholds = &self.config.thresholds;
        let result = AnalysisResult {
            polarity: overall.polarity,
            subjectivity: overall.subjectivity,
            sentiment: thresholds.classify_polarity(overall.polarity),
            subjectivity_level: thresholds.classify_subjectivity(overall.subjectivity),
            phrases,
            frequencies,
            original_text: raw_text.to_string(),
            translated_text,
            diagnostics: diagnostics.into_vec(),
        };
        self.advance(stage, PipelineStage::Done);

        info!(
            "Analysis done in {:?}: {} (polarity {:.3}, subjectivity {:.3}), {} phrases, {} distinct words",
            start_time.elapsed(),
            result.sentiment,
            result.polarity,
            result.subjectivity,
            result.phrases.len(),
            result.frequencies.len()
        );

        Ok(result)
    }

    fn advance(&self, from: PipelineStage, to: PipelineStage) -> PipelineStage {
        debug!("Pipeline stage {:?} -> {:?}", from, to);
        to
    }

    /// Pair the i-th original phrase with the i-th translated phrase.
    ///
    /// Units past the shorter split are dropped.
    fn align_phrases(&self, original: &str, translated: &str, diagnostics: &mut Diagnostics) -> Vec<Phrase> {
        let original_units = split_sentences(original);
        let translated_units = split_sentences(translated);

        if original_units.len() != translated_units.len() {
            diagnostics.push(Diagnostic::PhraseCountMismatch {
                original: original_units.len(),
                translated: translated_units.len(),
            });
        }

        original_units
            .into_iter()
            .zip(translated_units)
            .map(|(original, translated)| Phrase { original, translated })
            .collect()
    }

    fn score_phrases(&self, phrases: Vec<Phrase>, diagnostics: &mut Diagnostics) -> Vec<ScoredPhrase> {
        phrases
            .into_iter()
            .enumerate()
            .map(|(index, phrase)| match self.scorer.score(&phrase.translated) {
                Ok(score) => ScoredPhrase {
                    sentiment: self.config.thresholds.classify_polarity(score.polarity),
                    score: Some(score),
                    phrase,
                },
                Err(e) => {
                    diagnostics.push(Diagnostic::PhraseUnscored {
                        index,
                        reason: e.to_string(),
                    });
                    ScoredPhrase {
                        phrase,
                        score: None,
                        sentiment: SentimentLabel::Neutral,
                    }
                }
            })
            .collect()
    }
}
