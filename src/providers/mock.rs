/*!
 * Mock capability implementations for testing.
 *
 * - `MockTranslator::working()` - Always succeeds with a tagged echo
 * - `MockTranslator::fixed(text)` - Always answers with the same text
 * - `MockTranslator::failing()` - Always fails with an error
 * - `MockTranslator::slow(ms)` - Answers after a delay (timeout testing)
 * - `MockScorer` - Answers from a fixed table, optionally failing on some inputs
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::{Scorer, SentimentScore, Translator};

/// Behavior mode for the mock translator
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with `[target] text`
    Working,
    /// Always answers with the given text
    Fixed(String),
    /// Fails intermittently (every Nth request, never when 0)
    Intermittent { fail_every: usize },
    /// Always fails with an error
    Failing,
    /// Returns the input after a delay
    Slow { delay_ms: u64 },
}

/// Mock translator with a shared request counter
#[derive(Debug, Clone)]
pub struct MockTranslator {
    behavior: MockBehavior,
    request_count: Arc<AtomicUsize>,
    custom_response: Option<fn(&str) -> String>,
}

impl MockTranslator {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    pub fn fixed(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fixed(text.into()))
    }

    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Map the input text through a custom function instead of `Working`'s echo
    pub fn with_custom_response(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of translate calls so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Working => Ok(match self.custom_response {
                Some(generator) => generator(text),
                None => format!("[{}] {}", target_language, text),
            }),
            MockBehavior::Fixed(answer) => Ok(answer.clone()),
            MockBehavior::Intermittent { fail_every } => {
                if *fail_every > 0 && count % fail_every == fail_every - 1 {
                    Err(ProviderError::ApiError {
                        status_code: 503,
                        message: format!("Simulated intermittent failure (request #{})", count + 1),
                    })
                } else {
                    Ok(text.to_string())
                }
            }
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(*delay_ms)).await;
                Ok(text.to_string())
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Mock scorer answering from an exact-text table
#[derive(Debug, Clone, Default)]
pub struct MockScorer {
    scores: HashMap<String, SentimentScore>,
    fallback: SentimentScore,
    failing_on: HashSet<String>,
    fail_all: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockScorer {
    /// Scorer returning a neutral score for every text
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer that fails on every call
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Answer `score` for exactly `text`
    pub fn with_score(mut self, text: impl Into<String>, polarity: f64, subjectivity: f64) -> Self {
        self.scores
            .insert(text.into(), SentimentScore::new(polarity, subjectivity));
        self
    }

    /// Answer `score` for every text without an exact entry
    pub fn with_fallback(mut self, polarity: f64, subjectivity: f64) -> Self {
        self.fallback = SentimentScore::new(polarity, subjectivity);
        self
    }

    /// Fail when asked to score exactly `text`
    pub fn failing_on(mut self, text: impl Into<String>) -> Self {
        self.failing_on.insert(text.into());
        self
    }

    /// Texts scored so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl Scorer for MockScorer {
    fn score(&self, text: &str) -> Result<SentimentScore, ProviderError> {
        self.calls.lock().push(text.to_string());

        if self.fail_all || self.failing_on.contains(text) {
            return Err(ProviderError::ScoringFailed(format!("Simulated scoring failure for '{}'", text)));
        }
        Ok(self.scores.get(text).copied().unwrap_or(self.fallback))
    }
}
