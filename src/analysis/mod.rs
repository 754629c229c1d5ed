/*!
 * Text analysis: translation, sentiment scoring, phrase alignment and
 * word frequencies, orchestrated by `AnalysisPipeline`.
 */

pub mod adapters;
pub mod diagnostics;
pub mod pipeline;
pub mod result;

pub use adapters::{ScorerAdapter, StepOutcome, TranslatorAdapter};
pub use diagnostics::{Diagnostic, Severity};
pub use pipeline::{AnalysisPipeline, PipelineConfig, PipelineStage};
pub use result::{AnalysisResult, Phrase, ScoredPhrase, SentimentLabel, SubjectivityLevel};
