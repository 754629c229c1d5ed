/*!
 * # textlens - translate, score and count text
 *
 * A Rust library for quick sentiment analysis of free text.
 *
 * ## Features
 *
 * - Translate the input (Spanish to English by default) through a local
 *   Ollama server, falling back to the original text when translation fails
 * - Score polarity and subjectivity of the whole text and of every phrase
 * - Pair original and translated phrases by position
 * - Count word frequencies with a bilingual stop-word filter
 * - Configurable sentiment and subjectivity thresholds
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `text`: Tokenizer, stop words, frequency table and phrase splitter
 * - `providers`: Translation and scoring capabilities:
 *   - `providers::ollama`: Ollama translation client
 *   - `providers::lexicon`: Built-in lexicon sentiment scorer
 *   - `providers::mock`: Deterministic test doubles
 * - `analysis`: The analysis pipeline and its result types
 * - `report`: Terminal rendering of a result
 * - `file_utils`: Input acquisition and UTF-8 decoding
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod analysis;
pub mod app_config;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod providers;
pub mod report;
pub mod text;

// Re-export main types for easier usage
pub use analysis::{AnalysisPipeline, AnalysisResult, Diagnostic, PipelineConfig, SentimentLabel};
pub use app_config::{Config, Thresholds};
pub use errors::{AnalysisError, AppError, ProviderError};
pub use providers::{Scorer, SentimentScore, Translator};
pub use text::{FrequencyTable, count_frequencies, extract_words, split_sentences};
