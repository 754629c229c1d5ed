use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Language of the analyzed text (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Language the text is translated into before scoring (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Sentiment and subjectivity bucket cutoffs
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Report rendering limits
    #[serde(default)]
    pub report: ReportConfig,

    /// Treat a failure to score the whole text as fatal
    #[serde(default)]
    pub strict_scoring: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    /// Local Ollama server
    #[default]
    Ollama,
    /// No translation, text is scored as-is
    #[serde(rename = "none", alias = "disabled")]
    Disabled,
}

impl TranslationProvider {
    pub fn display_name(&self) -> &str {
        match self {
            Self::Ollama => "Ollama",
            Self::Disabled => "None",
        }
    }

    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Ollama => "ollama".to_string(),
            Self::Disabled => "none".to_string(),
        }
    }
}

impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for TranslationProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "none" | "disabled" => Ok(Self::Disabled),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Translation provider to use
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Service URL
    #[serde(default = "default_ollama_endpoint")]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_ollama_model")]
    pub model: String,

    /// Time allowed for one translation call, retries included
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry count for failed requests
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Backoff base for retries (in milliseconds), doubled on each retry
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Temperature parameter for text generation (0.0 to 1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            endpoint: default_ollama_endpoint(),
            model: default_ollama_model(),
            timeout_secs: default_timeout_secs(),
            retry_count: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
            temperature: default_temperature(),
        }
    }
}

/// Cutoffs used to bucket polarity and subjectivity
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Polarity strictly above this is positive
    #[serde(default = "default_positive_threshold")]
    pub positive: f64,

    /// Polarity strictly below this is negative
    #[serde(default = "default_negative_threshold")]
    pub negative: f64,

    /// Subjectivity strictly above this is high
    #[serde(default = "default_subjectivity_threshold")]
    pub subjectivity: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: default_positive_threshold(),
            negative: default_negative_threshold(),
            subjectivity: default_subjectivity_threshold(),
        }
    }
}

impl Thresholds {
    /// Wider neutral band: ±0.2 polarity, 0.6 subjectivity
    pub fn conservative() -> Self {
        Self {
            positive: 0.2,
            negative: -0.2,
            subjectivity: 0.6,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(-1.0..=1.0).contains(&self.positive) || !(-1.0..=1.0).contains(&self.negative) {
            return Err(anyhow!(
                "Polarity thresholds must lie in [-1, 1] (positive: {}, negative: {})",
                self.positive,
                self.negative
            ));
        }
        if self.negative > self.positive {
            return Err(anyhow!(
                "Negative threshold {} is above positive threshold {}",
                self.negative,
                self.positive
            ));
        }
        if !(0.0..=1.0).contains(&self.subjectivity) {
            return Err(anyhow!(
                "Subjectivity threshold must lie in [0, 1], got {}",
                self.subjectivity
            ));
        }
        Ok(())
    }
}

/// Limits applied when rendering a report
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Maximum number of phrase rows shown
    #[serde(default = "default_max_phrases")]
    pub max_phrases: usize,

    /// Number of most frequent words shown
    #[serde(default = "default_top_words")]
    pub top_words: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_phrases: default_max_phrases(),
            top_words: default_top_words(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> String {
    "es".to_string()
}

fn default_target_language() -> String {
    "en".to_string()
}

fn default_ollama_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_count() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    500
}

fn default_temperature() -> f32 {
    0.1
}

fn default_positive_threshold() -> f64 {
    0.05
}

fn default_negative_threshold() -> f64 {
    -0.05
}

fn default_subjectivity_threshold() -> f64 {
    0.5
}

fn default_max_phrases() -> usize {
    20
}

fn default_top_words() -> usize {
    15
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let _source_name = crate::language_utils::get_language_name(&self.source_language)?;
        let _target_name = crate::language_utils::get_language_name(&self.target_language)?;

        self.thresholds.validate()?;

        if self.translation.provider == TranslationProvider::Ollama {
            if self.translation.endpoint.trim().is_empty() {
                return Err(anyhow!("Translation endpoint is required for Ollama provider"));
            }
            if self.translation.model.trim().is_empty() {
                return Err(anyhow!("Translation model is required for Ollama provider"));
            }
        }

        if self.translation.timeout_secs == 0 {
            return Err(anyhow!("Translation timeout must be at least one second"));
        }

        Ok(())
    }

    /// Load a configuration file, creating it with defaults when missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<(Self, bool)> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to open config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok((config, false))
        } else {
            let config = Config::default();
            config.save(path)?;
            Ok((config, true))
        }
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write config to file: {:?}", path))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            translation: TranslationConfig::default(),
            thresholds: Thresholds::default(),
            report: ReportConfig::default(),
            strict_scoring: false,
            log_level: LogLevel::default(),
        }
    }
}
