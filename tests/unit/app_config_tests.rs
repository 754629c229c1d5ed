/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use textlens::app_config::{Config, LogLevel, Thresholds, TranslationProvider};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.source_language, "es");
    assert_eq!(config.target_language, "en");
    assert_eq!(config.translation.provider, TranslationProvider::Ollama);
    assert_eq!(config.translation.endpoint, "http://localhost:11434");
    assert_eq!(config.translation.model, "llama3.2:3b");
    assert_eq!(config.translation.timeout_secs, 30);
    assert_eq!(config.translation.retry_count, 2);
    assert_eq!(config.translation.retry_backoff_ms, 500);

    assert_eq!(config.thresholds.positive, 0.05);
    assert_eq!(config.thresholds.negative, -0.05);
    assert_eq!(config.thresholds.subjectivity, 0.5);

    assert_eq!(config.report.max_phrases, 20);
    assert_eq!(config.report.top_words, 15);
    assert!(!config.strict_scoring);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Invalid source language
    config.source_language = "xyz".to_string();
    assert!(config.validate().is_err());
    config.source_language = "spa".to_string();
    assert!(config.validate().is_ok());

    // Invalid target language
    config.target_language = "".to_string();
    assert!(config.validate().is_err());
    config.target_language = "en".to_string();

    // Ollama needs a model
    config.translation.model = "  ".to_string();
    assert!(config.validate().is_err());

    // Disabled translation does not
    config.translation.provider = TranslationProvider::Disabled;
    assert!(config.validate().is_ok());

    config.translation.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_withBadThresholds_shouldFail() {
    let mut config = Config::default();
    config.thresholds.subjectivity = 1.5;
    assert!(config.validate().is_err());

    config.thresholds = Thresholds {
        positive: 0.1,
        negative: 0.3,
        subjectivity: 0.5,
    };
    assert!(config.validate().is_err());
}

/// Test that a partial config file is completed with defaults
#[test]
fn test_load_withPartialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        br#"{ "target_language": "fr", "translation": { "provider": "none" }, "log_level": "debug" }"#,
    )?;

    let (config, created) = Config::load_or_create(&path)?;

    assert!(!created);
    assert_eq!(config.source_language, "es");
    assert_eq!(config.target_language, "fr");
    assert_eq!(config.translation.provider, TranslationProvider::Disabled);
    assert_eq!(config.translation.model, "llama3.2:3b");
    assert_eq!(config.thresholds, Thresholds::default());
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

/// Test that a missing config file is created with defaults
#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let (config, created) = Config::load_or_create(&path)?;
    assert!(created);
    assert!(path.exists());

    let (reloaded, created_again) = Config::load_or_create(&path)?;
    assert!(!created_again);
    assert_eq!(reloaded.source_language, config.source_language);
    assert_eq!(reloaded.translation.endpoint, config.translation.endpoint);
    assert_eq!(reloaded.thresholds, config.thresholds);
    Ok(())
}

#[test]
fn test_load_withMalformedJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", b"{ not json")?;

    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}

#[test]
fn test_provider_serialization_shouldUseLowercaseNames() -> Result<()> {
    assert_eq!(serde_json::to_string(&TranslationProvider::Ollama)?, "\"ollama\"");
    assert_eq!(serde_json::to_string(&TranslationProvider::Disabled)?, "\"none\"");

    let provider: TranslationProvider = serde_json::from_str("\"disabled\"")?;
    assert_eq!(provider, TranslationProvider::Disabled);
    assert_eq!(TranslationProvider::Disabled.display_name(), "None");
    Ok(())
}
