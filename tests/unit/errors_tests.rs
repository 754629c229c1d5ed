/*!
 * Tests for error types and conversions
 */

use std::time::Duration;
use textlens::errors::{AnalysisError, AppError, ProviderError};

#[test]
fn test_providerError_requestFailed_shouldDisplayCorrectly() {
    let error = ProviderError::RequestFailed("Connection timeout".to_string());
    let display = format!("{}", error);
    assert!(display.contains("API request failed"));
    assert!(display.contains("Connection timeout"));
}

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 503,
        message: "model loading".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("503"));
    assert!(display.contains("model loading"));
}

#[test]
fn test_analysisError_translationFailure_shouldIncludeProviderMessage() {
    let error = AnalysisError::TranslationFailure(ProviderError::ConnectionError("refused".to_string()));
    let display = format!("{}", error);
    assert!(display.contains("Translation failed"));
    assert!(display.contains("Connection error: refused"));
}

#[test]
fn test_analysisError_timeout_shouldDisplayDuration() {
    let error = AnalysisError::TranslationTimeout {
        timeout: Duration::from_secs(30),
    };
    assert_eq!(error.to_string(), "Translation timed out after 30s");
}

#[test]
fn test_analysisError_isRecoverable_shouldOnlyRejectDecodeFailures() {
    assert!(AnalysisError::TranslationTimeout {
        timeout: Duration::from_millis(500),
    }.is_recoverable());
    assert!(AnalysisError::ScoringFailure(ProviderError::ScoringFailed("x".to_string())).is_recoverable());
    assert!(!AnalysisError::InputDecodeFailure { valid_up_to: 0 }.is_recoverable());
}

#[test]
fn test_appError_fromAnalysisError_shouldWrap() {
    let app_error: AppError = AnalysisError::InputDecodeFailure { valid_up_to: 4 }.into();
    assert!(matches!(app_error, AppError::Analysis(_)));
    assert!(app_error.to_string().contains("offset 4"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(_)));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(ref message) if message == "something odd"));
}

#[test]
fn test_appError_config_shouldDisplayMessage() {
    let app_error = AppError::Config("Invalid language code: zz".to_string());
    assert_eq!(app_error.to_string(), "Configuration error: Invalid language code: zz");
}

async fn analyze_for_cli(bytes: &[u8]) -> Result<usize, AppError> {
    let pipeline = crate::common::failing_translation_pipeline();
    let result = pipeline.analyze_bytes(bytes).await?;
    Ok(result.phrases.len())
}

/// Pipeline failures propagate into the front end error with `?`
#[tokio::test]
async fn test_appError_fromPipelineFailure_shouldKeepAnalysisCause() {
    let error = analyze_for_cli(b"\xFF").await.unwrap_err();
    assert!(matches!(error, AppError::Analysis(AnalysisError::InputDecodeFailure { valid_up_to: 0 })));

    assert_eq!(analyze_for_cli(b"Hola. Adios.").await.unwrap(), 2);
}
