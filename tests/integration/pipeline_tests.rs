/*!
 * End-to-end tests of the analysis pipeline with stubbed capabilities
 */

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use textlens::analysis::{AnalysisPipeline, Diagnostic, PipelineConfig, SentimentLabel, SubjectivityLevel};
use textlens::app_config::{Config, ReportConfig, Thresholds, TranslationProvider};
use textlens::errors::AnalysisError;
use textlens::providers::mock::{MockScorer, MockTranslator};
use textlens::providers::LexiconScorer;
use textlens::report::render_text_report;
use textlens::text::split_sentences;

use crate::common;

/// A failing translator must not abort the analysis
#[tokio::test]
async fn test_analyze_withFailingTranslator_shouldAnalyzeOriginalText() -> Result<()> {
    common::init_test_logging();
    let result = common::failing_translation_pipeline().analyze("Hola mundo").await?;

    assert_eq!(result.translated_text, "Hola mundo");
    assert_eq!(result.original_text, "Hola mundo");
    assert!(result.translation_fell_back());
    assert!(matches!(
        &result.diagnostics[0],
        Diagnostic::TranslationFallback { reason } if reason.contains("Simulated provider failure")
    ));
    assert_eq!(result.frequencies.count_of("hola"), 1);
    assert_eq!(result.frequencies.count_of("mundo"), 1);
    Ok(())
}

#[tokio::test]
async fn test_analyze_withPositiveStub_shouldClassifyPositive() -> Result<()> {
    let scorer = MockScorer::new()
        .with_score("I love this.", 0.9, 0.7)
        .with_score("I love this", 0.9, 0.7);
    let result = common::pipeline_with(MockTranslator::fixed("I love this."), scorer)
        .analyze("Me encanta esto.")
        .await?;

    assert_eq!(result.polarity, 0.9);
    assert_eq!(result.sentiment, SentimentLabel::Positive);
    assert_eq!(result.subjectivity_level, SubjectivityLevel::High);
    assert_eq!(result.phrases.len(), 1);
    assert_eq!(result.phrases[0].phrase.original, "Me encanta esto");
    assert_eq!(result.phrases[0].phrase.translated, "I love this");
    assert_eq!(result.frequencies.count_of("love"), 1);
    assert!(!result.translation_fell_back());
    Ok(())
}

/// Translation that changes the sentence count pairs only the common prefix
#[tokio::test]
async fn test_analyze_withSentenceCountChange_shouldTruncateToShorterSplit() -> Result<()> {
    let original = "Llegamos tarde. La cena fue excelente, el postre no tanto.";
    let translated = "We arrived late. Dinner was excellent. The dessert, not so much.";
    let result = common::lexicon_pipeline(translated).analyze(original).await?;

    let expected = split_sentences(original).len().min(split_sentences(translated).len());
    assert_eq!(result.phrases.len(), expected);
    assert_eq!(result.phrases.len(), 2);
    assert_eq!(result.phrases[1].phrase.translated, "Dinner was excellent");
    assert!(result.diagnostics.contains(&Diagnostic::PhraseCountMismatch {
        original: 2,
        translated: 3,
    }));
    Ok(())
}

#[tokio::test]
async fn test_analyze_withLexiconScorer_shouldBucketEachPhrase() -> Result<()> {
    let translated = "I love this place. The service was terrible. We paid at the door.";
    let result = common::lexicon_pipeline(translated)
        .analyze("Me encanta este sitio. El servicio fue terrible. Pagamos en la puerta.")
        .await?;

    let labels: Vec<SentimentLabel> = result.phrases.iter().map(|p| p.sentiment).collect();
    assert_eq!(
        labels,
        vec![SentimentLabel::Positive, SentimentLabel::Negative, SentimentLabel::Neutral]
    );
    assert_eq!(result.sentiment_breakdown(), (1, 1, 1));
    assert!(result.phrases.iter().all(|p| p.is_scored()));
    assert!(result.diagnostics.is_empty());
    Ok(())
}

/// Frequencies come from the translated text, not the original
#[tokio::test]
async fn test_analyze_shouldCountTranslatedWords() -> Result<()> {
    let result = common::lexicon_pipeline("Good coffee. Good bread. Cold coffee.")
        .analyze("Buen café. Buen pan. Café frío.")
        .await?;

    let top: Vec<(&str, usize)> = result
        .frequencies
        .top(3)
        .iter()
        .map(|entry| (entry.word.as_str(), entry.count))
        .collect();
    assert_eq!(top, vec![("good", 2), ("coffee", 2), ("bread", 1)]);
    assert_eq!(result.frequencies.count_of("café"), 0);
    Ok(())
}

#[tokio::test]
async fn test_analyze_withSlowTranslator_shouldTimeOutAndFallBack() -> Result<()> {
    let result = common::pipeline_with(MockTranslator::slow(5_000), LexiconScorer::new())
        .analyze("Todo bien.")
        .await?;

    assert_eq!(result.translated_text, "Todo bien.");
    assert!(matches!(
        &result.diagnostics[0],
        Diagnostic::TranslationFallback { reason } if reason.contains("timed out after 500ms")
    ));
    Ok(())
}

#[tokio::test]
async fn test_analyze_withSameLanguages_shouldSkipTranslation() -> Result<()> {
    let translator = MockTranslator::working();
    let pipeline = AnalysisPipeline::new(
        Arc::new(translator.clone()),
        Arc::new(LexiconScorer::new()),
        PipelineConfig::new("en", "eng"),
    );

    let result = pipeline.analyze("What a wonderful day.").await?;

    assert_eq!(translator.request_count(), 0);
    assert_eq!(result.translated_text, "What a wonderful day.");
    assert_eq!(result.sentiment, SentimentLabel::Positive);
    Ok(())
}

#[tokio::test]
async fn test_analyze_withEmptyText_shouldReturnNeutralEmptyResult() -> Result<()> {
    let translator = MockTranslator::working();
    let pipeline = common::pipeline_with(translator.clone(), LexiconScorer::new());

    let result = pipeline.analyze("   ").await?;

    assert_eq!(translator.request_count(), 0);
    assert_eq!(result.sentiment, SentimentLabel::Neutral);
    assert_eq!(result.subjectivity_level, SubjectivityLevel::Low);
    assert!(result.phrases.is_empty());
    assert!(result.frequencies.is_empty());
    assert!(result.diagnostics.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_analyze_withFailingPhraseScore_shouldContinueWithOtherPhrases() -> Result<()> {
    let scorer = MockScorer::new().with_fallback(-0.4, 0.5).failing_on("Second");
    let result = common::pipeline_with(MockTranslator::fixed("First. Second. Third."), scorer)
        .analyze("Uno. Dos. Tres.")
        .await?;

    assert_eq!(result.phrases.len(), 3);
    assert_eq!(result.unscored_phrase_count(), 1);
    assert_eq!(result.phrases[1].polarity(), None);
    assert_eq!(result.phrases[1].sentiment, SentimentLabel::Neutral);
    assert_eq!(result.phrases[2].sentiment, SentimentLabel::Negative);
    assert!(result.diagnostics.iter().any(|d| matches!(d, Diagnostic::PhraseUnscored { index: 1, .. })));
    Ok(())
}

#[tokio::test]
async fn test_analyze_withStrictScoringFailure_shouldReturnError() {
    let pipeline = AnalysisPipeline::new(
        Arc::new(MockTranslator::fixed("Anything.")),
        Arc::new(MockScorer::failing()),
        PipelineConfig::default()
            .with_translation_timeout(Duration::from_millis(500))
            .with_strict_scoring(true),
    );

    let result = pipeline.analyze("Cualquier cosa.").await;
    assert!(matches!(result, Err(AnalysisError::ScoringFailure(_))));
}

#[tokio::test]
async fn test_analyze_withConservativeThresholds_shouldWidenNeutralBand() -> Result<()> {
    let scorer = MockScorer::new().with_fallback(0.1, 0.55);
    let default_result = common::pipeline_with(MockTranslator::fixed("Okay."), scorer.clone())
        .analyze("Vale.")
        .await?;

    let conservative = AnalysisPipeline::new(
        Arc::new(MockTranslator::fixed("Okay.")),
        Arc::new(scorer),
        PipelineConfig::default().with_thresholds(Thresholds::conservative()),
    );
    let conservative_result = conservative.analyze("Vale.").await?;

    assert_eq!(default_result.sentiment, SentimentLabel::Positive);
    assert_eq!(default_result.subjectivity_level, SubjectivityLevel::High);
    assert_eq!(conservative_result.sentiment, SentimentLabel::Neutral);
    assert_eq!(conservative_result.subjectivity_level, SubjectivityLevel::Low);
    Ok(())
}

#[tokio::test]
async fn test_analyzeBytes_withInvalidUtf8_shouldFailBeforeTranslation() {
    let translator = MockTranslator::working();
    let pipeline = common::pipeline_with(translator.clone(), LexiconScorer::new());

    let result = pipeline.analyze_bytes(b"Hola \xFF").await;

    assert!(matches!(result, Err(AnalysisError::InputDecodeFailure { valid_up_to: 5 })));
    assert_eq!(translator.request_count(), 0);
}

#[tokio::test]
async fn test_analyze_withIntermittentTranslator_shouldFallBackOnlyOnFailingCalls() -> Result<()> {
    let pipeline = common::pipeline_with(MockTranslator::intermittent(2), LexiconScorer::new());

    let first = pipeline.analyze("Primero.").await?;
    let second = pipeline.analyze("Segundo.").await?;

    assert!(!first.translation_fell_back());
    assert!(second.translation_fell_back());
    Ok(())
}

/// The JSON result carries every field a caller renders
#[tokio::test]
async fn test_result_serialization_shouldExposeAllFields() -> Result<()> {
    let result = common::failing_translation_pipeline().analyze("Hola. Adiós.").await?;
    let json = serde_json::to_value(&result)?;

    for key in [
        "polarity",
        "subjectivity",
        "sentiment",
        "subjectivity_level",
        "phrases",
        "frequencies",
        "original_text",
        "translated_text",
        "diagnostics",
    ] {
        assert!(json.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(json["sentiment"], "neutral");
    assert_eq!(json["phrases"][0]["original"], "Hola");
    assert_eq!(json["diagnostics"][0]["kind"], "translation_fallback");
    assert!(json["frequencies"].is_array());
    Ok(())
}

#[tokio::test]
async fn test_report_fromPipelineResult_shouldListNotes() -> Result<()> {
    let result = common::failing_translation_pipeline().analyze("Hola mundo.").await?;
    let report = render_text_report(&result, &ReportConfig::default());

    assert!(report.starts_with("Sentiment:"));
    assert!(report.contains("Phrases (1 total"));
    assert!(report.contains("Translation unavailable, analyzing original text"));
    Ok(())
}

/// A config file with translation disabled drives a fully offline pipeline
#[tokio::test]
async fn test_fromConfig_withDisabledTranslation_shouldScoreInputAsIs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        br#"{ "source_language": "en", "translation": { "provider": "none" } }"#,
    )?;
    let (config, _) = Config::load_or_create(&path)?;
    assert_eq!(config.translation.provider, TranslationProvider::Disabled);

    let pipeline = AnalysisPipeline::from_config(&config)?;
    let result = pipeline.analyze("The staff was very friendly. The room was dirty.").await?;

    assert_eq!(result.translated_text, result.original_text);
    assert_eq!(result.phrases[0].sentiment, SentimentLabel::Positive);
    assert_eq!(result.phrases[1].sentiment, SentimentLabel::Negative);
    assert!(result.diagnostics.is_empty());
    Ok(())
}

#[test]
fn test_fromConfig_withInvalidLanguage_shouldFail() {
    let mut config = Config::default();
    config.target_language = "zz".to_string();
    assert!(AnalysisPipeline::from_config(&config).is_err());
}

/// The pipeline can be driven from synchronous code
#[test]
fn test_analyze_fromBlockingContext_shouldComplete() {
    let pipeline = common::lexicon_pipeline("Great value. Slow delivery.");

    let result = tokio_test::block_on(pipeline.analyze("Gran precio. Envío lento."));
    let result = tokio_test::assert_ok!(result);

    assert_eq!(result.phrases.len(), 2);
    assert_eq!(result.phrases[0].sentiment, SentimentLabel::Positive);
    assert_eq!(result.phrases[1].sentiment, SentimentLabel::Negative);
}
