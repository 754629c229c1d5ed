/*!
 * Common test utilities for the textlens test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

use textlens::analysis::{AnalysisPipeline, PipelineConfig};
use textlens::providers::mock::{MockScorer, MockTranslator};
use textlens::providers::{LexiconScorer, Scorer, Translator};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &[u8]) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Pipeline with a short translation timeout and the default config
pub fn pipeline_with(translator: impl Translator + 'static, scorer: impl Scorer + 'static) -> AnalysisPipeline {
    let config = PipelineConfig::default().with_translation_timeout(Duration::from_millis(500));
    AnalysisPipeline::new(Arc::new(translator), Arc::new(scorer), config)
}

/// Pipeline translating with a fixed answer and scoring with the lexicon scorer
pub fn lexicon_pipeline(translation: &str) -> AnalysisPipeline {
    pipeline_with(MockTranslator::fixed(translation), LexiconScorer::new())
}

/// Pipeline whose translator always fails
pub fn failing_translation_pipeline() -> AnalysisPipeline {
    pipeline_with(MockTranslator::failing(), MockScorer::new())
}

/// Route library logs to the test output, once per process
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
