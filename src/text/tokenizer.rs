/*!
 * Word extraction with stop-word filtering.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::stop_words::StopWordSet;

/// Maximal runs of Unicode word characters (letters, digits, underscore)
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Tokens of this many characters or fewer are discarded
pub const MIN_TOKEN_CHARS: usize = 2;

/// Splits text into lowercase word tokens and drops short and stop words
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    stop_words: &'a StopWordSet,
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::new(StopWordSet::bilingual())
    }
}

impl<'a> Tokenizer<'a> {
    pub fn new(stop_words: &'a StopWordSet) -> Self {
        Self { stop_words }
    }

    /// Extract filtered tokens in their original order of occurrence
    pub fn extract_words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        WORD_REGEX
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|word| word.chars().count() > MIN_TOKEN_CHARS)
            .filter(|word| !self.stop_words.contains(word))
            .map(str::to_string)
            .collect()
    }
}

/// Extract words using the shared bilingual stop-word set
pub fn extract_words(text: &str) -> Vec<String> {
    Tokenizer::default().extract_words(text)
}
