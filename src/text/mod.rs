/*!
 * Text processing primitives used by the analysis pipeline:
 * - `stop_words`: the shared bilingual stop-word set
 * - `tokenizer`: word extraction and filtering
 * - `frequency`: descending frequency tables
 * - `phrases`: sentence-like segmentation
 */

pub mod frequency;
pub mod phrases;
pub mod stop_words;
pub mod tokenizer;

pub use frequency::{FrequencyTable, WordCount, count_frequencies};
pub use phrases::split_sentences;
pub use stop_words::StopWordSet;
pub use tokenizer::{MIN_TOKEN_CHARS, Tokenizer, extract_words};
