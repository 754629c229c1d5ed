/*!
 * Sentence-like phrase segmentation.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of terminators counts as a single boundary
static TERMINATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Split text on `.`, `!` and `?` runs, trimming units and dropping empty ones
pub fn split_sentences(text: &str) -> Vec<String> {
    TERMINATOR_REGEX
        .split(text)
        .map(str::trim)
        .filter(|unit| !unit.is_empty())
        .map(str::to_string)
        .collect()
}
