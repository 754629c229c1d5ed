/*!
 * Word frequency aggregation.
 */

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of a frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Word counts ordered by descending count, ties kept in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
}

impl FrequencyTable {
    /// Count a token sequence.
    ///
    /// Counts accumulate in insertion order and are then stable-sorted by
    /// count, so equal counts keep the order in which words first appeared.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<WordCount> = Vec::new();

        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            match index.get(word) {
                Some(&position) => entries[position].count += 1,
                None => {
                    index.insert(word.to_string(), entries.len());
                    entries.push(WordCount {
                        word: word.to_string(),
                        count: 1,
                    });
                }
            }
        }

        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordCount> {
        self.entries.iter()
    }

    /// The `n` most frequent words
    pub fn top(&self, n: usize) -> &[WordCount] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Count for a word, zero when absent
    pub fn count_of(&self, word: &str) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map_or(0, |entry| entry.count)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Aggregate a token sequence into a frequency table
pub fn count_frequencies<S: AsRef<str>>(words: &[S]) -> FrequencyTable {
    FrequencyTable::from_words(words.iter().map(AsRef::as_ref))
}
