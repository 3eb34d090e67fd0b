use crate::document::{Document, ReadingTimeResult};

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Reading speed used to turn a word count into minutes. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordsPerMinute(u32);

impl WordsPerMinute {
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for WordsPerMinute {
    fn default() -> Self {
        Self(DEFAULT_WORDS_PER_MINUTE)
    }
}

/// Tokens separated by runs of Unicode whitespace. Punctuation and markup
/// remnants are counted as words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn estimate(text: Option<&str>, words_per_minute: WordsPerMinute) -> ReadingTimeResult {
    let words = text.map(count_words).unwrap_or(0);
    let minutes = words.div_ceil(words_per_minute.get() as usize);
    let minutes = u32::try_from(minutes).unwrap_or(u32::MAX).max(1);

    ReadingTimeResult { minutes, words }
}

pub fn annotate(document: &mut Document, words_per_minute: WordsPerMinute) -> ReadingTimeResult {
    let result = estimate(document.text(), words_per_minute);
    result.merge_into(&mut document.metadata);
    result
}
