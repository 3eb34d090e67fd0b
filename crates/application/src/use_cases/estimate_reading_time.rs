use log::debug;
use reading_time_domain::document::Document;
use reading_time_domain::reading_time::{annotate, estimate, WordsPerMinute};

use crate::error::ReadingTimeError;
use crate::models::{EstimatorSettingsInput, ReadingTimeOutput};

#[derive(Debug, Clone, Copy, Default)]
pub struct EstimateReadingTimeUseCase {
    words_per_minute: WordsPerMinute,
}

impl EstimateReadingTimeUseCase {
    pub fn new(words_per_minute: WordsPerMinute) -> Self {
        Self { words_per_minute }
    }

    pub fn from_settings(settings: EstimatorSettingsInput) -> Result<Self, ReadingTimeError> {
        Ok(Self::new(settings.try_into()?))
    }

    pub fn words_per_minute(&self) -> WordsPerMinute {
        self.words_per_minute
    }

    pub fn estimate_text(&self, text: Option<&str>) -> ReadingTimeOutput {
        let result = estimate(text, self.words_per_minute);
        debug!(
            "estimated {} words, {} min at {} wpm",
            result.words,
            result.minutes,
            self.words_per_minute.get()
        );
        result.into()
    }

    /// Writes `minutesRead` and `wordsCount` into the document metadata.
    /// Absent text is treated as empty rather than an error.
    pub fn annotate(&self, document: &mut Document) -> ReadingTimeOutput {
        if document.raw_text.is_none() {
            debug!("document has no text, recording minimum reading time");
        }
        let result = annotate(document, self.words_per_minute);
        debug!(
            "annotated document with {} words, {} min",
            result.words, result.minutes
        );
        result.into()
    }
}
