use std::collections::BTreeMap;

pub const MINUTES_READ_KEY: &str = "minutesRead";
pub const WORDS_COUNT_KEY: &str = "wordsCount";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    Integer(u64),
    Text(String),
    Bool(bool),
}

pub type Metadata = BTreeMap<String, MetadataValue>;

/// Text content handed over by the markdown pipeline plus the metadata
/// side-channel that templates read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub raw_text: Option<String>,
    pub metadata: Metadata,
}

impl Document {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: Some(raw_text.into()),
            metadata: Metadata::new(),
        }
    }

    pub fn without_text() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReadingTimeResult {
    pub minutes: u32,
    pub words: usize,
}

impl ReadingTimeResult {
    pub fn label(&self) -> String {
        format!("{} min read", self.minutes)
    }

    pub fn merge_into(&self, metadata: &mut Metadata) {
        metadata.insert(
            MINUTES_READ_KEY.to_string(),
            MetadataValue::Integer(u64::from(self.minutes)),
        );
        metadata.insert(
            WORDS_COUNT_KEY.to_string(),
            MetadataValue::Integer(self.words as u64),
        );
    }
}
