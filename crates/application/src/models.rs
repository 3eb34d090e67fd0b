use std::collections::BTreeMap;

use reading_time_domain::document::{Metadata, MetadataValue, ReadingTimeResult};
use reading_time_domain::reading_time::{WordsPerMinute, DEFAULT_WORDS_PER_MINUTE};

use crate::error::ReadingTimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingTimeOutput {
    pub minutes_read: u32,
    pub words_count: usize,
    pub label: String,
}

impl From<ReadingTimeResult> for ReadingTimeOutput {
    fn from(value: ReadingTimeResult) -> Self {
        Self {
            minutes_read: value.minutes,
            words_count: value.words,
            label: value.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValueOutput {
    Integer(u64),
    Text(String),
    Bool(bool),
}

impl From<MetadataValue> for MetadataValueOutput {
    fn from(value: MetadataValue) -> Self {
        match value {
            MetadataValue::Integer(value) => Self::Integer(value),
            MetadataValue::Text(value) => Self::Text(value),
            MetadataValue::Bool(value) => Self::Bool(value),
        }
    }
}

pub fn metadata_output(metadata: Metadata) -> BTreeMap<String, MetadataValueOutput> {
    metadata
        .into_iter()
        .map(|(key, value)| (key, value.into()))
        .collect()
}

#[derive(Debug, Clone)]
pub struct AnnotatedDocumentOutput {
    pub path: String,
    pub metadata: BTreeMap<String, MetadataValueOutput>,
    pub reading_time: Option<ReadingTimeOutput>,
}

#[derive(Debug, Clone, Copy)]
pub struct EstimatorSettingsInput {
    pub words_per_minute: u32,
}

impl Default for EstimatorSettingsInput {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl TryFrom<EstimatorSettingsInput> for WordsPerMinute {
    type Error = ReadingTimeError;

    fn try_from(value: EstimatorSettingsInput) -> Result<Self, Self::Error> {
        WordsPerMinute::new(value.words_per_minute)
            .ok_or(ReadingTimeError::InvalidWordsPerMinute(value.words_per_minute))
    }
}
