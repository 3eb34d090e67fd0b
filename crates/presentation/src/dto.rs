use std::collections::BTreeMap;

use reading_time_application::models::{
    AnnotatedDocumentOutput, EstimatorSettingsInput, MetadataValueOutput, ReadingTimeOutput,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingTimeDto {
    pub minutes_read: u32,
    pub words_count: usize,
    pub text: String,
}

impl From<ReadingTimeOutput> for ReadingTimeDto {
    fn from(value: ReadingTimeOutput) -> Self {
        Self {
            minutes_read: value.minutes_read,
            words_count: value.words_count,
            text: value.label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetadataValueDto {
    Integer(u64),
    Text(String),
    Bool(bool),
}

impl From<MetadataValueOutput> for MetadataValueDto {
    fn from(value: MetadataValueOutput) -> Self {
        match value {
            MetadataValueOutput::Integer(value) => Self::Integer(value),
            MetadataValueOutput::Text(value) => Self::Text(value),
            MetadataValueOutput::Bool(value) => Self::Bool(value),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedDocumentDto {
    pub path: String,
    pub metadata: BTreeMap<String, MetadataValueDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<ReadingTimeDto>,
}

impl From<AnnotatedDocumentOutput> for AnnotatedDocumentDto {
    fn from(value: AnnotatedDocumentOutput) -> Self {
        Self {
            path: value.path,
            metadata: value
                .metadata
                .into_iter()
                .map(|(key, value)| (key, value.into()))
                .collect(),
            reading_time: value.reading_time.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatorSettingsDto {
    #[serde(default)]
    pub words_per_minute: Option<u32>,
}

impl EstimatorSettingsDto {
    pub fn to_application(self) -> EstimatorSettingsInput {
        self.words_per_minute
            .map(|words_per_minute| EstimatorSettingsInput { words_per_minute })
            .unwrap_or_default()
    }
}

pub fn to_estimator_settings(value: Option<EstimatorSettingsDto>) -> EstimatorSettingsInput {
    value
        .map(EstimatorSettingsDto::to_application)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use reading_time_application::models::{
        AnnotatedDocumentOutput, MetadataValueOutput, ReadingTimeOutput,
    };

    use crate::dto::{
        to_estimator_settings, AnnotatedDocumentDto, EstimatorSettingsDto, ReadingTimeDto,
    };

    #[test]
    fn to_estimator_settings_defaults_when_input_is_none() {
        let settings = to_estimator_settings(None);
        assert_eq!(settings.words_per_minute, 200);
    }

    #[test]
    fn to_estimator_settings_defaults_when_speed_is_missing() {
        let dto: EstimatorSettingsDto =
            serde_json::from_str("{}").expect("empty settings should deserialize");
        assert_eq!(to_estimator_settings(Some(dto)).words_per_minute, 200);
    }

    #[test]
    fn estimator_settings_dto_reads_camel_case_field() {
        let dto: EstimatorSettingsDto = serde_json::from_str(r#"{"wordsPerMinute": 240}"#)
            .expect("settings should deserialize");
        assert_eq!(dto.to_application().words_per_minute, 240);
    }

    #[test]
    fn reading_time_serializes_with_metadata_key_names() {
        let dto = ReadingTimeDto::from(ReadingTimeOutput {
            minutes_read: 2,
            words_count: 400,
            label: "2 min read".to_string(),
        });

        let json = serde_json::to_value(dto).expect("dto should serialize");

        assert_eq!(json["minutesRead"], 2);
        assert_eq!(json["wordsCount"], 400);
        assert_eq!(json["text"], "2 min read");
    }

    #[test]
    fn annotated_document_serializes_metadata_values_untagged() {
        let mut metadata = BTreeMap::new();
        metadata.insert("minutesRead".to_string(), MetadataValueOutput::Integer(1));
        metadata.insert("draft".to_string(), MetadataValueOutput::Bool(true));
        metadata.insert(
            "title".to_string(),
            MetadataValueOutput::Text("Hello".to_string()),
        );
        let dto = AnnotatedDocumentDto::from(AnnotatedDocumentOutput {
            path: "/tmp/post.md".to_string(),
            metadata,
            reading_time: None,
        });

        let json = serde_json::to_value(dto).expect("dto should serialize");

        assert_eq!(json["path"], "/tmp/post.md");
        assert_eq!(json["metadata"]["minutesRead"], 1);
        assert_eq!(json["metadata"]["draft"], true);
        assert_eq!(json["metadata"]["title"], "Hello");
        assert!(json.get("readingTime").is_none());
    }
}
