use reading_time_domain::document::Document;

use crate::error::ReadingTimeError;
use crate::models::{AnnotatedDocumentOutput, ReadingTimeOutput};
use crate::use_cases::{AnnotateDocumentsUseCase, EstimateReadingTimeUseCase};

pub trait EstimateReadingTimeInputPort: Send + Sync {
    fn estimate_text(&self, text: Option<&str>) -> ReadingTimeOutput;

    fn annotate(&self, document: &mut Document) -> ReadingTimeOutput;
}

impl EstimateReadingTimeInputPort for EstimateReadingTimeUseCase {
    fn estimate_text(&self, text: Option<&str>) -> ReadingTimeOutput {
        EstimateReadingTimeUseCase::estimate_text(self, text)
    }

    fn annotate(&self, document: &mut Document) -> ReadingTimeOutput {
        EstimateReadingTimeUseCase::annotate(self, document)
    }
}

pub trait AnnotateDocumentsInputPort: Send + Sync {
    fn discover(&self) -> Result<Vec<String>, ReadingTimeError>;

    fn execute(
        &self,
        path_inputs: &[String],
    ) -> Vec<Result<AnnotatedDocumentOutput, ReadingTimeError>>;
}

impl AnnotateDocumentsInputPort for AnnotateDocumentsUseCase {
    fn discover(&self) -> Result<Vec<String>, ReadingTimeError> {
        AnnotateDocumentsUseCase::discover(self)
    }

    fn execute(
        &self,
        path_inputs: &[String],
    ) -> Vec<Result<AnnotatedDocumentOutput, ReadingTimeError>> {
        AnnotateDocumentsUseCase::execute(self, path_inputs)
    }
}
