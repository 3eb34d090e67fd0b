use std::sync::Arc;

use log::{info, warn};
use rayon::prelude::*;

use crate::error::ReadingTimeError;
use crate::models::{metadata_output, AnnotatedDocumentOutput};
use crate::ports::DocumentRepository;
use crate::use_cases::EstimateReadingTimeUseCase;

#[derive(Clone)]
pub struct AnnotateDocumentsUseCase {
    repository: Arc<dyn DocumentRepository>,
    estimator: EstimateReadingTimeUseCase,
    reading_time_enabled: bool,
}

impl AnnotateDocumentsUseCase {
    pub fn new(
        repository: Arc<dyn DocumentRepository>,
        estimator: EstimateReadingTimeUseCase,
        reading_time_enabled: bool,
    ) -> Self {
        Self {
            repository,
            estimator,
            reading_time_enabled,
        }
    }

    pub fn discover(&self) -> Result<Vec<String>, ReadingTimeError> {
        let path_inputs = self.repository.list()?;
        info!("found {} documents", path_inputs.len());
        Ok(path_inputs)
    }

    /// Annotates documents in parallel on the rayon pool. Results keep the
    /// order of `path_inputs`; a document that fails to load only fails its
    /// own slot.
    pub fn execute(
        &self,
        path_inputs: &[String],
    ) -> Vec<Result<AnnotatedDocumentOutput, ReadingTimeError>> {
        let results = path_inputs
            .par_iter()
            .map(|path_input| self.annotate_one(path_input))
            .collect::<Vec<_>>();

        let failed = results.iter().filter(|result| result.is_err()).count();
        info!(
            "annotated {} of {} documents",
            results.len() - failed,
            results.len()
        );
        results
    }

    pub fn annotate_one(
        &self,
        path_input: &str,
    ) -> Result<AnnotatedDocumentOutput, ReadingTimeError> {
        let (path, mut document) = self.repository.read(path_input).map_err(|error| {
            warn!("skipping {path_input}: {error}");
            error
        })?;

        let reading_time = self
            .reading_time_enabled
            .then(|| self.estimator.annotate(&mut document));

        Ok(AnnotatedDocumentOutput {
            path: path.to_string_lossy().into_owned(),
            metadata: metadata_output(document.metadata),
            reading_time,
        })
    }
}
