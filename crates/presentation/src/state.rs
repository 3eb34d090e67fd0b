use std::sync::Arc;

use reading_time_application::input_ports::{
    AnnotateDocumentsInputPort, EstimateReadingTimeInputPort,
};

pub struct AppState {
    pub estimate_reading_time: Arc<dyn EstimateReadingTimeInputPort>,
    pub annotate_documents: Arc<dyn AnnotateDocumentsInputPort>,
}

impl AppState {
    pub fn new(
        estimate_reading_time: Arc<dyn EstimateReadingTimeInputPort>,
        annotate_documents: Arc<dyn AnnotateDocumentsInputPort>,
    ) -> Self {
        Self {
            estimate_reading_time,
            annotate_documents,
        }
    }
}
