mod annotate_documents;
mod estimate_reading_time;
mod load_site_config;

pub use annotate_documents::AnnotateDocumentsUseCase;
pub use estimate_reading_time::EstimateReadingTimeUseCase;
pub use load_site_config::LoadSiteConfigUseCase;

#[cfg(test)]
mod test_support;
