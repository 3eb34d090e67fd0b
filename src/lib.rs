use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};
use reading_time_application::error::ReadingTimeError;
use reading_time_application::input_ports::{
    AnnotateDocumentsInputPort, EstimateReadingTimeInputPort,
};
use reading_time_application::use_cases::{
    AnnotateDocumentsUseCase, EstimateReadingTimeUseCase, LoadSiteConfigUseCase,
};
use reading_time_domain::document::Document;
use reading_time_domain::site_config::SiteConfig;
use reading_time_infrastructure::content_repository::ContentDirectoryRepository;
use reading_time_infrastructure::site_config::TomlSiteConfigSource;
use reading_time_presentation::dto::{
    to_estimator_settings, AnnotatedDocumentDto, EstimatorSettingsDto, ReadingTimeDto,
};
use reading_time_presentation::state::AppState;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DocumentReport {
    Annotated(AnnotatedDocumentDto),
    Failed { path: String, error: String },
}

pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

pub fn build_state(config: &SiteConfig, content_dir: &Path) -> AppState {
    let estimator = EstimateReadingTimeUseCase::new(config.words_per_minute);
    let repository = Arc::new(ContentDirectoryRepository::new(content_dir));
    let estimate_use_case: Arc<dyn EstimateReadingTimeInputPort> = Arc::new(estimator);
    let annotate_use_case: Arc<dyn AnnotateDocumentsInputPort> = Arc::new(
        AnnotateDocumentsUseCase::new(
            repository,
            estimator,
            config.markdown.reading_time_enabled(),
        ),
    );

    AppState::new(estimate_use_case, annotate_use_case)
}

pub fn load_site_config(config_path: Option<&Path>) -> Result<SiteConfig, String> {
    match config_path {
        Some(path) => {
            let source = Arc::new(TomlSiteConfigSource::new(path));
            LoadSiteConfigUseCase::new(source)
                .execute()
                .map_err(to_user_error)
        }
        None => Ok(SiteConfig::default()),
    }
}

/// `content_dir` is relative to the config file, or to the working directory
/// when running on defaults. Absolute directories are used as-is.
pub fn resolve_content_dir(config: &SiteConfig, config_path: Option<&Path>) -> PathBuf {
    let base = config_path
        .and_then(Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    base.join(&config.content_dir)
}

pub fn estimate_reading_time(text: Option<&str>, state: &AppState) -> ReadingTimeDto {
    state.estimate_reading_time.estimate_text(text).into()
}

/// Estimates with per-call settings instead of the site-wide speed.
pub fn estimate_reading_time_with(
    text: Option<&str>,
    settings: Option<EstimatorSettingsDto>,
) -> Result<ReadingTimeDto, String> {
    let estimator = EstimateReadingTimeUseCase::from_settings(to_estimator_settings(settings))
        .map_err(to_user_error)?;
    Ok(estimator.estimate_text(text).into())
}

pub fn annotate_document(document: &mut Document, state: &AppState) -> ReadingTimeDto {
    state.estimate_reading_time.annotate(document).into()
}

pub fn annotate_documents(path_inputs: &[String], state: &AppState) -> Vec<DocumentReport> {
    state
        .annotate_documents
        .execute(path_inputs)
        .into_iter()
        .zip(path_inputs)
        .map(|(result, path_input)| match result {
            Ok(output) => DocumentReport::Annotated(output.into()),
            Err(error) => DocumentReport::Failed {
                path: path_input.clone(),
                error: to_user_error(error),
            },
        })
        .collect()
}

/// Loads the site config, annotates the given documents (or every document in
/// the content directory when none are given) and returns the reports as
/// pretty JSON. Per-document failures are reported, not returned as errors.
pub fn run(config_path: Option<&Path>, path_inputs: &[String]) -> Result<String, String> {
    init_logging();

    let config = load_site_config(config_path)?;
    if !config.markdown.reading_time_enabled() {
        warn!("reading-time plugin is not enabled, documents are returned unannotated");
    }
    let content_dir = resolve_content_dir(&config, config_path);
    let state = build_state(&config, &content_dir);
    let path_inputs = if path_inputs.is_empty() {
        state.annotate_documents.discover().map_err(to_user_error)?
    } else {
        path_inputs.to_vec()
    };
    let reports = annotate_documents(&path_inputs, &state);
    info!("processed {} documents", reports.len());

    serde_json::to_string_pretty(&reports).map_err(|error| error.to_string())
}

fn to_user_error(error: ReadingTimeError) -> String {
    error.to_string()
}
