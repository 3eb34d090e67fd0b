use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use reading_time_domain::document::Document;
use reading_time_domain::site_config::SiteConfig;

use crate::error::ReadingTimeError;
use crate::ports::{DocumentRepository, SiteConfigSource};

pub(super) fn clone_error(error: &ReadingTimeError) -> ReadingTimeError {
    match error {
        ReadingTimeError::FileNotFound(path) => ReadingTimeError::FileNotFound(path.clone()),
        ReadingTimeError::OutsideContentDir { path, content_dir } => {
            ReadingTimeError::OutsideContentDir {
                path: path.clone(),
                content_dir: content_dir.clone(),
            }
        }
        ReadingTimeError::UnsupportedDocument(path) => {
            ReadingTimeError::UnsupportedDocument(path.clone())
        }
        ReadingTimeError::ReadFile { path, reason } => ReadingTimeError::ReadFile {
            path: path.clone(),
            reason: reason.clone(),
        },
        ReadingTimeError::Config { path, reason } => ReadingTimeError::Config {
            path: path.clone(),
            reason: reason.clone(),
        },
        ReadingTimeError::InvalidWordsPerMinute(value) => {
            ReadingTimeError::InvalidWordsPerMinute(*value)
        }
        ReadingTimeError::InvalidSiteUrl { url, reason } => ReadingTimeError::InvalidSiteUrl {
            url: url.clone(),
            reason: reason.clone(),
        },
    }
}

/// Serves in-memory documents; unknown paths fail with `FileNotFound`.
pub(super) struct StubRepository {
    documents: HashMap<String, String>,
    reads: AtomicUsize,
    pub(super) worker_indexes: Mutex<Vec<Option<usize>>>,
}

impl StubRepository {
    pub(super) fn new() -> Self {
        Self {
            documents: HashMap::new(),
            reads: AtomicUsize::new(0),
            worker_indexes: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn with_text(mut self, path: &str, text: &str) -> Self {
        self.documents.insert(path.to_string(), text.to_string());
        self
    }

    pub(super) fn read_count(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }
}

impl DocumentRepository for StubRepository {
    fn read(&self, path_input: &str) -> Result<(PathBuf, Document), ReadingTimeError> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.worker_indexes
            .lock()
            .expect("worker index state should be lockable")
            .push(rayon::current_thread_index());
        self.documents
            .get(path_input)
            .map(|text| (PathBuf::from(path_input), Document::new(text.as_str())))
            .ok_or_else(|| ReadingTimeError::FileNotFound(PathBuf::from(path_input)))
    }

    fn list(&self) -> Result<Vec<String>, ReadingTimeError> {
        let mut paths = self.documents.keys().cloned().collect::<Vec<_>>();
        paths.sort();
        Ok(paths)
    }
}

pub(super) struct StubConfigSource {
    config: SiteConfig,
    error: Option<ReadingTimeError>,
}

impl StubConfigSource {
    pub(super) fn ok(config: SiteConfig) -> Self {
        Self {
            config,
            error: None,
        }
    }

    pub(super) fn fail(error: ReadingTimeError) -> Self {
        Self {
            config: SiteConfig::default(),
            error: Some(error),
        }
    }
}

impl SiteConfigSource for StubConfigSource {
    fn load(&self) -> Result<SiteConfig, ReadingTimeError> {
        if let Some(error) = &self.error {
            return Err(clone_error(error));
        }
        Ok(self.config.clone())
    }
}
