use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadingTimeError {
    #[error("file does not exist: {0}")]
    FileNotFound(PathBuf),
    #[error("{path} is outside the content directory {content_dir}")]
    OutsideContentDir { path: PathBuf, content_dir: PathBuf },
    #[error("not a text document: {0}")]
    UnsupportedDocument(PathBuf),
    #[error("failed to read file {path}: {reason}")]
    ReadFile { path: PathBuf, reason: String },
    #[error("invalid site config {path}: {reason}")]
    Config { path: PathBuf, reason: String },
    #[error("words per minute must be greater than zero, got {0}")]
    InvalidWordsPerMinute(u32),
    #[error("invalid site url {url}: {reason}")]
    InvalidSiteUrl { url: String, reason: String },
}
