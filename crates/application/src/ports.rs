use std::path::PathBuf;

use reading_time_domain::document::Document;
use reading_time_domain::site_config::SiteConfig;

use crate::error::ReadingTimeError;

pub trait DocumentRepository: Send + Sync {
    fn read(&self, path_input: &str) -> Result<(PathBuf, Document), ReadingTimeError>;

    /// Every readable document, as inputs accepted by `read`.
    fn list(&self) -> Result<Vec<String>, ReadingTimeError>;
}

pub trait SiteConfigSource: Send + Sync {
    fn load(&self) -> Result<SiteConfig, ReadingTimeError>;
}
