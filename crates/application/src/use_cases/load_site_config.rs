use std::sync::Arc;

use log::info;
use reading_time_domain::site_config::SiteConfig;

use crate::error::ReadingTimeError;
use crate::ports::SiteConfigSource;

#[derive(Clone)]
pub struct LoadSiteConfigUseCase {
    source: Arc<dyn SiteConfigSource>,
}

impl LoadSiteConfigUseCase {
    pub fn new(source: Arc<dyn SiteConfigSource>) -> Self {
        Self { source }
    }

    pub fn execute(&self) -> Result<SiteConfig, ReadingTimeError> {
        let config = self.source.load()?;
        info!(
            "site config loaded: {} wpm, reading time {}, theme {}",
            config.words_per_minute.get(),
            if config.markdown.reading_time_enabled() {
                "enabled"
            } else {
                "disabled"
            },
            config.markdown.syntax_highlighting.theme
        );
        Ok(config)
    }
}
