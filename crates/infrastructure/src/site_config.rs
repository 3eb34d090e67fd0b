use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use reading_time_application::error::ReadingTimeError;
use reading_time_application::models::EstimatorSettingsInput;
use reading_time_application::ports::SiteConfigSource;
use reading_time_domain::reading_time::{WordsPerMinute, DEFAULT_WORDS_PER_MINUTE};
use reading_time_domain::site_config::{
    MarkdownSettings, SiteConfig, SyntaxHighlighting, DEFAULT_CONTENT_DIR, DEFAULT_HIGHLIGHT_THEME,
    READING_TIME_PLUGIN,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSiteConfig {
    site: Option<String>,
    content_dir: String,
    markdown: RawMarkdown,
    reading_time: RawReadingTime,
}

impl Default for RawSiteConfig {
    fn default() -> Self {
        Self {
            site: None,
            content_dir: DEFAULT_CONTENT_DIR.to_string(),
            markdown: RawMarkdown::default(),
            reading_time: RawReadingTime::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawMarkdown {
    remark_plugins: Vec<String>,
    extend_default_plugins: bool,
    syntax_highlighting: RawSyntaxHighlighting,
}

impl Default for RawMarkdown {
    fn default() -> Self {
        Self {
            remark_plugins: vec![READING_TIME_PLUGIN.to_string()],
            extend_default_plugins: true,
            syntax_highlighting: RawSyntaxHighlighting::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSyntaxHighlighting {
    theme: String,
    wrap: bool,
}

impl Default for RawSyntaxHighlighting {
    fn default() -> Self {
        Self {
            theme: DEFAULT_HIGHLIGHT_THEME.to_string(),
            wrap: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawReadingTime {
    words_per_minute: u32,
}

impl Default for RawReadingTime {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

/// Site configuration stored as TOML, e.g.
///
/// ```toml
/// site = "https://example.com"
/// content_dir = "src/content"
///
/// [markdown]
/// remark_plugins = ["remark-reading-time"]
/// extend_default_plugins = true
///
/// [markdown.syntax_highlighting]
/// theme = "nord"
/// wrap = true
///
/// [reading_time]
/// words_per_minute = 200
/// ```
pub struct TomlSiteConfigSource {
    path: PathBuf,
}

impl TomlSiteConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SiteConfigSource for TomlSiteConfigSource {
    fn load(&self) -> Result<SiteConfig, ReadingTimeError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ReadingTimeError::FileNotFound(self.path.clone())
            } else {
                ReadingTimeError::ReadFile {
                    path: self.path.clone(),
                    reason: source.to_string(),
                }
            }
        })?;
        debug!("parsing site config {}", self.path.display());
        parse_site_config(&raw, &self.path)
    }
}

pub fn parse_site_config(raw: &str, path: &Path) -> Result<SiteConfig, ReadingTimeError> {
    let parsed: RawSiteConfig = toml::from_str(raw).map_err(|error| ReadingTimeError::Config {
        path: path.to_path_buf(),
        reason: error.message().to_string(),
    })?;

    let site = parsed.site.map(validate_site_url).transpose()?;
    let words_per_minute = WordsPerMinute::try_from(EstimatorSettingsInput {
        words_per_minute: parsed.reading_time.words_per_minute,
    })?;

    Ok(SiteConfig {
        site,
        content_dir: parsed.content_dir,
        markdown: MarkdownSettings {
            remark_plugins: parsed.markdown.remark_plugins,
            extend_default_plugins: parsed.markdown.extend_default_plugins,
            syntax_highlighting: SyntaxHighlighting {
                theme: parsed.markdown.syntax_highlighting.theme,
                wrap: parsed.markdown.syntax_highlighting.wrap,
            },
        },
        words_per_minute,
    })
}

fn validate_site_url(site: String) -> Result<String, ReadingTimeError> {
    let parsed = url::Url::parse(&site).map_err(|error| ReadingTimeError::InvalidSiteUrl {
        url: site.clone(),
        reason: error.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(site),
        scheme => Err(ReadingTimeError::InvalidSiteUrl {
            url: site,
            reason: format!("unsupported scheme `{scheme}`"),
        }),
    }
}
