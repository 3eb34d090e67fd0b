use crate::reading_time::WordsPerMinute;

pub const READING_TIME_PLUGIN: &str = "remark-reading-time";
pub const DEFAULT_HIGHLIGHT_THEME: &str = "nord";
pub const DEFAULT_CONTENT_DIR: &str = "src/content";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxHighlighting {
    pub theme: String,
    pub wrap: bool,
}

impl Default for SyntaxHighlighting {
    fn default() -> Self {
        Self {
            theme: DEFAULT_HIGHLIGHT_THEME.to_string(),
            wrap: true,
        }
    }
}

/// Markdown pipeline settings. Only `remark_plugins` influences the
/// estimator; the rest is carried for the external build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownSettings {
    pub remark_plugins: Vec<String>,
    pub extend_default_plugins: bool,
    pub syntax_highlighting: SyntaxHighlighting,
}

impl Default for MarkdownSettings {
    fn default() -> Self {
        Self {
            remark_plugins: vec![READING_TIME_PLUGIN.to_string()],
            extend_default_plugins: true,
            syntax_highlighting: SyntaxHighlighting::default(),
        }
    }
}

impl MarkdownSettings {
    pub fn reading_time_enabled(&self) -> bool {
        self.remark_plugins
            .iter()
            .any(|plugin| plugin == READING_TIME_PLUGIN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site: Option<String>,
    /// Directory holding the documents, relative to the config file.
    pub content_dir: String,
    pub markdown: MarkdownSettings,
    pub words_per_minute: WordsPerMinute,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: None,
            content_dir: DEFAULT_CONTENT_DIR.to_string(),
            markdown: MarkdownSettings::default(),
            words_per_minute: WordsPerMinute::default(),
        }
    }
}
