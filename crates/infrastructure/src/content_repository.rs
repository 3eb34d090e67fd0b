use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use reading_time_application::error::ReadingTimeError;
use reading_time_application::ports::DocumentRepository;
use reading_time_domain::document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Markdown,
    Mdx,
}

impl DocumentKind {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "txt" | "text" => Some(Self::PlainText),
            "md" | "markdown" => Some(Self::Markdown),
            "mdx" => Some(Self::Mdx),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|extension| extension.to_str())
            .and_then(Self::from_extension)
    }
}

/// Documents stored under a site's content directory. Inputs are paths
/// relative to that directory; absolute paths are accepted when they point
/// inside it. Text is taken as-is, markup remnants included.
pub struct ContentDirectoryRepository {
    content_dir: PathBuf,
}

impl ContentDirectoryRepository {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    fn root(&self) -> Result<PathBuf, ReadingTimeError> {
        self.content_dir
            .canonicalize()
            .map_err(|source| io_error(&self.content_dir, source))
    }

    /// Returns the absolute file and its path relative to the content root.
    fn locate(&self, path_input: &str) -> Result<(PathBuf, PathBuf), ReadingTimeError> {
        let root = self.root()?;
        let requested = root.join(path_input);
        let file = requested
            .canonicalize()
            .map_err(|source| io_error(&requested, source))?;

        let relative = file
            .strip_prefix(&root)
            .map_err(|_| ReadingTimeError::OutsideContentDir {
                path: requested.clone(),
                content_dir: root.clone(),
            })?
            .to_path_buf();

        if !file.is_file() {
            return Err(ReadingTimeError::FileNotFound(requested));
        }
        if DocumentKind::from_path(&file).is_none() {
            return Err(ReadingTimeError::UnsupportedDocument(relative));
        }

        Ok((file, relative))
    }

    fn collect_documents(
        &self,
        root: &Path,
        dir: &Path,
        documents: &mut Vec<String>,
    ) -> Result<(), ReadingTimeError> {
        let entries = fs::read_dir(dir).map_err(|source| io_error(dir, source))?;
        for entry in entries {
            let path = entry.map_err(|source| io_error(dir, source))?.path();
            let hidden = path
                .file_name()
                .is_some_and(|name| name.to_string_lossy().starts_with('.'));
            if hidden {
                continue;
            }

            if path.is_dir() {
                self.collect_documents(root, &path, documents)?;
            } else if DocumentKind::from_path(&path).is_some() {
                if let Ok(relative) = path.strip_prefix(root) {
                    documents.push(relative.to_string_lossy().into_owned());
                }
            }
        }
        Ok(())
    }
}

impl DocumentRepository for ContentDirectoryRepository {
    fn read(&self, path_input: &str) -> Result<(PathBuf, Document), ReadingTimeError> {
        let (file, relative) = self.locate(path_input)?;
        let content = fs::read_to_string(&file).map_err(|source| io_error(&file, source))?;
        debug!("read {} bytes from {}", content.len(), relative.display());

        Ok((relative, Document::new(content)))
    }

    fn list(&self) -> Result<Vec<String>, ReadingTimeError> {
        let root = self.root()?;
        let mut documents = Vec::new();
        self.collect_documents(&root, &root, &mut documents)?;
        documents.sort();
        Ok(documents)
    }
}

fn io_error(path: &Path, source: io::Error) -> ReadingTimeError {
    match source.kind() {
        io::ErrorKind::NotFound => ReadingTimeError::FileNotFound(path.to_path_buf()),
        _ => ReadingTimeError::ReadFile {
            path: path.to_path_buf(),
            reason: source.to_string(),
        },
    }
}
