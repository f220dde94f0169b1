//! Reading of model documents packaged in zip archives.
//!
//! If any entry of the archive lies under a folder named like the configured
//! models folder (`aspect-models` by default), only the documents under that
//! folder are read. Otherwise every document in the archive is.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::ZipArchive;

use crate::document::{Document, Origin};
use crate::error::LoadError;
use crate::parser::parse_turtle;

/// Default name of the folder holding the models inside an archive.
pub const DEFAULT_ARCHIVE_FOLDER: &str = "aspect-models";

/// Reads the documents of an archive.
#[derive(Debug, Clone)]
pub struct ArchiveReader {
    folder: String,
    extension: String,
}

impl Default for ArchiveReader {
    fn default() -> Self {
        Self {
            folder: DEFAULT_ARCHIVE_FOLDER.to_owned(),
            extension: "ttl".to_owned(),
        }
    }
}

impl ArchiveReader {
    /// A reader using the `aspect-models` folder and `.ttl` documents.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `folder` as the models folder.
    #[must_use]
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into().trim_matches('/').to_owned();
        self
    }

    /// Uses `extension` (without leading dot) for documents.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Opens and reads the archive at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be opened,
    /// [`LoadError::Archive`] if it is no valid archive, and
    /// [`LoadError::Syntax`] if a document does not parse.
    pub fn open(&self, path: &Path) -> Result<Vec<Document>, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.read(file, path)
    }

    /// Reads the archive from `reader`; `path` names it in document origins.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Archive`] if the data is no valid archive and
    /// [`LoadError::Syntax`] if a document does not parse.
    pub fn read<R: Read + Seek>(&self, reader: R, path: &Path) -> Result<Vec<Document>, LoadError> {
        let archive_error = |message: String| LoadError::Archive {
            path: path.display().to_string(),
            message,
        };
        let mut archive = ZipArchive::new(reader).map_err(|e| archive_error(e.to_string()))?;

        let mut names: Vec<String> = archive
            .file_names()
            .filter(|name| self.is_document(name))
            .map(str::to_owned)
            .collect();
        names.sort();
        let scoped = names.iter().any(|name| self.in_folder(name));

        let mut documents = Vec::new();
        for name in names {
            if scoped && !self.in_folder(&name) {
                continue;
            }
            let mut source = String::new();
            archive
                .by_name(&name)
                .map_err(|e| archive_error(e.to_string()))?
                .read_to_string(&mut source)
                .map_err(|e| archive_error(format!("{name}: {e}")))?;
            let origin = Origin::Archive {
                archive: PathBuf::from(path),
                entry: name.clone(),
            };
            debug!(entry = %name, "reading archive entry");
            documents.push(parse_turtle(&source, Some(origin))?);
        }
        Ok(documents)
    }

    fn is_document(&self, name: &str) -> bool {
        !name.ends_with('/')
            && Path::new(name)
                .extension()
                .is_some_and(|x| x == self.extension.as_str())
    }

    fn in_folder(&self, name: &str) -> bool {
        let mut segments: Vec<&str> = name.split('/').collect();
        segments.pop();
        segments.contains(&self.folder.as_str())
    }
}
