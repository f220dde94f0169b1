//! Loader configuration read from TOML.
//!
//! ```toml
//! # directories laid out as <root>/<namespace>/<version>/<Name>.ttl
//! models_roots = ["models"]
//! # archive sub-folder that, when present, restricts archive loading
//! archive_folder = "aspect-models"
//! # file extension of serialized documents
//! extension = "ttl"
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::archive::{ArchiveReader, DEFAULT_ARCHIVE_FOLDER};
use crate::error::LoadError;
use crate::resolve::{FileSystemStrategy, FirstSuccess};

/// Settings of an [`AspectModelLoader`](crate::AspectModelLoader).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Models roots, searched in order.
    pub models_roots: Vec<PathBuf>,
    /// Folder restricting archive loading when present in an archive.
    pub archive_folder: String,
    /// Extension of document files, without leading dot.
    pub extension: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            models_roots: Vec::new(),
            archive_folder: DEFAULT_ARCHIVE_FOLDER.to_owned(),
            extension: "ttl".to_owned(),
        }
    }
}

impl LoaderConfig {
    /// Parses a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Config`] for malformed TOML, unknown keys, or
    /// values of the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self, LoadError> {
        toml::from_str(source).map_err(|e| LoadError::Config {
            message: e.to_string(),
        })
    }

    /// Reads and parses the configuration file at `path`. Relative models
    /// roots are taken relative to the file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config = Self::from_toml_str(&source)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        if let Some(base) = path.parent() {
            for root in &mut config.models_roots {
                if root.is_relative() {
                    *root = base.join(&*root);
                }
            }
        }
        Ok(config)
    }

    /// One [`FileSystemStrategy`] per models root, tried in order.
    #[must_use]
    pub fn strategy(&self) -> FirstSuccess {
        self.models_roots
            .iter()
            .fold(FirstSuccess::new(), |strategy, root| {
                strategy.with(FileSystemStrategy::new(root).with_extension(&self.extension))
            })
    }

    /// Archive reader honouring the configured folder and extension.
    #[must_use]
    pub fn archive_reader(&self) -> ArchiveReader {
        ArchiveReader::new()
            .with_folder(&self.archive_folder)
            .with_extension(&self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let config = LoaderConfig::from_toml_str(r#"models_roots = ["a", "b"]"#).unwrap();
        assert_eq!(config.models_roots, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(config.archive_folder, "aspect-models");
        assert_eq!(config.extension, "ttl");
        assert_eq!(config.strategy().len(), 2);
        assert_eq!(LoaderConfig::from_toml_str("").unwrap(), LoaderConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            LoaderConfig::from_toml_str("model_roots = []"),
            Err(LoadError::Config { .. })
        ));
        assert!(matches!(
            LoaderConfig::from_toml_str("extension = 3"),
            Err(LoadError::Config { .. })
        ));
    }

    #[test]
    fn relative_roots_follow_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loader.toml");
        std::fs::write(&path, "models_roots = [\"models\", \"/abs\"]\n").unwrap();
        let config = LoaderConfig::from_path(&path).unwrap();
        assert_eq!(config.models_roots[0], dir.path().join("models"));
        assert_eq!(config.models_roots[1], PathBuf::from("/abs"));
        assert!(LoaderConfig::from_path(&dir.path().join("absent.toml")).is_err());
    }
}
