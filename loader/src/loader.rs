//! The loading facade and the merged model it produces.

use std::collections::HashMap;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use crate::archive::ArchiveReader;
use crate::config::LoaderConfig;
use crate::document::{Document, Origin};
use crate::error::ResolutionError;
use crate::graph::Graph;
use crate::migrate::{IdentityMigrator, Migrator};
use crate::model::{Aspect, ElementArena, ElementId, ModelElement};
use crate::parser::{parse_file, parse_turtle};
use crate::resolve::{FirstSuccess, LookupStrategy, ResolutionEngine};
use crate::urn::AspectModelUrn;

/// Loads Aspect Models from strings, files, archives or identifiers.
///
/// Every `load_*` call is an independent session producing a fresh
/// [`AspectModel`].
pub struct AspectModelLoader {
    strategy: Box<dyn LookupStrategy>,
    migrator: Box<dyn Migrator>,
    archive: ArchiveReader,
}

impl Default for AspectModelLoader {
    fn default() -> Self {
        Self {
            strategy: Box::new(FirstSuccess::new()),
            migrator: Box::new(IdentityMigrator),
            archive: ArchiveReader::new(),
        }
    }
}

impl std::fmt::Debug for AspectModelLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AspectModelLoader")
            .field("archive", &self.archive)
            .finish_non_exhaustive()
    }
}

impl AspectModelLoader {
    /// A loader that resolves nothing beyond the documents it is given.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader resolving through the models roots of `config`.
    #[must_use]
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self {
            strategy: Box::new(config.strategy()),
            archive: config.archive_reader(),
            ..Self::default()
        }
    }

    /// Resolves identifiers through `strategy`.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl LookupStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Runs every document through `migrator`.
    #[must_use]
    pub fn with_migrator(mut self, migrator: impl Migrator + 'static) -> Self {
        self.migrator = Box::new(migrator);
        self
    }

    fn engine(&self) -> ResolutionEngine<'_> {
        ResolutionEngine::new(self.strategy.as_ref(), self.migrator.as_ref())
    }

    /// Loads `documents` and everything they refer to.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolutionError`] if a reference cannot be resolved or an
    /// element does not materialize.
    pub fn load_documents(&self, documents: Vec<Document>) -> Result<AspectModel, ResolutionError> {
        self.engine().run(documents, &[])
    }

    /// Loads the documents defining `urns` and everything they refer to.
    ///
    /// # Errors
    ///
    /// See [`AspectModelLoader::load_documents`].
    pub fn load_urns(&self, urns: &[AspectModelUrn]) -> Result<AspectModel, ResolutionError> {
        self.engine().run(Vec::new(), urns)
    }

    /// Loads one Turtle document given as text.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::Load`] if the text does not parse, and see
    /// [`AspectModelLoader::load_documents`].
    pub fn load_str(&self, source: &str) -> Result<AspectModel, ResolutionError> {
        let document = parse_turtle(source, Some(Origin::Memory("input".to_owned())))?;
        self.load_documents(vec![document])
    }

    /// Loads Turtle files.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::Load`] if a file cannot be read or parsed,
    /// and see [`AspectModelLoader::load_documents`].
    pub fn load_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<AspectModel, ResolutionError> {
        let documents = paths
            .iter()
            .map(|path| parse_file(path.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.load_documents(documents)
    }

    /// Loads every document of the archive at `path`. References between the
    /// archive's documents resolve among themselves; others go through the
    /// loader's strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::Load`] if the archive cannot be read, and
    /// see [`AspectModelLoader::load_documents`].
    pub fn load_archive(&self, path: &Path) -> Result<AspectModel, ResolutionError> {
        let documents = self.archive.open(path)?;
        self.load_documents(documents)
    }

    /// Loads every document of an archive read from `reader`; `name` labels
    /// the archive in document origins.
    ///
    /// # Errors
    ///
    /// See [`AspectModelLoader::load_archive`].
    pub fn load_archive_from<R: Read + Seek>(
        &self,
        reader: R,
        name: &Path,
    ) -> Result<AspectModel, ResolutionError> {
        let documents = self.archive.read(reader, name)?;
        self.load_documents(documents)
    }
}

/// A loaded Aspect Model: the merged graph, the documents it came from, and
/// every materialized element.
#[derive(Debug, Clone)]
pub struct AspectModel {
    graph: Graph,
    documents: Vec<Document>,
    arena: ElementArena,
    by_urn: HashMap<AspectModelUrn, ElementId>,
}

impl AspectModel {
    pub(crate) fn new(graph: Graph, documents: Vec<Document>, arena: ElementArena) -> Self {
        let mut by_urn = HashMap::new();
        for (id, element) in arena.iter() {
            if let Some(urn) = element.urn() {
                by_urn.entry(urn.clone()).or_insert(id);
            }
        }
        Self {
            graph,
            documents,
            arena,
            by_urn,
        }
    }

    /// The documents' graphs merged with the built-in definitions.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Loaded documents, in load order.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Every element.
    #[must_use]
    pub fn arena(&self) -> &ElementArena {
        &self.arena
    }

    /// The element at `id`.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&ModelElement> {
        self.arena.get(id)
    }

    /// The element named `urn`.
    #[must_use]
    pub fn element_by_urn(&self, urn: &AspectModelUrn) -> Option<ElementId> {
        self.by_urn.get(urn).copied()
    }

    /// Every Aspect, in arena order.
    pub fn aspects(&self) -> impl Iterator<Item = &Aspect> {
        self.arena.iter().filter_map(|(_, e)| e.as_aspect())
    }

    /// The document defining `id`, if it came from one.
    #[must_use]
    pub fn document_of(&self, id: ElementId) -> Option<&Document> {
        let source = self.arena.get(id)?.base().source?;
        self.documents.get(source.index())
    }

    /// Paths of the documents read from the file system.
    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.documents.iter().filter_map(|d| match d.origin() {
            Some(Origin::File(path)) => Some(path),
            _ => None,
        })
    }
}
