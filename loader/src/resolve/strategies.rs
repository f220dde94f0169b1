use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use super::{LookupStrategy, ResolutionContext};
use crate::document::Document;
use crate::error::ResolutionError;
use crate::parser::parse_file;
use crate::urn::AspectModelUrn;

/// Looks identifiers up in a models root laid out as
/// `<root>/<namespace>/<version>/<Name>.<extension>`.
///
/// If the file named after the element does not exist, every document in
/// the version directory is tried, so a file may define several elements.
#[derive(Debug, Clone)]
pub struct FileSystemStrategy {
    root: PathBuf,
    extension: String,
}

impl FileSystemStrategy {
    /// Creates a strategy for `root` reading `.ttl` files.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: "ttl".to_owned(),
        }
    }

    /// Uses `extension` (without leading dot) for document files.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// The models root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the documents of `urn`'s namespace and version.
    #[must_use]
    pub fn directory_for(&self, urn: &AspectModelUrn) -> PathBuf {
        self.root.join(urn.namespace()).join(urn.version())
    }

    /// File expected to define `urn`.
    #[must_use]
    pub fn path_for(&self, urn: &AspectModelUrn) -> PathBuf {
        self.directory_for(urn)
            .join(format!("{}.{}", urn.name(), self.extension))
    }

    fn candidates(&self, urn: &AspectModelUrn) -> Result<Vec<PathBuf>, ResolutionError> {
        let directory = self.directory_for(urn);
        if !directory.is_dir() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        for entry in WalkDir::new(&directory).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ResolutionError::Lookup {
                urn: urn.to_string(),
                message: e.to_string(),
            })?;
            let path = entry.path();
            if entry.file_type().is_file()
                && path.extension().is_some_and(|x| x == self.extension.as_str())
            {
                files.push(path.to_path_buf());
            }
        }
        Ok(files)
    }
}

impl LookupStrategy for FileSystemStrategy {
    fn lookup(
        &self,
        urn: &AspectModelUrn,
        _context: &ResolutionContext<'_>,
    ) -> Result<Option<Document>, ResolutionError> {
        let direct = self.path_for(urn);
        if direct.is_file() {
            let document = parse_file(&direct)?;
            if document.defines(urn) {
                debug!(%urn, path = %direct.display(), "found in models root");
                return Ok(Some(document));
            }
        }
        for path in self.candidates(urn)? {
            if path == direct {
                continue;
            }
            trace!(%urn, path = %path.display(), "scanning candidate");
            let document = parse_file(&path)?;
            if document.defines(urn) {
                debug!(%urn, path = %path.display(), "found in models root");
                return Ok(Some(document));
            }
        }
        Ok(None)
    }
}

/// Serves identifiers from documents already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStrategy {
    documents: Vec<Document>,
}

impl InMemoryStrategy {
    /// Creates a strategy over `documents`.
    #[must_use]
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// The documents served.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }
}

impl LookupStrategy for InMemoryStrategy {
    fn lookup(
        &self,
        urn: &AspectModelUrn,
        _context: &ResolutionContext<'_>,
    ) -> Result<Option<Document>, ResolutionError> {
        Ok(self.documents.iter().find(|d| d.defines(urn)).cloned())
    }
}

/// Tries several strategies in order; the first one that finds a document
/// wins.
///
/// A failing strategy does not stop the search. Its error is returned only
/// if no later strategy finds the identifier.
#[derive(Default)]
pub struct FirstSuccess {
    strategies: Vec<Box<dyn LookupStrategy>>,
}

impl FirstSuccess {
    /// Creates an empty combinator, which finds nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `strategy`.
    #[must_use]
    pub fn with(mut self, strategy: impl LookupStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Number of strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// True if no strategy was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl std::fmt::Debug for FirstSuccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirstSuccess")
            .field("strategies", &self.strategies.len())
            .finish()
    }
}

impl LookupStrategy for FirstSuccess {
    fn lookup(
        &self,
        urn: &AspectModelUrn,
        context: &ResolutionContext<'_>,
    ) -> Result<Option<Document>, ResolutionError> {
        let mut failure = None;
        for strategy in &self.strategies {
            match strategy.lookup(urn, context) {
                Ok(Some(document)) => return Ok(Some(document)),
                Ok(None) => {}
                Err(e) => {
                    debug!(%urn, error = %e, "strategy failed, trying the next one");
                    failure.get_or_insert(e);
                }
            }
        }
        failure.map_or(Ok(None), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_turtle;
    use std::collections::HashSet;

    const SPEED: &str = r#"
        @prefix samm: <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
        @prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
        @prefix : <urn:samm:com.example:1.0.0#> .
        :speed a samm:Property ; samm:characteristic samm-c:Text .
        :heading a samm:Property ; samm:characteristic samm-c:Text .
    "#;

    fn urn(name: &str) -> AspectModelUrn {
        AspectModelUrn::parse(&format!("urn:samm:com.example:1.0.0#{name}")).unwrap()
    }

    fn write_root() -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        let directory = root.path().join("com.example").join("1.0.0");
        std::fs::create_dir_all(&directory).unwrap();
        std::fs::write(directory.join("speed.ttl"), SPEED).unwrap();
        std::fs::write(directory.join("notes.txt"), "not a model").unwrap();
        root
    }

    #[test]
    fn file_system_layout() {
        let root = write_root();
        let strategy = FileSystemStrategy::new(root.path());
        let satisfied = HashSet::new();
        let context = ResolutionContext::new(None, &satisfied);
        assert_eq!(
            strategy.path_for(&urn("speed")),
            root.path().join("com.example/1.0.0/speed.ttl")
        );
        assert!(strategy.lookup(&urn("speed"), &context).unwrap().is_some());
        // Not named after the element, found by scanning the directory.
        assert!(strategy.lookup(&urn("heading"), &context).unwrap().is_some());
        assert!(strategy.lookup(&urn("missing"), &context).unwrap().is_none());
        let elsewhere = AspectModelUrn::parse("urn:samm:org.other:1.0.0#speed").unwrap();
        assert!(strategy.lookup(&elsewhere, &context).unwrap().is_none());
    }

    struct Offline;

    impl LookupStrategy for Offline {
        fn lookup(
            &self,
            urn: &AspectModelUrn,
            _context: &ResolutionContext<'_>,
        ) -> Result<Option<Document>, ResolutionError> {
            Err(ResolutionError::Lookup {
                urn: urn.to_string(),
                message: "offline".to_owned(),
            })
        }
    }

    #[test]
    fn first_success_tries_in_order() {
        let root = write_root();
        let failing = Offline;
        let strategy = FirstSuccess::new()
            .with(failing)
            .with(InMemoryStrategy::new(Vec::new()))
            .with(FileSystemStrategy::new(root.path()));
        let satisfied = HashSet::new();
        let context = ResolutionContext::new(None, &satisfied);
        assert_eq!(strategy.len(), 3);
        assert!(strategy.lookup(&urn("speed"), &context).unwrap().is_some());
        assert!(matches!(
            strategy.lookup(&urn("missing"), &context),
            Err(ResolutionError::Lookup { .. })
        ));
    }

    #[test]
    fn in_memory_returns_the_defining_document() {
        let strategy = InMemoryStrategy::new(vec![parse_turtle(SPEED, None).unwrap()]);
        let satisfied = HashSet::new();
        let context = ResolutionContext::new(None, &satisfied);
        let document = strategy.lookup(&urn("heading"), &context).unwrap().unwrap();
        assert!(document.defines(&urn("speed")));
        assert!(strategy.lookup(&urn("Speed"), &context).unwrap().is_none());
    }
}
