//! Loaded documents.

use std::fmt;
use std::path::PathBuf;

use crate::graph::{Graph, Term};
use crate::model::ElementId;
use crate::urn::AspectModelUrn;

/// Where a document was read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Origin {
    /// A file on the local file system.
    File(PathBuf),
    /// A remote location.
    Url(String),
    /// An entry of an archive.
    Archive {
        /// Path of the archive file.
        archive: PathBuf,
        /// Entry name inside the archive.
        entry: String,
    },
    /// An in-memory source, identified by a caller-chosen name.
    Memory(String),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
            Self::Archive { archive, entry } => write!(f, "{}!{}", archive.display(), entry),
            Self::Memory(name) => write!(f, "memory:{name}"),
        }
    }
}

/// Index of a document within a loaded [`AspectModel`](crate::AspectModel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub(crate) usize);

impl DocumentId {
    /// Position of the document in load order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One parsed unit of an Aspect Model: its graph, leading comment header,
/// origin, and (once materialized) the elements it defines.
#[derive(Debug, Clone)]
pub struct Document {
    graph: Graph,
    header: Option<String>,
    origin: Option<Origin>,
    elements: Vec<ElementId>,
}

impl Document {
    /// Creates a document that has not been materialized yet.
    #[must_use]
    pub fn new(graph: Graph, header: Option<String>, origin: Option<Origin>) -> Self {
        Self {
            graph,
            header,
            origin,
            elements: Vec::new(),
        }
    }

    /// The untyped graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Leading comment block of the source (copyright notices and the like).
    #[must_use]
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Where the document came from.
    #[must_use]
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    /// Elements defined by this document, in materialization order.
    #[must_use]
    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    pub(crate) fn attach_elements(&mut self, elements: Vec<ElementId>) {
        self.elements = elements;
    }

    /// Replaces the graph, keeping header and origin. Used by migrators.
    #[must_use]
    pub fn with_graph(self, graph: Graph) -> Self {
        Self { graph, ..self }
    }

    /// True if the document asserts a type for `urn`, in either the
    /// canonical or the legacy spelling.
    #[must_use]
    pub fn defines(&self, urn: &AspectModelUrn) -> bool {
        [urn.to_iri(), urn.legacy_spelling()]
            .into_iter()
            .any(|iri| self.graph.is_typed(&Term::Iri(iri)))
    }

    /// Identifiers of every element this document type-asserts, canonicalized.
    pub fn defined_urns(&self) -> impl Iterator<Item = AspectModelUrn> + '_ {
        self.graph
            .typed_iris()
            .filter_map(|iri| AspectModelUrn::parse(iri).ok())
    }

    /// A key identifying the document for load de-duplication: its origin
    /// if known, otherwise the identifiers it defines.
    pub(crate) fn identity_key(&self) -> String {
        match &self.origin {
            Some(origin) => origin.to_string(),
            None => {
                let mut urns: Vec<String> = self.defined_urns().map(|u| u.to_iri()).collect();
                urns.sort();
                format!("defines:{}", urns.join(" "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Triple;
    use samm_metamodel::model::iris::{RDF_TYPE, SAMM_ASPECT};

    #[test]
    fn defines_probes_legacy_spelling() {
        let graph: Graph = [Triple::new(
            Term::iri("urn:bamm:com.example:1.0.0#Vehicle"),
            RDF_TYPE,
            Term::iri(SAMM_ASPECT),
        )]
        .into_iter()
        .collect();
        let document = Document::new(graph, None, None);
        let urn = AspectModelUrn::parse("urn:samm:com.example:1.0.0#Vehicle").unwrap();
        assert!(document.defines(&urn));
        assert!(!document.defines(&urn.with_name("Other")));
        assert_eq!(document.defined_urns().collect::<Vec<_>>(), vec![urn]);
    }

    #[test]
    fn origin_display() {
        let origin = Origin::Archive {
            archive: PathBuf::from("models.zip"),
            entry: "aspect-models/a.ttl".to_owned(),
        };
        assert_eq!(origin.to_string(), "models.zip!aspect-models/a.ttl");
    }
}
