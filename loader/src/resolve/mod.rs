//! Transitive resolution of the documents an Aspect Model needs.
//!
//! [`ResolutionEngine::run`] starts from a set of documents and identifiers
//! and loads documents until every identifier referenced by any loaded
//! document is defined by one of them. Documents are found through a
//! [`LookupStrategy`]; the engine runs every document through a
//! [`Migrator`] before scanning it. Once the set is closed, the documents'
//! graphs are merged with the built-in definitions and every named resource
//! a document type-asserts is materialized.
//!
//! # Entry Point
//!
//! ```
//! use aspect_loader::resolve::{InMemoryStrategy, ResolutionEngine};
//! use aspect_loader::{parser::parse_turtle, AspectModelUrn, IdentityMigrator};
//!
//! let weight = parse_turtle(
//!     r#"
//!     @prefix samm: <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
//!     @prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
//!     @prefix : <urn:samm:com.example:1.0.0#> .
//!     :weight a samm:Property ; samm:characteristic samm-c:Text .
//!     "#,
//!     None,
//! )?;
//! let strategy = InMemoryStrategy::new(vec![weight]);
//! let engine = ResolutionEngine::new(&strategy, &IdentityMigrator);
//! let urn = AspectModelUrn::parse("urn:samm:com.example:1.0.0#weight")?;
//! let model = engine.run(Vec::new(), &[urn.clone()])?;
//! assert!(model.element_by_urn(&urn).is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod strategies;

pub use strategies::{FileSystemStrategy, FirstSuccess, InMemoryStrategy};

use std::collections::{HashSet, VecDeque};

use samm_metamodel::model::iris::LEGACY_URN_SCHEME;
use tracing::{debug, info, trace};

use crate::builtins;
use crate::document::{Document, DocumentId, Origin};
use crate::error::ResolutionError;
use crate::factory::ElementFactory;
use crate::graph::{Graph, Term, Triple};
use crate::loader::AspectModel;
use crate::migrate::Migrator;
use crate::urn::{canonical_iri, is_builtin_iri, AspectModelUrn};

/// What a [`LookupStrategy`] may know about the request it serves.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    referrer: Option<&'a Origin>,
    satisfied: &'a HashSet<AspectModelUrn>,
}

impl<'a> ResolutionContext<'a> {
    /// Creates a context.
    #[must_use]
    pub fn new(referrer: Option<&'a Origin>, satisfied: &'a HashSet<AspectModelUrn>) -> Self {
        Self {
            referrer,
            satisfied,
        }
    }

    /// Origin of the document that referred to the identifier, if known.
    #[must_use]
    pub fn referrer(&self) -> Option<&'a Origin> {
        self.referrer
    }

    /// True if a loaded document already defines `urn`.
    #[must_use]
    pub fn is_satisfied(&self, urn: &AspectModelUrn) -> bool {
        self.satisfied.contains(urn)
    }

    /// Identifiers defined by the documents loaded so far.
    pub fn satisfied(&self) -> impl Iterator<Item = &'a AspectModelUrn> {
        self.satisfied.iter()
    }
}

/// Finds the document defining an identifier.
pub trait LookupStrategy {
    /// Returns the document defining `urn`, or `None` if this strategy does
    /// not know it.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::Lookup`] if the strategy failed outright,
    /// or a wrapped [`LoadError`](crate::LoadError) if a candidate document
    /// could not be read.
    fn lookup(
        &self,
        urn: &AspectModelUrn,
        context: &ResolutionContext<'_>,
    ) -> Result<Option<Document>, ResolutionError>;
}

impl<F> LookupStrategy for F
where
    F: Fn(&AspectModelUrn, &ResolutionContext<'_>) -> Result<Option<Document>, ResolutionError>,
{
    fn lookup(
        &self,
        urn: &AspectModelUrn,
        context: &ResolutionContext<'_>,
    ) -> Result<Option<Document>, ResolutionError> {
        self(urn, context)
    }
}

/// Worklist state of one resolution session.
#[derive(Default)]
struct Worklist {
    documents: Vec<Document>,
    loaded: HashSet<String>,
    satisfied: HashSet<AspectModelUrn>,
    pending: VecDeque<(AspectModelUrn, Option<Origin>)>,
}

/// Loads the closure of a set of documents and identifiers.
pub struct ResolutionEngine<'a> {
    strategy: &'a dyn LookupStrategy,
    migrator: &'a dyn Migrator,
}

impl<'a> ResolutionEngine<'a> {
    /// Creates an engine resolving through `strategy`.
    #[must_use]
    pub fn new(strategy: &'a dyn LookupStrategy, migrator: &'a dyn Migrator) -> Self {
        Self { strategy, migrator }
    }

    /// Resolves `documents` and `urns` to closure and materializes the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::Unresolved`] if no document defines a
    /// referenced identifier, [`ResolutionError::ContractViolation`] if the
    /// strategy returns a document that does not define what it was asked
    /// for, and [`ResolutionError::Load`] if a document fails to migrate or
    /// an element fails to materialize.
    pub fn run(
        &self,
        documents: Vec<Document>,
        urns: &[AspectModelUrn],
    ) -> Result<AspectModel, ResolutionError> {
        let documents = self.resolve(documents, urns)?;
        Ok(materialize(documents)?)
    }

    /// Resolves `documents` and `urns` to closure, returning every loaded
    /// document in load order.
    ///
    /// Pending documents form a stack: the start documents are pushed in the
    /// order given and the last one is loaded first. A document obtained for
    /// an identifier is loaded and scanned before the next identifier is
    /// looked up.
    ///
    /// # Errors
    ///
    /// See [`ResolutionEngine::run`].
    pub fn resolve(
        &self,
        documents: Vec<Document>,
        urns: &[AspectModelUrn],
    ) -> Result<Vec<Document>, ResolutionError> {
        let mut worklist = Worklist::default();
        worklist
            .pending
            .extend(urns.iter().map(|urn| (urn.clone(), None)));

        let mut stack = documents;
        while let Some(document) = stack.pop() {
            let document = self.migrator.migrate(document)?;
            accept(document, &mut worklist);
        }

        while let Some((urn, referrer)) = worklist.pending.pop_front() {
            if worklist.satisfied.contains(&urn) {
                trace!(%urn, "identifier already satisfied");
                continue;
            }
            let context = ResolutionContext::new(referrer.as_ref(), &worklist.satisfied);
            let document = self
                .strategy
                .lookup(&urn, &context)?
                .ok_or_else(|| ResolutionError::Unresolved {
                    urn: urn.to_string(),
                })?;
            if !document.defines(&urn) {
                return Err(ResolutionError::ContractViolation {
                    urn: urn.to_string(),
                    origin: document
                        .origin()
                        .map_or_else(|| "an anonymous document".to_owned(), ToString::to_string),
                });
            }
            debug!(%urn, origin = ?document.origin(), "identifier resolved");
            let document = self.migrator.migrate(document)?;
            accept(document, &mut worklist);
        }

        Ok(worklist.documents)
    }
}

/// Marks `document` loaded and queues what it references but does not define.
fn accept(document: Document, worklist: &mut Worklist) {
    if !worklist.loaded.insert(document.identity_key()) {
        trace!(origin = ?document.origin(), "document already loaded");
        return;
    }
    let document = canonicalize(document);
    debug!(
        origin = ?document.origin(),
        triples = document.graph().len(),
        "document loaded"
    );
    worklist.satisfied.extend(document.defined_urns());
    for iri in document.graph().iris() {
        if is_builtin_iri(iri) {
            continue;
        }
        let Ok(urn) = AspectModelUrn::parse(iri) else {
            continue;
        };
        if !worklist.satisfied.contains(&urn) {
            worklist.pending.push_back((urn, document.origin().cloned()));
        }
    }
    worklist.documents.push(document);
}

/// Rewrites user identifiers in the legacy scheme to the canonical one.
fn canonicalize(document: Document) -> Document {
    let legacy = |iri: &str| iri.starts_with(LEGACY_URN_SCHEME) && !is_builtin_iri(iri);
    let uses_legacy = document.graph().iter().any(|t| {
        [t.subject.as_iri(), Some(t.predicate.as_str()), t.object.as_iri()]
            .into_iter()
            .flatten()
            .any(legacy)
    });
    if !uses_legacy {
        return document;
    }
    let rename = |iri: &str| match canonical_iri(iri) {
        Some(canonical) if legacy(iri) => canonical,
        _ => iri.to_owned(),
    };
    let rename_term = |term: &Term| match term {
        Term::Iri(iri) => Term::Iri(rename(iri)),
        other => other.clone(),
    };
    let graph: Graph = document
        .graph()
        .iter()
        .map(|t| Triple::new(rename_term(&t.subject), rename(&t.predicate), rename_term(&t.object)))
        .collect();
    document.with_graph(graph)
}

/// Merges the graphs of `documents` with the built-in definitions and
/// materializes every resource each document defines.
pub(crate) fn materialize(mut documents: Vec<Document>) -> Result<AspectModel, crate::LoadError> {
    let mut graph = Graph::new();
    for document in &documents {
        graph.merge(document.graph());
    }
    graph.merge(builtins::graph());

    let mut factory = ElementFactory::new(&graph);
    for (index, document) in documents.iter().enumerate() {
        factory.register_source(DocumentId(index), document.graph());
    }
    let mut partition = Vec::with_capacity(documents.len());
    for (index, document) in documents.iter().enumerate() {
        let mut elements = Vec::new();
        for iri in document.graph().typed_iris() {
            let id = factory.materialize(&Term::iri(iri))?;
            let owned = factory
                .arena()
                .get(id)
                .is_some_and(|e| e.base().source == Some(DocumentId(index)));
            if owned && !elements.contains(&id) {
                debug!(element = iri, "element materialized");
                elements.push(id);
            }
        }
        partition.push(elements);
    }
    let arena = factory.into_arena();
    for (document, elements) in documents.iter_mut().zip(partition) {
        document.attach_elements(elements);
    }
    info!(
        documents = documents.len(),
        elements = arena.len(),
        "resolution finished"
    );
    Ok(AspectModel::new(graph, documents, arena))
}
