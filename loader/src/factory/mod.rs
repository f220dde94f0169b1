//! Materialization of graph resources into model elements.
//!
//! [`ElementFactory::materialize`] determines the kind of a resource, then
//! builds it with the instantiator for that kind. Every resource maps to
//! exactly one element: the factory reserves the element's arena slot and
//! records it in its cache before reading anything the element refers to,
//! so a resource reached again while it is still being built (an Entity
//! with a Property typed by the Entity itself) resolves to the reserved id
//! instead of recursing.
//!
//! # Entry Point
//!
//! ```
//! use aspect_loader::factory::ElementFactory;
//! use aspect_loader::graph::Term;
//! use aspect_loader::parser::parse_turtle;
//!
//! let document = parse_turtle(
//!     r#"
//!     @prefix samm: <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
//!     @prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
//!     @prefix : <urn:samm:com.example:1.0.0#> .
//!     :name a samm:Property ; samm:characteristic samm-c:Text .
//!     "#,
//!     None,
//! )?;
//! let mut graph = document.graph().clone();
//! graph.merge(aspect_loader::builtins::graph());
//! let mut factory = ElementFactory::new(&graph);
//! let name = factory.materialize(&Term::iri("urn:samm:com.example:1.0.0#name"))?;
//! assert!(factory.arena().property(name).is_some());
//! # Ok::<(), aspect_loader::LoadError>(())
//! ```

mod instantiators;
mod values;

use std::collections::{HashMap, HashSet};

use samm_metamodel::model::iris::{
    RDFS_SUB_CLASS_OF, SAMM_DESCRIPTION, SAMM_EXAMPLE_VALUE, SAMM_PREFERRED_NAME, SAMM_SEE,
};
use samm_metamodel::model::local_name;
use tracing::trace;

use crate::attributes::AttributeResolver;
use crate::document::DocumentId;
use crate::error::LoadError;
use crate::graph::{Graph, Term};
use crate::kind::ElementKind;
use crate::model::{
    BaseAttributes, ElementArena, ElementId, ModelElement, QuantityKind, ScalarValue, Unit,
};
use crate::urn::{is_builtin_iri, AspectModelUrn};

/// The family of elements a reference must point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expected {
    Entity,
    Property,
    Characteristic,
    Constraint,
    Unit,
    Operation,
    Event,
}

impl Expected {
    fn admits(self, kind: ElementKind) -> bool {
        match self {
            Self::Entity => kind.is_entity(),
            Self::Property => kind.is_property(),
            Self::Characteristic => kind.is_characteristic() && !kind.is_constraint(),
            Self::Constraint => kind.is_constraint(),
            Self::Unit => kind == ElementKind::Unit,
            Self::Operation => kind == ElementKind::Operation,
            Self::Event => kind == ElementKind::Event,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Entity => "an Entity",
            Self::Property => "a Property",
            Self::Characteristic => "a Characteristic",
            Self::Constraint => "a Constraint",
            Self::Unit => "a Unit",
            Self::Operation => "an Operation",
            Self::Event => "an Event",
        }
    }
}

/// Turns graph resources into elements of an [`ElementArena`].
#[derive(Debug)]
pub struct ElementFactory<'g> {
    resolver: AttributeResolver<'g>,
    arena: ElementArena,
    cache: HashMap<Term, ElementId>,
    catalog: HashMap<String, ElementId>,
    sources: HashMap<Term, DocumentId>,
}

impl<'g> ElementFactory<'g> {
    /// Creates a factory reading `graph`, which should already contain the
    /// built-in definitions.
    #[must_use]
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            resolver: AttributeResolver::new(graph),
            arena: ElementArena::new(),
            cache: HashMap::new(),
            catalog: HashMap::new(),
            sources: HashMap::new(),
        }
    }

    /// Records `document` as the source of every subject of `graph`. The
    /// first document registered for a subject wins.
    pub fn register_source(&mut self, document: DocumentId, graph: &Graph) {
        for subject in graph.subjects() {
            self.sources.entry(subject.clone()).or_insert(document);
        }
    }

    /// Elements built so far.
    #[must_use]
    pub fn arena(&self) -> &ElementArena {
        &self.arena
    }

    /// The element already built for `resource`.
    #[must_use]
    pub fn cached(&self, resource: &Term) -> Option<ElementId> {
        self.cache.get(resource).copied()
    }

    /// Consumes the factory, returning its elements.
    #[must_use]
    pub fn into_arena(self) -> ElementArena {
        self.arena
    }

    /// Materializes `resource`, or returns the element built for it earlier.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnknownType`] if no kind can be determined for
    /// the resource, and any error raised while reading its attributes or the
    /// elements it refers to.
    pub fn materialize(&mut self, resource: &Term) -> Result<ElementId, LoadError> {
        if let Some(id) = self.cached(resource) {
            trace!(%resource, "element cache hit");
            return Ok(id);
        }
        let kind = self
            .determine_kind(resource)
            .ok_or_else(|| LoadError::UnknownType {
                resource: resource.to_string(),
            })?;
        self.instantiate(resource, kind)
    }

    /// Materializes `resource` and checks it belongs to `expected`.
    pub(crate) fn materialize_as(
        &mut self,
        resource: &Term,
        expected: Expected,
    ) -> Result<ElementId, LoadError> {
        let id = self.materialize(resource)?;
        match self.arena.kind_of(id) {
            Some(kind) if expected.admits(kind) => Ok(id),
            actual => Err(LoadError::UnexpectedKind {
                resource: resource.to_string(),
                expected: expected.name().to_owned(),
                actual: actual.map_or_else(|| "unknown".to_owned(), |k| k.to_string()),
            }),
        }
    }

    /// The kind `resource` materializes to, if one can be determined.
    ///
    /// Tried in order: an asserted meta-model type, an asserted user Entity
    /// type (making the resource an instance), the target of a property
    /// reference, the `rdfs:subClassOf` parent and the `samm:extends` parent.
    #[must_use]
    pub fn determine_kind(&self, resource: &Term) -> Option<ElementKind> {
        self.kind_of(resource, &mut HashSet::new())
    }

    fn kind_of(&self, resource: &Term, visited: &mut HashSet<Term>) -> Option<ElementKind> {
        if !resource.is_resource() || !visited.insert(resource.clone()) {
            return None;
        }
        if let Some(kind) = self.cached(resource).and_then(|id| self.arena.kind_of(id)) {
            return Some(kind);
        }
        let graph = self.resolver.graph();
        let types: Vec<&str> = graph.types_of(resource).collect();
        if let Some(kind) = types.iter().find_map(|t| ElementKind::from_type_iri(t)) {
            return Some(kind);
        }
        let instance_of_entity = types.iter().any(|t| {
            self.kind_of(&Term::iri(*t), visited)
                .is_some_and(ElementKind::is_entity)
        });
        if instance_of_entity {
            return Some(ElementKind::EntityInstance);
        }
        if let Some(target) = self.resolver.property_reference(resource) {
            return self.kind_of(target, visited);
        }
        if let Some(parent) = graph.object(resource, RDFS_SUB_CLASS_OF) {
            return self.kind_of(parent, visited);
        }
        let parent = self.resolver.extends(resource)?;
        self.kind_of(parent, visited).map(|kind| match kind {
            ElementKind::AbstractProperty => ElementKind::Property,
            ElementKind::AbstractEntity => ElementKind::Entity,
            other => other,
        })
    }

    fn instantiate(&mut self, resource: &Term, kind: ElementKind) -> Result<ElementId, LoadError> {
        match kind {
            ElementKind::Unit | ElementKind::QuantityKind => {
                if let Some(id) = self.from_catalog(resource, kind) {
                    self.cache.insert(resource.clone(), id);
                    return Ok(id);
                }
            }
            ElementKind::EntityInstance => return self.entity_instance(resource, None),
            _ => {}
        }
        let id = self.arena.reserve(kind, resource.to_string());
        self.cache.insert(resource.clone(), id);
        let element = self.build(resource, kind)?;
        self.arena.fill(id, element);
        Ok(id)
    }

    /// Shared catalog element for a Unit or QuantityKind of the `unit:`
    /// namespace. Units defined in user namespaces are read from the graph.
    fn from_catalog(&mut self, resource: &Term, kind: ElementKind) -> Option<ElementId> {
        let iri = resource.as_iri().filter(|iri| is_builtin_iri(iri))?;
        let name = local_name(iri);
        let key = format!("{kind}:{name}");
        if let Some(id) = self.catalog.get(&key) {
            return Some(*id);
        }
        let element = match kind {
            ElementKind::Unit => ModelElement::Unit(Unit::from_catalog(name)?),
            _ => ModelElement::QuantityKind(QuantityKind::from_catalog(name)?),
        };
        let id = self.arena.alloc(element);
        self.catalog.insert(key, id);
        Some(id)
    }

    /// Attributes common to every element kind.
    fn base_attributes(&self, resource: &Term) -> Result<BaseAttributes, LoadError> {
        let mut base = self.identity(resource)?;
        for (attribute, target) in [
            (SAMM_PREFERRED_NAME, &mut base.preferred_names),
            (SAMM_DESCRIPTION, &mut base.descriptions),
        ] {
            for term in self.resolver.values(resource, attribute)? {
                let text = term
                    .as_literal()
                    .map(ScalarValue::from_literal)
                    .transpose()?
                    .and_then(|v| v.locale().map(|l| (l.to_owned(), v.lexical().to_owned())));
                let (locale, text) =
                    text.ok_or_else(|| LoadError::invalid(resource, attribute, "expected a language-tagged string"))?;
                target.insert(locale, text);
            }
        }
        for term in self.resolver.values(resource, SAMM_SEE)? {
            let reference = match term {
                Term::Iri(iri) => iri.clone(),
                Term::Literal(literal) => literal.lexical.clone(),
                Term::Blank(_) => {
                    return Err(LoadError::invalid(resource, SAMM_SEE, "expected a URI"));
                }
            };
            base.see.push(reference);
        }
        base.example_value = match self.resolver.optional_value(resource, SAMM_EXAMPLE_VALUE)? {
            Some(Term::Literal(literal)) => Some(ScalarValue::from_literal(literal)?),
            Some(Term::Iri(iri)) => Some(ScalarValue::resource(iri, None)),
            Some(Term::Blank(_)) => {
                return Err(LoadError::invalid(resource, SAMM_EXAMPLE_VALUE, "expected a scalar value"));
            }
            None => None,
        };
        Ok(base)
    }

    /// Identifier and source document, without any attribute.
    fn identity(&self, resource: &Term) -> Result<BaseAttributes, LoadError> {
        let urn = match resource {
            Term::Iri(iri) => Some(AspectModelUrn::parse(iri)?),
            _ => None,
        };
        Ok(BaseAttributes {
            urn,
            source: self.sources.get(resource).copied(),
            ..BaseAttributes::default()
        })
    }

    fn resolver(&self) -> AttributeResolver<'g> {
        self.resolver
    }
}
