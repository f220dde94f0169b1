//! Attribute lookup over the untyped graph.
//!
//! An attribute of a resource is not just what the resource asserts itself.
//! Two relations delegate lookup to another resource:
//!
//! - a property reference node (`[ samm:property :speed ; samm:optional true ]`)
//!   answers every attribute with the answer of `:speed`, and
//! - `samm:extends` appends the parent's values after the resource's own.
//!
//! Localized values are then reduced to the first one per locale, so a
//! locale asserted on the more specific resource hides the inherited one.
//!
//! # Entry Point
//!
//! ```
//! use aspect_loader::attributes::AttributeResolver;
//! use aspect_loader::parser::parse_turtle;
//!
//! let document = parse_turtle(
//!     r#"
//!     @prefix samm: <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
//!     @prefix : <urn:samm:com.example:1.0.0#> .
//!     :speed a samm:Property ; samm:preferredName "Speed"@en .
//!     "#,
//!     None,
//! )?;
//! let resolver = AttributeResolver::new(document.graph());
//! let speed = aspect_loader::graph::Term::iri("urn:samm:com.example:1.0.0#speed");
//! let names = resolver.values(&speed, samm_metamodel::model::iris::SAMM_PREFERRED_NAME)?;
//! assert_eq!(names.len(), 1);
//! # Ok::<(), aspect_loader::LoadError>(())
//! ```

use std::collections::HashSet;

use samm_metamodel::model::iris::{SAMM_EXTENDS, SAMM_PROPERTY_ATTR};

use crate::error::LoadError;
use crate::graph::{Graph, Term};

/// Reads attributes of graph resources, following `samm:extends` and
/// property references.
#[derive(Debug, Clone, Copy)]
pub struct AttributeResolver<'g> {
    graph: &'g Graph,
}

impl<'g> AttributeResolver<'g> {
    /// Creates a resolver over `graph`.
    #[must_use]
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// The underlying graph.
    #[must_use]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Target of a property reference node.
    #[must_use]
    pub fn property_reference(&self, resource: &Term) -> Option<&'g Term> {
        self.graph.object(resource, SAMM_PROPERTY_ATTR)
    }

    /// Parent named by `samm:extends`.
    #[must_use]
    pub fn extends(&self, resource: &Term) -> Option<&'g Term> {
        self.graph.object(resource, SAMM_EXTENDS)
    }

    /// Values `resource` asserts itself, RDF lists unrolled in place.
    #[must_use]
    pub fn direct_values(&self, resource: &Term, attribute: &str) -> Vec<&'g Term> {
        let mut values = Vec::new();
        for triple in self.graph.triples_about(resource) {
            if triple.predicate != attribute {
                continue;
            }
            match self.graph.list(&triple.object) {
                Some(items) => values.extend(items),
                None => values.push(&triple.object),
            }
        }
        values
    }

    /// Every value of `attribute` on `resource`, with delegation and
    /// per-locale de-duplication applied.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Cycle`] if the `samm:extends` or property
    /// reference chain loops.
    pub fn values(&self, resource: &Term, attribute: &str) -> Result<Vec<&'g Term>, LoadError> {
        let mut collected = Vec::new();
        for level in self.lookup_chain(resource, attribute)? {
            collected.extend(self.direct_values(&level, attribute));
        }

        let mut locales = HashSet::new();
        collected.retain(|term| match term.as_literal().and_then(|l| l.language.as_deref()) {
            Some(language) => locales.insert(language.to_ascii_lowercase()),
            None => true,
        });
        Ok(collected)
    }

    /// The resources consulted for `attribute`, most specific first: the
    /// resource or the target of its property reference, then its
    /// `samm:extends` ancestors.
    fn lookup_chain(&self, resource: &Term, attribute: &str) -> Result<Vec<Term>, LoadError> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = resource.clone();
        loop {
            if !visited.insert(current.clone()) {
                return Err(LoadError::Cycle {
                    resource: current.to_string(),
                });
            }
            if attribute != SAMM_PROPERTY_ATTR {
                if let Some(target) = self.property_reference(&current) {
                    current = target.clone();
                    continue;
                }
            }
            let parent = self.extends(&current).cloned();
            chain.push(current);
            match parent {
                Some(parent) => current = parent,
                None => return Ok(chain),
            }
        }
    }

    /// The value of `attribute` from the most specific resource of the
    /// lookup chain that asserts it. An inherited value is overridden, but
    /// two values asserted by the same resource are ambiguous.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::AmbiguousAttribute`] if that resource asserts
    /// several values and [`LoadError::Cycle`] if the chain loops.
    pub fn nearest_value(
        &self,
        resource: &Term,
        attribute: &str,
    ) -> Result<Option<&'g Term>, LoadError> {
        for level in self.lookup_chain(resource, attribute)? {
            match self.direct_values(&level, attribute).as_slice() {
                [] => {}
                [single] => return Ok(Some(*single)),
                several => {
                    return Err(LoadError::AmbiguousAttribute {
                        resource: level.to_string(),
                        attribute: attribute.to_owned(),
                        count: several.len(),
                    })
                }
            }
        }
        Ok(None)
    }

    /// The single value of `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingAttribute`] if there is none and
    /// [`LoadError::AmbiguousAttribute`] if there are several.
    pub fn value(&self, resource: &Term, attribute: &str) -> Result<&'g Term, LoadError> {
        self.optional_value(resource, attribute)?
            .ok_or_else(|| LoadError::missing(resource, attribute))
    }

    /// The value of `attribute`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::AmbiguousAttribute`] if there are several.
    pub fn optional_value(
        &self,
        resource: &Term,
        attribute: &str,
    ) -> Result<Option<&'g Term>, LoadError> {
        let values = self.values(resource, attribute)?;
        match values.as_slice() {
            [] => Ok(None),
            [single] => Ok(Some(*single)),
            _ => Err(LoadError::AmbiguousAttribute {
                resource: resource.to_string(),
                attribute: attribute.to_owned(),
                count: values.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_turtle;
    use samm_metamodel::model::iris::{
        SAMM_CHARACTERISTIC_ATTR, SAMM_DESCRIPTION, SAMM_OPTIONAL, SAMM_PREFERRED_NAME,
        SAMM_PROPERTIES, SAMM_SEE,
    };

    const MODEL: &str = r#"
        @prefix samm: <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
        @prefix : <urn:samm:com.example:1.0.0#> .

        :Parent a samm:AbstractEntity ;
            samm:preferredName "Parent"@en, "Elternteil"@de ;
            samm:see <https://example.com/a> ;
            samm:properties ( :a :b ) .

        :Child a samm:Entity ;
            samm:extends :Parent ;
            samm:preferredName "Child"@en ;
            samm:see <https://example.com/a> ;
            samm:properties ( :c ) .

        :speed a samm:Property ;
            samm:description "Speed"@en ;
            samm:characteristic :Speed .

        :Loop1 a samm:Entity ; samm:extends :Loop2 .
        :Loop2 a samm:Entity ; samm:extends :Loop1 .

        :Holder a samm:Entity ;
            samm:properties ( [ samm:property :speed ; samm:optional true ] ) .
    "#;

    fn iri(name: &str) -> Term {
        Term::iri(format!("urn:samm:com.example:1.0.0#{name}"))
    }

    #[test]
    fn specific_locale_wins_over_inherited() {
        let document = parse_turtle(MODEL, None).unwrap();
        let resolver = AttributeResolver::new(document.graph());
        let names = resolver.values(&iri("Child"), SAMM_PREFERRED_NAME).unwrap();
        assert_eq!(
            names,
            vec![
                &Term::lang_string("Child", "en"),
                &Term::lang_string("Elternteil", "de"),
            ]
        );
    }

    #[test]
    fn non_localized_values_are_kept() {
        let document = parse_turtle(MODEL, None).unwrap();
        let resolver = AttributeResolver::new(document.graph());
        assert_eq!(resolver.values(&iri("Child"), SAMM_SEE).unwrap().len(), 2);
    }

    #[test]
    fn lists_unroll_before_inherited_values() {
        let document = parse_turtle(MODEL, None).unwrap();
        let resolver = AttributeResolver::new(document.graph());
        let properties = resolver.values(&iri("Child"), SAMM_PROPERTIES).unwrap();
        assert_eq!(properties, vec![&iri("c"), &iri("a"), &iri("b")]);
        assert_eq!(resolver.direct_values(&iri("Child"), SAMM_PROPERTIES), vec![&iri("c")]);
    }

    #[test]
    fn property_references_delegate_entirely() {
        let document = parse_turtle(MODEL, None).unwrap();
        let resolver = AttributeResolver::new(document.graph());
        let node = resolver.direct_values(&iri("Holder"), SAMM_PROPERTIES)[0].clone();
        assert_eq!(resolver.property_reference(&node), Some(&iri("speed")));
        assert_eq!(
            resolver.value(&node, SAMM_CHARACTERISTIC_ATTR).unwrap(),
            &iri("Speed")
        );
        assert!(resolver.optional_value(&node, SAMM_OPTIONAL).unwrap().is_none());
        assert_eq!(resolver.direct_values(&node, SAMM_OPTIONAL).len(), 1);
        assert_eq!(resolver.values(&node, SAMM_DESCRIPTION).unwrap().len(), 1);
    }

    #[test]
    fn cardinality_errors() {
        let document = parse_turtle(MODEL, None).unwrap();
        let resolver = AttributeResolver::new(document.graph());
        assert!(matches!(
            resolver.value(&iri("Parent"), SAMM_PREFERRED_NAME),
            Err(LoadError::AmbiguousAttribute { count: 2, .. })
        ));
        assert!(matches!(
            resolver.value(&iri("speed"), SAMM_PREFERRED_NAME),
            Err(LoadError::MissingAttribute { .. })
        ));
    }

    #[test]
    fn extends_cycles_are_reported() {
        let document = parse_turtle(MODEL, None).unwrap();
        let resolver = AttributeResolver::new(document.graph());
        assert!(matches!(
            resolver.values(&iri("Loop1"), SAMM_PREFERRED_NAME),
            Err(LoadError::Cycle { .. })
        ));
    }

    #[test]
    fn nearest_value_overrides_inherited_but_not_own_duplicates() {
        let source = r#"
            @prefix samm: <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
            @prefix : <urn:samm:com.example:1.0.0#> .
            :base a samm:AbstractProperty ; samm:characteristic :Inherited .
            :derived a samm:Property ; samm:extends :base ; samm:characteristic :Own .
            :plain a samm:Property ; samm:extends :base .
            :twice a samm:Property ; samm:characteristic :First, :Second .
        "#;
        let document = parse_turtle(source, None).unwrap();
        let resolver = AttributeResolver::new(document.graph());
        let nearest = |name| resolver.nearest_value(&iri(name), SAMM_CHARACTERISTIC_ATTR);
        assert_eq!(nearest("derived").unwrap(), Some(&iri("Own")));
        assert_eq!(nearest("plain").unwrap(), Some(&iri("Inherited")));
        assert!(matches!(
            nearest("twice"),
            Err(LoadError::AmbiguousAttribute { count: 2, .. })
        ));
        assert_eq!(resolver.values(&iri("derived"), SAMM_CHARACTERISTIC_ATTR).unwrap().len(), 2);
    }
}
