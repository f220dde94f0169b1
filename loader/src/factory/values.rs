use samm_metamodel::model::iris::{SAMM_CHARACTERISTIC_ATTR, SAMM_VALUE_ATTR};

use super::{ElementFactory, Expected};
use crate::error::LoadError;
use crate::graph::Term;
use crate::kind::ElementKind;
use crate::model::{
    BaseAttributes, CharacteristicKind, CollectionType, CollectionValue, ElementId,
    EntityInstance, ModelElement, ScalarValue, Type, Value,
};
use crate::urn::AspectModelUrn;

const MAX_DEPTH: usize = 64;

impl ElementFactory<'_> {
    /// Builds the value held by `term`.
    ///
    /// `context` is the characteristic describing the value, if known, and
    /// `expected` the type the value should have.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidLiteral`] for literals that do not parse
    /// and [`LoadError::InvalidValue`] for nodes that are no value at all.
    pub fn value(
        &mut self,
        term: &Term,
        context: Option<ElementId>,
        expected: Option<&Type>,
    ) -> Result<Value, LoadError> {
        self.value_at(term, context, expected, 0)
    }

    fn value_at(
        &mut self,
        term: &Term,
        context: Option<ElementId>,
        expected: Option<&Type>,
        depth: usize,
    ) -> Result<Value, LoadError> {
        if depth > MAX_DEPTH {
            return Err(LoadError::InvalidValue {
                resource: term.to_string(),
                reason: "values nest too deeply".to_owned(),
            });
        }
        let graph = self.resolver().graph();

        if let Term::Literal(literal) = term {
            return Ok(Value::Scalar(ScalarValue::from_literal(literal)?));
        }

        if let Some(items) = graph.list(term) {
            let collection_type = context
                .and_then(|c| self.collection_context(c))
                .map_or(CollectionType::Set, |(tag, _)| tag);
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                values.push(self.value_at(item, context, expected, depth + 1)?);
            }
            return Ok(Value::Collection(CollectionValue::new(
                collection_type,
                expected.cloned(),
                values,
            )));
        }

        if let Some(Type::Entity(entity)) = expected {
            return Ok(Value::Instance(self.entity_instance(term, Some(*entity))?));
        }

        let is_value_wrapper = graph
            .types_of(term)
            .any(|t| ElementKind::from_type_iri(t) == Some(ElementKind::Value));
        match term {
            Term::Iri(iri) if !is_value_wrapper => {
                return Ok(Value::Scalar(ScalarValue::resource(
                    iri,
                    expected.and_then(Type::datatype),
                )));
            }
            _ if is_value_wrapper => {
                return match self.resolver().value(term, SAMM_VALUE_ATTR)? {
                    Term::Literal(literal) => Ok(Value::Scalar(ScalarValue::from_literal(literal)?)),
                    _ => Err(LoadError::invalid(term, SAMM_VALUE_ATTR, "expected a literal")),
                };
            }
            _ => {}
        }

        if let Some((collection_type, element)) = context.and_then(|c| self.collection_context(c)) {
            let element_type = element
                .and_then(|e| self.arena.effective_data_type(e))
                .or(expected)
                .cloned();
            let value = self.value_at(term, element, element_type.as_ref(), depth + 1)?;
            return Ok(Value::Collection(CollectionValue::new(
                collection_type,
                element_type,
                vec![value],
            )));
        }

        Ok(Value::Instance(self.entity_instance(term, None)?))
    }

    /// Collection tag and element characteristic of `characteristic`,
    /// looking through Traits.
    fn collection_context(
        &self,
        characteristic: ElementId,
    ) -> Option<(CollectionType, Option<ElementId>)> {
        let mut current = characteristic;
        for _ in 0..MAX_DEPTH {
            let kind = self.arena.kind_of(current)?;
            if kind == ElementKind::Trait {
                current = match &self.arena.characteristic(current)?.kind {
                    CharacteristicKind::Trait { base, .. } => *base,
                    _ => return None,
                };
                continue;
            }
            let tag = CollectionType::for_kind(kind)?;
            let element = self
                .arena
                .characteristic(current)
                .and_then(|c| c.kind.element_characteristic());
            return Some((tag, element));
        }
        None
    }

    /// Materializes `term` as an instance of `expected`, or of the Entity it
    /// asserts as its type, which must then be a subtype of `expected`.
    pub(super) fn entity_instance(
        &mut self,
        term: &Term,
        expected: Option<ElementId>,
    ) -> Result<ElementId, LoadError> {
        if let Some(id) = self.cached(term) {
            return match self.arena.kind_of(id) {
                Some(ElementKind::EntityInstance) => Ok(id),
                actual => Err(LoadError::UnexpectedKind {
                    resource: term.to_string(),
                    expected: "an Entity instance".to_owned(),
                    actual: actual.map_or_else(|| "unknown".to_owned(), |k| k.to_string()),
                }),
            };
        }
        let id = self.arena.reserve(ElementKind::EntityInstance, term.to_string());
        self.cache.insert(term.clone(), id);
        let instance = self.instance_body(term, expected)?;
        self.arena.fill(id, ModelElement::EntityInstance(instance));
        Ok(id)
    }

    /// Reads one value per property of the instance's Entity.
    pub(super) fn instance_body(
        &mut self,
        term: &Term,
        expected: Option<ElementId>,
    ) -> Result<EntityInstance, LoadError> {
        let invalid = |reason: String| LoadError::InvalidValue {
            resource: term.to_string(),
            reason,
        };
        let graph = self.resolver().graph();

        let mut asserted = None;
        for type_iri in graph.types_of(term) {
            if ElementKind::from_type_iri(type_iri).is_some() {
                continue;
            }
            let candidate = Term::iri(type_iri);
            if self.determine_kind(&candidate).is_some_and(ElementKind::is_entity) {
                asserted = Some(self.materialize_as(&candidate, Expected::Entity)?);
                break;
            }
        }
        let entity = match (asserted, expected) {
            (Some(actual), _) => actual,
            (None, Some(expected)) => expected,
            (None, None) => return Err(invalid("no Entity type is asserted".to_owned())),
        };
        if let ModelElement::AbstractEntity(_) = self.arena.require(entity)? {
            return Err(invalid("an abstract Entity cannot be instantiated".to_owned()));
        }
        if let Some(expected) = expected {
            if !self.arena.is_entity_subtype_of(entity, expected) {
                let label = self.arena.require(expected)?.label();
                return Err(invalid(format!("its Entity does not extend {label}")));
            }
        }

        let mut assertions = Vec::new();
        for property in self.arena.all_properties(entity).unwrap_or_default() {
            let (optional, characteristic) = match self.arena.require(property)? {
                ModelElement::Property(p) => (p.optional, p.characteristic),
                _ => continue,
            };
            let urn = self.arena.property_urn(property).cloned().ok_or_else(|| {
                invalid("the Entity lists a property without identifier".to_owned())
            })?;
            let (canonical, legacy) = (urn.to_iri(), urn.legacy_spelling());
            let objects: Vec<&Term> = graph
                .triples_about(term)
                .filter(|t| t.predicate == canonical || t.predicate == legacy)
                .map(|t| &t.object)
                .collect();
            if objects.is_empty() {
                if optional {
                    continue;
                }
                return Err(LoadError::MissingPropertyValue {
                    resource: term.to_string(),
                    property: canonical,
                });
            }
            let characteristic = characteristic
                .ok_or_else(|| LoadError::missing(&canonical, SAMM_CHARACTERISTIC_ATTR))?;
            let expected_type = self.arena.effective_data_type(characteristic).cloned();
            let value = match objects.as_slice() {
                [single] => self.value(single, Some(characteristic), expected_type.as_ref())?,
                several => {
                    let (collection_type, element) = self
                        .collection_context(characteristic)
                        .ok_or_else(|| LoadError::AmbiguousAttribute {
                            resource: term.to_string(),
                            attribute: canonical.clone(),
                            count: several.len(),
                        })?;
                    let mut values = Vec::with_capacity(several.len());
                    for object in several {
                        values.push(self.value(object, element, expected_type.as_ref())?);
                    }
                    Value::Collection(CollectionValue::new(collection_type, expected_type, values))
                }
            };
            assertions.push((property, value));
        }

        Ok(EntityInstance {
            base: BaseAttributes {
                urn: term.as_iri().and_then(|iri| AspectModelUrn::parse(iri).ok()),
                source: self.sources.get(term).copied(),
                ..BaseAttributes::default()
            },
            entity,
            assertions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::parser::parse_turtle;

    const MODEL: &str = r#"
        @prefix samm: <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
        @prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
        @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
        @prefix : <urn:samm:com.example:1.0.0#> .

        :Shape a samm:AbstractEntity ; samm:properties ( :label ) .
        :Circle a samm:Entity ; samm:extends :Shape ;
            samm:properties ( :radius [ samm:property :note ; samm:optional true ] ) .
        :label a samm:Property ; samm:characteristic samm-c:Text .
        :radius a samm:Property ; samm:characteristic :Radius .
        :note a samm:Property ; samm:characteristic samm-c:Text .
        :Radius a samm:Characteristic ; samm:dataType xsd:decimal .
        :Numbers a samm-c:List ; samm:dataType xsd:integer .
        :Shapes a samm-c:Set ; samm:dataType :Shape .

        :unit a :Circle ; :label "unit" ; :radius "1.0"^^xsd:decimal .
        :partial a :Circle ; :radius "2.0"^^xsd:decimal .
        :wrapped a samm:Value ; samm:value "42"^^xsd:integer .
        :listHolder :numbers ( 1 2 3 ) .
    "#;

    fn graph() -> Graph {
        let mut graph = parse_turtle(MODEL, None).unwrap().graph().clone();
        graph.merge(crate::builtins::graph());
        graph
    }

    fn iri(name: &str) -> Term {
        Term::iri(format!("urn:samm:com.example:1.0.0#{name}"))
    }

    #[test]
    fn instances_of_concrete_entities_fill_abstract_slots() {
        let graph = graph();
        let mut factory = ElementFactory::new(&graph);
        let shape = factory.materialize(&iri("Shape")).unwrap();
        let value = factory.value(&iri("unit"), None, Some(&Type::Entity(shape))).unwrap();
        let Value::Instance(id) = value else {
            panic!("expected an instance");
        };
        let arena = factory.arena();
        let instance = arena.get(id).unwrap().as_entity_instance().unwrap();
        assert_eq!(instance.assertions.len(), 2);
        assert!(arena.is_entity_subtype_of(instance.entity, shape));
    }

    #[test]
    fn mandatory_properties_must_be_asserted() {
        let graph = graph();
        let mut factory = ElementFactory::new(&graph);
        match factory.materialize(&iri("partial")) {
            Err(LoadError::MissingPropertyValue { property, .. }) => {
                assert_eq!(property, "urn:samm:com.example:1.0.0#label");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn lists_take_the_collection_tag_of_their_characteristic() {
        let graph = graph();
        let mut factory = ElementFactory::new(&graph);
        let numbers = factory.materialize(&iri("Numbers")).unwrap();
        let head = graph
            .object(&iri("listHolder"), "urn:samm:com.example:1.0.0#numbers")
            .unwrap();
        let integer = Type::Scalar(samm_metamodel::model::iris::XSD_INTEGER.into());
        let with_context = factory.value(head, Some(numbers), Some(&integer)).unwrap();
        assert_eq!(
            with_context.as_collection().unwrap().collection_type,
            CollectionType::List
        );
        let without = factory.value(head, None, Some(&integer)).unwrap();
        let collection = without.as_collection().unwrap();
        assert_eq!(collection.collection_type, CollectionType::Set);
        assert_eq!(collection.len(), 3);
        assert!(factory.arena().conforms(&with_context, numbers));
    }

    #[test]
    fn value_wrappers_and_named_resources() {
        let graph = graph();
        let mut factory = ElementFactory::new(&graph);
        let wrapped = factory.value(&iri("wrapped"), None, None).unwrap();
        assert_eq!(wrapped.as_scalar().unwrap().lexical(), "42");
        let named = factory.value(&iri("Radius"), None, None).unwrap();
        assert_eq!(
            named.as_scalar().unwrap().lexical(),
            "urn:samm:com.example:1.0.0#Radius"
        );
    }

    #[test]
    fn abstract_entities_cannot_be_instantiated() {
        let graph = graph();
        let mut factory = ElementFactory::new(&graph);
        let shape = factory.materialize(&iri("Shape")).unwrap();
        assert!(matches!(
            factory.value(&Term::Blank("nothing".into()), None, Some(&Type::Entity(shape))),
            Err(LoadError::InvalidValue { .. })
        ));
    }
}
