use std::str::FromStr;

use samm_metamodel::model::iris::{
    SAMM_CHARACTERISTIC_ATTR, SAMM_C_BASE_CHARACTERISTIC, SAMM_C_CONSTRAINT,
    SAMM_C_DECONSTRUCTION_RULE, SAMM_C_DEFAULT_VALUE, SAMM_C_ELEMENTS,
    SAMM_C_ELEMENT_CHARACTERISTIC, SAMM_C_INTEGER, SAMM_C_LANGUAGE_CODE, SAMM_C_LEFT,
    SAMM_C_LOCALE_CODE, SAMM_C_LOWER_BOUND_DEFINITION, SAMM_C_MAX_VALUE, SAMM_C_MIN_VALUE,
    SAMM_C_RIGHT, SAMM_C_SCALE, SAMM_C_UNIT, SAMM_C_UPPER_BOUND_DEFINITION, SAMM_C_VALUES,
    SAMM_DATA_TYPE, SAMM_EVENTS, SAMM_INPUT, SAMM_NOT_IN_PAYLOAD, SAMM_OPERATIONS,
    SAMM_OPTIONAL, SAMM_OUTPUT, SAMM_PARAMETERS, SAMM_PAYLOAD_NAME, SAMM_PROPERTIES,
    SAMM_VALUE_ATTR, UNIT_CODE, UNIT_CONVERSION_FACTOR, UNIT_QUANTITY_KIND_ATTR,
    UNIT_REFERENCE_UNIT, UNIT_SYMBOL,
};
use samm_metamodel::model::local_name;
use samm_metamodel::MetaModel;

use super::{ElementFactory, Expected};
use crate::error::LoadError;
use crate::graph::Term;
use crate::kind::ElementKind;
use crate::model::{
    Aspect, BaseAttributes, BoundDefinition, Characteristic, CharacteristicKind, CollectionType,
    Constraint, ConstraintKind, ElementId, Entity, Event, ModelElement, Operation, Property,
    QuantityKind, ScalarValue, StructuredElement, Type, Unit, Value, ValueElement,
};

impl ElementFactory<'_> {
    /// Reads the element of `kind` at `resource`. The caller has reserved
    /// its slot.
    pub(super) fn build(
        &mut self,
        resource: &Term,
        kind: ElementKind,
    ) -> Result<ModelElement, LoadError> {
        let base = match kind {
            ElementKind::EntityInstance => BaseAttributes::default(),
            _ => self.base_attributes(resource)?,
        };
        Ok(match kind {
            ElementKind::Aspect => ModelElement::Aspect(self.aspect(resource, base)?),
            ElementKind::Entity => ModelElement::Entity(self.entity(resource, base)?),
            ElementKind::AbstractEntity => {
                ModelElement::AbstractEntity(self.entity(resource, base)?)
            }
            ElementKind::Property => ModelElement::Property(self.property(resource, base, false)?),
            ElementKind::AbstractProperty => {
                ModelElement::AbstractProperty(self.property(resource, base, true)?)
            }
            ElementKind::Operation => ModelElement::Operation(Operation {
                input: self.references(resource, SAMM_INPUT, Expected::Property)?,
                output: self.optional_reference(resource, SAMM_OUTPUT, Expected::Property)?,
                base,
            }),
            ElementKind::Event => ModelElement::Event(Event {
                parameters: self.references(resource, SAMM_PARAMETERS, Expected::Property)?,
                base,
            }),
            ElementKind::Unit => ModelElement::Unit(self.unit(resource, base)?),
            ElementKind::QuantityKind => ModelElement::QuantityKind(QuantityKind { base }),
            ElementKind::Value => {
                let value = match self.resolver().value(resource, SAMM_VALUE_ATTR)? {
                    Term::Literal(literal) => ScalarValue::from_literal(literal)?,
                    _ => {
                        return Err(LoadError::invalid(resource, SAMM_VALUE_ATTR, "expected a literal"))
                    }
                };
                ModelElement::ScalarValue(ValueElement {
                    base,
                    value: Value::Scalar(value),
                })
            }
            ElementKind::EntityInstance => {
                ModelElement::EntityInstance(self.instance_body(resource, None)?)
            }
            kind if kind.is_constraint() => {
                ModelElement::Constraint(self.constraint(resource, kind, base)?)
            }
            kind => ModelElement::Characteristic(self.characteristic(resource, kind, base)?),
        })
    }

    fn aspect(&mut self, resource: &Term, base: BaseAttributes) -> Result<Aspect, LoadError> {
        Ok(Aspect {
            properties: self.references(resource, SAMM_PROPERTIES, Expected::Property)?,
            operations: self.references(resource, SAMM_OPERATIONS, Expected::Operation)?,
            events: self.references(resource, SAMM_EVENTS, Expected::Event)?,
            base,
        })
    }

    fn entity(&mut self, resource: &Term, base: BaseAttributes) -> Result<Entity, LoadError> {
        let resolver = self.resolver();
        let mut properties = Vec::new();
        for term in resolver.direct_values(resource, SAMM_PROPERTIES) {
            properties.push(self.materialize_as(term, Expected::Property)?);
        }
        let extends = match resolver.extends(resource) {
            Some(parent) => Some(self.materialize_as(parent, Expected::Entity)?),
            None => None,
        };
        Ok(Entity {
            base,
            properties,
            extends,
        })
    }

    fn property(
        &mut self,
        resource: &Term,
        base: BaseAttributes,
        is_abstract: bool,
    ) -> Result<Property, LoadError> {
        let resolver = self.resolver();
        let reference = match resolver.property_reference(resource) {
            Some(target) => Some(self.materialize_as(target, Expected::Property)?),
            None => None,
        };
        let extends = match resolver.extends(resource) {
            Some(parent) => Some(self.materialize_as(parent, Expected::Property)?),
            None => None,
        };
        // An own characteristic overrides an inherited one.
        let characteristic = match resolver.nearest_value(resource, SAMM_CHARACTERISTIC_ATTR)? {
            Some(term) => Some(self.materialize_as(term, Expected::Characteristic)?),
            None => None,
        };
        if !is_abstract && characteristic.is_none() {
            return Err(LoadError::missing(resource, SAMM_CHARACTERISTIC_ATTR));
        }
        let payload_name = match resolver.direct_values(resource, SAMM_PAYLOAD_NAME).first() {
            Some(Term::Literal(literal)) => Some(literal.lexical.clone()),
            Some(_) => {
                return Err(LoadError::invalid(resource, SAMM_PAYLOAD_NAME, "expected a string"))
            }
            None => None,
        };
        Ok(Property {
            base,
            characteristic,
            optional: self.flag(resource, SAMM_OPTIONAL)?,
            not_in_payload: self.flag(resource, SAMM_NOT_IN_PAYLOAD)?,
            payload_name,
            extends,
            reference,
        })
    }

    fn unit(&mut self, resource: &Term, base: BaseAttributes) -> Result<Unit, LoadError> {
        let resolver = self.resolver();
        let reference_unit = resolver
            .optional_value(resource, UNIT_REFERENCE_UNIT)?
            .and_then(Term::as_iri)
            .map(|iri| local_name(iri).to_owned());
        let quantity_kinds = resolver
            .values(resource, UNIT_QUANTITY_KIND_ATTR)?
            .into_iter()
            .filter_map(Term::as_iri)
            .map(|iri| local_name(iri).to_owned())
            .collect();
        Ok(Unit {
            symbol: self.optional_string(resource, UNIT_SYMBOL)?,
            code: self.optional_string(resource, UNIT_CODE)?,
            conversion_factor: self.optional_string(resource, UNIT_CONVERSION_FACTOR)?,
            reference_unit,
            quantity_kinds,
            base,
        })
    }

    fn characteristic(
        &mut self,
        resource: &Term,
        kind: ElementKind,
        base: BaseAttributes,
    ) -> Result<Characteristic, LoadError> {
        let data_type = match self.resolver().optional_value(resource, SAMM_DATA_TYPE)? {
            Some(term) => Some(self.data_type(term)?),
            None => None,
        };
        let untyped = matches!(kind, ElementKind::Trait | ElementKind::Either) || kind.is_collection();
        if !untyped && data_type.is_none() {
            return Err(LoadError::missing(resource, SAMM_DATA_TYPE));
        }

        let subtype = match kind {
            ElementKind::Trait => {
                if data_type.is_some() {
                    return Err(LoadError::invalid(
                        resource,
                        SAMM_DATA_TYPE,
                        "a Trait takes its data type from its base characteristic",
                    ));
                }
                CharacteristicKind::Trait {
                    base: self.reference(resource, SAMM_C_BASE_CHARACTERISTIC, Expected::Characteristic)?,
                    constraints: self.references(resource, SAMM_C_CONSTRAINT, Expected::Constraint)?,
                }
            }
            kind if kind.is_collection() => {
                let element_characteristic = self.optional_reference(
                    resource,
                    SAMM_C_ELEMENT_CHARACTERISTIC,
                    Expected::Characteristic,
                )?;
                match (&data_type, element_characteristic) {
                    (Some(_), Some(_)) => {
                        return Err(LoadError::invalid(
                            resource,
                            SAMM_C_ELEMENT_CHARACTERISTIC,
                            "a collection takes either a data type or an element characteristic, not both",
                        ))
                    }
                    (None, None) => return Err(LoadError::missing(resource, SAMM_DATA_TYPE)),
                    _ => {}
                }
                match kind {
                    ElementKind::TimeSeries => CharacteristicKind::TimeSeries {
                        element_characteristic,
                    },
                    _ => CharacteristicKind::Collection {
                        collection_type: CollectionType::for_kind(kind)
                            .unwrap_or(CollectionType::Collection),
                        element_characteristic,
                    },
                }
            }
            ElementKind::Enumeration => CharacteristicKind::Enumeration {
                values: self.enumeration_values(resource, data_type.as_ref())?,
            },
            ElementKind::State => {
                let values = self.enumeration_values(resource, data_type.as_ref())?;
                let default_term = self.resolver().value(resource, SAMM_C_DEFAULT_VALUE)?;
                let default = self.value(default_term, None, data_type.as_ref())?;
                if !values.contains(&default) {
                    return Err(LoadError::invalid(
                        resource,
                        SAMM_C_DEFAULT_VALUE,
                        "the default value is not one of the values",
                    ));
                }
                CharacteristicKind::State { values, default }
            }
            ElementKind::Measurement => CharacteristicKind::Measurement {
                unit: self.reference(resource, SAMM_C_UNIT, Expected::Unit)?,
            },
            ElementKind::Quantifiable => CharacteristicKind::Quantifiable {
                unit: self.optional_reference(resource, SAMM_C_UNIT, Expected::Unit)?,
            },
            ElementKind::Duration => CharacteristicKind::Duration {
                unit: self.reference(resource, SAMM_C_UNIT, Expected::Unit)?,
            },
            ElementKind::Code => CharacteristicKind::Code,
            ElementKind::SingleEntity => CharacteristicKind::SingleEntity,
            ElementKind::Either => CharacteristicKind::Either {
                left: self.reference(resource, SAMM_C_LEFT, Expected::Characteristic)?,
                right: self.reference(resource, SAMM_C_RIGHT, Expected::Characteristic)?,
            },
            ElementKind::StructuredValue => {
                let deconstruction_rule = self.string(resource, SAMM_C_DECONSTRUCTION_RULE)?;
                let mut elements = Vec::new();
                for term in self.resolver().values(resource, SAMM_C_ELEMENTS)? {
                    elements.push(match term {
                        Term::Literal(literal) => StructuredElement::Delimiter(literal.lexical.clone()),
                        _ => StructuredElement::Property(self.materialize_as(term, Expected::Property)?),
                    });
                }
                CharacteristicKind::StructuredValue {
                    deconstruction_rule,
                    elements,
                }
            }
            _ => CharacteristicKind::Plain,
        };

        Ok(Characteristic {
            base,
            data_type,
            kind: subtype,
        })
    }

    fn constraint(
        &mut self,
        resource: &Term,
        kind: ElementKind,
        base: BaseAttributes,
    ) -> Result<Constraint, LoadError> {
        let subtype = match kind {
            ElementKind::RangeConstraint => {
                let min = self.optional_scalar(resource, SAMM_C_MIN_VALUE)?;
                let max = self.optional_scalar(resource, SAMM_C_MAX_VALUE)?;
                if min.is_none() && max.is_none() {
                    return Err(LoadError::invalid(
                        resource,
                        SAMM_C_MIN_VALUE,
                        "a range needs at least one bound",
                    ));
                }
                let lower = self.bound(
                    resource,
                    SAMM_C_LOWER_BOUND_DEFINITION,
                    min.is_some(),
                    BoundDefinition::AtLeast,
                )?;
                let upper = self.bound(
                    resource,
                    SAMM_C_UPPER_BOUND_DEFINITION,
                    max.is_some(),
                    BoundDefinition::AtMost,
                )?;
                ConstraintKind::Range {
                    min,
                    max,
                    lower,
                    upper,
                }
            }
            ElementKind::LengthConstraint => ConstraintKind::Length {
                min: self.optional_number(resource, SAMM_C_MIN_VALUE)?,
                max: self.optional_number(resource, SAMM_C_MAX_VALUE)?,
            },
            ElementKind::EncodingConstraint => {
                let value = match self.resolver().value(resource, SAMM_VALUE_ATTR)? {
                    Term::Iri(iri) => iri.clone(),
                    _ => {
                        return Err(LoadError::invalid(resource, SAMM_VALUE_ATTR, "expected an encoding"))
                    }
                };
                ConstraintKind::Encoding { value }
            }
            ElementKind::RegularExpressionConstraint => ConstraintKind::RegularExpression {
                value: self.string(resource, SAMM_VALUE_ATTR)?,
            },
            ElementKind::FixedPointConstraint => ConstraintKind::FixedPoint {
                scale: self.number(resource, SAMM_C_SCALE)?,
                integer: self.number(resource, SAMM_C_INTEGER)?,
            },
            ElementKind::LanguageConstraint => ConstraintKind::Language {
                language_code: self.string(resource, SAMM_C_LANGUAGE_CODE)?,
            },
            ElementKind::LocaleConstraint => ConstraintKind::Locale {
                locale_code: self.string(resource, SAMM_C_LOCALE_CODE)?,
            },
            other => {
                return Err(LoadError::UnexpectedKind {
                    resource: resource.to_string(),
                    expected: Expected::Constraint.name().to_owned(),
                    actual: other.to_string(),
                })
            }
        };
        Ok(Constraint {
            base,
            kind: subtype,
        })
    }

    fn enumeration_values(
        &mut self,
        resource: &Term,
        data_type: Option<&Type>,
    ) -> Result<Vec<Value>, LoadError> {
        let terms = self.resolver().values(resource, SAMM_C_VALUES)?;
        if terms.is_empty() {
            return Err(LoadError::missing(resource, SAMM_C_VALUES));
        }
        let mut values = Vec::with_capacity(terms.len());
        for term in terms {
            let value = self.value(term, None, data_type)?;
            if let Some(expected) = data_type {
                if !self.arena.value_has_type(&value, expected) {
                    return Err(LoadError::invalid(
                        resource,
                        SAMM_C_VALUES,
                        format!("{term} is not a value of the declared data type"),
                    ));
                }
            }
            values.push(value);
        }
        Ok(values)
    }

    fn data_type(&mut self, term: &Term) -> Result<Type, LoadError> {
        match term {
            Term::Iri(iri) if MetaModel::full().is_datatype(iri) => Ok(Type::Scalar(iri.clone())),
            Term::Literal(_) => Err(LoadError::UnexpectedKind {
                resource: term.to_string(),
                expected: "a datatype or an Entity".to_owned(),
                actual: "a literal".to_owned(),
            }),
            _ => Ok(Type::Entity(self.materialize_as(term, Expected::Entity)?)),
        }
    }

    fn bound(
        &self,
        resource: &Term,
        attribute: &str,
        bounded: bool,
        default: BoundDefinition,
    ) -> Result<BoundDefinition, LoadError> {
        let definition = match self.resolver().optional_value(resource, attribute)? {
            Some(term) => Some(
                term.as_iri()
                    .and_then(BoundDefinition::from_iri)
                    .ok_or_else(|| LoadError::invalid(resource, attribute, "unknown bound definition"))?,
            ),
            None => None,
        };
        let consistent = |d: BoundDefinition| {
            if default == BoundDefinition::AtLeast {
                d.is_lower()
            } else {
                d.is_upper()
            }
        };
        match (bounded, definition) {
            (false, None) => Ok(BoundDefinition::Open),
            (false, Some(_)) => Err(LoadError::invalid(
                resource,
                attribute,
                "bound definition given without a bound",
            )),
            (true, None) => Ok(default),
            (true, Some(d)) if consistent(d) => Ok(d),
            (true, Some(_)) => Err(LoadError::invalid(
                resource,
                attribute,
                "bound definition does not fit this side of the range",
            )),
        }
    }

    pub(super) fn reference(
        &mut self,
        resource: &Term,
        attribute: &str,
        expected: Expected,
    ) -> Result<ElementId, LoadError> {
        let term = self.resolver().value(resource, attribute)?;
        self.materialize_as(term, expected)
    }

    pub(super) fn optional_reference(
        &mut self,
        resource: &Term,
        attribute: &str,
        expected: Expected,
    ) -> Result<Option<ElementId>, LoadError> {
        match self.resolver().optional_value(resource, attribute)? {
            Some(term) => Ok(Some(self.materialize_as(term, expected)?)),
            None => Ok(None),
        }
    }

    pub(super) fn references(
        &mut self,
        resource: &Term,
        attribute: &str,
        expected: Expected,
    ) -> Result<Vec<ElementId>, LoadError> {
        let terms = self.resolver().values(resource, attribute)?;
        terms
            .into_iter()
            .map(|term| self.materialize_as(term, expected))
            .collect()
    }

    fn string(&self, resource: &Term, attribute: &str) -> Result<String, LoadError> {
        self.optional_string(resource, attribute)?
            .ok_or_else(|| LoadError::missing(resource, attribute))
    }

    fn optional_string(&self, resource: &Term, attribute: &str) -> Result<Option<String>, LoadError> {
        match self.resolver().optional_value(resource, attribute)? {
            Some(Term::Literal(literal)) => Ok(Some(literal.lexical.clone())),
            Some(_) => Err(LoadError::invalid(resource, attribute, "expected a literal")),
            None => Ok(None),
        }
    }

    fn optional_scalar(
        &self,
        resource: &Term,
        attribute: &str,
    ) -> Result<Option<ScalarValue>, LoadError> {
        match self.resolver().optional_value(resource, attribute)? {
            Some(Term::Literal(literal)) => Ok(Some(ScalarValue::from_literal(literal)?)),
            Some(_) => Err(LoadError::invalid(resource, attribute, "expected a literal")),
            None => Ok(None),
        }
    }

    fn number<T: FromStr>(&self, resource: &Term, attribute: &str) -> Result<T, LoadError> {
        self.optional_number(resource, attribute)?
            .ok_or_else(|| LoadError::missing(resource, attribute))
    }

    fn optional_number<T: FromStr>(
        &self,
        resource: &Term,
        attribute: &str,
    ) -> Result<Option<T>, LoadError> {
        self.optional_string(resource, attribute)?
            .map(|lexical| {
                lexical
                    .parse()
                    .map_err(|_| LoadError::invalid(resource, attribute, "expected a non-negative integer"))
            })
            .transpose()
    }

    /// A boolean flag asserted on `resource` itself, `false` when absent.
    fn flag(&self, resource: &Term, attribute: &str) -> Result<bool, LoadError> {
        match self.resolver().direct_values(resource, attribute).first() {
            Some(Term::Literal(literal)) => match literal.lexical.as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(LoadError::invalid(resource, attribute, "expected a boolean")),
            },
            Some(_) => Err(LoadError::invalid(resource, attribute, "expected a boolean")),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LoadError;
    use crate::factory::ElementFactory;
    use crate::graph::{Graph, Term};
    use crate::model::{BoundDefinition, CharacteristicKind, CollectionType, ConstraintKind, Value};
    use crate::parser::parse_turtle;

    const PREFIXES: &str = r#"
        @prefix samm: <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
        @prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
        @prefix unit: <urn:samm:org.eclipse.esmf.samm:unit:2.1.0#> .
        @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
        @prefix : <urn:samm:com.example:1.0.0#> .
    "#;

    fn graph(body: &str) -> Graph {
        let mut graph = parse_turtle(&format!("{PREFIXES}{body}"), None)
            .unwrap()
            .graph()
            .clone();
        graph.merge(crate::builtins::graph());
        graph
    }

    fn iri(name: &str) -> Term {
        Term::iri(format!("urn:samm:com.example:1.0.0#{name}"))
    }

    #[test]
    fn trait_with_range_constraint() {
        let graph = graph(
            r#"
            :Percentage a samm-c:Trait ;
                samm-c:baseCharacteristic :Ratio ;
                samm-c:constraint [
                    a samm-c:RangeConstraint ;
                    samm-c:minValue "0"^^xsd:int ;
                    samm-c:maxValue "100"^^xsd:int ;
                    samm-c:upperBoundDefinition samm-c:LESS_THAN
                ] .
            :Ratio a samm-c:Quantifiable ; samm:dataType xsd:int ; samm-c:unit unit:percent .
            "#,
        );
        let mut factory = ElementFactory::new(&graph);
        let id = factory.materialize(&iri("Percentage")).unwrap();
        let arena = factory.arena();
        let CharacteristicKind::Trait { base, constraints } = &arena.characteristic(id).unwrap().kind else {
            panic!("expected a Trait");
        };
        assert!(matches!(
            arena.characteristic(*base).unwrap().kind,
            CharacteristicKind::Quantifiable { unit: Some(_) }
        ));
        let constraint = arena.get(constraints[0]).unwrap().as_constraint().unwrap();
        let ConstraintKind::Range { lower, upper, .. } = &constraint.kind else {
            panic!("expected a range");
        };
        assert_eq!(*lower, BoundDefinition::AtLeast);
        assert_eq!(*upper, BoundDefinition::LessThan);
        assert!(arena.effective_data_type(id).is_some());
    }

    #[test]
    fn inconsistent_bound_definition_is_rejected() {
        let graph = graph(
            r#"
            :Range a samm-c:RangeConstraint ;
                samm-c:minValue "0"^^xsd:int ;
                samm-c:lowerBoundDefinition samm-c:AT_MOST .
            "#,
        );
        let mut factory = ElementFactory::new(&graph);
        assert!(matches!(
            factory.materialize(&iri("Range")),
            Err(LoadError::InvalidAttribute { .. })
        ));
    }

    #[test]
    fn state_default_must_be_a_value() {
        let graph = graph(
            r#"
            :Good a samm-c:State ; samm:dataType xsd:string ;
                samm-c:values ( "on" "off" ) ; samm-c:defaultValue "off" .
            :Bad a samm-c:State ; samm:dataType xsd:string ;
                samm-c:values ( "on" "off" ) ; samm-c:defaultValue "standby" .
            "#,
        );
        let mut factory = ElementFactory::new(&graph);
        let good = factory.materialize(&iri("Good")).unwrap();
        let CharacteristicKind::State { values, default } = &factory.arena().characteristic(good).unwrap().kind
        else {
            panic!("expected a State");
        };
        assert_eq!(values.len(), 2);
        assert_eq!(default.as_scalar().unwrap().lexical(), "off");
        assert!(matches!(
            factory.materialize(&iri("Bad")),
            Err(LoadError::InvalidAttribute { .. })
        ));
    }

    #[test]
    fn enumeration_values_must_fit_the_data_type() {
        let graph = graph(
            r#"
            :Codes a samm-c:Enumeration ; samm:dataType xsd:integer ; samm-c:values ( 1 2 "three" ) .
            "#,
        );
        let mut factory = ElementFactory::new(&graph);
        assert!(matches!(
            factory.materialize(&iri("Codes")),
            Err(LoadError::InvalidAttribute { .. })
        ));
    }

    #[test]
    fn enumeration_of_entity_instances() {
        let graph = graph(
            r#"
            :Colors a samm-c:Enumeration ; samm:dataType :Color ; samm-c:values ( :Red :Blue ) .
            :Color a samm:Entity ; samm:properties ( :code ) .
            :code a samm:Property ; samm:characteristic samm-c:Text .
            :Red a :Color ; :code "r" .
            :Blue a :Color ; :code "b" .
            "#,
        );
        let mut factory = ElementFactory::new(&graph);
        let colors = factory.materialize(&iri("Colors")).unwrap();
        let red = factory.materialize(&iri("Red")).unwrap();
        let arena = factory.arena();
        let CharacteristicKind::Enumeration { values } = &arena.characteristic(colors).unwrap().kind else {
            panic!("expected an Enumeration");
        };
        assert_eq!(values[0], Value::Instance(red));
        let instance = arena.get(red).unwrap().as_entity_instance().unwrap();
        assert_eq!(instance.assertions.len(), 1);
    }

    #[test]
    fn collections_need_exactly_one_element_type() {
        let graph = graph(
            r#"
            :Both a samm-c:List ; samm:dataType xsd:string ; samm-c:elementCharacteristic samm-c:Text .
            :Neither a samm-c:Set .
            :Nested a samm-c:SortedSet ; samm-c:elementCharacteristic samm-c:Text .
            "#,
        );
        let mut factory = ElementFactory::new(&graph);
        assert!(factory.materialize(&iri("Both")).is_err());
        assert!(matches!(
            factory.materialize(&iri("Neither")),
            Err(LoadError::MissingAttribute { .. })
        ));
        let nested = factory.materialize(&iri("Nested")).unwrap();
        assert_eq!(
            factory.arena().characteristic(nested).unwrap().kind.collection_type(),
            Some(CollectionType::SortedSet)
        );
    }

    #[test]
    fn properties_need_a_characteristic_unless_abstract() {
        let graph = graph(
            r#"
            :bare a samm:Property .
            :template a samm:AbstractProperty .
            "#,
        );
        let mut factory = ElementFactory::new(&graph);
        assert!(matches!(
            factory.materialize(&iri("bare")),
            Err(LoadError::MissingAttribute { .. })
        ));
        assert!(factory.materialize(&iri("template")).is_ok());
    }
}
