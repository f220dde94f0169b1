//! Builders for Entity instances and value elements.

use super::{check_refs, Builder};
use crate::error::BuildError;
use crate::kind::ElementKind;
use crate::model::{
    CollectionType, CollectionValue, ElementArena, ElementId, EntityInstance, ModelElement,
    ScalarValue, Value, ValueElement,
};

#[derive(Debug, Clone)]
enum Assigned {
    Value(Value),
    Literal { lexical: String, datatype: String },
}

/// Fields of an Entity instance.
#[derive(Debug, Clone)]
pub struct InstanceFields {
    entity: ElementId,
    assignments: Vec<(ElementId, Assigned)>,
}

/// Starts an instance of `entity`. Instances may be named but carry no
/// preferred names, descriptions or `see` references.
#[must_use]
pub fn entity_instance(entity: ElementId) -> Builder<InstanceFields> {
    Builder::with(
        None,
        InstanceFields {
            entity,
            assignments: Vec::new(),
        },
    )
}

impl Builder<InstanceFields> {
    /// Assigns `value` to `property`.
    #[must_use]
    pub fn value(mut self, property: ElementId, value: impl Into<Value>) -> Self {
        self.payload
            .assignments
            .push((property, Assigned::Value(value.into())));
        self
    }

    /// Assigns the literal `lexical` of `datatype` to `property`; it is
    /// parsed by `build`.
    #[must_use]
    pub fn literal(
        mut self,
        property: ElementId,
        lexical: impl Into<String>,
        datatype: impl Into<String>,
    ) -> Self {
        self.payload.assignments.push((
            property,
            Assigned::Literal {
                lexical: lexical.into(),
                datatype: datatype.into(),
            },
        ));
        self
    }

    /// Checks and adds the instance.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NotApplicable`] if a name, description or `see`
    /// was set, [`BuildError::ForeignProperty`] for a property the entity
    /// does not have, [`BuildError::Invariant`] for a property assigned twice, [`BuildError::MissingPropertyValue`] for an unassigned
    /// mandatory property, [`BuildError::Value`] for an unparsable literal,
    /// and [`BuildError::Invariant`] for a value that does not conform to its
    /// property's characteristic or an abstract entity.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let element = self.label(ElementKind::EntityInstance);
        let base = &self.base;
        let not_applicable = [
            (!base.preferred_names.is_empty(), "preferred name"),
            (!base.descriptions.is_empty(), "description"),
            (!base.see.is_empty(), "see"),
        ];
        if let Some((_, field)) = not_applicable.into_iter().find(|(set, _)| *set) {
            return Err(BuildError::NotApplicable { element, field });
        }

        let entity = self.payload.entity;
        check_refs(arena, &element, [entity], "an entity", ElementKind::is_entity)?;
        let entity_label = arena.get(entity).map(ModelElement::label).unwrap_or_default();
        if arena.kind_of(entity) == Some(ElementKind::AbstractEntity) {
            return Err(BuildError::Invariant {
                element,
                rule: format!("abstract entity {entity_label} cannot be instantiated"),
            });
        }
        let declared = arena.all_properties(entity).unwrap_or_default();
        let property_label =
            |id: ElementId| arena.property_urn(id).map_or_else(|| format!("#{}", id.index()), ToString::to_string);

        let mut given: Vec<(ElementId, Value)> = Vec::with_capacity(self.payload.assignments.len());
        for (property, assigned) in self.payload.assignments {
            let Some(slot) = declared
                .iter()
                .copied()
                .find(|d| arena.is_same_property(*d, property) || arena.is_same_property(property, *d))
            else {
                return Err(BuildError::ForeignProperty {
                    element,
                    property: property_label(property),
                    entity: entity_label,
                });
            };
            if given.iter().any(|(assigned_slot, _)| *assigned_slot == slot) {
                return Err(BuildError::Invariant {
                    element,
                    rule: format!("property {} is assigned twice", property_label(slot)),
                });
            }
            let value = match assigned {
                Assigned::Value(value) => value,
                Assigned::Literal { lexical, datatype } => ScalarValue::parse(lexical, datatype)
                    .map(Value::Scalar)
                    .map_err(|source| BuildError::Value {
                        element: element.clone(),
                        source,
                    })?,
            };
            given.push((slot, value));
        }

        let mut assertions = Vec::with_capacity(declared.len());
        for slot in declared {
            let Some(property) = arena.property(slot) else {
                continue;
            };
            if arena.kind_of(slot) == Some(ElementKind::AbstractProperty) {
                continue;
            }
            match given.iter().position(|(p, _)| *p == slot) {
                Some(position) => {
                    let (_, value) = given.swap_remove(position);
                    if let Some(characteristic) = property.characteristic {
                        if !arena.conforms(&value, characteristic) {
                            return Err(BuildError::Invariant {
                                element,
                                rule: format!(
                                    "value of {} does not conform to its characteristic",
                                    property_label(slot)
                                ),
                            });
                        }
                    }
                    assertions.push((slot, value));
                }
                None if property.optional => {}
                None => {
                    return Err(BuildError::MissingPropertyValue {
                        element,
                        property: property_label(slot),
                    })
                }
            }
        }

        Ok(arena.alloc(ModelElement::EntityInstance(EntityInstance {
            base: self.base,
            entity,
            assertions,
        })))
    }
}

/// The value held by a value element.
#[derive(Debug, Clone)]
pub struct ValueFields {
    value: Value,
}

/// Starts a named scalar value, as written `:Red a samm:Value ; samm:value "red"`.
#[must_use]
pub fn scalar_value(value: ScalarValue) -> Builder<ValueFields> {
    Builder::with(
        None,
        ValueFields {
            value: Value::Scalar(value),
        },
    )
}

/// Starts a collection value element.
#[must_use]
pub fn collection_value(value: CollectionValue) -> Builder<ValueFields> {
    Builder::with(
        None,
        ValueFields {
            value: Value::Collection(value),
        },
    )
}

impl Builder<ValueFields> {
    /// Checks and adds the value element.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Invariant`] if a collection's elements do not
    /// have its element type, or a set holds duplicates.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let element = self.label(ElementKind::Value);
        if let Value::Collection(collection) = &self.payload.value {
            if let Some(element_type) = &collection.element_type {
                if !arena.value_has_type(&self.payload.value, element_type) {
                    return Err(BuildError::Invariant {
                        element,
                        rule: "elements do not have the collection's element type".to_owned(),
                    });
                }
            }
            let unique = matches!(
                collection.collection_type,
                CollectionType::Set | CollectionType::SortedSet
            );
            let values = &collection.values;
            let duplicate = values
                .iter()
                .enumerate()
                .any(|(i, v)| values[..i].contains(v));
            if unique && duplicate {
                return Err(BuildError::Invariant {
                    element,
                    rule: "a set cannot hold the same value twice".to_owned(),
                });
            }
        }
        let value = ValueElement {
            base: self.base,
            value: self.payload.value,
        };
        Ok(arena.alloc(match value.value {
            Value::Collection(_) => ModelElement::CollectionValue(value),
            _ => ModelElement::ScalarValue(value),
        }))
    }
}
