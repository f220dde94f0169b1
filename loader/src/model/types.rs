use std::collections::HashSet;

use samm_metamodel::MetaModel;

use super::{CharacteristicKind, CollectionType, ElementArena, ElementId, ModelElement, Value};

/// The type of a value: a scalar datatype or an Entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A datatype IRI of the scalar hierarchy.
    Scalar(String),
    /// An Entity or AbstractEntity.
    Entity(ElementId),
}

impl Type {
    /// The datatype IRI, if scalar.
    #[must_use]
    pub fn datatype(&self) -> Option<&str> {
        match self {
            Self::Scalar(iri) => Some(iri),
            Self::Entity(_) => None,
        }
    }

    /// The entity id, if complex.
    #[must_use]
    pub fn entity(&self) -> Option<ElementId> {
        match self {
            Self::Entity(id) => Some(*id),
            Self::Scalar(_) => None,
        }
    }
}

impl ElementArena {
    /// Properties of `entity`: its own, then those inherited along `extends`.
    ///
    /// Returns `None` if `entity` is not a finished Entity.
    #[must_use]
    pub fn all_properties(&self, entity: ElementId) -> Option<Vec<ElementId>> {
        let mut properties = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(entity);
        while let Some(id) = current {
            if !visited.insert(id) {
                break;
            }
            let e = self.entity(id)?;
            properties.extend(e.properties.iter().copied());
            current = e.extends;
        }
        Some(properties)
    }

    /// Data type of a characteristic, following a Trait's base chain.
    ///
    /// A collection without a data type of its own yields the type of its
    /// element characteristic.
    #[must_use]
    pub fn effective_data_type(&self, characteristic: ElementId) -> Option<&Type> {
        let mut visited = HashSet::new();
        let mut current = characteristic;
        loop {
            if !visited.insert(current) {
                return None;
            }
            let c = self.characteristic(current)?;
            if let Some(data_type) = &c.data_type {
                return Some(data_type);
            }
            current = match &c.kind {
                CharacteristicKind::Trait { base, .. } => *base,
                kind => kind.element_characteristic()?,
            };
        }
    }

    /// True if `sub` is `sup` or extends it, directly or transitively.
    #[must_use]
    pub fn is_entity_subtype_of(&self, sub: ElementId, sup: ElementId) -> bool {
        let mut visited = HashSet::new();
        let mut current = Some(sub);
        while let Some(id) = current {
            if id == sup {
                return true;
            }
            if !visited.insert(id) {
                return false;
            }
            current = self.entity(id).and_then(|e| e.extends);
        }
        false
    }

    /// Subtype check over both scalar datatypes and Entities.
    #[must_use]
    pub fn is_type_or_subtype_of(&self, sub: &Type, sup: &Type) -> bool {
        match (sub, sup) {
            (Type::Scalar(a), Type::Scalar(b)) => MetaModel::full().is_datatype_subtype_of(a, b),
            (Type::Entity(a), Type::Entity(b)) => self.is_entity_subtype_of(*a, *b),
            _ => false,
        }
    }

    /// Type of a value; for a collection, the type of its elements.
    #[must_use]
    pub fn type_of_value(&self, value: &Value) -> Option<Type> {
        match value {
            Value::Scalar(scalar) => Some(scalar.type_()),
            Value::Instance(id) => match self.get(*id)? {
                ModelElement::EntityInstance(instance) => Some(Type::Entity(instance.entity)),
                _ => None,
            },
            Value::Collection(collection) => collection
                .element_type
                .clone()
                .or_else(|| collection.values.first().and_then(|v| self.type_of_value(v))),
        }
    }

    /// True if `value` (every element, for collections) has type `expected`
    /// or a subtype of it.
    #[must_use]
    pub fn value_has_type(&self, value: &Value, expected: &Type) -> bool {
        match value {
            Value::Collection(collection) => collection
                .values
                .iter()
                .all(|v| self.value_has_type(v, expected)),
            value => self
                .type_of_value(value)
                .is_some_and(|actual| self.is_type_or_subtype_of(&actual, expected)),
        }
    }

    /// True if `value` may be a value of `characteristic`.
    ///
    /// Collections must carry the characteristic's collection tag (a plain
    /// Collection accepts any) and every element must conform to the
    /// element characteristic or data type. Either accepts values of either
    /// side.
    #[must_use]
    pub fn conforms(&self, value: &Value, characteristic: ElementId) -> bool {
        let Some(c) = self.characteristic(characteristic) else {
            return false;
        };
        match (&c.kind, value) {
            (CharacteristicKind::Either { left, right }, _) => {
                self.conforms(value, *left) || self.conforms(value, *right)
            }
            (CharacteristicKind::Trait { base, .. }, _) if c.data_type.is_none() => {
                self.conforms(value, *base)
            }
            (kind, Value::Collection(collection)) => {
                let Some(expected) = kind.collection_type() else {
                    return false;
                };
                if expected != CollectionType::Collection && expected != collection.collection_type {
                    return false;
                }
                match (kind.element_characteristic(), &c.data_type) {
                    (Some(element), None) => {
                        collection.values.iter().all(|v| self.conforms(v, element))
                    }
                    (_, Some(data_type)) => collection.values.iter().all(|v| {
                        self.type_of_value(v)
                            .is_some_and(|t| self.is_type_or_subtype_of(&t, data_type))
                    }),
                    (None, None) => false,
                }
            }
            (_, value) => match (self.type_of_value(value), self.effective_data_type(characteristic)) {
                (Some(actual), Some(expected)) => self.is_type_or_subtype_of(&actual, expected),
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        BaseAttributes, Characteristic, CollectionValue, Entity, EntityInstance, ScalarValue,
    };
    use samm_metamodel::model::iris::{XSD_DECIMAL, XSD_INT, XSD_INTEGER, XSD_STRING};

    fn entity(arena: &mut ElementArena, extends: Option<ElementId>) -> ElementId {
        arena.alloc(ModelElement::Entity(Entity {
            base: BaseAttributes::default(),
            properties: Vec::new(),
            extends,
        }))
    }

    fn characteristic(
        arena: &mut ElementArena,
        data_type: Option<Type>,
        kind: CharacteristicKind,
    ) -> ElementId {
        arena.alloc(ModelElement::Characteristic(Characteristic {
            base: BaseAttributes::default(),
            data_type,
            kind,
        }))
    }

    #[test]
    fn scalar_subtypes_follow_the_datatype_hierarchy() {
        let arena = ElementArena::new();
        let int = Type::Scalar(XSD_INT.into());
        assert!(arena.is_type_or_subtype_of(&int, &Type::Scalar(XSD_DECIMAL.into())));
        assert!(!arena.is_type_or_subtype_of(&Type::Scalar(XSD_DECIMAL.into()), &int));
    }

    #[test]
    fn entity_subtypes_follow_extends() {
        let mut arena = ElementArena::new();
        let parent = entity(&mut arena, None);
        let child = entity(&mut arena, Some(parent));
        assert!(arena.is_type_or_subtype_of(&Type::Entity(child), &Type::Entity(parent)));
        assert!(!arena.is_type_or_subtype_of(&Type::Entity(parent), &Type::Entity(child)));
    }

    #[test]
    fn trait_takes_its_data_type_from_the_base() {
        let mut arena = ElementArena::new();
        let base = characteristic(
            &mut arena,
            Some(Type::Scalar(XSD_STRING.into())),
            CharacteristicKind::Plain,
        );
        let constrained = characteristic(
            &mut arena,
            None,
            CharacteristicKind::Trait {
                base,
                constraints: Vec::new(),
            },
        );
        assert_eq!(
            arena.effective_data_type(constrained),
            Some(&Type::Scalar(XSD_STRING.into()))
        );
        let text = ScalarValue::parse("abc", XSD_STRING).unwrap().into();
        assert!(arena.conforms(&text, constrained));
    }

    #[test]
    fn collections_must_match_the_declared_tag() {
        let mut arena = ElementArena::new();
        let list = characteristic(
            &mut arena,
            Some(Type::Scalar(XSD_INTEGER.into())),
            CharacteristicKind::Collection {
                collection_type: CollectionType::List,
                element_characteristic: None,
            },
        );
        let any = characteristic(
            &mut arena,
            Some(Type::Scalar(XSD_INTEGER.into())),
            CharacteristicKind::Collection {
                collection_type: CollectionType::Collection,
                element_characteristic: None,
            },
        );
        let values = vec![ScalarValue::parse("1", XSD_INT).unwrap().into()];
        let set = Value::Collection(CollectionValue::new(CollectionType::Set, None, values));
        assert!(!arena.conforms(&set, list));
        assert!(arena.conforms(&set, any));
    }

    #[test]
    fn instances_conform_to_supertypes() {
        let mut arena = ElementArena::new();
        let parent = entity(&mut arena, None);
        let child = entity(&mut arena, Some(parent));
        let instance = arena.alloc(ModelElement::EntityInstance(EntityInstance {
            base: BaseAttributes::default(),
            entity: child,
            assertions: Vec::new(),
        }));
        let single = characteristic(
            &mut arena,
            Some(Type::Entity(parent)),
            CharacteristicKind::SingleEntity,
        );
        assert!(arena.conforms(&Value::Instance(instance), single));
        assert_eq!(arena.all_properties(child), Some(Vec::new()));
    }
}
