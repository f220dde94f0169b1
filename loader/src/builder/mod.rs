//! Programmatic construction of model elements.
//!
//! Every element kind has a constructor function returning a [`Builder`].
//! Setters only record what they are given; all structural rules of the meta
//! model are checked by the terminal `build`, which adds the element to an
//! [`ElementArena`] or reports the first violated rule as a [`BuildError`].
//!
//! # Entry Point
//!
//! ```
//! use aspect_loader::builder;
//! use aspect_loader::model::{ElementArena, Type};
//! use aspect_loader::AspectModelUrn;
//!
//! let urn = |name: &str| AspectModelUrn::parse(&format!("urn:samm:com.example:1.0.0#{name}"));
//! let mut arena = ElementArena::new();
//! let text = builder::characteristic()
//!     .data_type(Type::Scalar("http://www.w3.org/2001/XMLSchema#string".into()))
//!     .build(&mut arena)?;
//! let name = builder::property(urn("name")?)
//!     .characteristic(text)
//!     .build(&mut arena)?;
//! let vehicle = builder::aspect(urn("Vehicle")?)
//!     .preferred_name("en", "Vehicle")
//!     .property(name)
//!     .build(&mut arena)?;
//! assert_eq!(arena.get(vehicle).and_then(|e| e.as_aspect()).map(|a| a.properties.len()), Some(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod characteristics;
mod instances;

pub use characteristics::{
    characteristic, code, collection, duration, either, encoding_constraint, enumeration,
    fixed_point_constraint, language_constraint, length_constraint, list, locale_constraint,
    measurement, quantifiable, range_constraint, regular_expression_constraint, set,
    single_entity, sorted_set, state, structured_value, time_series, trait_, CharacteristicFields,
    CollectionFields, EitherFields, EncodingFields, EnumerationFields, FixedPointFields,
    LanguageFields, LengthFields, LocaleFields, PlainFields, QuantityFields, RangeFields,
    RegularExpressionFields, StateFields, StructuredValueFields, TraitFields,
};
pub use instances::{collection_value, entity_instance, scalar_value, InstanceFields, ValueFields};

use crate::error::BuildError;
use crate::kind::ElementKind;
use crate::model::{
    Aspect, BaseAttributes, ElementArena, ElementId, Entity, Event, ModelElement, Operation,
    Property, QuantityKind, ScalarValue, Unit,
};
use crate::urn::AspectModelUrn;

/// Collects the attributes of one element until `build` is called.
///
/// `P` holds the kind-specific fields; the attributes every element shares
/// are set through the methods defined for all payloads.
#[derive(Debug, Clone)]
pub struct Builder<P> {
    base: BaseAttributes,
    payload: P,
}

impl<P> Builder<P> {
    fn with(urn: Option<AspectModelUrn>, payload: P) -> Self {
        Self {
            base: BaseAttributes {
                urn,
                ..BaseAttributes::default()
            },
            payload,
        }
    }

    /// Names the element.
    #[must_use]
    pub fn urn(mut self, urn: AspectModelUrn) -> Self {
        self.base.urn = Some(urn);
        self
    }

    /// Adds a preferred name; the first one per locale is kept.
    #[must_use]
    pub fn preferred_name(mut self, locale: &str, text: impl Into<String>) -> Self {
        self.base.preferred_names.insert(locale, text);
        self
    }

    /// Adds a description; the first one per locale is kept.
    #[must_use]
    pub fn description(mut self, locale: &str, text: impl Into<String>) -> Self {
        self.base.descriptions.insert(locale, text);
        self
    }

    /// Adds a `samm:see` reference.
    #[must_use]
    pub fn see(mut self, reference: impl Into<String>) -> Self {
        self.base.see.push(reference.into());
        self
    }

    /// Sets the example value.
    #[must_use]
    pub fn example_value(mut self, value: ScalarValue) -> Self {
        self.base.example_value = Some(value);
        self
    }

    fn label(&self, kind: ElementKind) -> String {
        self.base.label(kind)
    }

    fn require_urn(&self, kind: ElementKind) -> Result<(), BuildError> {
        if self.base.is_anonymous() {
            return Err(BuildError::MissingField {
                element: self.label(kind),
                field: "urn",
            });
        }
        Ok(())
    }
}

/// Fails unless every id in `ids` names a finished element satisfying `accept`.
fn check_refs(
    arena: &ElementArena,
    element: &str,
    ids: impl IntoIterator<Item = ElementId>,
    what: &str,
    accept: impl Fn(ElementKind) -> bool,
) -> Result<(), BuildError> {
    for id in ids {
        match arena.get(id).map(ModelElement::kind) {
            Some(kind) if accept(kind) => {}
            Some(kind) => {
                return Err(BuildError::Invariant {
                    element: element.to_owned(),
                    rule: format!("element #{} is {kind}, expected {what}", id.index()),
                })
            }
            None => {
                return Err(BuildError::Invariant {
                    element: element.to_owned(),
                    rule: format!("element #{} does not exist", id.index()),
                })
            }
        }
    }
    Ok(())
}

/// Characteristic kinds proper, constraints excluded.
fn is_characteristic(kind: ElementKind) -> bool {
    kind.is_characteristic() && !kind.is_constraint()
}

/// Fields of an Aspect.
#[derive(Debug, Clone, Default)]
pub struct AspectFields {
    properties: Vec<ElementId>,
    operations: Vec<ElementId>,
    events: Vec<ElementId>,
}

/// Starts an Aspect.
#[must_use]
pub fn aspect(urn: AspectModelUrn) -> Builder<AspectFields> {
    Builder::with(Some(urn), AspectFields::default())
}

impl Builder<AspectFields> {
    /// Appends a property.
    #[must_use]
    pub fn property(mut self, property: ElementId) -> Self {
        self.payload.properties.push(property);
        self
    }

    /// Appends an operation.
    #[must_use]
    pub fn operation(mut self, operation: ElementId) -> Self {
        self.payload.operations.push(operation);
        self
    }

    /// Appends an event.
    #[must_use]
    pub fn event(mut self, event: ElementId) -> Self {
        self.payload.events.push(event);
        self
    }

    /// Checks and adds the Aspect.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if a referenced element is missing or of the
    /// wrong kind.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let element = self.label(ElementKind::Aspect);
        self.require_urn(ElementKind::Aspect)?;
        let fields = &self.payload;
        check_refs(arena, &element, fields.properties.iter().copied(), "a property", ElementKind::is_property)?;
        check_refs(arena, &element, fields.operations.iter().copied(), "an operation", |k| {
            k == ElementKind::Operation
        })?;
        check_refs(arena, &element, fields.events.iter().copied(), "an event", |k| {
            k == ElementKind::Event
        })?;
        Ok(arena.alloc(ModelElement::Aspect(Aspect {
            base: self.base,
            properties: self.payload.properties,
            operations: self.payload.operations,
            events: self.payload.events,
        })))
    }
}

/// Fields of an Entity or AbstractEntity.
#[derive(Debug, Clone, Default)]
pub struct EntityFields {
    is_abstract: bool,
    properties: Vec<ElementId>,
    extends: Option<ElementId>,
}

/// Starts an Entity.
#[must_use]
pub fn entity(urn: AspectModelUrn) -> Builder<EntityFields> {
    Builder::with(Some(urn), EntityFields::default())
}

/// Starts an AbstractEntity.
#[must_use]
pub fn abstract_entity(urn: AspectModelUrn) -> Builder<EntityFields> {
    Builder::with(
        Some(urn),
        EntityFields {
            is_abstract: true,
            ..EntityFields::default()
        },
    )
}

impl Builder<EntityFields> {
    /// Appends an own property.
    #[must_use]
    pub fn property(mut self, property: ElementId) -> Self {
        self.payload.properties.push(property);
        self
    }

    /// Sets the parent entity.
    #[must_use]
    pub fn extends(mut self, parent: ElementId) -> Self {
        self.payload.extends = Some(parent);
        self
    }

    /// Checks and adds the entity.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if a property or the parent is missing or of
    /// the wrong kind, or if the entity redeclares an inherited property.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let kind = if self.payload.is_abstract {
            ElementKind::AbstractEntity
        } else {
            ElementKind::Entity
        };
        let element = self.label(kind);
        self.require_urn(kind)?;
        check_refs(arena, &element, self.payload.properties.iter().copied(), "a property", ElementKind::is_property)?;
        if let Some(parent) = self.payload.extends {
            check_refs(arena, &element, [parent], "an entity", ElementKind::is_entity)?;
            let inherited = arena.all_properties(parent).unwrap_or_default();
            for own in &self.payload.properties {
                let clash = inherited.iter().any(|p| {
                    arena.property_urn(*p).is_some() && arena.property_urn(*p) == arena.property_urn(*own)
                });
                if clash {
                    return Err(BuildError::Invariant {
                        element,
                        rule: format!(
                            "property {} is already inherited",
                            arena.property_urn(*own).map_or_else(String::new, ToString::to_string)
                        ),
                    });
                }
            }
        }
        let entity = Entity {
            base: self.base,
            properties: self.payload.properties,
            extends: self.payload.extends,
        };
        Ok(arena.alloc(if self.payload.is_abstract {
            ModelElement::AbstractEntity(entity)
        } else {
            ModelElement::Entity(entity)
        }))
    }
}

/// Fields of a Property, AbstractProperty or property reference node.
#[derive(Debug, Clone, Default)]
pub struct PropertyFields {
    is_abstract: bool,
    characteristic: Option<ElementId>,
    optional: bool,
    not_in_payload: bool,
    payload_name: Option<String>,
    extends: Option<ElementId>,
    reference: Option<ElementId>,
}

/// Starts a Property.
#[must_use]
pub fn property(urn: AspectModelUrn) -> Builder<PropertyFields> {
    Builder::with(Some(urn), PropertyFields::default())
}

/// Starts an AbstractProperty.
#[must_use]
pub fn abstract_property(urn: AspectModelUrn) -> Builder<PropertyFields> {
    Builder::with(
        Some(urn),
        PropertyFields {
            is_abstract: true,
            ..PropertyFields::default()
        },
    )
}

/// Starts an anonymous node standing for `target` with its own flags, as
/// written `[ samm:property :p ; samm:optional true ]`.
#[must_use]
pub fn property_reference(target: ElementId) -> Builder<PropertyFields> {
    Builder::with(
        None,
        PropertyFields {
            reference: Some(target),
            ..PropertyFields::default()
        },
    )
}

impl Builder<PropertyFields> {
    /// Sets the characteristic.
    #[must_use]
    pub fn characteristic(mut self, characteristic: ElementId) -> Self {
        self.payload.characteristic = Some(characteristic);
        self
    }

    /// Marks the property optional.
    #[must_use]
    pub fn optional(mut self, optional: bool) -> Self {
        self.payload.optional = optional;
        self
    }

    /// Keeps the property out of payloads.
    #[must_use]
    pub fn not_in_payload(mut self, not_in_payload: bool) -> Self {
        self.payload.not_in_payload = not_in_payload;
        self
    }

    /// Sets the name used in payloads.
    #[must_use]
    pub fn payload_name(mut self, name: impl Into<String>) -> Self {
        self.payload.payload_name = Some(name.into());
        self
    }

    /// Sets the abstract property this one extends.
    #[must_use]
    pub fn extends(mut self, parent: ElementId) -> Self {
        self.payload.extends = Some(parent);
        self
    }

    /// Checks and adds the property.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] if a concrete property has no
    /// characteristic, and [`BuildError::Invariant`] for references to
    /// elements of the wrong kind or a reference node that carries
    /// attributes of its own.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let kind = if self.payload.is_abstract {
            ElementKind::AbstractProperty
        } else {
            ElementKind::Property
        };
        let element = self.label(kind);
        let mut fields = self.payload;

        if let Some(target) = fields.reference {
            check_refs(arena, &element, [target], "a property", ElementKind::is_property)?;
            if fields.characteristic.is_some() || fields.extends.is_some() || !self.base.preferred_names.is_empty() {
                return Err(BuildError::Invariant {
                    element,
                    rule: "a property reference takes its attributes from the referenced property"
                        .to_owned(),
                });
            }
            fields.characteristic = arena.property(target).and_then(|p| p.characteristic);
        } else {
            if self.base.is_anonymous() {
                return Err(BuildError::MissingField { element, field: "urn" });
            }
            if !fields.is_abstract && fields.characteristic.is_none() {
                return Err(BuildError::MissingField {
                    element,
                    field: "characteristic",
                });
            }
            if let Some(characteristic) = fields.characteristic {
                check_refs(arena, &element, [characteristic], "a characteristic", is_characteristic)?;
            }
            if let Some(parent) = fields.extends {
                check_refs(arena, &element, [parent], "an abstract property", |k| {
                    k == ElementKind::AbstractProperty
                })?;
            }
        }

        let property = Property {
            base: self.base,
            characteristic: fields.characteristic,
            optional: fields.optional,
            not_in_payload: fields.not_in_payload,
            payload_name: fields.payload_name,
            extends: fields.extends,
            reference: fields.reference,
        };
        Ok(arena.alloc(if fields.is_abstract {
            ModelElement::AbstractProperty(property)
        } else {
            ModelElement::Property(property)
        }))
    }
}

/// Fields of an Operation.
#[derive(Debug, Clone, Default)]
pub struct OperationFields {
    input: Vec<ElementId>,
    output: Option<ElementId>,
}

/// Starts an Operation.
#[must_use]
pub fn operation(urn: AspectModelUrn) -> Builder<OperationFields> {
    Builder::with(Some(urn), OperationFields::default())
}

impl Builder<OperationFields> {
    /// Appends an input property.
    #[must_use]
    pub fn input(mut self, property: ElementId) -> Self {
        self.payload.input.push(property);
        self
    }

    /// Sets the output property.
    #[must_use]
    pub fn output(mut self, property: ElementId) -> Self {
        self.payload.output = Some(property);
        self
    }

    /// Checks and adds the operation.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if an input or the output is not a property.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let element = self.label(ElementKind::Operation);
        self.require_urn(ElementKind::Operation)?;
        let fields = &self.payload;
        let properties = fields.input.iter().copied().chain(fields.output);
        check_refs(arena, &element, properties, "a property", ElementKind::is_property)?;
        Ok(arena.alloc(ModelElement::Operation(Operation {
            base: self.base,
            input: self.payload.input,
            output: self.payload.output,
        })))
    }
}

/// Fields of an Event.
#[derive(Debug, Clone, Default)]
pub struct EventFields {
    parameters: Vec<ElementId>,
}

/// Starts an Event.
#[must_use]
pub fn event(urn: AspectModelUrn) -> Builder<EventFields> {
    Builder::with(Some(urn), EventFields::default())
}

impl Builder<EventFields> {
    /// Appends a parameter property.
    #[must_use]
    pub fn parameter(mut self, property: ElementId) -> Self {
        self.payload.parameters.push(property);
        self
    }

    /// Checks and adds the event.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if a parameter is not a property.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let element = self.label(ElementKind::Event);
        self.require_urn(ElementKind::Event)?;
        check_refs(arena, &element, self.payload.parameters.iter().copied(), "a property", ElementKind::is_property)?;
        Ok(arena.alloc(ModelElement::Event(Event {
            base: self.base,
            parameters: self.payload.parameters,
        })))
    }
}

/// Fields of a Unit.
#[derive(Debug, Clone, Default)]
pub struct UnitFields {
    symbol: Option<String>,
    code: Option<String>,
    reference_unit: Option<String>,
    conversion_factor: Option<String>,
    quantity_kinds: Vec<String>,
}

/// Starts a Unit.
#[must_use]
pub fn unit(urn: AspectModelUrn) -> Builder<UnitFields> {
    Builder::with(Some(urn), UnitFields::default())
}

impl Builder<UnitFields> {
    /// Sets the symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.payload.symbol = Some(symbol.into());
        self
    }

    /// Sets the common code.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.payload.code = Some(code.into());
        self
    }

    /// Defines the unit in terms of `reference_unit` scaled by `factor`.
    #[must_use]
    pub fn conversion(mut self, reference_unit: impl Into<String>, factor: impl Into<String>) -> Self {
        self.payload.reference_unit = Some(reference_unit.into());
        self.payload.conversion_factor = Some(factor.into());
        self
    }

    /// Adds a measured quantity kind by name.
    #[must_use]
    pub fn quantity_kind(mut self, name: impl Into<String>) -> Self {
        self.payload.quantity_kinds.push(name.into());
        self
    }

    /// Checks and adds the unit.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] if the unit is unnamed.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        self.require_urn(ElementKind::Unit)?;
        let fields = self.payload;
        Ok(arena.alloc(ModelElement::Unit(Unit {
            base: self.base,
            symbol: fields.symbol,
            code: fields.code,
            reference_unit: fields.reference_unit,
            conversion_factor: fields.conversion_factor,
            quantity_kinds: fields.quantity_kinds,
        })))
    }
}

/// Starts a QuantityKind.
#[must_use]
pub fn quantity_kind(urn: AspectModelUrn) -> Builder<()> {
    Builder::with(Some(urn), ())
}

impl Builder<()> {
    /// Checks and adds the quantity kind.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] if the quantity kind is unnamed.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        self.require_urn(ElementKind::QuantityKind)?;
        Ok(arena.alloc(ModelElement::QuantityKind(QuantityKind { base: self.base })))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::Type;
    use samm_metamodel::model::iris::XSD_STRING;

    pub(crate) fn urn(name: &str) -> AspectModelUrn {
        AspectModelUrn::parse(&format!("urn:samm:com.example:1.0.0#{name}")).unwrap()
    }

    pub(crate) fn text(arena: &mut ElementArena) -> ElementId {
        characteristic()
            .data_type(Type::Scalar(XSD_STRING.into()))
            .build(arena)
            .unwrap()
    }

    #[test]
    fn concrete_properties_need_a_characteristic() {
        let mut arena = ElementArena::new();
        let err = property(urn("name")).build(&mut arena).unwrap_err();
        assert!(matches!(err, BuildError::MissingField { field: "characteristic", .. }));
        assert!(abstract_property(urn("base")).build(&mut arena).is_ok());
    }

    #[test]
    fn references_must_have_the_right_kind() {
        let mut arena = ElementArena::new();
        let c = text(&mut arena);
        let err = aspect(urn("A")).property(c).build(&mut arena).unwrap_err();
        assert!(matches!(err, BuildError::Invariant { .. }));
        let name = property(urn("name")).characteristic(c).build(&mut arena).unwrap();
        let err = property(urn("other")).characteristic(name).build(&mut arena).unwrap_err();
        assert!(err.to_string().contains("expected a characteristic"));
    }

    #[test]
    fn reference_nodes_take_the_target_characteristic() {
        let mut arena = ElementArena::new();
        let c = text(&mut arena);
        let name = property(urn("name")).characteristic(c).build(&mut arena).unwrap();
        let node = property_reference(name).optional(true).payload_name("n").build(&mut arena).unwrap();
        let p = arena.property(node).unwrap();
        assert_eq!(p.characteristic, Some(c));
        assert!(p.optional);
        assert_eq!(arena.property_urn(node), Some(&urn("name")));
        let err = property_reference(name).characteristic(c).build(&mut arena).unwrap_err();
        assert!(matches!(err, BuildError::Invariant { .. }));
    }

    #[test]
    fn entities_may_not_redeclare_inherited_properties() {
        let mut arena = ElementArena::new();
        let c = text(&mut arena);
        let name = property(urn("name")).characteristic(c).build(&mut arena).unwrap();
        let parent = abstract_entity(urn("Parent")).property(name).build(&mut arena).unwrap();
        let node = property_reference(name).optional(true).build(&mut arena).unwrap();
        let err = entity(urn("Child")).extends(parent).property(node).build(&mut arena).unwrap_err();
        assert!(err.to_string().contains("already inherited"));
        let child = entity(urn("Child")).extends(parent).build(&mut arena).unwrap();
        assert_eq!(arena.all_properties(child), Some(vec![name]));
    }

    #[test]
    fn first_preferred_name_per_locale_wins() {
        let mut arena = ElementArena::new();
        let id = quantity_kind(urn("mass"))
            .preferred_name("en", "mass")
            .preferred_name("en", "weight")
            .description("en", "amount of matter")
            .see("http://example.com/mass")
            .build(&mut arena)
            .unwrap();
        let base = arena.get(id).unwrap().base();
        assert_eq!(base.preferred_names.get("en"), Some("mass"));
        assert_eq!(base.see.len(), 1);
    }

    #[test]
    fn operations_and_events_hold_properties() {
        let mut arena = ElementArena::new();
        let c = text(&mut arena);
        let name = property(urn("name")).characteristic(c).build(&mut arena).unwrap();
        let rename = operation(urn("rename")).input(name).output(name).build(&mut arena).unwrap();
        let renamed = event(urn("renamed")).parameter(name).build(&mut arena).unwrap();
        let kg = unit(urn("kilogram")).symbol("kg").quantity_kind("mass").build(&mut arena).unwrap();
        let a = aspect(urn("Vehicle"))
            .property(name)
            .operation(rename)
            .event(renamed)
            .build(&mut arena)
            .unwrap();
        assert_eq!(arena.get(a).unwrap().as_aspect().unwrap().events, vec![renamed]);
        assert_eq!(arena.unit(kg).unwrap().quantity_kinds, vec!["mass".to_owned()]);
        let err = operation(urn("broken")).input(c).build(&mut arena).unwrap_err();
        assert!(matches!(err, BuildError::Invariant { .. }));
    }
}
