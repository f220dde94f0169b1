//! The typed model.
//!
//! Every element lives in an [`ElementArena`] and is referred to by
//! [`ElementId`]. Elements reference each other by id, so shared and
//! cyclic structures (an Entity whose Property is typed with the Entity
//! itself) need no reference counting: the factory reserves a slot before it
//! reads anything the element refers to and fills it once done.

mod characteristic;
mod types;
mod value;

use std::collections::BTreeMap;

use samm_metamodel::model::iris::{
    UNIT_CODE, UNIT_CONVERSION_FACTOR, UNIT_QUANTITY_KIND_ATTR, UNIT_REFERENCE_UNIT, UNIT_SYMBOL,
};
use samm_metamodel::model::local_name;
use samm_metamodel::{IndividualValue, MetaModel};

pub use characteristic::{
    BoundDefinition, Characteristic, CharacteristicKind, CollectionType, Constraint,
    ConstraintKind, StructuredElement,
};
pub use types::Type;
pub use value::{CollectionValue, ScalarValue, Value};

use crate::document::DocumentId;
use crate::error::LoadError;
use crate::kind::ElementKind;
use crate::urn::AspectModelUrn;

/// Index of an element in its [`ElementArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    /// Position in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Text keyed by locale; at most one entry per locale, first insert wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    /// Adds `text` for `locale` unless the locale already has an entry.
    /// Returns true if the text was added.
    pub fn insert(&mut self, locale: impl Into<String>, text: impl Into<String>) -> bool {
        let locale = locale.into();
        if self.0.contains_key(&locale) {
            return false;
        }
        self.0.insert(locale, text.into());
        true
    }

    /// Text for `locale`.
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// `(locale, text)` pairs ordered by locale.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, t)| (l.as_str(), t.as_str()))
    }

    /// Number of locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no text was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Attributes every element carries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseAttributes {
    /// Identifier; `None` for anonymous elements.
    pub urn: Option<AspectModelUrn>,
    /// `samm:preferredName` per locale.
    pub preferred_names: LocalizedText,
    /// `samm:description` per locale.
    pub descriptions: LocalizedText,
    /// `samm:see` references, in order.
    pub see: Vec<String>,
    /// Document the element was defined in; `None` for built-ins and
    /// programmatically built elements.
    pub source: Option<DocumentId>,
    /// `samm:exampleValue`.
    pub example_value: Option<ScalarValue>,
}

impl BaseAttributes {
    /// Attributes of a named element.
    #[must_use]
    pub fn named(urn: AspectModelUrn) -> Self {
        Self {
            urn: Some(urn),
            ..Self::default()
        }
    }

    /// True if the element has no identifier.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.urn.is_none()
    }

    /// Element name, i.e. the URN fragment.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.urn.as_ref().map(AspectModelUrn::name)
    }

    /// Human readable label for messages: the URN, or `anonymous <kind>`.
    #[must_use]
    pub fn label(&self, kind: ElementKind) -> String {
        match &self.urn {
            Some(urn) => urn.to_string(),
            None => format!("anonymous {kind}"),
        }
    }
}

/// `samm:Aspect`.
#[derive(Debug, Clone, PartialEq)]
pub struct Aspect {
    /// Common attributes.
    pub base: BaseAttributes,
    /// Properties, in declaration order.
    pub properties: Vec<ElementId>,
    /// Operations.
    pub operations: Vec<ElementId>,
    /// Events.
    pub events: Vec<ElementId>,
}

/// `samm:Entity` and `samm:AbstractEntity`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Common attributes.
    pub base: BaseAttributes,
    /// Own properties, without inherited ones.
    pub properties: Vec<ElementId>,
    /// Parent entity.
    pub extends: Option<ElementId>,
}

/// `samm:Property` and `samm:AbstractProperty`.
///
/// A property reference node (`[ samm:property :p ; samm:optional true ]`)
/// is a Property of its own: anonymous, carrying the per-use flags, with its
/// attributes taken from `reference`.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Common attributes.
    pub base: BaseAttributes,
    /// Characteristic; always present on non-abstract properties.
    pub characteristic: Option<ElementId>,
    /// `samm:optional`.
    pub optional: bool,
    /// `samm:notInPayload`.
    pub not_in_payload: bool,
    /// `samm:payloadName`.
    pub payload_name: Option<String>,
    /// Abstract property this one extends.
    pub extends: Option<ElementId>,
    /// Property this reference node stands for.
    pub reference: Option<ElementId>,
}

/// `samm:Operation`.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Common attributes.
    pub base: BaseAttributes,
    /// Input properties.
    pub input: Vec<ElementId>,
    /// Output property.
    pub output: Option<ElementId>,
}

/// `samm:Event`.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Common attributes.
    pub base: BaseAttributes,
    /// Parameter properties.
    pub parameters: Vec<ElementId>,
}

/// `unit:Unit`.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// Common attributes.
    pub base: BaseAttributes,
    /// Symbol, e.g. `kg`.
    pub symbol: Option<String>,
    /// UN/CEFACT common code, e.g. `KGM`.
    pub code: Option<String>,
    /// Name of the unit this one is defined in terms of.
    pub reference_unit: Option<String>,
    /// Conversion factor to the reference unit.
    pub conversion_factor: Option<String>,
    /// Names of the quantity kinds this unit measures.
    pub quantity_kinds: Vec<String>,
}

impl Unit {
    /// Looks up `name` in the built-in unit catalog.
    #[must_use]
    pub fn from_catalog(name: &str) -> Option<Self> {
        let individual = MetaModel::full().unit(name)?;
        let text = |property: &str| {
            individual.values(property).find_map(|v| match v {
                IndividualValue::Str(s) => Some((*s).to_owned()),
                _ => None,
            })
        };
        let names = |property: &str| -> Vec<String> {
            individual
                .values(property)
                .filter_map(|v| match v {
                    IndividualValue::IriRef(iri) => Some(local_name(iri).to_owned()),
                    _ => None,
                })
                .collect()
        };
        let mut base = BaseAttributes {
            urn: AspectModelUrn::parse(individual.id).ok(),
            ..BaseAttributes::default()
        };
        base.preferred_names.insert("en", individual.label);
        Some(Self {
            base,
            symbol: text(UNIT_SYMBOL),
            code: text(UNIT_CODE),
            reference_unit: names(UNIT_REFERENCE_UNIT).into_iter().next(),
            conversion_factor: text(UNIT_CONVERSION_FACTOR),
            quantity_kinds: names(UNIT_QUANTITY_KIND_ATTR),
        })
    }
}

/// `unit:QuantityKind`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityKind {
    /// Common attributes.
    pub base: BaseAttributes,
}

impl QuantityKind {
    /// Looks up `name` in the built-in quantity kind catalog.
    #[must_use]
    pub fn from_catalog(name: &str) -> Option<Self> {
        let individual = MetaModel::full().quantity_kind(name)?;
        let mut base = BaseAttributes {
            urn: AspectModelUrn::parse(individual.id).ok(),
            ..BaseAttributes::default()
        };
        base.preferred_names.insert("en", individual.label);
        Some(Self { base })
    }
}

/// An instance of an Entity: one value per asserted property.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityInstance {
    /// Identifier and source; instances have no names or descriptions.
    pub base: BaseAttributes,
    /// The instantiated entity.
    pub entity: ElementId,
    /// `(property, value)` pairs in the entity's property order.
    pub assertions: Vec<(ElementId, Value)>,
}

impl EntityInstance {
    /// Value asserted for `property`.
    #[must_use]
    pub fn value_of(&self, property: ElementId) -> Option<&Value> {
        self.assertions
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v)
    }
}

/// A value that is an element of its own (`samm:Value` resources).
#[derive(Debug, Clone, PartialEq)]
pub struct ValueElement {
    /// Common attributes.
    pub base: BaseAttributes,
    /// The value.
    pub value: Value,
}

/// Every element kind of the meta model.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelElement {
    /// An Aspect.
    Aspect(Aspect),
    /// A concrete Entity.
    Entity(Entity),
    /// An abstract Entity.
    AbstractEntity(Entity),
    /// A concrete Property.
    Property(Property),
    /// An abstract Property.
    AbstractProperty(Property),
    /// A Characteristic of any subtype.
    Characteristic(Characteristic),
    /// A Constraint of any subtype.
    Constraint(Constraint),
    /// An Operation.
    Operation(Operation),
    /// An Event.
    Event(Event),
    /// A Unit.
    Unit(Unit),
    /// A QuantityKind.
    QuantityKind(QuantityKind),
    /// An Entity instance.
    EntityInstance(EntityInstance),
    /// A named scalar value.
    ScalarValue(ValueElement),
    /// A named collection value.
    CollectionValue(ValueElement),
}

impl ModelElement {
    /// Common attributes.
    #[must_use]
    pub fn base(&self) -> &BaseAttributes {
        match self {
            Self::Aspect(e) => &e.base,
            Self::Entity(e) | Self::AbstractEntity(e) => &e.base,
            Self::Property(e) | Self::AbstractProperty(e) => &e.base,
            Self::Characteristic(e) => &e.base,
            Self::Constraint(e) => &e.base,
            Self::Operation(e) => &e.base,
            Self::Event(e) => &e.base,
            Self::Unit(e) => &e.base,
            Self::QuantityKind(e) => &e.base,
            Self::EntityInstance(e) => &e.base,
            Self::ScalarValue(e) | Self::CollectionValue(e) => &e.base,
        }
    }

    /// The element's kind.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Aspect(_) => ElementKind::Aspect,
            Self::Entity(_) => ElementKind::Entity,
            Self::AbstractEntity(_) => ElementKind::AbstractEntity,
            Self::Property(_) => ElementKind::Property,
            Self::AbstractProperty(_) => ElementKind::AbstractProperty,
            Self::Characteristic(c) => c.kind.element_kind(),
            Self::Constraint(c) => c.kind.element_kind(),
            Self::Operation(_) => ElementKind::Operation,
            Self::Event(_) => ElementKind::Event,
            Self::Unit(_) => ElementKind::Unit,
            Self::QuantityKind(_) => ElementKind::QuantityKind,
            Self::EntityInstance(_) => ElementKind::EntityInstance,
            Self::ScalarValue(_) | Self::CollectionValue(_) => ElementKind::Value,
        }
    }

    /// Identifier, if named.
    #[must_use]
    pub fn urn(&self) -> Option<&AspectModelUrn> {
        self.base().urn.as_ref()
    }

    /// Human readable label for messages.
    #[must_use]
    pub fn label(&self) -> String {
        self.base().label(self.kind())
    }

    /// The Aspect, if this is one.
    #[must_use]
    pub fn as_aspect(&self) -> Option<&Aspect> {
        match self {
            Self::Aspect(a) => Some(a),
            _ => None,
        }
    }

    /// The Entity, abstract or not.
    #[must_use]
    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Self::Entity(e) | Self::AbstractEntity(e) => Some(e),
            _ => None,
        }
    }

    /// The Property, abstract or not.
    #[must_use]
    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Self::Property(p) | Self::AbstractProperty(p) => Some(p),
            _ => None,
        }
    }

    /// The Characteristic, if this is one.
    #[must_use]
    pub fn as_characteristic(&self) -> Option<&Characteristic> {
        match self {
            Self::Characteristic(c) => Some(c),
            _ => None,
        }
    }

    /// The Constraint, if this is one.
    #[must_use]
    pub fn as_constraint(&self) -> Option<&Constraint> {
        match self {
            Self::Constraint(c) => Some(c),
            _ => None,
        }
    }

    /// The Unit, if this is one.
    #[must_use]
    pub fn as_unit(&self) -> Option<&Unit> {
        match self {
            Self::Unit(u) => Some(u),
            _ => None,
        }
    }

    /// The Entity instance, if this is one.
    #[must_use]
    pub fn as_entity_instance(&self) -> Option<&EntityInstance> {
        match self {
            Self::EntityInstance(i) => Some(i),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
enum Slot {
    Pending { kind: ElementKind, resource: String },
    Ready(ModelElement),
}

/// Owns every element of a model.
#[derive(Debug, Clone, Default)]
pub struct ElementArena {
    slots: Vec<Slot>,
}

impl ElementArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a finished element.
    pub fn alloc(&mut self, element: ModelElement) -> ElementId {
        self.slots.push(Slot::Ready(element));
        ElementId(self.slots.len() - 1)
    }

    /// Reserves a slot for an element still under construction.
    pub(crate) fn reserve(&mut self, kind: ElementKind, resource: String) -> ElementId {
        self.slots.push(Slot::Pending { kind, resource });
        ElementId(self.slots.len() - 1)
    }

    /// Fills a reserved slot.
    pub(crate) fn fill(&mut self, id: ElementId, element: ModelElement) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            *slot = Slot::Ready(element);
        }
    }

    /// Number of slots, pending ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the arena holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The element, unless `id` is unknown or still under construction.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&ModelElement> {
        match self.slots.get(id.0)? {
            Slot::Ready(element) => Some(element),
            Slot::Pending { .. } => None,
        }
    }

    /// The kind of the element, known as soon as its slot is reserved.
    #[must_use]
    pub fn kind_of(&self, id: ElementId) -> Option<ElementKind> {
        match self.slots.get(id.0)? {
            Slot::Ready(element) => Some(element.kind()),
            Slot::Pending { kind, .. } => Some(*kind),
        }
    }

    /// The element, or [`LoadError::Cycle`] if it is still under construction.
    pub(crate) fn require(&self, id: ElementId) -> Result<&ModelElement, LoadError> {
        match self.slots.get(id.0) {
            Some(Slot::Ready(element)) => Ok(element),
            Some(Slot::Pending { resource, .. }) => Err(LoadError::Cycle {
                resource: resource.clone(),
            }),
            None => Err(LoadError::UnknownType {
                resource: format!("element #{}", id.0),
            }),
        }
    }

    /// Every finished element with its id.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &ModelElement)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| match slot {
            Slot::Ready(element) => Some((ElementId(i), element)),
            Slot::Pending { .. } => None,
        })
    }

    /// The entity (abstract or not) at `id`.
    #[must_use]
    pub fn entity(&self, id: ElementId) -> Option<&Entity> {
        self.get(id).and_then(ModelElement::as_entity)
    }

    /// The property (abstract or not) at `id`.
    #[must_use]
    pub fn property(&self, id: ElementId) -> Option<&Property> {
        self.get(id).and_then(ModelElement::as_property)
    }

    /// The characteristic at `id`.
    #[must_use]
    pub fn characteristic(&self, id: ElementId) -> Option<&Characteristic> {
        self.get(id).and_then(ModelElement::as_characteristic)
    }

    /// The unit at `id`.
    #[must_use]
    pub fn unit(&self, id: ElementId) -> Option<&Unit> {
        self.get(id).and_then(ModelElement::as_unit)
    }

    /// Identifier of a property, looking through property reference nodes.
    #[must_use]
    pub fn property_urn(&self, id: ElementId) -> Option<&AspectModelUrn> {
        let mut current = id;
        for _ in 0..=self.slots.len() {
            let property = self.property(current)?;
            match (&property.base.urn, property.reference) {
                (Some(urn), _) => return Some(urn),
                (None, Some(target)) => current = target,
                (None, None) => return None,
            }
        }
        None
    }

    /// True if `candidate` is `property` or a reference node standing for it.
    #[must_use]
    pub fn is_same_property(&self, candidate: ElementId, property: ElementId) -> bool {
        let mut current = Some(candidate);
        for _ in 0..=self.slots.len() {
            match current {
                Some(id) if id == property => return true,
                Some(id) => current = self.property(id).and_then(|p| p.reference),
                None => return false,
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_text_keeps_first_entry_per_locale() {
        let mut text = LocalizedText::default();
        assert!(text.insert("en", "Weight"));
        assert!(!text.insert("en", "Mass"));
        assert!(text.insert("de", "Gewicht"));
        assert_eq!(text.get("en"), Some("Weight"));
        assert_eq!(text.iter().collect::<Vec<_>>(), vec![("de", "Gewicht"), ("en", "Weight")]);
    }

    #[test]
    fn pending_slots_report_cycles() {
        let mut arena = ElementArena::new();
        let id = arena.reserve(ElementKind::Entity, "<urn:samm:com.example:1.0.0#A>".into());
        assert!(arena.get(id).is_none());
        assert_eq!(arena.kind_of(id), Some(ElementKind::Entity));
        assert!(matches!(arena.require(id), Err(LoadError::Cycle { .. })));
        arena.fill(
            id,
            ModelElement::Entity(Entity {
                base: BaseAttributes::default(),
                properties: Vec::new(),
                extends: None,
            }),
        );
        assert!(arena.entity(id).is_some());
        assert_eq!(arena.iter().count(), 1);
    }

    #[test]
    fn catalog_units_carry_quantity_kinds() {
        let second = Unit::from_catalog("secondUnitOfTime").unwrap();
        assert_eq!(second.symbol.as_deref(), Some("s"));
        assert_eq!(second.quantity_kinds, vec!["time".to_owned()]);
        let gram = Unit::from_catalog("gram").unwrap();
        assert_eq!(gram.reference_unit.as_deref(), Some("kilogram"));
        assert!(Unit::from_catalog("time").is_none());
        assert!(QuantityKind::from_catalog("mass").is_some());
    }

    #[test]
    fn property_reference_nodes_resolve_to_their_target() {
        let mut arena = ElementArena::new();
        let urn = AspectModelUrn::parse("urn:samm:com.example:1.0.0#speed").unwrap();
        let target = arena.alloc(ModelElement::Property(Property {
            base: BaseAttributes::named(urn.clone()),
            characteristic: None,
            optional: false,
            not_in_payload: false,
            payload_name: None,
            extends: None,
            reference: None,
        }));
        let node = arena.alloc(ModelElement::Property(Property {
            base: BaseAttributes::default(),
            characteristic: None,
            optional: true,
            not_in_payload: false,
            payload_name: None,
            extends: None,
            reference: Some(target),
        }));
        assert_eq!(arena.property_urn(node), Some(&urn));
        assert!(arena.is_same_property(node, target));
        assert!(!arena.is_same_property(target, node));
    }
}
