//! The closed set of element kinds.

use std::fmt;

use crate::urn::AspectModelUrn;

/// Every kind of model element a graph resource can materialize to.
///
/// Kinds map one-to-one to the meta-model classes a resource can be typed
/// with; [`EntityInstance`](ElementKind::EntityInstance) is the exception and
/// covers resources typed with a user-defined Entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `samm:Aspect`.
    Aspect,
    /// `samm:Entity`.
    Entity,
    /// `samm:AbstractEntity`.
    AbstractEntity,
    /// `samm:Property`.
    Property,
    /// `samm:AbstractProperty`.
    AbstractProperty,
    /// `samm:Characteristic`.
    Characteristic,
    /// `samm-c:Trait`.
    Trait,
    /// `samm-c:Collection`.
    Collection,
    /// `samm-c:List`.
    List,
    /// `samm-c:Set`.
    Set,
    /// `samm-c:SortedSet`.
    SortedSet,
    /// `samm-c:TimeSeries`.
    TimeSeries,
    /// `samm-c:Enumeration`.
    Enumeration,
    /// `samm-c:State`.
    State,
    /// `samm-c:Measurement`.
    Measurement,
    /// `samm-c:Quantifiable`.
    Quantifiable,
    /// `samm-c:Duration`.
    Duration,
    /// `samm-c:Code`.
    Code,
    /// `samm-c:Either`.
    Either,
    /// `samm-c:SingleEntity`.
    SingleEntity,
    /// `samm-c:StructuredValue`.
    StructuredValue,
    /// `samm-c:RangeConstraint`.
    RangeConstraint,
    /// `samm-c:LengthConstraint`.
    LengthConstraint,
    /// `samm-c:EncodingConstraint`.
    EncodingConstraint,
    /// `samm-c:RegularExpressionConstraint`.
    RegularExpressionConstraint,
    /// `samm-c:FixedPointConstraint`.
    FixedPointConstraint,
    /// `samm-c:LanguageConstraint`.
    LanguageConstraint,
    /// `samm-c:LocaleConstraint`.
    LocaleConstraint,
    /// `samm:Operation`.
    Operation,
    /// `samm:Event`.
    Event,
    /// `unit:Unit`.
    Unit,
    /// `unit:QuantityKind`.
    QuantityKind,
    /// `samm:Value`.
    Value,
    /// An instance of a user-defined Entity.
    EntityInstance,
}

const KINDS: &[(&str, &str, ElementKind)] = &[
    ("meta-model", "Aspect", ElementKind::Aspect),
    ("meta-model", "Entity", ElementKind::Entity),
    ("meta-model", "AbstractEntity", ElementKind::AbstractEntity),
    ("meta-model", "Property", ElementKind::Property),
    ("meta-model", "AbstractProperty", ElementKind::AbstractProperty),
    ("meta-model", "Characteristic", ElementKind::Characteristic),
    ("meta-model", "Operation", ElementKind::Operation),
    ("meta-model", "Event", ElementKind::Event),
    ("meta-model", "Value", ElementKind::Value),
    ("characteristic", "Trait", ElementKind::Trait),
    ("characteristic", "Collection", ElementKind::Collection),
    ("characteristic", "List", ElementKind::List),
    ("characteristic", "Set", ElementKind::Set),
    ("characteristic", "SortedSet", ElementKind::SortedSet),
    ("characteristic", "TimeSeries", ElementKind::TimeSeries),
    ("characteristic", "Enumeration", ElementKind::Enumeration),
    ("characteristic", "State", ElementKind::State),
    ("characteristic", "Measurement", ElementKind::Measurement),
    ("characteristic", "Quantifiable", ElementKind::Quantifiable),
    ("characteristic", "Duration", ElementKind::Duration),
    ("characteristic", "Code", ElementKind::Code),
    ("characteristic", "Either", ElementKind::Either),
    ("characteristic", "SingleEntity", ElementKind::SingleEntity),
    ("characteristic", "StructuredValue", ElementKind::StructuredValue),
    ("characteristic", "RangeConstraint", ElementKind::RangeConstraint),
    ("characteristic", "LengthConstraint", ElementKind::LengthConstraint),
    ("characteristic", "EncodingConstraint", ElementKind::EncodingConstraint),
    (
        "characteristic",
        "RegularExpressionConstraint",
        ElementKind::RegularExpressionConstraint,
    ),
    ("characteristic", "FixedPointConstraint", ElementKind::FixedPointConstraint),
    ("characteristic", "LanguageConstraint", ElementKind::LanguageConstraint),
    ("characteristic", "LocaleConstraint", ElementKind::LocaleConstraint),
    ("unit", "Unit", ElementKind::Unit),
    ("unit", "QuantityKind", ElementKind::QuantityKind),
];

impl ElementKind {
    /// Maps a meta-model class IRI to its kind.
    ///
    /// Any meta-model version and either URN spelling is accepted; IRIs that
    /// are not meta-model classes yield `None`.
    #[must_use]
    pub fn from_type_iri(iri: &str) -> Option<Self> {
        let urn = AspectModelUrn::parse(iri).ok()?;
        if !urn.is_builtin() {
            return None;
        }
        let element_type = urn.element_type()?;
        KINDS
            .iter()
            .find(|(t, name, _)| *t == element_type && *name == urn.name())
            .map(|(_, _, kind)| *kind)
    }

    /// Local name of the meta-model class, e.g. `"Trait"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::EntityInstance => "EntityInstance",
            kind => KINDS
                .iter()
                .find(|(_, _, k)| *k == kind)
                .map_or("Element", |(_, name, _)| name),
        }
    }

    /// True for the Characteristic class and all its subclasses, constraints included.
    #[must_use]
    pub fn is_characteristic(self) -> bool {
        matches!(
            self,
            Self::Characteristic
                | Self::Trait
                | Self::Collection
                | Self::List
                | Self::Set
                | Self::SortedSet
                | Self::TimeSeries
                | Self::Enumeration
                | Self::State
                | Self::Measurement
                | Self::Quantifiable
                | Self::Duration
                | Self::Code
                | Self::Either
                | Self::SingleEntity
                | Self::StructuredValue
        ) || self.is_constraint()
    }

    /// True for the Constraint subclasses.
    #[must_use]
    pub fn is_constraint(self) -> bool {
        matches!(
            self,
            Self::RangeConstraint
                | Self::LengthConstraint
                | Self::EncodingConstraint
                | Self::RegularExpressionConstraint
                | Self::FixedPointConstraint
                | Self::LanguageConstraint
                | Self::LocaleConstraint
        )
    }

    /// True for Collection and its subclasses.
    #[must_use]
    pub fn is_collection(self) -> bool {
        matches!(
            self,
            Self::Collection | Self::List | Self::Set | Self::SortedSet | Self::TimeSeries
        )
    }

    /// True for Entity and AbstractEntity.
    #[must_use]
    pub fn is_entity(self) -> bool {
        matches!(self, Self::Entity | Self::AbstractEntity)
    }

    /// True for Property and AbstractProperty.
    #[must_use]
    pub fn is_property(self) -> bool {
        matches!(self, Self::Property | Self::AbstractProperty)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samm_metamodel::model::iris::*;

    #[test]
    fn maps_meta_model_classes() {
        assert_eq!(ElementKind::from_type_iri(SAMM_ASPECT), Some(ElementKind::Aspect));
        assert_eq!(ElementKind::from_type_iri(SAMM_C_TRAIT), Some(ElementKind::Trait));
        assert_eq!(ElementKind::from_type_iri(UNIT_UNIT), Some(ElementKind::Unit));
        assert_eq!(
            ElementKind::from_type_iri(SAMM_C_RANGE_CONSTRAINT),
            Some(ElementKind::RangeConstraint)
        );
    }

    #[test]
    fn accepts_other_versions_and_legacy_spelling() {
        assert_eq!(
            ElementKind::from_type_iri("urn:samm:org.eclipse.esmf.samm:meta-model:2.0.0#Entity"),
            Some(ElementKind::Entity)
        );
        assert_eq!(
            ElementKind::from_type_iri(
                "urn:bamm:io.openmanufacturing:characteristic:2.0.0#Enumeration"
            ),
            Some(ElementKind::Enumeration)
        );
    }

    #[test]
    fn rejects_non_classes() {
        assert_eq!(ElementKind::from_type_iri(SAMM_C_TEXT), None);
        assert_eq!(ElementKind::from_type_iri("urn:samm:com.example:1.0.0#Aspect"), None);
        assert_eq!(ElementKind::from_type_iri(XSD_STRING), None);
    }

    #[test]
    fn families() {
        assert!(ElementKind::TimeSeries.is_collection());
        assert!(ElementKind::LocaleConstraint.is_characteristic());
        assert!(!ElementKind::Property.is_characteristic());
        assert_eq!(ElementKind::SortedSet.to_string(), "SortedSet");
        assert_eq!(ElementKind::EntityInstance.name(), "EntityInstance");
    }
}
