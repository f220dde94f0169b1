use samm_metamodel::model::iris::{
    SAMM_C_AT_LEAST, SAMM_C_AT_MOST, SAMM_C_GREATER_THAN, SAMM_C_LESS_THAN,
};
use samm_metamodel::model::local_name;

use super::{BaseAttributes, ElementId, ScalarValue, Type, Value};
use crate::kind::ElementKind;

/// Ordering and uniqueness semantics of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionType {
    /// Unordered, duplicates allowed.
    Collection,
    /// Ordered, duplicates allowed.
    List,
    /// Unordered, no duplicates.
    Set,
    /// Ordered, no duplicates.
    SortedSet,
}

/// A Characteristic: how a Property's value is to be interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct Characteristic {
    /// Common attributes.
    pub base: BaseAttributes,
    /// Declared `samm:dataType`. Traits take theirs from the base
    /// characteristic; see [`ElementArena::effective_data_type`](super::ElementArena::effective_data_type).
    pub data_type: Option<Type>,
    /// Subtype and its attributes.
    pub kind: CharacteristicKind,
}

/// The Characteristic subtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacteristicKind {
    /// A plain `samm:Characteristic`.
    Plain,
    /// Constraints applied on top of a base characteristic.
    Trait {
        /// The constrained characteristic.
        base: ElementId,
        /// The constraints.
        constraints: Vec<ElementId>,
    },
    /// Collection, List, Set and SortedSet.
    Collection {
        /// Which of the four shapes.
        collection_type: CollectionType,
        /// Characteristic of the elements, when given instead of a data type.
        element_characteristic: Option<ElementId>,
    },
    /// A sorted set of timestamped values.
    TimeSeries {
        /// Characteristic of the elements.
        element_characteristic: Option<ElementId>,
    },
    /// A fixed set of values.
    Enumeration {
        /// The allowed values.
        values: Vec<Value>,
    },
    /// An enumeration with a default.
    State {
        /// The allowed values.
        values: Vec<Value>,
        /// The default; one of `values`.
        default: Value,
    },
    /// A quantity with a fixed unit.
    Measurement {
        /// The unit.
        unit: ElementId,
    },
    /// A quantity, optionally with a unit.
    Quantifiable {
        /// The unit.
        unit: Option<ElementId>,
    },
    /// A time span in a unit of time.
    Duration {
        /// The unit; measures time.
        unit: ElementId,
    },
    /// A code, e.g. an error number.
    Code,
    /// One of two alternatives.
    Either {
        /// Left alternative.
        left: ElementId,
        /// Right alternative.
        right: ElementId,
    },
    /// A single Entity value.
    SingleEntity,
    /// A string that decomposes into properties by a pattern.
    StructuredValue {
        /// Regular expression with one group per property.
        deconstruction_rule: String,
        /// Properties and literal delimiters, in order.
        elements: Vec<StructuredElement>,
    },
}

impl CharacteristicKind {
    /// Kind tag of this subtype.
    #[must_use]
    pub fn element_kind(&self) -> ElementKind {
        match self {
            Self::Plain => ElementKind::Characteristic,
            Self::Trait { .. } => ElementKind::Trait,
            Self::Collection {
                collection_type, ..
            } => match collection_type {
                CollectionType::Collection => ElementKind::Collection,
                CollectionType::List => ElementKind::List,
                CollectionType::Set => ElementKind::Set,
                CollectionType::SortedSet => ElementKind::SortedSet,
            },
            Self::TimeSeries { .. } => ElementKind::TimeSeries,
            Self::Enumeration { .. } => ElementKind::Enumeration,
            Self::State { .. } => ElementKind::State,
            Self::Measurement { .. } => ElementKind::Measurement,
            Self::Quantifiable { .. } => ElementKind::Quantifiable,
            Self::Duration { .. } => ElementKind::Duration,
            Self::Code => ElementKind::Code,
            Self::Either { .. } => ElementKind::Either,
            Self::SingleEntity => ElementKind::SingleEntity,
            Self::StructuredValue { .. } => ElementKind::StructuredValue,
        }
    }

    /// Collection shape, for the collection-like subtypes.
    #[must_use]
    pub fn collection_type(&self) -> Option<CollectionType> {
        match self {
            Self::Collection {
                collection_type, ..
            } => Some(*collection_type),
            Self::TimeSeries { .. } => Some(CollectionType::SortedSet),
            _ => None,
        }
    }

    /// Element characteristic of a collection-like subtype.
    #[must_use]
    pub fn element_characteristic(&self) -> Option<ElementId> {
        match self {
            Self::Collection {
                element_characteristic,
                ..
            }
            | Self::TimeSeries {
                element_characteristic,
            } => *element_characteristic,
            _ => None,
        }
    }
}

impl CollectionType {
    /// The shape a collection characteristic of `kind` has.
    #[must_use]
    pub fn for_kind(kind: ElementKind) -> Option<Self> {
        match kind {
            ElementKind::Collection => Some(Self::Collection),
            ElementKind::List => Some(Self::List),
            ElementKind::Set => Some(Self::Set),
            ElementKind::SortedSet | ElementKind::TimeSeries => Some(Self::SortedSet),
            _ => None,
        }
    }
}

/// Part of a StructuredValue's element list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuredElement {
    /// A property filled by a pattern group.
    Property(ElementId),
    /// Literal text between groups.
    Delimiter(String),
}

/// A Constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Common attributes.
    pub base: BaseAttributes,
    /// Subtype and its attributes.
    pub kind: ConstraintKind,
}

/// How a range bound compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundDefinition {
    /// No bound.
    Open,
    /// `value >= bound`.
    AtLeast,
    /// `value > bound`.
    GreaterThan,
    /// `value < bound`.
    LessThan,
    /// `value <= bound`.
    AtMost,
}

impl BoundDefinition {
    /// Maps a `samm-c:BoundDefinition` individual to its variant. Any
    /// meta-model version is accepted.
    #[must_use]
    pub fn from_iri(iri: &str) -> Option<Self> {
        let name = local_name(iri);
        [
            (SAMM_C_AT_LEAST, Self::AtLeast),
            (SAMM_C_GREATER_THAN, Self::GreaterThan),
            (SAMM_C_LESS_THAN, Self::LessThan),
            (SAMM_C_AT_MOST, Self::AtMost),
        ]
        .into_iter()
        .find(|(known, _)| local_name(known) == name)
        .map(|(_, bound)| bound)
    }

    /// True for the definitions that can qualify a lower bound.
    #[must_use]
    pub fn is_lower(self) -> bool {
        matches!(self, Self::AtLeast | Self::GreaterThan)
    }

    /// True for the definitions that can qualify an upper bound.
    #[must_use]
    pub fn is_upper(self) -> bool {
        matches!(self, Self::LessThan | Self::AtMost)
    }
}

/// The Constraint subtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintKind {
    /// Value range.
    Range {
        /// Lower bound.
        min: Option<ScalarValue>,
        /// Upper bound.
        max: Option<ScalarValue>,
        /// How `min` compares; `Open` without a lower bound.
        lower: BoundDefinition,
        /// How `max` compares; `Open` without an upper bound.
        upper: BoundDefinition,
    },
    /// Length of strings, binaries or collections.
    Length {
        /// Minimum length.
        min: Option<u64>,
        /// Maximum length.
        max: Option<u64>,
    },
    /// Character encoding, e.g. `samm:UTF-8`.
    Encoding {
        /// Encoding IRI.
        value: String,
    },
    /// Regular expression the value must match.
    RegularExpression {
        /// The pattern.
        value: String,
    },
    /// Fixed-point number layout.
    FixedPoint {
        /// Digits after the decimal point.
        scale: u32,
        /// Digits before the decimal point.
        integer: u32,
    },
    /// Language of text values.
    Language {
        /// ISO 639-1 code.
        language_code: String,
    },
    /// Locale of text values.
    Locale {
        /// BCP 47 locale.
        locale_code: String,
    },
}

impl ConstraintKind {
    /// Kind tag of this subtype.
    #[must_use]
    pub fn element_kind(&self) -> ElementKind {
        match self {
            Self::Range { .. } => ElementKind::RangeConstraint,
            Self::Length { .. } => ElementKind::LengthConstraint,
            Self::Encoding { .. } => ElementKind::EncodingConstraint,
            Self::RegularExpression { .. } => ElementKind::RegularExpressionConstraint,
            Self::FixedPoint { .. } => ElementKind::FixedPointConstraint,
            Self::Language { .. } => ElementKind::LanguageConstraint,
            Self::Locale { .. } => ElementKind::LocaleConstraint,
        }
    }
}
