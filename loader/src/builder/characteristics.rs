//! Builders for Characteristics and Constraints.

use super::{check_refs, is_characteristic, Builder};
use crate::datatypes::normalize_locale;
use crate::error::BuildError;
use crate::kind::ElementKind;
use crate::model::{
    BoundDefinition, Characteristic, CharacteristicKind, CollectionType, Constraint,
    ConstraintKind, ElementArena, ElementId, ModelElement, ScalarValue, StructuredElement, Type,
    Value,
};

/// Fields shared by every Characteristic, plus the subtype's own `K`.
#[derive(Debug, Clone, Default)]
pub struct CharacteristicFields<K> {
    data_type: Option<Type>,
    kind: K,
}

fn start<K>(kind: K) -> Builder<CharacteristicFields<K>> {
    Builder::with(None, CharacteristicFields { data_type: None, kind })
}

impl<K> Builder<CharacteristicFields<K>> {
    /// Sets the data type.
    #[must_use]
    pub fn data_type(mut self, data_type: Type) -> Self {
        self.payload.data_type = Some(data_type);
        self
    }

    fn finish(
        self,
        arena: &mut ElementArena,
        kind: CharacteristicKind,
    ) -> Result<ElementId, BuildError> {
        Ok(arena.alloc(ModelElement::Characteristic(Characteristic {
            base: self.base,
            data_type: self.payload.data_type,
            kind,
        })))
    }

    fn require_data_type(&self, kind: ElementKind) -> Result<&Type, BuildError> {
        let data_type = self.payload.data_type.as_ref().ok_or_else(|| BuildError::MissingField {
            element: self.label(kind),
            field: "data type",
        })?;
        Ok(data_type)
    }

    fn check_data_type(&self, arena: &ElementArena, kind: ElementKind) -> Result<(), BuildError> {
        if let Some(Type::Entity(entity)) = &self.payload.data_type {
            check_refs(arena, &self.label(kind), [*entity], "an entity", ElementKind::is_entity)?;
        }
        Ok(())
    }
}

/// Subtype tag of the characteristics that carry nothing beyond a data type.
#[derive(Debug, Clone, Copy)]
pub struct PlainFields(ElementKind);

/// Starts a plain Characteristic.
#[must_use]
pub fn characteristic() -> Builder<CharacteristicFields<PlainFields>> {
    start(PlainFields(ElementKind::Characteristic))
}

/// Starts a Code.
#[must_use]
pub fn code() -> Builder<CharacteristicFields<PlainFields>> {
    start(PlainFields(ElementKind::Code))
}

/// Starts a SingleEntity; its data type must be an Entity.
#[must_use]
pub fn single_entity() -> Builder<CharacteristicFields<PlainFields>> {
    start(PlainFields(ElementKind::SingleEntity))
}

impl Builder<CharacteristicFields<PlainFields>> {
    /// Checks and adds the characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] without a data type, and
    /// [`BuildError::Invariant`] if a SingleEntity is given a scalar type.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let PlainFields(kind) = self.payload.kind;
        let data_type = self.require_data_type(kind)?;
        if kind == ElementKind::SingleEntity && data_type.entity().is_none() {
            return Err(BuildError::Invariant {
                element: self.label(kind),
                rule: "the data type of a SingleEntity must be an entity".to_owned(),
            });
        }
        self.check_data_type(arena, kind)?;
        let subtype = match kind {
            ElementKind::Code => CharacteristicKind::Code,
            ElementKind::SingleEntity => CharacteristicKind::SingleEntity,
            _ => CharacteristicKind::Plain,
        };
        self.finish(arena, subtype)
    }
}

/// Fields of a Trait.
#[derive(Debug, Clone, Default)]
pub struct TraitFields {
    base: Option<ElementId>,
    constraints: Vec<ElementId>,
}

/// Starts a Trait.
#[must_use]
pub fn trait_() -> Builder<CharacteristicFields<TraitFields>> {
    start(TraitFields::default())
}

impl Builder<CharacteristicFields<TraitFields>> {
    /// Sets the constrained characteristic.
    #[must_use]
    pub fn base_characteristic(mut self, base: ElementId) -> Self {
        self.payload.kind.base = Some(base);
        self
    }

    /// Appends a constraint.
    #[must_use]
    pub fn constraint(mut self, constraint: ElementId) -> Self {
        self.payload.kind.constraints.push(constraint);
        self
    }

    /// Checks and adds the Trait.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] without a base characteristic or
    /// constraints, and [`BuildError::Invariant`] if a data type was set or
    /// a reference has the wrong kind.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let element = self.label(ElementKind::Trait);
        let Some(base) = self.payload.kind.base else {
            return Err(BuildError::MissingField {
                element,
                field: "base characteristic",
            });
        };
        if self.payload.kind.constraints.is_empty() {
            return Err(BuildError::MissingField {
                element,
                field: "constraint",
            });
        }
        if self.payload.data_type.is_some() {
            return Err(BuildError::Invariant {
                element,
                rule: "a Trait takes its data type from its base characteristic".to_owned(),
            });
        }
        check_refs(arena, &element, [base], "a characteristic", is_characteristic)?;
        let constraints = self.payload.kind.constraints.clone();
        check_refs(arena, &element, constraints.iter().copied(), "a constraint", ElementKind::is_constraint)?;
        self.finish(arena, CharacteristicKind::Trait { base, constraints })
    }
}

/// Fields of the collection characteristics.
#[derive(Debug, Clone)]
pub struct CollectionFields {
    shape: ElementKind,
    element_characteristic: Option<ElementId>,
}

fn start_collection(shape: ElementKind) -> Builder<CharacteristicFields<CollectionFields>> {
    start(CollectionFields {
        shape,
        element_characteristic: None,
    })
}

/// Starts a collection characteristic of the given shape.
#[must_use]
pub fn collection(collection_type: CollectionType) -> Builder<CharacteristicFields<CollectionFields>> {
    start_collection(match collection_type {
        CollectionType::Collection => ElementKind::Collection,
        CollectionType::List => ElementKind::List,
        CollectionType::Set => ElementKind::Set,
        CollectionType::SortedSet => ElementKind::SortedSet,
    })
}

/// Starts a List.
#[must_use]
pub fn list() -> Builder<CharacteristicFields<CollectionFields>> {
    collection(CollectionType::List)
}

/// Starts a Set.
#[must_use]
pub fn set() -> Builder<CharacteristicFields<CollectionFields>> {
    collection(CollectionType::Set)
}

/// Starts a SortedSet.
#[must_use]
pub fn sorted_set() -> Builder<CharacteristicFields<CollectionFields>> {
    collection(CollectionType::SortedSet)
}

/// Starts a TimeSeries.
#[must_use]
pub fn time_series() -> Builder<CharacteristicFields<CollectionFields>> {
    start_collection(ElementKind::TimeSeries)
}

impl Builder<CharacteristicFields<CollectionFields>> {
    /// Sets the characteristic of the elements, instead of a data type.
    #[must_use]
    pub fn element_characteristic(mut self, characteristic: ElementId) -> Self {
        self.payload.kind.element_characteristic = Some(characteristic);
        self
    }

    /// Checks and adds the collection.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Invariant`] unless exactly one of data type and
    /// element characteristic is set, or if the element characteristic is
    /// not a characteristic.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let shape = self.payload.kind.shape;
        let element = self.label(shape);
        let element_characteristic = self.payload.kind.element_characteristic;
        if self.payload.data_type.is_some() == element_characteristic.is_some() {
            return Err(BuildError::Invariant {
                element,
                rule: "a collection needs either a data type or an element characteristic"
                    .to_owned(),
            });
        }
        if let Some(id) = element_characteristic {
            check_refs(arena, &element, [id], "a characteristic", is_characteristic)?;
        }
        self.check_data_type(arena, shape)?;
        let subtype = match CollectionType::for_kind(shape) {
            Some(collection_type) if shape != ElementKind::TimeSeries => {
                CharacteristicKind::Collection {
                    collection_type,
                    element_characteristic,
                }
            }
            _ => CharacteristicKind::TimeSeries {
                element_characteristic,
            },
        };
        self.finish(arena, subtype)
    }
}

/// Fields of an Enumeration.
#[derive(Debug, Clone, Default)]
pub struct EnumerationFields {
    values: Vec<Value>,
}

/// Fields of a State.
#[derive(Debug, Clone, Default)]
pub struct StateFields {
    values: Vec<Value>,
    default: Option<Value>,
}

/// Starts an Enumeration.
#[must_use]
pub fn enumeration() -> Builder<CharacteristicFields<EnumerationFields>> {
    start(EnumerationFields::default())
}

/// Starts a State.
#[must_use]
pub fn state() -> Builder<CharacteristicFields<StateFields>> {
    start(StateFields::default())
}

impl<K> Builder<CharacteristicFields<K>> {
    fn check_values(
        &self,
        arena: &ElementArena,
        kind: ElementKind,
        values: &[Value],
    ) -> Result<(), BuildError> {
        let element = self.label(kind);
        let data_type = self.require_data_type(kind)?;
        if values.is_empty() {
            return Err(BuildError::MissingField {
                element,
                field: "values",
            });
        }
        if let Some(position) = values.iter().position(|v| !arena.value_has_type(v, data_type)) {
            return Err(BuildError::Invariant {
                element,
                rule: format!("value #{position} is not of the declared data type"),
            });
        }
        Ok(())
    }
}

impl Builder<CharacteristicFields<EnumerationFields>> {
    /// Appends an allowed value.
    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.payload.kind.values.push(value.into());
        self
    }

    /// Checks and adds the Enumeration.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] without a data type or values, or if a value
    /// does not have the data type.
    pub fn build(mut self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let values = std::mem::take(&mut self.payload.kind.values);
        self.check_values(arena, ElementKind::Enumeration, &values)?;
        self.check_data_type(arena, ElementKind::Enumeration)?;
        self.finish(arena, CharacteristicKind::Enumeration { values })
    }
}

impl Builder<CharacteristicFields<StateFields>> {
    /// Appends an allowed value.
    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.payload.kind.values.push(value.into());
        self
    }

    /// Sets the default value; it must be one of the allowed values.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.payload.kind.default = Some(value.into());
        self
    }

    /// Checks and adds the State.
    ///
    /// # Errors
    ///
    /// As [`enumeration`]'s build, and [`BuildError::MissingField`] or
    /// [`BuildError::Invariant`] if the default is missing or not an allowed
    /// value.
    pub fn build(mut self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let values = std::mem::take(&mut self.payload.kind.values);
        self.check_values(arena, ElementKind::State, &values)?;
        self.check_data_type(arena, ElementKind::State)?;
        let element = self.label(ElementKind::State);
        let Some(default) = self.payload.kind.default.take() else {
            return Err(BuildError::MissingField {
                element,
                field: "default value",
            });
        };
        if !values.contains(&default) {
            return Err(BuildError::Invariant {
                element,
                rule: "the default value must be one of the values".to_owned(),
            });
        }
        self.finish(arena, CharacteristicKind::State { values, default })
    }
}

/// Fields of Measurement, Quantifiable and Duration.
#[derive(Debug, Clone)]
pub struct QuantityFields {
    kind: ElementKind,
    unit: Option<ElementId>,
}

fn start_quantity(kind: ElementKind) -> Builder<CharacteristicFields<QuantityFields>> {
    start(QuantityFields { kind, unit: None })
}

/// Starts a Measurement.
#[must_use]
pub fn measurement() -> Builder<CharacteristicFields<QuantityFields>> {
    start_quantity(ElementKind::Measurement)
}

/// Starts a Quantifiable.
#[must_use]
pub fn quantifiable() -> Builder<CharacteristicFields<QuantityFields>> {
    start_quantity(ElementKind::Quantifiable)
}

/// Starts a Duration.
#[must_use]
pub fn duration() -> Builder<CharacteristicFields<QuantityFields>> {
    start_quantity(ElementKind::Duration)
}

impl Builder<CharacteristicFields<QuantityFields>> {
    /// Sets the unit.
    #[must_use]
    pub fn unit(mut self, unit: ElementId) -> Self {
        self.payload.kind.unit = Some(unit);
        self
    }

    /// Checks and adds the quantity.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] without a data type, or without a
    /// unit on a Measurement or Duration, and [`BuildError::Invariant`] if
    /// the unit of a Duration does not measure time.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let kind = self.payload.kind.kind;
        let element = self.label(kind);
        self.require_data_type(kind)?;
        self.check_data_type(arena, kind)?;
        let unit = self.payload.kind.unit;
        if let Some(id) = unit {
            check_refs(arena, &element, [id], "a unit", |k| k == ElementKind::Unit)?;
        }
        let required = || BuildError::MissingField {
            element: element.clone(),
            field: "unit",
        };
        let subtype = match kind {
            ElementKind::Measurement => CharacteristicKind::Measurement {
                unit: unit.ok_or_else(required)?,
            },
            ElementKind::Duration => {
                let unit = unit.ok_or_else(required)?;
                let measures_time = arena
                    .unit(unit)
                    .is_some_and(|u| u.quantity_kinds.iter().any(|q| q == "time"));
                if !measures_time {
                    return Err(BuildError::Invariant {
                        element,
                        rule: "the unit of a Duration must measure time".to_owned(),
                    });
                }
                CharacteristicKind::Duration { unit }
            }
            _ => CharacteristicKind::Quantifiable { unit },
        };
        self.finish(arena, subtype)
    }
}

/// Fields of an Either.
#[derive(Debug, Clone, Default)]
pub struct EitherFields {
    left: Option<ElementId>,
    right: Option<ElementId>,
}

/// Starts an Either.
#[must_use]
pub fn either() -> Builder<CharacteristicFields<EitherFields>> {
    start(EitherFields::default())
}

impl Builder<CharacteristicFields<EitherFields>> {
    /// Sets the left alternative.
    #[must_use]
    pub fn left(mut self, characteristic: ElementId) -> Self {
        self.payload.kind.left = Some(characteristic);
        self
    }

    /// Sets the right alternative.
    #[must_use]
    pub fn right(mut self, characteristic: ElementId) -> Self {
        self.payload.kind.right = Some(characteristic);
        self
    }

    /// Checks and adds the Either.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] if a side is missing and
    /// [`BuildError::Invariant`] if a data type was set.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let element = self.label(ElementKind::Either);
        let missing = |field| BuildError::MissingField {
            element: element.clone(),
            field,
        };
        let left = self.payload.kind.left.ok_or_else(|| missing("left"))?;
        let right = self.payload.kind.right.ok_or_else(|| missing("right"))?;
        if self.payload.data_type.is_some() {
            return Err(BuildError::Invariant {
                element,
                rule: "an Either has no data type of its own".to_owned(),
            });
        }
        check_refs(arena, &element, [left, right], "a characteristic", is_characteristic)?;
        self.finish(arena, CharacteristicKind::Either { left, right })
    }
}

/// Fields of a StructuredValue.
#[derive(Debug, Clone, Default)]
pub struct StructuredValueFields {
    deconstruction_rule: Option<String>,
    elements: Vec<StructuredElement>,
}

/// Starts a StructuredValue.
#[must_use]
pub fn structured_value() -> Builder<CharacteristicFields<StructuredValueFields>> {
    start(StructuredValueFields::default())
}

impl Builder<CharacteristicFields<StructuredValueFields>> {
    /// Sets the pattern with one group per property.
    #[must_use]
    pub fn deconstruction_rule(mut self, rule: impl Into<String>) -> Self {
        self.payload.kind.deconstruction_rule = Some(rule.into());
        self
    }

    /// Appends a property element.
    #[must_use]
    pub fn property(mut self, property: ElementId) -> Self {
        self.payload.kind.elements.push(StructuredElement::Property(property));
        self
    }

    /// Appends a literal delimiter.
    #[must_use]
    pub fn delimiter(mut self, text: impl Into<String>) -> Self {
        self.payload.kind.elements.push(StructuredElement::Delimiter(text.into()));
        self
    }

    /// Checks and adds the StructuredValue.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Pattern`] if the rule does not compile, and
    /// [`BuildError::Invariant`] if its group count differs from the number
    /// of property elements.
    pub fn build(mut self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let kind = ElementKind::StructuredValue;
        let element = self.label(kind);
        self.require_data_type(kind)?;
        let Some(rule) = self.payload.kind.deconstruction_rule.take() else {
            return Err(BuildError::MissingField {
                element,
                field: "deconstruction rule",
            });
        };
        let elements = std::mem::take(&mut self.payload.kind.elements);
        if elements.is_empty() {
            return Err(BuildError::MissingField {
                element,
                field: "elements",
            });
        }
        let pattern = regex::Regex::new(&rule).map_err(|source| BuildError::Pattern {
            element: element.clone(),
            source,
        })?;
        let properties: Vec<ElementId> = elements
            .iter()
            .filter_map(|e| match e {
                StructuredElement::Property(id) => Some(*id),
                StructuredElement::Delimiter(_) => None,
            })
            .collect();
        check_refs(arena, &element, properties.iter().copied(), "a property", ElementKind::is_property)?;
        let groups = pattern.captures_len() - 1;
        if groups != properties.len() {
            return Err(BuildError::Invariant {
                element,
                rule: format!(
                    "deconstruction rule has {groups} groups for {} properties",
                    properties.len()
                ),
            });
        }
        self.finish(
            arena,
            CharacteristicKind::StructuredValue {
                deconstruction_rule: rule,
                elements,
            },
        )
    }
}

impl<P> Builder<P> {
    fn finish_constraint(
        self,
        arena: &mut ElementArena,
        kind: ConstraintKind,
    ) -> Result<ElementId, BuildError> {
        Ok(arena.alloc(ModelElement::Constraint(Constraint {
            base: self.base,
            kind,
        })))
    }
}

/// Fields of a RangeConstraint.
#[derive(Debug, Clone, Default)]
pub struct RangeFields {
    min: Option<ScalarValue>,
    max: Option<ScalarValue>,
    lower: Option<BoundDefinition>,
    upper: Option<BoundDefinition>,
}

/// Starts a RangeConstraint.
#[must_use]
pub fn range_constraint() -> Builder<RangeFields> {
    Builder::with(None, RangeFields::default())
}

impl Builder<RangeFields> {
    /// Sets the lower bound.
    #[must_use]
    pub fn min(mut self, value: ScalarValue) -> Self {
        self.payload.min = Some(value);
        self
    }

    /// Sets the upper bound.
    #[must_use]
    pub fn max(mut self, value: ScalarValue) -> Self {
        self.payload.max = Some(value);
        self
    }

    /// Sets how the lower bound compares; `AtLeast` if never set.
    #[must_use]
    pub fn lower_bound_definition(mut self, definition: BoundDefinition) -> Self {
        self.payload.lower = Some(definition);
        self
    }

    /// Sets how the upper bound compares; `AtMost` if never set.
    #[must_use]
    pub fn upper_bound_definition(mut self, definition: BoundDefinition) -> Self {
        self.payload.upper = Some(definition);
        self
    }

    /// Checks and adds the constraint.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Invariant`] without any bound, for a bound
    /// definition without its bound, and for a definition that cannot
    /// qualify its side.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let element = self.label(ElementKind::RangeConstraint);
        let fields = &self.payload;
        if fields.min.is_none() && fields.max.is_none() {
            return Err(BuildError::Invariant {
                element,
                rule: "a range needs at least one bound".to_owned(),
            });
        }
        let lower = bound_side(
            "lower",
            fields.min.is_some(),
            fields.lower,
            BoundDefinition::AtLeast,
            BoundDefinition::is_lower,
        );
        let upper = bound_side(
            "upper",
            fields.max.is_some(),
            fields.upper,
            BoundDefinition::AtMost,
            BoundDefinition::is_upper,
        );
        let (lower, upper) = match (lower, upper) {
            (Ok(lower), Ok(upper)) => (lower, upper),
            (Err(rule), _) | (_, Err(rule)) => return Err(BuildError::Invariant { element, rule }),
        };
        let kind = ConstraintKind::Range {
            min: self.payload.min.clone(),
            max: self.payload.max.clone(),
            lower,
            upper,
        };
        self.finish_constraint(arena, kind)
    }
}

fn bound_side(
    name: &str,
    bounded: bool,
    definition: Option<BoundDefinition>,
    default: BoundDefinition,
    fits: fn(BoundDefinition) -> bool,
) -> Result<BoundDefinition, String> {
    match (bounded, definition) {
        (false, None | Some(BoundDefinition::Open)) => Ok(BoundDefinition::Open),
        (false, Some(_)) => Err(format!("{name} bound definition set but no {name} bound")),
        (true, None) => Ok(default),
        (true, Some(d)) if fits(d) => Ok(d),
        (true, Some(d)) => Err(format!("{d:?} cannot qualify a {name} bound")),
    }
}

/// Fields of a LengthConstraint.
#[derive(Debug, Clone, Default)]
pub struct LengthFields {
    min: Option<u64>,
    max: Option<u64>,
}

/// Starts a LengthConstraint.
#[must_use]
pub fn length_constraint() -> Builder<LengthFields> {
    Builder::with(None, LengthFields::default())
}

impl Builder<LengthFields> {
    /// Sets the minimum length.
    #[must_use]
    pub fn min(mut self, min: u64) -> Self {
        self.payload.min = Some(min);
        self
    }

    /// Sets the maximum length.
    #[must_use]
    pub fn max(mut self, max: u64) -> Self {
        self.payload.max = Some(max);
        self
    }

    /// Checks and adds the constraint.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Invariant`] without any bound or if the minimum
    /// exceeds the maximum.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let element = self.label(ElementKind::LengthConstraint);
        let LengthFields { min, max } = self.payload;
        let rule = match (min, max) {
            (None, None) => Some("a length constraint needs a minimum or a maximum".to_owned()),
            (Some(min), Some(max)) if min > max => Some(format!("minimum {min} exceeds maximum {max}")),
            _ => None,
        };
        if let Some(rule) = rule {
            return Err(BuildError::Invariant { element, rule });
        }
        self.finish_constraint(arena, ConstraintKind::Length { min, max })
    }
}

/// Fields of an EncodingConstraint.
#[derive(Debug, Clone, Default)]
pub struct EncodingFields {
    value: Option<String>,
}

/// Starts an EncodingConstraint.
#[must_use]
pub fn encoding_constraint() -> Builder<EncodingFields> {
    Builder::with(None, EncodingFields::default())
}

impl Builder<EncodingFields> {
    /// Sets the encoding IRI, e.g. `samm:UTF-8`.
    #[must_use]
    pub fn value(mut self, encoding: impl Into<String>) -> Self {
        self.payload.value = Some(encoding.into());
        self
    }

    /// Checks and adds the constraint.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] without an encoding.
    pub fn build(mut self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let Some(value) = self.payload.value.take() else {
            return Err(BuildError::MissingField {
                element: self.label(ElementKind::EncodingConstraint),
                field: "value",
            });
        };
        self.finish_constraint(arena, ConstraintKind::Encoding { value })
    }
}

/// Fields of a RegularExpressionConstraint.
#[derive(Debug, Clone, Default)]
pub struct RegularExpressionFields {
    value: Option<String>,
}

/// Starts a RegularExpressionConstraint.
#[must_use]
pub fn regular_expression_constraint() -> Builder<RegularExpressionFields> {
    Builder::with(None, RegularExpressionFields::default())
}

impl Builder<RegularExpressionFields> {
    /// Sets the pattern.
    #[must_use]
    pub fn value(mut self, pattern: impl Into<String>) -> Self {
        self.payload.value = Some(pattern.into());
        self
    }

    /// Checks and adds the constraint.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] without a pattern and
    /// [`BuildError::Invariant`] if it does not compile.
    pub fn build(mut self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let element = self.label(ElementKind::RegularExpressionConstraint);
        let Some(value) = self.payload.value.take() else {
            return Err(BuildError::MissingField {
                element,
                field: "value",
            });
        };
        if let Err(e) = regex::Regex::new(&value) {
            return Err(BuildError::Invariant {
                element,
                rule: format!("invalid pattern: {e}"),
            });
        }
        self.finish_constraint(arena, ConstraintKind::RegularExpression { value })
    }
}

/// Fields of a FixedPointConstraint.
#[derive(Debug, Clone, Default)]
pub struct FixedPointFields {
    scale: Option<u32>,
    integer: Option<u32>,
}

/// Starts a FixedPointConstraint.
#[must_use]
pub fn fixed_point_constraint() -> Builder<FixedPointFields> {
    Builder::with(None, FixedPointFields::default())
}

impl Builder<FixedPointFields> {
    /// Sets the digits after the decimal point.
    #[must_use]
    pub fn scale(mut self, scale: u32) -> Self {
        self.payload.scale = Some(scale);
        self
    }

    /// Sets the digits before the decimal point.
    #[must_use]
    pub fn integer(mut self, integer: u32) -> Self {
        self.payload.integer = Some(integer);
        self
    }

    /// Checks and adds the constraint.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] without scale or integer.
    pub fn build(self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let element = self.label(ElementKind::FixedPointConstraint);
        let FixedPointFields { scale, integer } = self.payload;
        let (Some(scale), Some(integer)) = (scale, integer) else {
            return Err(BuildError::MissingField {
                element,
                field: if scale.is_none() { "scale" } else { "integer" },
            });
        };
        self.finish_constraint(arena, ConstraintKind::FixedPoint { scale, integer })
    }
}

/// Fields of a LanguageConstraint.
#[derive(Debug, Clone, Default)]
pub struct LanguageFields {
    code: Option<String>,
}

/// Starts a LanguageConstraint.
#[must_use]
pub fn language_constraint() -> Builder<LanguageFields> {
    Builder::with(None, LanguageFields::default())
}

impl Builder<LanguageFields> {
    /// Sets the language code.
    #[must_use]
    pub fn language_code(mut self, code: impl Into<String>) -> Self {
        self.payload.code = Some(code.into());
        self
    }

    /// Checks and adds the constraint.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] without a code and
    /// [`BuildError::Invariant`] if it is no bare language subtag.
    pub fn build(mut self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let element = self.label(ElementKind::LanguageConstraint);
        let Some(code) = self.payload.code.take() else {
            return Err(BuildError::MissingField {
                element,
                field: "language code",
            });
        };
        let language_code = match normalize_locale(&code) {
            Some(normalized) if !normalized.contains('-') => normalized,
            _ => {
                return Err(BuildError::Invariant {
                    element,
                    rule: format!("{code:?} is not a language code"),
                })
            }
        };
        self.finish_constraint(arena, ConstraintKind::Language { language_code })
    }
}

/// Fields of a LocaleConstraint.
#[derive(Debug, Clone, Default)]
pub struct LocaleFields {
    code: Option<String>,
}

/// Starts a LocaleConstraint.
#[must_use]
pub fn locale_constraint() -> Builder<LocaleFields> {
    Builder::with(None, LocaleFields::default())
}

impl Builder<LocaleFields> {
    /// Sets the locale.
    #[must_use]
    pub fn locale_code(mut self, code: impl Into<String>) -> Self {
        self.payload.code = Some(code.into());
        self
    }

    /// Checks and adds the constraint.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] without a locale and
    /// [`BuildError::Invariant`] if it is no well-formed language tag.
    pub fn build(mut self, arena: &mut ElementArena) -> Result<ElementId, BuildError> {
        let element = self.label(ElementKind::LocaleConstraint);
        let Some(code) = self.payload.code.take() else {
            return Err(BuildError::MissingField {
                element,
                field: "locale code",
            });
        };
        let Some(locale_code) = normalize_locale(&code) else {
            return Err(BuildError::Invariant {
                element,
                rule: format!("{code:?} is not a language tag"),
            });
        };
        self.finish_constraint(arena, ConstraintKind::Locale { locale_code })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::tests::{text, urn};
    use crate::builder::{entity, property, unit};
    use crate::model::CollectionValue;
    use samm_metamodel::model::iris::{XSD_INT, XSD_INTEGER, XSD_STRING};

    fn string() -> Type {
        Type::Scalar(XSD_STRING.into())
    }

    fn scalar(lexical: &str, datatype: &str) -> ScalarValue {
        ScalarValue::parse(lexical, datatype).unwrap()
    }

    #[test]
    fn plain_characteristics_need_a_data_type() {
        let mut arena = ElementArena::new();
        let err = characteristic().build(&mut arena).unwrap_err();
        assert!(matches!(err, BuildError::MissingField { field: "data type", .. }));
        let err = single_entity().data_type(string()).build(&mut arena).unwrap_err();
        assert!(matches!(err, BuildError::Invariant { .. }));
        let id = code().data_type(string()).build(&mut arena).unwrap();
        assert_eq!(arena.kind_of(id), Some(ElementKind::Code));
    }

    #[test]
    fn traits_need_a_base_and_no_data_type() {
        let mut arena = ElementArena::new();
        let base = text(&mut arena);
        let length = length_constraint().max(10).build(&mut arena).unwrap();
        let err = trait_().constraint(length).build(&mut arena).unwrap_err();
        assert!(matches!(err, BuildError::MissingField { field: "base characteristic", .. }));
        let err = trait_()
            .base_characteristic(base)
            .constraint(length)
            .data_type(string())
            .build(&mut arena)
            .unwrap_err();
        assert!(matches!(err, BuildError::Invariant { .. }));
        let id = trait_().base_characteristic(base).constraint(length).build(&mut arena).unwrap();
        assert_eq!(arena.effective_data_type(id), Some(&string()));
    }

    #[test]
    fn collections_need_exactly_one_element_description() {
        let mut arena = ElementArena::new();
        let element = text(&mut arena);
        assert!(list().build(&mut arena).is_err());
        assert!(list().data_type(string()).element_characteristic(element).build(&mut arena).is_err());
        let id = time_series().element_characteristic(element).build(&mut arena).unwrap();
        assert_eq!(arena.kind_of(id), Some(ElementKind::TimeSeries));
        assert_eq!(arena.effective_data_type(id), Some(&string()));
    }

    #[test]
    fn collection_values_conform_to_their_characteristic() {
        let mut arena = ElementArena::new();
        let int = Type::Scalar(XSD_INT.into());
        for collection_type in [CollectionType::List, CollectionType::Set, CollectionType::SortedSet] {
            let id = collection(collection_type).data_type(int.clone()).build(&mut arena).unwrap();
            let values = vec![scalar("1", XSD_INT).into(), scalar("2", XSD_INT).into()];
            let value = Value::Collection(CollectionValue::new(collection_type, Some(int.clone()), values));
            let actual = arena.type_of_value(&value).unwrap();
            assert!(arena.is_type_or_subtype_of(&actual, arena.effective_data_type(id).unwrap()));
            assert!(arena.conforms(&value, id));
        }
    }

    #[test]
    fn enumeration_values_must_have_the_data_type() {
        let mut arena = ElementArena::new();
        let err = enumeration().data_type(string()).build(&mut arena).unwrap_err();
        assert!(matches!(err, BuildError::MissingField { field: "values", .. }));
        let err = enumeration()
            .data_type(string())
            .value(scalar("1", XSD_INT))
            .build(&mut arena)
            .unwrap_err();
        assert!(matches!(err, BuildError::Invariant { .. }));
        let id = enumeration()
            .data_type(Type::Scalar(XSD_INTEGER.into()))
            .value(scalar("1", XSD_INT))
            .build(&mut arena)
            .unwrap();
        assert_eq!(arena.kind_of(id), Some(ElementKind::Enumeration));
    }

    #[test]
    fn state_default_must_be_a_value() {
        let mut arena = ElementArena::new();
        let on = scalar("on", XSD_STRING);
        let off = scalar("off", XSD_STRING);
        let err = state()
            .data_type(string())
            .value(on.clone())
            .default_value(off.clone())
            .build(&mut arena)
            .unwrap_err();
        assert!(err.to_string().contains("default value"));
        let id = state().data_type(string()).value(on).value(off.clone()).default_value(off).build(&mut arena);
        assert!(id.is_ok());
    }

    #[test]
    fn durations_need_a_unit_of_time() {
        let mut arena = ElementArena::new();
        let kg = unit(urn("kilogram")).quantity_kind("mass").build(&mut arena).unwrap();
        let s = unit(urn("second")).quantity_kind("time").build(&mut arena).unwrap();
        let int = Type::Scalar(XSD_INT.into());
        let err = measurement().data_type(int.clone()).build(&mut arena).unwrap_err();
        assert!(matches!(err, BuildError::MissingField { field: "unit", .. }));
        assert!(duration().data_type(int.clone()).unit(kg).build(&mut arena).is_err());
        assert!(duration().data_type(int.clone()).unit(s).build(&mut arena).is_ok());
        assert!(quantifiable().data_type(int).build(&mut arena).is_ok());
    }

    #[test]
    fn either_needs_both_sides() {
        let mut arena = ElementArena::new();
        let left = text(&mut arena);
        let err = either().left(left).build(&mut arena).unwrap_err();
        assert!(matches!(err, BuildError::MissingField { field: "right", .. }));
        assert!(either().left(left).right(left).build(&mut arena).is_ok());
    }

    #[test]
    fn structured_value_groups_match_properties() {
        let mut arena = ElementArena::new();
        let c = text(&mut arena);
        let year = property(urn("year")).characteristic(c).build(&mut arena).unwrap();
        let month = property(urn("month")).characteristic(c).build(&mut arena).unwrap();
        let err = structured_value()
            .data_type(string())
            .deconstruction_rule("(\\d{4}")
            .property(year)
            .build(&mut arena)
            .unwrap_err();
        assert!(matches!(err, BuildError::Pattern { .. }));
        let err = structured_value()
            .data_type(string())
            .deconstruction_rule("(\\d{4})-(\\d{2})")
            .property(year)
            .build(&mut arena)
            .unwrap_err();
        assert!(err.to_string().contains("2 groups for 1 properties"));
        let id = structured_value()
            .data_type(string())
            .deconstruction_rule("(\\d{4})-(\\d{2})")
            .property(year)
            .delimiter("-")
            .property(month)
            .build(&mut arena);
        assert!(id.is_ok());
    }

    #[test]
    fn range_bounds_are_checked() {
        let mut arena = ElementArena::new();
        assert!(range_constraint().build(&mut arena).is_err());
        let err = range_constraint()
            .min(scalar("0", XSD_INT))
            .upper_bound_definition(BoundDefinition::LessThan)
            .build(&mut arena)
            .unwrap_err();
        assert!(err.to_string().contains("no upper bound"));
        let err = range_constraint()
            .min(scalar("0", XSD_INT))
            .lower_bound_definition(BoundDefinition::AtMost)
            .build(&mut arena)
            .unwrap_err();
        assert!(matches!(err, BuildError::Invariant { .. }));
        let id = range_constraint().min(scalar("0", XSD_INT)).build(&mut arena).unwrap();
        let ModelElement::Constraint(Constraint {
            kind: ConstraintKind::Range { lower, upper, .. },
            ..
        }) = arena.get(id).unwrap()
        else {
            panic!("not a range");
        };
        assert_eq!((*lower, *upper), (BoundDefinition::AtLeast, BoundDefinition::Open));
    }

    #[test]
    fn other_constraints() {
        let mut arena = ElementArena::new();
        assert!(length_constraint().min(5).max(2).build(&mut arena).is_err());
        assert!(encoding_constraint().build(&mut arena).is_err());
        assert!(regular_expression_constraint().value("[").build(&mut arena).is_err());
        assert!(fixed_point_constraint().scale(2).build(&mut arena).is_err());
        assert!(language_constraint().language_code("de-DE").build(&mut arena).is_err());
        let id = locale_constraint().locale_code("de_de").build(&mut arena).unwrap();
        let ModelElement::Constraint(c) = arena.get(id).unwrap() else {
            panic!("not a constraint");
        };
        assert_eq!(c.kind, ConstraintKind::Locale { locale_code: "de-DE".into() });
        let e = entity(urn("Point")).build(&mut arena).unwrap();
        assert!(single_entity().data_type(Type::Entity(e)).build(&mut arena).is_ok());
    }
}
