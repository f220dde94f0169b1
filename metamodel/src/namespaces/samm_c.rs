//! `samm-c:` namespace: Characteristics and Constraints.
//!
//! The Characteristic subclasses refine how a Property's value is read
//! (quantities, enumerations, collections, ...). Constraints are
//! Characteristics that restrict the value space of a base Characteristic
//! through a Trait. The namespace also ships the built-in Characteristic
//! instances (`samm-c:Text`, `samm-c:Boolean`, ...) and the four bound
//! definitions used by range constraints.

use crate::model::iris::*;
use crate::model::{
    Class, Individual, IndividualValue, Namespace, NamespaceModule, Property, PropertyKind,
};

/// Returns the `samm-c:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "samm-c",
            iri: NS_SAMM_C,
            label: "SAMM Characteristics",
            comment: "Characteristic and Constraint classes with their built-in instances.",
        },
        classes: classes(),
        properties: properties(),
        individuals: individuals(),
    }
}

const fn characteristic(id: &'static str, label: &'static str, comment: &'static str) -> Class {
    Class {
        id,
        label,
        comment,
        subclass_of: &[SAMM_CHARACTERISTIC],
    }
}

const fn constraint(id: &'static str, label: &'static str, comment: &'static str) -> Class {
    Class {
        id,
        label,
        comment,
        subclass_of: &[SAMM_CONSTRAINT],
    }
}

fn classes() -> Vec<Class> {
    vec![
        characteristic(
            SAMM_C_TRAIT,
            "Trait",
            "Wraps a base Characteristic and adds Constraints to it.",
        ),
        characteristic(
            SAMM_C_QUANTIFIABLE,
            "Quantifiable",
            "A value that can be quantified, optionally in a unit.",
        ),
        Class {
            id: SAMM_C_MEASUREMENT,
            label: "Measurement",
            comment: "A measured physical value in a specific unit.",
            subclass_of: &[SAMM_C_QUANTIFIABLE],
        },
        Class {
            id: SAMM_C_DURATION,
            label: "Duration",
            comment: "A time span in a unit of time.",
            subclass_of: &[SAMM_C_QUANTIFIABLE],
        },
        characteristic(
            SAMM_C_ENUMERATION,
            "Enumeration",
            "A closed list of the values a Property may take.",
        ),
        Class {
            id: SAMM_C_STATE,
            label: "State",
            comment: "An Enumeration with a default value.",
            subclass_of: &[SAMM_C_ENUMERATION],
        },
        characteristic(
            SAMM_C_COLLECTION,
            "Collection",
            "A group of values; order and duplicates are unspecified.",
        ),
        Class {
            id: SAMM_C_LIST,
            label: "List",
            comment: "An ordered Collection that may contain duplicates.",
            subclass_of: &[SAMM_C_COLLECTION],
        },
        Class {
            id: SAMM_C_SET,
            label: "Set",
            comment: "An unordered Collection without duplicates.",
            subclass_of: &[SAMM_C_COLLECTION],
        },
        Class {
            id: SAMM_C_SORTED_SET,
            label: "SortedSet",
            comment: "An ordered Collection without duplicates.",
            subclass_of: &[SAMM_C_COLLECTION],
        },
        Class {
            id: SAMM_C_TIME_SERIES,
            label: "TimeSeries",
            comment: "A SortedSet of timestamp/value pairs.",
            subclass_of: &[SAMM_C_SORTED_SET],
        },
        characteristic(SAMM_C_CODE, "Code", "A coded value such as an identifier."),
        characteristic(
            SAMM_C_EITHER,
            "Either",
            "A value described by exactly one of two Characteristics.",
        ),
        characteristic(
            SAMM_C_SINGLE_ENTITY,
            "SingleEntity",
            "A value that is one instance of an Entity.",
        ),
        characteristic(
            SAMM_C_STRUCTURED_VALUE,
            "StructuredValue",
            "A string value with an inner structure described by a regular \
             expression and the Properties of its capture groups.",
        ),
        constraint(
            SAMM_C_RANGE_CONSTRAINT,
            "RangeConstraint",
            "Restricts a value to a range with optional bounds.",
        ),
        constraint(
            SAMM_C_LENGTH_CONSTRAINT,
            "LengthConstraint",
            "Restricts the length of a string or the size of a collection.",
        ),
        constraint(
            SAMM_C_ENCODING_CONSTRAINT,
            "EncodingConstraint",
            "Restricts the character encoding of a string.",
        ),
        constraint(
            SAMM_C_REGULAR_EXPRESSION_CONSTRAINT,
            "RegularExpressionConstraint",
            "Restricts a string to a regular expression.",
        ),
        constraint(
            SAMM_C_FIXED_POINT_CONSTRAINT,
            "FixedPointConstraint",
            "Restricts a decimal to a number of integer and fraction digits.",
        ),
        constraint(
            SAMM_C_LANGUAGE_CONSTRAINT,
            "LanguageConstraint",
            "Restricts a value to one language.",
        ),
        constraint(
            SAMM_C_LOCALE_CONSTRAINT,
            "LocaleConstraint",
            "Restricts a value to one locale.",
        ),
        Class {
            id: SAMM_C_BOUND_DEFINITION,
            label: "BoundDefinition",
            comment: "How a bound of a RangeConstraint is to be interpreted.",
            subclass_of: &[],
        },
    ]
}

const fn object(
    id: &'static str,
    label: &'static str,
    comment: &'static str,
    domain: &'static str,
    range: &'static str,
) -> Property {
    Property {
        id,
        label,
        comment,
        kind: PropertyKind::Object,
        functional: true,
        domain: Some(domain),
        range,
    }
}

const fn datatype(
    id: &'static str,
    label: &'static str,
    comment: &'static str,
    domain: &'static str,
    range: &'static str,
) -> Property {
    Property {
        id,
        label,
        comment,
        kind: PropertyKind::Datatype,
        functional: true,
        domain: Some(domain),
        range,
    }
}

fn properties() -> Vec<Property> {
    vec![
        object(
            SAMM_C_BASE_CHARACTERISTIC,
            "baseCharacteristic",
            "The Characteristic a Trait constrains.",
            SAMM_C_TRAIT,
            SAMM_CHARACTERISTIC,
        ),
        Property {
            id: SAMM_C_CONSTRAINT,
            label: "constraint",
            comment: "A Constraint applied by a Trait.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some(SAMM_C_TRAIT),
            range: SAMM_CONSTRAINT,
        },
        object(
            SAMM_C_ELEMENT_CHARACTERISTIC,
            "elementCharacteristic",
            "The Characteristic of the elements of a Collection.",
            SAMM_C_COLLECTION,
            SAMM_CHARACTERISTIC,
        ),
        object(
            SAMM_C_VALUES,
            "values",
            "The values of an Enumeration.",
            SAMM_C_ENUMERATION,
            RDF_LIST,
        ),
        object(
            SAMM_C_DEFAULT_VALUE,
            "defaultValue",
            "The default value of a State.",
            SAMM_C_STATE,
            RDFS_RESOURCE,
        ),
        object(
            SAMM_C_UNIT,
            "unit",
            "The unit of a Quantifiable.",
            SAMM_C_QUANTIFIABLE,
            UNIT_UNIT,
        ),
        object(
            SAMM_C_LEFT,
            "left",
            "The first alternative of an Either.",
            SAMM_C_EITHER,
            SAMM_CHARACTERISTIC,
        ),
        object(
            SAMM_C_RIGHT,
            "right",
            "The second alternative of an Either.",
            SAMM_C_EITHER,
            SAMM_CHARACTERISTIC,
        ),
        datatype(
            SAMM_C_DECONSTRUCTION_RULE,
            "deconstructionRule",
            "Regular expression splitting a StructuredValue into its elements.",
            SAMM_C_STRUCTURED_VALUE,
            XSD_STRING,
        ),
        object(
            SAMM_C_ELEMENTS,
            "elements",
            "Properties and literal delimiters of a StructuredValue.",
            SAMM_C_STRUCTURED_VALUE,
            RDF_LIST,
        ),
        datatype(
            SAMM_C_MIN_VALUE,
            "minValue",
            "Lower bound of a range or length.",
            SAMM_CONSTRAINT,
            RDFS_LITERAL,
        ),
        datatype(
            SAMM_C_MAX_VALUE,
            "maxValue",
            "Upper bound of a range or length.",
            SAMM_CONSTRAINT,
            RDFS_LITERAL,
        ),
        object(
            SAMM_C_LOWER_BOUND_DEFINITION,
            "lowerBoundDefinition",
            "Whether the lower bound is inclusive or exclusive.",
            SAMM_C_RANGE_CONSTRAINT,
            SAMM_C_BOUND_DEFINITION,
        ),
        object(
            SAMM_C_UPPER_BOUND_DEFINITION,
            "upperBoundDefinition",
            "Whether the upper bound is inclusive or exclusive.",
            SAMM_C_RANGE_CONSTRAINT,
            SAMM_C_BOUND_DEFINITION,
        ),
        datatype(
            SAMM_C_SCALE,
            "scale",
            "Number of fraction digits of a fixed point number.",
            SAMM_C_FIXED_POINT_CONSTRAINT,
            XSD_POSITIVE_INTEGER,
        ),
        datatype(
            SAMM_C_INTEGER,
            "integer",
            "Number of integer digits of a fixed point number.",
            SAMM_C_FIXED_POINT_CONSTRAINT,
            XSD_POSITIVE_INTEGER,
        ),
        datatype(
            SAMM_C_LANGUAGE_CODE,
            "languageCode",
            "ISO 639-1 language code.",
            SAMM_C_LANGUAGE_CONSTRAINT,
            XSD_STRING,
        ),
        datatype(
            SAMM_C_LOCALE_CODE,
            "localeCode",
            "IETF BCP 47 locale code.",
            SAMM_C_LOCALE_CONSTRAINT,
            XSD_STRING,
        ),
    ]
}

const fn builtin(
    id: &'static str,
    label: &'static str,
    comment: &'static str,
    properties: &'static [(&'static str, IndividualValue)],
) -> Individual {
    Individual {
        id,
        type_: SAMM_CHARACTERISTIC,
        label,
        comment,
        properties,
    }
}

const fn bound(id: &'static str, label: &'static str, comment: &'static str) -> Individual {
    Individual {
        id,
        type_: SAMM_C_BOUND_DEFINITION,
        label,
        comment,
        properties: &[],
    }
}

fn individuals() -> Vec<Individual> {
    vec![
        builtin(
            SAMM_C_TEXT,
            "Text",
            "Describes a Property which contains plain text.",
            &[(SAMM_DATA_TYPE, IndividualValue::IriRef(XSD_STRING))],
        ),
        builtin(
            SAMM_C_BOOLEAN,
            "Boolean",
            "Represents a boolean value (i.e. a \"flag\").",
            &[(SAMM_DATA_TYPE, IndividualValue::IriRef(XSD_BOOLEAN))],
        ),
        builtin(
            SAMM_C_TIMESTAMP,
            "Timestamp",
            "Describes a Property which contains the date and time with an optional timezone.",
            &[(SAMM_DATA_TYPE, IndividualValue::IriRef(XSD_DATE_TIME))],
        ),
        builtin(
            SAMM_C_MULTI_LANGUAGE_TEXT,
            "Multi-Language Text",
            "Describes a Property which contains plain text in multiple languages.",
            &[(SAMM_DATA_TYPE, IndividualValue::IriRef(RDF_LANG_STRING))],
        ),
        builtin(
            samm_c!("Language"),
            "Language",
            "An ISO 639-1 language code for the language of the value of a Property.",
            &[(SAMM_DATA_TYPE, IndividualValue::IriRef(XSD_STRING))],
        ),
        builtin(
            samm_c!("Locale"),
            "Locale",
            "An IETF BCP 47 language code for the locale of the value of a Property.",
            &[(SAMM_DATA_TYPE, IndividualValue::IriRef(XSD_STRING))],
        ),
        builtin(
            samm_c!("MimeType"),
            "MIME Type",
            "A MIME type as defined in RFC 2046.",
            &[(SAMM_DATA_TYPE, IndividualValue::IriRef(XSD_STRING))],
        ),
        builtin(
            samm_c!("ResourcePath"),
            "Resource Path",
            "The path of a resource.",
            &[(SAMM_DATA_TYPE, IndividualValue::IriRef(XSD_ANY_URI))],
        ),
        builtin(
            SAMM_C_UNIT_REFERENCE,
            "Unit Reference",
            "Describes a Property containing a reference to one of the units in the Unit Catalog.",
            &[(SAMM_DATA_TYPE, IndividualValue::IriRef(SAMM_CURIE))],
        ),
        bound(
            SAMM_C_AT_LEAST,
            "At least",
            "Indicates that the provided lower bound is inclusive.",
        ),
        bound(
            SAMM_C_GREATER_THAN,
            "Greater than",
            "Indicates that the provided lower bound is exclusive.",
        ),
        bound(
            SAMM_C_LESS_THAN,
            "Less than",
            "Indicates that the provided upper bound is exclusive.",
        ),
        bound(
            SAMM_C_AT_MOST,
            "At most",
            "Indicates that the provided upper bound is inclusive.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_characteristics_declare_a_data_type() {
        for ind in individuals()
            .iter()
            .filter(|i| i.type_ == SAMM_CHARACTERISTIC)
        {
            assert_eq!(
                ind.values(SAMM_DATA_TYPE).count(),
                1,
                "{} must declare exactly one data type",
                ind.id
            );
        }
    }

    #[test]
    fn constraint_classes_derive_from_constraint() {
        let constraints = classes()
            .into_iter()
            .filter(|c| c.label.ends_with("Constraint"))
            .count();
        assert_eq!(constraints, 7);
    }
}
