//! `samm:` namespace: the core meta-model.
//!
//! Defines the element kinds every Aspect Model is built from (Aspect,
//! Property, Entity, Characteristic, ...) and the attributes shared by all of
//! them (`preferredName`, `description`, `see`).

use crate::model::iris::*;
use crate::model::{Class, Namespace, NamespaceModule, Property, PropertyKind};

/// Returns the `samm:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "samm",
            iri: NS_SAMM,
            label: "Semantic Aspect Meta Model",
            comment: "Core element kinds and shared attributes of Aspect Models.",
        },
        classes: classes(),
        properties: properties(),
        individuals: Vec::new(),
    }
}

fn classes() -> Vec<Class> {
    vec![
        Class {
            id: SAMM_ASPECT,
            label: "Aspect",
            comment: "The root element of an Aspect Model: a named collection of \
                      properties, operations and events describing one aspect of \
                      a digital twin.",
            subclass_of: &[],
        },
        Class {
            id: SAMM_PROPERTY,
            label: "Property",
            comment: "A named feature of an Aspect or Entity whose values are \
                      described by a Characteristic.",
            subclass_of: &[],
        },
        Class {
            id: SAMM_ABSTRACT_PROPERTY,
            label: "AbstractProperty",
            comment: "A Property without a Characteristic, refined by Properties \
                      that extend it.",
            subclass_of: &[],
        },
        Class {
            id: SAMM_ENTITY,
            label: "Entity",
            comment: "A structured data type made of Properties.",
            subclass_of: &[],
        },
        Class {
            id: SAMM_ABSTRACT_ENTITY,
            label: "AbstractEntity",
            comment: "An Entity that cannot be instantiated directly; concrete \
                      Entities extend it.",
            subclass_of: &[SAMM_ENTITY],
        },
        Class {
            id: SAMM_CHARACTERISTIC,
            label: "Characteristic",
            comment: "Describes how the value of a Property is to be interpreted.",
            subclass_of: &[],
        },
        Class {
            id: SAMM_CONSTRAINT,
            label: "Constraint",
            comment: "A restriction on the value space of a Characteristic.",
            subclass_of: &[SAMM_CHARACTERISTIC],
        },
        Class {
            id: SAMM_OPERATION,
            label: "Operation",
            comment: "A function offered by an Aspect with input and output \
                      Properties.",
            subclass_of: &[],
        },
        Class {
            id: SAMM_EVENT,
            label: "Event",
            comment: "A notification emitted by an Aspect, carrying parameters.",
            subclass_of: &[],
        },
        Class {
            id: SAMM_VALUE,
            label: "Value",
            comment: "A named scalar value that can carry its own description.",
            subclass_of: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: SAMM_PREFERRED_NAME,
            label: "preferredName",
            comment: "Human-readable name in a given language.",
            kind: PropertyKind::Annotation,
            functional: false,
            domain: None,
            range: RDF_LANG_STRING,
        },
        Property {
            id: SAMM_DESCRIPTION,
            label: "description",
            comment: "Human-readable description in a given language.",
            kind: PropertyKind::Annotation,
            functional: false,
            domain: None,
            range: RDF_LANG_STRING,
        },
        Property {
            id: SAMM_SEE,
            label: "see",
            comment: "Reference to an external resource that describes the element.",
            kind: PropertyKind::Annotation,
            functional: false,
            domain: None,
            range: XSD_ANY_URI,
        },
        Property {
            id: SAMM_PROPERTIES,
            label: "properties",
            comment: "Ordered list of the Properties of an Aspect or Entity.",
            kind: PropertyKind::Object,
            functional: true,
            domain: None,
            range: RDF_LIST,
        },
        Property {
            id: SAMM_OPERATIONS,
            label: "operations",
            comment: "Ordered list of the Operations of an Aspect.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some(SAMM_ASPECT),
            range: RDF_LIST,
        },
        Property {
            id: SAMM_EVENTS,
            label: "events",
            comment: "Ordered list of the Events of an Aspect.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some(SAMM_ASPECT),
            range: RDF_LIST,
        },
        Property {
            id: SAMM_INPUT,
            label: "input",
            comment: "Ordered list of the input Properties of an Operation.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some(SAMM_OPERATION),
            range: RDF_LIST,
        },
        Property {
            id: SAMM_OUTPUT,
            label: "output",
            comment: "The output Property of an Operation.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some(SAMM_OPERATION),
            range: SAMM_PROPERTY,
        },
        Property {
            id: SAMM_PARAMETERS,
            label: "parameters",
            comment: "Ordered list of the parameter Properties of an Event.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some(SAMM_EVENT),
            range: RDF_LIST,
        },
        Property {
            id: SAMM_CHARACTERISTIC_ATTR,
            label: "characteristic",
            comment: "The Characteristic describing the values of a Property.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some(SAMM_PROPERTY),
            range: SAMM_CHARACTERISTIC,
        },
        Property {
            id: SAMM_DATA_TYPE,
            label: "dataType",
            comment: "The scalar datatype or Entity a Characteristic describes.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some(SAMM_CHARACTERISTIC),
            range: RDFS_RESOURCE,
        },
        Property {
            id: SAMM_EXAMPLE_VALUE,
            label: "exampleValue",
            comment: "An example value of a Property.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: Some(SAMM_PROPERTY),
            range: RDFS_LITERAL,
        },
        Property {
            id: SAMM_OPTIONAL,
            label: "optional",
            comment: "Marks a Property reference as optional in its context.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: None,
            range: XSD_BOOLEAN,
        },
        Property {
            id: SAMM_NOT_IN_PAYLOAD,
            label: "notInPayload",
            comment: "Marks a Property reference as absent from the runtime payload.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: None,
            range: XSD_BOOLEAN,
        },
        Property {
            id: SAMM_PAYLOAD_NAME,
            label: "payloadName",
            comment: "Overrides the key of a Property in the runtime payload.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: None,
            range: XSD_STRING,
        },
        Property {
            id: SAMM_EXTENDS,
            label: "extends",
            comment: "Inheritance link from an Entity or Property to its parent.",
            kind: PropertyKind::Object,
            functional: true,
            domain: None,
            range: RDFS_RESOURCE,
        },
        Property {
            id: SAMM_VALUE_ATTR,
            label: "value",
            comment: "The lexical value of a Value or of a Constraint.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: None,
            range: RDFS_LITERAL,
        },
        Property {
            id: SAMM_PROPERTY_ATTR,
            label: "property",
            comment: "References a Property from an anonymous node that adds \
                      usage-specific attributes such as optional.",
            kind: PropertyKind::Object,
            functional: true,
            domain: None,
            range: SAMM_PROPERTY,
        },
    ]
}
