//! `samm-e:` namespace: built-in Entities.
//!
//! Reusable Entities (and the Properties they are made of) that models can
//! refer to without defining them, e.g. as the element type of a
//! `samm-c:TimeSeries`.

use crate::model::iris::*;
use crate::model::{Individual, IndividualValue, Namespace, NamespaceModule};

/// Returns the `samm-e:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "samm-e",
            iri: NS_SAMM_E,
            label: "SAMM Entities",
            comment: "Built-in Entities and the Properties they use.",
        },
        classes: Vec::new(),
        properties: Vec::new(),
        individuals: individuals(),
    }
}

fn individuals() -> Vec<Individual> {
    vec![
        Individual {
            id: SAMM_E_TIME_SERIES_ENTITY,
            type_: SAMM_ABSTRACT_ENTITY,
            label: "Time Series Entity",
            comment: "An Entity which represents a key/value pair. The key is the \
                      timestamp and the value is an abstract Property.",
            properties: &[(
                SAMM_PROPERTIES,
                IndividualValue::List(&[SAMM_E_TIMESTAMP, SAMM_E_VALUE]),
            )],
        },
        Individual {
            id: SAMM_E_TIMESTAMP,
            type_: SAMM_PROPERTY,
            label: "Timestamp",
            comment: "The specific point in time.",
            properties: &[(
                SAMM_CHARACTERISTIC_ATTR,
                IndividualValue::IriRef(SAMM_C_TIMESTAMP),
            )],
        },
        Individual {
            id: SAMM_E_VALUE,
            type_: SAMM_ABSTRACT_PROPERTY,
            label: "Value",
            comment: "Any value.",
            properties: &[],
        },
        Individual {
            id: SAMM_E_POINT_3D,
            type_: SAMM_ABSTRACT_ENTITY,
            label: "Point 3D",
            comment: "Defines a position in a three dimensional space.",
            properties: &[(
                SAMM_PROPERTIES,
                IndividualValue::List(&[samm_e!("x"), samm_e!("y"), samm_e!("z")]),
            )],
        },
        Individual {
            id: samm_e!("x"),
            type_: SAMM_ABSTRACT_PROPERTY,
            label: "x",
            comment: "The position along the x axis.",
            properties: &[],
        },
        Individual {
            id: samm_e!("y"),
            type_: SAMM_ABSTRACT_PROPERTY,
            label: "y",
            comment: "The position along the y axis.",
            properties: &[],
        },
        Individual {
            id: samm_e!("z"),
            type_: SAMM_ABSTRACT_PROPERTY,
            label: "z",
            comment: "The position along the z axis.",
            properties: &[],
        },
        Individual {
            id: samm_e!("FileResource"),
            type_: SAMM_ENTITY,
            label: "File Resource",
            comment: "A file in a specific format.",
            properties: &[(
                SAMM_PROPERTIES,
                IndividualValue::List(&[samm_e!("resource"), samm_e!("mimeType")]),
            )],
        },
        Individual {
            id: samm_e!("resource"),
            type_: SAMM_PROPERTY,
            label: "Resource",
            comment: "Location of a resource.",
            properties: &[(
                SAMM_CHARACTERISTIC_ATTR,
                IndividualValue::IriRef(samm_c!("ResourcePath")),
            )],
        },
        Individual {
            id: samm_e!("mimeType"),
            type_: SAMM_PROPERTY,
            label: "MIME Type",
            comment: "A MIME type as defined in RFC 2046.",
            properties: &[(
                SAMM_CHARACTERISTIC_ATTR,
                IndividualValue::IriRef(samm_c!("MimeType")),
            )],
        },
    ]
}
