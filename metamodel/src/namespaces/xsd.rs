//! `xsd:` namespace: the scalar datatype hierarchy.
//!
//! Every datatype a Characteristic may declare as its `samm:dataType` is a
//! class here, linked to its base type through `subclass_of`. The language
//! tagged string type of RDF and the meta-model's own `samm:curie` are listed
//! alongside the XSD types because they take part in the same hierarchy.

use crate::model::iris::*;
use crate::model::{Class, Namespace, NamespaceModule};

/// Returns the `xsd:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "xsd",
            iri: XSD,
            label: "XML Schema Datatypes",
            comment: "Scalar datatypes usable as the data type of a Characteristic.",
        },
        classes: classes(),
        properties: Vec::new(),
        individuals: Vec::new(),
    }
}

const fn datatype(
    id: &'static str,
    label: &'static str,
    subclass_of: &'static [&'static str],
) -> Class {
    Class {
        id,
        label,
        comment: "",
        subclass_of,
    }
}

fn classes() -> Vec<Class> {
    vec![
        datatype(XSD_STRING, "string", &[]),
        datatype(XSD_BOOLEAN, "boolean", &[]),
        datatype(XSD_DECIMAL, "decimal", &[]),
        datatype(XSD_INTEGER, "integer", &[XSD_DECIMAL]),
        datatype(XSD_LONG, "long", &[XSD_INTEGER]),
        datatype(XSD_INT, "int", &[XSD_LONG]),
        datatype(XSD_SHORT, "short", &[XSD_INT]),
        datatype(XSD_BYTE, "byte", &[XSD_SHORT]),
        datatype(XSD_NON_NEGATIVE_INTEGER, "nonNegativeInteger", &[XSD_INTEGER]),
        datatype(
            XSD_POSITIVE_INTEGER,
            "positiveInteger",
            &[XSD_NON_NEGATIVE_INTEGER],
        ),
        datatype(XSD_UNSIGNED_LONG, "unsignedLong", &[XSD_NON_NEGATIVE_INTEGER]),
        datatype(XSD_UNSIGNED_INT, "unsignedInt", &[XSD_UNSIGNED_LONG]),
        datatype(XSD_UNSIGNED_SHORT, "unsignedShort", &[XSD_UNSIGNED_INT]),
        datatype(XSD_UNSIGNED_BYTE, "unsignedByte", &[XSD_UNSIGNED_SHORT]),
        datatype(XSD_NON_POSITIVE_INTEGER, "nonPositiveInteger", &[XSD_INTEGER]),
        datatype(
            XSD_NEGATIVE_INTEGER,
            "negativeInteger",
            &[XSD_NON_POSITIVE_INTEGER],
        ),
        datatype(XSD_DOUBLE, "double", &[]),
        datatype(XSD_FLOAT, "float", &[]),
        datatype(XSD_DATE, "date", &[]),
        datatype(XSD_TIME, "time", &[]),
        datatype(XSD_DATE_TIME, "dateTime", &[]),
        datatype(XSD_DATE_TIME_STAMP, "dateTimeStamp", &[XSD_DATE_TIME]),
        datatype(XSD_G_YEAR, "gYear", &[]),
        datatype(XSD_G_MONTH, "gMonth", &[]),
        datatype(XSD_G_DAY, "gDay", &[]),
        datatype(XSD_G_YEAR_MONTH, "gYearMonth", &[]),
        datatype(XSD_G_MONTH_DAY, "gMonthDay", &[]),
        datatype(XSD_DURATION, "duration", &[]),
        datatype(XSD_YEAR_MONTH_DURATION, "yearMonthDuration", &[XSD_DURATION]),
        datatype(XSD_DAY_TIME_DURATION, "dayTimeDuration", &[XSD_DURATION]),
        datatype(XSD_HEX_BINARY, "hexBinary", &[]),
        datatype(XSD_BASE64_BINARY, "base64Binary", &[]),
        datatype(XSD_ANY_URI, "anyURI", &[]),
        datatype(RDF_LANG_STRING, "langString", &[]),
        datatype(SAMM_CURIE, "curie", &[]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_parent_is_declared() {
        let classes = classes();
        for class in &classes {
            for parent in class.subclass_of {
                assert!(
                    classes.iter().any(|c| c.id == *parent),
                    "{} derives from undeclared {}",
                    class.id,
                    parent
                );
            }
        }
    }
}
