//! Core meta-model vocabulary types.
//!
//! These types represent the Aspect Meta Model vocabulary as typed Rust
//! data. All instances are built as owned `Vec`s and referenced via borrows.
//! The top-level entry point is [`MetaModel::full()`](crate::MetaModel::full).

/// A meta-model namespace (e.g., `samm:`, `samm-c:`, `unit:`).
#[derive(Debug, Clone)]
pub struct Namespace {
    /// The prefix used in Turtle output (e.g., `"samm-c"`).
    pub prefix: &'static str,
    /// The full IRI of the namespace, including the trailing `#`.
    pub iri: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description of the namespace.
    pub comment: &'static str,
}

/// A class of the meta-model, or a datatype of the scalar type hierarchy.
#[derive(Debug, Clone)]
pub struct Class {
    /// Full IRI (e.g., `"urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#Aspect"`).
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Full IRIs of parent classes (`rdfs:subClassOf`).
    pub subclass_of: &'static [&'static str],
}

/// Whether an attribute relates a resource to a literal, another resource,
/// or only carries documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Relates a resource to a literal.
    Datatype,
    /// Relates two resources.
    Object,
    /// Used for documentation only.
    Annotation,
}

/// A meta-model attribute definition (e.g., `samm:preferredName`).
#[derive(Debug, Clone)]
pub struct Property {
    /// Full IRI.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Datatype, object, or annotation property.
    pub kind: PropertyKind,
    /// Whether the attribute carries at most one value per resource.
    pub functional: bool,
    /// Full IRI of the domain class, or `None` if unspecified.
    pub domain: Option<&'static str>,
    /// Full IRI of the range class or XSD datatype.
    pub range: &'static str,
}

/// A value in a named individual's property assertion.
#[derive(Debug, Clone)]
pub enum IndividualValue {
    /// A plain string literal.
    Str(&'static str),
    /// A language-tagged string literal: (text, language tag).
    LangStr(&'static str, &'static str),
    /// An integer literal.
    Int(i64),
    /// A boolean literal.
    Bool(bool),
    /// A literal with an explicit datatype: (lexical form, datatype IRI).
    Typed(&'static str, &'static str),
    /// An IRI reference to another resource.
    IriRef(&'static str),
    /// An ordered `rdf:List` of IRI references (used for `samm:properties`).
    List(&'static [&'static str]),
}

/// A named individual: a built-in characteristic, entity, property, unit,
/// quantity kind, or bound definition.
#[derive(Debug, Clone)]
pub struct Individual {
    /// Full IRI.
    pub id: &'static str,
    /// Full IRI of the class this individual is an instance of.
    pub type_: &'static str,
    /// Human-readable label; emitted as the English `samm:preferredName`.
    pub label: &'static str,
    /// Description; emitted as the English `samm:description`.
    pub comment: &'static str,
    /// Property assertions: pairs of (property IRI, value).
    pub properties: &'static [(&'static str, IndividualValue)],
}

impl Individual {
    /// Returns the local name of this individual (the fragment after `#`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        local_name(self.id)
    }

    /// Returns every value asserted for `property`, in declaration order.
    pub fn values<'a>(&'a self, property: &'a str) -> impl Iterator<Item = &'a IndividualValue> {
        self.properties
            .iter()
            .filter(move |(p, _)| *p == property)
            .map(|(_, v)| v)
    }
}

/// A complete namespace module: namespace metadata + classes + properties + individuals.
#[derive(Debug, Clone)]
pub struct NamespaceModule {
    /// Namespace metadata.
    pub namespace: Namespace,
    /// All classes defined in this namespace.
    pub classes: Vec<Class>,
    /// All attributes defined in this namespace.
    pub properties: Vec<Property>,
    /// All named individuals declared in this namespace.
    pub individuals: Vec<Individual>,
}

/// The complete meta-model vocabulary.
#[derive(Debug)]
pub struct MetaModel {
    /// Meta-model version (e.g., `"2.1.0"`).
    pub version: &'static str,
    /// All namespace modules in dependency order.
    pub namespaces: Vec<NamespaceModule>,
}

impl MetaModel {
    /// Looks up a class by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_class(&self, iri: &str) -> Option<&Class> {
        self.namespaces
            .iter()
            .flat_map(|m| m.classes.iter())
            .find(|c| c.id == iri)
    }

    /// Looks up an attribute by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, iri: &str) -> Option<&Property> {
        self.namespaces
            .iter()
            .flat_map(|m| m.properties.iter())
            .find(|p| p.id == iri)
    }

    /// Looks up a named individual by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_individual(&self, iri: &str) -> Option<&Individual> {
        self.individuals().find(|i| i.id == iri)
    }

    /// Iterates over the individuals of every namespace, in assembly order.
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.namespaces.iter().flat_map(|m| m.individuals.iter())
    }

    /// Looks up a catalog unit by local name (e.g. `"kilogram"`).
    #[must_use]
    pub fn unit(&self, name: &str) -> Option<&Individual> {
        self.individuals()
            .find(|i| i.type_ == iris::UNIT_UNIT && i.name() == name)
    }

    /// Looks up a catalog quantity kind by local name (e.g. `"time"`).
    #[must_use]
    pub fn quantity_kind(&self, name: &str) -> Option<&Individual> {
        self.individuals()
            .find(|i| i.type_ == iris::UNIT_QUANTITY_KIND && i.name() == name)
    }

    /// Returns true if `iri` names a datatype of the scalar type hierarchy.
    #[must_use]
    pub fn is_datatype(&self, iri: &str) -> bool {
        self.namespaces
            .iter()
            .filter(|m| m.namespace.prefix == "xsd")
            .flat_map(|m| m.classes.iter())
            .any(|c| c.id == iri)
    }

    /// Returns true if datatype `sub` equals `sup` or derives from it
    /// through `subclass_of` links.
    #[must_use]
    pub fn is_datatype_subtype_of(&self, sub: &str, sup: &str) -> bool {
        let mut current = Some(sub);
        let mut hops = 0;
        while let Some(iri) = current {
            if iri == sup {
                return true;
            }
            hops += 1;
            if hops > 32 {
                return false;
            }
            current = self
                .find_class(iri)
                .and_then(|c| c.subclass_of.first().copied());
        }
        false
    }

    /// Returns the total number of classes across all namespaces.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.classes.len()).sum()
    }

    /// Returns the total number of attributes across all namespaces.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.properties.len()).sum()
    }

    /// Returns the total number of named individuals across all namespaces.
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.individuals.len()).sum()
    }
}

/// Returns the fragment of `iri` after the last `#`, or the whole string.
#[must_use]
pub fn local_name(iri: &str) -> &str {
    iri.rsplit_once('#').map_or(iri, |(_, name)| name)
}

/// Standard IRI constants used across all namespace modules.
pub mod iris {
    /// Version of the meta-model encoded by this crate.
    pub const META_MODEL_VERSION: &str = "2.1.0";

    /// Canonical URN scheme prefix.
    pub const URN_SCHEME: &str = "urn:samm:";
    /// Legacy URN scheme prefix; normalized to [`URN_SCHEME`].
    pub const LEGACY_URN_SCHEME: &str = "urn:bamm:";
    /// Namespace of the meta-model's own elements.
    pub const META_MODEL_NAMESPACE: &str = "org.eclipse.esmf.samm";
    /// Legacy namespace of the meta-model's own elements.
    pub const LEGACY_META_MODEL_NAMESPACE: &str = "io.openmanufacturing";

    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:first`.
    pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    /// `rdf:rest`.
    pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    /// `rdf:nil`.
    pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    /// `rdf:langString`.
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    /// `rdf:List`.
    pub const RDF_LIST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#List";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:Resource`.
    pub const RDFS_RESOURCE: &str = "http://www.w3.org/2000/01/rdf-schema#Resource";
    /// `rdfs:Literal`.
    pub const RDFS_LITERAL: &str = "http://www.w3.org/2000/01/rdf-schema#Literal";

    // Namespace IRIs
    /// Meta-model namespace.
    pub const NS_SAMM: &str = "urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#";
    /// Characteristic namespace.
    pub const NS_SAMM_C: &str = "urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#";
    /// Built-in entity namespace.
    pub const NS_SAMM_E: &str = "urn:samm:org.eclipse.esmf.samm:entity:2.1.0#";
    /// Unit catalog namespace.
    pub const NS_UNIT: &str = "urn:samm:org.eclipse.esmf.samm:unit:2.1.0#";

    // samm: classes
    /// `samm:Aspect`.
    pub const SAMM_ASPECT: &str = samm!("Aspect");
    /// `samm:Property`.
    pub const SAMM_PROPERTY: &str = samm!("Property");
    /// `samm:AbstractProperty`.
    pub const SAMM_ABSTRACT_PROPERTY: &str = samm!("AbstractProperty");
    /// `samm:Entity`.
    pub const SAMM_ENTITY: &str = samm!("Entity");
    /// `samm:AbstractEntity`.
    pub const SAMM_ABSTRACT_ENTITY: &str = samm!("AbstractEntity");
    /// `samm:Characteristic`.
    pub const SAMM_CHARACTERISTIC: &str = samm!("Characteristic");
    /// `samm:Constraint`.
    pub const SAMM_CONSTRAINT: &str = samm!("Constraint");
    /// `samm:Operation`.
    pub const SAMM_OPERATION: &str = samm!("Operation");
    /// `samm:Event`.
    pub const SAMM_EVENT: &str = samm!("Event");
    /// `samm:Value`.
    pub const SAMM_VALUE: &str = samm!("Value");
    /// `samm:curie` datatype.
    pub const SAMM_CURIE: &str = samm!("curie");

    // samm: attributes
    /// `samm:preferredName`.
    pub const SAMM_PREFERRED_NAME: &str = samm!("preferredName");
    /// `samm:description`.
    pub const SAMM_DESCRIPTION: &str = samm!("description");
    /// `samm:see`.
    pub const SAMM_SEE: &str = samm!("see");
    /// `samm:properties`.
    pub const SAMM_PROPERTIES: &str = samm!("properties");
    /// `samm:operations`.
    pub const SAMM_OPERATIONS: &str = samm!("operations");
    /// `samm:events`.
    pub const SAMM_EVENTS: &str = samm!("events");
    /// `samm:input`.
    pub const SAMM_INPUT: &str = samm!("input");
    /// `samm:output`.
    pub const SAMM_OUTPUT: &str = samm!("output");
    /// `samm:parameters`.
    pub const SAMM_PARAMETERS: &str = samm!("parameters");
    /// `samm:characteristic`.
    pub const SAMM_CHARACTERISTIC_ATTR: &str = samm!("characteristic");
    /// `samm:dataType`.
    pub const SAMM_DATA_TYPE: &str = samm!("dataType");
    /// `samm:exampleValue`.
    pub const SAMM_EXAMPLE_VALUE: &str = samm!("exampleValue");
    /// `samm:optional`.
    pub const SAMM_OPTIONAL: &str = samm!("optional");
    /// `samm:notInPayload`.
    pub const SAMM_NOT_IN_PAYLOAD: &str = samm!("notInPayload");
    /// `samm:payloadName`.
    pub const SAMM_PAYLOAD_NAME: &str = samm!("payloadName");
    /// `samm:extends`.
    pub const SAMM_EXTENDS: &str = samm!("extends");
    /// `samm:value`.
    pub const SAMM_VALUE_ATTR: &str = samm!("value");
    /// `samm:property`, the property-reference edge.
    pub const SAMM_PROPERTY_ATTR: &str = samm!("property");

    // samm-c: classes
    /// `samm-c:Trait`.
    pub const SAMM_C_TRAIT: &str = samm_c!("Trait");
    /// `samm-c:Collection`.
    pub const SAMM_C_COLLECTION: &str = samm_c!("Collection");
    /// `samm-c:List`.
    pub const SAMM_C_LIST: &str = samm_c!("List");
    /// `samm-c:Set`.
    pub const SAMM_C_SET: &str = samm_c!("Set");
    /// `samm-c:SortedSet`.
    pub const SAMM_C_SORTED_SET: &str = samm_c!("SortedSet");
    /// `samm-c:TimeSeries`.
    pub const SAMM_C_TIME_SERIES: &str = samm_c!("TimeSeries");
    /// `samm-c:Enumeration`.
    pub const SAMM_C_ENUMERATION: &str = samm_c!("Enumeration");
    /// `samm-c:State`.
    pub const SAMM_C_STATE: &str = samm_c!("State");
    /// `samm-c:Measurement`.
    pub const SAMM_C_MEASUREMENT: &str = samm_c!("Measurement");
    /// `samm-c:Quantifiable`.
    pub const SAMM_C_QUANTIFIABLE: &str = samm_c!("Quantifiable");
    /// `samm-c:Duration`.
    pub const SAMM_C_DURATION: &str = samm_c!("Duration");
    /// `samm-c:Code`.
    pub const SAMM_C_CODE: &str = samm_c!("Code");
    /// `samm-c:Either`.
    pub const SAMM_C_EITHER: &str = samm_c!("Either");
    /// `samm-c:SingleEntity`.
    pub const SAMM_C_SINGLE_ENTITY: &str = samm_c!("SingleEntity");
    /// `samm-c:StructuredValue`.
    pub const SAMM_C_STRUCTURED_VALUE: &str = samm_c!("StructuredValue");
    /// `samm-c:RangeConstraint`.
    pub const SAMM_C_RANGE_CONSTRAINT: &str = samm_c!("RangeConstraint");
    /// `samm-c:LengthConstraint`.
    pub const SAMM_C_LENGTH_CONSTRAINT: &str = samm_c!("LengthConstraint");
    /// `samm-c:EncodingConstraint`.
    pub const SAMM_C_ENCODING_CONSTRAINT: &str = samm_c!("EncodingConstraint");
    /// `samm-c:RegularExpressionConstraint`.
    pub const SAMM_C_REGULAR_EXPRESSION_CONSTRAINT: &str =
        samm_c!("RegularExpressionConstraint");
    /// `samm-c:FixedPointConstraint`.
    pub const SAMM_C_FIXED_POINT_CONSTRAINT: &str = samm_c!("FixedPointConstraint");
    /// `samm-c:LanguageConstraint`.
    pub const SAMM_C_LANGUAGE_CONSTRAINT: &str = samm_c!("LanguageConstraint");
    /// `samm-c:LocaleConstraint`.
    pub const SAMM_C_LOCALE_CONSTRAINT: &str = samm_c!("LocaleConstraint");
    /// `samm-c:BoundDefinition`.
    pub const SAMM_C_BOUND_DEFINITION: &str = samm_c!("BoundDefinition");

    // samm-c: attributes
    /// `samm-c:baseCharacteristic`.
    pub const SAMM_C_BASE_CHARACTERISTIC: &str = samm_c!("baseCharacteristic");
    /// `samm-c:constraint`.
    pub const SAMM_C_CONSTRAINT: &str = samm_c!("constraint");
    /// `samm-c:elementCharacteristic`.
    pub const SAMM_C_ELEMENT_CHARACTERISTIC: &str = samm_c!("elementCharacteristic");
    /// `samm-c:values`.
    pub const SAMM_C_VALUES: &str = samm_c!("values");
    /// `samm-c:defaultValue`.
    pub const SAMM_C_DEFAULT_VALUE: &str = samm_c!("defaultValue");
    /// `samm-c:unit`.
    pub const SAMM_C_UNIT: &str = samm_c!("unit");
    /// `samm-c:left`.
    pub const SAMM_C_LEFT: &str = samm_c!("left");
    /// `samm-c:right`.
    pub const SAMM_C_RIGHT: &str = samm_c!("right");
    /// `samm-c:deconstructionRule`.
    pub const SAMM_C_DECONSTRUCTION_RULE: &str = samm_c!("deconstructionRule");
    /// `samm-c:elements`.
    pub const SAMM_C_ELEMENTS: &str = samm_c!("elements");
    /// `samm-c:minValue`.
    pub const SAMM_C_MIN_VALUE: &str = samm_c!("minValue");
    /// `samm-c:maxValue`.
    pub const SAMM_C_MAX_VALUE: &str = samm_c!("maxValue");
    /// `samm-c:lowerBoundDefinition`.
    pub const SAMM_C_LOWER_BOUND_DEFINITION: &str = samm_c!("lowerBoundDefinition");
    /// `samm-c:upperBoundDefinition`.
    pub const SAMM_C_UPPER_BOUND_DEFINITION: &str = samm_c!("upperBoundDefinition");
    /// `samm-c:scale`.
    pub const SAMM_C_SCALE: &str = samm_c!("scale");
    /// `samm-c:integer`.
    pub const SAMM_C_INTEGER: &str = samm_c!("integer");
    /// `samm-c:languageCode`.
    pub const SAMM_C_LANGUAGE_CODE: &str = samm_c!("languageCode");
    /// `samm-c:localeCode`.
    pub const SAMM_C_LOCALE_CODE: &str = samm_c!("localeCode");

    // samm-c: individuals
    /// `samm-c:AT_LEAST`.
    pub const SAMM_C_AT_LEAST: &str = samm_c!("AT_LEAST");
    /// `samm-c:GREATER_THAN`.
    pub const SAMM_C_GREATER_THAN: &str = samm_c!("GREATER_THAN");
    /// `samm-c:LESS_THAN`.
    pub const SAMM_C_LESS_THAN: &str = samm_c!("LESS_THAN");
    /// `samm-c:AT_MOST`.
    pub const SAMM_C_AT_MOST: &str = samm_c!("AT_MOST");
    /// `samm-c:Text`.
    pub const SAMM_C_TEXT: &str = samm_c!("Text");
    /// `samm-c:Boolean`.
    pub const SAMM_C_BOOLEAN: &str = samm_c!("Boolean");
    /// `samm-c:Timestamp`.
    pub const SAMM_C_TIMESTAMP: &str = samm_c!("Timestamp");
    /// `samm-c:MultiLanguageText`.
    pub const SAMM_C_MULTI_LANGUAGE_TEXT: &str = samm_c!("MultiLanguageText");
    /// `samm-c:UnitReference`.
    pub const SAMM_C_UNIT_REFERENCE: &str = samm_c!("UnitReference");

    // samm-e: individuals
    /// `samm-e:TimeSeriesEntity`.
    pub const SAMM_E_TIME_SERIES_ENTITY: &str = samm_e!("TimeSeriesEntity");
    /// `samm-e:timestamp`.
    pub const SAMM_E_TIMESTAMP: &str = samm_e!("timestamp");
    /// `samm-e:value`.
    pub const SAMM_E_VALUE: &str = samm_e!("value");
    /// `samm-e:Point3d`.
    pub const SAMM_E_POINT_3D: &str = samm_e!("Point3d");

    // unit:
    /// `unit:Unit`.
    pub const UNIT_UNIT: &str = unit!("Unit");
    /// `unit:QuantityKind`.
    pub const UNIT_QUANTITY_KIND: &str = unit!("QuantityKind");
    /// `unit:symbol`.
    pub const UNIT_SYMBOL: &str = unit!("symbol");
    /// `unit:code`.
    pub const UNIT_CODE: &str = unit!("code");
    /// `unit:referenceUnit`.
    pub const UNIT_REFERENCE_UNIT: &str = unit!("referenceUnit");
    /// `unit:conversionFactor`.
    pub const UNIT_CONVERSION_FACTOR: &str = unit!("conversionFactor");
    /// `unit:quantityKind`.
    pub const UNIT_QUANTITY_KIND_ATTR: &str = unit!("quantityKind");

    // XSD datatypes
    /// `xsd:string`.
    pub const XSD_STRING: &str = xsd!("string");
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = xsd!("boolean");
    /// `xsd:decimal`.
    pub const XSD_DECIMAL: &str = xsd!("decimal");
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = xsd!("integer");
    /// `xsd:double`.
    pub const XSD_DOUBLE: &str = xsd!("double");
    /// `xsd:float`.
    pub const XSD_FLOAT: &str = xsd!("float");
    /// `xsd:long`.
    pub const XSD_LONG: &str = xsd!("long");
    /// `xsd:int`.
    pub const XSD_INT: &str = xsd!("int");
    /// `xsd:short`.
    pub const XSD_SHORT: &str = xsd!("short");
    /// `xsd:byte`.
    pub const XSD_BYTE: &str = xsd!("byte");
    /// `xsd:unsignedLong`.
    pub const XSD_UNSIGNED_LONG: &str = xsd!("unsignedLong");
    /// `xsd:unsignedInt`.
    pub const XSD_UNSIGNED_INT: &str = xsd!("unsignedInt");
    /// `xsd:unsignedShort`.
    pub const XSD_UNSIGNED_SHORT: &str = xsd!("unsignedShort");
    /// `xsd:unsignedByte`.
    pub const XSD_UNSIGNED_BYTE: &str = xsd!("unsignedByte");
    /// `xsd:positiveInteger`.
    pub const XSD_POSITIVE_INTEGER: &str = xsd!("positiveInteger");
    /// `xsd:nonNegativeInteger`.
    pub const XSD_NON_NEGATIVE_INTEGER: &str = xsd!("nonNegativeInteger");
    /// `xsd:negativeInteger`.
    pub const XSD_NEGATIVE_INTEGER: &str = xsd!("negativeInteger");
    /// `xsd:nonPositiveInteger`.
    pub const XSD_NON_POSITIVE_INTEGER: &str = xsd!("nonPositiveInteger");
    /// `xsd:date`.
    pub const XSD_DATE: &str = xsd!("date");
    /// `xsd:time`.
    pub const XSD_TIME: &str = xsd!("time");
    /// `xsd:dateTime`.
    pub const XSD_DATE_TIME: &str = xsd!("dateTime");
    /// `xsd:dateTimeStamp`.
    pub const XSD_DATE_TIME_STAMP: &str = xsd!("dateTimeStamp");
    /// `xsd:gYear`.
    pub const XSD_G_YEAR: &str = xsd!("gYear");
    /// `xsd:gMonth`.
    pub const XSD_G_MONTH: &str = xsd!("gMonth");
    /// `xsd:gDay`.
    pub const XSD_G_DAY: &str = xsd!("gDay");
    /// `xsd:gYearMonth`.
    pub const XSD_G_YEAR_MONTH: &str = xsd!("gYearMonth");
    /// `xsd:gMonthDay`.
    pub const XSD_G_MONTH_DAY: &str = xsd!("gMonthDay");
    /// `xsd:duration`.
    pub const XSD_DURATION: &str = xsd!("duration");
    /// `xsd:yearMonthDuration`.
    pub const XSD_YEAR_MONTH_DURATION: &str = xsd!("yearMonthDuration");
    /// `xsd:dayTimeDuration`.
    pub const XSD_DAY_TIME_DURATION: &str = xsd!("dayTimeDuration");
    /// `xsd:hexBinary`.
    pub const XSD_HEX_BINARY: &str = xsd!("hexBinary");
    /// `xsd:base64Binary`.
    pub const XSD_BASE64_BINARY: &str = xsd!("base64Binary");
    /// `xsd:anyURI`.
    pub const XSD_ANY_URI: &str = xsd!("anyURI");
}

#[cfg(test)]
mod tests {
    use super::iris::*;
    use super::*;
    use crate::MetaModel;

    #[test]
    fn local_name_strips_namespace() {
        assert_eq!(local_name(SAMM_ASPECT), "Aspect");
        assert_eq!(local_name("no-fragment"), "no-fragment");
    }

    #[test]
    fn integer_types_derive_from_decimal() {
        let meta = MetaModel::full();
        assert!(meta.is_datatype_subtype_of(XSD_BYTE, XSD_DECIMAL));
        assert!(meta.is_datatype_subtype_of(XSD_UNSIGNED_BYTE, XSD_INTEGER));
        assert!(meta.is_datatype_subtype_of(XSD_INT, XSD_INT));
        assert!(!meta.is_datatype_subtype_of(XSD_DECIMAL, XSD_INTEGER));
        assert!(!meta.is_datatype_subtype_of(XSD_STRING, XSD_BOOLEAN));
    }

    #[test]
    fn unit_catalog_lookup() {
        let meta = MetaModel::full();
        let kilogram = meta.unit("kilogram");
        assert!(kilogram.is_some());
        assert!(meta.unit("time").is_none());
        assert!(meta.quantity_kind("time").is_some());
        let second = meta.unit("secondUnitOfTime").map(|u| {
            u.values(UNIT_QUANTITY_KIND_ATTR)
                .filter_map(|v| match v {
                    IndividualValue::IriRef(iri) => Some(local_name(iri)),
                    _ => None,
                })
                .collect::<Vec<_>>()
        });
        assert_eq!(second, Some(vec!["time"]));
    }

    #[test]
    fn datatypes_are_recognised() {
        let meta = MetaModel::full();
        assert!(meta.is_datatype(XSD_STRING));
        assert!(meta.is_datatype(RDF_LANG_STRING));
        assert!(meta.is_datatype(SAMM_CURIE));
        assert!(!meta.is_datatype(SAMM_ASPECT));
    }
}
