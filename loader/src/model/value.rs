use samm_metamodel::model::iris::{RDF_LANG_STRING, XSD_ANY_URI};

use super::{CollectionType, ElementId, Type};
use crate::datatypes::{self, Scalar};
use crate::error::LoadError;
use crate::graph::Literal;

/// A value as it appears in a model: in an Enumeration, as a Range bound,
/// as an example value, or asserted for a property of an instance.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single scalar.
    Scalar(ScalarValue),
    /// Several values with collection semantics.
    Collection(CollectionValue),
    /// An Entity instance, held in the arena.
    Instance(ElementId),
}

impl Value {
    /// The scalar, if this is one.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// The collection, if this is one.
    #[must_use]
    pub fn as_collection(&self) -> Option<&CollectionValue> {
        match self {
            Self::Collection(c) => Some(c),
            _ => None,
        }
    }

    /// The instance id, if this is one.
    #[must_use]
    pub fn as_instance(&self) -> Option<ElementId> {
        match self {
            Self::Instance(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<ScalarValue> for Value {
    fn from(value: ScalarValue) -> Self {
        Self::Scalar(value)
    }
}

impl From<CollectionValue> for Value {
    fn from(value: CollectionValue) -> Self {
        Self::Collection(value)
    }
}

/// A typed literal: the lexical form as written, its datatype and the
/// parsed value.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarValue {
    lexical: String,
    datatype: String,
    value: Scalar,
}

impl ScalarValue {
    /// Parses `lexical` as `datatype`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidLiteral`] if the datatype is unsupported
    /// or the lexical form does not parse. `rdf:langString` always fails
    /// here; use [`ScalarValue::lang_string`].
    pub fn parse(lexical: impl Into<String>, datatype: impl Into<String>) -> Result<Self, LoadError> {
        let lexical = lexical.into();
        let datatype = datatype.into();
        let value = datatypes::parse(&lexical, &datatype, None)?;
        Ok(Self {
            lexical,
            datatype,
            value,
        })
    }

    /// A language-tagged string.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidLiteral`] if `locale` is not a valid
    /// language tag.
    pub fn lang_string(text: impl Into<String>, locale: &str) -> Result<Self, LoadError> {
        let lexical = text.into();
        let value = datatypes::parse(&lexical, RDF_LANG_STRING, Some(locale))?;
        Ok(Self {
            lexical,
            datatype: RDF_LANG_STRING.to_owned(),
            value,
        })
    }

    /// Parses a graph literal.
    ///
    /// # Errors
    ///
    /// As [`ScalarValue::parse`] and [`ScalarValue::lang_string`].
    pub fn from_literal(literal: &Literal) -> Result<Self, LoadError> {
        let value = datatypes::parse(
            &literal.lexical,
            &literal.datatype,
            literal.language.as_deref(),
        )?;
        Ok(Self {
            lexical: literal.lexical.clone(),
            datatype: literal.datatype.clone(),
            value,
        })
    }

    /// A named resource used as a value; its identifier is the lexical form.
    pub(crate) fn resource(iri: &str, datatype: Option<&str>) -> Self {
        Self {
            lexical: iri.to_owned(),
            datatype: datatype.unwrap_or(XSD_ANY_URI).to_owned(),
            value: Scalar::Uri(iri.to_owned()),
        }
    }

    /// Lexical form.
    #[must_use]
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// Datatype IRI.
    #[must_use]
    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    /// Parsed value.
    #[must_use]
    pub fn value(&self) -> &Scalar {
        &self.value
    }

    /// Locale of a language-tagged string.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        match &self.value {
            Scalar::LangString { locale, .. } => Some(locale.as_str()),
            _ => None,
        }
    }

    /// The value's type.
    #[must_use]
    pub fn type_(&self) -> Type {
        Type::Scalar(self.datatype.clone())
    }
}

/// Several values tagged with collection semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionValue {
    /// Ordering and uniqueness semantics.
    pub collection_type: CollectionType,
    /// Type of the elements, if known.
    pub element_type: Option<Type>,
    /// The elements, in order.
    pub values: Vec<Value>,
}

impl CollectionValue {
    /// Creates a collection.
    #[must_use]
    pub fn new(collection_type: CollectionType, element_type: Option<Type>, values: Vec<Value>) -> Self {
        Self {
            collection_type,
            element_type,
            values,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
