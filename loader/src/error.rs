//! Error taxonomy.
//!
//! Load and resolution errors abort a whole loading session; build errors
//! only fail the single `build()` call that raised them.

use std::path::PathBuf;

use thiserror::Error;

use crate::urn::UrnError;

/// Graph content that does not fit the meta model, or a source that could
/// not be read or parsed.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The Turtle source could not be parsed.
    #[error("syntax error in {origin}: {message}")]
    Syntax {
        /// Source description.
        origin: String,
        /// Parser message.
        message: String,
    },

    /// A source file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An archive could not be opened or read.
    #[error("archive error in {path}: {message}")]
    Archive {
        /// Archive description.
        path: String,
        /// Underlying error message.
        message: String,
    },

    /// A configuration file is malformed.
    #[error("invalid configuration: {message}")]
    Config {
        /// Parser message.
        message: String,
    },

    /// Neither the resource nor anything it refers to asserts a known type.
    #[error("resource {resource} has no determinable type")]
    UnknownType {
        /// The offending resource.
        resource: String,
    },

    /// A resource is used where an element of a different kind is required.
    #[error("resource {resource} is {actual}, expected {expected}")]
    UnexpectedKind {
        /// The offending resource.
        resource: String,
        /// Kind required at the point of use.
        expected: String,
        /// Kind the resource actually has.
        actual: String,
    },

    /// A mandatory attribute has no value.
    #[error("resource {resource} is missing mandatory attribute <{attribute}>")]
    MissingAttribute {
        /// The offending resource.
        resource: String,
        /// Attribute IRI.
        attribute: String,
    },

    /// A single-valued attribute has several values.
    #[error("resource {resource} has {count} values for single-valued attribute <{attribute}>")]
    AmbiguousAttribute {
        /// The offending resource.
        resource: String,
        /// Attribute IRI.
        attribute: String,
        /// Number of values found.
        count: usize,
    },

    /// An attribute value has the wrong shape.
    #[error("resource {resource} has an invalid value for <{attribute}>: {reason}")]
    InvalidAttribute {
        /// The offending resource.
        resource: String,
        /// Attribute IRI.
        attribute: String,
        /// What is wrong with the value.
        reason: String,
    },

    /// An entity instance omits a mandatory property.
    #[error("entity instance {resource} has no value for mandatory property <{property}>")]
    MissingPropertyValue {
        /// The entity instance.
        resource: String,
        /// IRI of the missing property.
        property: String,
    },

    /// A literal does not parse as its datatype.
    #[error("invalid literal {lexical:?} for datatype <{datatype}>: {reason}")]
    InvalidLiteral {
        /// Lexical form.
        lexical: String,
        /// Datatype IRI.
        datatype: String,
        /// Parser message.
        reason: String,
    },

    /// A graph node cannot be turned into a value of the expected type.
    #[error("cannot build a value from {resource}: {reason}")]
    InvalidValue {
        /// The offending node.
        resource: String,
        /// Why no value could be built.
        reason: String,
    },

    /// The content of an element still under construction was needed, or an
    /// inheritance chain loops.
    #[error("cycle detected at {resource}")]
    Cycle {
        /// Resource at which the cycle was detected.
        resource: String,
    },

    /// A resource IRI is not a valid identifier.
    #[error(transparent)]
    Urn(#[from] UrnError),
}

/// A lookup strategy that failed, or returned something other than what it
/// was asked for.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// No lookup strategy found a document for the identifier.
    #[error("could not resolve {urn}")]
    Unresolved {
        /// The identifier.
        urn: String,
    },

    /// A strategy returned a document that does not define the identifier.
    #[error("lookup of {urn} returned {origin}, which does not define it")]
    ContractViolation {
        /// The identifier.
        urn: String,
        /// Origin of the returned document.
        origin: String,
    },

    /// A strategy failed outright.
    #[error("lookup of {urn} failed: {message}")]
    Lookup {
        /// The identifier.
        urn: String,
        /// Failure description.
        message: String,
    },

    /// A start identifier is malformed.
    #[error(transparent)]
    InvalidUrn(#[from] UrnError),

    /// A resolved or start document failed to load.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// An element handed to a builder violates a structural rule of the meta model.
#[derive(Error, Debug)]
pub enum BuildError {
    /// A required field was never set.
    #[error("{element}: missing required {field}")]
    MissingField {
        /// Element being built.
        element: String,
        /// Name of the field.
        field: &'static str,
    },

    /// A field was set that the element kind does not support.
    #[error("{element}: {field} does not apply to entity instances")]
    NotApplicable {
        /// Element being built.
        element: String,
        /// Name of the field.
        field: &'static str,
    },

    /// A structural rule is violated.
    #[error("{element}: {rule}")]
    Invariant {
        /// Element being built.
        element: String,
        /// The violated rule.
        rule: String,
    },

    /// An entity instance assigns a property its entity does not have.
    #[error("{element}: property {property} does not belong to entity {entity}")]
    ForeignProperty {
        /// Element being built.
        element: String,
        /// The assigned property.
        property: String,
        /// The instance's entity.
        entity: String,
    },

    /// An entity instance omits a mandatory property.
    #[error("{element}: no value for mandatory property {property}")]
    MissingPropertyValue {
        /// Element being built.
        element: String,
        /// The missing property.
        property: String,
    },

    /// A StructuredValue's deconstruction rule is not a valid pattern.
    #[error("{element}: invalid deconstruction rule: {source}")]
    Pattern {
        /// Element being built.
        element: String,
        /// Regex compiler error.
        #[source]
        source: regex::Error,
    },

    /// A scalar value does not parse as its datatype.
    #[error("{element}: {source}")]
    Value {
        /// Element being built.
        element: String,
        /// The literal error.
        #[source]
        source: LoadError,
    },
}

/// Any error raised by this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// See [`LoadError`].
    #[error(transparent)]
    Load(#[from] LoadError),

    /// See [`ResolutionError`].
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// See [`BuildError`].
    #[error(transparent)]
    Build(#[from] BuildError),
}

impl LoadError {
    pub(crate) fn missing(resource: impl ToString, attribute: &str) -> Self {
        Self::MissingAttribute {
            resource: resource.to_string(),
            attribute: attribute.to_owned(),
        }
    }

    pub(crate) fn invalid(resource: impl ToString, attribute: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            resource: resource.to_string(),
            attribute: attribute.to_owned(),
            reason: reason.into(),
        }
    }
}
