//! Aspect Meta Model vocabulary encoded as typed Rust data.
//!
//! The `samm-metamodel` crate provides the meta-model's own vocabulary (the
//! `samm`, `samm-c`, `samm-e`, `unit` and `xsd` namespaces) as static
//! Rust data structures, along with a serializer that produces Turtle output.
//! Loaders use it to recognise built-in identifiers, to synthesize the
//! built-in definitions graph, and to look up units and quantity kinds.
//!
//! # Entry Point
//!
//! ```
//! let meta = samm_metamodel::MetaModel::full();
//! assert_eq!(meta.namespaces.len(), 5);
//! assert!(meta.unit("kilogram").is_some());
//! ```
//!
//! # Serialization
//!
//! ```
//! let meta = samm_metamodel::MetaModel::full();
//! let turtle = samm_metamodel::serializer::turtle::to_turtle(meta);
//! assert!(turtle.contains("@prefix samm-c:"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

macro_rules! samm {
    ($name:literal) => {
        concat!("urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#", $name)
    };
}

macro_rules! samm_c {
    ($name:literal) => {
        concat!("urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#", $name)
    };
}

macro_rules! samm_e {
    ($name:literal) => {
        concat!("urn:samm:org.eclipse.esmf.samm:entity:2.1.0#", $name)
    };
}

macro_rules! unit {
    ($name:literal) => {
        concat!("urn:samm:org.eclipse.esmf.samm:unit:2.1.0#", $name)
    };
}

macro_rules! xsd {
    ($name:literal) => {
        concat!("http://www.w3.org/2001/XMLSchema#", $name)
    };
}

pub mod model;
pub mod namespaces;
pub mod serializer;

pub use model::{
    Class, Individual, IndividualValue, MetaModel, Namespace, NamespaceModule, Property,
    PropertyKind,
};

impl MetaModel {
    /// Returns the complete meta-model vocabulary.
    ///
    /// Assembly order follows the dependency graph between the namespaces:
    /// `xsd → samm → samm-c → samm-e → unit`
    #[must_use]
    pub fn full() -> &'static MetaModel {
        static META_MODEL: std::sync::OnceLock<MetaModel> = std::sync::OnceLock::new();
        META_MODEL.get_or_init(|| MetaModel {
            version: model::iris::META_MODEL_VERSION,
            namespaces: vec![
                namespaces::xsd::module(),
                namespaces::samm::module(),
                namespaces::samm_c::module(),
                namespaces::samm_e::module(),
                namespaces::unit::module(),
            ],
        })
    }
}
