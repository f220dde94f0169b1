//! Loading of Aspect Models into a resolved, strongly typed model.
//!
//! An Aspect Model is spread over Turtle documents that refer to each other
//! by URN. The `aspect-loader` crate reads a set of start documents or
//! identifiers, pulls in every document they transitively refer to through
//! pluggable [`LookupStrategy`] implementations, and materializes every
//! defined resource into exactly one typed [`model::ModelElement`] held in an
//! [`model::ElementArena`]. The [`builder`] module constructs the same
//! elements programmatically and enforces the meta model's structural rules
//! when `build()` is called.
//!
//! # Entry Point
//!
//! ```
//! use aspect_loader::AspectModelLoader;
//!
//! let model = AspectModelLoader::new().load_str(
//!     r#"
//!     @prefix samm: <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
//!     @prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
//!     @prefix : <urn:samm:com.example:1.0.0#> .
//!
//!     :Vehicle a samm:Aspect ;
//!         samm:properties ( :name ) ;
//!         samm:operations ( ) .
//!     :name a samm:Property ; samm:characteristic samm-c:Text .
//!     "#,
//! )?;
//! let vehicle = model.aspects().next().ok_or("no aspect")?;
//! assert_eq!(vehicle.properties.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Resolution
//!
//! ```
//! use aspect_loader::resolve::InMemoryStrategy;
//! use aspect_loader::{parser::parse_turtle, AspectModelLoader, AspectModelUrn};
//!
//! let weight = parse_turtle(
//!     r#"
//!     @prefix samm: <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
//!     @prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
//!     @prefix : <urn:samm:com.example:1.0.0#> .
//!     :weight a samm:Property ; samm:characteristic samm-c:Text .
//!     "#,
//!     None,
//! )?;
//! let loader = AspectModelLoader::new().with_strategy(InMemoryStrategy::new(vec![weight]));
//! let model = loader.load_urns(&[AspectModelUrn::parse("urn:samm:com.example:1.0.0#weight")?])?;
//! assert_eq!(model.documents().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

macro_rules! lexical_pattern {
    ($name:ident = $re:literal) => {
        fn $name(text: &str) -> bool {
            static RE: std::sync::OnceLock<Option<regex::Regex>> = std::sync::OnceLock::new();
            RE.get_or_init(|| regex::Regex::new($re).ok())
                .as_ref()
                .is_some_and(|re| re.is_match(text))
        }
    };
}

pub mod archive;
pub mod attributes;
pub mod builder;
pub mod builtins;
pub mod config;
pub mod datatypes;
pub mod document;
pub mod error;
pub mod factory;
pub mod graph;
pub mod kind;
pub mod loader;
pub mod migrate;
pub mod model;
pub mod parser;
pub mod resolve;
pub mod urn;

pub use config::LoaderConfig;
pub use document::{Document, DocumentId, Origin};
pub use error::{BuildError, Error, LoadError, ResolutionError};
pub use factory::ElementFactory;
pub use kind::ElementKind;
pub use loader::{AspectModel, AspectModelLoader};
pub use migrate::{IdentityMigrator, Migrator};
pub use model::{ElementArena, ElementId, ModelElement};
pub use resolve::{LookupStrategy, ResolutionContext, ResolutionEngine};
pub use urn::AspectModelUrn;
