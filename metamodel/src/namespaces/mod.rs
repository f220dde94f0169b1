//! Meta-model namespace modules.
//!
//! Each module exposes a `module()` function returning a
//! [`NamespaceModule`](crate::model::NamespaceModule) with all classes,
//! attributes, and individuals for that namespace.

pub mod samm;
pub mod samm_c;
pub mod samm_e;
pub mod unit;
pub mod xsd;
