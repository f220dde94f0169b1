//! Aspect Model URNs.
//!
//! User elements are named `urn:samm:<namespace>:<version>#<name>`;
//! meta-model elements carry an extra element-type segment,
//! `urn:samm:org.eclipse.esmf.samm:<element-type>:<version>#<name>`.
//! The legacy `urn:bamm:` scheme (and the legacy meta-model namespace
//! `io.openmanufacturing`) parse to the same canonical identifier.

use std::fmt;
use std::str::FromStr;

use samm_metamodel::model::iris::{
    LEGACY_META_MODEL_NAMESPACE, LEGACY_URN_SCHEME, META_MODEL_NAMESPACE, OWL, RDF, RDFS,
    URN_SCHEME, XSD,
};

/// Element-type segments allowed in meta-model URNs.
const META_MODEL_ELEMENT_TYPES: &[&str] = &["meta-model", "characteristic", "entity", "unit"];

/// A URN that could not be parsed as an Aspect Model identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid aspect model URN `{urn}`: {reason}")]
pub struct UrnError {
    /// The rejected input.
    pub urn: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

/// A parsed, canonical Aspect Model identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AspectModelUrn {
    namespace: String,
    element_type: Option<String>,
    version: String,
    name: String,
}

lexical_pattern!(is_namespace = r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*$");
lexical_pattern!(is_version = r"^\d+\.\d+\.\d+$");
lexical_pattern!(is_element_name = r"^[A-Za-z][A-Za-z0-9_-]*$");

impl AspectModelUrn {
    /// Parses `urn`, accepting both the canonical and the legacy scheme.
    ///
    /// # Errors
    ///
    /// Returns [`UrnError`] when `urn` is not of the form
    /// `urn:samm:<namespace>:<version>#<name>` (or the meta-model form with an
    /// element-type segment).
    pub fn parse(urn: &str) -> Result<Self, UrnError> {
        let error = |reason| UrnError {
            urn: urn.to_owned(),
            reason,
        };
        let rest = urn
            .strip_prefix(URN_SCHEME)
            .or_else(|| urn.strip_prefix(LEGACY_URN_SCHEME))
            .ok_or_else(|| error("expected the urn:samm: scheme"))?;
        let (path, name) = rest
            .split_once('#')
            .ok_or_else(|| error("missing `#<name>` element name"))?;
        let segments: Vec<&str> = path.split(':').collect();
        let (namespace, element_type, version) = match segments.as_slice() {
            [namespace, version] => (*namespace, None, *version),
            [namespace, element_type, version] => (*namespace, Some(*element_type), *version),
            _ => return Err(error("expected <namespace>:<version>")),
        };
        let namespace = if namespace == LEGACY_META_MODEL_NAMESPACE {
            META_MODEL_NAMESPACE
        } else {
            namespace
        };
        if !is_namespace(namespace) {
            return Err(error("malformed namespace"));
        }
        if !is_version(version) {
            return Err(error("version must be MAJOR.MINOR.PATCH"));
        }
        if !is_element_name(name) {
            return Err(error("malformed element name"));
        }
        match element_type {
            Some(_) if namespace != META_MODEL_NAMESPACE => {
                return Err(error("element type segment is reserved for the meta model"));
            }
            Some(t) if !META_MODEL_ELEMENT_TYPES.contains(&t) => {
                return Err(error("unknown meta model element type"));
            }
            None if namespace == META_MODEL_NAMESPACE => {
                return Err(error("meta model URNs need an element type segment"));
            }
            _ => {}
        }
        Ok(Self {
            namespace: namespace.to_owned(),
            element_type: element_type.map(str::to_owned),
            version: version.to_owned(),
            name: name.to_owned(),
        })
    }

    /// Dot-separated namespace, e.g. `com.example.vehicle`.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Element type segment of a meta-model URN (`meta-model`,
    /// `characteristic`, `entity` or `unit`).
    #[must_use]
    pub fn element_type(&self) -> Option<&str> {
        self.element_type.as_deref()
    }

    /// Version as `MAJOR.MINOR.PATCH`.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Element name (the URN fragment).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if this identifies an element of the meta model itself.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        self.namespace == META_MODEL_NAMESPACE
    }

    /// Returns the identifier of element `name` in the same namespace and version.
    #[must_use]
    pub fn with_name(&self, name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..self.clone()
        }
    }

    /// The canonical IRI of this identifier.
    #[must_use]
    pub fn to_iri(&self) -> String {
        self.spell(URN_SCHEME, META_MODEL_NAMESPACE)
    }

    /// The identifier as written by documents using the legacy scheme.
    #[must_use]
    pub fn legacy_spelling(&self) -> String {
        self.spell(LEGACY_URN_SCHEME, LEGACY_META_MODEL_NAMESPACE)
    }

    fn spell(&self, scheme: &str, meta_model_namespace: &str) -> String {
        let namespace = if self.is_builtin() {
            meta_model_namespace
        } else {
            &self.namespace
        };
        match &self.element_type {
            Some(t) => format!("{scheme}{namespace}:{t}:{}#{}", self.version, self.name),
            None => format!("{scheme}{namespace}:{}#{}", self.version, self.name),
        }
    }
}

impl fmt::Display for AspectModelUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iri())
    }
}

impl FromStr for AspectModelUrn {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// True if `iri` belongs to a vocabulary that never needs resolution: the
/// W3C namespaces or the meta model (in either URN spelling).
#[must_use]
pub fn is_builtin_iri(iri: &str) -> bool {
    if [RDF, RDFS, OWL, XSD].iter().any(|ns| iri.starts_with(ns)) {
        return true;
    }
    let canonical = format!("{URN_SCHEME}{META_MODEL_NAMESPACE}:");
    let legacy = format!("{LEGACY_URN_SCHEME}{LEGACY_META_MODEL_NAMESPACE}:");
    iri.starts_with(&canonical) || iri.starts_with(&legacy)
}

/// Normalises `iri` to its canonical spelling if it is an Aspect Model URN.
#[must_use]
pub fn canonical_iri(iri: &str) -> Option<String> {
    AspectModelUrn::parse(iri).ok().map(|urn| urn.to_iri())
}

#[cfg(test)]
mod tests {
    use super::*;
    use samm_metamodel::model::iris::SAMM_ASPECT;

    #[test]
    fn parses_user_urn() {
        let urn = AspectModelUrn::parse("urn:samm:com.example.vehicle:1.0.0#Vehicle").unwrap();
        assert_eq!(urn.namespace(), "com.example.vehicle");
        assert_eq!(urn.version(), "1.0.0");
        assert_eq!(urn.name(), "Vehicle");
        assert_eq!(urn.element_type(), None);
        assert!(!urn.is_builtin());
        assert_eq!(urn.to_iri(), "urn:samm:com.example.vehicle:1.0.0#Vehicle");
    }

    #[test]
    fn parses_meta_model_urn() {
        let urn = AspectModelUrn::parse(SAMM_ASPECT).unwrap();
        assert!(urn.is_builtin());
        assert_eq!(urn.element_type(), Some("meta-model"));
        assert_eq!(urn.to_iri(), SAMM_ASPECT);
    }

    #[test]
    fn legacy_spelling_normalises() {
        let legacy = AspectModelUrn::parse("urn:bamm:com.example:1.0.0#Weight").unwrap();
        let canonical = AspectModelUrn::parse("urn:samm:com.example:1.0.0#Weight").unwrap();
        assert_eq!(legacy, canonical);
        assert_eq!(legacy.legacy_spelling(), "urn:bamm:com.example:1.0.0#Weight");

        let meta =
            AspectModelUrn::parse("urn:bamm:io.openmanufacturing:meta-model:2.0.0#Aspect").unwrap();
        assert!(meta.is_builtin());
        assert_eq!(
            meta.to_iri(),
            "urn:samm:org.eclipse.esmf.samm:meta-model:2.0.0#Aspect"
        );
        assert_eq!(
            meta.legacy_spelling(),
            "urn:bamm:io.openmanufacturing:meta-model:2.0.0#Aspect"
        );
    }

    #[test]
    fn rejects_malformed_urns() {
        for bad in [
            "http://example.com/x",
            "urn:samm:com.example:1.0.0",
            "urn:samm:com.example:1.0#X",
            "urn:samm:com.example:1.0.0#1X",
            "urn:samm:com..example:1.0.0#X",
            "urn:samm:com.example:extra:1.0.0#X",
            "urn:samm:org.eclipse.esmf.samm:bogus:2.1.0#X",
            "urn:samm:org.eclipse.esmf.samm:2.1.0#X",
        ] {
            assert!(AspectModelUrn::parse(bad).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn builtin_iris() {
        assert!(is_builtin_iri(SAMM_ASPECT));
        assert!(is_builtin_iri("http://www.w3.org/2001/XMLSchema#string"));
        assert!(is_builtin_iri(
            "urn:bamm:io.openmanufacturing:characteristic:2.0.0#Text"
        ));
        assert!(!is_builtin_iri("urn:samm:com.example:1.0.0#Weight"));
        assert!(!is_builtin_iri("https://example.com/docs"));
    }

    #[test]
    fn sibling_names() {
        let urn = AspectModelUrn::parse("urn:samm:com.example:1.0.0#Vehicle").unwrap();
        assert_eq!(
            urn.with_name("Weight").to_iri(),
            "urn:samm:com.example:1.0.0#Weight"
        );
    }
}
