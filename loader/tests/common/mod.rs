//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Once;

use aspect_loader::AspectModelUrn;

/// Prefixes every fixture document starts with; `:` is bound per document.
pub const PREFIXES: &str = r#"
@prefix samm: <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
@prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
@prefix samm-e: <urn:samm:org.eclipse.esmf.samm:entity:2.1.0#> .
@prefix unit: <urn:samm:org.eclipse.esmf.samm:unit:2.1.0#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
"#;

/// `:Weight`, a Quantifiable decimal in kilograms.
pub const WEIGHT: &str = r#"
@prefix : <urn:samm:com.example.weight:1.0.0#> .

:Weight a samm:Property ;
    samm:preferredName "Weight"@en ;
    samm:characteristic :WeightCharacteristic .

:WeightCharacteristic a samm-c:Quantifiable ;
    samm:dataType xsd:decimal ;
    samm-c:unit unit:kilogram .
"#;

/// `:Vehicle`, referring to `:Weight` by identifier only.
pub const VEHICLE: &str = r#"
@prefix w: <urn:samm:com.example.weight:1.0.0#> .
@prefix : <urn:samm:com.example.vehicle:1.0.0#> .

:Vehicle a samm:Aspect ;
    samm:properties ( w:Weight ) ;
    samm:operations ( ) .
"#;

/// Prepends [`PREFIXES`] to a fixture body.
pub fn document(body: &str) -> String {
    format!("{PREFIXES}{body}")
}

/// Parses an identifier.
pub fn urn(iri: &str) -> AspectModelUrn {
    AspectModelUrn::parse(iri).unwrap()
}

/// Writes `body` as `<root>/<namespace>/<version>/<file>`.
pub fn write_model(root: &Path, namespace: &str, version: &str, file: &str, body: &str) -> PathBuf {
    let directory = root.join(namespace).join(version);
    std::fs::create_dir_all(&directory).unwrap();
    let path = directory.join(file);
    std::fs::write(&path, document(body)).unwrap();
    path
}

/// Routes loader logs to the test output, filtered by `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
