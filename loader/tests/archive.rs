//! Loading models packaged in zip archives.

mod common;

use std::io::{Cursor, Write};
use std::path::Path;

use aspect_loader::{AspectModelLoader, LoadError, LoaderConfig, Origin, ResolutionError};
use common::{document, urn, VEHICLE, WEIGHT};
use zip::write::SimpleFileOptions;

fn zip(entries: &[(&str, String)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[test]
fn archive_documents_resolve_among_themselves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vehicle.zip");
    let data = zip(&[
        ("aspect-models/com.example.vehicle/1.0.0/Vehicle.ttl", document(VEHICLE)),
        ("aspect-models/com.example.weight/1.0.0/Weight.ttl", document(WEIGHT)),
        ("README.ttl", "not turtle at all".to_owned()),
    ]);
    std::fs::write(&path, data).unwrap();

    let model = AspectModelLoader::new().load_archive(&path).unwrap();
    assert_eq!(model.documents().len(), 2);
    let weight = model
        .element_by_urn(&urn("urn:samm:com.example.weight:1.0.0#Weight"))
        .unwrap();
    assert_eq!(model.aspects().next().unwrap().properties, vec![weight]);
    assert!(matches!(
        model.document_of(weight).unwrap().origin(),
        Some(Origin::Archive { entry, .. }) if entry.ends_with("Weight.ttl")
    ));
}

#[test]
fn archive_references_outside_the_archive_use_the_strategy() {
    let root = tempfile::tempdir().unwrap();
    common::write_model(root.path(), "com.example.weight", "1.0.0", "Weight.ttl", WEIGHT);
    let config = LoaderConfig {
        models_roots: vec![root.path().to_path_buf()],
        archive_folder: "models".to_owned(),
        ..LoaderConfig::default()
    };
    let data = zip(&[("models/Vehicle.ttl", document(VEHICLE))]);

    let model = AspectModelLoader::from_config(&config)
        .load_archive_from(Cursor::new(data.clone()), Path::new("vehicle.zip"))
        .unwrap();
    assert_eq!(model.documents().len(), 2);

    let unresolved = AspectModelLoader::new().load_archive_from(Cursor::new(data), Path::new("vehicle.zip"));
    assert!(matches!(unresolved, Err(ResolutionError::Unresolved { .. })));
}

#[test]
fn missing_archives_are_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let result = AspectModelLoader::new().load_archive(&dir.path().join("absent.zip"));
    assert!(matches!(result, Err(ResolutionError::Load(LoadError::Io { .. }))));
}
