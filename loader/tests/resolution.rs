//! End-to-end resolution: identifiers pulled in from models roots, closure
//! over every reference, and de-duplication of documents.

mod common;

use aspect_loader::model::{CharacteristicKind, Type};
use aspect_loader::resolve::{FileSystemStrategy, FirstSuccess, InMemoryStrategy};
use aspect_loader::{
    parser::parse_turtle, AspectModelLoader, LoaderConfig, Origin, ResolutionError,
};
use common::{document, init_tracing, urn, write_model, VEHICLE, WEIGHT};

#[test]
fn vehicle_pulls_in_weight_by_identifier() {
    init_tracing();
    let root = tempfile::tempdir().unwrap();
    write_model(root.path(), "com.example.weight", "1.0.0", "Weight.ttl", WEIGHT);
    write_model(root.path(), "com.example.vehicle", "1.0.0", "Vehicle.ttl", VEHICLE);

    let config = LoaderConfig {
        models_roots: vec![root.path().to_path_buf()],
        ..LoaderConfig::default()
    };
    let model = AspectModelLoader::from_config(&config)
        .load_urns(&[urn("urn:samm:com.example.vehicle:1.0.0#Vehicle")])
        .unwrap();

    assert_eq!(model.documents().len(), 2);
    assert_eq!(model.files().count(), 2);
    let weight = model
        .element_by_urn(&urn("urn:samm:com.example.weight:1.0.0#Weight"))
        .unwrap();
    let vehicle = model.aspects().next().unwrap();
    assert_eq!(vehicle.properties, vec![weight]);

    let arena = model.arena();
    let characteristic = arena.property(weight).unwrap().characteristic.unwrap();
    let characteristic = arena.characteristic(characteristic).unwrap();
    assert_eq!(
        characteristic.data_type,
        Some(Type::Scalar("http://www.w3.org/2001/XMLSchema#decimal".into()))
    );
    let CharacteristicKind::Quantifiable { unit: Some(unit) } = characteristic.kind else {
        panic!("expected a Quantifiable with a unit");
    };
    assert_eq!(arena.unit(unit).unwrap().symbol.as_deref(), Some("kg"));

    let weight_document = model.document_of(weight).unwrap();
    assert!(matches!(
        weight_document.origin(),
        Some(Origin::File(path)) if path.ends_with("com.example.weight/1.0.0/Weight.ttl")
    ));
}

#[test]
fn documents_not_named_after_the_element_are_found_by_scanning() {
    let root = tempfile::tempdir().unwrap();
    write_model(root.path(), "com.example.weight", "1.0.0", "shared.ttl", WEIGHT);
    let model = AspectModelLoader::new()
        .with_strategy(FileSystemStrategy::new(root.path()))
        .load_str(&document(VEHICLE))
        .unwrap();
    assert_eq!(model.documents().len(), 2);
}

#[test]
fn every_reference_is_materialized() {
    let root = tempfile::tempdir().unwrap();
    write_model(root.path(), "com.example.weight", "1.0.0", "Weight.ttl", WEIGHT);
    let model = AspectModelLoader::new()
        .with_strategy(FileSystemStrategy::new(root.path()))
        .load_str(&document(VEHICLE))
        .unwrap();
    for iri in model.graph().iris() {
        let Ok(identifier) = aspect_loader::AspectModelUrn::parse(iri) else {
            continue;
        };
        assert!(
            identifier.is_builtin() || model.element_by_urn(&identifier).is_some(),
            "{iri} was not materialized"
        );
    }
}

#[test]
fn missing_references_fail_resolution() {
    let root = tempfile::tempdir().unwrap();
    let result = AspectModelLoader::new()
        .with_strategy(FileSystemStrategy::new(root.path()))
        .load_str(&document(VEHICLE));
    assert!(matches!(result, Err(ResolutionError::Unresolved { urn }) if urn.ends_with("#Weight")));
}

#[test]
fn earlier_models_roots_take_precedence() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let light = WEIGHT.replace("\"Weight\"@en", "\"Light weight\"@en");
    write_model(first.path(), "com.example.weight", "1.0.0", "Weight.ttl", &light);
    write_model(second.path(), "com.example.weight", "1.0.0", "Weight.ttl", WEIGHT);

    let strategy = FirstSuccess::new()
        .with(FileSystemStrategy::new(first.path()))
        .with(FileSystemStrategy::new(second.path()));
    let model = AspectModelLoader::new()
        .with_strategy(strategy)
        .load_str(&document(VEHICLE))
        .unwrap();
    let weight = model
        .element_by_urn(&urn("urn:samm:com.example.weight:1.0.0#Weight"))
        .unwrap();
    let names = &model.element(weight).unwrap().base().preferred_names;
    assert_eq!(names.get("en"), Some("Light weight"));
}

#[test]
fn a_document_reached_twice_is_loaded_once() {
    let root = tempfile::tempdir().unwrap();
    let weight = write_model(root.path(), "com.example.weight", "1.0.0", "Weight.ttl", WEIGHT);
    let vehicle = write_model(root.path(), "com.example.vehicle", "1.0.0", "Vehicle.ttl", VEHICLE);
    let model = AspectModelLoader::new()
        .with_strategy(FileSystemStrategy::new(root.path()))
        .load_files(&[vehicle, weight.clone(), weight])
        .unwrap();
    assert_eq!(model.documents().len(), 2);
    assert_eq!(
        model.aspects().next().unwrap().properties,
        vec![model
            .element_by_urn(&urn("urn:samm:com.example.weight:1.0.0#Weight"))
            .unwrap()]
    );
}

#[test]
fn mutually_referring_documents_terminate() {
    let ping = r#"
        @prefix pong: <urn:samm:com.example.pong:1.0.0#> .
        @prefix : <urn:samm:com.example.ping:1.0.0#> .
        :Ping a samm:Entity ; samm:properties ( :toPong ) .
        :toPong a samm:Property ;
            samm:characteristic [ a samm-c:SingleEntity ; samm:dataType pong:Pong ] .
    "#;
    let pong = r#"
        @prefix ping: <urn:samm:com.example.ping:1.0.0#> .
        @prefix : <urn:samm:com.example.pong:1.0.0#> .
        :Pong a samm:Entity ; samm:properties ( :toPing ) .
        :toPing a samm:Property ;
            samm:characteristic [ a samm-c:SingleEntity ; samm:dataType ping:Ping ] .
    "#;
    let strategy = InMemoryStrategy::new(vec![
        parse_turtle(&document(ping), Some(Origin::Memory("ping".into()))).unwrap(),
        parse_turtle(&document(pong), Some(Origin::Memory("pong".into()))).unwrap(),
    ]);
    let model = AspectModelLoader::new()
        .with_strategy(strategy)
        .load_urns(&[urn("urn:samm:com.example.ping:1.0.0#Ping")])
        .unwrap();
    assert_eq!(model.documents().len(), 2);

    let arena = model.arena();
    let ping = model.element_by_urn(&urn("urn:samm:com.example.ping:1.0.0#Ping")).unwrap();
    let pong = model.element_by_urn(&urn("urn:samm:com.example.pong:1.0.0#Pong")).unwrap();
    let target = |entity| {
        let property = arena.entity(entity).unwrap().properties[0];
        let characteristic = arena.property(property).unwrap().characteristic.unwrap();
        arena.effective_data_type(characteristic).cloned()
    };
    assert_eq!(target(ping), Some(Type::Entity(pong)));
    assert_eq!(target(pong), Some(Type::Entity(ping)));
}

#[test]
fn configuration_files_name_models_roots() {
    let dir = tempfile::tempdir().unwrap();
    write_model(&dir.path().join("models"), "com.example.weight", "1.0.0", "Weight.ttl", WEIGHT);
    let config_path = dir.path().join("loader.toml");
    std::fs::write(&config_path, "models_roots = [\"models\"]\n").unwrap();
    let config = LoaderConfig::from_path(&config_path).unwrap();
    let model = AspectModelLoader::from_config(&config)
        .load_str(&document(VEHICLE))
        .unwrap();
    assert_eq!(model.documents().len(), 2);
}
