//! Programmatic construction next to loaded models.

mod common;

use aspect_loader::builder;
use aspect_loader::model::{CollectionType, CollectionValue, ElementArena, ScalarValue, Type, Value};
use aspect_loader::{AspectModelLoader, BuildError};
use common::{document, urn};

const XSD_INT: &str = "http://www.w3.org/2001/XMLSchema#int";
const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

#[test]
fn built_collections_accept_matching_collection_values() {
    let mut arena = ElementArena::new();
    let int = Type::Scalar(XSD_INT.into());
    for (characteristic, collection_type) in [
        (builder::set(), CollectionType::Set),
        (builder::list(), CollectionType::List),
    ] {
        let id = characteristic.data_type(int.clone()).build(&mut arena).unwrap();
        let values = ["3", "1", "2"]
            .into_iter()
            .map(|n| Value::Scalar(ScalarValue::parse(n, XSD_INT).unwrap()))
            .collect();
        let value = Value::Collection(CollectionValue::new(collection_type, Some(int.clone()), values));
        let actual = arena.type_of_value(&value).unwrap();
        let declared = arena.effective_data_type(id).unwrap();
        assert!(arena.is_type_or_subtype_of(&actual, declared));
        assert!(arena.conforms(&value, id));
        assert!(builder::collection_value(value.as_collection().unwrap().clone())
            .build(&mut arena)
            .is_ok());
    }
}

#[test]
fn builder_and_loader_agree_on_mandatory_properties() {
    let urn_of = |name: &str| urn(&format!("urn:samm:com.example:1.0.0#{name}"));
    let mut arena = ElementArena::new();
    let text = builder::characteristic()
        .data_type(Type::Scalar(XSD_STRING.into()))
        .build(&mut arena)
        .unwrap();
    let name = builder::property(urn_of("name")).characteristic(text).build(&mut arena).unwrap();
    let nickname = builder::property(urn_of("nickname")).characteristic(text).build(&mut arena).unwrap();
    let optional = builder::property_reference(nickname).optional(true).build(&mut arena).unwrap();
    let person = builder::entity(urn_of("Person"))
        .property(name)
        .property(optional)
        .build(&mut arena)
        .unwrap();

    let built = builder::entity_instance(person)
        .literal(nickname, "Bob", XSD_STRING)
        .build(&mut arena);
    let Err(BuildError::MissingPropertyValue { property: built, .. }) = built else {
        panic!("expected a missing property value");
    };

    let loaded = AspectModelLoader::new().load_str(&document(
        r#"
        @prefix : <urn:samm:com.example:1.0.0#> .
        :Person a samm:Entity ;
            samm:properties ( :name [ samm:property :nickname ; samm:optional true ] ) .
        :name a samm:Property ; samm:characteristic samm-c:Text .
        :nickname a samm:Property ; samm:characteristic samm-c:Text .
        :bob a :Person ; :nickname "Bob" .
        "#,
    ));
    let Err(aspect_loader::ResolutionError::Load(aspect_loader::LoadError::MissingPropertyValue {
        property: loaded,
        ..
    })) = loaded
    else {
        panic!("expected a missing property value");
    };
    assert_eq!(built, loaded);
}

#[test]
fn builders_extend_loaded_models() {
    let model = AspectModelLoader::new()
        .load_str(&document(
            r#"
            @prefix : <urn:samm:com.example:1.0.0#> .
            :Shape a samm:AbstractEntity ; samm:properties ( :label ) .
            :label a samm:Property ; samm:characteristic samm-c:Text .
            "#,
        ))
        .unwrap();
    let shape = model
        .element_by_urn(&urn("urn:samm:com.example:1.0.0#Shape"))
        .unwrap();
    let label = model
        .element_by_urn(&urn("urn:samm:com.example:1.0.0#label"))
        .unwrap();

    let mut arena = model.arena().clone();
    let square = builder::entity(urn("urn:samm:com.example:1.0.0#Square"))
        .extends(shape)
        .build(&mut arena)
        .unwrap();
    let instance = builder::entity_instance(square)
        .literal(label, "a square", XSD_STRING)
        .build(&mut arena)
        .unwrap();
    assert!(arena.is_entity_subtype_of(square, shape));
    assert!(arena.get(instance).unwrap().as_entity_instance().unwrap().value_of(label).is_some());
    assert!(builder::entity_instance(shape).build(&mut arena).is_err());
}
