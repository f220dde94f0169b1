//! The built-in definitions graph.
//!
//! Renders the meta model's individuals (built-in Characteristics, Entities,
//! bound definitions, units and quantity kinds) and its class hierarchy as
//! triples. Every loading session merges this graph into its model graph, so
//! references to built-ins materialize like any other resource.

use std::sync::OnceLock;

use samm_metamodel::model::iris::{
    RDFS_SUB_CLASS_OF, RDF_FIRST, RDF_NIL, RDF_REST, RDF_TYPE, SAMM_DESCRIPTION,
    SAMM_PREFERRED_NAME, XSD_BOOLEAN, XSD_INTEGER,
};
use samm_metamodel::{IndividualValue, MetaModel};

use crate::graph::{Graph, Term, Triple};

/// The built-in definitions graph, built once.
#[must_use]
pub fn graph() -> &'static Graph {
    static GRAPH: OnceLock<Graph> = OnceLock::new();
    GRAPH.get_or_init(|| render(MetaModel::full()))
}

fn render(meta: &MetaModel) -> Graph {
    let mut graph = Graph::new();
    let mut lists = 0usize;

    for module in &meta.namespaces {
        for class in &module.classes {
            for parent in class.subclass_of {
                graph.insert(Triple::new(
                    Term::iri(class.id),
                    RDFS_SUB_CLASS_OF,
                    Term::iri(*parent),
                ));
            }
        }
    }

    for individual in meta.individuals() {
        let subject = Term::iri(individual.id);
        graph.insert(Triple::new(subject.clone(), RDF_TYPE, Term::iri(individual.type_)));
        graph.insert(Triple::new(
            subject.clone(),
            SAMM_PREFERRED_NAME,
            Term::lang_string(individual.label, "en"),
        ));
        if !individual.comment.is_empty() {
            graph.insert(Triple::new(
                subject.clone(),
                SAMM_DESCRIPTION,
                Term::lang_string(individual.comment, "en"),
            ));
        }
        for (predicate, value) in individual.properties {
            let object = match value {
                IndividualValue::Str(s) => Term::string(*s),
                IndividualValue::LangStr(s, lang) => Term::lang_string(*s, *lang),
                IndividualValue::Int(i) => Term::typed(i.to_string(), XSD_INTEGER),
                IndividualValue::Bool(b) => Term::typed(b.to_string(), XSD_BOOLEAN),
                IndividualValue::Typed(lexical, datatype) => Term::typed(*lexical, *datatype),
                IndividualValue::IriRef(iri) => Term::iri(*iri),
                IndividualValue::List(items) => {
                    let mut head = Term::iri(RDF_NIL);
                    for item in items.iter().rev() {
                        lists += 1;
                        let node = Term::Blank(format!("builtin-list-{lists}"));
                        graph.insert(Triple::new(node.clone(), RDF_FIRST, Term::iri(*item)));
                        graph.insert(Triple::new(node.clone(), RDF_REST, head));
                        head = node;
                    }
                    head
                }
            };
            graph.insert(Triple::new(subject.clone(), *predicate, object));
        }
    }

    graph
}
